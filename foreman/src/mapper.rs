//! Mapping between declarative attribute maps and API entities
//!
//! The build-entity-from-config / write-entity-into-state pair repeats for
//! every entity type; this trait is that pair. Each entity supplies its own
//! field set, the bindings stay a uniform template on top.

use tfbridge::{AttributeMap, State};

pub trait AttributeMapping: Sized {
    /// Build the entity from declarative input. Missing attributes take the
    /// entity's zero value.
    fn from_attributes(attrs: &AttributeMap) -> Self;

    /// Write the entity's fields back into an attribute map.
    fn write_attributes(&self, attrs: &mut AttributeMap);

    fn to_state(&self) -> State {
        let mut state = State::new();
        self.write_attributes(&mut state);
        state
    }
}
