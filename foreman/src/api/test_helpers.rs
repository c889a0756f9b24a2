//! Test helpers for the Foreman API client

#[cfg(test)]
pub fn test_client(url: &str) -> super::Client {
    super::Client::new(super::ClientConfig {
        server_url: url.to_string(),
        username: "admin".to_string(),
        password: "changeme".to_string(),
        organization_id: Some(2),
        location_id: Some(3),
        insecure: true,
    })
    .unwrap()
}

#[cfg(test)]
pub fn test_client_without_tenancy(url: &str) -> super::Client {
    super::Client::new(super::ClientConfig {
        server_url: url.to_string(),
        username: "admin".to_string(),
        password: "changeme".to_string(),
        organization_id: None,
        location_id: None,
        insecure: true,
    })
    .unwrap()
}
