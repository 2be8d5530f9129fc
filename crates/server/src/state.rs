use service::Services;

/// Shared handler state. Cloned per request; every service is `Arc`-backed.
#[derive(Clone)]
pub struct ServerState {
    pub services: Services,
}

impl ServerState {
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}
