//! Helpers shared by the HTTP-level tests

use wiremock::MockServer;

use crate::{Credentials, SttClient};

pub const USERNAME: &str = "apikey";
pub const PASSWORD: &str = "secret";

/// Client pointed at a mock server
pub fn client_for(server: &MockServer) -> SttClient {
    SttClient::new(server.uri(), Credentials::new(USERNAME, PASSWORD))
}
