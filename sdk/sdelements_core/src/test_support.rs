//! Test helpers for crates built on top of `sdelements_core`.
//!
//! Enabled with the `test-support` feature.

use wiremock::MockServer;

use crate::auth::SdeCredential;
use crate::client::SdeClient;

/// Test API token (not a real token).
pub const TEST_API_TOKEN: &str = "test-api-token";

/// `Authorization` header value sent by clients from [`setup_mock_client`].
pub const TEST_AUTHORIZATION: &str = "Token test-api-token";

/// Create a test client pointed at a mock server over plain HTTP.
pub async fn setup_mock_client(server: &MockServer) -> SdeClient {
    SdeClient::builder()
        .credential(SdeCredential::api_token(TEST_API_TOKEN))
        .scheme("http")
        .server_host(server.address().to_string())
        .build()
        .expect("should build client")
}
