//! Application management for SD Elements.
//!
//! Applications live inside a business unit. Creating one is a single
//! `POST /api/v2/applications/`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sdelements_core::client::SdeClient;
//! use sdelements_resources::application::{self, ApplicationCreateRequest, Priority};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SdeClient::new("your-token")?;
//!
//! let request = ApplicationCreateRequest::builder()
//!     .business_unit(12)
//!     .name("Checkout")
//!     .priority(Priority::High)
//!     .build()?;
//!
//! let app = application::create(&client, &request).await?;
//! println!("Created application: {:?}", app.id());
//! # Ok(())
//! # }
//! ```

use std::fmt;

use sdelements_core::client::SdeClient;
use sdelements_core::error::{SdeError, SdeResult};
use serde::{Deserialize, Serialize};

use crate::models::APPLICATIONS_PATH;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Priority tiers known to SD Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    #[serde(rename = "0-none")]
    None,
    #[serde(rename = "1-high")]
    High,
    #[serde(rename = "2-medium")]
    Medium,
    #[serde(rename = "3-low")]
    Low,
}

impl Priority {
    /// The wire value, e.g. `"1-high"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "0-none",
            Self::High => "1-high",
            Self::Medium => "2-medium",
            Self::Low => "3-low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

/// A request to create an application.
///
/// `priority` is sent verbatim and left out when unset. Values outside
/// [`Priority`] are passed through for the server to judge.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationCreateRequest {
    /// Id of the owning business unit, sent as given.
    pub business_unit: serde_json::Value,

    /// Application name.
    pub name: String,

    /// Optional priority tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Builder for [`ApplicationCreateRequest`].
#[derive(Debug, Default)]
pub struct ApplicationCreateRequestBuilder {
    business_unit: Option<serde_json::Value>,
    name: Option<String>,
    priority: Option<String>,
}

impl ApplicationCreateRequest {
    /// A request without a priority.
    pub fn new(business_unit: impl Into<serde_json::Value>, name: impl Into<String>) -> Self {
        Self {
            business_unit: business_unit.into(),
            name: name.into(),
            priority: None,
        }
    }

    /// Create a new builder for `ApplicationCreateRequest`.
    pub fn builder() -> ApplicationCreateRequestBuilder {
        ApplicationCreateRequestBuilder::default()
    }
}

impl ApplicationCreateRequestBuilder {
    /// Set the owning business unit id.
    ///
    /// **Required.**
    pub fn business_unit(mut self, id: impl Into<serde_json::Value>) -> Self {
        self.business_unit = Some(id.into());
        self
    }

    /// Set the application name.
    ///
    /// **Required.**
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the priority, either a [`Priority`] or a raw string.
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Build the request, returning an error if required fields are missing.
    pub fn build(self) -> SdeResult<ApplicationCreateRequest> {
        let business_unit = self
            .business_unit
            .ok_or_else(|| SdeError::Builder("business_unit is required".into()))?;
        let name = self
            .name
            .ok_or_else(|| SdeError::Builder("name is required".into()))?;

        Ok(ApplicationCreateRequest {
            business_unit,
            name,
            priority: self.priority,
        })
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// An application as returned by the server, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Application(serde_json::Map<String, serde_json::Value>);

impl Application {
    /// The server-assigned id.
    pub fn id(&self) -> Option<&serde_json::Value> {
        self.0.get("id")
    }

    /// The application name.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(|n| n.as_str())
    }

    /// Look up any field of the response.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// The raw response object.
    pub fn into_inner(self) -> serde_json::Map<String, serde_json::Value> {
        self.0
    }
}

// ---------------------------------------------------------------------------
// API functions
// ---------------------------------------------------------------------------

/// Create an application inside a business unit.
///
/// # Tracing
///
/// Emits a span named `sde::applications::create` with field `business_unit`.
#[tracing::instrument(
    name = "sde::applications::create",
    skip(client, request),
    fields(business_unit = %request.business_unit)
)]
pub async fn create(
    client: &SdeClient,
    request: &ApplicationCreateRequest,
) -> SdeResult<Application> {
    tracing::debug!("creating application");

    let body = client.post(APPLICATIONS_PATH, request).await?;
    let app = serde_json::from_value::<Application>(body)?;

    tracing::debug!(application_id = ?app.id(), "application created");
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdelements_core::test_support::{setup_mock_client, TEST_AUTHORIZATION};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn priority_wire_values() {
        assert_eq!(serde_json::to_string(&Priority::None).unwrap(), "\"0-none\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"1-high\"");
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"2-medium\"");
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"3-low\"");
        assert_eq!(String::from(Priority::Medium), "2-medium");
    }

    #[test]
    fn request_without_priority_has_no_priority_key() {
        let request = ApplicationCreateRequest::new("BU1", "App");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json, serde_json::json!({"business_unit": "BU1", "name": "App"}));
    }

    #[test]
    fn request_with_priority() {
        let request = ApplicationCreateRequest::builder()
            .business_unit(12)
            .name("App")
            .priority(Priority::Low)
            .build()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"business_unit": 12, "name": "App", "priority": "3-low"})
        );
    }

    #[test]
    fn unknown_priority_is_passed_through() {
        let request = ApplicationCreateRequest::builder()
            .business_unit(12)
            .name("App")
            .priority("9-urgent")
            .build()
            .unwrap();

        assert_eq!(request.priority.as_deref(), Some("9-urgent"));
    }

    #[test]
    fn builder_requires_business_unit_and_name() {
        let missing_unit = ApplicationCreateRequest::builder().name("App").build();
        assert!(matches!(missing_unit, Err(SdeError::Builder(_))));

        let missing_name = ApplicationCreateRequest::builder().business_unit(1).build();
        assert!(matches!(missing_name, Err(SdeError::Builder(_))));
    }

    #[tokio::test]
    async fn create_application_success() {
        let server = MockServer::start().await;
        let expected = serde_json::json!({
            "id": 7,
            "business_unit": {"id": "BU1"},
            "name": "Test App"
        });

        Mock::given(method("POST"))
            .and(path("/api/v2/applications/"))
            .and(header("Authorization", TEST_AUTHORIZATION))
            .and(header("Accept", "application/json"))
            .and(body_json(serde_json::json!({
                "business_unit": "BU1",
                "name": "Test App"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(&expected))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let app = create(&client, &ApplicationCreateRequest::new("BU1", "Test App"))
            .await
            .expect("should succeed");

        assert_eq!(app.id(), Some(&serde_json::json!(7)));
        assert_eq!(app.name(), Some("Test App"));
        assert_eq!(serde_json::to_value(&app).unwrap(), expected);
    }

    #[tokio::test]
    async fn create_application_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/applications/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"detail":"Not found."}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let err = create(&client, &ApplicationCreateRequest::new(999, "App"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), r#"404 Not Found: {"detail":"Not found."}"#);
    }
}
