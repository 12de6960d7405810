//! Business unit management for SD Elements.
//!
//! A business unit groups users, groups and applications. Creating one is a
//! single `POST /api/v2/business-units/`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sdelements_core::client::SdeClient;
//! use sdelements_resources::business_unit::{self, BusinessUnitCreateRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SdeClient::new("your-token")?;
//!
//! let request = BusinessUnitCreateRequest::builder()
//!     .name("Payments")
//!     .users(["alice@example.com", "bob@example.com"])
//!     .default_user("carol@example.com", "UR4")
//!     .build()?;
//!
//! let unit = business_unit::create(&client, &request).await?;
//! println!("Created business unit: {:?}", unit.id());
//! # Ok(())
//! # }
//! ```

use sdelements_core::client::SdeClient;
use sdelements_core::error::{SdeError, SdeResult};
use serde::{Deserialize, Serialize, Serializer};

use crate::models::BUSINESS_UNITS_PATH;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A request to create a business unit.
///
/// Only what the caller supplies is sent: empty lists and `all_users = false`
/// leave their keys out of the body. No combination is rejected locally, so
/// `all_users` with explicit users is left for the server to judge.
///
/// ```rust
/// use sdelements_resources::business_unit::BusinessUnitCreateRequest;
///
/// let request = BusinessUnitCreateRequest::new("Test BU");
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     serde_json::json!({"name": "Test BU"})
/// );
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct BusinessUnitCreateRequest {
    /// Name of the business unit. May be empty.
    pub name: String,

    /// Member emails, sent as `[{"email": ...}]`.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_users"
    )]
    pub users: Vec<String>,

    /// Member group ids, sent as `[{"id": ...}]`.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_groups"
    )]
    pub groups: Vec<String>,

    /// Default users for new projects, sent verbatim.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_users: Vec<DefaultUser>,

    /// Default groups for new projects, sent verbatim.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_groups: Vec<DefaultGroup>,

    /// Add every user in the organization.
    #[serde(skip_serializing_if = "is_false")]
    pub all_users: bool,
}

/// A user assigned to new projects of the business unit with a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultUser {
    pub email: String,
    pub role: String,
}

/// A group assigned to new projects of the business unit with a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultGroup {
    pub id: String,
    pub role: String,
}

#[derive(Serialize)]
struct UserRef<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct GroupRef<'a> {
    id: &'a str,
}

fn serialize_users<S: Serializer>(users: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(users.iter().map(|email| UserRef { email }))
}

fn serialize_groups<S: Serializer>(groups: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(groups.iter().map(|id| GroupRef { id }))
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Builder for [`BusinessUnitCreateRequest`].
#[derive(Debug, Default)]
pub struct BusinessUnitCreateRequestBuilder {
    name: Option<String>,
    users: Vec<String>,
    groups: Vec<String>,
    default_users: Vec<DefaultUser>,
    default_groups: Vec<DefaultGroup>,
    all_users: bool,
}

impl BusinessUnitCreateRequest {
    /// A request carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a new builder for `BusinessUnitCreateRequest`.
    pub fn builder() -> BusinessUnitCreateRequestBuilder {
        BusinessUnitCreateRequestBuilder::default()
    }
}

impl BusinessUnitCreateRequestBuilder {
    /// Set the business unit name.
    ///
    /// **Required.**
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a member by email.
    pub fn user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Add members by email.
    pub fn users<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.users.extend(emails.into_iter().map(Into::into));
        self
    }

    /// Add a member group by id.
    pub fn group(mut self, id: impl Into<String>) -> Self {
        self.groups.push(id.into());
        self
    }

    /// Add member groups by id.
    pub fn groups<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add a default user with a role.
    pub fn default_user(mut self, email: impl Into<String>, role: impl Into<String>) -> Self {
        self.default_users.push(DefaultUser {
            email: email.into(),
            role: role.into(),
        });
        self
    }

    /// Add a default group with a role.
    pub fn default_group(mut self, id: impl Into<String>, role: impl Into<String>) -> Self {
        self.default_groups.push(DefaultGroup {
            id: id.into(),
            role: role.into(),
        });
        self
    }

    /// Add every user in the organization to the business unit.
    pub fn all_users(mut self, all_users: bool) -> Self {
        self.all_users = all_users;
        self
    }

    /// Build the request, returning an error if the name was never set.
    pub fn build(self) -> SdeResult<BusinessUnitCreateRequest> {
        let name = self
            .name
            .ok_or_else(|| SdeError::Builder("name is required".into()))?;

        Ok(BusinessUnitCreateRequest {
            name,
            users: self.users,
            groups: self.groups,
            default_users: self.default_users,
            default_groups: self.default_groups,
            all_users: self.all_users,
        })
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A business unit as returned by the server, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessUnit(serde_json::Map<String, serde_json::Value>);

impl BusinessUnit {
    /// The server-assigned id.
    pub fn id(&self) -> Option<&serde_json::Value> {
        self.0.get("id")
    }

    /// The business unit name.
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

/// Create a business unit.
///
/// Not idempotent: sending the same request twice creates two business units.
///
/// # Tracing
///
/// Emits a span named `sde::business_units::create`.
#[tracing::instrument(name = "sde::business_units::create", skip(client, request))]
pub async fn create(
    client: &SdeClient,
    request: &BusinessUnitCreateRequest,
) -> SdeResult<BusinessUnit> {
    tracing::debug!("creating business unit");

    let body = client.post(BUSINESS_UNITS_PATH, request).await?;
    let unit = serde_json::from_value::<BusinessUnit>(body)?;

    tracing::debug!(business_unit_id = ?unit.id(), "business unit created");
    Ok(unit)
}
