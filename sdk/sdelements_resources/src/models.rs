//! API paths shared across resource modules.

/// Business unit collection path.
pub const BUSINESS_UNITS_PATH: &str = "/api/v2/business-units/";

/// Application collection path.
pub const APPLICATIONS_PATH: &str = "/api/v2/applications/";
