//! # SD Elements Resources
//!
//! Business unit and application management for the SD Elements Rust SDK.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sdelements_core::auth::SdeCredential;
//! use sdelements_core::client::SdeClient;
//! use sdelements_resources::application::{self, ApplicationCreateRequest};
//! use sdelements_resources::business_unit::{self, BusinessUnitCreateRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SdeClient::builder()
//!         .credential(SdeCredential::from_env()?)
//!         .build()?;
//!
//!     let request = BusinessUnitCreateRequest::builder()
//!         .name("Payments")
//!         .user("alice@example.com")
//!         .group("G1")
//!         .build()?;
//!     let unit = business_unit::create(&client, &request).await?;
//!
//!     let unit_id = unit.id().cloned().unwrap_or_default();
//!     let app = application::create(&client, &ApplicationCreateRequest::new(unit_id, "Checkout")).await?;
//!     println!("Created application: {:?}", app.id());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - **Business unit**: a top-level organizational grouping containing users,
//!   groups and applications.
//! - **Application**: a resource owned by a business unit, created with a name
//!   and an optional priority tier.
//!
//! ## Modules
//!
//! - [`business_unit`] - Create business units
//! - [`application`] - Create applications inside a business unit

pub mod application;
pub mod business_unit;
pub mod models;
