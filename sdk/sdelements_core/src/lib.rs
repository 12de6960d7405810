#![doc = include_str!("../README.md")]

pub mod auth;
pub mod client;
pub mod error;
pub mod request;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use client::SdeClient;
pub use error::{SdeError, SdeResult};
