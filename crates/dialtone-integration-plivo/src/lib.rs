//! Plivo Integration for Dialtone
//!
//! This crate provides the Plivo telephony provider integration for the
//! Dialtone CRM service: credential verification, outbound call
//! placement, and webhook payload mapping.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dialtone_integration_plivo::{PlivoConfig, PlivoIntegration};
//!
//! let config = PlivoConfig::new("auth-id", "auth-token");
//! let integration = PlivoIntegration::new(config)?;
//! integration.verify_credentials().await?;
//! ```

mod client;
mod config;
mod integration;
mod webhook;

pub use client::PlivoClient;
pub use config::{PlivoConfig, DEFAULT_BASE_URL};
pub use integration::PlivoIntegration;
pub use webhook::parse_webhook;
