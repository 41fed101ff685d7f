//! WebSprix Integration for Dialtone
//!
//! This crate provides the WebSprix PBX telephony provider integration
//! for the Dialtone CRM service: dual credential verification, outbound
//! call placement, webhook payload mapping, and the PBX extras the CRM
//! UI consumes (IP phone settings, transfer targets).
//!
//! # Usage
//!
//! ```rust,ignore
//! use dialtone_integration_websprix::{WebSprixConfig, WebSprixIntegration};
//!
//! let config = WebSprixConfig::new("auth-id", "auth-token")
//!     .with_organization("org-id", "api-key");
//! let integration = WebSprixIntegration::new(config)?;
//! integration.verify_credentials().await?;
//! ```

mod client;
mod config;
mod integration;
mod webhook;

pub use client::WebSprixClient;
pub use config::{WebSprixConfig, DEFAULT_BASE_URL};
pub use integration::WebSprixIntegration;
pub use webhook::parse_webhook;
