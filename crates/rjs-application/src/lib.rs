//! Application Layer - RequireJS configuration
//!
//! Assembles the loader configuration from the domain ports.
//!
//! ## Use Cases
//!
//! - [`ConfigurationBuilder`]: accumulate paths, shims, dependencies and
//!   options, then produce the final [`rjs_domain::LoaderConfiguration`]
//!
//! ## Domain Services
//!
//! - [`domain_services::shim`]: shim optimization
//! - [`domain_services::location`]: location normalization and base URL resolution
//!
//! ## Dependencies
//!
//! This crate depends only on `rjs-domain` and pure libraries. Port
//! implementations are supplied by the caller.

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
