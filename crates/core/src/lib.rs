//! Merchdesk Core - Shared types library.
//!
//! This crate provides common types used across all Merchdesk components:
//! - `admin` - Product admin backend-for-frontend (Tailscale-only)
//! - `integration-tests` - End-to-end tests against a running instance
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
