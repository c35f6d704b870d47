//! Merchdesk Admin library.
//!
//! This crate provides the product admin backend-for-frontend as a
//! library, allowing it to be tested and reused.
//!
//! # Security
//!
//! This crate holds HIGH PRIVILEGE access to the Shopify Admin API.
//! Only deploy on Tailscale-protected infrastructure.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod routes;
pub mod shopify;
pub mod state;
