//! Helpers for testing the whitelist service.
pub mod configuration;
