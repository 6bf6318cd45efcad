//! Servers. The network layer of the whitelist service.
pub mod apis;
pub mod signals;
