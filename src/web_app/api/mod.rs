// web_app/api/mod.rs - Server-side access to the record service
//
// This module holds the service configuration and the HTTP client that
// record_items forwards to. Compiled for the server only.

pub mod client;
pub mod config;
