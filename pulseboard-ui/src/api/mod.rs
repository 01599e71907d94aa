//! API Client
//!
//! HTTP client for communicating with the Pulseboard API.

mod client;

pub use client::*;
