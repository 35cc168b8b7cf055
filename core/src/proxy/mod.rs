//! Proxy module - same-origin relay in front of the ElevenLabs API
//!
//! Stateless by construction: every handler resolves a credential, issues
//! exactly one upstream call, and relays the response. Nothing is stored
//! between requests.

pub mod credentials;
pub mod error;
pub mod handlers;
pub mod server;
pub mod upstream;

pub use error::ProxyError;
pub use server::{AppState, ProxyServer};
pub use upstream::UpstreamClient;
