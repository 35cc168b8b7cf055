pub mod client;

pub use client::{UpstreamClient, DEFAULT_BASE_URL};
