//! ConvAI Core Library
//! Shared logic for configuration, credential resolution, and the proxy server

pub mod config;
pub mod proxy;
