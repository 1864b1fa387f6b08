//! Existence Probe Adapters

pub mod http;

pub use http::HttpResourceProbe;
