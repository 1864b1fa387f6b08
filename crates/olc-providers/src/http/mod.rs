//! HTTP Client
//!
//! One [`OslcHttpClient`] is built per run and shared by every adapter. It
//! wraps a `reqwest::Client` and attaches the run's credentials to each
//! request.

pub mod client;

pub use client::{Credentials, HttpClientConfig, OslcHttpClient};
pub use crate::utils::HttpResponseUtils;
