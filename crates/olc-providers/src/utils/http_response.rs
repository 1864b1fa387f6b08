//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from the repository and
//! the link index.

use olc_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Map a non-success status to a domain error
    ///
    /// 401 becomes an authentication error, 404 a not-found error, anything
    /// else a repository error carrying the response body.
    pub async fn check_status(response: Response, operation: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let code = status.as_u16();

        Err(match code {
            401 => Error::authentication(format!("{operation}: authentication failed")),
            404 => Error::not_found(format!("{operation}: {error_text}")),
            500..=599 => Error::repository(format!("{operation}: server error ({code}): {error_text}")),
            _ => Error::repository(format!("{operation}: request failed ({code}): {error_text}")),
        })
    }

    /// Check response status and parse JSON
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        operation: &str,
    ) -> Result<T> {
        let response = Self::check_status(response, operation).await?;
        response
            .json()
            .await
            .map_err(|e| Error::repository(format!("{operation}: response parse failed: {e}")))
    }
}
