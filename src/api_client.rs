pub mod prediction;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

/// Shown whenever a failure carries no usable `error` payload.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while processing the request";

/// Error payload the prediction service may return with a non-OK status.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Common POST request handler. Transport errors, non-OK statuses and
/// application error payloads all funnel into one `Err(message)` path:
/// the body's `error` field verbatim when present, otherwise
/// [`FALLBACK_ERROR_MESSAGE`].
pub async fn post<T, B>(url: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    log::debug!("POST request to: {}", url);

    let response = Request::post(url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - failed to serialize request: {}", url, e);
            FALLBACK_ERROR_MESSAGE.to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - request failed: {}", url, e);
            FALLBACK_ERROR_MESSAGE.to_string()
        })?;

    if !response.ok() {
        log::warn!("POST {} - non-OK response: {}", url, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("POST {} - API error: {}", url, err.error);
                err.error
            }
            Err(_) => {
                log::error!("POST {} - no error payload in response body", url);
                FALLBACK_ERROR_MESSAGE.to_string()
            }
        });
    }

    log::trace!("POST {} - response received, parsing JSON", url);
    let payload: T = response.json().await.map_err(|e| {
        log::error!("POST {} - failed to parse response: {}", url, e);
        FALLBACK_ERROR_MESSAGE.to_string()
    })?;

    log::info!("POST {} - success", url);
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_uses_error_field_verbatim() {
        let err: ErrorResponse = serde_json::from_str(r#"{"error": "invalid input"}"#).unwrap();
        assert_eq!(err.error, "invalid input");
    }

    #[test]
    fn test_body_without_error_field_does_not_parse() {
        let err: Result<ErrorResponse, _> = serde_json::from_str(r#"{"detail": "nope"}"#);
        assert!(err.is_err());
    }
}
