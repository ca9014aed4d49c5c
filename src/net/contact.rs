//! Contact form delivery.
//!
//! One POST per submission, JSON in and (optionally) JSON out. No retries:
//! every failure is terminal for that attempt and surfaces as a single
//! user-facing message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::state::contact::ContactPayload;

/// Placeholder relay endpoint, overridden per form via the component prop.
pub const FALLBACK_ENDPOINT: &str = "https://formspree.io/f/your_form_id";

/// Shown when the server rejects the submission without a usable message.
pub const REJECTED_FALLBACK: &str = "Failed to send message. Please try again.";

/// Shown when the request never completed.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered with a non-OK status.
    Rejected(String),
    /// Transport-level failure; no response at all.
    Network,
}

impl SubmitError {
    /// The message shown to the visitor.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(msg) => msg,
            Self::Network => NETWORK_ERROR_MESSAGE,
        }
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extract the display message from a rejection response body.
///
/// The relay may answer `{"error": "..."}`; that message is used verbatim.
/// A missing, unparseable, or message-less body falls back to the generic
/// rejection text.
pub fn rejection_message(body: Option<&str>) -> String {
    body.and_then(|b| serde_json::from_str::<ErrorBody>(b).ok())
        .and_then(|b| b.error)
        .unwrap_or_else(|| REJECTED_FALLBACK.to_owned())
}

/// POST the payload as JSON to the relay endpoint.
///
/// # Errors
///
/// `Rejected` for any non-OK status (any OK-range status is success,
/// whatever the body says), `Network` when no response arrived.
pub async fn send_message(endpoint: &str, payload: &ContactPayload) -> Result<(), SubmitError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|_| SubmitError::Network)?;

        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(err) => {
                log::error!("contact POST to {endpoint} failed: {err}");
                return Err(SubmitError::Network);
            }
        };

        if resp.ok() {
            return Ok(());
        }

        let body = resp.text().await.ok();
        Err(SubmitError::Rejected(rejection_message(body.as_deref())))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, payload);
        Err(SubmitError::Network)
    }
}
