//! Generation request client
//!
//! Issues exactly one multipart POST per `submit` and returns exactly one
//! terminal outcome to the caller; shared state is never mutated from here.

use contracts::api::{ApiErrorBody, GenerateReadmeResponse, FIELD_PROFILE, FIELD_REPO};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AbortController, FormData, Request, RequestInit, RequestMode, Response};

use super::state::{Artifact, ErrorCause, ErrorInfo, SubmissionInput};
use crate::config::ApiConfig;

/// A hung request is aborted after this deadline and surfaced as a network
/// failure; the transport imposes no timeout of its own.
const REQUEST_TIMEOUT_MS: u32 = 60_000;

#[derive(Clone)]
pub struct GenerationClient {
    endpoint: String,
}

impl GenerationClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            endpoint: config.generate_url(),
        }
    }

    /// Submit one generation request for a validated input.
    pub async fn submit(&self, input: &SubmissionInput) -> Result<Artifact, ErrorInfo> {
        let form = FormData::new().map_err(|e| network_error(&e))?;
        form.append_with_str(FIELD_PROFILE, input.profile())
            .map_err(|e| network_error(&e))?;
        form.append_with_str(FIELD_REPO, input.repo())
            .map_err(|e| network_error(&e))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form);

        if let Ok(controller) = AbortController::new() {
            opts.set_signal(Some(&controller.signal()));
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS).await;
                // No-op once the fetch has already settled.
                controller.abort();
            });
        }

        let request =
            Request::new_with_str_and_init(&self.endpoint, &opts).map_err(|e| network_error(&e))?;

        let window = web_sys::window().ok_or_else(|| ErrorInfo {
            cause: ErrorCause::Network,
            message: "no window".to_owned(),
        })?;
        let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| network_error(&e))?;
        let resp: Response = resp_value.dyn_into().map_err(|e| network_error(&e))?;

        if !resp.ok() {
            let body = read_body(&resp).await.unwrap_or_default();
            return Err(http_error(&resp, &body));
        }

        let text = read_body(&resp).await?;
        match serde_json::from_str::<GenerateReadmeResponse>(&text) {
            Ok(data) => Ok(Artifact {
                markdown: data.readme,
            }),
            Err(e) => Err(ErrorInfo {
                cause: ErrorCause::Decode,
                message: format!("unexpected response body: {e}"),
            }),
        }
    }
}

async fn read_body(resp: &Response) -> Result<String, ErrorInfo> {
    let promise = resp.text().map_err(|e| decode_error(&e))?;
    let text = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| decode_error(&e))?;
    text.as_string().ok_or_else(|| ErrorInfo {
        cause: ErrorCause::Decode,
        message: "response body is not text".to_owned(),
    })
}

fn http_error(resp: &Response, body: &str) -> ErrorInfo {
    let mut message = format!("HTTP {} {}", resp.status(), resp.status_text());
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        message = format!("{message}: {}", parsed.error);
    }
    ErrorInfo {
        cause: ErrorCause::Http,
        message,
    }
}

fn network_error(err: &JsValue) -> ErrorInfo {
    let raw = format!("{err:?}");
    let message = if raw.contains("AbortError") {
        format!("request timed out after {}s", REQUEST_TIMEOUT_MS / 1000)
    } else {
        raw
    };
    ErrorInfo {
        cause: ErrorCause::Network,
        message,
    }
}

fn decode_error(err: &JsValue) -> ErrorInfo {
    ErrorInfo {
        cause: ErrorCause::Decode,
        message: format!("{err:?}"),
    }
}
