//! Form relay client.
//!
//! Posts the live form's fields as multipart data to the form's `action`
//! and reports the HTTP status back to the controller. Failures are written
//! to the browser console here, since the page installs no `tracing`
//! subscriber.

use async_trait::async_trait;
use gloo_console as console;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use pf_core::form::{classify_status, Delay, FormTransport, SubmitRequest};
use pf_core::SubmitError;
use web_sys::{FormData, HtmlFormElement};

pub struct FetchTransport {
    form: HtmlFormElement,
}

impl FetchTransport {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }

    async fn post(&self, request: &SubmitRequest) -> Result<u16, SubmitError> {
        let body = FormData::new_with_form(&self.form)
            .map_err(|e| SubmitError::Transport(format!("{:?}", e)))?;

        let resp = Request::post(&request.url)
            .header("Accept", request.accept)
            .body(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(format!("fetch error: {}", e)))?;

        Ok(resp.status())
    }
}

#[async_trait(?Send)]
impl FormTransport for FetchTransport {
    async fn send(&self, request: &SubmitRequest) -> Result<u16, SubmitError> {
        let sent = self.post(request).await;
        if let Err(e) = sent.clone().and_then(classify_status) {
            console::warn!(format!("contact form submission failed: {e}"));
        }
        sent
    }
}

/// Revert timer backed by `setTimeout`.
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
