//! Reqwest-backed client shared by every downstream adapter.
//!
//! This client owns transport details only: path expansion against the
//! configured base URL, trace propagation, timeout and transport error
//! mapping, and JSON decoding. Non-2xx answers are surfaced raw as
//! [`DownstreamError::Status`]; interpreting them is the caller's job.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::ports::DownstreamError;
use crate::domain::{TRACE_ID_HEADER, TraceId};

/// HTTP client bound to one downstream service's base URL.
#[derive(Debug, Clone)]
pub struct DownstreamClient {
    service: &'static str,
    client: Client,
    base_url: Url,
}

impl DownstreamClient {
    /// Build a pooled client for `service` rooted at `base_url`.
    ///
    /// `timeout` applies to each request; `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        service: &'static str,
        base_url: Url,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            service,
            client: builder.build()?,
            base_url,
        })
    }

    /// Issue one request and decode a 2xx body as `T`.
    ///
    /// `template` is a relative path whose `{name}` segments are replaced by
    /// the matching entry of `params`, percent-encoded as a single segment.
    ///
    /// # Errors
    ///
    /// - [`DownstreamError::InvalidRequest`] when a placeholder has no value.
    /// - [`DownstreamError::Connection`] / [`DownstreamError::Timeout`] when no
    ///   response arrived.
    /// - [`DownstreamError::Status`] with the raw body for non-2xx answers.
    /// - [`DownstreamError::Decode`] when a 2xx body does not decode as `T`.
    pub async fn call<T>(
        &self,
        method: Method,
        template: &str,
        params: &[(&str, &str)],
    ) -> Result<T, DownstreamError>
    where
        T: DeserializeOwned,
    {
        let url = expand_path(&self.base_url, template, params)?;
        debug!(service = self.service, %method, template, "calling downstream service");

        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(trace_id) = TraceId::current() {
            request = request.header(TRACE_ID_HEADER, trace_id.to_string());
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(
                service = self.service,
                status = status.as_u16(),
                body = %body_preview(body.as_ref()),
                "downstream service answered with an error status"
            );
            return Err(DownstreamError::status(
                status.as_u16(),
                String::from_utf8_lossy(body.as_ref()).into_owned(),
            ));
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            DownstreamError::decode(format!(
                "{} returned an unexpected body: {error}",
                self.service
            ))
        })
    }
}

/// Resolve `template` against `base`, substituting `{name}` segments.
fn expand_path(
    base: &Url,
    template: &str,
    params: &[(&str, &str)],
) -> Result<Url, DownstreamError> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            DownstreamError::invalid_request(format!("base URL {base} cannot carry a path"))
        })?;
        segments.pop_if_empty();
        for segment in template.split('/').filter(|segment| !segment.is_empty()) {
            let value = match placeholder_name(segment) {
                Some(name) => lookup(params, name)?,
                None => segment,
            };
            segments.push(value);
        }
    }
    url.set_query(None);
    Ok(url)
}

fn placeholder_name(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

fn lookup<'a>(params: &[(&str, &'a str)], name: &str) -> Result<&'a str, DownstreamError> {
    let value = params
        .iter()
        .find_map(|(key, value)| (*key == name).then_some(*value))
        .ok_or_else(|| {
            DownstreamError::invalid_request(format!("missing path parameter `{name}`"))
        })?;
    // Dot segments would be normalised away by the URL parser.
    if value.is_empty() || value == "." || value == ".." {
        return Err(DownstreamError::invalid_request(format!(
            "path parameter `{name}` is not a usable path segment"
        )));
    }
    Ok(value)
}

fn map_transport_error(error: reqwest::Error) -> DownstreamError {
    if error.is_timeout() {
        DownstreamError::timeout(error.to_string())
    } else if error.is_decode() {
        DownstreamError::decode(error.to_string())
    } else if error.is_builder() {
        DownstreamError::invalid_request(error.to_string())
    } else {
        DownstreamError::connection(error.to_string())
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
