//! Gateway settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `GATEWAY_*` environment variables, and config
//! files. Settings are resolved once at startup and never reloaded.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_PARTNER_BASE_URL: &str = "http://localhost:8081/";
const DEFAULT_CORE_BASE_URL: &str = "http://localhost:8082/core/";

/// Errors raised while resolving settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A downstream base URL did not parse or cannot carry a path.
    #[error("{setting} is not a usable base URL ({value}): {reason}")]
    InvalidBaseUrl {
        setting: &'static str,
        value: String,
        reason: String,
    },
    /// A duration setting was zero.
    #[error("{setting} must be greater than zero")]
    ZeroDuration { setting: &'static str },
}

/// Configuration values for the gateway process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GATEWAY")]
pub struct GatewaySettings {
    /// Interface the HTTP server binds to.
    pub bind_host: Option<String>,
    /// Port the HTTP server binds to.
    pub bind_port: Option<u16>,
    /// Base URL of the partner (event catalogue) service.
    pub partner_base_url: Option<String>,
    /// Base URL of the core (validation and reservation) service.
    pub core_base_url: Option<String>,
    /// Per downstream request timeout in milliseconds.
    pub request_timeout_ms: Option<u64>,
    /// Overall deadline in milliseconds for one payment.
    pub payment_deadline_ms: Option<u64>,
}

impl GatewaySettings {
    /// Return the bind host, falling back to all interfaces.
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Return the bind port, falling back to 8080.
    pub fn bind_port(&self) -> u16 {
        self.bind_port.unwrap_or(DEFAULT_BIND_PORT)
    }

    /// Resolve the partner service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the value is unusable.
    pub fn partner_base_url(&self) -> Result<Url, SettingsError> {
        parse_base_url(
            "partner_base_url",
            self.partner_base_url
                .as_deref()
                .unwrap_or(DEFAULT_PARTNER_BASE_URL),
        )
    }

    /// Resolve the core service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the value is unusable.
    pub fn core_base_url(&self) -> Result<Url, SettingsError> {
        parse_base_url(
            "core_base_url",
            self.core_base_url.as_deref().unwrap_or(DEFAULT_CORE_BASE_URL),
        )
    }

    /// Per downstream request timeout; `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroDuration`] for a zero value.
    pub fn request_timeout(&self) -> Result<Option<Duration>, SettingsError> {
        positive_millis("request_timeout_ms", self.request_timeout_ms)
    }

    /// Overall payment deadline; `None` disables it.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroDuration`] for a zero value.
    pub fn payment_deadline(&self) -> Result<Option<Duration>, SettingsError> {
        positive_millis("payment_deadline_ms", self.payment_deadline_ms)
    }
}

fn parse_base_url(setting: &'static str, value: &str) -> Result<Url, SettingsError> {
    let invalid = |reason: String| SettingsError::InvalidBaseUrl {
        setting,
        value: value.to_owned(),
        reason,
    };
    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) URL".to_owned()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_owned()));
    }
    Ok(url)
}

fn positive_millis(
    setting: &'static str,
    value: Option<u64>,
) -> Result<Option<Duration>, SettingsError> {
    match value {
        Some(0) => Err(SettingsError::ZeroDuration { setting }),
        other => Ok(other.map(Duration::from_millis)),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for gateway configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "GATEWAY_BIND_HOST",
        "GATEWAY_BIND_PORT",
        "GATEWAY_PARTNER_BASE_URL",
        "GATEWAY_CORE_BASE_URL",
        "GATEWAY_REQUEST_TIMEOUT_MS",
        "GATEWAY_PAYMENT_DEADLINE_MS",
    ];

    fn load_from_empty_args() -> GatewaySettings {
        GatewaySettings::load_from_iter([OsString::from("ticket-gateway")])
            .expect("config should load")
    }

    fn settings_with(partner: Option<&str>) -> GatewaySettings {
        GatewaySettings {
            bind_host: None,
            bind_port: None,
            partner_base_url: partner.map(str::to_owned),
            core_base_url: None,
            request_timeout_ms: None,
            payment_deadline_ms: None,
        }
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_host(), DEFAULT_BIND_HOST);
        assert_eq!(settings.bind_port(), DEFAULT_BIND_PORT);
        assert_eq!(
            settings.partner_base_url().expect("default parses").as_str(),
            DEFAULT_PARTNER_BASE_URL
        );
        assert_eq!(
            settings.core_base_url().expect("default parses").as_str(),
            DEFAULT_CORE_BASE_URL
        );
        assert_eq!(settings.request_timeout(), Ok(None));
        assert_eq!(settings.payment_deadline(), Ok(None));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("GATEWAY_BIND_HOST", Some("127.0.0.1".to_owned())),
            ("GATEWAY_BIND_PORT", Some("9090".to_owned())),
            ("GATEWAY_PARTNER_BASE_URL", Some("http://partner:7000/".to_owned())),
            ("GATEWAY_CORE_BASE_URL", Some("https://core.internal/api/".to_owned())),
            ("GATEWAY_REQUEST_TIMEOUT_MS", Some("2500".to_owned())),
            ("GATEWAY_PAYMENT_DEADLINE_MS", Some("8000".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_host(), "127.0.0.1");
        assert_eq!(settings.bind_port(), 9090);
        assert_eq!(
            settings.partner_base_url().expect("parses").as_str(),
            "http://partner:7000/"
        );
        assert_eq!(
            settings.core_base_url().expect("parses").as_str(),
            "https://core.internal/api/"
        );
        assert_eq!(
            settings.request_timeout(),
            Ok(Some(Duration::from_millis(2500)))
        );
        assert_eq!(
            settings.payment_deadline(),
            Ok(Some(Duration::from_millis(8000)))
        );
    }

    #[rstest]
    #[case::not_a_url("partner")]
    #[case::wrong_scheme("ftp://partner/")]
    #[case::opaque("mailto:ops@example.com")]
    #[case::query("http://partner/?x=1")]
    fn unusable_base_urls_are_rejected(#[case] value: &str) {
        let error = settings_with(Some(value))
            .partner_base_url()
            .expect_err("base URL must be rejected");
        assert!(
            matches!(
                error,
                SettingsError::InvalidBaseUrl {
                    setting: "partner_base_url",
                    ..
                }
            ),
            "unexpected error: {error:?}"
        );
    }

    #[rstest]
    fn zero_timeouts_are_rejected() {
        let mut settings = settings_with(None);
        settings.request_timeout_ms = Some(0);
        assert_eq!(
            settings.request_timeout(),
            Err(SettingsError::ZeroDuration {
                setting: "request_timeout_ms"
            })
        );
    }
}
