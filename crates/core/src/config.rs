use serde::Deserialize;
use std::env;

use crate::error::HeaderResult;
use crate::headers::{
    CacheControl, ContentSecurityPolicy, ContentTypeOptions, ExpectCt, FeaturePolicy,
    FrameOptions, Hsts, ReferrerPolicy, XssProtection,
};
use crate::policy::{HeaderConfig, HeaderConfigBuilder};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSection,
    pub logging: LoggingSection,
    #[serde(default)]
    pub headers: HeadersSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    pub env: String,
    pub name: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    pub log_format: String,
    pub request_id_header: String,
}

/// Raw per-header overrides.
///
/// Unset keeps the default for that header, `off`/`disable` removes it and
/// any other string is sent verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadersSection {
    pub cache_control: Option<String>,
    pub csp: Option<String>,
    pub feature_policy: Option<String>,
    pub hsts: Option<String>,
    pub referrer_policy: Option<String>,
    pub content_type_options: Option<String>,
    pub frame_options: Option<String>,
    pub xss_protection: Option<String>,
    pub expect_ct: Option<String>,
    #[serde(default)]
    pub emit_expect_ct: bool,
}

enum Override<'a> {
    Keep,
    Disable,
    Raw(&'a str),
}

fn parse_override(value: &Option<String>) -> Override<'_> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Override::Keep,
        Some(v) if v.eq_ignore_ascii_case("off") || v.eq_ignore_ascii_case("disable") => {
            Override::Disable
        }
        Some(v) => Override::Raw(v),
    }
}

impl HeadersSection {
    pub fn to_header_config(&self) -> HeaderConfig {
        let mut builder = HeaderConfigBuilder::new().emit_expect_ct(self.emit_expect_ct);

        // Families absent by default stay absent on Keep.
        match parse_override(&self.cache_control) {
            Override::Keep => {}
            Override::Disable => builder = builder.cache_control(None),
            Override::Raw(v) => builder = builder.cache_control(CacheControl::new().set(v)),
        }
        match parse_override(&self.csp) {
            Override::Keep | Override::Disable => {}
            Override::Raw(v) => builder = builder.csp(ContentSecurityPolicy::new().set(v)),
        }
        match parse_override(&self.feature_policy) {
            Override::Keep | Override::Disable => {}
            Override::Raw(v) => builder = builder.feature_policy(FeaturePolicy::new().set(v)),
        }
        match parse_override(&self.hsts) {
            Override::Keep => {}
            Override::Disable => builder = builder.hsts(None),
            Override::Raw(v) => builder = builder.hsts(Hsts::new().set(v)),
        }
        match parse_override(&self.referrer_policy) {
            Override::Keep => {}
            Override::Disable => builder = builder.referrer_policy(None),
            Override::Raw(v) => builder = builder.referrer_policy(ReferrerPolicy::new().set(v)),
        }
        match parse_override(&self.content_type_options) {
            Override::Keep => {}
            Override::Disable => builder = builder.content_type_options(None),
            Override::Raw(v) => {
                builder = builder.content_type_options(ContentTypeOptions::new().set(v))
            }
        }
        match parse_override(&self.frame_options) {
            Override::Keep => {}
            Override::Disable => builder = builder.frame_options(None),
            Override::Raw(v) => builder = builder.frame_options(FrameOptions::new().set(v)),
        }
        match parse_override(&self.xss_protection) {
            Override::Keep => {}
            Override::Disable => builder = builder.xss_protection(None),
            Override::Raw(v) => builder = builder.xss_protection(XssProtection::new().set(v)),
        }
        match parse_override(&self.expect_ct) {
            Override::Keep | Override::Disable => {}
            Override::Raw(v) => builder = builder.expect_ct(ExpectCt::new().set(v)),
        }

        builder.build()
    }
}

impl AppConfig {
    pub fn load() -> HeaderResult<Self> {
        // Load .env if present
        let _ = dotenvy::dotenv();
        let mut builder = config::Config::builder()
            .set_default("app.env", env_or("APP_ENV", "local"))?
            .set_default("app.name", env_or("APP_NAME", "headwall"))?
            .set_default("app.host", env_or("APP_HOST", "0.0.0.0"))?
            .set_default("app.port", env_or("APP_PORT", "8080"))?
            .set_default("logging.log_format", env_or("LOG_FORMAT", "text"))?
            .set_default("logging.request_id_header", env_or("REQUEST_ID_HEADER", "x-request-id"))?
            .set_default("headers.emit_expect_ct", env_or("HEADERS_EMIT_EXPECT_CT", "false"))?;

        for (key, var) in [
            ("headers.cache_control", "HEADERS_CACHE_CONTROL"),
            ("headers.csp", "HEADERS_CSP"),
            ("headers.feature_policy", "HEADERS_FEATURE_POLICY"),
            ("headers.hsts", "HEADERS_HSTS"),
            ("headers.referrer_policy", "HEADERS_REFERRER_POLICY"),
            ("headers.content_type_options", "HEADERS_CONTENT_TYPE_OPTIONS"),
            ("headers.frame_options", "HEADERS_FRAME_OPTIONS"),
            ("headers.xss_protection", "HEADERS_XSS_PROTECTION"),
            ("headers.expect_ct", "HEADERS_EXPECT_CT"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        let cfg = builder.build()?;
        Ok(cfg.try_deserialize()?)
    }

    pub fn is_production(&self) -> bool { self.app.env == "production" }
    pub fn bind_addr(&self) -> String { format!("{}:{}", self.app.host, self.app.port) }
    pub fn header_config(&self) -> HeaderConfig { self.headers.to_header_config() }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::HeaderFamily;

    #[test]
    fn test_unset_section_matches_defaults() {
        assert_eq!(HeadersSection::default().to_header_config(), HeaderConfig::default());
    }

    #[test]
    fn test_disable_and_raw_overrides() {
        let section = HeadersSection {
            cache_control: Some("OFF".into()),
            csp: Some("default-src 'self'".into()),
            frame_options: Some("DENY".into()),
            xss_protection: Some(" disable ".into()),
            ..Default::default()
        };
        let config = section.to_header_config();
        assert!(config.cache_control().is_none());
        assert!(config.xss_protection().is_none());
        assert_eq!(
            config.value_of(HeaderFamily::ContentSecurityPolicy).as_deref(),
            Some("default-src 'self'")
        );
        assert_eq!(config.value_of(HeaderFamily::FrameOptions).as_deref(), Some("DENY"));
        assert_eq!(
            config.value_of(HeaderFamily::StrictTransportSecurity).as_deref(),
            Some("max-age=63072000; includeSubdomains")
        );
    }

    #[test]
    fn test_expect_ct_override() {
        let section = HeadersSection {
            expect_ct: Some("max-age=60".into()),
            emit_expect_ct: true,
            ..Default::default()
        };
        let headers = section.to_header_config().headers();
        assert_eq!(headers.last(), Some(&("Expect-CT", "max-age=60".to_string())));
    }
}
