//! The configured set of response headers and how it is written to a
//! response.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{HeaderError, HeaderResult};
use crate::family::{HeaderBuilder, HeaderFamily};
use crate::headers::{
    CacheControl, ContentSecurityPolicy, ContentTypeOptions, ExpectCt, FeaturePolicy,
    FrameOptions, Hsts, ReferrerPolicy, XssProtection,
};

/// Destination for emitted headers. Appending never replaces an existing
/// value under the same name.
pub trait HeaderSink {
    fn append_header(&mut self, name: &'static str, value: String);
}

impl HeaderSink for HeaderMap {
    fn append_header(&mut self, name: &'static str, value: String) {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(header = name, error = %e, "invalid header name, skipped");
                return;
            }
        };
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                self.append(name, value);
            }
            Err(e) => {
                tracing::warn!(header = %name, error = %e, "invalid header value, skipped");
            }
        }
    }
}

impl HeaderSink for Vec<(String, String)> {
    fn append_header(&mut self, name: &'static str, value: String) {
        self.push((name.to_string(), value));
    }
}

/// Immutable set of optional header builders.
///
/// [`HeaderConfig::default`] enables Cache-control, Strict-Transport-Security,
/// Referrer-Policy, X-Content-Type-Options, X-Frame-Options and
/// X-XSS-Protection with their recommended presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    cache_control: Option<CacheControl>,
    csp: Option<ContentSecurityPolicy>,
    expect_ct: Option<ExpectCt>,
    feature_policy: Option<FeaturePolicy>,
    hsts: Option<Hsts>,
    referrer_policy: Option<ReferrerPolicy>,
    content_type_options: Option<ContentTypeOptions>,
    frame_options: Option<FrameOptions>,
    xss_protection: Option<XssProtection>,
    emit_expect_ct: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            cache_control: Some(CacheControl::new().recommended()),
            csp: None,
            expect_ct: None,
            feature_policy: None,
            hsts: Some(Hsts::new().recommended()),
            referrer_policy: Some(ReferrerPolicy::new().recommended()),
            content_type_options: Some(ContentTypeOptions::new().recommended()),
            frame_options: Some(FrameOptions::new().recommended()),
            xss_protection: Some(XssProtection::new().recommended()),
            emit_expect_ct: false,
        }
    }
}

impl HeaderConfig {
    pub fn builder() -> HeaderConfigBuilder {
        HeaderConfigBuilder::new()
    }

    /// A configuration with every family absent.
    pub fn empty() -> Self {
        Self {
            cache_control: None,
            csp: None,
            expect_ct: None,
            feature_policy: None,
            hsts: None,
            referrer_policy: None,
            content_type_options: None,
            frame_options: None,
            xss_protection: None,
            emit_expect_ct: false,
        }
    }

    pub fn cache_control(&self) -> Option<&CacheControl> {
        self.cache_control.as_ref()
    }

    pub fn csp(&self) -> Option<&ContentSecurityPolicy> {
        self.csp.as_ref()
    }

    pub fn expect_ct(&self) -> Option<&ExpectCt> {
        self.expect_ct.as_ref()
    }

    pub fn feature_policy(&self) -> Option<&FeaturePolicy> {
        self.feature_policy.as_ref()
    }

    pub fn hsts(&self) -> Option<&Hsts> {
        self.hsts.as_ref()
    }

    pub fn referrer_policy(&self) -> Option<&ReferrerPolicy> {
        self.referrer_policy.as_ref()
    }

    pub fn content_type_options(&self) -> Option<&ContentTypeOptions> {
        self.content_type_options.as_ref()
    }

    pub fn frame_options(&self) -> Option<&FrameOptions> {
        self.frame_options.as_ref()
    }

    pub fn xss_protection(&self) -> Option<&XssProtection> {
        self.xss_protection.as_ref()
    }

    /// Serialized value of a family, `None` when its builder is absent.
    pub fn value_of(&self, family: HeaderFamily) -> Option<String> {
        match family {
            HeaderFamily::CacheControl => self.cache_control.as_ref().map(HeaderBuilder::value),
            HeaderFamily::ContentSecurityPolicy => self.csp.as_ref().map(HeaderBuilder::value),
            HeaderFamily::FeaturePolicy => self.feature_policy.as_ref().map(HeaderBuilder::value),
            HeaderFamily::StrictTransportSecurity => self.hsts.as_ref().map(HeaderBuilder::value),
            HeaderFamily::ReferrerPolicy => self.referrer_policy.as_ref().map(HeaderBuilder::value),
            HeaderFamily::ContentTypeOptions => {
                self.content_type_options.as_ref().map(HeaderBuilder::value)
            }
            HeaderFamily::FrameOptions => self.frame_options.as_ref().map(HeaderBuilder::value),
            HeaderFamily::XssProtection => self.xss_protection.as_ref().map(HeaderBuilder::value),
            HeaderFamily::ExpectCt => self.expect_ct.as_ref().map(HeaderBuilder::value),
        }
    }

    /// Whether a present builder of this family is written to responses.
    /// Expect-CT is held but only sent when opted in.
    pub fn emits(&self, family: HeaderFamily) -> bool {
        family != HeaderFamily::ExpectCt || self.emit_expect_ct
    }

    /// Headers to send, in emission order.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        HeaderFamily::ORDER
            .into_iter()
            .filter(|family| self.emits(*family))
            .filter_map(|family| self.value_of(family).map(|value| (family.header_name(), value)))
            .collect()
    }

    /// Append one header per present family to `sink`.
    pub fn apply<S: HeaderSink + ?Sized>(&self, sink: &mut S) {
        for (name, value) in self.headers() {
            sink.append_header(name, value);
        }
    }

    /// Check that every present value is a legal HTTP header value.
    pub fn validate(&self) -> HeaderResult<()> {
        for family in HeaderFamily::ORDER {
            if let Some(value) = self.value_of(family) {
                if HeaderValue::from_str(&value).is_err() {
                    return Err(HeaderError::InvalidValue { header: family.header_name(), value });
                }
            }
        }
        Ok(())
    }
}

/// Builder for [`HeaderConfig`], starting from the defaults.
///
/// Every setter accepts either a builder or `None`.
#[must_use = "builder does nothing until you call build()"]
pub struct HeaderConfigBuilder {
    config: HeaderConfig,
}

impl HeaderConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: HeaderConfig::default(),
        }
    }

    pub fn cache_control(mut self, cache_control: impl Into<Option<CacheControl>>) -> Self {
        self.config.cache_control = cache_control.into();
        self
    }

    pub fn csp(mut self, csp: impl Into<Option<ContentSecurityPolicy>>) -> Self {
        self.config.csp = csp.into();
        self
    }

    pub fn expect_ct(mut self, expect_ct: impl Into<Option<ExpectCt>>) -> Self {
        self.config.expect_ct = expect_ct.into();
        self
    }

    pub fn feature_policy(mut self, feature_policy: impl Into<Option<FeaturePolicy>>) -> Self {
        self.config.feature_policy = feature_policy.into();
        self
    }

    pub fn hsts(mut self, hsts: impl Into<Option<Hsts>>) -> Self {
        self.config.hsts = hsts.into();
        self
    }

    pub fn referrer_policy(mut self, referrer_policy: impl Into<Option<ReferrerPolicy>>) -> Self {
        self.config.referrer_policy = referrer_policy.into();
        self
    }

    pub fn content_type_options(mut self, options: impl Into<Option<ContentTypeOptions>>) -> Self {
        self.config.content_type_options = options.into();
        self
    }

    pub fn frame_options(mut self, frame_options: impl Into<Option<FrameOptions>>) -> Self {
        self.config.frame_options = frame_options.into();
        self
    }

    pub fn xss_protection(mut self, xss_protection: impl Into<Option<XssProtection>>) -> Self {
        self.config.xss_protection = xss_protection.into();
        self
    }

    /// Send the Expect-CT header when a builder is configured.
    pub fn emit_expect_ct(mut self, emit: bool) -> Self {
        self.config.emit_expect_ct = emit;
        self
    }

    pub fn build(self) -> HeaderConfig {
        self.config
    }
}

impl Default for HeaderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{source, time};

    fn collect(config: &HeaderConfig) -> Vec<(String, String)> {
        let mut sink = Vec::new();
        config.apply(&mut sink);
        sink
    }

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_default_headers() {
        let headers = collect(&HeaderConfig::default());
        assert_eq!(
            headers,
            vec![
                pair("Cache-control", "no-cache, no-store, must-revalidate, max-age=0"),
                pair("Strict-Transport-Security", "max-age=63072000; includeSubdomains"),
                pair("Referrer-Policy", "no-referrer, strict-origin-when-cross-origin"),
                pair("X-Content-Type-Options", "nosniff"),
                pair("X-Frame-Options", "SAMEORIGIN"),
                pair("X-XSS-Protection", "1; mode=block"),
            ]
        );
    }

    #[test]
    fn test_custom_headers() {
        let config = HeaderConfig::builder()
            .cache_control(CacheControl::new().no_store().must_revalidate().proxy_revalidate())
            .csp(
                ContentSecurityPolicy::new()
                    .default_src([source::NONE])
                    .block_all_mixed_content()
                    .connect_src([source::SELF, "api.example.com"]),
            )
            .expect_ct(ExpectCt::new().max_age(time::FIVE_MINUTES).enforce())
            .feature_policy(
                FeaturePolicy::new()
                    .geolocation([source::SELF, "example.com"])
                    .vibrate([source::NONE]),
            )
            .hsts(Hsts::new().include_subdomains().preload().max_age(time::ONE_WEEK))
            .referrer_policy(ReferrerPolicy::new().no_referrer())
            .content_type_options(None)
            .frame_options(FrameOptions::new().deny())
            .xss_protection(XssProtection::new().enabled_block())
            .build();

        assert_eq!(
            collect(&config),
            vec![
                pair("Cache-control", "no-store, must-revalidate, proxy-revalidate"),
                pair(
                    "Content-Security-Policy",
                    "default-src 'none'; block-all-mixed-content; connect-src 'self' api.example.com"
                ),
                pair("Feature-Policy", "geolocation 'self' example.com; vibrate 'none'"),
                pair("Strict-Transport-Security", "includeSubDomains; preload; max-age=604800"),
                pair("Referrer-Policy", "no-referrer"),
                pair("X-Frame-Options", "DENY"),
                pair("X-XSS-Protection", "1 mode=block"),
            ]
        );
    }

    #[test]
    fn test_absent_family_emits_nothing() {
        let config = HeaderConfig::builder().csp(None).hsts(None).build();
        let headers = collect(&config);
        assert!(headers.iter().all(|(name, _)| name != "Content-Security-Policy"));
        assert!(headers.iter().all(|(name, _)| name != "Strict-Transport-Security"));
        assert!(collect(&HeaderConfig::empty()).is_empty());
    }

    #[test]
    fn test_present_but_empty_builder_is_emitted() {
        let config = HeaderConfigBuilder { config: HeaderConfig::empty() }
            .csp(ContentSecurityPolicy::new())
            .build();
        assert_eq!(collect(&config), vec![pair("Content-Security-Policy", "")]);
    }

    #[test]
    fn test_expect_ct_requires_opt_in() {
        let held = HeaderConfig::builder().expect_ct(ExpectCt::new().recommended()).build();
        assert!(held.expect_ct().is_some());
        assert!(collect(&held).iter().all(|(name, _)| name != "Expect-CT"));

        let sent = HeaderConfig::builder()
            .expect_ct(ExpectCt::new().recommended())
            .emit_expect_ct(true)
            .build();
        let headers = collect(&sent);
        assert_eq!(headers.last(), Some(&pair("Expect-CT", "max-age=86400, enforce")));
    }

    #[test]
    fn test_header_map_sink_appends() {
        let mut map = HeaderMap::new();
        map.append("x-frame-options", HeaderValue::from_static("DENY"));
        HeaderConfig::default().apply(&mut map);

        let frame: Vec<&HeaderValue> = map.get_all("x-frame-options").iter().collect();
        assert_eq!(frame, vec!["DENY", "SAMEORIGIN"]);
        assert_eq!(map.get("cache-control").unwrap(), "no-cache, no-store, must-revalidate, max-age=0");
    }

    #[test]
    fn test_header_map_sink_skips_invalid_value() {
        let config = HeaderConfig::builder()
            .csp(ContentSecurityPolicy::new().set("default-src 'self'\r\nx-injected: 1"))
            .build();
        let mut map = HeaderMap::new();
        config.apply(&mut map);
        assert!(map.get("content-security-policy").is_none());
        assert!(map.get("x-injected").is_none());
        assert_eq!(map.get("x-content-type-options").unwrap(), "nosniff");
    }

    #[test]
    fn test_validate() {
        assert!(HeaderConfig::default().validate().is_ok());

        let config = HeaderConfig::builder()
            .frame_options(FrameOptions::new().allow_from("https://example.com\n"))
            .build();
        match config.validate() {
            Err(HeaderError::InvalidValue { header, .. }) => assert_eq!(header, "X-Frame-Options"),
            other => panic!("expected invalid value, got {other:?}"),
        }
    }
}
