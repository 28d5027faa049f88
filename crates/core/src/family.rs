/// One response header and the builder that produces its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderFamily {
    CacheControl,
    ContentSecurityPolicy,
    FeaturePolicy,
    StrictTransportSecurity,
    ReferrerPolicy,
    ContentTypeOptions,
    FrameOptions,
    XssProtection,
    ExpectCt,
}

impl HeaderFamily {
    /// Emission order used on every response.
    pub const ORDER: [HeaderFamily; 9] = [
        HeaderFamily::CacheControl,
        HeaderFamily::ContentSecurityPolicy,
        HeaderFamily::FeaturePolicy,
        HeaderFamily::StrictTransportSecurity,
        HeaderFamily::ReferrerPolicy,
        HeaderFamily::ContentTypeOptions,
        HeaderFamily::FrameOptions,
        HeaderFamily::XssProtection,
        HeaderFamily::ExpectCt,
    ];

    /// Header name as transmitted.
    pub fn header_name(self) -> &'static str {
        match self {
            HeaderFamily::CacheControl => "Cache-control",
            HeaderFamily::ContentSecurityPolicy => "Content-Security-Policy",
            HeaderFamily::FeaturePolicy => "Feature-Policy",
            HeaderFamily::StrictTransportSecurity => "Strict-Transport-Security",
            HeaderFamily::ReferrerPolicy => "Referrer-Policy",
            HeaderFamily::ContentTypeOptions => "X-Content-Type-Options",
            HeaderFamily::FrameOptions => "X-Frame-Options",
            HeaderFamily::XssProtection => "X-XSS-Protection",
            HeaderFamily::ExpectCt => "Expect-CT",
        }
    }
}

/// Common surface of the per-header builders.
pub trait HeaderBuilder {
    const FAMILY: HeaderFamily;

    /// Serialized header value.
    fn value(&self) -> String;

    fn header_name(&self) -> &'static str {
        Self::FAMILY.header_name()
    }
}
