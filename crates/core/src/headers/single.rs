//! Builders for headers that carry exactly one token. Every call replaces
//! the previous value.

use crate::directives::DirectiveSlot;
use crate::family::{HeaderBuilder, HeaderFamily};

/// `X-Content-Type-Options` builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ContentTypeOptions {
    directive: DirectiveSlot,
}

impl ContentTypeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directive.set(value);
        self
    }

    /// `nosniff`
    pub fn recommended(self) -> Self {
        self.set("nosniff")
    }
}

impl HeaderBuilder for ContentTypeOptions {
    const FAMILY: HeaderFamily = HeaderFamily::ContentTypeOptions;

    fn value(&self) -> String {
        self.directive.get().to_string()
    }
}

/// `X-Frame-Options` builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct FrameOptions {
    directive: DirectiveSlot,
}

impl FrameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directive.set(value);
        self
    }

    /// `SAMEORIGIN`
    pub fn recommended(self) -> Self {
        self.same_origin()
    }

    pub fn allow_from(self, uri: &str) -> Self {
        self.set(format!("ALLOW-FROM {uri}"))
    }

    pub fn deny(self) -> Self {
        self.set("DENY")
    }

    pub fn same_origin(self) -> Self {
        self.set("SAMEORIGIN")
    }
}

impl HeaderBuilder for FrameOptions {
    const FAMILY: HeaderFamily = HeaderFamily::FrameOptions;

    fn value(&self) -> String {
        self.directive.get().to_string()
    }
}

/// `X-XSS-Protection` builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct XssProtection {
    directive: DirectiveSlot,
}

impl XssProtection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directive.set(value);
        self
    }

    /// `1; mode=block`
    pub fn recommended(self) -> Self {
        self.set("1; mode=block")
    }

    pub fn disabled(self) -> Self {
        self.set("0")
    }

    pub fn enabled(self) -> Self {
        self.set("1")
    }

    // No semicolon here, unlike `recommended`.
    pub fn enabled_block(self) -> Self {
        self.set("1 mode=block")
    }

    pub fn enabled_report(self, uri: &str) -> Self {
        self.set(format!("1 report={uri}"))
    }
}

impl HeaderBuilder for XssProtection {
    const FAMILY: HeaderFamily = HeaderFamily::XssProtection;

    fn value(&self) -> String {
        self.directive.get().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_slot_is_empty() {
        assert_eq!(ContentTypeOptions::new().value(), "");
        assert_eq!(FrameOptions::new().value(), "");
        assert_eq!(XssProtection::new().value(), "");
    }

    #[test]
    fn test_last_call_wins() {
        assert_eq!(FrameOptions::new().same_origin().deny().value(), "DENY");
        assert_eq!(FrameOptions::new().deny().recommended().value(), "SAMEORIGIN");
        assert_eq!(XssProtection::new().enabled().disabled().value(), "0");
    }

    #[test]
    fn test_uri_formatting() {
        assert_eq!(
            FrameOptions::new().allow_from("https://example.com").value(),
            "ALLOW-FROM https://example.com"
        );
        assert_eq!(
            XssProtection::new().enabled_report("https://example.com/xss").value(),
            "1 report=https://example.com/xss"
        );
    }

    #[test]
    fn test_presets() {
        assert_eq!(ContentTypeOptions::new().recommended().value(), "nosniff");
        assert_eq!(XssProtection::new().recommended().value(), "1; mode=block");
        assert_eq!(XssProtection::new().enabled_block().value(), "1 mode=block");
    }
}
