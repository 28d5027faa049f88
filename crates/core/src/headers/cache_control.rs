use crate::directives::{DirectiveList, Separator};
use crate::family::{HeaderBuilder, HeaderFamily};

/// `Cache-control` builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct CacheControl {
    directives: DirectiveList,
}

impl CacheControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw directive.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directives.push(value);
        self
    }

    /// `no-cache, no-store, must-revalidate, max-age=0`
    pub fn recommended(self) -> Self {
        self.set("no-cache, no-store, must-revalidate, max-age=0")
    }

    pub fn immutable(self) -> Self {
        self.set("immutable")
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.directives.push_assignment("max-age", seconds);
        self
    }

    pub fn max_stale(mut self, seconds: u64) -> Self {
        self.directives.push_assignment("max-stale", seconds);
        self
    }

    pub fn min_fresh(mut self, seconds: u64) -> Self {
        self.directives.push_assignment("min-fresh", seconds);
        self
    }

    pub fn must_revalidate(self) -> Self {
        self.set("must-revalidate")
    }

    pub fn no_cache(self) -> Self {
        self.set("no-cache")
    }

    pub fn no_store(self) -> Self {
        self.set("no-store")
    }

    pub fn no_transform(self) -> Self {
        self.set("no-transform")
    }

    pub fn only_if_cached(self) -> Self {
        self.set("only-if-cached")
    }

    pub fn private(self) -> Self {
        self.set("private")
    }

    pub fn proxy_revalidate(self) -> Self {
        self.set("proxy-revalidate")
    }

    pub fn public(self) -> Self {
        self.set("public")
    }

    pub fn s_maxage(mut self, seconds: u64) -> Self {
        self.directives.push_assignment("s-maxage", seconds);
        self
    }

    pub fn stale_if_error(mut self, seconds: u64) -> Self {
        self.directives.push_assignment("stale-if-error", seconds);
        self
    }

    pub fn stale_while_revalidate(mut self, seconds: u64) -> Self {
        self.directives.push_assignment("stale-while-revalidate", seconds);
        self
    }
}

impl HeaderBuilder for CacheControl {
    const FAMILY: HeaderFamily = HeaderFamily::CacheControl;

    fn value(&self) -> String {
        self.directives.join(Separator::Comma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value() {
        assert_eq!(CacheControl::new().value(), "");
    }

    #[test]
    fn test_call_order_is_output_order() {
        let cc = CacheControl::new().no_store().must_revalidate().proxy_revalidate();
        assert_eq!(cc.value(), "no-store, must-revalidate, proxy-revalidate");
    }

    #[test]
    fn test_numeric_directives() {
        let cc = CacheControl::new()
            .public()
            .max_age(3600)
            .s_maxage(600)
            .stale_while_revalidate(30)
            .stale_if_error(86400);
        assert_eq!(
            cc.value(),
            "public, max-age=3600, s-maxage=600, stale-while-revalidate=30, stale-if-error=86400"
        );
    }

    #[test]
    fn test_recommended_is_additive() {
        let cc = CacheControl::new().no_store().recommended();
        assert_eq!(cc.value(), "no-store, no-cache, no-store, must-revalidate, max-age=0");
    }
}
