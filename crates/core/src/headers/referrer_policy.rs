use crate::directives::{DirectiveList, Separator};
use crate::family::{HeaderBuilder, HeaderFamily};

/// `Referrer-Policy` builder.
///
/// Several policies may be listed; browsers use the last one they support.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ReferrerPolicy {
    directives: DirectiveList,
}

impl ReferrerPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw policy token.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directives.push(value);
        self
    }

    /// `no-referrer, strict-origin-when-cross-origin`
    pub fn recommended(self) -> Self {
        self.set("no-referrer, strict-origin-when-cross-origin")
    }

    pub fn no_referrer(self) -> Self {
        self.set("no-referrer")
    }

    pub fn no_referrer_when_downgrade(self) -> Self {
        self.set("no-referrer-when-downgrade")
    }

    pub fn origin(self) -> Self {
        self.set("origin")
    }

    pub fn origin_when_cross_origin(self) -> Self {
        self.set("origin-when-cross-origin")
    }

    pub fn same_origin(self) -> Self {
        self.set("same-origin")
    }

    pub fn strict_origin(self) -> Self {
        self.set("strict-origin")
    }

    pub fn strict_origin_when_cross_origin(self) -> Self {
        self.set("strict-origin-when-cross-origin")
    }

    pub fn unsafe_url(self) -> Self {
        self.set("unsafe-url")
    }
}

impl HeaderBuilder for ReferrerPolicy {
    const FAMILY: HeaderFamily = HeaderFamily::ReferrerPolicy;

    fn value(&self) -> String {
        self.directives.join(Separator::Comma)
    }
}
