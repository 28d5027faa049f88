use crate::directives::{DirectiveList, Separator};
use crate::family::{HeaderBuilder, HeaderFamily};

/// `Strict-Transport-Security` builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Hsts {
    directives: DirectiveList,
}

impl Hsts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw directive.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directives.push(value);
        self
    }

    /// Two years, subdomains included.
    pub fn recommended(self) -> Self {
        self.set("max-age=63072000; includeSubdomains")
    }

    pub fn include_subdomains(self) -> Self {
        self.set("includeSubDomains")
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.directives.push_assignment("max-age", seconds);
        self
    }

    pub fn preload(self) -> Self {
        self.set("preload")
    }
}

impl HeaderBuilder for Hsts {
    const FAMILY: HeaderFamily = HeaderFamily::StrictTransportSecurity;

    fn value(&self) -> String {
        self.directives.join(Separator::Semicolon)
    }
}
