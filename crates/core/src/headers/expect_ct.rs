use crate::directives::{DirectiveList, Separator};
use crate::family::{HeaderBuilder, HeaderFamily};

/// `Expect-CT` builder.
///
/// Browsers no longer act on this header; [`crate::HeaderConfig`] only sends
/// it when explicitly asked to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ExpectCt {
    directives: DirectiveList,
}

impl ExpectCt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw directive.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directives.push(value);
        self
    }

    /// One day, enforced.
    pub fn recommended(self) -> Self {
        self.set("max-age=86400, enforce")
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.directives.push_assignment("max-age", seconds);
        self
    }

    pub fn enforce(self) -> Self {
        self.set("enforce")
    }

    pub fn report_uri(self, uri: &str) -> Self {
        self.set(format!("report-uri=\"{uri}\""))
    }
}

impl HeaderBuilder for ExpectCt {
    const FAMILY: HeaderFamily = HeaderFamily::ExpectCt;

    fn value(&self) -> String {
        self.directives.join(Separator::Comma)
    }
}
