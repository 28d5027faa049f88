//! Per-header directive builders.
//!
//! Every builder is consumed and returned by its directive methods so calls
//! chain:
//!
//! ```
//! use hw_core::{ContentSecurityPolicy, HeaderBuilder, source};
//!
//! let csp = ContentSecurityPolicy::new()
//!     .default_src([source::NONE])
//!     .block_all_mixed_content()
//!     .connect_src([source::SELF, "api.example.com"]);
//! assert_eq!(
//!     csp.value(),
//!     "default-src 'none'; block-all-mixed-content; connect-src 'self' api.example.com"
//! );
//! ```

/// Generates `keyword arg1 arg2 ...` directive methods on a builder with a
/// `directives: DirectiveList` field.
macro_rules! list_directives {
    ($($(#[$meta:meta])* $method:ident => $keyword:literal;)+) => {
        $(
            $(#[$meta])*
            pub fn $method<I, S>(mut self, args: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                self.directives.push_list($keyword, args);
                self
            }
        )+
    };
}

mod cache_control;
mod csp;
mod expect_ct;
mod feature_policy;
mod hsts;
mod referrer_policy;
mod report_to;
mod single;

pub use cache_control::CacheControl;
pub use csp::ContentSecurityPolicy;
pub use expect_ct::ExpectCt;
pub use feature_policy::FeaturePolicy;
pub use hsts::Hsts;
pub use referrer_policy::ReferrerPolicy;
pub use report_to::{ReportTo, ReportToEndpoint};
pub use single::{ContentTypeOptions, FrameOptions, XssProtection};
