//! Builders for HTTP security response headers.
//!
//! Each header family has a builder that accumulates directives in call
//! order and serializes them with [`HeaderBuilder::value`]. A
//! [`HeaderConfig`] groups the optional builders and writes them, in a fixed
//! order, into any [`HeaderSink`].

pub mod config;
mod constants;
pub mod directives;
pub mod error;
pub mod family;
pub mod headers;
pub mod policy;

pub use constants::{source, time};
pub use error::{HeaderError, HeaderResult};
pub use family::{HeaderBuilder, HeaderFamily};
pub use headers::{
    CacheControl, ContentSecurityPolicy, ContentTypeOptions, ExpectCt, FeaturePolicy,
    FrameOptions, Hsts, ReferrerPolicy, ReportTo, ReportToEndpoint, XssProtection,
};
pub use policy::{HeaderConfig, HeaderConfigBuilder, HeaderSink};
