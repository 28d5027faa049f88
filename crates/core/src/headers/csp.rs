use super::report_to::ReportTo;
use crate::directives::{DirectiveList, Separator};
use crate::family::{HeaderBuilder, HeaderFamily};

/// `Content-Security-Policy` builder.
///
/// Source-list methods take any iterable of strings; see [`crate::source`]
/// for the quoted keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ContentSecurityPolicy {
    directives: DirectiveList,
}

impl ContentSecurityPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw directive.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directives.push(value);
        self
    }

    /// `script-src 'self'; object-src 'self'`
    pub fn recommended(self) -> Self {
        self.set("script-src 'self'; object-src 'self'")
    }

    list_directives! {
        base_uri => "base-uri";
        connect_src => "connect-src";
        default_src => "default-src";
        font_src => "font-src";
        form_action => "form-action";
        frame_ancestors => "frame-ancestors";
        frame_src => "frame-src";
        img_src => "img-src";
        manifest_src => "manifest-src";
        media_src => "media-src";
        object_src => "object-src";
        /// MIME types allowed for plugins.
        plugin_types => "plugin-types";
        require_sri_for => "require-sri-for";
        /// Sandbox flags such as `allow-scripts`.
        sandbox => "sandbox";
        script_src => "script-src";
        style_src => "style-src";
        worker_src => "worker-src";
    }

    pub fn block_all_mixed_content(self) -> Self {
        self.set("block-all-mixed-content")
    }

    pub fn upgrade_insecure_requests(self) -> Self {
        self.set("upgrade-insecure-requests")
    }

    pub fn report_uri(self, uri: &str) -> Self {
        self.set(format!("report-uri {uri}"))
    }

    /// Append `report-to <json>`. Left unchanged if the descriptor cannot be
    /// encoded.
    pub fn report_to(mut self, report_to: &ReportTo) -> Self {
        if let Some(fragment) = report_to.to_directive() {
            self.directives.push(fragment);
        }
        self
    }
}

impl HeaderBuilder for ContentSecurityPolicy {
    const FAMILY: HeaderFamily = HeaderFamily::ContentSecurityPolicy;

    fn value(&self) -> String {
        self.directives.join(Separator::Semicolon)
    }
}
