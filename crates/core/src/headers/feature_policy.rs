use crate::directives::{DirectiveList, Separator};
use crate::family::{HeaderBuilder, HeaderFamily};

const DENY_ALL: &str = "accelerometer 'none'; ambient-light-sensor 'none'; autoplay 'none'; \
    camera 'none'; encrypted-media 'none'; fullscreen 'none'; geolocation 'none'; \
    gyroscope 'none'; magnetometer 'none'; microphone 'none'; midi 'none'; \
    payment 'none'; picture-in-picture 'none'; speaker 'none'; sync-xhr 'none'; \
    usb 'none'; vr 'none';";

/// `Feature-Policy` builder. Each feature takes an allow-list of origins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct FeaturePolicy {
    directives: DirectiveList,
}

impl FeaturePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw directive.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directives.push(value);
        self
    }

    /// Deny every known feature.
    pub fn recommended(self) -> Self {
        self.set(DENY_ALL)
    }

    list_directives! {
        accelerometer => "accelerometer";
        ambient_light_sensor => "ambient-light-sensor";
        autoplay => "autoplay";
        camera => "camera";
        document_domain => "document-domain";
        encrypted_media => "encrypted-media";
        fullscreen => "fullscreen";
        geolocation => "geolocation";
        gyroscope => "gyroscope";
        magnetometer => "magnetometer";
        microphone => "microphone";
        midi => "midi";
        payment => "payment";
        picture_in_picture => "picture-in-picture";
        speaker => "speaker";
        sync_xhr => "sync-xhr";
        usb => "usb";
        vibrate => "vibrate";
        vr => "vr";
    }
}

impl HeaderBuilder for FeaturePolicy {
    const FAMILY: HeaderFamily = HeaderFamily::FeaturePolicy;

    fn value(&self) -> String {
        self.directives.join(Separator::Semicolon)
    }
}
