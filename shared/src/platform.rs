//! The advertising channels a campaign can run on.

wire_enum! {
    /// One advertising channel. Each has its own campaign payload shape,
    /// see [`crate::payloads::PlatformPayload`].
    pub enum Platform {
        /// Facebook ads.
        Facebook => "Facebook",
        /// Instagram posts, stories and reels.
        Instagram => "Instagram",
        /// YouTube video ads.
        YouTube => "YouTube",
        /// Google Ads search/display/shopping.
        GoogleAds => "Google Ads",
        /// Email newsletter campaigns.
        Email => "Email",
        /// SMS text campaigns.
        Sms => "SMS",
    }
}

const PLACEHOLDER_HOST: &str = "https://placehold.co";

impl Platform {
    /// Brand colour as a hex string without the leading `#`.
    pub fn brand_color(self) -> &'static str {
        match self {
            Platform::Facebook => "2D88FF",
            Platform::Instagram => "E4405F",
            Platform::YouTube => "FF0000",
            Platform::GoogleAds => "4285F4",
            Platform::Email => "34A853",
            Platform::Sms => "9B59B6",
        }
    }

    /// Two or three letter badge text.
    pub fn short_code(self) -> &'static str {
        match self {
            Platform::Facebook => "FB",
            Platform::Instagram => "IG",
            Platform::YouTube => "YT",
            Platform::GoogleAds => "GA",
            Platform::Email => "EM",
            Platform::Sms => "SMS",
        }
    }

    /// Label used in the "new campaign" platform picker.
    pub fn picker_label(self) -> &'static str {
        match self {
            Platform::Email => "Email Campaign",
            Platform::Sms => "SMS Campaign",
            other => other.as_str(),
        }
    }

    /// Paid ad networks, as opposed to direct messaging channels.
    pub fn is_ad_network(self) -> bool {
        !matches!(self, Platform::Email | Platform::Sms)
    }

    /// 32x32 badge icon.
    pub fn icon_url(self) -> String {
        placeholder_image(32, 32, self.short_code(), self.brand_color(), "FFFFFF")
    }

    /// 400x400 banner shown on the platform authentication step.
    pub fn banner_url(self) -> String {
        placeholder_image(400, 400, self.as_str(), self.brand_color(), "FFFFFF")
    }
}

/// Builds a `placehold.co` URL with `text` percent-encoded.
pub fn placeholder_image(
    width: u32,
    height: u32,
    text: &str,
    bg_color: &str,
    text_color: &str,
) -> String {
    format!(
        "{PLACEHOLDER_HOST}/{width}x{height}/{bg_color}/{text_color}?text={}",
        urlencoding::encode(text)
    )
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn display_names_round_trip() {
        for platform in Platform::ALL {
            let parsed = Platform::from_str(&platform.to_string()).expect("known platform");
            assert_eq!(parsed, *platform);
        }
        assert_eq!(Platform::GoogleAds.to_string(), "Google Ads");
        assert_eq!(Platform::Sms.as_str(), "SMS");
    }

    #[test]
    fn rejects_unknown_platform() {
        let err = Platform::from_str("TikTok").unwrap_err();
        assert!(err.to_string().contains("TikTok"));
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Platform::GoogleAds).expect("serialize");
        assert_eq!(json, "\"Google Ads\"");
        let back: Platform = serde_json::from_str("\"YouTube\"").expect("deserialize");
        assert_eq!(back, Platform::YouTube);
    }

    #[test]
    fn icon_urls_encode_text() {
        assert_eq!(Platform::Sms.icon_url(), "https://placehold.co/32x32/9B59B6/FFFFFF?text=SMS");
        assert_eq!(
            Platform::GoogleAds.banner_url(),
            "https://placehold.co/400x400/4285F4/FFFFFF?text=Google%20Ads"
        );
        assert_eq!(
            placeholder_image(48, 48, "A&B/C", "000000", "FFFFFF"),
            "https://placehold.co/48x48/000000/FFFFFF?text=A%26B%2FC"
        );
    }

    #[test]
    fn messaging_channels_are_not_ad_networks() {
        let networks: Vec<_> = Platform::ALL.iter().filter(|p| p.is_ad_network()).collect();
        assert_eq!(networks.len(), 4);
        assert!(!Platform::Email.is_ad_network());
    }
}
