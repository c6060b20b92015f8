//! Build-time configuration for the frontend application.

/// Origin of the REST API. Empty means same-origin.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("DCAMPAIGNER_API_BASE") {
    Some(url) => url,
    None => "",
};

/// Deployment environment; `production` silences debug logging.
pub const ENVIRONMENT: &str = match option_env!("DCAMPAIGNER_ENVIRONMENT") {
    Some(env) => env,
    None => "development",
};

/// Local-storage key of the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Requests are abandoned after this long.
#[cfg(not(feature = "mock"))]
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Delay of the simulated publish call when running on sample data.
#[cfg(feature = "mock")]
pub const MOCK_PUBLISH_DELAY_MS: u32 = 1_000;

pub mod endpoints {
    pub const CAMPAIGNS: &str = "/api/campaigns";
    pub const AUTH: &str = "/api/auth";
    pub const ANALYTICS: &str = "/api/analytics";
    pub const CLIENTS: &str = "/api/clients";
}

pub mod error_messages {
    pub const AUTH_FAILED: &str = "Authentication failed. Please try again.";
    pub const CAMPAIGN_CREATE_FAILED: &str = "Failed to create campaign. Please check your inputs.";
    #[cfg(not(feature = "mock"))]
    pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
}

pub fn is_production() -> bool {
    ENVIRONMENT.eq_ignore_ascii_case("production")
}
