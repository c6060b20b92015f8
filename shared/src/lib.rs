//! Domain model shared by the DCampaigner dashboard.
//!
//! Everything here is target independent: the frontend compiles it to WASM,
//! the unit tests run it natively.

#[macro_use]
mod wire_enum;

pub mod analytics;
pub mod error;
pub mod filter;
pub mod models;
pub mod payloads;
pub mod platform;
pub mod sample;

pub use analytics::{AggregateMetrics, PlatformPerformance, PlatformShare, SocialPoint};
pub use error::{DomainError, ValidationError};
pub use filter::{CampaignFilter, DateRange};
pub use models::{
    AudienceLists, AuthResponse, Campaign, CampaignId, CampaignMetrics, CampaignStatus, Client,
    ClientId, ClientStatus, NewCampaign, NewClient, Role, User,
};
pub use payloads::PlatformPayload;
pub use platform::Platform;
