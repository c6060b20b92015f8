//! In-memory sample data standing in for the campaign API.

use chrono::NaiveDate;

use crate::{
    analytics::{PlatformShare, SocialPoint},
    models::{
        AudienceLists, AuthResponse, Campaign, CampaignMetrics, CampaignStatus, Client,
        ClientStatus, Role, User,
    },
    payloads::{
        AdBudget, AdFormat, AdSchedule, AdSetDetails, AgeRange, BidStrategy, BudgetType,
        CreativeDetails, FacebookCampaign, FacebookObjective, FacebookPlacement,
        FacebookTargeting, Optimization, OptimizationGoal, PlatformPayload, SpecialAdCategory,
    },
    platform::Platform,
};

/// Token handed out by the development sign-in.
pub const MOCK_TOKEN: &str = "mock_token_123";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Agency clients.
pub fn clients() -> Vec<Client> {
    let rows = [
        (
            1,
            "Tech Solutions Inc",
            "Technology",
            "contact@techsolutions.com",
            "www.techsolutions.com",
            ClientStatus::Active,
            date(2024, 1, 1),
        ),
        (
            2,
            "Fashion Forward",
            "Retail",
            "info@fashionforward.com",
            "www.fashionforward.com",
            ClientStatus::Active,
            date(2024, 1, 15),
        ),
        (
            3,
            "Green Leaf Organics",
            "Food & Beverage",
            "hello@greenleaf.co",
            "www.greenleaf.co",
            ClientStatus::Active,
            date(2024, 2, 10),
        ),
        (
            4,
            "Summit Fitness",
            "Health & Fitness",
            "team@summitfitness.com",
            "www.summitfitness.com",
            ClientStatus::Inactive,
            date(2024, 3, 5),
        ),
    ];

    rows.into_iter()
        .map(|(id, name, industry, email, website, status, created_at)| Client {
            id,
            name: name.to_string(),
            industry: industry.to_string(),
            email: email.to_string(),
            logo: None,
            website: website.to_string(),
            status,
            created_at,
        })
        .collect()
}

fn metrics(impressions: u64, clicks: u64, conversions: u64, spend: f64) -> CampaignMetrics {
    CampaignMetrics {
        impressions,
        clicks,
        conversions,
        spend,
    }
}

/// Campaigns across every platform.
pub fn campaigns() -> Vec<Campaign> {
    let rows = [
        (
            1,
            1,
            "Summer Sale 2024",
            Platform::Facebook,
            CampaignStatus::Active,
            5_000.0,
            50_000,
            date(2024, 6, 1),
            metrics(75_000, 2_500, 150, 4_800.0),
        ),
        (
            2,
            1,
            "YouTube Product Launch",
            Platform::YouTube,
            CampaignStatus::Planned,
            10_000.0,
            100_000,
            date(2024, 7, 15),
            CampaignMetrics::default(),
        ),
        (
            3,
            2,
            "Instagram Story Ads",
            Platform::Instagram,
            CampaignStatus::Active,
            3_000.0,
            25_000,
            date(2024, 5, 20),
            metrics(30_000, 1_200, 80, 2_800.0),
        ),
        (
            4,
            1,
            "Search Visibility Q2",
            Platform::GoogleAds,
            CampaignStatus::Paused,
            4_000.0,
            40_000,
            date(2024, 4, 10),
            metrics(52_000, 3_100, 210, 3_600.0),
        ),
        (
            5,
            2,
            "VIP Newsletter",
            Platform::Email,
            CampaignStatus::Completed,
            800.0,
            12_000,
            date(2024, 3, 1),
            metrics(12_000, 1_800, 95, 650.0),
        ),
        (
            6,
            3,
            "Flash Sale Alerts",
            Platform::Sms,
            CampaignStatus::Planned,
            1_200.0,
            0,
            date(2024, 8, 5),
            CampaignMetrics::default(),
        ),
        (
            7,
            3,
            "Brand Awareness",
            Platform::YouTube,
            CampaignStatus::Active,
            7_000.0,
            85_000,
            date(2024, 5, 1),
            metrics(90_000, 3_000, 120, 5_200.0),
        ),
    ];

    rows.into_iter()
        .map(|(id, client_id, name, platform, status, budget, reach, start_date, metrics)| {
            Campaign {
                id,
                client_id,
                name: name.to_string(),
                platform,
                status,
                budget,
                reach,
                start_date,
                end_date: None,
                metrics,
                details: (id == 1).then(summer_sale_details),
                audience: AudienceLists::default(),
            }
        })
        .collect()
}

/// Facebook settings of the summer sale campaign, as shown on its detail page.
pub fn summer_sale_details() -> PlatformPayload {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    PlatformPayload::Facebook(FacebookCampaign {
        name: "Summer Sale Campaign".to_string(),
        objective: FacebookObjective::Conversion,
        audience_size: None,
        targeting: FacebookTargeting {
            age_range: AgeRange {
                min: 18,
                max: 65,
            },
            locations: strings(&["New York", "Los Angeles", "Chicago"]),
            interests: strings(&["Shopping", "Fashion", "Technology"]),
            demographics: strings(&["College Students", "Young Professionals"]),
        },
        ad_formats: vec![AdFormat::Image, AdFormat::Carousel],
        placement: vec![FacebookPlacement::Feed, FacebookPlacement::Stories],
        special_ad_category: SpecialAdCategory::None,
        ad_set_details: AdSetDetails {
            budget: AdBudget {
                kind: BudgetType::Daily,
                amount: 500.0,
            },
            schedule: AdSchedule {
                start_date: date(2024, 3, 15),
                end_date: Some(date(2024, 4, 15)),
                time_zone: "UTC".to_string(),
            },
            optimization: Optimization {
                bid_strategy: BidStrategy::LowestCost,
                optimization_goal: OptimizationGoal::Conversions,
            },
        },
        creative_details: CreativeDetails {
            format: AdFormat::Image,
            primary_text: "Get 50% off on all summer collections!".to_string(),
            headline: "Summer Sale is Live".to_string(),
            description: "Limited time offer on premium brands".to_string(),
            call_to_action: "Shop Now".to_string(),
            media_urls: vec![
                Platform::Facebook.banner_url(),
                crate::platform::placeholder_image(400, 400, "Summer Sale", "F4B400", "FFFFFF"),
            ],
        },
    })
}

/// Demo logins: one agency admin and one client user.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "123".to_string(),
            email: "demo@example.com".to_string(),
            name: "Demo User".to_string(),
            role: Role::Admin,
            client_id: None,
            picture: Some("https://api.uifaces.co/our-content/donated/xZ4wg2Xj.jpg".to_string()),
        },
        User {
            id: "456".to_string(),
            email: "marketing@techsolutions.com".to_string(),
            name: "Tech Solutions Marketing".to_string(),
            role: Role::Client,
            client_id: Some(1),
            picture: None,
        },
    ]
}

/// What the development "Quick Sign In" receives instead of a Google
/// credential exchange.
pub fn mock_google_login() -> AuthResponse {
    AuthResponse {
        user: users().remove(0),
        token: MOCK_TOKEN.to_string(),
    }
}

/// Monthly reach on the three social platforms.
pub fn social_media_series() -> Vec<SocialPoint> {
    [
        ("Jan", 4000, 2400, 2400),
        ("Feb", 3000, 1398, 2210),
        ("Mar", 2000, 9800, 2290),
        ("Apr", 2780, 3908, 2000),
        ("May", 1890, 4800, 2181),
        ("Jun", 2390, 3800, 2500),
    ]
    .into_iter()
    .map(|(name, facebook, instagram, youtube)| SocialPoint {
        name: name.to_string(),
        facebook,
        instagram,
        youtube,
    })
    .collect()
}

/// Audience split across the social platforms, in percent.
pub fn social_platform_share() -> Vec<PlatformShare> {
    [(Platform::Facebook, 35.0), (Platform::Instagram, 40.0), (Platform::YouTube, 25.0)]
        .into_iter()
        .map(|(platform, value)| PlatformShare {
            platform,
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let client_ids: HashSet<_> = clients().iter().map(|c| c.id).collect();
        assert_eq!(client_ids.len(), clients().len());
        let campaign_ids: HashSet<_> = campaigns().iter().map(|c| c.id).collect();
        assert_eq!(campaign_ids.len(), campaigns().len());
    }

    #[test]
    fn every_campaign_belongs_to_a_known_client() {
        let client_ids: HashSet<_> = clients().iter().map(|c| c.id).collect();
        assert!(campaigns().iter().all(|c| client_ids.contains(&c.client_id)));
    }

    #[test]
    fn every_platform_is_represented() {
        let platforms: HashSet<_> = campaigns().iter().map(|c| c.platform).collect();
        assert_eq!(platforms.len(), Platform::ALL.len());
    }

    #[test]
    fn attached_details_match_the_campaign_platform() {
        for campaign in campaigns() {
            if let Some(details) = &campaign.details {
                assert_eq!(details.platform(), campaign.platform);
                assert!(details.is_valid());
            }
        }
    }

    #[test]
    fn share_adds_up() {
        let total: f64 = social_platform_share().iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn mock_login_is_the_demo_admin() {
        let login = mock_google_login();
        assert_eq!(login.token, MOCK_TOKEN);
        assert_eq!(login.user.email, "demo@example.com");
        assert_eq!(login.user.role, Role::Admin);
    }
}
