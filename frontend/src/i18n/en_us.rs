pub mod common {
    pub const LOADING: &str = "Loading...";
    pub const UNKNOWN_CLIENT: &str = "Client #{}";
}

pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "Switch to light mode";
    pub const SWITCH_TO_DARK: &str = "Switch to dark mode";
}

pub mod tag_input {
    pub const REMOVE_ARIA: &str = "Remove";
    pub const HINT: &str = "Press Enter to add";
}

pub mod dialog {
    pub const CLOSE_ARIA: &str = "Close dialog";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod charts {
    pub const NO_DATA: &str = "No data to display yet";
}

pub mod image {
    pub const NOT_FOUND: &str = "Image not found";
}

pub mod preview {
    pub const TITLE: &str = "Campaign Dashboard";
    pub const ACTIVE_CAMPAIGNS: &str = "Active Campaigns";
    pub const REACH: &str = "Reach";
    pub const ENGAGEMENT: &str = "Engagement";
}

pub mod layout {
    pub const NAV_DASHBOARD: &str = "Dashboard";
    pub const NAV_CAMPAIGNS: &str = "Campaigns";
    pub const NAV_ANALYTICS: &str = "Analytics";
    pub const NAV_PERFORMANCE: &str = "Performance";
    pub const NAV_CLIENTS: &str = "Clients";
    pub const CLIENT_PORTAL: &str = "Client Portal";
    pub const MARKETING_HUB: &str = "Marketing Hub";
    pub const NAV_ARIA: &str = "Main navigation";
    pub const TOGGLE_SIDEBAR_ARIA: &str = "Toggle sidebar";
    pub const LOGOUT: &str = "Logout";
    pub const APP_TITLE: &str = "Digital Campaign Manager";
}

pub mod landing {
    pub const BRAND: &str = "DCampaigner";
    pub const NAV_FEATURES: &str = "Features";
    pub const NAV_PRICING: &str = "Pricing";
    pub const NAV_ABOUT: &str = "About";
    pub const NAV_CONTACT: &str = "Contact";
    pub const SIGN_IN: &str = "Sign In";
    pub const GO_TO_DASHBOARD: &str = "Go to Dashboard";

    pub const HERO_TITLE: &str = "Manage All Your Marketing Campaigns in One Place";
    pub const HERO_SUBTITLE: &str = "One platform to manage all your marketing campaigns across \
                                     social media, email, and SMS.";
    pub const GET_STARTED: &str = "Get Started Free";
    pub const LEARN_MORE: &str = "Learn More";

    pub const FEATURES_TITLE: &str = "Powerful Features";
    pub const TESTIMONIALS_TITLE: &str = "What Our Clients Say";
    pub const ABOUT_TITLE: &str = "About Us";
    pub const ABOUT_SUBTITLE: &str = "Your Digital Marketing Partner";
    pub const ABOUT_BODY: &str = "DCampaigner is a comprehensive digital marketing platform \
                                  designed to help businesses streamline their marketing efforts \
                                  across multiple channels. Our mission is to simplify campaign \
                                  management while maximizing your marketing ROI through advanced \
                                  analytics and automation.";
    pub const PRICING_TITLE: &str = "Choose Your Plan";
    pub const RECOMMENDED: &str = "Recommended";
    pub const PER_MONTH: &str = "/month";
    pub const CHOOSE_PLAN: &str = "Get Started";
    pub const FAQ_TITLE: &str = "Frequently Asked Questions";
    pub const CONTACT_TITLE: &str = "Contact Us";
    pub const CONTACT_SUBTITLE: &str = "Have questions? We're here to help!";
    pub const COPYRIGHT: &str = "© DCampaigner. All rights reserved.";

    pub const LOGIN_TITLE: &str = "Welcome to DCampaigner";
    pub const LOGIN_SUBTITLE: &str = "Sign in to manage your campaigns";
    pub const QUICK_SIGN_IN: &str = "Quick Sign In (Dev Mode)";
    pub const CLIENT_SIGN_IN: &str = "Sign In as Client (Dev Mode)";
    pub const OR: &str = "OR";
    pub const TRY_DEMO: &str = "Try Demo";
}

pub mod demo {
    pub const TITLE: &str = "Dashboard Demo";
    pub const SUBTITLE: &str = "A preview of your campaigns at a glance. Sign in to manage real data.";
    pub const BACK: &str = "Back to Home";
}

pub mod dashboard {
    pub const TITLE: &str = "Dashboard";
    pub const WELCOME: &str = "Welcome back,";
    pub const VIEW_ANALYTICS: &str = "View Analytics";
    pub const ACTIVE_CAMPAIGNS: &str = "Active Campaigns";
    pub const TOTAL_SPEND: &str = "Total Spend";
    pub const TOTAL_REACH: &str = "Total Reach";
    pub const AVERAGE_CTR: &str = "Average CTR";
    pub const RECENT_CAMPAIGNS: &str = "Recent Campaigns";
    pub const VIEW_ALL: &str = "View all";
    pub const EMPTY: &str = "No campaigns yet";
}

pub mod clients {
    pub const TITLE: &str = "Client Management";
    pub const NEW_CLIENT: &str = "New Client";
    pub const EMAIL_LABEL: &str = "Email:";
    pub const WEBSITE_LABEL: &str = "Website:";
    pub const CLIENT_SINCE: &str = "Client Since:";
    pub const VIEW_CAMPAIGNS: &str = "View Campaigns";
    pub const VIEW_ANALYTICS: &str = "Analytics";

    pub const DIALOG_TITLE: &str = "Add New Client";
    pub const NAME: &str = "Client Name";
    pub const INDUSTRY: &str = "Industry";
    pub const EMAIL: &str = "Email";
    pub const WEBSITE: &str = "Website";
    pub const CANCEL: &str = "Cancel";
    pub const ADD_CLIENT: &str = "Add Client";
}

pub mod campaigns {
    pub const TITLE: &str = "Campaign Management";
    pub const NEW_CAMPAIGN: &str = "New Campaign";
    pub const LOADING: &str = "Loading campaigns...";

    pub const CLIENT: &str = "Client";
    pub const ALL_CLIENTS: &str = "All Clients";
    pub const PLATFORM: &str = "Platform";
    pub const ALL_PLATFORMS: &str = "All Platforms";
    pub const STATUS: &str = "Status";
    pub const ALL_STATUSES: &str = "All Status";
    pub const STARTS_AFTER: &str = "Starts After";
    pub const STARTS_BEFORE: &str = "Starts Before";
    pub const CLEAR_FILTERS: &str = "Clear Filters";
    pub const EMPTY: &str = "No campaigns found with the selected filters";

    pub const PLATFORM_LABEL: &str = "Platform";
    pub const BUDGET_LABEL: &str = "Budget";
    pub const REACH_LABEL: &str = "Reach";
    pub const START_LABEL: &str = "Start Date";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";

    pub const DIALOG_TITLE: &str = "Create New Campaign";
    pub const SELECT_CLIENT: &str = "Select a client";
    pub const NAME: &str = "Campaign Name";
    pub const SELECT_PLATFORM: &str = "Select a platform";
}

pub mod campaign_details {
    pub const TITLE: &str = "Campaign Details";
    pub const LOADING: &str = "Loading campaign...";
    pub const NOT_FOUND: &str = "Campaign not found";
    pub const BACK: &str = "Back to Campaigns";
    pub const EDIT: &str = "Edit Campaign";
    pub const SAVE: &str = "Save Changes";
    pub const CANCEL: &str = "Cancel";

    pub const TAB_OVERVIEW: &str = "Overview";
    pub const TAB_TARGETING: &str = "Targeting";
    pub const TAB_CREATIVE: &str = "Creative";
    pub const TAB_BUDGET: &str = "Budget & Schedule";
    pub const TAB_SETTINGS: &str = "Settings";
    pub const TAB_AUDIENCE: &str = "Audience";

    pub const NAME: &str = "Campaign Name";
    pub const STATUS: &str = "Status";
    pub const BUDGET_USED: &str = "Budget used";
    pub const PERFORMANCE: &str = "Performance Metrics";
    pub const IMPRESSIONS: &str = "Impressions";
    pub const CLICKS: &str = "Clicks";
    pub const CTR: &str = "CTR";
    pub const CONVERSIONS: &str = "Conversions";
    pub const SPEND: &str = "Spend";
    pub const CPC: &str = "CPC";
    pub const CONVERSION_RATE: &str = "Conversion Rate";

    pub const TARGETING_TITLE: &str = "Targeting Options";
    pub const NO_DETAILS: &str = "No platform settings were captured for this campaign.";

    pub const CREATIVE_TITLE: &str = "Creative Details";
    pub const PRIMARY_TEXT: &str = "Primary Text";
    pub const HEADLINE: &str = "Headline";
    pub const CALL_TO_ACTION: &str = "Call to Action";
    pub const MEDIA: &str = "Media";
    pub const NO_MEDIA: &str = "No media attached.";
    pub const ADD_MEDIA: &str = "Add Media";
    pub const MEDIA_ALT: &str = "Creative {}";
    pub const REMOVE_MEDIA_ARIA: &str = "Remove media";

    pub const BUDGET: &str = "Budget";
    pub const START_DATE: &str = "Start Date";
    pub const END_DATE: &str = "End Date";

    pub const SETTINGS_TITLE: &str = "Campaign Settings";
    pub const CAMPAIGN_ID: &str = "Campaign ID";
    pub const PLATFORM: &str = "Platform";
    pub const OBJECTIVE: &str = "Campaign Objective";
    pub const NOT_SET: &str = "Not set";

    pub const AUDIENCE_TITLE: &str = "Audience Management";
    pub const INCLUDE_LIST: &str = "Include List";
    pub const EXCLUDE_LIST: &str = "Exclude List";
    pub const AUDIENCE_PLACEHOLDER: &str =
        "Enter email addresses or phone numbers (one per line)";

    pub const PUBLISH: &str = "Publish Campaign";
    pub const PUBLISH_ACTION: &str = "Publish";
    pub const PUBLISHING: &str = "Publishing...";
    pub const PUBLISH_CONFIRM: &str = "Are you sure you want to publish this campaign? Once \
                                       published, it will be live and start running according \
                                       to the schedule.";
}

pub mod analytics {
    pub const TITLE: &str = "Analytics Dashboard";
    pub const CLIENT_SCOPE: &str = "Client ID: {}";
    pub const TOTAL_REACH: &str = "Total Reach";
    pub const ENGAGEMENT_RATE: &str = "Engagement Rate";
    pub const CONVERSION_RATE: &str = "Conversion Rate";
    pub const VS_LAST_MONTH: &str = "{} from last month";
    pub const SOCIAL_PERFORMANCE: &str = "Social Media Performance";
    pub const DISTRIBUTION: &str = "Platform Distribution";
    pub const BREAKDOWN: &str = "Platform Breakdown";
    pub const NO_ACTIVITY: &str = "No platform activity yet";
    pub const COL_PLATFORM: &str = "Platform";
    pub const COL_SPEND: &str = "Spend";
    pub const COL_IMPRESSIONS: &str = "Impressions";
    pub const COL_CLICKS: &str = "Clicks";
    pub const COL_CONVERSIONS: &str = "Conversions";
}

pub mod performance {
    pub const TITLE: &str = "Performance Overview";
    pub const CLIENT_ID: &str = "Client ID: {}";
    pub const TOTAL_SPEND: &str = "Total Spend";
    pub const TOTAL_IMPRESSIONS: &str = "Total Impressions";
    pub const TOTAL_CLICKS: &str = "Total Clicks";
    pub const TOTAL_CONVERSIONS: &str = "Total Conversions";
    pub const PLATFORM_PERFORMANCE: &str = "Platform Performance";
    pub const SPEND_BY_PLATFORM: &str = "Spend by Platform";
    pub const CLICKS: &str = "Clicks";
    pub const CONVERSIONS: &str = "Conversions";
    pub const SPEND_SERIES: &str = "Spend ($)";
}

pub mod integration {
    pub const STEP_AUTH: &str = "Platform Authentication";
    pub const STEP_SETUP: &str = "Campaign Setup";
    pub const STEP_REVIEW: &str = "Review & Launch";
    pub const AUTH_DESCRIPTION: &str = "Connect your {} account to proceed";
    pub const CONNECT: &str = "Connect to {}";
    pub const CREATIVE_MEDIA: &str = "Creative Media";
    pub const ADD_IMAGES: &str = "Add Images";
    pub const NO_IMAGES: &str = "No images selected. Click \"Add Images\" to upload.";
    pub const CREATIVE_ALT: &str = "Creative {}";
    pub const REMOVE_IMAGE_ARIA: &str = "Remove image";
    pub const BACK: &str = "Back";
    pub const CREATE: &str = "Create {} Campaign";
    pub const REVIEW_TITLE: &str = "Review Campaign Details";
    pub const REVIEW_PLATFORM: &str = "Platform";
    pub const REVIEW_BUDGET: &str = "Budget";
    pub const REVIEW_START: &str = "Start Date";
    pub const REVIEW_END: &str = "End Date";
    pub const REVIEW_IMAGES: &str = "Images";
    pub const LAUNCH: &str = "Launch Campaign";
}

pub mod facebook_form {
    pub const SETTINGS: &str = "Campaign Settings";
    pub const OBJECTIVE: &str = "Campaign Objective";
    pub const GOALS: &str = "Goals:";
    pub const NAME: &str = "Campaign Name";
    pub const NAME_HELPER: &str = "Give your campaign a descriptive name";
    pub const SPECIAL_CATEGORY: &str = "Special Ad Category";

    pub const AUDIENCE: &str = "Audience";
    pub const MIN_AGE: &str = "Minimum Age";
    pub const MAX_AGE: &str = "Maximum Age";
    pub const LOCATIONS: &str = "Locations";
    pub const LOCATIONS_PLACEHOLDER: &str = "Add a city, region or country";
    pub const DETAILED_TARGETING: &str = "Detailed Targeting";
    pub const INTERESTS: &str = "Interests";
    pub const AUDIENCE_SIZE: &str = "Estimated Audience Size";

    pub const PLACEMENTS: &str = "Placements";
    pub const AD_FORMATS: &str = "Ad Formats";
    pub const PLACEMENT: &str = "Placement";

    pub const BUDGET_SCHEDULE: &str = "Budget & Schedule";
    pub const BUDGET_TYPE: &str = "Budget Type";
    pub const BUDGET_AMOUNT: &str = "Budget Amount";
    pub const START_DATE: &str = "Start Date";
    pub const END_DATE: &str = "End Date";
    pub const TIME_ZONE: &str = "Time Zone";
    pub const BID_STRATEGY: &str = "Bid Strategy";
    pub const OPTIMIZATION_GOAL: &str = "Optimization Goal";

    pub const CREATIVE: &str = "Creative";
    pub const CREATIVE_FORMAT: &str = "Ad Format";
    pub const PRIMARY_TEXT: &str = "Primary Text";
    pub const HEADLINE: &str = "Headline";
    pub const DESCRIPTION: &str = "Description";
    pub const CALL_TO_ACTION: &str = "Call to Action";
}

pub mod instagram_form {
    pub const TITLE: &str = "Instagram Campaign Setup";
    pub const OBJECTIVE: &str = "Campaign Objective";
    pub const FORMAT: &str = "Ad Format";
    pub const AUDIENCE: &str = "Audience";
    pub const MIN_AGE: &str = "Minimum Age";
    pub const MAX_AGE: &str = "Maximum Age";
    pub const LOCATIONS: &str = "Locations";
    pub const LOCATIONS_PLACEHOLDER: &str = "Add a location";
    pub const INTERESTS: &str = "Interests";
    pub const HASHTAGS: &str = "Hashtags";
    pub const HASHTAGS_PLACEHOLDER: &str = "Add a hashtag";
    pub const INFLUENCER: &str = "Enable Influencer Collaboration";
}

pub mod youtube_form {
    pub const TITLE: &str = "YouTube Campaign Setup";
    pub const AD_FORMAT: &str = "Ad Format";
    pub const DURATION: &str = "Video Duration (seconds)";
    pub const SKIP_TIME: &str = "Skip After (seconds)";
    pub const AUDIENCE: &str = "Audience";
    pub const AGE_GROUPS: &str = "Age Groups";
    pub const GENDERS: &str = "Gender";
    pub const INTERESTS: &str = "Interests";
    pub const TOPICS: &str = "Topics";
    pub const KEYWORDS: &str = "Keywords";
    pub const KEYWORDS_PLACEHOLDER: &str = "Add a keyword";
    pub const PLACEMENTS: &str = "Placements";
}

pub mod google_ads_form {
    pub const TITLE: &str = "Google Ads Campaign Setup";
    pub const CAMPAIGN_TYPE: &str = "Campaign Type";
    pub const BID_STRATEGY: &str = "Bid Strategy";
    pub const KEYWORDS: &str = "Keywords";
    pub const KEYWORDS_PLACEHOLDER: &str = "Add a keyword";
    pub const NEGATIVE_KEYWORDS: &str = "Negative Keywords";
    pub const NEGATIVE_KEYWORDS_PLACEHOLDER: &str = "Add a keyword to exclude";
    pub const TARGETING: &str = "Targeting";
    pub const LOCATIONS: &str = "Locations";
    pub const LOCATIONS_PLACEHOLDER: &str = "Add a location";
    pub const LANGUAGES: &str = "Languages";
    pub const DEVICES: &str = "Devices";
}

/// Labels shared by the email and SMS forms.
pub mod message_form {
    pub const SCHEDULE_AUDIENCE: &str = "Schedule & Audience";
    pub const SEND_TIME: &str = "Send Time";
    pub const TIMEZONE: &str = "Timezone";
    pub const SEGMENTS: &str = "Audience Segments";
    pub const SEGMENTS_PLACEHOLDER: &str = "Add a segment";
    pub const EXCLUDED_SEGMENTS: &str = "Excluded Segments";
    pub const TRACKING: &str = "Tracking";
}

pub mod email_form {
    pub const TITLE: &str = "Email Campaign Setup";
    pub const SUBJECT: &str = "Subject Line";
    pub const TEMPLATE: &str = "Email Template";
    pub const HTML_CONTENT: &str = "HTML Content";
    pub const PLAIN_TEXT: &str = "Plain Text Content";
    pub const SENDER_NAME: &str = "Sender Name";
    pub const SENDER_EMAIL: &str = "Sender Email";
    pub const REPLY_TO: &str = "Reply-To Email";
    pub const TRACK_OPENS: &str = "Track Opens";
    pub const TRACK_CLICKS: &str = "Track Clicks";
    pub const TRACK_UNSUBSCRIBES: &str = "Track Unsubscribes";
}

pub mod sms_form {
    pub const TITLE: &str = "SMS Campaign Setup";
    pub const SENDER: &str = "Sender ID";
    pub const SENDER_HELPER: &str = "Must comply with local regulations";
    pub const MESSAGE: &str = "Message";
    pub const COUNTER: &str = "{}/{} characters";
    pub const MESSAGE_TYPE: &str = "Message Type";
    pub const PHONE_TYPE: &str = "Phone Number Type";
    pub const COMPLIANCE: &str = "Compliance";
    pub const OPT_IN: &str = "Verify Opt-In Status";
    pub const OPT_OUT: &str = "Include Opt-Out Instructions";
    pub const TRACK_DELIVERY: &str = "Track Delivery Status";
    pub const TRACK_CLICKS: &str = "Track Link Clicks";
}
