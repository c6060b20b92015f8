use dcampaigner_shared::{sample, AuthResponse, Platform};
use yew::{platform::spawn_local, prelude::*};
use yew_router::prelude::*;

use crate::{
    components::{
        dashboard_preview::DashboardPreview,
        dialog::{Dialog, DialogSize},
        image_with_fallback::ImageWithFallback,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        theme_toggle::ThemeToggle,
        BUTTON_PRIMARY, BUTTON_SECONDARY, CARD,
    },
    i18n::current::landing as t,
    router::Route,
    store::{auth::login_with_google, AuthContext},
};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "fa-bullhorn",
        title: "Multi-Platform Integration",
        description: "Connect and manage all your marketing platforms in one dashboard.",
    },
    Feature {
        icon: "fa-chart-line",
        title: "Advanced Analytics",
        description: "Get detailed insights and performance metrics for all your campaigns.",
    },
    Feature {
        icon: "fa-users",
        title: "Team Collaboration",
        description: "Work seamlessly with your team members and clients.",
    },
];

struct PricingTier {
    name: &'static str,
    price: u32,
    features: &'static [&'static str],
    recommended: bool,
}

const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: 49,
        features: &["Up to 5 campaigns", "Basic analytics", "2 social platforms", "Email support"],
        recommended: false,
    },
    PricingTier {
        name: "Professional",
        price: 99,
        features: &[
            "Up to 20 campaigns",
            "Advanced analytics",
            "All social platforms",
            "Priority support",
            "Campaign automation",
        ],
        recommended: true,
    },
    PricingTier {
        name: "Enterprise",
        price: 199,
        features: &[
            "Unlimited campaigns",
            "Custom analytics",
            "All platforms + API access",
            "24/7 dedicated support",
            "Advanced automation",
            "Custom integrations",
        ],
        recommended: false,
    },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    avatar: &'static str,
    comment: &'static str,
    rating: u8,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Marketing Director",
        company: "TechCorp",
        avatar: "https://randomuser.me/api/portraits/women/1.jpg",
        comment: "DCampaigner has revolutionized how we manage our marketing campaigns. The \
                  analytics are incredible!",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Digital Marketing Manager",
        company: "Growth Solutions",
        avatar: "https://randomuser.me/api/portraits/men/2.jpg",
        comment: "The multi-platform integration saves us hours of work every week. Highly \
                  recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Emma Davis",
        role: "CEO",
        company: "Startup Hub",
        avatar: "https://randomuser.me/api/portraits/women/3.jpg",
        comment: "Best investment we've made for our marketing team. The ROI tracking is \
                  phenomenal.",
        rating: 4,
    },
];

const FAQS: &[(&str, &str)] = &[
    (
        "How does DCampaigner work?",
        "DCampaigner provides a unified platform to create, manage, and analyze marketing \
         campaigns across multiple platforms. Simply connect your accounts, create campaigns, \
         and track results in real-time.",
    ),
    (
        "Which platforms are supported?",
        "We support all major social media platforms including Facebook, Instagram, YouTube, \
         Google Ads, as well as Email and SMS marketing campaigns.",
    ),
    (
        "Can I try before subscribing?",
        "Yes! We offer a 14-day free trial with full access to all features. No credit card \
         required.",
    ),
    (
        "Is there a long-term contract?",
        "No, all our plans are month-to-month with no long-term commitment required.",
    ),
];

const CONTACTS: &[(&str, &str, &str)] = &[
    ("fa-envelope", "Email", "support@dcampaigner.com"),
    ("fa-phone", "Phone", "+1 (555) 123-4567"),
    ("fa-map-marker-alt", "Office", "123 Marketing Street, San Francisco, CA 94105"),
];

/// `rating` filled stars followed by empty ones, out of five.
fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn scroll_to(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

#[derive(Properties, PartialEq)]
struct LoginPanelProps {
    on_close: Callback<()>,
}

/// Development sign-in: no identity provider is wired up, so both buttons
/// exchange a canned credential.
#[function_component(LoginPanel)]
fn login_panel(props: &LoginPanelProps) -> Html {
    let auth = match use_context::<AuthContext>() {
        Some(ctx) => ctx,
        None => return html! {},
    };
    let navigator = use_navigator();

    let sign_in = |credential: fn() -> AuthResponse| {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let auth = auth.clone();
            let navigator = navigator.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                if login_with_google(auth, credential()).await {
                    on_close.emit(());
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Dashboard);
                    }
                }
            });
        })
    };

    let on_demo = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Demo);
            }
        })
    };

    html! {
        <div class="space-y-4">
            <p class="text-[var(--muted)]">{ t::LOGIN_SUBTITLE }</p>
            if let Some(error) = auth.error.clone() {
                <p class="rounded-lg bg-red-50 px-3 py-2 text-sm text-red-700" role="alert">
                    { error }
                </p>
            }
            if auth.loading {
                <div class="flex justify-center py-4">
                    <LoadingSpinner size={SpinnerSize::Medium} />
                </div>
            } else {
                <button
                    type="button"
                    class={classes!(BUTTON_PRIMARY, "w-full", "py-3")}
                    onclick={sign_in(sample::mock_google_login)}
                >
                    <i class="fab fa-google"></i>
                    { t::QUICK_SIGN_IN }
                </button>
                <button
                    type="button"
                    class={classes!(BUTTON_SECONDARY, "w-full")}
                    onclick={sign_in(client_login)}
                >
                    <i class="fas fa-user-tie"></i>
                    { t::CLIENT_SIGN_IN }
                </button>
            }
            <div class="flex items-center gap-3 text-xs text-[var(--muted)]">
                <span class="h-px flex-1 bg-[var(--border)]" />
                { t::OR }
                <span class="h-px flex-1 bg-[var(--border)]" />
            </div>
            <button
                type="button"
                class={classes!(BUTTON_SECONDARY, "w-full")}
                disabled={auth.loading}
                onclick={on_demo}
            >
                { t::TRY_DEMO }
            </button>
        </div>
    }
}

/// Session for the client-scoped demo user.
fn client_login() -> AuthResponse {
    let mut users = sample::users();
    let user = if users.len() > 1 { users.remove(1) } else { users.remove(0) };
    AuthResponse {
        user,
        token: sample::MOCK_TOKEN.to_string(),
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let auth = use_context::<AuthContext>();
    let signed_in = auth.as_ref().is_some_and(|auth| auth.is_authenticated());
    let login_open = use_state(|| false);

    let open_login = {
        let login_open = login_open.clone();
        Callback::from(move |_: MouseEvent| login_open.set(true))
    };
    let close_login = {
        let login_open = login_open.clone();
        Callback::from(move |_: ()| login_open.set(false))
    };

    let section_link = |id: &'static str, label: &'static str| {
        html! {
            <button
                type="button"
                class="text-sm font-medium text-[var(--muted)] hover:text-[var(--primary)]"
                onclick={Callback::from(move |_: MouseEvent| scroll_to(id))}
            >
                { label }
            </button>
        }
    };

    let cta = if signed_in {
        html! {
            <Link<Route> to={Route::Dashboard} classes={classes!(BUTTON_PRIMARY)}>
                { t::GO_TO_DASHBOARD }
            </Link<Route>>
        }
    } else {
        html! {
            <button type="button" class={BUTTON_PRIMARY} onclick={open_login.clone()}>
                { t::SIGN_IN }
            </button>
        }
    };

    html! {
        <div class="min-h-screen bg-[var(--bg)] text-[var(--text)]">
            <header class="sticky top-0 z-40 border-b border-[var(--border)] bg-[var(--surface)]/90 backdrop-blur">
                <nav class="mx-auto flex max-w-6xl items-center justify-between px-4 py-3">
                    <span class="text-xl font-extrabold text-[var(--primary)]">{ t::BRAND }</span>
                    <div class="hidden items-center gap-6 md:flex">
                        { section_link("features", t::NAV_FEATURES) }
                        { section_link("pricing", t::NAV_PRICING) }
                        { section_link("about", t::NAV_ABOUT) }
                        { section_link("contact", t::NAV_CONTACT) }
                    </div>
                    <div class="flex items-center gap-3">
                        <ThemeToggle />
                        { cta }
                    </div>
                </nav>
            </header>

            <section id="hero" class="mx-auto grid max-w-6xl items-center gap-10 px-4 py-16 md:grid-cols-2 md:py-24">
                <div class="space-y-6">
                    <h1 class="text-4xl font-extrabold leading-tight md:text-5xl">{ t::HERO_TITLE }</h1>
                    <p class="text-lg text-[var(--muted)]">{ t::HERO_SUBTITLE }</p>
                    <div class="flex flex-wrap gap-3">
                        <button type="button" class={classes!(BUTTON_PRIMARY, "px-6", "py-3")} onclick={open_login}>
                            { t::GET_STARTED }
                        </button>
                        <button
                            type="button"
                            class={classes!(BUTTON_SECONDARY, "px-6", "py-3")}
                            onclick={Callback::from(|_: MouseEvent| scroll_to("features"))}
                        >
                            { t::LEARN_MORE }
                        </button>
                    </div>
                    <div class="flex gap-3">
                        { for Platform::ALL.iter().map(|platform| html! {
                            <ImageWithFallback
                                src={platform.icon_url()}
                                alt={platform.to_string()}
                                class={classes!("h-8", "w-8", "rounded-full")}
                            />
                        }) }
                    </div>
                </div>
                <DashboardPreview />
            </section>

            <section id="features" class="bg-[var(--surface)] py-16">
                <div class="mx-auto max-w-6xl px-4">
                    <h2 class="mb-10 text-center text-3xl font-bold">{ t::FEATURES_TITLE }</h2>
                    <div class="grid gap-6 md:grid-cols-3">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class={classes!(CARD, "text-center")}>
                                <i class={classes!("fas", feature.icon, "mb-4", "text-3xl", "text-[var(--primary)]")}></i>
                                <h3 class="mb-2 text-lg font-semibold">{ feature.title }</h3>
                                <p class="text-sm text-[var(--muted)]">{ feature.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="testimonials" class="py-16">
                <div class="mx-auto max-w-6xl px-4">
                    <h2 class="mb-10 text-center text-3xl font-bold">{ t::TESTIMONIALS_TITLE }</h2>
                    <div class="grid gap-6 md:grid-cols-3">
                        { for TESTIMONIALS.iter().map(|item| html! {
                            <figure class={CARD}>
                                <div class="mb-3 flex items-center gap-3">
                                    <ImageWithFallback
                                        src={item.avatar}
                                        alt={item.name}
                                        class={classes!("h-12", "w-12", "rounded-full", "object-cover")}
                                    />
                                    <figcaption>
                                        <p class="font-semibold">{ item.name }</p>
                                        <p class="text-xs text-[var(--muted)]">
                                            { format!("{}, {}", item.role, item.company) }
                                        </p>
                                    </figcaption>
                                </div>
                                <p class="text-amber-500" aria-label={format!("{} / 5", item.rating)}>
                                    { stars(item.rating) }
                                </p>
                                <blockquote class="mt-2 text-sm text-[var(--muted)]">{ item.comment }</blockquote>
                            </figure>
                        }) }
                    </div>
                </div>
            </section>

            <section id="about" class="bg-[var(--surface)] py-16">
                <div class="mx-auto max-w-3xl space-y-4 px-4 text-center">
                    <h2 class="text-3xl font-bold">{ t::ABOUT_TITLE }</h2>
                    <h3 class="text-xl font-semibold">{ t::ABOUT_SUBTITLE }</h3>
                    <p class="text-[var(--muted)]">{ t::ABOUT_BODY }</p>
                </div>
            </section>

            <section id="pricing" class="py-16">
                <div class="mx-auto max-w-6xl px-4">
                    <h2 class="mb-10 text-center text-3xl font-bold">{ t::PRICING_TITLE }</h2>
                    <div class="grid gap-6 md:grid-cols-3">
                        { for PRICING.iter().map(|tier| html! {
                            <div class={classes!(
                                CARD,
                                "flex",
                                "flex-col",
                                tier.recommended.then_some("ring-2 ring-[var(--primary)]")
                            )}>
                                if tier.recommended {
                                    <span class="mb-2 self-start rounded-full bg-[var(--primary)] px-3 py-0.5 text-xs font-semibold text-white">
                                        { t::RECOMMENDED }
                                    </span>
                                }
                                <h3 class="text-xl font-semibold">{ tier.name }</h3>
                                <p class="my-4 text-3xl font-extrabold">
                                    { format!("${}", tier.price) }
                                    <span class="text-sm font-normal text-[var(--muted)]">{ t::PER_MONTH }</span>
                                </p>
                                <ul class="mb-6 flex-1 space-y-2 text-sm">
                                    { for tier.features.iter().map(|feature| html! {
                                        <li class="flex items-center gap-2">
                                            <i class="fas fa-check-circle text-green-500"></i>
                                            { *feature }
                                        </li>
                                    }) }
                                </ul>
                                <button
                                    type="button"
                                    class={if tier.recommended { BUTTON_PRIMARY } else { BUTTON_SECONDARY }}
                                    onclick={Callback::from(|_: MouseEvent| scroll_to("contact"))}
                                >
                                    { t::CHOOSE_PLAN }
                                </button>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="faq" class="bg-[var(--surface)] py-16">
                <div class="mx-auto max-w-3xl space-y-3 px-4">
                    <h2 class="mb-8 text-center text-3xl font-bold">{ t::FAQ_TITLE }</h2>
                    { for FAQS.iter().map(|(question, answer)| html! {
                        <details class="rounded-xl border border-[var(--border)] bg-[var(--bg)] p-4">
                            <summary class="cursor-pointer font-semibold">{ *question }</summary>
                            <p class="mt-2 text-sm text-[var(--muted)]">{ *answer }</p>
                        </details>
                    }) }
                </div>
            </section>

            <section id="contact" class="py-16">
                <div class="mx-auto max-w-4xl px-4 text-center">
                    <h2 class="text-3xl font-bold">{ t::CONTACT_TITLE }</h2>
                    <p class="mb-10 mt-2 text-[var(--muted)]">{ t::CONTACT_SUBTITLE }</p>
                    <div class="grid gap-6 md:grid-cols-3">
                        { for CONTACTS.iter().map(|(icon, label, value)| html! {
                            <div>
                                <i class={classes!("fas", *icon, "mb-3", "text-3xl", "text-[var(--primary)]")}></i>
                                <p class="font-semibold">{ *label }</p>
                                <p class="text-sm text-[var(--muted)]">{ *value }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <footer class="border-t border-[var(--border)] py-8 text-center text-sm text-[var(--muted)]">
                { t::COPYRIGHT }
            </footer>

            <Dialog
                open={*login_open}
                title={t::LOGIN_TITLE}
                size={DialogSize::Small}
                on_close={close_login.clone()}
            >
                <LoginPanel on_close={close_login} />
            </Dialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use dcampaigner_shared::Role;

    use super::*;

    #[test]
    fn stars_cap_at_five() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn client_login_is_scoped_to_a_client() {
        let session = client_login();
        assert_eq!(session.user.role, Role::Client);
        assert!(session.user.client_id.is_some());
        assert_eq!(session.token, sample::MOCK_TOKEN);
    }

    #[test]
    fn one_tier_is_recommended() {
        assert_eq!(PRICING.iter().filter(|tier| tier.recommended).count(), 1);
    }
}
