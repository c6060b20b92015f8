// Reusable components live here.

pub mod charts;
pub mod dashboard_preview;
pub mod dialog;
pub mod error_banner;
pub mod form_fields;
pub mod image_with_fallback;
pub mod layout;
pub mod loading_spinner;
pub mod metric_card;
pub mod platforms;
pub mod tabs;
pub mod tag_input;
pub mod theme_toggle;

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center gap-2 rounded-lg \
                                  bg-[var(--primary)] px-4 py-2 text-sm font-semibold text-white \
                                  shadow-sm transition hover:opacity-90 disabled:cursor-not-allowed \
                                  disabled:opacity-50";

pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center gap-2 rounded-lg \
                                    border border-[var(--border)] bg-[var(--surface)] px-4 py-2 \
                                    text-sm font-medium text-[var(--text)] transition \
                                    hover:bg-[var(--surface-alt)] disabled:cursor-not-allowed \
                                    disabled:opacity-50";

pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center gap-2 rounded-lg \
                                 bg-red-600 px-4 py-2 text-sm font-semibold text-white transition \
                                 hover:bg-red-700 disabled:cursor-not-allowed disabled:opacity-50";

/// Card surface shared by pages and panels.
pub const CARD: &str =
    "rounded-2xl border border-[var(--border)] bg-[var(--surface)] p-6 shadow-sm";
