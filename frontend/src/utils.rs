use chrono::NaiveDate;

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Current local time as a `datetime-local` input value (`YYYY-MM-DDTHH:MM`).
pub fn now_local_datetime() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date(),
        now.get_hours(),
        now.get_minutes()
    )
}

/// `1234567` -> `1,234,567`
pub fn format_number(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar amount with thousands separators; cents only when non-zero.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(&(cents / 100).to_string());
    match cents % 100 {
        0 => format!("{sign}${whole}"),
        frac => format!("{sign}${whole}.{frac:02}"),
    }
}

/// Short axis label: `2400000` -> `2.4M`, `1500` -> `1.5K`.
pub fn format_compact(value: f64) -> String {
    let (scaled, suffix) = if value.abs() >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if value.abs() >= 1_000.0 {
        (value / 1_000.0, "K")
    } else {
        return format!("{}", value.round() as i64);
    };
    let text = format!("{scaled:.1}");
    format!("{}{suffix}", text.trim_end_matches(".0"))
}

/// Percentage with two decimals, `N/A` when the rate is undefined.
pub fn format_percent(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}%")).unwrap_or_else(|| "N/A".to_string())
}

/// Wire value to a label: `lowest_cost` -> `Lowest Cost`, `AWARENESS` -> `Awareness`.
pub fn humanize(raw: &str) -> String {
    raw.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                },
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// One entry per non-blank line, trimmed.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_grouped_by_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(75_000), "75,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_drops_zero_cents() {
        assert_eq!(format_currency(4_800.0), "$4,800");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(1_234.567), "$1,234.57");
        assert_eq!(format_currency(-20.0), "-$20");
    }

    #[test]
    fn compact_labels() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1_500.0), "1.5K");
        assert_eq!(format_compact(2_000.0), "2K");
        assert_eq!(format_compact(2_400_000.0), "2.4M");
    }

    #[test]
    fn percent_handles_undefined_rates() {
        assert_eq!(format_percent(Some(3.3333)), "3.33%");
        assert_eq!(format_percent(None), "N/A");
    }

    #[test]
    fn wire_values_become_labels() {
        assert_eq!(humanize("lowest_cost"), "Lowest Cost");
        assert_eq!(humanize("AWARENESS"), "Awareness");
        assert_eq!(humanize("performance-max"), "Performance Max");
        assert_eq!(humanize("SOCIAL_ISSUES"), "Social Issues");
    }

    #[test]
    fn lines_skip_blanks() {
        assert_eq!(parse_lines("a@x.io\n\n  b@x.io  \n"), vec!["a@x.io", "b@x.io"]);
        assert!(parse_lines("   ").is_empty());
    }

    #[test]
    fn dates_are_human_readable() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        assert_eq!(format_date(date), "Jun 1, 2024");
    }
}
