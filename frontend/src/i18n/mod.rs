pub mod en_us;

pub use en_us as current;

/// Substitutes the first `{}` in `template`.
pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

/// Substitutes the first two `{}` placeholders in order.
pub fn fill_two(
    template: &str,
    first: impl std::fmt::Display,
    second: impl std::fmt::Display,
) -> String {
    let first_pass = template.replacen("{}", &first.to_string(), 1);
    first_pass.replacen("{}", &second.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_fill_left_to_right() {
        assert_eq!(fill_one(current::common::UNKNOWN_CLIENT, 7), "Client #7");
        assert_eq!(fill_two(current::sms_form::COUNTER, 12, 160), "12/160 characters");
    }
}
