use std::sync::OnceLock;

use regex::Regex;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 9;
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn name_pattern() -> &'static Regex {
    NAME_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z\p{Cyrillic}'’ʼ -]+$").expect("name pattern compiles")
    })
}

/// Latin or Cyrillic letters, spaces, apostrophes and hyphens; at least two
/// characters once trimmed.
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.chars().count() >= MIN_NAME_CHARS && name_pattern().is_match(trimmed)
}

/// Exactly one `@` separating a non-empty local part from a dotted domain
/// that neither starts nor ends with `.`.
pub fn is_valid_email(email: &str) -> bool {
    let trimmed = email.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = trimmed.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Digits plus an optional leading `+`, with separators stripped.
pub fn normalize_phone(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut normalized = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        normalized.push('+');
    }
    normalized.extend(trimmed.chars().filter(char::is_ascii_digit));
    normalized
}

pub fn is_valid_phone(phone: &str) -> bool {
    normalize_phone(phone)
        .chars()
        .filter(char::is_ascii_digit)
        .count()
        >= MIN_PHONE_DIGITS
}

pub fn is_valid_password(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
}

pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    !confirmation.is_empty() && password == confirmation
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_accept_latin_cyrillic_and_punctuation() {
        assert!(is_valid_name("Jo"));
        assert!(is_valid_name("  Mary-Jane O'Neil "));
        assert!(is_valid_name("Олександр"));
        assert!(is_valid_name("Мар’яна Ївченко"));
        assert!(is_valid_name("Мʼята"));
    }

    #[test]
    fn names_reject_short_or_foreign_characters() {
        assert!(!is_valid_name("J"));
        assert!(!is_valid_name("   A  "));
        assert!(!is_valid_name("R2-D2"));
        assert!(!is_valid_name("user@example"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn email_requires_single_at_and_dotted_domain() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("  first.last+tag@mail.example.org "));

        assert!(!is_valid_email("ax.com"));
        assert!(!is_valid_email("a@@x.com"));
        assert!(!is_valid_email("a@b@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@x.com."));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@x.com"));
    }

    #[test]
    fn phone_counts_digits_only() {
        assert_eq!(normalize_phone(" +38 (067) 123-45-67 "), "+380671234567");
        assert!(is_valid_phone("+38 (067) 123-45-67"));
        assert!(is_valid_phone("123456789"));
        assert!(!is_valid_phone("12345678"));
        assert!(!is_valid_phone("+++--"));
    }

    #[test]
    fn password_rules() {
        assert!(is_valid_password("pw123456", DEFAULT_PASSWORD_MIN_LENGTH));
        assert!(!is_valid_password("pw12345", DEFAULT_PASSWORD_MIN_LENGTH));
        assert!(is_valid_password("pw1234", 6));
        assert!(passwords_match("secret", "secret"));
        assert!(!passwords_match("secret", "Secret"));
        assert!(!passwords_match("", ""));
    }
}
