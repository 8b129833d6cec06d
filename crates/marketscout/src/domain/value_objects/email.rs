//! Email address format rule

use regex::Regex;
use std::sync::OnceLock;

/// `local@domain.tld` with no whitespace or extra `@` in any segment
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Check an address against the accepted email shape.
///
/// Deliberately permissive: consecutive dots pass, quoted local parts fail.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}
