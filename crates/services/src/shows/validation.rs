use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

pub const MAX_ACTOR_NAME_LENGTH: usize = 100;

/// Check that an actor name is 1-100 characters of ASCII letters, digits,
/// whitespace, hyphens, apostrophes and periods.
pub fn validate_actor_name(actor_name: &str) -> bool {
    static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

    if actor_name.is_empty() || actor_name.chars().count() > MAX_ACTOR_NAME_LENGTH {
        return false;
    }

    let pattern = NAME_PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9\s\-'.]+$").expect("Failed to compile actor name regex")
    });

    pattern.is_match(actor_name)
}

/// Turn URL-style names into the form the catalog search expects.
///
/// A name without spaces but with hyphens ("bryan-cranston") gets its hyphens
/// replaced by spaces. Anything else is returned as-is, so hyphenated names
/// that already contain a space ("Jean-Claude Van Damme") are untouched.
pub fn normalize_actor_name(actor_name: &str) -> Cow<'_, str> {
    if !actor_name.contains(' ') && actor_name.contains('-') {
        Cow::Owned(actor_name.replace('-', " "))
    } else {
        Cow::Borrowed(actor_name)
    }
}
