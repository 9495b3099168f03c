//! Masking for identifying values before they reach the log.
//!
//! Store lookups log the email or username they filter on; these helpers keep
//! only a short prefix so the log stays useful without carrying full PII.

const VISIBLE_CHARS: usize = 3;

fn prefix(s: &str) -> &str {
    match s.char_indices().nth(VISIBLE_CHARS) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Mask an email address, keeping the first three characters of the local
/// part and the whole domain.
///
/// ```
/// use user_directory::utils::log_sanitizer::mask_email;
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at) => format!("{}***{}", prefix(&email[..at]), &email[at..]),
        None => format!("{}***", prefix(email)),
    }
}

/// Mask a username, keeping its first three characters.
pub fn mask_username(username: &str) -> String {
    format!("{}***", prefix(username))
}
