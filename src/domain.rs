const EMAIL_SEPARATOR: char = '@';

/// Returns the lower-cased domain of `email`, or `None` unless the value
/// splits into exactly a user part and a domain part, both non-empty.
pub fn email_domain(email: &str) -> Option<String> {
    let mut parts = email.split(EMAIL_SEPARATOR);
    let (user, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(user), Some(domain), None) => (user, domain),
        _ => return None,
    };

    if user.is_empty() || domain.is_empty() {
        return None;
    }

    Some(normalize_domain(domain))
}

pub fn normalize_domain(domain: &str) -> String {
    domain.to_lowercase()
}
