/// Validates the syntax of an email address before it reaches the store.
///
/// Checks the shape the request schema promises: exactly one `@` separating
/// a non-empty local part from a dotted domain, with the RFC 5321 length
/// caps (254 total, 64 local part, 63 per domain label).
///
/// # Examples
/// ```
/// use user_registry::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("missing-at-sign"));
/// assert!(!is_valid_email("user@"));
/// ```
///
/// # Arguments
/// * `email` - A string slice containing the email address to validate
///
/// # Returns
/// `true` if the email address meets the syntax requirements, `false` otherwise
pub fn is_valid_email(email: &str) -> bool {
    // Overall length constraint (RFC 5321)
    if email.len() > 254 {
        return false;
    }

    let (local_part, domain_part) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    // Local part length (RFC 5321)
    if local_part.is_empty() || local_part.len() > 64 {
        return false;
    }

    if !is_valid_local_part(local_part) {
        return false;
    }

    is_valid_domain_part(domain_part)
}

/// Validates the local-part component as a dot-atom: dot-separated runs of
/// atext characters, no empty runs, no second `@`.
fn is_valid_local_part(local: &str) -> bool {
    let parts: Vec<&str> = local.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return false;
    }

    parts.iter().all(|part| {
        part.chars()
            .all(|c| c.is_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c))
    })
}

/// Validates the domain as dot-separated labels with at least two labels,
/// each alphanumeric-or-hyphen and not hyphen-terminated.
fn is_valid_domain_part(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("carlos@empresa.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user+tag@example.co.uk"));
        assert!(is_valid_email("u_1@sub.example.org"));
    }

    #[test]
    fn test_rejects_missing_at_sign() {
        assert!(!is_valid_email("carlosempresa.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert!(!is_valid_email("@empresa.com"));
    }

    #[test]
    fn test_rejects_empty_or_dotless_domain() {
        assert!(!is_valid_email("carlos@"));
        assert!(!is_valid_email("carlos@empresa"));
    }

    #[test]
    fn test_rejects_consecutive_dots() {
        assert!(!is_valid_email("carlos..silva@empresa.com"));
        assert!(!is_valid_email("carlos@empresa..com"));
    }

    #[test]
    fn test_rejects_spaces() {
        assert!(!is_valid_email("carlos silva@empresa.com"));
        assert!(!is_valid_email("carlos@emp resa.com"));
    }

    #[test]
    fn test_rejects_second_at_sign() {
        assert!(!is_valid_email("carlos@silva@empresa.com"));
    }

    #[test]
    fn test_rejects_hyphen_edges_in_domain_labels() {
        assert!(!is_valid_email("carlos@-empresa.com"));
        assert!(!is_valid_email("carlos@empresa-.com"));
        assert!(is_valid_email("carlos@minha-empresa.com"));
    }

    #[test]
    fn test_rejects_overlong_addresses() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{}@example.com", local)));

        let overall = format!("{}@{}.com", "a".repeat(64), "b".repeat(200));
        assert!(!is_valid_email(&overall));
    }

    #[test]
    fn test_accepts_max_length_local_part() {
        let local = "a".repeat(64);
        assert!(is_valid_email(&format!("{}@example.com", local)));
    }
}
