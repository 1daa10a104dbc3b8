/// Validates the syntax of an email address before it reaches the store.
///
/// This is the `format: email` level of strictness applied to request
/// bodies: a single unquoted `@`, a printable local part, and a dotted
/// alphanumeric domain with length limits enforced.
///
/// # Examples
/// ```
/// use user_registry::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(!is_valid_email("missing-at-sign"));
/// ```
///
/// # Arguments
/// * `email` - A string slice containing the email address to validate
///
/// # Returns
/// `true` if the email address meets the syntax requirements, `false` otherwise
pub mod syntax;
