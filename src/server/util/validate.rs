//! Lexical validation helpers shared across request payloads.

/// Checks that a string looks like an email address.
///
/// Deliberately shallow: one `@` with a non-empty local part and a domain
/// containing a dot. Deliverability is the mail system's problem; this only
/// catches obvious typos at the form boundary.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
