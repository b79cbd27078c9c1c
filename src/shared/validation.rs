//! Input validation shared by the server handlers and the client.

use crate::shared::error::SharedError;

/// Longest title accepted for boards, lists and cards
pub const MAX_TITLE_LEN: usize = 200;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim a title and reject empty or oversized values
pub fn validate_title(field: &str, title: &str) -> Result<String, SharedError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation(field, "must not be empty"));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(SharedError::validation(
            field,
            format!("must be at most {} characters", MAX_TITLE_LEN),
        ));
    }
    Ok(trimmed.to_string())
}

/// Basic `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty()
                && !host.starts_with('.')
                && !host.ends_with('.')
                && tld.len() >= 2
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}
