//! Structural validation of request fields.
//!
//! Validation is exhaustive: every violation is collected before reporting,
//! so clients see all field problems in one response.

/// Field messages for a registration request. Empty means the request is
/// structurally valid.
pub fn registration(username: &str, email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if username.is_empty() {
        errors.push("Username is required.".to_string());
    } else if username.chars().count() < 3 {
        errors.push("Username must be at least 3 characters.".to_string());
    }

    if email.is_empty() {
        errors.push("Email is required.".to_string());
    } else if !email_is_valid(email) {
        errors.push("Email format is invalid.".to_string());
    }

    if password.is_empty() {
        errors.push("Password is required.".to_string());
    } else if password.chars().count() < 6 {
        errors.push("Password must be at least 6 characters.".to_string());
    }

    errors
}

/// Field messages for a login request. Only presence is checked.
pub fn login(username: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if username.is_empty() {
        errors.push("Username is required.".to_string());
    }

    if password.is_empty() {
        errors.push("Password is required.".to_string());
    }

    errors
}

/// Whether an address looks like `local@domain` with a dotted domain.
pub fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registration_valid() {
        let errors = registration("alice", "alice@example.com", "secret1");

        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn registration_short_username() {
        let errors = registration("al", "alice@example.com", "secret1");

        assert_eq!(errors, vec!["Username must be at least 3 characters."]);
    }

    #[test]
    fn registration_collects_all_violations() {
        let errors = registration("", "not-an-email", "short");

        assert_eq!(
            errors,
            vec![
                "Username is required.",
                "Email format is invalid.",
                "Password must be at least 6 characters.",
            ]
        );
    }

    #[test]
    fn login_collects_all_violations() {
        let errors = login("", "");

        assert_eq!(errors, vec!["Username is required.", "Password is required."]);
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(email_is_valid("alice@example.com"));
        assert!(email_is_valid("a.b+c@mail.example.co.uk"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!email_is_valid("alice"));
        assert!(!email_is_valid("alice@"));
        assert!(!email_is_valid("@example.com"));
        assert!(!email_is_valid("alice@example"));
        assert!(!email_is_valid("alice@.com"));
        assert!(!email_is_valid("alice@example.com."));
        assert!(!email_is_valid("alice@exa mple.com"));
        assert!(!email_is_valid("alice@exa@mple.com"));
    }
}
