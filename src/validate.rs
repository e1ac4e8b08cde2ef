//! Credential Validation
//!
//! Pure pre-flight checks run before a login or registration form is
//! submitted. Any violation aborts the submission entirely; no network call
//! is issued and the message is shown inline.

/// Special characters the password rule accepts
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Deliberately narrow account policy: addresses must be Gmail. This is not
/// general email validation.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.ends_with("@gmail.com") {
        Ok(())
    } else {
        Err("Email must end with @gmail.com".to_string())
    }
}

/// Password strength rule: length >= 6 with at least one lowercase letter,
/// one uppercase letter, one digit, and one special character.
pub fn validate_password(password: &str) -> Result<(), String> {
    let long_enough = password.chars().count() >= 6;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIALS.contains(c));

    if long_enough && has_lower && has_upper && has_digit && has_special {
        Ok(())
    } else {
        Err(format!(
            "Password must be at least 6 characters and include a lowercase \
             letter, an uppercase letter, a digit, and one of {}",
            PASSWORD_SPECIALS
        ))
    }
}

/// Run both checks; the first violation wins.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    validate_password(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_gmail_address_is_rejected() {
        assert!(validate_email("a@yahoo.com").is_err());
        assert!(validate_email("a@gmail.com.org").is_err());
    }

    #[test]
    fn gmail_address_is_accepted() {
        assert!(validate_email("x@gmail.com").is_ok());
    }

    #[test]
    fn weak_password_is_rejected() {
        // missing uppercase and special character
        assert!(validate_password("abc123").is_err());
        // too short
        assert!(validate_password("Ab1!").is_err());
        // missing digit
        assert!(validate_password("Abcdef!").is_err());
    }

    #[test]
    fn strong_password_is_accepted() {
        assert!(validate_password("Abc123!").is_ok());
    }

    #[test]
    fn credentials_check_reports_first_violation() {
        assert_eq!(
            validate_credentials("a@yahoo.com", "Abc123!"),
            Err("Email must end with @gmail.com".to_string())
        );
        assert!(validate_credentials("x@gmail.com", "Abc123!").is_ok());
    }
}
