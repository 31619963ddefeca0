use crate::error::AppError;
use crate::utils::constants::MIN_PASSWORD_LEN;

/// Loose `local@domain.tld` check, same shape the sign-in form enforces.
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(|c| c.is_whitespace() || "<>()[]\\,;:@\"".contains(c)) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels
        .iter()
        .all(|l| !l.is_empty() && l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    let tld_ok = labels
        .last()
        .map(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false);
    labels_ok && tld_ok
}

pub fn validate_login(email: &str, password: &str) -> Result<(), AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("Email and password are required".into()));
    }
    if !validate_email(email) {
        return Err(AppError::Validation("Please enter a valid email address".into()));
    }
    Ok(())
}

pub fn validate_registration(email: &str, full_name: &str, password: &str) -> Result<(), AppError> {
    validate_login(email, password)?;
    if full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("student@pmu.edu.sa"));
        assert!(validate_email("first.last+tag@uni-mail.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "no-at-sign", "a@b", "a@b.c", "@pmu.edu", "a b@pmu.edu", "a@pmu..edu", "a@pmu.3du"] {
            assert!(!validate_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let err = validate_login("", "secret").unwrap_err();
        assert_eq!(err.user_message(), "Email and password are required");
        assert!(validate_login("s@pmu.edu", "x").is_ok());
    }

    #[test]
    fn registration_checks_name_and_password_strength() {
        assert_eq!(
            validate_registration("s@pmu.edu", "  ", "secret1").unwrap_err(),
            AppError::Validation("Full name is required".into())
        );
        assert_eq!(
            validate_registration("s@pmu.edu", "Sara", "12345").unwrap_err(),
            AppError::Validation("Password must be at least 6 characters".into())
        );
        assert!(validate_registration("s@pmu.edu", "Sara", "123456").is_ok());
    }
}
