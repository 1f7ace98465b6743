use crate::dto::{LoginRequest, RegisterRequest};
use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn login(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    check_password_len(password)?;
    Ok(LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

pub fn register(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, ValidationError> {
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingRegistrationFields);
    }
    check_password_len(password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(RegisterRequest {
        user_name: username.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

/// Gate for running the analysis step of the report wizard.
pub fn report(description: &str, location: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() || location.trim().is_empty() {
        return Err(ValidationError::MissingReportFields);
    }
    Ok(())
}

fn check_password_len(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rules() {
        assert_eq!(login("", "secret1"), Err(ValidationError::MissingCredentials));
        assert_eq!(login("a@b.c", ""), Err(ValidationError::MissingCredentials));
        assert_eq!(login("a@b.c", "12345"), Err(ValidationError::PasswordTooShort));
        let req = login(" a@b.c ", "123456").expect("valid");
        assert_eq!(req.email, "a@b.c");
    }

    #[test]
    fn register_checks_in_order() {
        assert_eq!(
            register("", "a@b.c", "secret1", "secret1"),
            Err(ValidationError::MissingRegistrationFields)
        );
        assert_eq!(
            register("ravi", "a@b.c", "short", "short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            register("ravi", "a@b.c", "secret1", "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(register("ravi", "a@b.c", "secret1", "secret1").is_ok());
    }

    #[test]
    fn report_needs_description_and_location() {
        assert!(report("smoke", "").is_err());
        assert!(report("  ", "MG Road").is_err());
        assert!(report("smoke", "MG Road").is_ok());
    }
}
