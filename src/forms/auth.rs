use serde::Deserialize;
use validator::Validate;

use crate::domain::types::AccountEmail;
use crate::forms::{FormError, field, non_blank};

pub const EMAIL_AND_PASSWORD_REQUIRED: &str = "Email and password are required";

#[derive(Debug, Default, Deserialize, Validate)]
/// Body of `POST /api/auth/signup`.
pub struct SignupForm {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6, max = 128))]
    pub password: Option<String>,
    #[validate(length(max = 200))]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
/// Body of `POST /api/auth/login`.
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Normalized signup request ready for hashing.
#[derive(Debug)]
pub struct Signup {
    pub email: AccountEmail,
    pub password: String,
    pub name: Option<String>,
}

/// Normalized login request.
#[derive(Debug)]
pub struct Credentials {
    pub email: AccountEmail,
    pub password: String,
}

impl TryFrom<SignupForm> for Signup {
    type Error = FormError;

    fn try_from(form: SignupForm) -> Result<Self, Self::Error> {
        let (Some(email), Some(password)) = (
            non_blank(form.email.clone()),
            form.password.clone().filter(|p| !p.is_empty()),
        ) else {
            return Err(FormError::MissingFields(EMAIL_AND_PASSWORD_REQUIRED));
        };
        let form = SignupForm {
            email: Some(email.clone()),
            ..form
        };
        form.validate()?;

        Ok(Signup {
            email: field("email", AccountEmail::new(email))?,
            password,
            name: non_blank(form.name),
        })
    }
}

impl TryFrom<LoginForm> for Credentials {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        let (Some(email), Some(password)) = (
            non_blank(form.email),
            form.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(FormError::MissingFields(EMAIL_AND_PASSWORD_REQUIRED));
        };

        Ok(Credentials {
            email: field("email", AccountEmail::new(email))?,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signup(value: serde_json::Value) -> Result<Signup, FormError> {
        Signup::try_from(serde_json::from_value::<SignupForm>(value).unwrap())
    }

    #[test]
    fn signup_normalizes_email() {
        let signup = signup(json!({"email": " Desk@Clinic.org ", "password": "secret1"})).unwrap();
        assert_eq!(signup.email.as_str(), "desk@clinic.org");
        assert_eq!(signup.name, None);
    }

    #[test]
    fn signup_requires_email_and_password() {
        let err = signup(json!({"email": "desk@clinic.org"})).unwrap_err();
        assert_eq!(err.to_string(), EMAIL_AND_PASSWORD_REQUIRED);
    }

    #[test]
    fn short_password_fails_validation() {
        let err = signup(json!({"email": "desk@clinic.org", "password": "abc"})).unwrap_err();
        assert!(matches!(err, FormError::Validation(_)));
    }

    #[test]
    fn malformed_email_fails_validation() {
        let err = signup(json!({"email": "desk", "password": "secret1"})).unwrap_err();
        assert!(matches!(err, FormError::Validation(_)));
    }

    #[test]
    fn login_requires_both_fields() {
        let form: LoginForm = serde_json::from_value(json!({"password": "secret1"})).unwrap();
        assert!(matches!(
            Credentials::try_from(form),
            Err(FormError::MissingFields(_))
        ));
    }
}
