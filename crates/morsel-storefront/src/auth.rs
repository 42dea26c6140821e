//! Authentication exchange types.
//!
//! Credentials are only forwarded to the authentication endpoint: no
//! hashing, no token minting, no session protocol on this side. What comes
//! back on success is an identity record, stored in memory and through the
//! session write path.

use morsel_commerce::UserId;
use serde::{Deserialize, Serialize};

/// The two faces of the authentication view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::SignUp => "sign_up",
        }
    }

    /// Heading shown on the authentication view.
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::SignUp => "Sign up",
        }
    }

    /// The endpoint this mode posts to.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            AuthMode::Login => "/api/auth/login",
            AuthMode::SignUp => "/api/auth/register",
        }
    }

    /// The other mode; the view's two-way toggle.
    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }
}

/// Form data posted to the authentication endpoint.
///
/// `name` and `phone` are collected only by the sign-up form and stay off
/// the wire for login.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

impl Credentials {
    /// Credentials for a login attempt.
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            phone: None,
            password: password.into(),
        }
    }

    /// Credentials for a registration attempt.
    pub fn sign_up(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: email.into(),
            phone: Some(phone.into()),
            password: password.into(),
        }
    }
}

/// The identity record the authentication endpoint returns, and the record
/// the session store persists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggled(), AuthMode::Login);
    }

    #[test]
    fn test_mode_endpoints() {
        assert_eq!(AuthMode::Login.endpoint_path(), "/api/auth/login");
        assert_eq!(AuthMode::SignUp.endpoint_path(), "/api/auth/register");
    }

    #[test]
    fn test_login_credentials_omit_signup_fields() {
        let credentials = Credentials::login("ada@example.com", "hunter2");
        let json = serde_json::to_value(&credentials).unwrap();

        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["password"], "hunter2");
        assert!(json.get("name").is_none());
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_sign_up_credentials_carry_all_fields() {
        let credentials = Credentials::sign_up("Ada", "ada@example.com", "020", "hunter2");
        let json = serde_json::to_value(&credentials).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["phone"], "020");
    }

    #[test]
    fn test_user_record_tolerates_extra_fields() {
        let json = r#"{ "id": "user-1", "email": "ada@example.com", "role": "customer" }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "user-1");
        assert!(record.name.is_none());
    }
}
