//! Login, registration and profile schemas.

use serde::{Deserialize, Serialize};

use super::User;

/// Body of `POST /login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        Ok(())
    }
}

/// Response of `POST /login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, alias = "RefreshToken")]
    pub refresh: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

/// Body of `POST /user`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.first_name.trim().is_empty() {
            return Err("First name is required");
        }
        if self.last_name.trim().is_empty() {
            return Err("Last name is required");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        Ok(())
    }
}

/// Editable profile fields; also the body of `PUT /user/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }

    /// Initial form state for whoever is signed in, blank without a session.
    pub fn seed(user: Option<&User>) -> Self {
        user.map(Self::from_user).unwrap_or_default()
    }

    /// Whether the form differs from the record it was loaded from.
    pub fn is_dirty(&self, user: &User) -> bool {
        *self != Self::from_user(user)
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.first_name.trim().is_empty() {
            return Err("First name is required");
        }
        if self.last_name.trim().is_empty() {
            return Err("Last name is required");
        }
        if self.email.trim().is_empty() {
            return Err("Email is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        serde_json::from_value(json!({
            "Id": 2,
            "FirstName": "Ada",
            "LastName": "Lovelace",
            "Email": "ada@example.com"
        }))
        .unwrap()
    }

    #[test]
    fn test_login_request_wire_keys() {
        let req = LoginRequest::new("  ada@example.com ", "secret");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"email": "ada@example.com", "password": "secret"})
        );
        assert!(req.validate().is_ok());
        assert_eq!(
            LoginRequest::new("", "x").validate(),
            Err("Email is required")
        );
        assert_eq!(
            LoginRequest::new("a@b.c", "").validate(),
            Err("Password is required")
        );
    }

    #[test]
    fn test_login_response_accepts_refresh_variants() {
        let with_refresh: LoginResponse = serde_json::from_value(json!({
            "Token": "t",
            "Refresh": "r",
            "ExpiresAt": 1700000000,
            "User": {"Id": 1, "Email": "a@b.c"}
        }))
        .unwrap();
        assert_eq!(with_refresh.refresh.as_deref(), Some("r"));

        let aliased: LoginResponse = serde_json::from_value(json!({
            "Token": "t",
            "RefreshToken": "r2",
            "User": {"Id": 1, "Email": "a@b.c"}
        }))
        .unwrap();
        assert_eq!(aliased.refresh.as_deref(), Some("r2"));

        let bare: LoginResponse = serde_json::from_value(json!({
            "Token": "t",
            "User": {"Id": 1, "Email": "a@b.c"}
        }))
        .unwrap();
        assert!(bare.refresh.is_none());
        assert!(bare.expires_at.is_none());
    }

    #[test]
    fn test_register_request_validation() {
        let mut req = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "FirstName": "Ada",
                "LastName": "Lovelace",
                "Email": "ada@example.com",
                "Password": "pw"
            })
        );

        req.last_name = "  ".to_string();
        assert_eq!(req.validate(), Err("Last name is required"));
    }

    #[test]
    fn test_profile_form_dirty_tracking() {
        let user = user();
        let mut form = ProfileForm::from_user(&user);
        assert!(!form.is_dirty(&user));

        form.first_name = "Augusta".to_string();
        assert!(form.is_dirty(&user));

        form.first_name = "Ada".to_string();
        assert!(!form.is_dirty(&user));

        form.email.clear();
        assert_eq!(form.validate(), Err("Email is required"));
    }

    #[test]
    fn test_seeded_profile_form_starts_pristine() {
        let user = user();
        let form = ProfileForm::seed(Some(&user));
        assert_eq!(form.first_name, "Ada");
        assert!(!form.is_dirty(&user));

        assert_eq!(ProfileForm::seed(None), ProfileForm::default());
    }
}
