use std::env;

use serde::{Deserialize, Serialize};

/// The single shared operator login. Sourced from the environment so
/// tests can substitute their own pair.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string()),
            password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

/// Pure credential check; no token or session is issued.
pub fn check_login(credentials: &Credentials, login: &Login) -> LoginResponse {
    if login.email == credentials.email && login.password == credentials.password {
        LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            user: Some(SessionUser {
                email: login.email.clone(),
            }),
        }
    } else {
        LoginResponse {
            success: false,
            message: "Incorrect email or password".to_string(),
            user: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            email: "correct@example.com".to_string(),
            password: "correctpass".to_string(),
        }
    }

    #[test]
    fn matching_pair_succeeds() {
        let response = check_login(
            &credentials(),
            &Login {
                email: "correct@example.com".to_string(),
                password: "correctpass".to_string(),
            },
        );
        assert!(response.success);
        assert_eq!(response.user.unwrap().email, "correct@example.com");
    }

    #[test]
    fn any_other_pair_fails_without_user() {
        let response = check_login(
            &credentials(),
            &Login {
                email: "correct@example.com".to_string(),
                password: "wrong".to_string(),
            },
        );
        assert!(!response.success);
        assert!(!response.message.is_empty());
        assert!(response.user.is_none());
    }
}
