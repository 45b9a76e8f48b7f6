//! Login and registration endpoints.

use serde::{Deserialize, Serialize};

use crate::{FetchClient, FetchError};

/// Username and password sent to `/login`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Gender code expected by the registration endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl Gender {
    /// Map a form value: `"1"` is male, anything else female.
    pub fn from_form(value: &str) -> Self {
        if value.trim() == "1" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Wire code.
    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Sign-up form payload.
#[derive(Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub phone: String,
    pub address: String,
    pub gender: Gender,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("gender", &self.gender)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the account endpoints.
#[derive(Debug, Clone)]
pub struct AccountClient {
    client: FetchClient,
}

impl AccountClient {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Authenticate. Any 2xx answer counts as success; the body is returned as-is.
    pub async fn login(&self, credentials: &Credentials) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .post("/login")
            .json(credentials)?
            .send()
            .await?
            .error_for_status()
            .inspect_err(|e| {
                tracing::warn!(username = %credentials.username, error = %e, "login rejected")
            })?;

        if response.body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        response.json()
    }

    /// Create an account and return the server's confirmation message, if any.
    pub async fn register(&self, registration: &Registration) -> Result<Option<String>, FetchError> {
        let response = self
            .client
            .post("/register")
            .json(registration)?
            .send()
            .await?
            .error_for_status()
            .inspect_err(|e| {
                tracing::warn!(username = %registration.username, error = %e, "registration rejected")
            })?;

        let body: MessageBody = response.json().unwrap_or_default();
        Ok(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::StaticTransport;
    use crate::Method;
    use serde_json::json;
    use std::sync::Arc;

    fn accounts(transport: &Arc<StaticTransport>) -> AccountClient {
        AccountClient::new(FetchClient::new(transport.clone()).with_base_url("http://api"))
    }

    fn registration(gender: &str) -> Registration {
        Registration {
            name: "An Nguyen".into(),
            username: "an".into(),
            email: "an@example.com".into(),
            password: "secret123".into(),
            password_confirmation: "secret123".into(),
            phone: "0901234567".into(),
            address: "Hanoi".into(),
            gender: Gender::from_form(gender),
        }
    }

    #[test]
    fn test_gender_mapping() {
        assert_eq!(Gender::from_form("1").code(), 1);
        assert_eq!(Gender::from_form("0").code(), 2);
        assert_eq!(Gender::from_form("").code(), 2);
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let shown = format!("{:?} {:?}", Credentials::new("an", "hunter2"), registration("1"));
        assert!(!shown.contains("hunter2"));
        assert!(!shown.contains("secret123"));
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let transport = Arc::new(StaticTransport::new().respond_json(
            Method::Post,
            "/login",
            json!({"status": "ok"}),
        ));

        let body = accounts(&transport)
            .login(&Credentials::new("an", "pw"))
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"username": "an", "password": "pw"}))
        );
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let transport = Arc::new(StaticTransport::new().respond_status(
            Method::Post,
            "/login",
            401,
            "",
        ));

        let err = accounts(&transport)
            .login(&Credentials::new("an", "bad"))
            .await
            .unwrap_err();
        assert!(err.is_http_error());
    }

    #[tokio::test]
    async fn test_register_sends_gender_code() {
        let transport = Arc::new(StaticTransport::new().respond_json(
            Method::Post,
            "/register",
            json!({"message": "Registered"}),
        ));

        let message = accounts(&transport).register(&registration("1")).await.unwrap();
        assert_eq!(message.as_deref(), Some("Registered"));

        let sent = transport.requests()[0].body.clone().unwrap();
        assert_eq!(sent["gender"], 1);
        assert_eq!(sent["password_confirmation"], "secret123");
    }

    #[tokio::test]
    async fn test_register_error_carries_server_message() {
        let transport = Arc::new(StaticTransport::new().respond_status(
            Method::Post,
            "/register",
            422,
            r#"{"message": "The username has already been taken."}"#,
        ));

        let err = accounts(&transport).register(&registration("2")).await.unwrap_err();
        assert_eq!(
            err.server_message().as_deref(),
            Some("The username has already been taken.")
        );
    }
}
