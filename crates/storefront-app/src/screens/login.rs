//! Login form.

use std::sync::Arc;

use storefront_data::{AccountClient, Credentials};

use crate::alert::Alert;
use crate::navigation::{Navigator, Route};

/// Login form.
#[derive(Clone)]
pub struct LoginScreen {
    accounts: AccountClient,
    navigator: Arc<dyn Navigator>,
}

impl LoginScreen {
    pub fn new(accounts: AccountClient, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            accounts,
            navigator,
        }
    }

    /// Submit the form. Success goes to the home screen.
    ///
    /// Every failure raises the same alert, whether the server rejected the
    /// credentials or could not be reached.
    pub async fn submit(&self, username: &str, password: &str) -> Result<(), Alert> {
        match self.accounts.login(&Credentials::new(username, password)).await {
            Ok(_) => {
                tracing::info!(username, "logged in");
                self.navigator.navigate(Route::Home);
                Ok(())
            }
            Err(_) => Err(Alert::login_failed()),
        }
    }

    pub fn open_register(&self) {
        self.navigator.navigate(Route::Register);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RouteHistory;
    use serde_json::json;
    use storefront_data::mock::StaticTransport;
    use storefront_data::{FetchClient, FetchError, Method};

    fn screen(transport: StaticTransport) -> (LoginScreen, Arc<RouteHistory>) {
        let history = Arc::new(RouteHistory::new(Route::Login));
        let client = FetchClient::new(Arc::new(transport)).with_base_url("http://api");
        (LoginScreen::new(AccountClient::new(client), history.clone()), history)
    }

    #[tokio::test]
    async fn test_success_navigates_home() {
        let (login, history) = screen(StaticTransport::new().respond_json(
            Method::Post,
            "/login",
            json!({"user": {"id": 1}}),
        ));

        login.submit("an", "pw").await.unwrap();
        assert_eq!(history.current(), Route::Home);
    }

    #[tokio::test]
    async fn test_rejected_raises_alert() {
        let (login, history) = screen(StaticTransport::new().respond_status(
            Method::Post,
            "/login",
            401,
            r#"{"message": "Unauthorized"}"#,
        ));

        let alert = login.submit("an", "bad").await.unwrap_err();
        assert_eq!(alert, Alert::new("Login Failed", "Invalid username or password"));
        assert_eq!(history.current(), Route::Login);
    }

    #[tokio::test]
    async fn test_network_failure_raises_same_alert() {
        let (login, _) = screen(StaticTransport::new().fail(
            Method::Post,
            "/login",
            FetchError::RequestError("refused".into()),
        ));

        assert_eq!(login.submit("an", "pw").await.unwrap_err(), Alert::login_failed());
    }
}
