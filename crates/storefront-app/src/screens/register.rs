//! Sign-up form.

use std::sync::Arc;

use storefront_data::{AccountClient, Gender, Registration};

use crate::alert::Alert;
use crate::navigation::{Navigator, Route};

const HTTP_FAILURE: &str = "Registration failed. Please check your inputs.";
const OTHER_FAILURE: &str = "An error occurred. Please try again.";

/// Raw form fields as typed.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub phone: String,
    pub address: String,
    /// `"1"` for male, anything else for female.
    pub gender: String,
}

impl RegisterForm {
    /// The request body, with the gender field mapped to [`Gender`].
    pub fn to_registration(&self) -> Registration {
        Registration {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            gender: Gender::from_form(&self.gender),
        }
    }
}

/// Account registration form.
#[derive(Clone)]
pub struct RegisterScreen {
    accounts: AccountClient,
    navigator: Arc<dyn Navigator>,
}

impl RegisterScreen {
    pub fn new(accounts: AccountClient, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            accounts,
            navigator,
        }
    }

    /// Submit the form. Success returns the server's message and goes to login.
    pub async fn submit(&self, form: &RegisterForm) -> Result<Option<String>, Alert> {
        match self.accounts.register(&form.to_registration()).await {
            Ok(message) => {
                tracing::info!(username = %form.username, "registered");
                self.navigator.navigate(Route::Login);
                Ok(message)
            }
            Err(e) => {
                let message = match e.server_message() {
                    Some(message) => message,
                    None if e.is_http_error() => HTTP_FAILURE.to_string(),
                    None => OTHER_FAILURE.to_string(),
                };
                Err(Alert::new("Registration Failed", message))
            }
        }
    }
}
