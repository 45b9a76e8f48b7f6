//! Modal messages raised by screens.

use std::fmt;

/// A blocking message with a title, shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Raised when the login endpoint rejects the credentials or cannot be reached.
    pub fn login_failed() -> Self {
        Self::new("Login Failed", "Invalid username or password")
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl std::error::Error for Alert {}
