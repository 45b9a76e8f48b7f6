//! Promotional banner records.

use crate::ids::BannerId;
use serde::{Deserialize, Serialize};

/// A slide in the home screen carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    #[serde(default)]
    pub name: Option<String>,
    /// Relative image filename.
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Banner {
    pub fn new(id: impl Into<BannerId>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            image: image.into(),
            link: None,
        }
    }
}
