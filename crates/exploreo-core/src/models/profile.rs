//! User profile model.

use serde::{Deserialize, Serialize};

/// Profile document, one per authenticated identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Identity id, shared with the auth gate
    pub id: String,

    /// Name chosen at registration
    pub display_name: String,

    /// Sign-in email
    pub email: String,

    /// Interface language, taken from settings at registration
    pub preferred_language: String,
}
