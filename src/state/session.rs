//! User session props consumed by the header

use serde::{Deserialize, Serialize};

/// Logged-in user as handed to the header by the session store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(rename = "eMail", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserSession {
    /// The avatar menu is only rendered for a session with an e-mail
    pub fn has_avatar(&self) -> bool {
        self.email.as_deref().is_some_and(|email| !email.is_empty())
    }
}
