//! Render model for the fixed header bar

use serde::{Deserialize, Serialize};

use crate::{clock::CountdownDisplay, state::UserSession};

/// Everything a client needs to draw the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderView {
    /// `mm:ss`
    pub countdown: String,
    pub minutes: String,
    pub seconds: String,
    pub app_title: String,
    pub page_title: String,
    pub avatar: Option<AvatarSlot>,
    pub locale_selector: LocaleSelector,
}

/// Data handed to the avatar menu component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarSlot {
    pub email: String,
    pub name: Option<String>,
}

impl AvatarSlot {
    /// Build the slot for sessions that should show an avatar
    pub fn for_session(session: &UserSession) -> Option<Self> {
        if !session.has_avatar() {
            return None;
        }
        Some(Self {
            email: session.email.clone().unwrap_or_default(),
            name: session.name.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSelector {
    pub active: String,
    pub options: Vec<String>,
}

impl HeaderView {
    pub fn new(
        display: CountdownDisplay,
        app_title: &str,
        page_title: &str,
        session: Option<&UserSession>,
        locale_selector: LocaleSelector,
    ) -> Self {
        Self {
            countdown: display.to_string(),
            minutes: display.minutes,
            seconds: display.seconds,
            app_title: app_title.to_uppercase(),
            page_title: page_title.to_uppercase(),
            avatar: session.and_then(AvatarSlot::for_session),
            locale_selector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> LocaleSelector {
        LocaleSelector {
            active: "en".to_string(),
            options: vec!["en".to_string(), "fr".to_string()],
        }
    }

    #[test]
    fn test_titles_are_uppercased() {
        let view = HeaderView::new(
            CountdownDisplay::from_remaining(3600),
            "Operations Dashboard",
            "fleet overview",
            None,
            selector(),
        );
        assert_eq!(view.countdown, "60:00");
        assert_eq!(view.minutes, "60");
        assert_eq!(view.seconds, "00");
        assert_eq!(view.app_title, "OPERATIONS DASHBOARD");
        assert_eq!(view.page_title, "FLEET OVERVIEW");
        assert!(view.avatar.is_none());
    }

    #[test]
    fn test_avatar_slot_follows_session() {
        let session = UserSession {
            email: Some("ada@example.com".to_string()),
            name: Some("Ada".to_string()),
        };
        let view = HeaderView::new(
            CountdownDisplay::from_remaining(61),
            "t",
            "p",
            Some(&session),
            selector(),
        );
        assert_eq!(view.countdown, "01:01");
        assert_eq!(
            view.avatar,
            Some(AvatarSlot {
                email: "ada@example.com".to_string(),
                name: Some("Ada".to_string()),
            })
        );

        let anonymous = UserSession::default();
        assert!(AvatarSlot::for_session(&anonymous).is_none());
    }
}
