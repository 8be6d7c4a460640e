//! Profile - プロフィール画面のアクション
//!
//! どのアクションも外部には何もせず、確認用の `Notice` を返すだけです。

use std::fmt;
use std::str::FromStr;

use crate::app::board::Notice;
use crate::domain::{DriverProfile, UnknownVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileAction {
    Call,
    Email,
    Notifications,
    Location,
    Settings,
    Emergency,
}

impl ProfileAction {
    pub const ALL: [ProfileAction; 6] = [
        ProfileAction::Call,
        ProfileAction::Email,
        ProfileAction::Notifications,
        ProfileAction::Location,
        ProfileAction::Settings,
        ProfileAction::Emergency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileAction::Call => "call",
            ProfileAction::Email => "email",
            ProfileAction::Notifications => "notifications",
            ProfileAction::Location => "location",
            ProfileAction::Settings => "settings",
            ProfileAction::Emergency => "emergency",
        }
    }

    pub fn notice(self, profile: &DriverProfile) -> Notice {
        match self {
            ProfileAction::Call => Notice::new("Call", format!("Calling {}", profile.phone)),
            ProfileAction::Email => {
                Notice::new("Email", format!("Opening email to {}", profile.email))
            }
            ProfileAction::Notifications => Notice::new("Notifications", "Notification settings"),
            ProfileAction::Location => Notice::new("Location", "Location settings"),
            ProfileAction::Settings => Notice::new("Settings", "App settings and preferences"),
            ProfileAction::Emergency => {
                Notice::new("Emergency", "Calling dispatch emergency line...")
            }
        }
    }
}

impl fmt::Display for ProfileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileAction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("profile action", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DRIVER_PROFILE;
    use rstest::rstest;

    #[rstest]
    #[case::call(ProfileAction::Call, "Call", "Calling (613) 555-0123")]
    #[case::email(ProfileAction::Email, "Email", "Opening email to mike.johnson@trucking.com")]
    #[case::notifications(ProfileAction::Notifications, "Notifications", "Notification settings")]
    #[case::location(ProfileAction::Location, "Location", "Location settings")]
    #[case::settings(ProfileAction::Settings, "Settings", "App settings and preferences")]
    #[case::emergency(ProfileAction::Emergency, "Emergency", "Calling dispatch emergency line...")]
    fn each_action_has_a_notice(
        #[case] action: ProfileAction,
        #[case] title: &str,
        #[case] message: &str,
    ) {
        assert_eq!(action.notice(&DRIVER_PROFILE), Notice::new(title, message));
    }

    #[test]
    fn parses_wire_names() {
        for action in ProfileAction::ALL {
            assert_eq!(action.as_str().parse::<ProfileAction>().unwrap(), action);
        }
        assert!("fax".parse::<ProfileAction>().is_err());
    }
}
