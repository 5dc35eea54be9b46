//! Data models for CampusConnect.
//!
//! This module contains the data structures shared across the application:
//! user records (the durable store's payload), notifications, the mentorship
//! hub roster, and the payloads posted by the pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// User Records
// ============================================================================

/// A registered user. `email` is the unique key across the store; the
/// uppercase first character of `name` doubles as the avatar glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    /// Absent in storage reads as empty. Edit forms render this
    /// comma-joined and accept it back the same way.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
}

impl UserRecord {
    pub fn new(email: &str, name: &str) -> Self {
        UserRecord {
            email: email.to_string(),
            name: name.to_string(),
            role: None,
            year: None,
            stream: None,
            interests: Vec::new(),
        }
    }

    /// Interests as the edit form shows them: "a, b", empty when none.
    pub fn interests_joined(&self) -> String {
        self.interests.join(", ")
    }
}

/// Split a comma-separated interests field into clean entries. Blank
/// segments are dropped, so "a, , b," round-trips to `["a", "b"]`.
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub unread: bool,
}

// ============================================================================
// Mentorship Hub Roster
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Student,
}

impl Role {
    /// Parse the hub's tab parameter ("mentors" / "students").
    pub fn from_tab(tab: &str) -> Option<Role> {
        match tab {
            "mentors" | "mentor" => Some(Role::Mentor),
            "students" | "student" => Some(Role::Student),
            _ => None,
        }
    }

    /// The tab parameter value for this role.
    pub fn tab(&self) -> &'static str {
        match self {
            Role::Mentor => "mentors",
            Role::Student => "students",
        }
    }

    /// Display label for cards and the request modal.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Mentor => "Mentor",
            Role::Student => "Student",
        }
    }
}

/// One card on the hub page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonCard {
    pub name: String,
    pub role: Role,
    /// Filter key shown in the category dropdown.
    pub category: String,
    /// Short blurb under the name.
    pub headline: String,
    pub skills: Vec<String>,
    pub year: String,
}

// ============================================================================
// Form and Request Payloads
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SignInForm {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub stream: String,
    /// Comma-separated, as typed into the form.
    #[serde(default)]
    pub interests: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub stream: String,
    #[serde(default)]
    pub interests: String,
}

/// Posted by the logout form; carries the confirmation dialog's outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutForm {
    #[serde(default)]
    pub confirmed: bool,
}

/// Mentorship session request from the hub modal.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRequest {
    /// Recipient's display name.
    pub to: String,
    pub topic: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub format: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestAck {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interests_parse_drops_blanks() {
        assert_eq!(parse_interests("a, , b,"), vec!["a", "b"]);
        assert_eq!(parse_interests(""), Vec::<String>::new());
        assert_eq!(parse_interests("  solo  "), vec!["solo"]);
    }

    #[test]
    fn record_decodes_with_missing_optional_fields() {
        let user: UserRecord =
            serde_json::from_str(r#"{"email":"a@x.com","name":"Ada"}"#).unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.role, None);
        assert!(user.interests.is_empty());
        assert_eq!(user.interests_joined(), "");
    }

    #[test]
    fn role_tab_round_trip() {
        assert_eq!(Role::from_tab("mentors"), Some(Role::Mentor));
        assert_eq!(Role::from_tab("students"), Some(Role::Student));
        assert_eq!(Role::from_tab("aliens"), None);
        assert_eq!(Role::from_tab(Role::Student.tab()), Some(Role::Student));
    }
}
