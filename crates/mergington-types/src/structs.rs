//! Activity records and API payloads for the Mergington activities API.
//!
//! Covers `Activity`, the signup confirmation, and the error body returned
//! for every rejected request.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// An extracurricular activity offered by the school.
///
/// Activities are keyed by display name in the directory, so the name is
/// not part of the record itself. `participants` is kept in signup order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Activity {
    /// Free-text summary of what the activity is about.
    pub description: String,
    /// Human-readable meeting times (e.g. `Fridays, 3:30 PM - 5:00 PM`).
    pub schedule: String,
    /// Maximum number of enrolled participants.
    pub max_participants: u32,
    /// Enrolled participant emails, first come first listed.
    pub participants: Vec<String>,
}

impl Activity {
    /// Whether `email` is already on the roster.
    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Whether the roster has reached `max_participants`.
    ///
    /// A roster too long to count in a `u32` is treated as full.
    pub fn is_full(&self) -> bool {
        !u32::try_from(self.participants.len()).is_ok_and(|count| count < self.max_participants)
    }

    /// Seats still open, saturating at zero.
    pub fn spots_left(&self) -> u32 {
        u32::try_from(self.participants.len())
            .map_or(0, |count| self.max_participants.saturating_sub(count))
    }
}

// ---------------------------------------------------------------------------
// API payloads
// ---------------------------------------------------------------------------

/// Body returned by a successful signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SignupConfirmation {
    /// e.g. `Signed up new@student.edu for Chess Club`.
    pub message: String,
}

impl SignupConfirmation {
    /// Build the confirmation for `email` joining `activity_name`.
    pub fn new(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity_name}"),
        }
    }
}

/// Body returned with every 4xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ErrorDetail {
    /// Short human-readable reason the request was rejected.
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: String::from("Learn strategies and compete in chess tournaments"),
            schedule: String::from("Fridays, 3:30 PM - 5:00 PM"),
            max_participants: max,
            participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    #[test]
    fn full_when_roster_reaches_capacity() {
        assert!(!activity(2, &["a@x.edu"]).is_full());
        assert!(activity(2, &["a@x.edu", "b@x.edu"]).is_full());
        assert!(activity(0, &[]).is_full());
    }

    #[test]
    fn spots_left_saturates() {
        assert_eq!(activity(3, &["a@x.edu"]).spots_left(), 2);
        assert_eq!(activity(1, &["a@x.edu", "b@x.edu"]).spots_left(), 0);
    }

    #[test]
    fn signed_up_matches_exact_email() {
        let a = activity(5, &["michael@mergington.edu"]);
        assert!(a.is_signed_up("michael@mergington.edu"));
        assert!(!a.is_signed_up("Michael@mergington.edu"));
    }

    #[test]
    fn activity_serializes_with_snake_case_fields() {
        let json = serde_json::to_value(activity(12, &["daniel@mergington.edu"]));
        assert!(json.is_ok());
        if let Ok(value) = json {
            assert_eq!(value["max_participants"], 12);
            assert_eq!(value["participants"][0], "daniel@mergington.edu");
            assert_eq!(value["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        }
    }

    #[test]
    fn confirmation_message_names_email_and_activity() {
        let c = SignupConfirmation::new("new@student.edu", "Chess Club");
        assert_eq!(c.message, "Signed up new@student.edu for Chess Club");
    }
}
