//! Error types for the `mergington-directory` crate.
//!
//! All fallible directory operations return [`DirectoryError`] through the
//! standard [`Result`] type alias.

/// Errors that can occur while reading or mutating the activity directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// No activity is registered under the requested name.
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    /// The email is already on the activity's roster.
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp {
        /// The activity name.
        activity: String,
        /// The duplicate email.
        email: String,
    },

    /// The roster has reached its maximum size.
    #[error("activity {activity} is full ({capacity} participants)")]
    ActivityFull {
        /// The full activity.
        activity: String,
        /// Maximum number of participants.
        capacity: u32,
    },

    /// The email failed the format check.
    #[error("invalid email format: {0:?}")]
    InvalidEmail(String),

    /// An activity name was registered twice while building the directory.
    #[error("duplicate activity name: {0}")]
    DuplicateActivity(String),
}
