//! The activity directory: every activity keyed by display name.
//!
//! The [`ActivityDirectory`] is the only mutable state in the service. It is
//! built once at startup from seed data and afterwards only changes by
//! appending an email to one activity's roster through [`signup`].
//!
//! The directory itself is not synchronized. Callers that share it across
//! tasks must hold an exclusive lock for the whole of [`signup`] so the
//! duplicate and capacity checks see the same roster the append writes to.
//!
//! [`signup`]: ActivityDirectory::signup

use indexmap::IndexMap;
use mergington_types::Activity;
use tracing::debug;

use crate::email::is_valid_email;
use crate::error::DirectoryError;

/// All activities indexed by display name, in registration order.
///
/// Serializes as a plain JSON object of name to [`Activity`] with keys in
/// the order the activities were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ActivityDirectory {
    activities: IndexMap<String, Activity>,
}

impl ActivityDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            activities: IndexMap::new(),
        }
    }

    /// Register an activity under `name`.
    ///
    /// Only used while building the directory; the running service never
    /// adds activities.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateActivity`] if `name` is taken.
    pub fn add_activity(&mut self, name: &str, activity: Activity) -> Result<(), DirectoryError> {
        if self.activities.contains_key(name) {
            return Err(DirectoryError::DuplicateActivity(name.to_owned()));
        }
        self.activities.insert(name.to_owned(), activity);
        Ok(())
    }

    /// Look up an activity by name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the directory holds no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Iterate over all activities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Activity)> {
        self.activities.iter()
    }

    /// Owned copy of the full name to activity mapping.
    pub fn snapshot(&self) -> IndexMap<String, Activity> {
        self.activities.clone()
    }

    /// Sign `email` up for the activity called `name`.
    ///
    /// Checks run in a fixed order and the first failure wins:
    ///
    /// 1. the activity exists
    /// 2. `email` is not already on the roster
    /// 3. the roster is below `max_participants`
    /// 4. `email` passes [`is_valid_email`]
    ///
    /// On success the email is appended to the end of the roster and the
    /// updated activity is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::ActivityNotFound`],
    /// [`DirectoryError::AlreadySignedUp`], [`DirectoryError::ActivityFull`]
    /// or [`DirectoryError::InvalidEmail`] per the order above. The
    /// directory is untouched on error.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<&Activity, DirectoryError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| DirectoryError::ActivityNotFound(name.to_owned()))?;

        if activity.is_signed_up(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: name.to_owned(),
                email: email.to_owned(),
            });
        }

        if activity.is_full() {
            return Err(DirectoryError::ActivityFull {
                activity: name.to_owned(),
                capacity: activity.max_participants,
            });
        }

        if !is_valid_email(email) {
            return Err(DirectoryError::InvalidEmail(email.to_owned()));
        }

        activity.participants.push(email.to_owned());
        debug!(
            activity = name,
            participants = activity.participants.len(),
            max_participants = activity.max_participants,
            "roster updated"
        );
        Ok(&*activity)
    }
}
