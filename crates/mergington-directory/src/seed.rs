//! Default activity directory for Mergington High School.
//!
//! Seven activities, each starting with two enrolled students. This is the
//! full key space of the service: nothing is added or removed at runtime.

use mergington_types::Activity;

use crate::directory::ActivityDirectory;
use crate::error::DirectoryError;

/// Helper to build an [`Activity`].
fn activity(description: &str, schedule: &str, max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_owned(),
        schedule: schedule.to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

/// Create the default directory with the school's seven activities.
///
/// # Errors
///
/// Returns [`DirectoryError`] if the directory cannot be assembled (should
/// not happen with valid hard-coded data).
pub fn seed_directory() -> Result<ActivityDirectory, DirectoryError> {
    let mut dir = ActivityDirectory::new();

    dir.add_activity(
        "Chess Club",
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    )?;
    dir.add_activity(
        "Programming Class",
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    )?;
    dir.add_activity(
        "Gym Class",
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    )?;
    dir.add_activity(
        "Yoga Class",
        activity(
            "Relax and improve flexibility with guided yoga sessions",
            "Tuesdays and Thursdays, 7:00 AM - 8:00 AM",
            15,
            &["amelia@mergington.edu", "lucas@mergington.edu"],
        ),
    )?;
    dir.add_activity(
        "Basketball Training",
        activity(
            "Develop basketball skills and participate in team games",
            "Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
    )?;
    dir.add_activity(
        "Advanced Python Workshop",
        activity(
            "Deep dive into advanced Python topics and best practices",
            "Fridays, 5:00 PM - 6:30 PM",
            10,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
    )?;
    dir.add_activity(
        "Web Development Bootcamp",
        activity(
            "Learn to build modern web applications using HTML, CSS, and JavaScript",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            25,
            &["ethan@mergington.edu", "harper@mergington.edu"],
        ),
    )?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::is_valid_email;

    #[test]
    fn seed_creates_seven_activities() {
        let result = seed_directory();
        assert!(result.is_ok());
        if let Ok(dir) = result {
            assert_eq!(dir.len(), 7);
        }
    }

    #[test]
    fn seed_rosters_respect_invariants() {
        let result = seed_directory();
        assert!(result.is_ok());
        let dir = result.unwrap_or_default();
        for (name, activity) in dir.iter() {
            assert!(activity.max_participants > 0, "{name} has no capacity");
            assert!(!activity.is_full(), "{name} starts full");
            assert_eq!(activity.participants.len(), 2, "{name} roster size");
            assert!(
                activity.participants.iter().all(|p| is_valid_email(p)),
                "{name} has a malformed seed email"
            );
        }
    }

    #[test]
    fn chess_club_metadata() {
        let result = seed_directory();
        assert!(result.is_ok());
        let dir = result.unwrap_or_default();
        let chess = dir.get("Chess Club");
        assert_eq!(chess.map(|a| a.max_participants), Some(12));
        assert_eq!(
            chess.map(|a| a.schedule.as_str()),
            Some("Fridays, 3:30 PM - 5:00 PM")
        );
        assert_eq!(
            chess.and_then(|a| a.participants.first()).map(String::as_str),
            Some("michael@mergington.edu")
        );
    }

    #[test]
    fn seed_lists_activities_in_school_order() {
        let result = seed_directory();
        assert!(result.is_ok());
        let dir = result.unwrap_or_default();
        let names: Vec<&str> = dir.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Chess Club",
                "Programming Class",
                "Gym Class",
                "Yoga Class",
                "Basketball Training",
                "Advanced Python Workshop",
                "Web Development Bootcamp",
            ]
        );
    }
}
