//! Participant email format check.
//!
//! An address passes when it contains `@` and
//! the part after the *last* `@` contains a `.`. Nothing else is inspected.

/// Whether `email` passes the signup format check.
pub fn is_valid_email(email: &str) -> bool {
    email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_school_addresses() {
        assert!(is_valid_email("new@student.edu"));
        assert!(is_valid_email("michael@mergington.edu"));
    }

    #[test]
    fn rejects_missing_at() {
        assert!(!is_valid_email("student.edu"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn rejects_domain_without_dot() {
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("foo@"));
    }

    #[test]
    fn only_the_last_at_counts() {
        // Dot before the final `@` does not help.
        assert!(!is_valid_email("first.last@host@localhost"));
        assert!(is_valid_email("odd@name@mergington.edu"));
    }

    #[test]
    fn empty_local_part_is_allowed() {
        assert!(is_valid_email("@mergington.edu"));
    }
}
