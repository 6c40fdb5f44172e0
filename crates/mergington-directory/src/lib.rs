//! Activity directory and signup rules for the Mergington activities API.
//!
//! # Modules
//!
//! - [`directory`] -- [`ActivityDirectory`], the name-keyed store and its
//!   single mutation, [`ActivityDirectory::signup`].
//! - [`email`] -- The participant email format check.
//! - [`error`] -- [`DirectoryError`] for every rejected operation.
//! - [`seed`] -- The school's hard-coded starting activities.

pub mod directory;
pub mod email;
pub mod error;
pub mod seed;

pub use directory::ActivityDirectory;
pub use email::is_valid_email;
pub use error::DirectoryError;
pub use seed::seed_directory;
