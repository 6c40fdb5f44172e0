//! Shared type definitions for the Mergington activities API.
//!
//! Types defined here are used by the directory store and the HTTP layer,
//! and flow downstream to `TypeScript` via `ts-rs` for the landing page.
//!
//! # Modules
//!
//! - [`structs`] -- `Activity` record plus the signup and error payloads

pub mod structs;

pub use structs::{Activity, ErrorDetail, SignupConfirmation};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::structs::Activity::export_all();
        let _ = crate::structs::SignupConfirmation::export_all();
        let _ = crate::structs::ErrorDetail::export_all();
    }
}
