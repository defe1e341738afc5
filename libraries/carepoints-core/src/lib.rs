//! CarePoints Core
//!
//! Platform-agnostic building blocks for the loyalty-points administration
//! client:
//!
//! - **Domain Types**: `UserRecord`, `PatientRecord`, `Role`
//! - **Local Mirror State**: `Mirror`, the client-held copy of a remote
//!   collection, mutated only through explicit apply operations
//! - **Form Controllers**: required-field validation and the per-dialog
//!   submission state machine
//! - **Collaborator Traits**: `Notifier`, `SessionStore`
//!
//! This crate performs no I/O; the HTTP surface lives in
//! `carepoints-server-client` and the screen orchestration in
//! `carepoints-admin`.

#![forbid(unsafe_code)]

pub mod form;
pub mod mirror;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use form::{Dialog, EditUserForm, FieldErrors, PatientForm, UserForm};
pub use mirror::{ApplyOutcome, Mirror};
pub use traits::{Notifier, SessionStore};
pub use types::{Keyed, PatientDraft, PatientRecord, Role, UserDraft, UserRecord};
