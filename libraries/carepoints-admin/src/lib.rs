//! CarePoints Admin
//!
//! Screen controllers for the two administration views:
//!
//! - [`UserAdmin`] — staff account management (list, add, edit, delete,
//!   logout)
//! - [`PatientDesk`] — patient search and registration
//!
//! Each controller owns a [`carepoints_core::Mirror`] of its remote
//! collection and the dialog state machines that gate submissions, and
//! drives a [`carepoints_server_client::CarePointsClient`]. Success and
//! failure reach the user through the injected
//! [`carepoints_core::Notifier`]; validation failures annotate form fields
//! and never become notifications.

#![forbid(unsafe_code)]

mod error;
mod patients;
mod users;

pub use error::{AdminError, Result};
pub use patients::PatientDesk;
pub use users::{DeletePolicy, UserAdmin};
