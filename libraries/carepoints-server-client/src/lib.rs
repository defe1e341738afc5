//! CarePoints Server Client
//!
//! HTTP client library for the hospital loyalty-points API.
//!
//! # Features
//!
//! - **User directory**: list, register, update, and delete staff accounts
//! - **Patient registry**: list and register patients, keyed by UHID
//! - **Typed boundary**: every response is decoded against an explicit
//!   envelope; mismatches surface as `ClientError::Decode`
//!
//! # Example
//!
//! ```ignore
//! use carepoints_server_client::{CarePointsClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::new("https://loyalty.example.com");
//!     let client = CarePointsClient::new(config)?;
//!
//!     let users = client.users().list().await?;
//!     println!("Found {} staff accounts", users.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod patients;
mod types;
mod users;

// Re-export main types
pub use client::CarePointsClient;
pub use error::{ClientError, Result};
pub use types::{PatientEnvelope, PatientsEnvelope, ServerConfig, UserEnvelope, UsersEnvelope};

// Re-export sub-clients for direct use if needed
pub use patients::PatientsClient;
pub use users::UsersClient;
