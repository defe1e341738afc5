//! Wire shapes for the CarePoints API.
//!
//! Every endpoint gets an explicit envelope struct, validated at the
//! boundary; a mismatch fails with `ClientError::Decode` instead of
//! propagating loose JSON.

use carepoints_core::{PatientRecord, UserRecord};
use serde::Deserialize;

/// Configuration for connecting to the CarePoints API.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the API (e.g., "https://loyalty.example.com")
    pub url: String,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Response envelope of `GET /user/getAllUsers`.
#[derive(Debug, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<UserRecord>,
}

/// Response envelope of `POST /user/register` and `PATCH /user/users/{id}`.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: UserRecord,
}

/// Response envelope of `GET /patient/getAllPatients`.
#[derive(Debug, Deserialize)]
pub struct PatientsEnvelope {
    pub patients: Vec<PatientRecord>,
}

/// Response envelope of `POST /patient/register`.
#[derive(Debug, Deserialize)]
pub struct PatientEnvelope {
    pub patient: PatientRecord,
}
