/// Domain types shared across the client
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Staff role, constrained to the fixed set the server accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Staff => write!(f, "Staff"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Staff" => Ok(Role::Staff),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// A staff account as held by the user directory.
///
/// The identifier is assigned externally and immutable after creation.
/// The password travels and renders in plaintext in the current design;
/// credential handling (hashing, issuance) is a server concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique user identifier
    pub user_id: String,

    /// Display name
    pub name: String,

    /// Plaintext password as stored by the directory
    pub password: String,

    /// Staff role
    pub role: Role,
}

/// A patient as held by the loyalty registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Unique Health ID
    pub uhid: String,

    /// Loyalty card number
    pub loyalty_card_number: String,

    /// Patient's full name
    pub name: String,

    /// Loyalty points balance
    pub points: u32,
}

/// A validated payload for creating or updating a staff account.
///
/// Produced only by form validation; the server returns its canonical
/// `UserRecord` in response, which is what enters the mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub user_id: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

/// A validated payload for registering a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub uhid: String,
    pub loyalty_card_number: String,
    pub name: String,
    pub points: u32,
}

/// Records that carry a unique identifier within their collection.
pub trait Keyed {
    /// The record's unique identifier.
    fn key(&self) -> &str;
}

impl Keyed for UserRecord {
    fn key(&self) -> &str {
        &self.user_id
    }
}

impl Keyed for PatientRecord {
    fn key(&self) -> &str {
        &self.uhid
    }
}
