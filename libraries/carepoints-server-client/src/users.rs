//! Staff account operations against the user directory.

use crate::client::transport_error;
use crate::error::{ClientError, Result};
use crate::types::{UserEnvelope, UsersEnvelope};
use carepoints_core::{UserDraft, UserRecord};
use reqwest::Client;
use tracing::{debug, warn};

/// Client for the staff account collection.
///
/// Each call translates one collection operation into an HTTP request and
/// normalizes the outcome. None of these methods touch local state; the
/// caller mirrors the returned canonical records.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch the full staff list.
    pub async fn list(&self) -> Result<Vec<UserRecord>> {
        let url = format!("{}/user/getAllUsers", self.base_url);
        debug!(url = %url, "Fetching all users");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let envelope: UsersEnvelope = response.json().await.map_err(|e| {
                ClientError::Decode(format!("Failed to decode user list: {}", e))
            })?;

            debug!(users = envelope.users.len(), "Fetched user list");
            Ok(envelope.users)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Register a new staff account.
    ///
    /// The server is responsible for rejecting duplicate identifiers and
    /// returns its canonical record, which may differ from the payload.
    pub async fn register(&self, draft: &UserDraft) -> Result<UserRecord> {
        let url = format!("{}/user/register", self.base_url);
        debug!(url = %url, user_id = %draft.user_id, "Registering user");

        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let envelope: UserEnvelope = response.json().await.map_err(|e| {
                ClientError::Decode(format!("Failed to decode register response: {}", e))
            })?;

            debug!(user_id = %envelope.user.user_id, "User registered");
            Ok(envelope.user)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, user_id = %draft.user_id, "Register failed");
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Update an existing staff account, identified by the draft's id.
    ///
    /// The identifier is immutable: the path is derived from the draft, and
    /// a response whose record carries a different id is rejected as a
    /// decode-level inconsistency rather than mirrored.
    pub async fn update(&self, draft: &UserDraft) -> Result<UserRecord> {
        let url = format!("{}/user/users/{}", self.base_url, draft.user_id);
        debug!(url = %url, user_id = %draft.user_id, "Updating user");

        let response = self
            .http
            .patch(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let envelope: UserEnvelope = response.json().await.map_err(|e| {
                ClientError::Decode(format!("Failed to decode update response: {}", e))
            })?;

            if envelope.user.user_id != draft.user_id {
                warn!(
                    expected = %draft.user_id,
                    returned = %envelope.user.user_id,
                    "Update response changed the identifier"
                );
                return Err(ClientError::Decode(format!(
                    "update response changed the identifier: expected {}, got {}",
                    draft.user_id, envelope.user.user_id
                )));
            }

            debug!(user_id = %envelope.user.user_id, "User updated");
            Ok(envelope.user)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, user_id = %draft.user_id, "Update failed");
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Delete a staff account.
    pub async fn delete(&self, user_id: &str) -> Result<()> {
        let url = format!("{}/user/users/{}", self.base_url, user_id);
        debug!(url = %url, user_id = %user_id, "Deleting user");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            debug!(user_id = %user_id, "User deleted");
            Ok(())
        } else if status.as_u16() == 404 {
            // Already deleted, that's fine
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, user_id = %user_id, "Delete failed");
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
