//! Admin user-management screen controller.
//!
//! Owns the staff mirror, the add/edit dialogs, and the delete policy, and
//! drives the user directory client. The presentation layer reads the
//! mirror and dialog flags and triggers the operations below.

use crate::error::{AdminError, Result};
use carepoints_core::{
    Dialog, EditUserForm, Mirror, Notifier, SessionStore, UserForm, UserRecord,
};
use carepoints_server_client::CarePointsClient;
use tracing::{info, warn};

/// How a delete interacts with the mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Remove the row only after the server confirms the delete; a failure
    /// keeps the row and surfaces a notification.
    #[default]
    Confirmed,
    /// Remove the row immediately and keep it removed regardless of the
    /// server's outcome. Trades correctness for latency; the failure is
    /// still notified.
    Optimistic,
}

/// Controller for the staff account management screen.
pub struct UserAdmin<N: Notifier, S: SessionStore> {
    client: CarePointsClient,
    mirror: Mirror<UserRecord>,
    /// Input state of the "Add New User" dialog.
    pub add_form: UserForm,
    /// Input state of the "Edit User" dialog, present while editing.
    pub edit_form: Option<EditUserForm>,
    /// Open/submitting state of the add dialog.
    pub add_dialog: Dialog,
    /// Open/submitting state of the edit dialog.
    pub edit_dialog: Dialog,
    delete_policy: DeletePolicy,
    notifier: N,
    session: S,
}

impl<N: Notifier, S: SessionStore> UserAdmin<N, S> {
    pub fn new(client: CarePointsClient, notifier: N, session: S) -> Self {
        Self {
            client,
            mirror: Mirror::new(),
            add_form: UserForm::default(),
            edit_form: None,
            add_dialog: Dialog::default(),
            edit_dialog: Dialog::default(),
            delete_policy: DeletePolicy::default(),
            notifier,
            session,
        }
    }

    /// Override the delete policy (the default is confirmed deletes).
    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    /// The mirrored staff collection.
    pub fn mirror(&self) -> &Mirror<UserRecord> {
        &self.mirror
    }

    /// Initial bulk fetch of the staff list.
    ///
    /// Failure leaves the mirror empty; the loading flag resolves on both
    /// outcomes and no retry is attempted.
    pub async fn load_users(&mut self) {
        self.mirror.begin_load();

        match self.client.users().list().await {
            Ok(users) => {
                info!(users = users.len(), "Loaded staff list");
                self.mirror.finish_load(users);
            }
            Err(e) => {
                warn!(error = %e, "Failed to load staff list");
                self.mirror.fail_load();
            }
        }
    }

    /// Open the "Add New User" dialog with a fresh form.
    pub fn open_add_dialog(&mut self) {
        self.add_form = UserForm::default();
        self.add_dialog.open();
    }

    /// Open the edit dialog pre-populated from the mirrored record.
    /// Returns false if the key is not mirrored.
    pub fn begin_edit(&mut self, user_id: &str) -> bool {
        match self.mirror.get(user_id) {
            Some(record) => {
                self.edit_form = Some(EditUserForm::from_record(record));
                self.edit_dialog.open();
                true
            }
            None => {
                warn!(user_id, "edit requested for a record that is not mirrored");
                false
            }
        }
    }

    /// Submit the add form.
    ///
    /// Validation failures stay local and block the submission; remote
    /// failures are notified and leave the dialog open with the draft
    /// intact. Only the server's canonical record enters the mirror.
    pub async fn add_user(&mut self) -> Result<()> {
        let draft = self.add_form.validate().map_err(AdminError::Validation)?;

        if !self.add_dialog.try_begin() {
            return Err(AdminError::SubmissionInFlight);
        }

        match self.client.users().register(&draft).await {
            Ok(user) => {
                self.mirror.apply_create(user);
                self.add_dialog.finish(true);
                self.add_form = UserForm::default();
                self.notifier.notify_success("User added successfully");
                Ok(())
            }
            Err(e) => {
                self.add_dialog.finish(false);
                self.notifier.notify_failure("Failed to add user");
                Err(e.into())
            }
        }
    }

    /// Submit the edit form.
    ///
    /// On success the mirrored row is replaced with the server's returned
    /// representation, not the local draft. On failure the mirror still
    /// holds the pre-edit record (the draft was never applied) and the
    /// dialog stays open.
    pub async fn update_user(&mut self) -> Result<()> {
        let form = self.edit_form.as_ref().ok_or(AdminError::NoEditInProgress)?;
        let draft = form.validate().map_err(AdminError::Validation)?;

        if !self.edit_dialog.try_begin() {
            return Err(AdminError::SubmissionInFlight);
        }

        match self.client.users().update(&draft).await {
            Ok(user) => {
                self.mirror.apply_update(&draft.user_id, user);
                self.edit_dialog.finish(true);
                self.edit_form = None;
                self.notifier.notify_success("User updated successfully");
                Ok(())
            }
            Err(e) => {
                self.edit_dialog.finish(false);
                self.notifier.notify_failure("Failed to update user");
                Err(e.into())
            }
        }
    }

    /// Delete a staff account according to the configured policy.
    pub async fn delete_user(&mut self, user_id: &str) -> Result<()> {
        match self.delete_policy {
            DeletePolicy::Optimistic => {
                // Legacy behavior: the row goes away no matter what the
                // server says.
                self.mirror.apply_delete(user_id);
                match self.client.users().delete(user_id).await {
                    Ok(()) => {
                        self.notifier.notify_success("User deleted successfully");
                        Ok(())
                    }
                    Err(e) => {
                        warn!(user_id, error = %e, "Delete failed after optimistic removal");
                        self.notifier.notify_failure("Failed to delete user");
                        Err(e.into())
                    }
                }
            }
            DeletePolicy::Confirmed => match self.client.users().delete(user_id).await {
                Ok(()) => {
                    self.mirror.apply_delete(user_id);
                    self.notifier.notify_success("User deleted successfully");
                    Ok(())
                }
                Err(e) => {
                    self.notifier.notify_failure("Failed to delete user");
                    Err(e.into())
                }
            },
        }
    }

    /// Clear the stored session and notify.
    pub fn logout(&mut self) {
        self.session.clear_session();
        info!("Session cleared");
        self.notifier.notify_success("Logged out successfully");
    }
}
