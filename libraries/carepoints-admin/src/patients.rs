//! Patient search and registration screen controller.

use crate::error::{AdminError, Result};
use carepoints_core::{Dialog, Mirror, Notifier, PatientForm, PatientRecord};
use carepoints_server_client::CarePointsClient;
use tracing::{info, warn};

/// Controller for the patient search/registration screen.
///
/// Search runs locally over the mirrored registry; registration goes
/// through the client and only the server's canonical record enters the
/// mirror.
pub struct PatientDesk<N: Notifier> {
    client: CarePointsClient,
    mirror: Mirror<PatientRecord>,
    /// Input state of the "New Patient Registration" form.
    pub form: PatientForm,
    /// Open/submitting state of the registration form.
    pub form_dialog: Dialog,
    notifier: N,
}

impl<N: Notifier> PatientDesk<N> {
    pub fn new(client: CarePointsClient, notifier: N) -> Self {
        Self {
            client,
            mirror: Mirror::new(),
            form: PatientForm::default(),
            form_dialog: Dialog::default(),
            notifier,
        }
    }

    /// The mirrored patient registry.
    pub fn mirror(&self) -> &Mirror<PatientRecord> {
        &self.mirror
    }

    /// Initial bulk fetch of the registry. Same contract as the staff
    /// list: failure leaves the mirror empty with loading resolved.
    pub async fn load_patients(&mut self) {
        self.mirror.begin_load();

        match self.client.patients().list().await {
            Ok(patients) => {
                info!(patients = patients.len(), "Loaded patient registry");
                self.mirror.finish_load(patients);
            }
            Err(e) => {
                warn!(error = %e, "Failed to load patient registry");
                self.mirror.fail_load();
            }
        }
    }

    /// Case-insensitive substring search by name or UHID over the mirror.
    /// An empty query matches nothing; searching is an explicit act.
    pub fn search(&self, query: &str) -> Vec<&PatientRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.mirror
            .records()
            .iter()
            .filter(|patient| {
                patient.name.to_lowercase().contains(&query)
                    || patient.uhid.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Open the registration form with cleared fields.
    pub fn open_registration(&mut self) {
        self.form.reset();
        self.form_dialog.open();
    }

    /// Submit the registration form.
    pub async fn register_patient(&mut self) -> Result<()> {
        let draft = self.form.validate().map_err(AdminError::Validation)?;

        if !self.form_dialog.try_begin() {
            return Err(AdminError::SubmissionInFlight);
        }

        match self.client.patients().register(&draft).await {
            Ok(patient) => {
                self.mirror.apply_create(patient);
                self.form_dialog.finish(true);
                self.form.reset();
                self.notifier.notify_success("Patient registered successfully");
                Ok(())
            }
            Err(e) => {
                self.form_dialog.finish(false);
                self.notifier.notify_failure("Failed to register patient");
                Err(e.into())
            }
        }
    }
}
