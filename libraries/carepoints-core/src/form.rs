//! Form controllers: field validation and the per-dialog submission state
//! machine.
//!
//! Validation failures stay entirely local. They block submission, annotate
//! the offending fields, and never reach the network or the notification
//! surface.

use crate::types::{PatientDraft, Role, UserDraft, UserRecord};

/// Message shown next to an empty required field.
pub const REQUIRED: &str = "This field is required";

/// Message shown when the points field does not parse.
pub const POINTS_NOT_A_NUMBER: &str = "Points must be a non-negative number";

/// Per-field validation errors, in field order. Exactly one entry per
/// failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    /// The message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    /// All failing fields with their messages, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(name, message)| (*name, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, REQUIRED);
    }
}

/// Input state of the "Add New User" form. Fields hold raw user input.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub user_id: String,
    pub name: String,
    pub password: String,
    pub role: Option<Role>,
}

impl UserForm {
    /// Check every required field and produce the submission payload.
    ///
    /// All four fields are required; the role must come from the fixed
    /// `Admin`/`Staff` set (an unselected role fails like an empty field).
    pub fn validate(&self) -> Result<UserDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, "userId", &self.user_id);
        require(&mut errors, "name", &self.name);
        require(&mut errors, "password", &self.password);
        if self.role.is_none() {
            errors.push("role", REQUIRED);
        }

        if let Some(role) = self.role {
            if errors.is_empty() {
                return Ok(UserDraft {
                    user_id: self.user_id.trim().to_string(),
                    name: self.name.trim().to_string(),
                    password: self.password.clone(),
                    role,
                });
            }
        }

        Err(errors)
    }
}

/// Input state of the "Edit User" form, pre-populated from the record
/// being edited.
///
/// The identifier is displayed but not editable; there is deliberately no
/// way to change `user_id` here, and the draft always carries the original
/// id.
#[derive(Debug, Clone)]
pub struct EditUserForm {
    user_id: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl EditUserForm {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            user_id: record.user_id.clone(),
            name: record.name.clone(),
            password: record.password.clone(),
            role: record.role,
        }
    }

    /// The immutable identifier, for read-only display.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Check the editable fields and produce the full update payload.
    pub fn validate(&self) -> Result<UserDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "password", &self.password);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(UserDraft {
            user_id: self.user_id.clone(),
            name: self.name.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

/// Input state of the "New Patient Registration" form.
///
/// `points` holds the raw text as typed; it becomes a number only after
/// validation.
#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    pub uhid: String,
    pub loyalty_card_number: String,
    pub name: String,
    pub points: String,
}

impl PatientForm {
    pub fn validate(&self) -> Result<PatientDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, "uhid", &self.uhid);
        require(&mut errors, "loyaltyCardNumber", &self.loyalty_card_number);
        require(&mut errors, "name", &self.name);

        let points_input = self.points.trim();
        let points = if points_input.is_empty() {
            errors.push("points", REQUIRED);
            None
        } else {
            match points_input.parse::<u32>() {
                Ok(points) => Some(points),
                Err(_) => {
                    errors.push("points", POINTS_NOT_A_NUMBER);
                    None
                }
            }
        };

        if let Some(points) = points {
            if errors.is_empty() {
                return Ok(PatientDraft {
                    uhid: self.uhid.trim().to_string(),
                    loyalty_card_number: self.loyalty_card_number.trim().to_string(),
                    name: self.name.trim().to_string(),
                    points,
                });
            }
        }

        Err(errors)
    }

    /// Clear all fields after a successful registration.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-dialog submission state machine:
/// `Idle -> Submitting -> {close on success | stay open on failure}`.
///
/// While a submission is in flight, `try_begin` refuses re-entry so a
/// repeated click can never issue a second network call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dialog {
    open: bool,
    submitting: bool,
}

impl Dialog {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dialog. An in-flight submission keeps its guard until it
    /// resolves.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Enter `Submitting`, or refuse if a submission is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Resolve the in-flight submission. Success closes the dialog;
    /// failure leaves it open with its data intact.
    pub fn finish(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.open = false;
        }
    }
}
