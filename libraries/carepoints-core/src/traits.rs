/// Collaborator traits for surfaces outside this core
///
/// The screen controllers only ever need two side effects from the wider
/// application: showing a toast and clearing the stored session. Both are
/// injected as trait objects so the core stays free of any UI or storage
/// dependency.

/// Toast/notification surface.
///
/// Client-side validation errors never pass through here; they annotate
/// form fields instead.
pub trait Notifier: Send + Sync {
    /// Surface a success message to the user.
    fn notify_success(&self, message: &str);

    /// Surface a failure message to the user.
    fn notify_failure(&self, message: &str);
}

/// Credential/session store, read elsewhere and cleared on logout.
pub trait SessionStore: Send + Sync {
    /// Remove all stored session values.
    fn clear_session(&self);
}
