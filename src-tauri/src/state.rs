use std::sync::{Mutex, MutexGuard};

use swimhub::practice_log::PracticeLogForm;

use crate::error::SwimHubError;

/// Shared state for the practice log editor: one form session per app
/// window, guarded for access from the command threads.
pub struct PracticeLogState {
    form: Mutex<PracticeLogForm>,
}

impl PracticeLogState {
    pub fn new() -> Self {
        Self {
            form: Mutex::new(PracticeLogForm::new()),
        }
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, PracticeLogForm>, SwimHubError> {
        self.form
            .lock()
            .map_err(|_| SwimHubError::Session("practice log state lock poisoned".to_string()))
    }
}
