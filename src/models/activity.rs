use serde::Serialize;

/// One extracurricular offering as it appears in the catalog.
///
/// `participants` is kept in signup order; the roster never contains the
/// same email twice (the registration service guards this before mutating).
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Declared capacity ceiling. Descriptive only: signups are not refused
    /// once the roster reaches this number.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
