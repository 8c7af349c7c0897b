use std::collections::HashMap;

use crate::models::Activity;

/// In-memory catalog of activities, keyed by activity name.
///
/// The set of names is fixed at construction; only rosters change afterwards.
/// Listing walks the names in seed order so the catalog renders the same way
/// on every request.
///
/// This is a plain container: mutators do no validation of their own. The
/// registration service checks the invariants and holds the catalog lock
/// across its check-then-mutate sequence.
pub struct Catalog {
    activities: HashMap<String, Activity>,
    order: Vec<String>,
}

impl Catalog {
    pub fn new(entries: Vec<(String, Activity)>) -> Self {
        let order: Vec<String> = entries.iter().map(|(name, _)| name.clone()).collect();
        let activities = entries.into_iter().collect();
        Self { activities, order }
    }

    /// Full catalog in seed order.
    pub fn list_activities(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.order
            .iter()
            .filter_map(|name| self.activities.get(name).map(|a| (name.as_str(), a)))
    }

    /// Exact, case-sensitive lookup.
    pub fn get_activity(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Appends `email` to the named roster. The caller has already verified
    /// the activity exists and the email is not yet registered.
    pub fn add_participant(&mut self, name: &str, email: &str) {
        if let Some(activity) = self.activities.get_mut(name) {
            activity.participants.push(email.to_string());
        }
    }

    /// Removes `email` from the named roster. Returns whether an entry was
    /// actually removed so callers can tell the no-op case apart.
    pub fn remove_participant(&mut self, name: &str, email: &str) -> bool {
        let Some(activity) = self.activities.get_mut(name) else {
            return false;
        };
        let before = activity.participants.len();
        activity.participants.retain(|p| p != email);
        activity.participants.len() != before
    }
}
