use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;
use crate::store::Catalog;

/// Why a signup or unregister was refused. All three are expected caller
/// mistakes, reported back as-is; none of them aborts the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Already signed up for this activity")]
    DuplicateSignup,
    #[error("Not signed up for this activity")]
    NotRegistered,
}

/// Successful signup/unregister outcome, echoing what was acted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub activity: String,
    pub email: String,
}

/// Registers `email` for the named activity.
///
/// The write lock is held across the duplicate check and the roster append,
/// so two concurrent signups for the same (activity, email) pair cannot both
/// pass the check.
pub async fn signup(
    catalog: &RwLock<Catalog>,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RegistrationError> {
    let mut catalog = catalog.write().await;
    let activity = catalog
        .get_activity(activity_name)
        .ok_or(RegistrationError::ActivityNotFound)?;
    if activity.is_registered(email) {
        return Err(RegistrationError::DuplicateSignup);
    }
    catalog.add_participant(activity_name, email);
    Ok(Confirmation {
        activity: activity_name.to_string(),
        email: email.to_string(),
    })
}

/// Removes `email` from the named activity's roster.
pub async fn unregister(
    catalog: &RwLock<Catalog>,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RegistrationError> {
    let mut catalog = catalog.write().await;
    let activity = catalog
        .get_activity(activity_name)
        .ok_or(RegistrationError::ActivityNotFound)?;
    if !activity.is_registered(email) {
        return Err(RegistrationError::NotRegistered);
    }
    catalog.remove_participant(activity_name, email);
    Ok(Confirmation {
        activity: activity_name.to_string(),
        email: email.to_string(),
    })
}

/// Snapshot of the full catalog in seed order, roster state included.
pub async fn list(catalog: &RwLock<Catalog>) -> Vec<(String, Activity)> {
    let catalog = catalog.read().await;
    catalog
        .list_activities()
        .map(|(name, activity)| (name.to_string(), activity.clone()))
        .collect()
}
