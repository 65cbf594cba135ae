//! Profile row stored in the backend `profiles` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile row as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Backend-assigned row identifier
    pub id: i64,
    /// Owning auth identity
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub professional_summary: String,
    /// Backend-assigned creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Upsert payload: the form fields plus the owning user.
///
/// The backend assigns `id` and `created_at`; the row is keyed on
/// `user_id`, which carries a unique constraint.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDraft {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub professional_summary: String,
}

impl ProfileDraft {
    /// Build a draft from raw form input, trimming every field.
    pub fn from_form(user_id: Uuid, form: ProfileForm) -> Self {
        Self {
            user_id,
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            linkedin: form.linkedin.trim().to_string(),
            github: form.github.trim().to_string(),
            portfolio: form.portfolio.trim().to_string(),
            professional_summary: form.professional_summary.trim().to_string(),
        }
    }
}

/// Raw profile fields as submitted by the browser.
///
/// Every field defaults to empty so a partial submission still parses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub portfolio: String,
    #[serde(default)]
    pub professional_summary: String,
}

impl From<&Profile> for ProfileForm {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            linkedin: profile.linkedin.clone(),
            github: profile.github.clone(),
            portfolio: profile.portfolio.clone(),
            professional_summary: profile.professional_summary.clone(),
        }
    }
}
