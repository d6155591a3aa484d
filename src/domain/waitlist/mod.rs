pub mod email;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use self::email::Email;

/// A validated signup, ready to be merged into the waitlist.
#[derive(Debug, Clone)]
pub struct WaitlistSubmission {
    pub email: Email,
    pub feedback: Option<String>,
    pub pain_points: Vec<String>,
}

impl WaitlistSubmission {
    /// Feedback that may replace what is already stored for this email.
    ///
    /// Blank feedback never overwrites a previous answer. The text is kept
    /// untrimmed.
    pub fn feedback_update(&self) -> Option<&str> {
        self.feedback
            .as_deref()
            .filter(|feedback| !feedback.trim().is_empty())
    }

    /// Pain points that may replace the stored list. An empty selection keeps
    /// the previous one.
    pub fn pain_points_update(&self) -> Option<&[String]> {
        if self.pain_points.is_empty() {
            None
        } else {
            Some(&self.pain_points)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub feedback: Option<String>,
    pub pain_points: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
