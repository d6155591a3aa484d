use serde::{Deserialize, Serialize};

use crate::{
    app::error::ErrorDetails,
    domain::waitlist::{email::Email, WaitlistEntry, WaitlistSubmission},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinWaitlistRequestBody {
    pub email: Option<String>,
    pub feedback: Option<String>,
    pub pain_points: Option<Vec<String>>,
}

impl TryFrom<JoinWaitlistRequestBody> for WaitlistSubmission {
    type Error = Vec<ErrorDetails>;

    fn try_from(value: JoinWaitlistRequestBody) -> Result<Self, Self::Error> {
        let email = match value.email {
            Some(email) => {
                Email::try_from(email).map_err(|e| vec![ErrorDetails::new("email", e)])?
            }
            None => return Err(vec![ErrorDetails::new("email", "email is required")]),
        };

        Ok(Self {
            email,
            feedback: value.feedback,
            pain_points: value.pain_points.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JoinWaitlistResponseBody {
    pub success: bool,
    pub entry: WaitlistEntry,
}
