use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::error::{Error, Result};

pub const MISSING_PARAMS_MESSAGE: &str = "Missing courseId or accessToken";

/// Query string shared by the `/api/canvas/*` routes.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CanvasQuery {
    #[validate(required, length(min = 1))]
    pub course_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub access_token: Option<String>,
}

impl CanvasQuery {
    /// Returns `(course_id, access_token)` when both are present and non-empty.
    pub fn into_credentials(self) -> Result<(String, String)> {
        self.validate()
            .map_err(|_| Error::BadRequest(MISSING_PARAMS_MESSAGE.to_string()))?;
        match (self.course_id, self.access_token) {
            (Some(course_id), Some(access_token)) => Ok((course_id, access_token)),
            _ => Err(Error::BadRequest(MISSING_PARAMS_MESSAGE.to_string())),
        }
    }
}

impl fmt::Debug for CanvasQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasQuery")
            .field("course_id", &self.course_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
