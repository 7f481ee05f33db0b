//! Request and response bodies of the `web` module.
//! Includes structs that need to be validated, their parsing implementations and tests for those

use serde::{Deserialize, Serialize};

use crate::model::Signup;

// Email validation lives with the model, re-exported for request parsing.
pub use crate::model::{DataParsingError, ValidEmail};

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable Signup
/// A waitlist signup that can be Deserialized but can have invalid fields
#[derive(Debug, Deserialize)]
pub struct DeserSignup {
    pub email: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// Validated Signup
#[derive(Debug, Clone)]
pub struct ValidSignup {
    pub email: ValidEmail,
    pub source: Option<String>,
}

impl TryFrom<DeserSignup> for ValidSignup {
    type Error = DataParsingError;

    fn try_from(deser: DeserSignup) -> Result<Self, Self::Error> {
        Ok(ValidSignup {
            email: ValidEmail::parse(deser.email)?,
            source: deser.source,
        })
    }
}

/// Body of `GET /`
#[derive(Debug, Serialize)]
pub struct RootStatus {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Body of a successful `POST /api/waitlist`
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: &'static str,
    pub email: String,
}

impl From<Signup> for SignupResponse {
    fn from(signup: Signup) -> Self {
        SignupResponse {
            success: true,
            message: "Successfully joined the waitlist!",
            email: signup.email().to_string(),
        }
    }
}

/// Body of `GET /api/waitlist/count`
#[derive(Debug, Serialize)]
pub struct WaitlistCount {
    pub count: usize,
    pub status: &'static str,
}
