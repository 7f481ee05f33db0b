use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::model::WaitlistError;

use super::types::DataParsingError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("waitlist error: {0}")]
    Waitlist(#[from] WaitlistError),

    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Waitlist(WaitlistError::DuplicateRegistration) => {
                (StatusCode::BAD_REQUEST, EmailAlreadyRegistered)
            }
            Error::DataParsing(data_er) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                InvalidInput(data_er.to_string()),
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Email already registered")]
    EmailAlreadyRegistered,
    #[display("Received invalid input: {_0}")]
    InvalidInput(String),
}
