//! Validated email addresses, the identity of a waitlist signup.

use unicode_segmentation::UnicodeSegmentation;
use validator::ValidateEmail;

/// Validated Email
///
/// The domain is stored lowercased, the local part is kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmail(String);

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ValidEmail> for String {
    fn from(value: ValidEmail) -> Self {
        value.0
    }
}

impl ValidEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();

        if value.graphemes(true).count() > 256 {
            return Err(DataParsingError::EmailTooLong);
        }

        if !value.validate_email() {
            return Err(DataParsingError::EmailInvalid);
        }

        // A valid address always contains an '@', the domain follows the last one.
        let (local, domain) = value
            .rsplit_once('@')
            .ok_or(DataParsingError::EmailInvalid)?;

        Ok(ValidEmail(format!("{local}@{}", domain.to_lowercase())))
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("email is not a valid email address")]
    EmailInvalid,
    #[error("email is longer than 256 graphemes")]
    EmailTooLong,
}
