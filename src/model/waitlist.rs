//! The early access waitlist.
//!
//! `Waitlist` owns every `Signup` for the lifetime of the process. The duplicate check and the
//! append happen under one lock so two concurrent registrations of the same email can never both
//! succeed.

use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::{DateTime, Utc};
use strum_macros::AsRefStr;
use tracing::info;

use super::ValidEmail;

/// Source recorded when the client doesn't say where the signup came from.
pub const DEFAULT_SOURCE: &str = "landing_page";

// ###################################
// ->   ERROR
// ###################################
pub type WaitlistResult<T> = core::result::Result<T, WaitlistError>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum WaitlistError {
    #[error("email is already registered on the waitlist")]
    DuplicateRegistration,
}

// ###################################
// ->   STRUCTS
// ###################################
/// A single waitlist registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    email: String,
    source: String,
    registered_at: DateTime<Utc>,
}

impl Signup {
    fn new(email: String, source: String) -> Self {
        Signup {
            email,
            source,
            registered_at: Utc::now(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Registration instant in UTC, what a durable store would persist alongside the email.
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

#[derive(Debug, Default)]
struct WaitlistInner {
    // Insertion ordered.
    signups: Vec<Signup>,
    emails: HashSet<String>,
}

#[derive(Debug, Default)]
pub struct Waitlist {
    inner: Mutex<WaitlistInner>,
}

// ###################################
// ->   IMPLs
// ###################################
impl Waitlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `email` to the waitlist and returns the stored `Signup`.
    ///
    /// Emails are compared exactly as parsed. `ValidEmail` lowercases the domain but not the local
    /// part, so `A@example.com` and `a@example.com` are two different signups.
    /// A missing `source` is replaced with [`DEFAULT_SOURCE`].
    pub fn register(&self, email: ValidEmail, source: Option<String>) -> WaitlistResult<Signup> {
        let mut inner = self.lock();

        if inner.emails.contains(email.as_ref()) {
            return Err(WaitlistError::DuplicateRegistration);
        }

        let source = source.unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let signup = Signup::new(email.into(), source);

        inner.emails.insert(signup.email.clone());
        inner.signups.push(signup.clone());

        info!(
            "{:<12} - new signup: {} (source: {}), total: {}",
            "WAITLIST",
            signup.email,
            signup.source,
            inner.signups.len()
        );

        Ok(signup)
    }

    pub fn count(&self) -> usize {
        self.lock().signups.len()
    }

    /// Every mutation is completed before the guard is released, so a poisoned lock still holds
    /// a consistent waitlist.
    fn lock(&self) -> MutexGuard<'_, WaitlistInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
