//! In-memory model layer.
//! State only lives as long as the process, there is nothing to migrate or connect to.

mod email;
mod waitlist;

pub use email::{DataParsingError, ValidEmail};
pub use waitlist::{Signup, Waitlist, WaitlistError, WaitlistResult, DEFAULT_SOURCE};

use tracing::info;

#[derive(Debug, Default)]
pub struct ModelManager {
    waitlist: Waitlist,
}

impl ModelManager {
    pub fn init() -> Self {
        info!("{:<12} - Initializing the in-memory waitlist", "init_model");

        Self {
            waitlist: Waitlist::new(),
        }
    }

    pub fn waitlist(&self) -> &Waitlist {
        &self.waitlist
    }
}
