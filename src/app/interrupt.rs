//! Out-of-band interrupt delivery.
//!
//! A SIGINT that does not arrive as a raw-mode key (piped stdin, or a signal
//! sent by another process) only raises a flag here. The console checks the
//! flag while it waits for input and turns it into an ordinary interrupt, so
//! shutdown always runs through the same path as Ctrl-C.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "interrupt requested" flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupts {
    raised: Arc<AtomicBool>,
}

impl Interrupts {
    /// Route process SIGINT into a new flag.
    ///
    /// Only one handler can be installed per process.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let interrupts = Self::default();
        let raised = Arc::clone(&interrupts.raised);
        ctrlc::set_handler(move || raised.store(true, Ordering::SeqCst))?;
        Ok(interrupts)
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Whether an interrupt is pending. The flag stays set: once raised, the
    /// session is over.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}
