use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{DeadLetterQueue, Error};

/// Reports rejected commands on stderr and counts them so the caller can
/// summarize the run.
#[derive(Default, Debug)]
pub struct StdErrDlq {
    rejected: AtomicUsize,
}

impl StdErrDlq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }
}

impl DeadLetterQueue for StdErrDlq {
    fn report(&self, error: &Error) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
        eprintln!("rejected command: {error}");
    }
}
