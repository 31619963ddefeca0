// ============================================================================
// REQUEST LIFECYCLE - cancellation scoped to a view
// ============================================================================
// A view owns one RequestScope. Starting a fetch supersedes the previous one,
// unmounting cancels whatever is in flight. Results from a cancelled token
// are dropped instead of committed.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::AppError;

#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Turns a finished result into `Cancelled` if the token was cancelled meanwhile.
    pub fn guard<T>(&self, result: Result<T, AppError>) -> Result<T, AppError> {
        if self.is_cancelled() {
            Err(AppError::Cancelled)
        } else {
            result
        }
    }

    /// Runs `commit` only while the token is live. Returns whether it ran.
    pub fn commit(&self, commit: impl FnOnce()) -> bool {
        if self.is_cancelled() {
            log::debug!("🚫 dropping result of a cancelled request");
            false
        } else {
            commit();
            true
        }
    }
}

/// One per view instance.
#[derive(Debug, Default)]
pub struct RequestScope {
    current: RefCell<Option<CancellationToken>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for a new request; the previous one (if any) is cancelled.
    pub fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.current.borrow_mut().replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    /// Called on unmount.
    pub fn cancel(&self) {
        if let Some(token) = self.current.borrow_mut().take() {
            token.cancel();
        }
    }
}
