// ============================================================================
// LIFETIME - Cancellation tied to a screen
// ============================================================================
// Requests are not aborted; their late results are dropped instead of being
// written into a dismissed screen.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Check after an await point, before touching screen state
    pub fn guard<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if self.is_cancelled() {
            log::debug!("🚫 Dropping a response that arrived after the screen was dismissed");
            return Err(ApiError::Cancelled);
        }
        result
    }
}
