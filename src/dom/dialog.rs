// ============================================================================
// DIALOGS
// ============================================================================

use crate::dom::window;
use crate::viewmodels::Confirm;

/// `window.confirm`; blocks the event loop until answered
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        match window() {
            Some(win) => win.confirm_with_message(message).unwrap_or(false),
            None => {
                log::warn!("⚠️ No window, treating '{}' as declined", message);
                false
            }
        }
    }
}
