// ============================================================================
// STATE - Rc<RefCell> screen state + cancellation
// ============================================================================

pub mod lifetime;
pub mod reactivity;

pub use lifetime::CancelToken;
pub use reactivity::ReactiveState;
