//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, toggle activation)
/// - System events (timer ticks)
///
/// Intents are processed by reducers to produce new states. `Debug` is
/// required so the store can trace every dispatch.
pub trait Intent: Debug + Send + 'static {}
