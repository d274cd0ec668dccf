//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits and the [`Store`] used to implement
//! unidirectional data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store::dispatch ──→ Reducer ──→ State ──→ subscribers ──→ View
//!    ↑                                                                  │
//!    └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Owns the current state, applies the reducer and notifies
//!   subscribers after every dispatch

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, Subscription};
