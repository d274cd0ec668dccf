//! Stopwatch built on a minimal model-view-intent store.
//!
//! [`ui::mvi::Store`] owns the model and notifies subscribers after every
//! dispatch, [`ui::stopwatch`] holds the pure reducer and view derivation,
//! and [`ticker::Ticker`] drives one `Tick` per period. The terminal UI and
//! the headless driver are renderers subscribed to the store.

pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ticker;
pub mod ui;
