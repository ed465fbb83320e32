//! Terminal presenter.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Input, AppEvent)
//! - `update`: Pure transitions on top of the navigator
//! - `view`: Pure rendering
//! - `theme`: Style constants
//! - `run`: Effects (terminal, key reader, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
