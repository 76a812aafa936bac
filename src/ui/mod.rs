//! Terminal presentation: theme tokens, widgets and per-command views.

pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod prompt;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
