//! # Presentation Layer
//!
//! MVVM split, the same for the console listing and the interactive
//! screens:
//!
//! ```text
//! [ Screen/Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ View / Component ] --> Output
//!     (lifecycle)          (pure fn)        (raw data)        (layout + styling)
//! ```
//!
//! Ground rules:
//! - `view_models/` hold raw values (minutes, miles, timestamps), never
//!   formatted strings; `--format json` dumps them verbatim.
//! - `presenters/` are pure functions Domain -> ViewModel; all sums,
//!   counts, and durations are computed here and nowhere else.
//! - `views/` (console) and `components/` (TUI widgets) own layout,
//!   colors, and call into `formatters/` for display strings.
//! - Components are stateless: UI state (selection, scroll, tab) stays
//!   in the screen that renders them.

pub mod components;
pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;
