//! Panel presentation state.
//!
//! DESIGN
//! ======
//! The panel's `display` style property is the only place visibility lives.
//! This module names its two values and the transitions between them so the
//! DOM layer never reasons about raw strings.

pub mod panel;
