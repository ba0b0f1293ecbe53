//! # login-dropdown
//!
//! Login menu dropdown for server-rendered pages, compiled to WebAssembly.
//!
//! Clicking the login button toggles the dropdown panel; clicking anywhere
//! outside the button closes it. The page markup supplies both elements by
//! id. When either is missing the feature stays inert.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Element ids and display values |
//! | [`error`] | Error taxonomy |
//! | [`state`] | Two-value panel visibility and its transitions |
//! | [`dom`] | Host traits and the [`dom::DropdownToggle`] controller |
//! | [`mount`] | Initialization guard, listener installation, WASM entry points |
//!
//! Browser glue (`dom::browser`, the exported entry points) compiles only with
//! the `hydrate` feature. Everything else runs and tests natively.

pub mod config;
pub mod dom;
pub mod error;
pub mod mount;
pub mod state;
