//! Utility library for the whole-body interface software
//!
//! Provides the session, logging and parameter loading facilities shared by
//! every executable in the workspace.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod host;
pub mod logger;
pub mod params;
pub mod session;
pub mod time;
