//! State management module
//!
//! - Route: the views of the learning dashboard
//! - PlayerSettings: user configuration loaded at startup
//! - NotesState: timestamped notes taken during a lesson

mod notes;
mod route;
mod settings;

pub use notes::*;
pub use route::*;
pub use settings::*;
