pub mod config;
pub mod prefs;
pub mod routine;
pub mod task;

pub use config::*;
pub use prefs::*;
pub use routine::*;
pub use task::*;
