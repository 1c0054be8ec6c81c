pub mod form;
pub mod prefs_ops;
pub mod stats;
