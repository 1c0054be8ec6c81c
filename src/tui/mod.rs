pub mod app;
pub mod input;
pub mod layout;
pub mod render;
pub mod theme;
pub mod view;

pub use app::run;
