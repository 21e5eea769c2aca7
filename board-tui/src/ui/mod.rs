pub mod app;
pub mod drag;
pub mod input;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::{run_app, App};
pub use input::AppAction;
