pub mod board;
pub mod notice;
pub mod status_panel;

pub use board::{BoardGeometry, BoardSize, BoardWidget, Highlights};
pub use notice::NoticeWidget;
pub use status_panel::StatusPanel;
