/// GUI模块 - 基于 eframe/egui 的桌面窗口
pub mod card_app;
pub mod profile_widget;

pub use card_app::CardSightGui;
pub use profile_widget::ProfileCardWidget;
