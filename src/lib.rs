// 核心模块
pub mod config;
pub mod lifecycle;
pub mod profile;
pub mod view;

// GUI 模块 (可选特性)
#[cfg(feature = "gui")]
pub mod gui;

// 重新导出主要类型
pub use config::{CardConfig, ConfigError, WindowConfig};
pub use lifecycle::{
    LifecycleError, LifecycleListener, LifecyclePhase, LifecycleRecorder, ScreenController,
};
pub use profile::{ContactEntry, ContactKind, ProfileData};
pub use view::{build_profile_view, Theme, ViewNode};

/// 库的版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 初始化日志系统 - 日志写入文件, 避免干扰界面输出
pub fn init_logging(level: &str) {
    use std::fs::OpenOptions;

    let filter = level.parse().unwrap_or(log::LevelFilter::Warn);

    match OpenOptions::new()
        .create(true)
        .append(true)
        .open("card_sight.log")
    {
        Ok(log_file) => {
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .filter_level(filter)
                .init();
        }
        Err(_) => {
            // 无法创建日志文件时退回标准错误输出
            env_logger::Builder::from_default_env()
                .filter_level(filter)
                .init();
        }
    }
}
