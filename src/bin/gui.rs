/// 图形界面入口 - 需要 gui 特性
use card_sight::gui::CardSightGui;
use card_sight::{init_logging, CardConfig};
use eframe::egui;
use std::env;

fn main() -> eframe::Result<()> {
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "card_sight.toml".to_string());

    let config = CardConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("配置加载失败, 使用默认配置: {}", e);
        CardConfig::default()
    });

    init_logging(&config.log_level.0);
    log::info!("card_sight {} 启动", card_sight::VERSION);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "card_sight",
        options,
        Box::new(move |cc| Box::new(CardSightGui::new(cc, config))),
    )
}
