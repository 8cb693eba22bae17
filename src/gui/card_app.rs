use eframe::egui;

use crate::config::CardConfig;
use crate::lifecycle::{LifecycleError, LifecyclePhase, ScreenController};
use crate::view::{build_profile_view, Theme};
use crate::ProfileData;

use super::profile_widget::ProfileCardWidget;

fn to_color32(color: crate::view::Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.0, color.1, color.2)
}

/// 名片应用 - 把宿主窗口事件映射为生命周期回调
///
/// 宿主窗口状态与目标阶段的对应关系:
/// 最小化 → Stopped, 可见无焦点 → Paused, 可见有焦点 → Resumed。
/// 每帧沿固定迁移表逐步逼近目标阶段, 之后重建视图树并绘制。
pub struct CardSightGui {
    controller: ScreenController,
    profile: ProfileData,
    theme: Theme,
    widget: ProfileCardWidget,
    first_frame: bool,
}

impl CardSightGui {
    pub fn new(cc: &eframe::CreationContext<'_>, config: CardConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut controller = ScreenController::new();
        // 窗口创建即 onCreate
        if let Err(e) = controller.on_create() {
            log::error!("生命周期初始化失败: {}", e);
        }

        let widget = ProfileCardWidget::new(config.profile.monogram());

        Self {
            controller,
            profile: config.profile,
            theme: Theme::default(),
            widget,
            first_frame: true,
        }
    }

    /// 根据窗口可见性与焦点把控制器推进到目标阶段
    fn apply_host_state(&mut self, visible: bool, focused: bool) {
        use LifecyclePhase::*;

        let target = if !visible {
            Stopped
        } else if focused {
            Resumed
        } else {
            Paused
        };

        // 迁移表中任意两个非终态之间最多四步可达
        for _ in 0..4 {
            if self.controller.current_phase() == Some(target) {
                break;
            }
            let step: Result<(), LifecycleError> = match self.controller.current_phase() {
                Some(Created) => self.controller.on_start(),
                Some(Started) => self.controller.on_resume(),
                Some(Resumed) => self.controller.on_pause(),
                Some(Paused) if target == Resumed => self.controller.on_resume(),
                Some(Paused) => self.controller.on_stop(),
                Some(Stopped) => self.controller.on_start(),
                _ => break,
            };
            if let Err(e) = step {
                log::warn!("宿主状态同步中断: {}", e);
                break;
            }
        }
    }
}

impl eframe::App for CardSightGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 首帧等价于宿主的 onStart + onResume
        let focused = if self.first_frame {
            self.first_frame = false;
            true
        } else {
            ctx.input(|i| i.focused)
        };
        let minimized = ctx.input(|i| i.viewport().minimized.unwrap_or(false));
        self.apply_host_state(!minimized, focused);

        let frame = egui::Frame::default()
            .fill(to_color32(self.theme.surface))
            .inner_margin(self.theme.card_padding);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            // 绘制前在同一线程上取快照, 不存在撕裂读
            let nodes =
                build_profile_view(&self.profile, self.controller.recorder().phases(), &self.theme);
            self.widget.show(ui, &nodes);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // 窗口关闭: 依序走完剩余生命周期直至销毁
        self.apply_host_state(false, false);
        if let Err(e) = self.controller.on_destroy() {
            log::warn!("销毁阶段迁移失败: {}", e);
        }
        log::info!(
            "退出, 共记录 {} 条生命周期事件",
            self.controller.recorder().len()
        );
    }
}
