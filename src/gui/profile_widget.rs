use eframe::egui;
use std::path::Path;

use crate::view::{HAlign, Rgb, ViewNode};

fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.0, color.1, color.2)
}

/// 名片组件 - 把视图树解释成 egui 界面
///
/// 自身不持有任何可变状态, 每帧对着同一棵视图树重画
/// 得到同样的界面。
pub struct ProfileCardWidget {
    /// 照片缺失时占位图的文案 (姓名缩写)
    monogram: String,
}

impl ProfileCardWidget {
    pub fn new(monogram: String) -> Self {
        Self { monogram }
    }

    /// 渲染整棵视图树, 整体水平居中
    pub fn show(&self, ui: &mut egui::Ui, nodes: &[ViewNode]) {
        ui.vertical_centered(|ui| {
            for node in nodes {
                self.show_node(ui, node);
            }
        });
    }

    fn show_node(&self, ui: &mut egui::Ui, node: &ViewNode) {
        match node {
            ViewNode::Photo { source, size } => {
                self.show_photo(ui, source, *size);
            }
            ViewNode::Label {
                text,
                font_size,
                color,
                align,
            } => {
                let rich = egui::RichText::new(text)
                    .size(*font_size)
                    .color(to_color32(*color));
                match align {
                    HAlign::Center => {
                        ui.label(rich);
                    }
                    HAlign::Left => {
                        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                            ui.label(rich);
                        });
                    }
                }
            }
            ViewNode::Gap { height } => {
                ui.add_space(*height);
            }
            ViewNode::LogList { lines, color } => {
                // 日志区可滚动, 随记录增长
                egui::ScrollArea::vertical()
                    .id_source("lifecycle_log")
                    .max_height(ui.available_height() * 0.5)
                    .show(ui, |ui| {
                        for line in lines {
                            ui.label(egui::RichText::new(line).color(to_color32(*color)));
                        }
                    });
            }
            ViewNode::ContactRow {
                icon,
                icon_color,
                label,
                label_color,
            } => {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(*icon).color(to_color32(*icon_color)));
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(label).color(to_color32(*label_color)));
                });
            }
        }
    }

    /// 照片: 文件存在则加载图片, 否则画姓名缩写占位图
    fn show_photo(&self, ui: &mut egui::Ui, source: &str, size: f32) {
        if Path::new(source).exists() {
            ui.add(
                egui::Image::from_uri(format!("file://{}", source))
                    .fit_to_exact_size(egui::vec2(size, size)),
            );
        } else {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(
                rect,
                egui::Rounding::same(size * 0.1),
                egui::Color32::from_rgb(0x6F, 0x8F, 0x72),
            );
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &self.monogram,
                egui::FontId::proportional(size * 0.35),
                egui::Color32::WHITE,
            );
        }
    }
}
