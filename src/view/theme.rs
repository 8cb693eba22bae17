/// 界面主题标记
///
/// 颜色与尺寸均为固定样式常量, 核心层不依赖任何 UI 工具包,
/// GUI 层负责把 `Rgb` 换算成具体颜色类型。
use serde::{Deserialize, Serialize};

/// sRGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// 背景色
pub const COLOR_SURFACE: Rgb = Rgb(0xBF, 0xC6, 0xC4);
/// 主色 (姓名、日志、联系文案)
pub const COLOR_PRIMARY: Rgb = Rgb(0x6F, 0x8F, 0x72);
/// 强调色 (头衔、联系图标)
pub const COLOR_ACCENT: Rgb = Rgb(0xF2, 0xA6, 0x5A);

/// 主题: 名片界面使用的全部样式标记
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub surface: Rgb,
    pub primary: Rgb,
    pub accent: Rgb,
    /// 照片边长 (正方形)
    pub photo_size: f32,
    /// 姓名字号
    pub name_font_size: f32,
    /// 头衔字号
    pub title_font_size: f32,
    /// 头部区域与日志区之间的间隔
    pub header_gap: f32,
    /// 日志区与联系方式区之间的间隔
    pub contact_gap: f32,
    /// 联系方式行的上下内边距
    pub row_padding: f32,
    /// 卡片整体内边距
    pub card_padding: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: COLOR_SURFACE,
            primary: COLOR_PRIMARY,
            accent: COLOR_ACCENT,
            photo_size: 120.0,
            name_font_size: 24.0,
            title_font_size: 16.0,
            header_gap: 16.0,
            contact_gap: 32.0,
            row_padding: 8.0,
            card_padding: 16.0,
        }
    }
}
