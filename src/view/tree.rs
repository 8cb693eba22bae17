/// 视图树构建
///
/// 名片界面的纯渲染函数: 输入静态展示数据加日志快照,
/// 输出与 UI 工具包无关的视图节点序列。同样的输入必得
/// 同样的输出, 渲染层 (egui 或无界面驱动) 只负责解释节点。
use crate::lifecycle::LifecyclePhase;
use crate::profile::ProfileData;

use super::theme::{Rgb, Theme};

/// 水平对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Center,
    Left,
}

/// 视图节点
///
/// 渲染命令的最小集合, 自上而下按顺序排列即为界面布局。
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    /// 固定尺寸的正方形照片
    Photo { source: String, size: f32 },
    /// 单行文本
    Label {
        text: String,
        font_size: f32,
        color: Rgb,
        align: HAlign,
    },
    /// 垂直间隔
    Gap { height: f32 },
    /// 可滚动的日志区: 每条记录一行, 按插入顺序
    LogList { lines: Vec<String>, color: Rgb },
    /// 联系方式行: 强调色图标 + 主色文案, 行内左对齐
    ContactRow {
        icon: &'static str,
        icon_color: Rgb,
        label: String,
        label_color: Rgb,
    },
}

/// 构建名片视图树
///
/// 布局契约 (自上而下, 水平居中):
/// 照片、姓名、头衔、间隔、日志区、间隔、三行联系方式。
/// 对空日志同样成立: 日志区渲染零行, 其余部分照常。
pub fn build_profile_view(
    profile: &ProfileData,
    log: &[LifecyclePhase],
    theme: &Theme,
) -> Vec<ViewNode> {
    let mut nodes = Vec::with_capacity(9);

    nodes.push(ViewNode::Photo {
        source: profile.photo.clone(),
        size: theme.photo_size,
    });
    nodes.push(ViewNode::Label {
        text: profile.full_name.clone(),
        font_size: theme.name_font_size,
        color: theme.primary,
        align: HAlign::Center,
    });
    nodes.push(ViewNode::Label {
        text: profile.title.clone(),
        font_size: theme.title_font_size,
        color: theme.accent,
        align: HAlign::Center,
    });

    nodes.push(ViewNode::Gap {
        height: theme.header_gap,
    });

    nodes.push(ViewNode::LogList {
        lines: log.iter().map(|p| p.callback_name().to_string()).collect(),
        color: theme.primary,
    });

    nodes.push(ViewNode::Gap {
        height: theme.contact_gap,
    });

    for entry in profile.contact_entries() {
        nodes.push(ViewNode::ContactRow {
            icon: entry.kind.icon(),
            icon_color: theme.accent,
            label: entry.label,
            label_color: theme.primary,
        });
    }

    nodes
}

/// 视图树里日志区的行内容, 测试与无界面驱动使用
pub fn log_lines(nodes: &[ViewNode]) -> Option<&[String]> {
    nodes.iter().find_map(|node| match node {
        ViewNode::LogList { lines, .. } => Some(lines.as_slice()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::theme::{COLOR_ACCENT, COLOR_PRIMARY};

    #[test]
    fn test_layout_order() {
        let profile = ProfileData::default();
        let theme = Theme::default();
        let nodes = build_profile_view(&profile, &[], &theme);

        // 照片、姓名、头衔、间隔、日志区、间隔、三行联系方式
        assert_eq!(nodes.len(), 9);
        assert!(matches!(nodes[0], ViewNode::Photo { .. }));
        assert!(matches!(nodes[1], ViewNode::Label { .. }));
        assert!(matches!(nodes[2], ViewNode::Label { .. }));
        assert!(matches!(nodes[3], ViewNode::Gap { .. }));
        assert!(matches!(nodes[4], ViewNode::LogList { .. }));
        assert!(matches!(nodes[5], ViewNode::Gap { .. }));
        assert!(matches!(nodes[6], ViewNode::ContactRow { .. }));
        assert!(matches!(nodes[7], ViewNode::ContactRow { .. }));
        assert!(matches!(nodes[8], ViewNode::ContactRow { .. }));
    }

    #[test]
    fn test_name_primary_title_accent() {
        let profile = ProfileData::default();
        let theme = Theme::default();
        let nodes = build_profile_view(&profile, &[], &theme);

        match &nodes[1] {
            ViewNode::Label { text, color, .. } => {
                assert_eq!(text, &profile.full_name);
                assert_eq!(*color, COLOR_PRIMARY);
            }
            other => panic!("期望姓名标签, 实际是 {:?}", other),
        }
        match &nodes[2] {
            ViewNode::Label { text, color, .. } => {
                assert_eq!(text, &profile.title);
                assert_eq!(*color, COLOR_ACCENT);
            }
            other => panic!("期望头衔标签, 实际是 {:?}", other),
        }
    }

    #[test]
    fn test_empty_log_renders_zero_lines() {
        let nodes = build_profile_view(&ProfileData::default(), &[], &Theme::default());
        assert_eq!(log_lines(&nodes), Some(&[][..]));
    }
}
