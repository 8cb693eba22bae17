use serde::{Deserialize, Serialize};
use std::fmt;

/// 屏幕控制器的生命周期阶段
///
/// 与宿主平台的可见性/活跃周期一一对应。阶段名即回调名,
/// 渲染层展示的日志行也使用回调名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// 已创建
    Created,
    /// 已启动 (可见)
    Started,
    /// 已恢复 (前台活跃)
    Resumed,
    /// 已暂停 (失去焦点)
    Paused,
    /// 已停止 (不可见)
    Stopped,
    /// 已销毁 (终态)
    Destroyed,
}

impl LifecyclePhase {
    /// 全部阶段, 按标准前进顺序排列
    pub const ALL: [LifecyclePhase; 6] = [
        LifecyclePhase::Created,
        LifecyclePhase::Started,
        LifecyclePhase::Resumed,
        LifecyclePhase::Paused,
        LifecyclePhase::Stopped,
        LifecyclePhase::Destroyed,
    ];

    /// 宿主平台回调入口的名称
    pub fn callback_name(&self) -> &'static str {
        match self {
            LifecyclePhase::Created => "onCreate",
            LifecyclePhase::Started => "onStart",
            LifecyclePhase::Resumed => "onResume",
            LifecyclePhase::Paused => "onPause",
            LifecyclePhase::Stopped => "onStop",
            LifecyclePhase::Destroyed => "onDestroy",
        }
    }

    /// 固定迁移表
    ///
    /// `Created → Started → Resumed ⇄ Paused → Stopped → Destroyed`,
    /// 另外允许 `Stopped → Started` 的后台/前台往返。`from` 为 `None`
    /// 表示控制器尚未创建, 此时只允许进入 `Created`。
    pub fn can_transition(from: Option<LifecyclePhase>, to: LifecyclePhase) -> bool {
        use LifecyclePhase::*;
        matches!(
            (from, to),
            (None, Created)
                | (Some(Created), Started)
                | (Some(Started), Resumed)
                | (Some(Resumed), Paused)
                | (Some(Paused), Resumed)
                | (Some(Paused), Stopped)
                | (Some(Stopped), Started)
                | (Some(Stopped), Destroyed)
        )
    }

    /// 是否为终态 (之后不再接受任何迁移)
    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecyclePhase::Destroyed)
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.callback_name())
    }
}
