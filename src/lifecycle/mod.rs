/// 生命周期模块
///
/// - 阶段定义与固定迁移表
/// - 追加式事件记录器
/// - 显式状态机形式的屏幕控制器
pub mod controller;
pub mod phase;
pub mod recorder;

pub use controller::{LifecycleError, LifecycleListener, ScreenController};
pub use phase::LifecyclePhase;
pub use recorder::LifecycleRecorder;
