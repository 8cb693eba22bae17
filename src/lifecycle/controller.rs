use thiserror::Error;

use super::phase::LifecyclePhase;
use super::recorder::LifecycleRecorder;

/// 生命周期错误
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("非法生命周期迁移: {from:?} -> {to:?}")]
    InvalidTransition {
        from: Option<LifecyclePhase>,
        to: LifecyclePhase,
    },
}

/// 生命周期监听器
///
/// 每成功记录一个阶段后收到通知。渲染层以此实现
/// "状态变更即重新调用纯渲染函数" 的显式契约,
/// 不依赖任何隐式的响应式绑定。
pub trait LifecycleListener {
    /// 阶段变更回调, 附带只读的记录器视图
    fn on_phase_change(&mut self, phase: LifecyclePhase, recorder: &LifecycleRecorder);

    /// 监听器名称, 用于日志
    fn name(&self) -> &str {
        "listener"
    }
}

/// 屏幕控制器
///
/// 显式有限状态机: 六个宿主回调入口各自对照固定迁移表校验,
/// 校验通过才记录阶段并通知监听器。记录器由控制器独占持有,
/// 随控制器一起销毁, 不做任何持久化。
pub struct ScreenController {
    phase: Option<LifecyclePhase>,
    recorder: LifecycleRecorder,
    listeners: Vec<Box<dyn LifecycleListener>>,
}

impl ScreenController {
    /// 创建尚未进入任何阶段的控制器
    pub fn new() -> Self {
        Self {
            phase: None,
            recorder: LifecycleRecorder::new(),
            listeners: Vec::new(),
        }
    }

    /// 宿主回调: onCreate
    pub fn on_create(&mut self) -> Result<(), LifecycleError> {
        self.advance(LifecyclePhase::Created)
    }

    /// 宿主回调: onStart
    pub fn on_start(&mut self) -> Result<(), LifecycleError> {
        self.advance(LifecyclePhase::Started)
    }

    /// 宿主回调: onResume
    pub fn on_resume(&mut self) -> Result<(), LifecycleError> {
        self.advance(LifecyclePhase::Resumed)
    }

    /// 宿主回调: onPause
    pub fn on_pause(&mut self) -> Result<(), LifecycleError> {
        self.advance(LifecyclePhase::Paused)
    }

    /// 宿主回调: onStop
    pub fn on_stop(&mut self) -> Result<(), LifecycleError> {
        self.advance(LifecyclePhase::Stopped)
    }

    /// 宿主回调: onDestroy
    pub fn on_destroy(&mut self) -> Result<(), LifecycleError> {
        self.advance(LifecyclePhase::Destroyed)
    }

    /// 按目标阶段分发到对应的回调入口
    ///
    /// 便于脚本化驱动与测试, 语义与直接调用六个入口完全一致。
    pub fn invoke(&mut self, phase: LifecyclePhase) -> Result<(), LifecycleError> {
        match phase {
            LifecyclePhase::Created => self.on_create(),
            LifecyclePhase::Started => self.on_start(),
            LifecyclePhase::Resumed => self.on_resume(),
            LifecyclePhase::Paused => self.on_pause(),
            LifecyclePhase::Stopped => self.on_stop(),
            LifecyclePhase::Destroyed => self.on_destroy(),
        }
    }

    /// 当前阶段, None 表示尚未创建
    pub fn current_phase(&self) -> Option<LifecyclePhase> {
        self.phase
    }

    /// 是否已进入终态
    pub fn is_destroyed(&self) -> bool {
        matches!(self.phase, Some(p) if p.is_terminal())
    }

    /// 只读访问记录器
    pub fn recorder(&self) -> &LifecycleRecorder {
        &self.recorder
    }

    /// 渲染用快照, 按调用顺序返回全部回调名称
    pub fn snapshot(&self) -> Vec<&'static str> {
        self.recorder.snapshot()
    }

    /// 注册生命周期监听器
    pub fn add_listener(&mut self, listener: Box<dyn LifecycleListener>) {
        self.listeners.push(listener);
    }

    /// 执行一次状态迁移
    ///
    /// 非法迁移(含终态之后的任何调用)不产生记录, 直接返回错误。
    fn advance(&mut self, to: LifecyclePhase) -> Result<(), LifecycleError> {
        if !LifecyclePhase::can_transition(self.phase, to) {
            log::warn!("拒绝非法生命周期迁移: {:?} -> {}", self.phase, to);
            return Err(LifecycleError::InvalidTransition {
                from: self.phase,
                to,
            });
        }

        self.phase = Some(to);
        self.recorder.record(to);

        // 通知监听器 (显式重渲染契约)
        let recorder = &self.recorder;
        for listener in self.listeners.iter_mut() {
            listener.on_phase_change(to, recorder);
        }

        Ok(())
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}
