use super::phase::LifecyclePhase;

/// 生命周期记录器
///
/// 进程内唯一的有序事件日志: 只追加, 不删除, 不重排。
/// 由屏幕控制器独占持有, 仅在生命周期回调里写入,
/// 渲染层只读。单线程使用, 无需任何同步原语。
#[derive(Debug, Default)]
pub struct LifecycleRecorder {
    entries: Vec<LifecyclePhase>,
    generation: u64,
}

impl LifecycleRecorder {
    /// 创建空的记录器
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条生命周期记录
    ///
    /// 全函数: 不校验, 不失败。每次追加递增 generation,
    /// 供绑定到日志序列的观察者判断是否需要重渲染。
    pub fn record(&mut self, phase: LifecyclePhase) {
        self.entries.push(phase);
        self.generation += 1;
        log::debug!("生命周期记录: {} (共 {} 条)", phase, self.entries.len());
    }

    /// 当前日志序列的阶段视图, 按插入顺序
    pub fn phases(&self) -> &[LifecyclePhase] {
        &self.entries
    }

    /// 渲染用快照: 按插入顺序返回全部回调名称
    ///
    /// 反映调用之前追加的所有记录, 无陈旧读。
    pub fn snapshot(&self) -> Vec<&'static str> {
        self.entries.iter().map(|p| p.callback_name()).collect()
    }

    /// 已记录的条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否尚无记录
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 变更代数, 每次 record 递增一次
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 导出为 JSON, 用于调试输出与日志归档
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "generation": self.generation,
            "entries": self.snapshot(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LifecyclePhase::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut recorder = LifecycleRecorder::new();
        assert!(recorder.is_empty());
        assert_eq!(recorder.generation(), 0);

        recorder.record(Created);
        recorder.record(Started);
        recorder.record(Resumed);

        assert_eq!(recorder.len(), 3);
        assert_eq!(recorder.generation(), 3);
        assert_eq!(recorder.snapshot(), vec!["onCreate", "onStart", "onResume"]);
    }

    #[test]
    fn test_record_is_append_only() {
        let mut recorder = LifecycleRecorder::new();
        recorder.record(Created);
        let before = recorder.snapshot();

        recorder.record(Started);
        let after = recorder.snapshot();

        // 先前的条目保持原位不变
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn test_json_export() {
        let mut recorder = LifecycleRecorder::new();
        recorder.record(Created);

        let value = recorder.to_json();
        assert_eq!(value["generation"], 1);
        assert_eq!(value["entries"][0], "onCreate");
    }
}
