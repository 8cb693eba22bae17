/// 无界面演示入口
///
/// 以脚本化的生命周期会话驱动屏幕控制器 (启动 → 失焦 →
/// 后台 → 前台 → 退出), 然后把纯渲染函数产出的视图树
/// 打印到标准输出。与 GUI 二进制共用同一套核心逻辑。
use card_sight::{
    build_profile_view, init_logging, CardConfig, LifecyclePhase, ScreenController, Theme, ViewNode,
};
use std::env;

/// 模拟一次完整的宿主生命周期会话
const SESSION: [LifecyclePhase; 12] = [
    LifecyclePhase::Created,
    LifecyclePhase::Started,
    LifecyclePhase::Resumed,
    LifecyclePhase::Paused,
    LifecyclePhase::Resumed,
    LifecyclePhase::Paused,
    LifecyclePhase::Stopped,
    LifecyclePhase::Started,
    LifecyclePhase::Resumed,
    LifecyclePhase::Paused,
    LifecyclePhase::Stopped,
    LifecyclePhase::Destroyed,
];

fn main() {
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "card_sight.toml".to_string());

    let config = CardConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("配置加载失败, 使用默认配置: {}", e);
        CardConfig::default()
    });

    init_logging(&config.log_level.0);
    log::info!("card_sight {} 无界面会话开始", card_sight::VERSION);

    let mut controller = ScreenController::new();
    for phase in SESSION {
        if let Err(e) = controller.invoke(phase) {
            log::error!("会话脚本执行失败: {}", e);
        }
    }

    let theme = Theme::default();
    let nodes = build_profile_view(&config.profile, controller.recorder().phases(), &theme);
    print_tree(&nodes);

    println!();
    println!("记录器导出: {}", controller.recorder().to_json());
}

/// 把视图树逐节点打印成文本
fn print_tree(nodes: &[ViewNode]) {
    for node in nodes {
        match node {
            ViewNode::Photo { source, size } => {
                println!("[照片 {}x{}: {}]", size, size, source);
            }
            ViewNode::Label { text, font_size, .. } => {
                println!("{} ({}pt)", text, font_size);
            }
            ViewNode::Gap { .. } => {
                println!();
            }
            ViewNode::LogList { lines, .. } => {
                for line in lines {
                    println!("  {}", line);
                }
            }
            ViewNode::ContactRow { icon, label, .. } => {
                println!("{}  {}", icon, label);
            }
        }
    }
}
