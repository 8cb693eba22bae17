use card_sight::view::{log_lines, COLOR_ACCENT, COLOR_PRIMARY};
use card_sight::{build_profile_view, ContactKind, LifecyclePhase, ProfileData, Theme, ViewNode};

fn contact_icons(nodes: &[ViewNode]) -> Vec<&'static str> {
    nodes
        .iter()
        .filter_map(|node| match node {
            ViewNode::ContactRow { icon, .. } => Some(*icon),
            _ => None,
        })
        .collect()
}

#[test]
fn test_render_is_idempotent_for_identical_inputs() {
    let profile = ProfileData::default();
    let theme = Theme::default();
    let log = [
        LifecyclePhase::Created,
        LifecyclePhase::Started,
        LifecyclePhase::Resumed,
    ];

    let first = build_profile_view(&profile, &log, &theme);
    let second = build_profile_view(&profile, &log, &theme);

    // 同样的输入必得同一棵视图树
    assert_eq!(first, second);
}

#[test]
fn test_log_region_shows_lines_in_call_order() {
    let log = [
        LifecyclePhase::Created,
        LifecyclePhase::Started,
        LifecyclePhase::Resumed,
    ];
    let nodes = build_profile_view(&ProfileData::default(), &log, &Theme::default());

    assert_eq!(
        log_lines(&nodes).unwrap(),
        &["onCreate", "onStart", "onResume"]
    );
}

#[test]
fn test_contact_rows_fixed_order_regardless_of_log() {
    let profile = ProfileData::default();
    let theme = Theme::default();

    let empty = build_profile_view(&profile, &[], &theme);
    let busy = build_profile_view(
        &profile,
        &[
            LifecyclePhase::Created,
            LifecyclePhase::Started,
            LifecyclePhase::Resumed,
            LifecyclePhase::Paused,
            LifecyclePhase::Stopped,
        ],
        &theme,
    );

    let expected: Vec<&str> = ContactKind::ORDER.iter().map(|k| k.icon()).collect();
    assert_eq!(contact_icons(&empty), expected);
    assert_eq!(contact_icons(&busy), expected);
}

#[test]
fn test_empty_log_still_renders_header_and_contacts() {
    let profile = ProfileData::default();
    let nodes = build_profile_view(&profile, &[], &Theme::default());

    // 日志区零行
    assert_eq!(log_lines(&nodes).unwrap().len(), 0);

    // 头部照常: 照片 + 姓名 + 头衔
    assert!(matches!(nodes[0], ViewNode::Photo { .. }));
    match &nodes[1] {
        ViewNode::Label { text, .. } => assert_eq!(text, &profile.full_name),
        other => panic!("期望姓名标签, 实际是 {:?}", other),
    }

    // 联系方式照常三行
    assert_eq!(contact_icons(&nodes).len(), 3);
}

#[test]
fn test_icon_accent_label_primary() {
    let nodes = build_profile_view(&ProfileData::default(), &[], &Theme::default());

    for node in &nodes {
        if let ViewNode::ContactRow {
            icon_color,
            label_color,
            ..
        } = node
        {
            assert_eq!(*icon_color, COLOR_ACCENT);
            assert_eq!(*label_color, COLOR_PRIMARY);
        }
    }
}

#[test]
fn test_photo_uses_theme_size() {
    let mut theme = Theme::default();
    theme.photo_size = 96.0;
    let nodes = build_profile_view(&ProfileData::default(), &[], &theme);

    match &nodes[0] {
        ViewNode::Photo { size, .. } => assert_eq!(*size, 96.0),
        other => panic!("期望照片节点, 实际是 {:?}", other),
    }
}
