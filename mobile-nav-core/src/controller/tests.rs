use std::time::{Duration, Instant};

use super::*;
use crate::gesture::Point;
use crate::i18n::Language;
use crate::test_utils::{nav_fixture, NavFixture};

fn attach(width: u32) -> (NavFixture, ResponsiveNavigationController) {
    let mut fx = nav_fixture(width);
    let controller = ResponsiveNavigationController::attach(NavConfig::default(), &mut fx.doc);
    (fx, controller)
}

fn els(doc: &Document) -> MobileElements {
    ResponsiveNavigationController::mobile_elements(doc).unwrap()
}

fn click(target: NodeId) -> NavEvent {
    NavEvent::Click {
        target: Some(target),
    }
}

fn key(key: Key, shift: bool) -> NavEvent {
    NavEvent::KeyDown { key, shift }
}

fn open_menu(fx: &mut NavFixture, controller: &mut ResponsiveNavigationController) {
    let toggle = els(&fx.doc).toggle;
    controller.dispatch(&mut fx.doc, click(toggle), Instant::now());
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Open)
    );
}

/// 导航栏中 nav-link / 问候语 / 登录按钮的顺序
fn entry_order(fx: &NavFixture, parent: NodeId) -> Vec<NodeId> {
    let mut expected: Vec<NodeId> = fx.links.clone();
    expected.push(fx.greeting);
    expected.push(fx.login);
    fx.doc
        .children(parent)
        .iter()
        .copied()
        .filter(|id| expected.contains(id))
        .collect()
}

// ===== 布局切换 =====

#[test]
fn attach_on_narrow_viewport_enters_mobile_mode() {
    let (fx, _controller) = attach(375);
    assert_eq!(ResponsiveNavigationController::mode(&fx.doc), LayoutMode::Mobile);

    let els = els(&fx.doc);
    assert_eq!(els.nav, fx.nav);
    assert_eq!(fx.doc.children(fx.nav), &[els.toggle, els.menu]);

    let mut expected = fx.links.clone();
    expected.push(fx.greeting);
    expected.push(fx.login);
    assert_eq!(fx.doc.children(els.menu), expected.as_slice());
}

#[test]
fn attach_on_wide_viewport_keeps_desktop_layout() {
    let (fx, _controller) = attach(1024);
    assert_eq!(ResponsiveNavigationController::mode(&fx.doc), LayoutMode::Desktop);
    assert!(ResponsiveNavigationController::mobile_elements(&fx.doc).is_none());
    assert_eq!(entry_order(&fx, fx.nav).len(), 5);
}

#[test]
fn breakpoint_is_inclusive() {
    let (fx, _controller) = attach(480);
    assert_eq!(ResponsiveNavigationController::mode(&fx.doc), LayoutMode::Mobile);

    let (fx, _controller) = attach(481);
    assert_eq!(ResponsiveNavigationController::mode(&fx.doc), LayoutMode::Desktop);
}

#[test]
fn evaluate_layout_is_idempotent() {
    let (mut fx, mut controller) = attach(320);
    let before: Vec<NodeId> = fx.doc.descendants(fx.doc.root());

    for _ in 0..3 {
        assert_eq!(controller.evaluate_layout(&mut fx.doc), LayoutMode::Mobile);
        assert!(!controller.enter_mobile_mode(&mut fx.doc));
    }
    assert_eq!(fx.doc.descendants(fx.doc.root()), before);
}

#[test]
fn mobile_round_trip_restores_order_and_identity() {
    let (mut fx, mut controller) = attach(1024);
    let original = entry_order(&fx, fx.nav);

    assert!(controller.enter_mobile_mode(&mut fx.doc));
    assert!(controller.exit_mobile_mode(&mut fx.doc));

    assert_eq!(entry_order(&fx, fx.nav), original);
    assert_eq!(fx.doc.children(fx.nav), original.as_slice());
    assert!(fx.doc.query_class(fx.nav, selectors::NAV_TOGGLE).is_none());
    assert!(fx.doc.query_class(fx.nav, selectors::NAV_MENU).is_none());
}

#[test]
fn round_trip_keeps_document_order_with_greeting_first() {
    let mut doc = Document::new(1024);
    let root = doc.root();
    let nav = doc.create_element("nav");
    doc.element_mut(nav).unwrap().add_class(selectors::NAV);
    doc.append_child(root, nav).unwrap();

    let greeting = doc.create_element("span");
    doc.element_mut(greeting).unwrap().add_class(selectors::USER_GREETING);
    doc.append_child(nav, greeting).unwrap();
    let link = doc.create_element("a");
    {
        let el = doc.element_mut(link).unwrap();
        el.add_class(selectors::NAV_LINK);
        el.set_attribute("href", "/");
    }
    doc.append_child(nav, link).unwrap();

    let mut controller = ResponsiveNavigationController::attach(NavConfig::default(), &mut doc);
    doc.viewport.width = 320;
    controller.evaluate_layout(&mut doc);
    let menu = els(&doc).menu;
    assert_eq!(doc.children(menu), &[greeting, link]);

    doc.viewport.width = 1024;
    controller.evaluate_layout(&mut doc);
    assert_eq!(doc.children(nav), &[greeting, link]);
}

#[test]
fn entries_are_never_duplicated() {
    let (mut fx, mut controller) = attach(320);
    let links = fx.doc.query_class_all(fx.doc.root(), selectors::NAV_LINK);
    assert_eq!(links.len(), 3);

    controller.exit_mobile_mode(&mut fx.doc);
    controller.enter_mobile_mode(&mut fx.doc);
    assert_eq!(fx.doc.query_class_all(fx.doc.root(), selectors::NAV_LINK), links);
}

#[test]
fn links_added_while_desktop_are_collapsed_next_time() {
    let (mut fx, mut controller) = attach(1024);
    let extra = fx.doc.create_element("a");
    {
        let el = fx.doc.element_mut(extra).unwrap();
        el.add_class(selectors::NAV_LINK);
        el.set_attribute("href", "/games/");
    }
    fx.doc.append_child(fx.nav, extra).unwrap();

    controller.enter_mobile_mode(&mut fx.doc);
    let menu = els(&fx.doc).menu;
    assert_eq!(fx.doc.parent(extra), Some(menu));
    // 所有 nav-link 在前，问候语和登录按钮在后
    assert_eq!(fx.doc.children(menu)[3], extra);
    assert_eq!(fx.doc.children(menu)[4], fx.greeting);
}

#[test]
fn nested_links_are_moved_from_their_wrapper() {
    let mut fx = nav_fixture(1024);
    let wrapper = fx.doc.create_element("div");
    fx.doc.append_child(fx.nav, wrapper).unwrap();
    let nested = fx.doc.create_element("a");
    fx.doc.element_mut(nested).unwrap().add_class(selectors::NAV_LINK);
    fx.doc.append_child(wrapper, nested).unwrap();

    let mut controller = ResponsiveNavigationController::attach(NavConfig::default(), &mut fx.doc);
    assert!(controller.enter_mobile_mode(&mut fx.doc));
    assert_eq!(fx.doc.parent(nested), Some(els(&fx.doc).menu));
    assert!(fx.doc.children(wrapper).is_empty());
}

#[test]
fn missing_navigation_is_a_no_op() {
    let mut doc = Document::new(320);
    let main = doc.create_element("main");
    doc.append_child(doc.root(), main).unwrap();

    let mut controller = ResponsiveNavigationController::attach(NavConfig::default(), &mut doc);
    assert_eq!(ResponsiveNavigationController::mode(&doc), LayoutMode::Desktop);
    assert!(!controller.enter_mobile_mode(&mut doc));
    assert!(!controller.exit_mobile_mode(&mut doc));
    assert_eq!(controller.toggle_menu(&mut doc), None);
    assert!(!controller.close_menu(&mut doc));
    assert_eq!(
        controller.dispatch(&mut doc, NavEvent::Click { target: None }, Instant::now()),
        Reaction::Ignored
    );
    assert_eq!(doc.children(doc.root()), &[main]);
}

#[test]
fn link_click_without_navigation_still_follows_link() {
    let mut doc = Document::new(1024);
    let link = doc.create_element("a");
    doc.element_mut(link).unwrap().set_attribute("href", "/games/");
    doc.append_child(doc.root(), link).unwrap();

    let mut controller = ResponsiveNavigationController::attach(NavConfig::default(), &mut doc);
    assert_eq!(
        controller.dispatch(&mut doc, click(link), Instant::now()),
        Reaction::FollowLink {
            href: "/games/".to_string()
        }
    );
}

#[test]
fn role_navigation_is_recognised() {
    let mut doc = Document::new(320);
    let nav = doc.create_element("div");
    doc.element_mut(nav).unwrap().set_attribute("role", "navigation");
    doc.append_child(doc.root(), nav).unwrap();
    let link = doc.create_element("a");
    doc.element_mut(link).unwrap().add_class(selectors::NAV_LINK);
    doc.append_child(nav, link).unwrap();

    let _controller = ResponsiveNavigationController::attach(NavConfig::default(), &mut doc);
    let els = els(&doc);
    assert_eq!(els.nav, nav);
    assert_eq!(doc.parent(link), Some(els.menu));
}

#[test]
fn partial_mobile_state_is_cleaned_up_on_exit() {
    let (mut fx, mut controller) = attach(320);
    let els = els(&fx.doc);
    fx.doc.remove(els.toggle).unwrap();

    assert!(controller.exit_mobile_mode(&mut fx.doc));
    assert!(fx.doc.query_class(fx.nav, selectors::NAV_MENU).is_none());
    assert_eq!(entry_order(&fx, fx.nav).len(), 5);
}

// ===== resize 防抖 =====

#[test]
fn resize_burst_evaluates_once_after_quiet_period() {
    let (mut fx, mut controller) = attach(1024);
    let t0 = Instant::now();

    for (i, width) in [900, 700, 500, 400].into_iter().enumerate() {
        let at = t0 + Duration::from_millis(100 * i as u64);
        controller.dispatch(&mut fx.doc, NavEvent::Resize { width }, at);
        assert!(!controller.poll(&mut fx.doc, at));
    }
    let last = t0 + Duration::from_millis(300);
    assert_eq!(
        controller.next_deadline(),
        Some(last + Duration::from_millis(250))
    );

    // 布局在静默期结束前不变
    assert!(!controller.poll(&mut fx.doc, last + Duration::from_millis(249)));
    assert_eq!(ResponsiveNavigationController::mode(&fx.doc), LayoutMode::Desktop);

    assert!(controller.poll(&mut fx.doc, last + Duration::from_millis(250)));
    assert_eq!(ResponsiveNavigationController::mode(&fx.doc), LayoutMode::Mobile);
    assert!(!controller.poll(&mut fx.doc, last + Duration::from_secs(1)));
    assert_eq!(controller.next_deadline(), None);
}

#[test]
fn resize_back_to_desktop_restores_entries() {
    let (mut fx, mut controller) = attach(320);
    let t0 = Instant::now();
    controller.dispatch(&mut fx.doc, NavEvent::Resize { width: 1280 }, t0);
    assert!(controller.poll(&mut fx.doc, t0 + Duration::from_millis(250)));

    assert_eq!(ResponsiveNavigationController::mode(&fx.doc), LayoutMode::Desktop);
    let mut expected = fx.links.clone();
    expected.push(fx.greeting);
    expected.push(fx.login);
    assert_eq!(fx.doc.children(fx.nav), expected.as_slice());
}

// ===== 菜单开合 =====

#[test]
fn toggle_updates_glyph_and_label() {
    let (mut fx, mut controller) = attach(320);
    let toggle = els(&fx.doc).toggle;
    let el = fx.doc.element(toggle).unwrap();
    assert_eq!(el.text(), "☰");
    assert_eq!(el.attribute("aria-label"), Some("open menu"));
    assert_eq!(el.attribute("aria-expanded"), Some("false"));

    assert_eq!(controller.toggle_menu(&mut fx.doc), Some(MenuState::Open));
    let el = fx.doc.element(toggle).unwrap();
    assert_eq!(el.text(), "✕");
    assert_eq!(el.attribute("aria-label"), Some("close menu"));
    assert_eq!(el.attribute("aria-expanded"), Some("true"));
    assert!(fx
        .doc
        .element(els(&fx.doc).menu)
        .unwrap()
        .has_class(selectors::ACTIVE));

    assert_eq!(controller.toggle_menu(&mut fx.doc), Some(MenuState::Closed));
    assert_eq!(fx.doc.element(toggle).unwrap().text(), "☰");
}

#[test]
fn labels_follow_configured_language() {
    let mut fx = nav_fixture(320);
    let config = NavConfig {
        language: Language::RuRu,
        ..NavConfig::default()
    };
    let _controller = ResponsiveNavigationController::attach(config, &mut fx.doc);
    let toggle = els(&fx.doc).toggle;
    assert_eq!(
        fx.doc.element(toggle).unwrap().attribute("aria-label"),
        Some(Language::RuRu.texts().nav.open_menu)
    );
}

#[test]
fn toggle_is_a_no_op_on_desktop() {
    let (mut fx, mut controller) = attach(1024);
    assert_eq!(controller.toggle_menu(&mut fx.doc), None);
    assert_eq!(ResponsiveNavigationController::menu_state(&fx.doc), None);
}

#[test]
fn clicking_the_toggle_opens_and_closes() {
    let (mut fx, mut controller) = attach(320);
    let toggle = els(&fx.doc).toggle;
    let now = Instant::now();

    assert_eq!(
        controller.dispatch(&mut fx.doc, click(toggle), now),
        Reaction::Handled
    );
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Open)
    );
    assert_eq!(
        controller.dispatch(&mut fx.doc, click(toggle), now),
        Reaction::Handled
    );
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Closed)
    );
}

#[test]
fn clicking_outside_closes_the_menu() {
    let (mut fx, mut controller) = attach(320);
    open_menu(&mut fx, &mut controller);

    assert_eq!(
        controller.dispatch(&mut fx.doc, click(fx.outside), Instant::now()),
        Reaction::Handled
    );
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Closed)
    );

    // 已关闭时不再拦截
    assert_eq!(
        controller.dispatch(&mut fx.doc, click(fx.outside), Instant::now()),
        Reaction::Ignored
    );
}

#[test]
fn clicking_inside_nav_keeps_menu_open() {
    let (mut fx, mut controller) = attach(320);
    open_menu(&mut fx, &mut controller);

    assert_eq!(
        controller.dispatch(&mut fx.doc, click(fx.greeting), Instant::now()),
        Reaction::Ignored
    );
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Open)
    );
}

#[test]
fn clicking_a_link_closes_and_follows() {
    let (mut fx, mut controller) = attach(320);
    open_menu(&mut fx, &mut controller);

    let reaction = controller.dispatch(&mut fx.doc, click(fx.links[1]), Instant::now());
    assert_eq!(
        reaction,
        Reaction::FollowLink {
            href: "/dictionary/".to_string()
        }
    );
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Closed)
    );

    // 桌面模式下链接同样跳转
    let (mut fx, mut controller) = attach(1024);
    assert_eq!(
        controller.dispatch(&mut fx.doc, click(fx.outside_link), Instant::now()),
        Reaction::FollowLink {
            href: "/games/".to_string()
        }
    );
}

#[test]
fn escape_closes_an_open_menu() {
    let (mut fx, mut controller) = attach(320);
    assert_eq!(
        controller.dispatch(&mut fx.doc, key(Key::Escape, false), Instant::now()),
        Reaction::Ignored
    );

    open_menu(&mut fx, &mut controller);
    assert_eq!(
        controller.dispatch(&mut fx.doc, key(Key::Escape, false), Instant::now()),
        Reaction::Handled
    );
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Closed)
    );
}

#[test]
fn close_menu_is_idempotent() {
    let (mut fx, mut controller) = attach(320);
    open_menu(&mut fx, &mut controller);
    assert!(controller.close_menu(&mut fx.doc));
    assert!(!controller.close_menu(&mut fx.doc));
    let toggle = els(&fx.doc).toggle;
    assert_eq!(fx.doc.element(toggle).unwrap().text(), "☰");
}

// ===== 焦点循环 =====

#[test]
fn tab_wraps_focus_inside_open_menu() {
    let (mut fx, mut controller) = attach(320);
    open_menu(&mut fx, &mut controller);
    let first = fx.links[0];
    let last = fx.login;

    assert!(fx.doc.focus(last));
    assert_eq!(
        controller.dispatch(&mut fx.doc, key(Key::Tab, false), Instant::now()),
        Reaction::Handled
    );
    assert_eq!(fx.doc.active_element(), Some(first));

    assert_eq!(
        controller.dispatch(&mut fx.doc, key(Key::Tab, true), Instant::now()),
        Reaction::Handled
    );
    assert_eq!(fx.doc.active_element(), Some(last));

    // 中间元素交给宿主的默认 Tab 行为
    assert!(fx.doc.focus(fx.links[1]));
    assert_eq!(
        controller.dispatch(&mut fx.doc, key(Key::Tab, false), Instant::now()),
        Reaction::Ignored
    );
    // 焦点循环不关闭菜单
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Open)
    );
}

#[test]
fn tab_is_ignored_when_menu_closed() {
    let (mut fx, mut controller) = attach(320);
    assert!(fx.doc.focus(fx.login));
    assert_eq!(
        controller.dispatch(&mut fx.doc, key(Key::Tab, false), Instant::now()),
        Reaction::Ignored
    );
    assert_eq!(fx.doc.active_element(), Some(fx.login));
}

// ===== 触摸 =====

fn swipe(
    fx: &mut NavFixture,
    controller: &mut ResponsiveNavigationController,
    dx: f64,
    dy: f64,
) -> Reaction {
    let now = Instant::now();
    let start = Point::new(200.0, 300.0);
    controller.dispatch(
        &mut fx.doc,
        NavEvent::TouchStart {
            point: start,
            target: Some(fx.outside),
        },
        now,
    );
    controller.dispatch(
        &mut fx.doc,
        NavEvent::TouchEnd {
            point: Point::new(start.x + dx, start.y + dy),
            target: Some(fx.outside),
        },
        now,
    )
}

#[test]
fn left_swipe_closes_open_menu() {
    let (mut fx, mut controller) = attach(320);
    open_menu(&mut fx, &mut controller);
    assert_eq!(swipe(&mut fx, &mut controller, -60.0, 10.0), Reaction::Handled);
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Closed)
    );
}

#[test]
fn diagonal_or_short_swipe_is_ignored() {
    let (mut fx, mut controller) = attach(320);
    open_menu(&mut fx, &mut controller);

    assert_eq!(swipe(&mut fx, &mut controller, -60.0, 80.0), Reaction::Ignored);
    assert_eq!(swipe(&mut fx, &mut controller, -30.0, 0.0), Reaction::Ignored);
    assert_eq!(swipe(&mut fx, &mut controller, 90.0, 0.0), Reaction::Ignored);
    assert_eq!(
        ResponsiveNavigationController::menu_state(&fx.doc),
        Some(MenuState::Open)
    );
}

#[test]
fn touch_gives_press_feedback_until_release() {
    let (mut fx, mut controller) = attach(1024);
    let now = Instant::now();
    controller.dispatch(
        &mut fx.doc,
        NavEvent::TouchStart {
            point: Point::default(),
            target: Some(fx.login),
        },
        now,
    );
    assert_eq!(
        fx.doc.element(fx.login).unwrap().style("transform"),
        Some("scale(0.98)")
    );

    controller.dispatch(
        &mut fx.doc,
        NavEvent::TouchEnd {
            point: Point::default(),
            target: Some(fx.login),
        },
        now,
    );
    assert_eq!(fx.doc.element(fx.login).unwrap().style("transform"), None);

    // 普通段落没有按压反馈
    controller.dispatch(
        &mut fx.doc,
        NavEvent::TouchStart {
            point: Point::default(),
            target: Some(fx.outside),
        },
        now,
    );
    assert_eq!(fx.doc.element(fx.outside).unwrap().style("transform"), None);
}

// ===== 滚动阴影 =====

#[test]
fn scroll_shadow_is_applied_once_per_frame() {
    let (mut fx, mut controller) = attach(1024);
    let now = Instant::now();

    for offset in [5.0, 12.0, 40.0] {
        controller.dispatch(&mut fx.doc, NavEvent::Scroll { offset }, now);
    }
    assert!(controller.wants_animation_frame());
    assert_eq!(fx.doc.element(fx.header).unwrap().style("box-shadow"), None);

    assert_eq!(
        controller.dispatch(&mut fx.doc, NavEvent::AnimationFrame, now),
        Reaction::Handled
    );
    assert_eq!(
        fx.doc.element(fx.header).unwrap().style("box-shadow"),
        Some(selectors::HEADER_SHADOW)
    );
    assert_eq!(
        controller.dispatch(&mut fx.doc, NavEvent::AnimationFrame, now),
        Reaction::Ignored
    );

    controller.dispatch(&mut fx.doc, NavEvent::Scroll { offset: 10.0 }, now);
    controller.dispatch(&mut fx.doc, NavEvent::AnimationFrame, now);
    assert_eq!(
        fx.doc.element(fx.header).unwrap().style("box-shadow"),
        Some("none")
    );
}

// ===== 拆除 =====

#[test]
fn detach_restores_desktop_and_cancels_debounce() {
    let (mut fx, mut controller) = attach(320);
    let t0 = Instant::now();
    controller.dispatch(&mut fx.doc, NavEvent::Resize { width: 300 }, t0);
    assert!(controller.next_deadline().is_some());

    controller.detach(&mut fx.doc);
    assert_eq!(ResponsiveNavigationController::mode(&fx.doc), LayoutMode::Desktop);
    assert_eq!(entry_order(&fx, fx.nav).len(), 5);
}

#[test]
fn controllers_drive_independent_documents() {
    let (mut narrow, mut a) = attach(320);
    let (wide, _b) = attach(1024);

    a.toggle_menu(&mut narrow.doc);
    assert_eq!(
        ResponsiveNavigationController::menu_state(&narrow.doc),
        Some(MenuState::Open)
    );
    assert_eq!(ResponsiveNavigationController::menu_state(&wide.doc), None);
    assert_eq!(
        ResponsiveNavigationController::mode(&wide.doc),
        LayoutMode::Desktop
    );
}
