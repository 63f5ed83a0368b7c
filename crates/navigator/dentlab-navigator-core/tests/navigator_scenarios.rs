use std::collections::BTreeSet;

use approx::assert_abs_diff_eq;
use dentlab_navigator_core::{
    ClickOutcome, Direction, ElementRef, Gesture, InputEvent, LinkId, NavEvent, NavLink,
    NavSurface, NavigatorConfig, Property, SectionNavigator, Transition,
};

fn navigator() -> SectionNavigator {
    SectionNavigator::new(NavigatorConfig::default()).expect("default config is valid")
}

/// Run frames until the in-flight transition settles.
fn settle(nav: &mut SectionNavigator) {
    for _ in 0..200 {
        nav.update(1.0 / 60.0);
        if !nav.is_animating() {
            return;
        }
    }
    panic!("transition never settled");
}

fn active(nav: &SectionNavigator) -> BTreeSet<LinkId> {
    nav.highlight().iter().collect()
}

#[derive(Default)]
struct FakeNavBar {
    active: BTreeSet<LinkId>,
}

impl NavSurface for FakeNavBar {
    fn clear_active(&mut self) {
        self.active.clear();
    }
    fn set_active(&mut self, link: &NavLink) {
        self.active.insert(link.id);
    }
}

#[test]
fn resolve_matches_euclidean_modulo() {
    let nav = navigator();
    let n = nav.section_count() as i64;
    for k in -40i64..40 {
        assert_eq!(nav.resolve(k) as i64, ((k % n) + n) % n, "k = {k}");
    }
    assert_eq!(nav.resolve(i64::MIN) as i64, i64::MIN.rem_euclid(n));
}

#[test]
fn requests_during_transition_are_dropped() {
    let mut nav = navigator();
    nav.start();
    assert!(nav.is_animating());

    let dropped = nav.go_to_section(4, Direction::Forward);
    assert_eq!(dropped, Transition::Dropped);
    assert_eq!(nav.current_index(), Some(0));

    let out = nav.update(0.1);
    let started = out
        .events
        .iter()
        .filter(|e| matches!(e, NavEvent::TransitionStarted { .. }))
        .count();
    assert_eq!(started, 1);
    assert!(out
        .events
        .contains(&NavEvent::RequestDropped { requested: 4 }));
    assert_eq!(
        out.last_value(ElementRef::section(4), Property::AutoAlpha),
        None
    );
}

#[test]
fn index_updates_before_timeline_completes() {
    let mut nav = navigator();
    nav.start();
    settle(&mut nav);

    let t = nav.go_to_section(-3, Direction::Backward);
    assert_eq!(
        t,
        Transition::Started {
            from: Some(0),
            to: 6,
            direction: Direction::Backward
        }
    );
    assert_eq!(nav.current_index(), Some(6));
    assert!(nav.is_animating());
    assert_eq!(active(&nav), BTreeSet::from([LinkId(0), LinkId(6)]));
}

#[test]
fn highlight_matches_table_for_every_section() {
    let expected: [&[u32]; 9] = [
        &[],
        &[0],
        &[1],
        &[2],
        &[2],
        &[0, 5],
        &[0, 6],
        &[4],
        &[0, 7],
    ];
    let mut nav = navigator();
    for (section, links) in expected.iter().enumerate() {
        if nav.is_animating() {
            settle(&mut nav);
        }
        nav.go_to_section(section as i64, Direction::Forward);
        let want: BTreeSet<LinkId> = links.iter().map(|&id| LinkId(id)).collect();
        assert_eq!(active(&nav), want, "section {section}");

        let mut bar = FakeNavBar::default();
        nav.sync_highlight(&mut bar);
        assert_eq!(bar.active, want, "surface for section {section}");
    }
}

#[test]
fn highlight_sync_is_idempotent() {
    let mut nav = navigator();
    nav.go_to_section(5, Direction::Forward);
    let mut once = FakeNavBar::default();
    let first = nav.sync_highlight(&mut once);
    let mut twice = FakeNavBar::default();
    nav.sync_highlight(&mut twice);
    let second = nav.sync_highlight(&mut twice);
    assert_eq!(first, second);
    assert_eq!(once.active, twice.active);
}

#[test]
fn start_then_scroll_down_enters_section_one() {
    let mut nav = navigator();
    assert_eq!(nav.current_index(), None);

    nav.start();
    assert_eq!(nav.current_index(), Some(0));
    assert!(nav.highlight().is_empty());
    settle(&mut nav);
    assert_eq!(nav.value_of(ElementRef::section(0), Property::AutoAlpha), 1.0);
    assert_eq!(nav.value_of(ElementRef::content(0), Property::AutoAlpha), 1.0);

    let recognized = nav.handle_input(&InputEvent::Wheel { delta_y: 60.0 });
    assert_eq!(recognized.gesture, Some(Gesture::Up));
    assert!(recognized.prevent_default);
    assert_eq!(nav.current_index(), Some(1));
    assert_eq!(active(&nav), BTreeSet::from([LinkId(0)]));

    settle(&mut nav);
    assert_eq!(nav.value_of(ElementRef::section(1), Property::AutoAlpha), 1.0);
    assert_eq!(nav.value_of(ElementRef::section(0), Property::AutoAlpha), 0.0);
    assert_eq!(nav.value_of(ElementRef::section(1), Property::ZIndex), 1.0);
    assert_eq!(nav.value_of(ElementRef::section(0), Property::ZIndex), 0.0);
    assert_eq!(nav.value_of(ElementRef::background(0), Property::YPercent), -15.0);
}

#[test]
fn submenu_click_marks_entry_and_parent_only() {
    let mut nav = navigator();
    nav.start();
    settle(&mut nav);
    nav.on_gesture(Gesture::Up);
    settle(&mut nav);
    assert_eq!(nav.current_index(), Some(1));

    let outcome = nav.click_link(Some("#innovation"), None);
    assert_eq!(
        outcome,
        ClickOutcome::Navigated {
            transition: Transition::Started {
                from: Some(1),
                to: 5,
                direction: Direction::Forward
            }
        }
    );
    let mut bar = FakeNavBar::default();
    nav.sync_highlight(&mut bar);
    assert_eq!(bar.active, BTreeSet::from([LinkId(0), LinkId(5)]));
}

#[test]
fn click_direction_follows_target_order() {
    let mut nav = navigator();
    nav.go_to_section(7, Direction::Forward);
    settle(&mut nav);
    match nav.click_link(Some("#services"), None) {
        ClickOutcome::Navigated {
            transition: Transition::Started { direction, .. },
        } => assert_eq!(direction, Direction::Backward),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn click_falls_back_to_position_and_opens_modals() {
    let mut nav = navigator();
    nav.start();
    settle(&mut nav);

    let outcome = nav.click_link(Some("#nowhere"), Some(3));
    assert_eq!(
        outcome,
        ClickOutcome::OpenModal {
            modal: "chinaFactory".into()
        }
    );
    assert_eq!(nav.current_index(), Some(0));
    assert!(!nav.is_animating());

    assert_eq!(nav.click_link(None, Some(42)), ClickOutcome::Ignored);
    assert_eq!(nav.click_link(None, None), ClickOutcome::Ignored);

    let outcome = nav.click_link(None, Some(4));
    assert!(matches!(
        outcome,
        ClickOutcome::Navigated {
            transition: Transition::Started { to: 7, .. }
        }
    ));
}

#[test]
fn click_while_animating_is_dropped() {
    let mut nav = navigator();
    nav.start();
    let outcome = nav.click_link(Some("#contact"), None);
    assert_eq!(
        outcome,
        ClickOutcome::Navigated {
            transition: Transition::Dropped
        }
    );
    assert_eq!(nav.current_index(), Some(0));
}

#[test]
fn entry_timeline_samples_eased_offsets() {
    let mut nav = navigator();
    nav.start();
    settle(&mut nav);
    nav.go_to_section(2, Direction::Forward);

    // immediate render of start values
    let out = nav.update(0.0);
    assert_eq!(out.last_value(ElementRef::outer(2), Property::YPercent), Some(100.0));
    assert_eq!(out.last_value(ElementRef::inner(2), Property::YPercent), Some(-100.0));
    assert_eq!(out.last_value(ElementRef::background(2), Property::YPercent), Some(15.0));
    assert_eq!(out.last_value(ElementRef::content(2), Property::AutoAlpha), Some(0.0));

    // halfway through power1.inOut
    let out = nav.update(0.625);
    let outer = out.last_value(ElementRef::outer(2), Property::YPercent).unwrap();
    assert_abs_diff_eq!(outer, 50.0, epsilon = 1e-3);
    let bg_prev = out
        .last_value(ElementRef::background(0), Property::YPercent)
        .unwrap();
    assert_abs_diff_eq!(bg_prev, -7.5, epsilon = 1e-3);
    assert!(nav.is_animating());

    let out = nav.update(0.625);
    assert_eq!(out.last_value(ElementRef::outer(2), Property::YPercent), Some(0.0));
    assert_eq!(out.last_value(ElementRef::section(0), Property::AutoAlpha), Some(0.0));
    assert!(out
        .events
        .contains(&NavEvent::TransitionCompleted { index: 2 }));
    assert!(!nav.is_animating());
}

#[test]
fn backward_transition_mirrors_offsets() {
    let mut nav = navigator();
    nav.start();
    settle(&mut nav);
    nav.on_gesture(Gesture::Down);
    assert_eq!(nav.current_index(), Some(8));
    let out = nav.update(0.0);
    assert_eq!(out.last_value(ElementRef::outer(8), Property::YPercent), Some(-100.0));
    assert_eq!(out.last_value(ElementRef::inner(8), Property::YPercent), Some(100.0));
    assert_eq!(out.last_value(ElementRef::content(8), Property::YPercent), Some(-100.0));
    settle(&mut nav);
    assert_eq!(nav.value_of(ElementRef::background(0), Property::YPercent), 15.0);
}
