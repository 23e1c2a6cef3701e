//! Drag-to-dismiss behaviour end to end: press, move, release.

use drawer_core::{Translate, TransitionProperty};
use drawer_foundation::elastic_offset;
use drawer_testing::{init_test_logging, DrawerRobot};
use drawer_ui::{DrawerEvent, Phase, PointerInput};

fn open_robot() -> DrawerRobot {
    init_test_logging();
    let robot = DrawerRobot::new();
    robot.open_and_settle();
    robot
}

fn container_transition(robot: &DrawerRobot) -> Option<TransitionProperty> {
    robot
        .dom()
        .style(robot.fixture().container)
        .transition
        .flatten()
        .map(|transition| transition.property)
}

#[test]
fn sheet_follows_downward_drag_one_to_one() {
    let robot = open_robot();
    robot.press(500.0, 0.0);
    assert_eq!(container_transition(&robot), None);

    robot.move_to(650.0, 16.0);
    assert_eq!(robot.container_translate(), Some(Translate::Px(150.0)));
    assert!(robot.drawer().is_dragging());
}

#[test]
fn slow_release_near_the_top_snaps_back() {
    let robot = open_robot();
    robot.press(500.0, 0.0);
    robot.move_to(520.0, 100.0);
    assert!((robot.drawer().velocity() - -0.2).abs() < 1e-6);

    robot.release(150.0);
    assert_eq!(robot.phase(), Phase::Open);
    assert_eq!(robot.container_translate(), Some(Translate::REST));
    assert_eq!(container_transition(&robot), Some(TransitionProperty::Transform));
    assert!(!robot.drawer().is_dragging());
}

#[test]
fn fast_flick_dismisses_from_anywhere() {
    let robot = open_robot();
    robot.press(500.0, 0.0);
    robot.move_to(520.0, 10.0);
    robot.move_to(560.0, 20.0);
    robot.release(25.0);

    assert_eq!(robot.phase(), Phase::Closing);
    assert_eq!(robot.container_translate(), Some(Translate::OffScreen));
    assert_eq!(container_transition(&robot), Some(TransitionProperty::Transform));
    assert_eq!(robot.drawer().velocity(), 0.0);

    robot.advance(400);
    assert_eq!(robot.phase(), Phase::Closed);
}

#[test]
fn commit_velocity_is_inclusive() {
    let robot = open_robot();
    robot.press(500.0, 0.0);
    robot.move_to(550.0, 100.0);
    robot.release(100.0);
    assert_eq!(robot.phase(), Phase::Closing);
}

#[test]
fn slow_drag_past_half_the_viewport_dismisses_after_unmount_delay() {
    let robot = open_robot();
    // 500px in 2s: 0.25 px/ms, well under the flick threshold.
    robot.drag(200.0, 700.0, 0.0, 2_000.0, 10);

    assert_eq!(robot.phase(), Phase::Closing);
    assert!(robot.root_visible());
    robot.advance(399);
    assert!(robot.root_visible());
    robot.advance(1);
    assert!(!robot.root_visible());
}

#[test]
fn release_exactly_at_half_snaps_back() {
    let robot = open_robot();
    // Container rests at 100px; 400px down puts its top at 500 = half of 1000.
    robot.drag(200.0, 600.0, 0.0, 4_000.0, 20);
    assert_eq!(robot.phase(), Phase::Open);
    assert_eq!(robot.container_translate(), Some(Translate::REST));
}

#[test]
fn upward_drag_is_elastic_and_snaps_back() {
    let robot = open_robot();
    robot.press(500.0, 0.0);
    robot.move_to(400.0, 16.0);

    let Some(Translate::Px(offset)) = robot.container_translate() else {
        panic!("expected a pixel translation");
    };
    assert!((offset - elastic_offset(100.0)).abs() < 1e-4);
    assert!(offset.abs() < 100.0);

    // A fast upward flick never dismisses.
    robot.move_to(300.0, 20.0);
    robot.release(21.0);
    assert_eq!(robot.phase(), Phase::Open);
    assert_eq!(robot.container_translate(), Some(Translate::REST));
}

#[test]
fn pointer_input_is_ignored_unless_open() {
    init_test_logging();
    let robot = DrawerRobot::new();
    robot.press(500.0, 0.0);
    robot.move_to(650.0, 16.0);
    robot.release(20.0);
    assert_eq!(robot.phase(), Phase::Closed);
    assert_eq!(robot.container_translate(), Some(Translate::OffScreen));

    robot.click_trigger();
    robot.press(500.0, 0.0);
    assert!(!robot.drawer().is_dragging());
}

#[test]
fn stray_release_does_nothing() {
    let robot = open_robot();
    robot.dom().take_writes();
    robot.release(0.0);
    assert!(robot.dom().take_writes().is_empty());
    assert_eq!(robot.phase(), Phase::Open);
}

#[test]
fn backdrop_close_discards_the_gesture() {
    let robot = open_robot();
    robot.press(500.0, 0.0);
    robot.move_to(600.0, 10.0);
    assert!(robot.drawer().velocity() < 0.0);

    robot.click_backdrop();
    assert_eq!(robot.drawer().velocity(), 0.0);
    assert!(!robot.drawer().is_dragging());

    robot.release(20.0);
    assert_eq!(robot.phase(), Phase::Closing);
    assert_eq!(robot.scheduler().pending_delays(), vec![400]);
}

#[test]
fn touch_without_points_is_tolerated() {
    let robot = open_robot();
    robot
        .drawer()
        .handle(DrawerEvent::PointerDown(PointerInput::without_position(0.0)));
    assert!(!robot.drawer().is_dragging());

    robot.press(500.0, 0.0);
    robot
        .drawer()
        .handle(DrawerEvent::PointerMove(PointerInput::without_position(10.0)));
    assert_eq!(robot.container_translate(), Some(Translate::REST));
    assert_eq!(robot.drawer().velocity(), 0.0);

    robot.release(20.0);
    assert_eq!(robot.phase(), Phase::Open);
}
