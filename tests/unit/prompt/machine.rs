use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::foundation::core::Rect;
use crate::host::frame::ShapeGeometry;
use crate::host::ports::{HostEnv, MeasuredText, TargetResolver, TextMeasurer};
use crate::prompt::options::PromptBuilder;

struct MonoMeasurer;

impl TextMeasurer for MonoMeasurer {
    fn measure(&self, text: &str, font_size: f64, max_width: f64) -> MeasuredText {
        let natural = text.chars().count() as f64 * font_size * 0.5;
        let lines = (natural / max_width).ceil().max(1.0);
        MeasuredText {
            width: natural.min(max_width),
            height: lines * font_size * 1.25,
        }
    }
}

fn env() -> HostEnv {
    HostEnv {
        measurer: Box::new(MonoMeasurer),
        clip: Box::new(Rect::new(0.0, 0.0, 1080.0, 1920.0)),
        parent_bounds: Rect::new(0.0, 0.0, 1080.0, 1920.0),
    }
}

fn builder_at(x: f64, y: f64) -> PromptBuilder {
    PromptBuilder::new(env())
        .target_point(x, y)
        .primary_text("Primary text")
}

fn prompt_at(x: f64, y: f64) -> Prompt {
    builder_at(x, y).build().expect("valid prompt")
}

fn record(prompt: &mut Prompt) -> Rc<RefCell<Vec<PromptState>>> {
    let states = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&states);
    prompt.subscribe(move |s| sink.borrow_mut().push(s));
    states
}

#[test]
fn reveal_then_focal_press_runs_the_finish_path() {
    let mut p = prompt_at(10.0, 10.0);
    let states = record(&mut p);

    p.show();
    assert_eq!(p.state(), PromptState::Revealing);
    p.tick(0.3); // past the 0.225s reveal
    assert_eq!(p.state(), PromptState::Revealed);

    p.pointer_press(Point::new(10.0, 10.0));
    p.tick(0.3); // past the 0.2s exit
    assert_eq!(p.state(), PromptState::Finished);
    assert_eq!(
        states.borrow().as_slice(),
        [
            PromptState::Revealing,
            PromptState::Revealed,
            PromptState::FocalPressed,
            PromptState::Finishing,
            PromptState::Finished,
        ]
    );
}

#[test]
fn show_is_idempotent_while_starting() {
    let mut p = prompt_at(100.0, 100.0);
    let states = record(&mut p);
    p.show();
    p.show();
    assert_eq!(states.borrow().as_slice(), [PromptState::Revealing]);
    p.tick(0.3);
    p.show();
    assert_eq!(
        states.borrow().as_slice(),
        [PromptState::Revealing, PromptState::Revealed]
    );
}

#[test]
fn show_restarts_from_a_terminal_state() {
    let mut p = prompt_at(100.0, 100.0);
    p.show();
    p.tick(0.3);
    p.finish();
    p.tick(0.3);
    assert_eq!(p.state(), PromptState::Finished);

    p.show();
    assert_eq!(p.state(), PromptState::Revealing);
    p.tick(0.3);
    assert_eq!(p.state(), PromptState::Revealed);
}

#[test]
fn exit_calls_are_idempotent_once_exiting() {
    let mut p = prompt_at(100.0, 100.0);
    let states = record(&mut p);
    p.show();
    p.tick(0.3);
    p.dismiss();
    p.dismiss();
    p.finish(); // also ignored while dismissing
    p.tick(0.3);
    p.dismiss(); // terminal no-op
    assert_eq!(
        states.borrow().as_slice(),
        [
            PromptState::Revealing,
            PromptState::Revealed,
            PromptState::Dismissing,
            PromptState::Dismissed,
        ]
    );
}

#[test]
fn starting_an_exit_discards_the_in_flight_reveal() {
    let mut p = prompt_at(100.0, 100.0);
    let states = record(&mut p);
    p.show();
    p.tick(0.1); // mid-reveal
    p.dismiss();
    p.tick(0.3);
    // The reveal's completion side effect never fired.
    assert_eq!(
        states.borrow().as_slice(),
        [
            PromptState::Revealing,
            PromptState::Dismissing,
            PromptState::Dismissed,
        ]
    );
}

#[test]
fn timeout_dismisses_an_untouched_prompt() {
    let mut p = prompt_at(100.0, 100.0);
    let states = record(&mut p);
    p.show_for(1.0);
    p.tick(0.3);
    assert_eq!(p.state(), PromptState::Revealed);
    p.tick(0.5);
    assert_eq!(p.state(), PromptState::Revealed);
    p.tick(0.3); // deadline passes; the dismiss also completes this tick
    assert_eq!(p.state(), PromptState::Dismissed);
    assert_eq!(
        states.borrow().as_slice(),
        [
            PromptState::Revealing,
            PromptState::Revealed,
            PromptState::ShowForTimeout,
            PromptState::Dismissing,
            PromptState::Dismissed,
        ]
    );
}

#[test]
fn cancelled_timeout_leaves_the_prompt_revealed() {
    let mut p = prompt_at(100.0, 100.0);
    p.show_for(0.5);
    p.tick(0.3);
    p.cancel_show_for_timer();
    p.tick(10.0);
    assert_eq!(p.state(), PromptState::Revealed);
    // Cancelling after the fact is a safe no-op.
    p.cancel_show_for_timer();
    assert_eq!(p.state(), PromptState::Revealed);
}

#[test]
fn non_focal_press_runs_the_dismiss_path() {
    let mut p = prompt_at(100.0, 100.0);
    let states = record(&mut p);
    p.show();
    p.tick(0.3);
    p.pointer_press(Point::new(900.0, 1500.0));
    assert_eq!(
        states.borrow().as_slice(),
        [
            PromptState::Revealing,
            PromptState::Revealed,
            PromptState::NonFocalPressed,
            PromptState::Dismissing,
        ]
    );
}

#[test]
fn presses_are_ignored_unless_revealed() {
    let mut p = prompt_at(100.0, 100.0);
    p.show();
    assert!(!p.pointer_press(Point::new(100.0, 100.0)));
    assert_eq!(p.state(), PromptState::Revealing);
}

#[test]
fn focal_press_without_auto_finish_holds_state() {
    let mut p = builder_at(100.0, 100.0)
        .auto_finish(false)
        .build()
        .expect("valid prompt");
    p.show();
    p.tick(0.3);
    p.pointer_press(Point::new(100.0, 100.0));
    assert_eq!(p.state(), PromptState::FocalPressed);
    p.tick(0.3);
    assert_eq!(p.state(), PromptState::FocalPressed);
}

#[test]
fn capture_flags_decide_press_consumption() {
    let style = PromptStyle {
        primary_text: Some("Primary text".into()),
        capture_touch_on_focal: true,
        capture_touch_outside_prompt: false,
        ..PromptStyle::default()
    };
    let mut p = PromptBuilder::new(env())
        .style(style)
        .target_point(100.0, 100.0)
        .build()
        .expect("valid prompt");
    p.show();
    p.tick(0.3);
    assert!(!p.pointer_press(Point::new(900.0, 1500.0)));
    p.show();
    p.tick(0.3);
    assert!(p.pointer_press(Point::new(100.0, 100.0)));
}

#[test]
fn back_press_dismisses_when_enabled() {
    let mut p = prompt_at(100.0, 100.0);
    let states = record(&mut p);
    p.show();
    p.tick(0.3);
    assert!(p.back_pressed());
    assert_eq!(
        states.borrow().as_slice(),
        [
            PromptState::Revealing,
            PromptState::Revealed,
            PromptState::BackButtonPressed,
            PromptState::Dismissing,
        ]
    );
    assert!(!p.back_pressed()); // already dismissing
}

#[test]
fn reveal_defers_until_the_target_resolves() {
    #[derive(Clone)]
    struct LateTarget(Rc<Cell<Option<Rect>>>);
    impl TargetResolver for LateTarget {
        fn resolve(&self) -> Option<Rect> {
            self.0.get()
        }
    }

    let slot = Rc::new(Cell::new(None));
    let mut p = PromptBuilder::new(env())
        .target(LateTarget(Rc::clone(&slot)))
        .primary_text("Primary text")
        .build()
        .expect("valid prompt");

    p.show();
    assert_eq!(p.state(), PromptState::NotShown);
    assert!(p.tick(0.016).is_none());

    slot.set(Some(Rect::new(500.0, 500.0, 560.0, 560.0)));
    p.show();
    assert_eq!(p.state(), PromptState::Revealing);
}

#[test]
fn idle_breathing_scales_the_focal_and_fires_the_ripple() {
    let mut p = prompt_at(200.0, 200.0);
    p.show();
    p.tick(0.3); // Revealed; idle timelines start

    // Rising leg of the breathing wave: focal grows past its base radius,
    // no ripple yet.
    let frame = p.tick(0.5).expect("frame");
    match frame.focal {
        ShapeGeometry::Circle { radius, .. } => assert!(radius > 44.0),
        other => panic!("expected circle focal, got {other:?}"),
    }
    assert!(frame.ripple.is_none());

    // Cross the peak at 1.0s of idle time; the ripple (re)starts.
    let frame = p.tick(0.3).expect("frame");
    assert!(frame.ripple.is_some());

    // The one-shot ripple expands and fades back out while the wave descends.
    p.tick(0.3);
    let frame = p.tick(0.3).expect("frame");
    assert!(frame.ripple.is_none());
}

#[test]
fn disabled_idle_animation_keeps_the_focal_still() {
    let mut p = builder_at(200.0, 200.0)
        .idle_animation(false)
        .build()
        .expect("valid prompt");
    p.show();
    p.tick(0.3);
    let frame = p.tick(1.2).expect("frame");
    match frame.focal {
        ShapeGeometry::Circle { radius, .. } => assert_eq!(radius, 44.0),
        other => panic!("expected circle focal, got {other:?}"),
    }
    assert!(frame.ripple.is_none());
}

#[test]
fn frames_only_exist_while_visible() {
    let mut p = prompt_at(100.0, 100.0);
    assert!(p.tick(0.016).is_none());
    p.show();
    assert!(p.tick(0.016).is_some());
    p.finish();
    p.tick(0.3);
    assert_eq!(p.state(), PromptState::Finished);
    assert!(p.tick(0.016).is_none());
}

#[test]
fn non_focal_press_on_the_background_is_consumed() {
    let mut p = prompt_at(100.0, 100.0);
    p.show();
    p.tick(0.3);
    // Inside the background circle but outside the focal: the prompt owns
    // the press even with capture-outside disabled.
    assert!(p.pointer_press(Point::new(100.0, 260.0)));

    let mut p = prompt_at(100.0, 100.0);
    p.show();
    p.tick(0.3);
    // Beyond the background entirely.
    assert!(!p.pointer_press(Point::new(900.0, 1500.0)));
}

#[test]
fn background_still_encloses_a_moved_target() {
    #[derive(Clone)]
    struct MovingTarget(Rc<Cell<Rect>>);
    impl TargetResolver for MovingTarget {
        fn resolve(&self) -> Option<Rect> {
            Some(self.0.get())
        }
    }

    let slot = Rc::new(Cell::new(Rect::new(100.0, 100.0, 160.0, 160.0)));
    let mut p = PromptBuilder::new(env())
        .target(MovingTarget(Rc::clone(&slot)))
        .primary_text("Primary text")
        .idle_animation(false)
        .build()
        .expect("valid prompt");
    p.show();
    p.tick(0.3); // revealed

    slot.set(Rect::new(800.0, 1500.0, 860.0, 1560.0));
    let frame = p.tick(0.016).expect("frame");
    let (bg_center, bg_radius) = match frame.background {
        ShapeGeometry::Circle { center, radius, .. } => (center, radius),
        other => panic!("expected circle background, got {other:?}"),
    };
    let (focal_center, focal_radius) = match frame.focal {
        ShapeGeometry::Circle { center, radius, .. } => (center, radius),
        other => panic!("expected circle focal, got {other:?}"),
    };
    // The redrawn background fully encloses the redrawn focal.
    assert_eq!(focal_center, Point::new(830.0, 1530.0));
    assert!(focal_radius > 44.0);
    assert!(bg_center.distance(focal_center) + focal_radius <= bg_radius + 1e-6);
}

#[test]
fn element_targets_are_reresolved_every_frame() {
    #[derive(Clone)]
    struct MovingTarget(Rc<Cell<Rect>>);
    impl TargetResolver for MovingTarget {
        fn resolve(&self) -> Option<Rect> {
            Some(self.0.get())
        }
    }

    let slot = Rc::new(Cell::new(Rect::new(100.0, 100.0, 160.0, 160.0)));
    let mut p = PromptBuilder::new(env())
        .target(MovingTarget(Rc::clone(&slot)))
        .primary_text("Primary text")
        .idle_animation(false)
        .build()
        .expect("valid prompt");
    p.show();
    p.tick(0.3);

    slot.set(Rect::new(600.0, 700.0, 660.0, 760.0));
    let frame = p.tick(0.016).expect("frame");
    match frame.focal {
        ShapeGeometry::Circle { center, .. } => {
            assert_eq!(center, Point::new(630.0, 730.0));
        }
        other => panic!("expected circle focal, got {other:?}"),
    }
    assert_eq!(frame.target_bounds, Some(Rect::new(600.0, 700.0, 660.0, 760.0)));
}
