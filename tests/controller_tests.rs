//! Controller behaviour driven through recording fakes of the overlay
//! surface and the run loop scheduler.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use cursor_trail::config::{AppConfig, ReassertPolicy};
use cursor_trail::controller::{
    OverlaySurface, Phase, ReassertOutcome, Scheduler, TrailController, TrailSession,
};
use cursor_trail::events::{AppEvent, EventBus, EventPublisher, Flow};
use cursor_trail::model::{ring_center, Point};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Show,
    Hide,
    Reposition(Point),
    OrderFront,
}

/// Overlay fake that records every call and tracks visibility.
#[derive(Default)]
struct FakeSurface {
    calls: Rc<RefCell<Vec<Call>>>,
    visible: bool,
    origin: Point,
}

impl OverlaySurface for FakeSurface {
    fn show(&mut self) {
        self.visible = true;
        self.calls.borrow_mut().push(Call::Show);
    }

    fn hide(&mut self) {
        self.visible = false;
        self.calls.borrow_mut().push(Call::Hide);
    }

    fn reposition(&mut self, origin: Point) {
        self.origin = origin;
        self.calls.borrow_mut().push(Call::Reposition(origin));
    }

    fn order_front(&mut self) {
        self.visible = true;
        self.calls.borrow_mut().push(Call::OrderFront);
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Scheduler fake: remembers requested delays, fires on demand.
#[derive(Default)]
struct FakeScheduler {
    scheduled: Vec<Duration>,
    cancelled: usize,
}

impl Scheduler for FakeScheduler {
    fn schedule_reassert(&mut self, delay: Duration) {
        self.scheduled.push(delay);
    }

    fn cancel_all(&mut self) {
        self.cancelled += 1;
    }
}

type Controller = TrailController<FakeSurface, FakeScheduler>;

fn launched(config: AppConfig) -> (Controller, Rc<RefCell<Vec<Call>>>) {
    let surface = FakeSurface::default();
    let calls = Rc::clone(&surface.calls);
    let mut controller = TrailController::new(config, surface, FakeScheduler::default());
    controller.launch();
    calls.borrow_mut().clear();
    (controller, calls)
}

fn count(calls: &Rc<RefCell<Vec<Call>>>, call: &Call) -> usize {
    calls.borrow().iter().filter(|c| *c == call).count()
}

// === Tracking ===

#[test]
fn launch_shows_the_overlay() {
    let mut controller = TrailController::new(
        AppConfig::default(),
        FakeSurface::default(),
        FakeScheduler::default(),
    );
    controller.launch();
    assert!(controller.surface().is_visible());
    assert!(controller.wants_visible());
    assert_eq!(controller.phase(), Phase::Running);
}

#[test]
fn pointer_move_scenario_sets_expected_origin() {
    let (mut controller, _) = launched(AppConfig::default());

    controller.track(Point::new(100.0, 100.0));
    assert_eq!(controller.surface().origin, Point::new(84.0, 84.0));

    controller.track(Point::new(500.0, 400.0));
    assert_eq!(controller.surface().origin, Point::new(484.0, 384.0));
}

#[test]
fn ring_is_centred_on_every_pointer_position() {
    let (mut controller, _) = launched(AppConfig::default());
    let diameter = controller.config().diameter;

    for &(x, y) in &[(0.0, 0.0), (-1440.0, 900.0), (1.5, 2.25), (5120.0, -300.0)] {
        let pointer = Point::new(x, y);
        controller.track(pointer);
        assert_eq!(ring_center(controller.surface().origin, diameter), pointer);
    }
}

#[test]
fn unchanged_pointer_does_not_resend_origin() {
    let (mut controller, calls) = launched(AppConfig::default());

    assert!(controller.track(Point::new(10.0, 10.0)).is_some());
    assert!(controller.track(Point::new(10.0, 10.0)).is_none());
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn screen_change_recentres_even_if_pointer_stayed_put() {
    let (mut controller, _) = launched(AppConfig::default());
    let pointer = Point::new(500.0, 400.0);

    controller.track(pointer);
    // The window server moved the panel during the display change.
    controller.surface_mut().origin = Point::new(0.0, 0.0);
    controller.screen_parameters_changed();

    assert_eq!(controller.track(pointer), Some(Point::new(484.0, 384.0)));
    assert_eq!(controller.surface().origin, Point::new(484.0, 384.0));
}

#[test]
fn reassertion_resends_origin_on_next_tick() {
    let (mut controller, calls) = launched(AppConfig::default());
    let pointer = Point::new(10.0, 10.0);

    controller.track(pointer);
    controller.reassert_front();
    controller.track(pointer);

    assert_eq!(count(&calls, &Call::Reposition(Point::new(-6.0, -6.0))), 2);
}

#[test]
fn skipped_reassertion_keeps_origin_cache() {
    let (mut controller, calls) = launched(AppConfig::default());
    let pointer = Point::new(10.0, 10.0);

    controller.toggle_trail();
    controller.track(pointer);
    assert_eq!(controller.reassert_front(), ReassertOutcome::SkippedHidden);
    assert!(controller.track(pointer).is_none());

    assert_eq!(count(&calls, &Call::Reposition(Point::new(-6.0, -6.0))), 1);
}

#[test]
fn tracking_continues_while_hidden() {
    let (mut controller, _) = launched(AppConfig::default());
    controller.toggle_trail();
    assert!(!controller.surface().is_visible());

    controller.track(Point::new(200.0, 300.0));
    assert_eq!(controller.surface().origin, Point::new(184.0, 284.0));
}

// === Toggle ===

#[test]
fn toggle_alternates_visibility() {
    let (mut controller, calls) = launched(AppConfig::default());

    assert!(!controller.toggle_trail());
    assert!(controller.toggle_trail());
    assert!(!controller.toggle_trail());
    assert!(controller.toggle_trail());

    assert_eq!(
        *calls.borrow(),
        vec![Call::Hide, Call::Show, Call::Hide, Call::Show]
    );
}

// === Reassertion ===

#[test]
fn screen_change_reasserts_once() {
    let (mut controller, calls) = launched(AppConfig::default());

    assert_eq!(
        controller.screen_parameters_changed(),
        ReassertOutcome::OrderedFront
    );
    assert_eq!(count(&calls, &Call::OrderFront), 1);
    assert!(controller.scheduler().scheduled.is_empty());
}

#[test]
fn space_switch_schedules_the_four_step_ladder() {
    let (mut controller, calls) = launched(AppConfig::default());

    controller.active_space_changed();

    let ms: Vec<u128> = controller
        .scheduler()
        .scheduled
        .iter()
        .map(Duration::as_millis)
        .collect();
    assert_eq!(ms, vec![50, 200, 400, 600]);
    // Nothing is reordered until the timers fire.
    assert!(calls.borrow().is_empty());
}

#[test]
fn ladder_is_scheduled_in_full_regardless_of_user_hide() {
    let (mut controller, _) = launched(AppConfig::default());

    controller.active_space_changed();
    controller.toggle_trail();

    assert_eq!(controller.scheduler().scheduled.len(), 4);
}

#[test]
fn each_space_switch_schedules_its_own_ladder() {
    let (mut controller, _) = launched(AppConfig::default());

    controller.active_space_changed();
    controller.active_space_changed();

    assert_eq!(controller.scheduler().scheduled.len(), 8);
}

#[test]
fn late_reassertion_respects_user_hide_by_default() {
    let (mut controller, calls) = launched(AppConfig::default());

    controller.active_space_changed();
    controller.toggle_trail();

    for _ in 0..controller.scheduler().scheduled.len() {
        assert_eq!(controller.reassert_front(), ReassertOutcome::SkippedHidden);
    }
    assert!(!controller.surface().is_visible());
    assert_eq!(count(&calls, &Call::OrderFront), 0);
}

#[test]
fn unconditional_policy_reshows_hidden_overlay() {
    let config = AppConfig {
        reassert_policy: ReassertPolicy::Unconditional,
        ..AppConfig::default()
    };
    let (mut controller, calls) = launched(config);

    controller.active_space_changed();
    controller.toggle_trail();
    assert!(!controller.surface().is_visible());

    assert_eq!(controller.reassert_front(), ReassertOutcome::OrderedFront);
    assert!(controller.surface().is_visible());
    assert!(controller.wants_visible());

    // A following toggle hides it again.
    assert!(!controller.toggle_trail());
    assert_eq!(count(&calls, &Call::OrderFront), 1);
}

#[test]
fn reassertions_while_visible_order_front_each_time() {
    let (mut controller, calls) = launched(AppConfig::default());

    controller.active_space_changed();
    let fired = controller.scheduler().scheduled.len();
    for _ in 0..fired {
        controller.reassert_front();
    }
    assert_eq!(count(&calls, &Call::OrderFront), 4);
}

// === Quit ===

#[test]
fn quit_terminates_and_stops_tracking() {
    let (mut controller, calls) = launched(AppConfig::default());

    assert_eq!(controller.quit(), Flow::Terminate);
    assert_eq!(controller.phase(), Phase::Terminated);
    assert_eq!(controller.scheduler().cancelled, 1);

    assert!(controller.track(Point::new(1.0, 1.0)).is_none());
    assert_eq!(
        controller.reassert_front(),
        ReassertOutcome::SkippedTerminated
    );
    controller.active_space_changed();
    assert!(controller.scheduler().scheduled.is_empty());
    assert!(calls.borrow().is_empty());
}

#[test]
fn shutdown_is_idempotent() {
    let (mut controller, _) = launched(AppConfig::default());
    controller.shutdown();
    controller.shutdown();
    assert_eq!(controller.scheduler().cancelled, 1);
}

// === Subscriptions ===

#[test]
fn default_subscriptions_cover_every_event() {
    let subs = Controller::subscriptions();
    for event in AppEvent::ALL {
        assert_eq!(subs.handler_count(event), 1, "{event:?}");
    }
}

#[test]
fn events_from_the_bus_drive_the_controller() {
    let (mut controller, calls) = launched(AppConfig::default());
    let mut subs = Controller::subscriptions();
    let bus = EventBus::new();
    let menu = bus.publisher();
    let observer = bus.publisher();

    observer.publish(AppEvent::ActiveSpaceChanged);
    menu.publish(AppEvent::ToggleTrail);
    observer.publish(AppEvent::ScreenParametersChanged);

    assert_eq!(subs.dispatch_all(bus.drain(), &mut controller), Flow::Continue);
    assert_eq!(controller.scheduler().scheduled.len(), 4);
    assert!(!controller.surface().is_visible());
    // Screen change after the hide is skipped.
    assert_eq!(*calls.borrow(), vec![Call::Hide]);
}

#[test]
fn quit_event_stops_the_batch() {
    let (mut controller, calls) = launched(AppConfig::default());
    let mut subs = Controller::subscriptions();

    let flow = subs.dispatch_all(
        [AppEvent::QuitApp, AppEvent::ToggleTrail],
        &mut controller,
    );

    assert_eq!(flow, Flow::Terminate);
    assert_eq!(controller.phase(), Phase::Terminated);
    assert!(calls.borrow().is_empty());
}

#[test]
fn will_terminate_shuts_down_without_requesting_termination() {
    let (mut controller, _) = launched(AppConfig::default());
    let mut subs = Controller::subscriptions();

    assert_eq!(
        subs.dispatch(AppEvent::WillTerminate, &mut controller),
        Flow::Continue
    );
    assert_eq!(controller.phase(), Phase::Terminated);
}

// === Session ===

type Session = TrailSession<FakeSurface, FakeScheduler>;

fn session(config: AppConfig) -> (Session, EventPublisher, Rc<RefCell<Vec<Call>>>) {
    let (controller, calls) = launched(config);
    let bus = EventBus::new();
    let publisher = bus.publisher();
    (TrailSession::new(controller, bus), publisher, calls)
}

#[test]
fn tick_tracks_when_no_events_are_queued() {
    let (mut session, _, calls) = session(AppConfig::default());

    assert_eq!(session.tick(Point::new(100.0, 100.0)), Flow::Continue);
    assert_eq!(*calls.borrow(), vec![Call::Reposition(Point::new(84.0, 84.0))]);
}

#[test]
fn tick_handles_events_before_tracking() {
    let (mut session, publisher, calls) = session(AppConfig::default());

    publisher.publish(AppEvent::ToggleTrail);
    session.tick(Point::new(100.0, 100.0));

    assert_eq!(
        *calls.borrow(),
        vec![Call::Hide, Call::Reposition(Point::new(84.0, 84.0))]
    );
}

#[test]
fn quit_tick_terminates_without_repositioning() {
    let (mut session, publisher, calls) = session(AppConfig::default());

    publisher.publish(AppEvent::QuitApp);
    publisher.publish(AppEvent::ToggleTrail);

    assert_eq!(session.tick(Point::new(100.0, 100.0)), Flow::Terminate);
    assert_eq!(session.controller().phase(), Phase::Terminated);
    assert!(calls.borrow().is_empty());
}

#[test]
fn will_terminate_runs_through_the_registry() {
    let (mut session, publisher, calls) = session(AppConfig::default());

    publisher.publish(AppEvent::ToggleTrail);
    session.will_terminate();

    assert_eq!(session.controller().phase(), Phase::Terminated);
    assert_eq!(session.controller().scheduler().cancelled, 1);
    // Queued events are dropped, not handled.
    assert!(calls.borrow().is_empty());
    assert_eq!(session.tick(Point::new(1.0, 1.0)), Flow::Continue);
    assert!(calls.borrow().is_empty());
}
