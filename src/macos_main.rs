//! macOS entry point: builds the application context and runs the app.

use std::cell::RefCell;
use std::rc::Rc;

use cursor_trail::config::AppConfig;
use cursor_trail::controller::TrailController;
use cursor_trail::error::{Result, TrailError};
use cursor_trail::events::EventBus;
use cursor_trail::model::constants::ACTIVATION_POLICY_ACCESSORY;
use cursor_trail::platform::macos::bridge::{msg_send, NSApp};
use cursor_trail::platform::macos::{
    install_termination_observer, pump, MacOverlayPanel, Observers, RunLoopScheduler, Runtime,
    StatusMenu,
};

use objc2::rc::autoreleasepool;
use objc2_foundation::MainThreadMarker;
use tracing::info;

/// Main entry point for macOS. Returns once the run loop stops, which in
/// practice only happens on startup failure: `terminate:` exits the process.
pub fn run() -> Result<()> {
    let mtm = MainThreadMarker::new().ok_or(TrailError::NotMainThread)?;

    let mut config = AppConfig::default();
    config.validate()?;

    autoreleasepool(|_| {
        let app = NSApp();
        // Menu-bar only: no Dock icon, no main menu.
        let _: bool = unsafe { msg_send![app, setActivationPolicy: ACTIVATION_POLICY_ACCESSORY] };

        let runtime = bootstrap(mtm, config)?;
        info!("cursor-trail running");

        unsafe {
            let _: () = msg_send![app, run];
        }
        // Keep the context alive for the whole run loop.
        drop(runtime);
        Ok(())
    })
}

/// Create the overlay, status menu, observers and poll timer.
fn bootstrap(mtm: MainThreadMarker, config: AppConfig) -> Result<Rc<RefCell<Runtime>>> {
    let bus = EventBus::new();
    let poll_interval = config.poll_interval;

    let panel = MacOverlayPanel::create(mtm, &config)?;
    let status_menu = StatusMenu::install(mtm, &config, bus.publisher())?;
    let observers = Observers::install_system(&bus.publisher())?;
    let scheduler = RunLoopScheduler::new(mtm, bus.publisher());

    let mut controller = TrailController::new(config, panel, scheduler);
    controller.launch();

    let runtime = Rc::new(RefCell::new(Runtime::new(
        controller,
        bus,
        observers,
        status_menu,
    )));
    install_termination_observer(&runtime)?;

    let ticker = Rc::clone(&runtime);
    runtime
        .borrow_mut()
        .controller_mut()
        .scheduler_mut()
        .start_polling(poll_interval, move || pump(&ticker))?;

    Ok(runtime)
}
