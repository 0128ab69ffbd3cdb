//! maptool - keyboard map navigation demo
//!
//! Runs a key script against a simulated map view and prints the overlay text.
//!
//! ```text
//! maptool shift+up up q zoom click:640,320
//! ```

use maptool::config::{AppConfig, NavigationConfig};
use maptool::host::{EventBus, SimulatedMapView};
use maptool::script::{parse_script, ScriptStep};
use maptool::tool::{MapToolSession, TextPanel};
use winit::event::MouseButton;

fn main() {
    let config = AppConfig::load();

    let log_level = config
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    if let Err(e) = config.navigation.validate() {
        log::warn!("{}. Using default navigation settings.", e);
        config.navigation = NavigationConfig::default();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let steps = match parse_script(&args) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: maptool [shift+|hold:]<left|right|up|down|w|s|a|d|q|e> | zoom | pan | click:X,Y ...");
            std::process::exit(2);
        }
    };

    let bus = EventBus::new();
    let mut view = SimulatedMapView::new(
        bus.clone(),
        config.view.camera,
        config.view.extent(),
        config.view.viewing_mode,
    )
    .with_viewport(config.view.viewport[0], config.view.viewport[1]);

    let panel = TextPanel::new();
    let session = match MapToolSession::activate(&bus, &view, Some(Box::new(panel.clone())), &config.navigation) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to activate map tool: {}", e);
            std::process::exit(1);
        }
    };

    for step in steps {
        run_step(&session, &mut view, &panel, step);
        // Let the host finish the animation before the next input
        let landed = view.complete_animations();
        log::debug!("{:?}: {} camera update(s)", step, landed);
    }

    println!("{}", panel.text());
    session.deactivate();
}

fn run_step(session: &MapToolSession, view: &mut SimulatedMapView, panel: &TextPanel, step: ScriptStep) {
    match step {
        ScriptStep::Key { key, shift, release } => {
            match session.key_down(view, key, shift) {
                Ok(true) => {}
                Ok(false) => log::info!("{:?} is not a navigation key", key),
                Err(e) => log::warn!("{:?} ignored: {}", key, e),
            }
            if release {
                session.key_up();
            }
        }
        ScriptStep::ZoomTo => {
            if !session.zoom_to(view) {
                log::info!("Zoom unavailable: no active view");
            }
        }
        ScriptStep::PanTo => {
            if !session.pan_to(view) {
                log::info!("Pan unavailable: no active view");
            }
        }
        ScriptStep::Click(point) => {
            // The next camera change overwrites the readout, so show it now
            if session.mouse_down(&*view, MouseButton::Left, point) {
                println!("{}\n", panel.text());
            }
        }
    }
}
