//! Power Cut Drive entry point
//!
//! Runs a headless session with the autopilot at the wheel and logs the HUD.
//! Usage: `power-cut-drive [settings.json]`

use std::path::PathBuf;
use std::process::ExitCode;

use power_cut_drive::consts::SIM_DT;
use power_cut_drive::hud::{dashboard_text, debug_overlay};
use power_cut_drive::input::Autopilot;
use power_cut_drive::session::Session;
use power_cut_drive::{ConfigError, Settings};

/// Simulated seconds between HUD log lines
const HUD_INTERVAL: f32 = 1.0;

fn run(settings_path: PathBuf) -> Result<(), ConfigError> {
    let settings = Settings::load(&settings_path)?;
    let mut session = Session::new(&settings, Autopilot::new(settings.autopilot_seed))?;

    let mut next_hud = 0.0;
    let mut next_toggle = settings.camera_toggle_interval;
    while session.elapsed() < settings.run_seconds {
        session.update(SIM_DT);

        if settings.camera_toggle_interval > 0.0 && session.elapsed() >= next_toggle {
            session.request_camera_toggle();
            next_toggle += settings.camera_toggle_interval;
        }

        if session.elapsed() >= next_hud {
            let telemetry = session.telemetry();
            if let Some(text) = dashboard_text(Some(&telemetry)) {
                log::info!("[{:6.2}s] {text}", session.elapsed());
            }
            for line in debug_overlay(&telemetry).iter().filter(|l| !l.is_empty()) {
                log::debug!("  {line}");
            }
            next_hud += HUD_INTERVAL;
        }
    }

    let pose = session.pose();
    log::info!(
        "Finished {:.1}s: {} power cuts, final position ({:.1}, {:.1}), heading {:.0} deg",
        session.elapsed(),
        session.power_cuts(),
        pose.position.x,
        pose.position.z,
        pose.heading().to_degrees()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Power Cut Drive (headless) starting...");

    let settings_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("power_cut_drive.json"));

    match run(settings_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
