//! Lava Run headless runner
//!
//! Plays a built-in level without input for a fixed time and reports the
//! outcome. Usage: `lava-run [level-number] [seconds]`. Settings are read
//! from `lava-run.json` in the working directory when present.

use std::path::Path;
use std::process::ExitCode;

use lava_run::sim::{LevelEvent, Status, TouchKind, advance};
use lava_run::{LevelParser, Settings, SimError, levels};

/// Display frame length the runner feeds the simulation
const FRAME_TIME: f32 = 1.0 / 60.0;
const SETTINGS_FILE: &str = "lava-run.json";

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Lava Run (headless) starting...");

    match run() {
        Ok(status) => {
            println!("Result: {status:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Status, SimError> {
    let mut args = std::env::args().skip(1);
    let level_index = match args.next() {
        Some(arg) => levels::index_from_arg(&arg)?,
        None => 0,
    };
    let seconds = match args.next() {
        Some(arg) => parse_seconds(&arg)?,
        None => 10.0,
    };

    let settings = if Path::new(SETTINGS_FILE).exists() {
        Settings::load(SETTINGS_FILE)?
    } else {
        log::info!("Using default settings");
        Settings::default()
    };

    let mut parser = LevelParser::standard(settings.seed);
    let mut level = levels::load(&mut parser, level_index)?;
    settings.apply(&mut level);

    let frames = (seconds / FRAME_TIME).ceil() as u32;
    for frame in 0..frames {
        for event in advance(&mut level, FRAME_TIME, settings.max_step) {
            match event {
                LevelEvent::CoinCollected(id) => log::info!("Frame {frame}: coin {} collected", id.0),
                LevelEvent::Won => log::info!("Frame {frame}: level won"),
                LevelEvent::Lost => log::info!("Frame {frame}: level lost"),
            }
        }
        if level.is_finished() {
            break;
        }
    }

    log::info!(
        "{} actors left, {} coins remaining",
        level.actors().len(),
        level
            .actors()
            .iter()
            .filter(|a| a.kind() == TouchKind::Coin)
            .count()
    );
    Ok(level.status())
}

fn parse_seconds(arg: &str) -> Result<f32, SimError> {
    match arg.trim().parse::<f32>() {
        Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(seconds),
        _ => Err(SimError::InvalidArgument(format!("run time {arg:?}"))),
    }
}
