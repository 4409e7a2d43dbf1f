use std::env;
use std::process::ExitCode;

use tracing::{error, info};

use drone_sim::hardware::presets;
use drone_sim::io::json::{self, FlightSummary};
use drone_sim::io::{csv, hud};
use drone_sim::sim::{self, detect_events_with, AltitudeDetector, EventKind};
use drone_sim::{compute, HardwareConfig, Settings};

struct Args {
    source: Option<String>,
    hold_m: f64,
    csv_path: Option<String>,
    json_path: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args { source: None, hold_m: 5.0, csv_path: None, json_path: None };
    let mut it = env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--hold" => {
                let v = it.next().ok_or("--hold needs a value")?;
                args.hold_m = v.parse().map_err(|_| format!("--hold: not a number ({v:?})"))?;
            }
            "--csv" => args.csv_path = Some(it.next().ok_or("--csv needs a path")?),
            "--json" => args.json_path = Some(it.next().ok_or("--json needs a path")?),
            _ if args.source.is_none() => args.source = Some(arg),
            _ => return Err(format!("unexpected argument {arg:?}")),
        }
    }
    Ok(args)
}

/// A preset name, a settings file, or the default settings file.
fn load_settings(source: Option<&str>) -> drone_sim::Result<Settings> {
    match source {
        Some(name) => match presets::by_name(name) {
            Some(hardware) => Ok(Settings { hardware, ..Settings::default() }),
            None => Settings::load(name),
        },
        None => Settings::load_or_default(Settings::FILENAME),
    }
}

fn main() -> ExitCode {
    drone_sim::init_logging();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: drone-sim [PRESET|SETTINGS.toml] [--hold METRES] [--csv PATH] [--json PATH]");
            return ExitCode::from(2);
        }
    };

    let settings = match load_settings(args.source.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&settings, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings, args: &Args) -> drone_sim::Result<()> {
    let hw = settings.hardware;
    let config = settings.sim;
    let stats = compute(&hw)?;

    // -----------------------------------------------------------------------
    // Sync report
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  DRONE FLIGHT STATS");
    println!("====================================================================");
    println!();
    print_hardware(&hw);
    println!();
    for line in hud::stats_lines(&stats) {
        println!("  {line}");
    }
    println!();

    // -----------------------------------------------------------------------
    // Altitude-hold flight
    // -----------------------------------------------------------------------
    info!("Flying altitude hold at {:.1} m for {:.0} s", args.hold_m, config.max_time);
    let ticks = sim::fly(hw, &config, args.hold_m)?;
    let summary = FlightSummary::from_ticks(&ticks);

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    let reached = AltitudeDetector::new(args.hold_m, true);
    for event in detect_events_with(&ticks, vec![Box::new(reached)]) {
        let label = match &event.kind {
            EventKind::Liftoff => "LIFTOFF".to_string(),
            EventKind::Apex => "APEX".to_string(),
            EventKind::Touchdown => "TOUCHDOWN".to_string(),
            EventKind::Custom(s) => s.clone(),
        };
        println!(
            "  {:<10} t={:>6.2}s   alt={:>7.2}m   vel={:>6.2}m/s",
            label, event.time, event.tick.altitude_m, event.tick.velocity_m_s
        );
    }
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    let sample_interval = (ticks.len() / 20).max(1);
    for (i, t) in ticks.iter().enumerate() {
        if i % sample_interval != 0 && i != ticks.len() - 1 {
            continue;
        }
        println!("  t={:>6.2}s  {}", t.time, hud::hud_text(t.throttle_pct, t.altitude_m));
    }
    println!();

    println!(
        "  Peak {:.2} m at t={:.2}s   max climb {:.2} m/s   airborne {:.1}s",
        summary.peak_altitude_m, summary.peak_time, summary.max_climb_m_s, summary.airborne_time
    );
    println!("  Simulation: {} steps, dt={} s", ticks.len() - 1, config.dt);
    println!("====================================================================");
    println!();

    if let Some(path) = &args.csv_path {
        csv::write_telemetry_file(path, &ticks)?;
        info!("Telemetry written to {}", path);
    }
    if let Some(path) = &args.json_path {
        json::write_report_file(path, &hw, &stats, Some(&summary))?;
        info!("Report written to {}", path);
    }
    Ok(())
}

fn print_hardware(hw: &HardwareConfig) {
    println!("  Hardware");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Motor:         {:>6} KV      Battery:      {:>6}S",
        hw.motor_kv, hw.battery_cells
    );
    println!(
        "  Weight:        {:>6.0} g       Props:        {}x{}",
        hw.weight_grams, hw.prop_diameter_inches, hw.prop_pitch_inches
    );
}
