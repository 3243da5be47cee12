use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hifitime::Epoch;
use orrery_sim::time_controller::j2000;
use orrery_sim::{catalog, solar_system, TimeController};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "Keplerian solar-system propagation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in body catalog
    Catalog,

    /// Print body positions at an epoch
    Positions {
        /// Epoch (ISO format, or an offset from J2000 like "+300s")
        #[arg(short, long, default_value = "2000-01-01T12:00:00 UTC")]
        epoch: String,

        /// Simulation-speed multiplier
        #[arg(long, default_value = "1.0")]
        speed: f64,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Advance the system in real time, printing positions as time passes
    Simulate {
        /// Starting epoch (ISO format, or an offset from J2000 like "+300s")
        #[arg(short, long, default_value = "2000-01-01T12:00:00 UTC")]
        epoch: String,

        /// Playback rate (sim seconds per real second)
        #[arg(long, default_value = "1.0")]
        rate: f64,

        /// Simulation-speed multiplier passed to the engine
        #[arg(long, default_value = "1.0")]
        speed: f64,

        /// Duration to simulate (seconds of real time)
        #[arg(long, default_value = "10")]
        duration: f64,
    },

    /// Sweep a time range and report invariant residuals per body
    Verify {
        /// Start offset from J2000 (e.g. "0s", "-1h")
        #[arg(long, default_value = "0s")]
        start: String,

        /// End offset from J2000 (e.g. "1h", "30d")
        #[arg(long, default_value = "1h")]
        end: String,

        /// Step size (e.g. "60s", "10m")
        #[arg(long, default_value = "1m")]
        step: String,

        /// Simulation-speed multiplier
        #[arg(long, default_value = "1.0")]
        speed: f64,
    },
}

/// Position record for the rendering boundary (JSON output)
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PositionRecord {
    name: String,
    x: f64,
    y: f64,
    z: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog => {
            let entries = catalog::catalog();

            println!(
                "{:<10} {:>12} {:>12} {:>9} {:>12} {:>10} {:<8} {:<8} {:>7}",
                "Body", "a", "e", "F (rad)", "M (rad/s)", "R", "Parent", "Color", "Radius"
            );
            for entry in &entries {
                let parent = match entry.parent {
                    Some(p) => entries[p].elements.name.as_str(),
                    None => "-",
                };
                println!(
                    "{:<10} {:>12.6} {:>12.8} {:>9.4} {:>12.4} {:>10.4} {:<8} {:<8} {:>7.1}",
                    entry.elements.name,
                    entry.elements.semi_major_axis,
                    entry.elements.eccentricity,
                    entry.elements.true_anomaly_offset,
                    entry.elements.mean_anomaly_rate,
                    entry.elements.radius_offset,
                    parent,
                    entry.appearance.color,
                    entry.appearance.display_radius,
                );
            }
        }

        Commands::Positions { epoch, speed, json } => {
            let epoch = parse_epoch(&epoch)?;
            let t = (epoch - j2000()).to_seconds();

            let mut system = solar_system()?;
            system.advance(t, speed)?;

            if json {
                let records: Vec<PositionRecord> = system
                    .positions()
                    .map(|(name, p)| PositionRecord {
                        name: name.to_string(),
                        x: p.x,
                        y: p.y,
                        z: p.z,
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("Positions at {} (t={:+.1}s):", epoch, t);
                println!(
                    "{:<10} {:>15} {:>15} {:>15} {:>12}",
                    "Body", "X", "Y", "Z", "Dist"
                );
                for (name, p) in system.positions() {
                    println!(
                        "{:<10} {:>15.6} {:>15.6} {:>15.6} {:>12.4}",
                        name,
                        p.x,
                        p.y,
                        p.z,
                        p.magnitude()
                    );
                }
            }
        }

        Commands::Simulate { epoch, rate, speed, duration } => {
            let epoch = parse_epoch(&epoch)?;
            let mut tc = TimeController::at_epoch(epoch);
            tc.set_rate(rate);

            let mut system = solar_system()?;

            let steps = (duration * 10.0) as usize; // 10 updates per second
            let dt = 0.1;

            for _ in 0..steps {
                tc.tick(dt);
                let t = tc.simulated_seconds();
                system.advance(t, speed)?;

                let earth = system.body(catalog::EARTH).context("catalog misses Earth")?;
                let mars = system.body(catalog::MARS).context("catalog misses Mars")?;
                println!(
                    "t={:+9.1}s: Earth ({:8.3}, {:8.3})  Earth-Mars distance = {:.3}",
                    t,
                    earth.position().x,
                    earth.position().y,
                    earth.position().distance(mars.position()),
                );

                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }

        Commands::Verify { start, end, step, speed } => {
            let start = parse_offset_seconds(&start)?;
            let end = parse_offset_seconds(&end)?;
            let step = parse_offset_seconds(&step)?;

            let mut system = solar_system()?;

            println!("Sweeping t={start}s to t={end}s, step {step}s");
            let results = orrery_sim::validate_range(&mut system, start, end, step, speed)?;
            let summary = orrery_sim::summarize_validation(&results);

            println!(
                "\n{:<10} {:>8} {:>14} {:>14} {:>14} {:>14}",
                "Body", "Points", "Mean resid", "Max resid", "Radius exc", "Composition"
            );
            for s in &summary {
                println!(
                    "{:<10} {:>8} {:>14.3e} {:>14.3e} {:>14.3e} {:>14.3e}",
                    s.body,
                    s.num_points,
                    s.mean_kepler_residual,
                    s.max_kepler_residual,
                    s.max_radius_excess,
                    s.max_composition_error,
                );
            }
        }
    }

    Ok(())
}

/// Parse an epoch: ISO timestamp, or "+300s"/"-2h"-style offset from J2000
fn parse_epoch(s: &str) -> Result<Epoch> {
    if s.starts_with('+') || s.starts_with('-') {
        let seconds = parse_offset_seconds(s)?;
        Ok(j2000() + hifitime::Duration::from_seconds(seconds))
    } else {
        Epoch::from_str(s).with_context(|| format!("unparseable epoch '{s}'"))
    }
}

/// Parse a signed duration like "90s", "10m", "-2h", "30d", "1y" into seconds
fn parse_offset_seconds(s: &str) -> Result<f64> {
    let s = s.trim();
    let (value, unit) = match s.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&s[..idx], &s[idx..]),
        _ => (s, "s"),
    };

    let value: f64 = value
        .parse()
        .with_context(|| format!("unparseable duration '{s}'"))?;

    let scale = match unit {
        "s" => 1.0,
        "m" => 60.0,
        "h" => 3600.0,
        "d" => 86400.0,
        "y" => 365.25 * 86400.0,
        _ => bail!("unknown duration unit '{unit}' in '{s}'"),
    };

    Ok(value * scale)
}

#[cfg(test)]
mod tests {
    use super::parse_offset_seconds;

    #[test]
    fn test_parse_offset_seconds() {
        assert_eq!(parse_offset_seconds("90s").unwrap(), 90.0);
        assert_eq!(parse_offset_seconds("10m").unwrap(), 600.0);
        assert_eq!(parse_offset_seconds("-2h").unwrap(), -7200.0);
        assert_eq!(parse_offset_seconds("30d").unwrap(), 30.0 * 86400.0);
        assert_eq!(parse_offset_seconds("42").unwrap(), 42.0);
        assert!(parse_offset_seconds("1parsec").is_err());
    }
}
