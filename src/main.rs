use std::{collections::HashMap, time::Duration};

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use climate::{
    dispatch::{create_dispatcher, Context, DispatcherType},
    ClimateKeeperMode, Dispatcher, Level, SeatPosition, Vehicle,
};

/// Build a climate command and hand it to a dispatcher.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Where built actions go, e.g. `lines:json`, `lines:hex`, `lines:base64`
    #[arg(short, long, default_value = "lines:json")]
    output: DispatcherType,

    /// Give up on the command after this many seconds
    #[arg(long)]
    timeout: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Set a front seat cooler level
    SeatCooler { seat: SeatPosition, level: Level },

    ClimateOn,
    ClimateOff,

    /// Toggle automatic seat climate for one or more seats
    AutoSeat {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
        #[arg(required = true)]
        seats: Vec<SeatPosition>,
    },

    /// Set driver and passenger temperature in Celsius
    Temperature {
        #[arg(allow_negative_numbers = true)]
        driver: f32,
        #[arg(allow_negative_numbers = true)]
        passenger: f32,
    },

    /// Set seat heater levels, e.g. `front-left=high second-row-center=off`
    SeatHeater {
        #[arg(required = true, value_parser = parse_seat_level)]
        levels: Vec<(SeatPosition, Level)>,
    },

    SteeringWheelHeater {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },

    PreconditioningMax {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
        #[arg(long)]
        manual_override: bool,
    },

    BioweaponDefense {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
        #[arg(long)]
        manual_override: bool,
    },

    CabinOverheatProtection {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
        #[arg(long)]
        fan_only: bool,
    },

    /// Set the cabin overheat protection activation temperature
    CabinOverheatTemperature { level: Level },

    ClimateKeeper {
        mode: ClimateKeeperMode,
        #[arg(long)]
        manual_override: bool,
    },
}

fn parse_seat_level(s: &str) -> Result<(SeatPosition, Level), String> {
    let (seat, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <seat>=<level>, got `{}`", s))?;
    let seat = seat.parse().map_err(|_| format!("unknown seat: {}", seat))?;
    let level = level.parse().map_err(|_| format!("unknown level: {}", level))?;
    Ok((seat, level))
}

fn run<D>(vehicle: &Vehicle<D>, ctx: &Context, command: Command) -> anyhow::Result<()>
where
    D: Dispatcher,
    D::Error: Send + Sync,
{
    match command {
        Command::SeatCooler { seat, level } => vehicle.set_seat_cooler(ctx, level, seat)?,
        Command::ClimateOn => vehicle.climate_on(ctx)?,
        Command::ClimateOff => vehicle.climate_off(ctx)?,
        Command::AutoSeat { enabled, seats } => vehicle.auto_seat_and_climate(ctx, &seats, enabled)?,
        Command::Temperature { driver, passenger } => vehicle.change_climate_temp(ctx, driver, passenger)?,
        Command::SeatHeater { levels } => {
            let levels: HashMap<_, _> = levels.into_iter().collect();
            vehicle.set_seat_heater(ctx, &levels)?
        }
        Command::SteeringWheelHeater { enabled } => vehicle.set_steering_wheel_heater(ctx, enabled)?,
        Command::PreconditioningMax {
            enabled,
            manual_override,
        } => vehicle.set_preconditioning_max(ctx, enabled, manual_override)?,
        Command::BioweaponDefense {
            enabled,
            manual_override,
        } => vehicle.set_bioweapon_defense_mode(ctx, enabled, manual_override)?,
        Command::CabinOverheatProtection { enabled, fan_only } => {
            vehicle.set_cabin_overheat_protection(ctx, enabled, fan_only)?
        }
        Command::CabinOverheatTemperature { level } => vehicle.set_cabin_overheat_protection_temperature(ctx, level)?,
        Command::ClimateKeeper {
            mode,
            manual_override,
        } => vehicle.set_climate_keeper_mode(ctx, mode, manual_override)?,
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // stdout carries the encoded actions, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("climate=info")))
        .init();

    let args = Args::parse();

    let ctx = match args.timeout {
        Some(secs) => Context::with_timeout(Duration::try_from_secs_f64(secs)?),
        None => Context::background(),
    };

    let vehicle = Vehicle::new(create_dispatcher(args.output));
    run(&vehicle, &ctx, args.command)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_parse_seat_level() {
        assert_eq!(parse_seat_level("front-left=high"), Ok((SeatPosition::FrontLeft, Level::High)));
        assert!(parse_seat_level("front-left").is_err());
        assert!(parse_seat_level("trunk=low").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let args = Args::try_parse_from([
            "climate",
            "--output",
            "lines:hex",
            "seat-heater",
            "front-left=high",
            "second-row-center=off",
        ])
        .unwrap();

        assert!(matches!(args.command, Command::SeatHeater { ref levels } if levels.len() == 2));

        assert_eq!(args.timeout, None);

        let args = Args::try_parse_from(["climate", "--timeout", "2.5", "temperature", "--", "-5", "21.5"]).unwrap();
        assert!(matches!(args.command, Command::Temperature { driver, .. } if driver == -5.0));
        assert_eq!(args.timeout, Some(2.5));

        Args::command().debug_assert();
    }
}
