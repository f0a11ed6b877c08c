use std::collections::HashMap;

use tracing::debug;

use super::{
    invalid_argument,
    variant::{auto_seat_position, bind_level_to_heater_action, bind_seat_to_heater_action, cooler_position},
    ClimateKeeperMode, CommandError, Level, SeatPosition, Vehicle,
};
use crate::{
    carserver::{
        AutoSeatClimateAction, CarSeat, HvacAutoAction, HvacBioweaponModeAction,
        HvacClimateKeeperAction, HvacSeatCoolerAction, HvacSeatCoolerActions, HvacSeatCoolerLevel,
        HvacSeatHeaterAction, HvacSeatHeaterActions, HvacSetPreconditioningMaxAction,
        HvacSteeringWheelHeaterAction, HvacTemperatureAdjustmentAction,
        SetCabinOverheatProtectionAction, SetCopTempAction, Temperature, TemperatureType,
        VehicleActionMsg, Void,
    },
    dispatch::{Context, Dispatcher},
};

type Result<T, E> = std::result::Result<T, CommandError<E>>;

impl<D: Dispatcher> Vehicle<D> {
    /// Set the cooling level of a front seat.
    pub fn set_seat_cooler(&self, ctx: &Context, level: Level, seat: SeatPosition) -> Result<(), D::Error> {
        let Some(position) = cooler_position(seat) else {
            return Err(invalid_argument(format!("seat {} has no cooler", seat.as_ref())));
        };

        // The wire numbering starts at 0 for unknown, the domain starts at 0 for off
        let seat_cooler_level =
            HvacSeatCoolerLevel::from_repr(level as i32 + 1).unwrap_or(HvacSeatCoolerLevel::Unknown);

        self.execute(ctx, VehicleActionMsg::HvacSeatCoolerActions(HvacSeatCoolerActions {
            hvac_seat_cooler_action: vec![HvacSeatCoolerAction {
                seat_cooler_level: seat_cooler_level as i32,
                seat_position: position as i32,
            }],
        }))
    }

    pub fn climate_on(&self, ctx: &Context) -> Result<(), D::Error> {
        self.execute(ctx, VehicleActionMsg::HvacAutoAction(HvacAutoAction { power_on: true }))
    }

    pub fn climate_off(&self, ctx: &Context) -> Result<(), D::Error> {
        self.execute(ctx, VehicleActionMsg::HvacAutoAction(HvacAutoAction { power_on: false }))
    }

    /// Turn automatic seat climate on or off for each of `positions`.
    ///
    /// Seats the vehicle can't address this way are skipped rather than
    /// rejected.
    pub fn auto_seat_and_climate(&self, ctx: &Context, positions: &[SeatPosition], enabled: bool) -> Result<(), D::Error> {
        let carseat = positions
            .iter()
            .filter_map(|&position| match auto_seat_position(position) {
                Some(seat_position) => Some(CarSeat {
                    seat_position: seat_position as i32,
                    on: enabled,
                }),
                None => {
                    debug!(seat = position.as_ref(), "dropping seat without auto climate");
                    None
                }
            })
            .collect();

        self.execute(ctx, VehicleActionMsg::AutoSeatClimateAction(AutoSeatClimateAction { carseat }))
    }

    /// Set the driver and passenger temperatures.
    ///
    /// The vehicle expects the max temperature marker next to the explicit
    /// values, so it is always sent.
    pub fn change_climate_temp(&self, ctx: &Context, driver_celsius: f32, passenger_celsius: f32) -> Result<(), D::Error> {
        self.execute(ctx, VehicleActionMsg::HvacTemperatureAdjustmentAction(
            HvacTemperatureAdjustmentAction {
                driver_temp_celsius: driver_celsius,
                passenger_temp_celsius: passenger_celsius,
                level: Some(Temperature {
                    r#type: Some(TemperatureType::TempMax(Void {})),
                }),
            },
        ))
    }

    /// Set heater levels for any number of seats in one action.
    pub fn set_seat_heater(&self, ctx: &Context, levels: &HashMap<SeatPosition, Level>) -> Result<(), D::Error> {
        let hvac_seat_heater_action = levels
            .iter()
            .map(|(&position, &level)| {
                let mut action = HvacSeatHeaterAction::default();
                bind_level_to_heater_action(level, &mut action);
                bind_seat_to_heater_action(position, &mut action);
                action
            })
            .collect();

        self.execute(ctx, VehicleActionMsg::HvacSeatHeaterActions(HvacSeatHeaterActions {
            hvac_seat_heater_action,
        }))
    }

    pub fn set_steering_wheel_heater(&self, ctx: &Context, enabled: bool) -> Result<(), D::Error> {
        self.execute(ctx, VehicleActionMsg::HvacSteeringWheelHeaterAction(
            HvacSteeringWheelHeaterAction { power_on: enabled },
        ))
    }

    pub fn set_preconditioning_max(&self, ctx: &Context, enabled: bool, manual_override: bool) -> Result<(), D::Error> {
        self.execute(ctx, VehicleActionMsg::HvacSetPreconditioningMaxAction(
            HvacSetPreconditioningMaxAction {
                on: enabled,
                manual_override,
            },
        ))
    }

    pub fn set_bioweapon_defense_mode(&self, ctx: &Context, enabled: bool, manual_override: bool) -> Result<(), D::Error> {
        self.execute(ctx, VehicleActionMsg::HvacBioweaponModeAction(HvacBioweaponModeAction {
            on: enabled,
            manual_override,
        }))
    }

    pub fn set_cabin_overheat_protection(&self, ctx: &Context, enabled: bool, fan_only: bool) -> Result<(), D::Error> {
        self.execute(ctx, VehicleActionMsg::SetCabinOverheatProtectionAction(
            SetCabinOverheatProtectionAction {
                on: enabled,
                fan_only,
            },
        ))
    }

    /// Set the cabin overheat protection activation temperature.
    ///
    /// `Level` maps onto the activation temperature numbering as is, so
    /// `Off` lands on the unspecified value.
    pub fn set_cabin_overheat_protection_temperature(&self, ctx: &Context, level: Level) -> Result<(), D::Error> {
        self.execute(ctx, VehicleActionMsg::SetCopTempAction(SetCopTempAction {
            cop_activation_temp: level as i32,
        }))
    }

    pub fn set_climate_keeper_mode(&self, ctx: &Context, mode: ClimateKeeperMode, manual_override: bool) -> Result<(), D::Error> {
        self.execute(ctx, VehicleActionMsg::HvacClimateKeeperAction(HvacClimateKeeperAction {
            climate_keeper_action: mode as i32,
            manual_override,
        }))
    }
}
