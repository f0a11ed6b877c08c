//! Conversions from the seat and level vocabulary to the wire schema.
//!
//! The schema declares every heater seat position and heater level as its own
//! empty message inside a one-of group, so there is no scalar to assign. Each
//! binder picks exactly one marker; `Unknown` has an explicit arm so that a
//! new variant has to be mapped before the crate builds again.

use super::{Level, SeatPosition};
use crate::carserver::{
    AutoSeatPosition, HvacSeatCoolerPosition, HvacSeatHeaterAction, SeatHeaterLevel,
    SeatHeaterPosition, Void,
};

/// Select the seat marker of `action` matching `position`.
pub fn bind_seat_to_heater_action(position: SeatPosition, action: &mut HvacSeatHeaterAction) {
    action.seat_position = Some(match position {
        SeatPosition::FrontLeft => SeatHeaterPosition::CarSeatFrontLeft(Void {}),
        SeatPosition::FrontRight => SeatHeaterPosition::CarSeatFrontRight(Void {}),
        SeatPosition::SecondRowLeft => SeatHeaterPosition::CarSeatRearLeft(Void {}),
        SeatPosition::SecondRowLeftBack => SeatHeaterPosition::CarSeatRearLeftBack(Void {}),
        SeatPosition::SecondRowCenter => SeatHeaterPosition::CarSeatRearCenter(Void {}),
        SeatPosition::SecondRowRight => SeatHeaterPosition::CarSeatRearRight(Void {}),
        SeatPosition::SecondRowRightBack => SeatHeaterPosition::CarSeatRearRightBack(Void {}),
        SeatPosition::ThirdRowLeft => SeatHeaterPosition::CarSeatThirdRowLeft(Void {}),
        SeatPosition::ThirdRowRight => SeatHeaterPosition::CarSeatThirdRowRight(Void {}),
        SeatPosition::Unknown => SeatHeaterPosition::CarSeatUnknown(Void {}),
    });
}

/// Select the heater level marker of `action` matching `level`.
pub fn bind_level_to_heater_action(level: Level, action: &mut HvacSeatHeaterAction) {
    action.seat_heater_level = Some(match level {
        Level::Off => SeatHeaterLevel::SeatHeaterOff(Void {}),
        Level::Low => SeatHeaterLevel::SeatHeaterLow(Void {}),
        Level::Medium => SeatHeaterLevel::SeatHeaterMed(Void {}),
        Level::High => SeatHeaterLevel::SeatHeaterHigh(Void {}),
    });
}

/// Seats fitted with coolers. Anything else is not addressable.
pub(crate) fn cooler_position(position: SeatPosition) -> Option<HvacSeatCoolerPosition> {
    match position {
        SeatPosition::FrontLeft => Some(HvacSeatCoolerPosition::FrontLeft),
        SeatPosition::FrontRight => Some(HvacSeatCoolerPosition::FrontRight),
        _ => None,
    }
}

pub(crate) fn auto_seat_position(position: SeatPosition) -> Option<AutoSeatPosition> {
    match position {
        SeatPosition::Unknown => Some(AutoSeatPosition::Unknown),
        SeatPosition::FrontLeft => Some(AutoSeatPosition::FrontLeft),
        SeatPosition::FrontRight => Some(AutoSeatPosition::FrontRight),
        _ => None,
    }
}
