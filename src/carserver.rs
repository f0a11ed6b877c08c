//! Mirror of the car-server command schema.
//!
//! The vehicle owns this schema; the types here only reproduce the climate
//! subset of it. Serialized with serde they follow the schema's JSON mapping:
//! camelCase field names, and the selected member of a one-of sits directly
//! in its parent object (the `*_msg` wrapper fields are flattened away).
//!
//! Scalar enumerations travel as `i32` the way generated protobuf code stores
//! them, with a matching `#[repr(i32)]` enum for the known values. In JSON they
//! are written as numbers, which the mapping accepts in place of enum names.
//! Seat heater position and level are declared upstream as one-of groups of
//! empty messages rather than as enumerations, so they show up here as enums
//! over [`Void`].

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, FromRepr};

/// Empty message used as a variant marker.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Void {}

/// Top level envelope handed to the transport.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(flatten)]
    pub action_msg: Option<ActionMsg>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ActionMsg {
    VehicleAction(VehicleAction),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAction {
    #[serde(flatten)]
    pub vehicle_action_msg: Option<VehicleActionMsg>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum VehicleActionMsg {
    HvacAutoAction(HvacAutoAction),
    HvacSeatCoolerActions(HvacSeatCoolerActions),
    AutoSeatClimateAction(AutoSeatClimateAction),
    HvacTemperatureAdjustmentAction(HvacTemperatureAdjustmentAction),
    HvacSeatHeaterActions(HvacSeatHeaterActions),
    HvacSteeringWheelHeaterAction(HvacSteeringWheelHeaterAction),
    HvacSetPreconditioningMaxAction(HvacSetPreconditioningMaxAction),
    HvacBioweaponModeAction(HvacBioweaponModeAction),
    SetCabinOverheatProtectionAction(SetCabinOverheatProtectionAction),
    SetCopTempAction(SetCopTempAction),
    HvacClimateKeeperAction(HvacClimateKeeperAction),
}

impl From<VehicleActionMsg> for Action {
    fn from(msg: VehicleActionMsg) -> Self {
        Action {
            action_msg: Some(ActionMsg::VehicleAction(VehicleAction {
                vehicle_action_msg: Some(msg),
            })),
        }
    }
}

impl Action {
    /// The vehicle action carried by this envelope, if any.
    pub fn vehicle_action_msg(&self) -> Option<&VehicleActionMsg> {
        match &self.action_msg {
            Some(ActionMsg::VehicleAction(action)) => action.vehicle_action_msg.as_ref(),
            None => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HvacAutoAction {
    pub power_on: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HvacSeatCoolerActions {
    pub hvac_seat_cooler_action: Vec<HvacSeatCoolerAction>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HvacSeatCoolerAction {
    /// See [`HvacSeatCoolerLevel`].
    pub seat_cooler_level: i32,
    /// See [`HvacSeatCoolerPosition`].
    pub seat_position: i32,
}

// 0 is reserved for "unspecified", so off starts at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(i32)]
pub enum HvacSeatCoolerLevel {
    Unknown = 0,
    Off = 1,
    Low = 2,
    Med = 3,
    High = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(i32)]
pub enum HvacSeatCoolerPosition {
    Unknown = 0,
    FrontLeft = 1,
    FrontRight = 2,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutoSeatClimateAction {
    pub carseat: Vec<CarSeat>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarSeat {
    pub seat_position: i32,
    pub on: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(i32)]
pub enum AutoSeatPosition {
    Unknown = 0,
    FrontLeft = 1,
    FrontRight = 2,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HvacTemperatureAdjustmentAction {
    pub driver_temp_celsius: f32,
    pub passenger_temp_celsius: f32,
    pub level: Option<Temperature>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Temperature {
    #[serde(rename = "type")]
    pub r#type: Option<TemperatureType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureType {
    TempUnknown(Void),
    TempMin(Void),
    TempMax(Void),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HvacSeatHeaterActions {
    pub hvac_seat_heater_action: Vec<HvacSeatHeaterAction>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct HvacSeatHeaterAction {
    pub seat_heater_level: Option<SeatHeaterLevel>,
    pub seat_position: Option<SeatHeaterPosition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatHeaterLevel {
    SeatHeaterUnknown(Void),
    SeatHeaterOff(Void),
    SeatHeaterLow(Void),
    SeatHeaterMed(Void),
    SeatHeaterHigh(Void),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatHeaterPosition {
    CarSeatUnknown(Void),
    CarSeatFrontLeft(Void),
    CarSeatFrontRight(Void),
    CarSeatRearLeft(Void),
    CarSeatRearLeftBack(Void),
    CarSeatRearCenter(Void),
    CarSeatRearRight(Void),
    CarSeatRearRightBack(Void),
    CarSeatThirdRowLeft(Void),
    CarSeatThirdRowRight(Void),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HvacSteeringWheelHeaterAction {
    pub power_on: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HvacSetPreconditioningMaxAction {
    pub on: bool,
    pub manual_override: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HvacBioweaponModeAction {
    pub on: bool,
    pub manual_override: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetCabinOverheatProtectionAction {
    pub on: bool,
    pub fan_only: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetCopTempAction {
    /// See [`CopActivationTemp`].
    pub cop_activation_temp: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(i32)]
pub enum CopActivationTemp {
    Unspecified = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HvacClimateKeeperAction {
    /// See [`ClimateKeeperAction`].
    pub climate_keeper_action: i32,
    pub manual_override: bool,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, EnumIter, EnumString, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
#[repr(i32)]
pub enum ClimateKeeperAction {
    Off = 0,
    On = 1,
    Dog = 2,
    Camp = 3,
}
