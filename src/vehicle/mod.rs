pub mod climate;
pub mod variant;
pub use variant::{bind_level_to_heater_action, bind_seat_to_heater_action};

use strum::{AsRefStr, EnumIter, EnumString};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    carserver::{self, Action, VehicleActionMsg},
    dispatch::{Context, Dispatcher},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SeatPosition {
    Unknown,
    FrontLeft,
    FrontRight,
    SecondRowLeft,
    SecondRowLeftBack,
    SecondRowCenter,
    SecondRowRight,
    SecondRowRightBack,
    ThirdRowLeft,
    ThirdRowRight,
}

// Off is 0 here. Wire encodings that reserve 0 for "unspecified" shift by one
// when the action is built, never in this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
#[repr(i32)]
pub enum Level {
    Off = 0,
    Low = 1,
    #[strum(to_string = "medium", serialize = "med")]
    Medium = 2,
    High = 3,
}

/// The wire schema already defines a usable enumeration for this one.
pub type ClimateKeeperMode = carserver::ClimateKeeperAction;

#[derive(Error, Debug)]
pub enum CommandError<E> {
    /// Rejected before any action was built.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to dispatch action: {0}")]
    DispatchFailure(#[source] E),
}

impl<E> CommandError<E> {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CommandError::InvalidArgument(_))
    }
}

/// Handle to a single vehicle. Every command goes out through its dispatcher.
pub struct Vehicle<D> {
    dispatcher: D,
}

impl<D: Dispatcher> Vehicle<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    fn execute(&self, ctx: &Context, msg: VehicleActionMsg) -> Result<(), CommandError<D::Error>> {
        let action = Action::from(msg);
        debug!(?action, deadline = ?ctx.remaining(), "submitting vehicle action");

        self.dispatcher.submit(ctx, action).map_err(|err| {
            warn!(error = %err, "vehicle action was not delivered");
            CommandError::DispatchFailure(err)
        })
    }
}

fn invalid_argument<E>(msg: impl Into<String>) -> CommandError<E> {
    let msg = msg.into();
    warn!(%msg, "rejected climate command");
    CommandError::InvalidArgument(msg)
}

#[cfg(test)]
mod tests {
    use std::{
        str::FromStr,
        time::{Duration, Instant},
    };

    use strum::IntoEnumIterator;

    use super::*;
    use crate::dispatch::recording::RecordingDispatcher;

    #[test]
    fn test_level_numbering() {
        let values: Vec<i32> = Level::iter().map(|l| l as i32).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
        assert!(Level::Off < Level::Low && Level::Medium < Level::High);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(SeatPosition::from_str("second-row-left-back").unwrap(), SeatPosition::SecondRowLeftBack);
        assert_eq!(SeatPosition::FrontRight.as_ref(), "front-right");
        assert_eq!(Level::from_str("med").unwrap(), Level::Medium);
        assert_eq!(Level::from_str("medium").unwrap(), Level::Medium);
        assert!(Level::from_str("max").is_err());
        assert_eq!(ClimateKeeperMode::from_str("camp").unwrap(), ClimateKeeperMode::Camp);
    }

    #[test]
    fn test_dispatch_failure_passthrough() {
        let vehicle = Vehicle::new(RecordingDispatcher::failing());
        let err = vehicle.climate_on(&Context::background()).unwrap_err();

        assert!(!err.is_invalid_argument());
        assert!(matches!(err, CommandError::DispatchFailure(_)));
        assert_eq!(err.to_string(), "failed to dispatch action: vehicle rejected the action");
        assert_eq!(vehicle.dispatcher().sent().len(), 1);
    }

    #[test]
    fn test_context_reaches_dispatcher() {
        let vehicle = Vehicle::new(RecordingDispatcher::new());
        let deadline = Instant::now() + Duration::from_secs(30);
        let ctx = Context::with_deadline(deadline);

        vehicle.set_steering_wheel_heater(&ctx, true).unwrap();
        vehicle.set_seat_cooler(&ctx, Level::High, SeatPosition::FrontLeft).unwrap();

        let contexts = vehicle.dispatcher().contexts();
        assert_eq!(contexts.len(), 2);
        for received in &contexts {
            assert_eq!(received.deadline(), Some(deadline));
            assert!(!received.cancellation().is_cancelled());
        }

        // same token, not a copy of its state
        ctx.cancel();
        assert!(contexts.iter().all(|received| received.cancellation().is_cancelled()));
    }

    #[test]
    fn test_rejected_argument_never_sees_context() {
        let vehicle = Vehicle::new(RecordingDispatcher::new());
        let ctx = Context::background();

        let err = vehicle.set_seat_cooler(&ctx, Level::Low, SeatPosition::SecondRowRight).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(vehicle.dispatcher().contexts().is_empty());
    }
}
