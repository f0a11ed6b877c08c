pub mod carserver;
pub mod dispatch;
pub mod vehicle;

pub use dispatch::Dispatcher;
pub use vehicle::{ClimateKeeperMode, CommandError, Level, SeatPosition, Vehicle};
