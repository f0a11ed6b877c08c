//! In-memory dispatcher for tests.

use std::sync::Mutex;

use thiserror::Error;

use super::{Context, Dispatcher};
use crate::carserver::{Action, VehicleActionMsg};

#[derive(Error, Debug)]
#[error("vehicle rejected the action")]
pub(crate) struct Rejected;

/// Records every submitted action along with the context it came with, and
/// optionally fails each submission.
#[derive(Default)]
pub(crate) struct RecordingDispatcher {
    sent: Mutex<Vec<(Context, Action)>>,
    fail: bool,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Action> {
        self.sent.lock().unwrap().iter().map(|(_, action)| action.clone()).collect()
    }

    pub fn contexts(&self) -> Vec<Context> {
        self.sent.lock().unwrap().iter().map(|(ctx, _)| ctx.clone()).collect()
    }

    pub fn messages(&self) -> Vec<VehicleActionMsg> {
        self.sent()
            .iter()
            .map(|action| action.vehicle_action_msg().cloned().expect("action without a vehicle action"))
            .collect()
    }
}

impl Dispatcher for RecordingDispatcher {
    type Error = Rejected;

    fn submit(&self, ctx: &Context, action: Action) -> Result<(), Self::Error> {
        self.sent.lock().unwrap().push((ctx.clone(), action));

        if self.fail {
            Err(Rejected)
        } else {
            Ok(())
        }
    }
}
