use std::{
    io::Write,
    str::FromStr,
    sync::Mutex,
};

use anyhow::anyhow;
use thiserror::Error;
use tracing::debug;

use crate::carserver::Action;

use super::{
    codecs::{create_codec, Codec, CodecError, CodecType},
    Context, ContextError,
};

/// Delivers built actions to a vehicle.
///
/// `submit` blocks until the action is acknowledged or has failed. Anything
/// transport specific (sessions, retries) belongs to the implementation, as
/// does honouring the deadline and cancellation in `ctx`. Errors are handed
/// back to the caller untouched.
pub trait Dispatcher {
    type Error: std::error::Error + 'static;

    fn submit(&self, ctx: &Context, action: Action) -> Result<(), Self::Error>;
}

impl<T: Dispatcher + ?Sized> Dispatcher for Box<T> {
    type Error = T::Error;

    fn submit(&self, ctx: &Context, action: Action) -> Result<(), Self::Error> {
        (**self).submit(ctx, action)
    }
}

impl<T: Dispatcher + ?Sized> Dispatcher for &T {
    type Error = T::Error;

    fn submit(&self, ctx: &Context, action: Action) -> Result<(), Self::Error> {
        (**self).submit(ctx, action)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatcherType {
    /// Write one encoded action per line to stdout
    Lines { codec_type: CodecType },
}

impl FromStr for DispatcherType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let dispatcher_type = parts.next().unwrap_or_default();

        Ok(match dispatcher_type {
            "lines" => {
                let codec_type = parts.next().ok_or_else(|| anyhow!("Missing codec type"))?;
                DispatcherType::Lines {
                    codec_type: CodecType::from_str(codec_type)?,
                }
            }
            _ => return Err(anyhow!("unknown dispatcher type: {}", dispatcher_type)),
        })
    }
}

pub fn create_dispatcher(ty: DispatcherType) -> Box<dyn Dispatcher<Error = DispatchError> + Send + Sync> {
    match ty {
        DispatcherType::Lines { codec_type } => Box::new(Lines::new(codec_type, Box::new(std::io::stdout()))),
    }
}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("codec error: {0}")]
    CodecError(#[from] CodecError),

    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("output writer was poisoned by an earlier panic")]
    Poisoned,

    #[error("action not written: {0}")]
    ContextError(#[from] ContextError),
}

pub struct Lines {
    codec_type: CodecType,
    codec: Box<dyn Codec<Error = CodecError> + Send + Sync>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Lines {
    pub fn new(codec_type: CodecType, writer: Box<dyn Write + Send>) -> Self {
        Self {
            codec_type,
            codec: create_codec(codec_type),
            writer: Mutex::new(writer),
        }
    }
}

impl Dispatcher for Lines {
    type Error = DispatchError;

    fn submit(&self, ctx: &Context, action: Action) -> Result<(), Self::Error> {
        ctx.check()?;
        let encoded = self.codec.encode(&action)?;

        let mut writer = self.writer.lock().map_err(|_| DispatchError::Poisoned)?;
        // the lock may have been contended past the deadline
        ctx.check()?;
        writeln!(writer, "{}", encoded)?;
        writer.flush()?;

        debug!(codec = self.codec_type.as_ref(), bytes = encoded.len(), "wrote action");
        Ok(())
    }
}
