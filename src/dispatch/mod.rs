/*

Dispatch boundary
-----------------

Vehicle -> Action -> Dispatcher -> (transport)

A dispatcher takes one fully built action and reports whether it was
delivered. Sessions, signing and retries all live behind it. The caller's
Context (deadline, cancellation) rides along with every action and is only
interpreted by the dispatcher.

Lines dispatcher, for inspecting what would be sent:

# writes one JSON object per action to stdout
lines:json

# same, hex or base64 encoded
lines:hex
lines:base64

*/

pub mod context;
pub use context::{Context, ContextError};

pub mod codecs;
pub use codecs::{create_codec, Codec, CodecError, CodecType};

pub mod dispatchers;
pub use dispatchers::{create_dispatcher, DispatchError, Dispatcher, DispatcherType, Lines};

#[cfg(test)]
pub(crate) mod recording;
