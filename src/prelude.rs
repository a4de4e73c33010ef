//! Prelude module - common imports for izedio
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use izedio::prelude::*;
//! ```

// Re-export error types
pub use izedio_core::{Error, OptionExt, Result, ResultExt};

// Re-export option types
pub use izedio_core::{none, option, some, try_some, Optional};

// Re-export event types
pub use izedio_events::{Bus, BusBuilder, Listener, Notifier};

// Re-export future types
pub use izedio_future::{
    and_future, and_futures, future, AndFuture, Completable, CompletionListener, Deferred,
    DynFuture, Future, FutureEvent, FutureId,
};
