//! Constructors for futures and aggregates.

use izedio_core::{OptionExt, Result};

use crate::and_future::AndFuture;
use crate::completable::DynFuture;
use crate::future::Future;

/// Create a pending future.
#[must_use]
pub fn future<T: 'static, E: 'static>() -> Future<T, E> {
    Future::new()
}

/// Aggregate a list of futures that may be missing, or contain missing entries.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if the list or any of its entries is `None`.
pub fn and_future(futures: Option<Vec<Option<DynFuture>>>) -> Result<AndFuture> {
    let futures = futures.ok_or_invalid("futures expected")?;
    let children = futures
        .into_iter()
        .map(|child| child.ok_or_invalid("future expected"))
        .collect::<Result<Vec<_>>>()?;
    Ok(AndFuture::new(children))
}

/// Aggregate the given futures.
#[must_use]
pub fn and_futures<I>(futures: I) -> AndFuture
where
    I: IntoIterator<Item = DynFuture>,
{
    AndFuture::new(futures)
}
