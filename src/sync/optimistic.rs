//! Optimistic mutation with exact rollback.
//!
//! One helper for the snapshot / apply / await / restore dance, instead of
//! every screen re-implementing it. The local state is mutated before the
//! effect is awaited, so the caller's view stays responsive; a failed
//! effect restores the exact pre-mutation snapshot.

use crate::shared::ClientError;
use std::future::Future;

/// Apply `mutate` to `state` immediately, then await `effect`. On failure
/// the pre-mutation snapshot is restored and the error returned.
pub async fn apply_optimistic<S, T, F, Fut>(
    state: &mut S,
    mutate: F,
    effect: Fut,
) -> Result<T, ClientError>
where
    S: Clone,
    F: FnOnce(&mut S),
    Fut: Future<Output = Result<T, ClientError>>,
{
    let snapshot = state.clone();
    mutate(state);
    match effect.await {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::debug!("optimistic mutation failed, rolling back: {}", err);
            *state = snapshot;
            Err(err)
        }
    }
}
