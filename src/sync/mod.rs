//! Data Synchronization Module
//!
//! Local view state that shadows server truth: the optimistic-update
//! helper, the per-screen favorites set, and the cancellation scope that
//! keeps stale responses away from torn-down screens.

pub mod favorites;
pub mod optimistic;
pub mod scope;

pub use favorites::{FavoriteSet, FavoritesView};
pub use optimistic::apply_optimistic;
pub use scope::ScreenScope;

use crate::client::{ApiClient, Filter};
use crate::shared::{ClientError, Property};

/// Fetch the property list and the favorite set concurrently.
///
/// The two reads have no data dependency, so they go out together; the
/// combined view is only produced once both have resolved, so a screen
/// never renders properties against a half-loaded favorite set.
pub async fn fetch_properties_with_favorites(
    api: &ApiClient,
    filter: &Filter,
) -> Result<(Vec<Property>, FavoriteSet), ClientError> {
    let (properties, favorites) = tokio::try_join!(api.get_properties(filter), api.get_favorites())?;
    Ok((properties, FavoriteSet::from_properties(&favorites)))
}
