use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ProductId, UserId};

use super::model::Wishlist;

/// Outbound port for wishlist persistence.
///
/// One stored document per user is expected; adapters must tolerate duplicate
/// documents for the same user and reconcile them on lookup.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: &UserId)
    -> Result<Option<Wishlist>, RepositoryError>;

    /// Returns the user's wishlist only when it contains the given product.
    async fn find_product_for_user_wishlist(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Option<Wishlist>, RepositoryError>;

    /// Upserts keyed by user id and returns the canonical persisted state.
    async fn save(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError>;

    /// Pulls one product from the user's stored wishlist.
    /// Fails with [`RepositoryError::NotFound`] when no document matched.
    async fn remove(&self, user_id: &UserId, product_id: &ProductId)
    -> Result<(), RepositoryError>;
}
