use async_trait::async_trait;

use crate::domain::shared::value_objects::{ProductId, UserId};
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct GetProductParams {
    pub user_id: UserId,
    pub product_id: ProductId,
}

/// Point-membership query: succeeds only when the product is in the user's
/// wishlist.
#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, params: GetProductParams) -> Result<Wishlist, WishlistError>;
}
