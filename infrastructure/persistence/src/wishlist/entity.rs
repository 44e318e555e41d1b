use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::shared::value_objects::{ProductId, UserId};
use business::domain::wishlist::errors::WishlistError;
use business::domain::wishlist::model::Wishlist;

/// Row shape of the `wishlists` table. The product ids live in a set-like
/// JSONB array; ordering inside the array is whatever the aggregate persisted.
#[derive(Debug, FromRow)]
pub struct WishlistEntity {
    pub id: Uuid,
    pub user_id: String,
    pub product_ids: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WishlistEntity {
    /// Maps a row into the aggregate through `rehydrate`, so duplicated ids
    /// are dropped and rows holding more than the aggregate's cap are
    /// rejected as corrupt persisted state.
    pub fn into_domain(self) -> Result<Wishlist, WishlistError> {
        let items = self.product_ids.0.into_iter().map(ProductId::new).collect();
        Wishlist::rehydrate(UserId::new(self.user_id), items)
    }

    /// Builds a fresh insertable row from the aggregate. The row id is
    /// storage-assigned here; the store never reuses the aggregate identity
    /// as the document id.
    pub fn from_domain(wishlist: &Wishlist) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: wishlist.user_id().as_str().to_string(),
            product_ids: Json(
                wishlist
                    .items()
                    .iter()
                    .map(|id| id.as_str().to_string())
                    .collect(),
            ),
            created_at: now,
            updated_at: now,
        }
    }
}
