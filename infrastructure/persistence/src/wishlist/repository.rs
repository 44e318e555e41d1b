use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{ProductId, UserId};
use business::domain::wishlist::model::Wishlist;
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::WishlistEntity;

pub struct WishlistRepositoryPostgres {
    pool: PgPool,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches the user's rows and heals duplicates before mapping to the
    /// aggregate. `user_id` carries no unique constraint, so races or
    /// historical bugs may have left several rows for one user; all lookups
    /// go through here so the merge happens opportunistically on read.
    async fn fetch_reconciled(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Wishlist>, RepositoryError> {
        let mut rows = sqlx::query_as::<_, WishlistEntity>(
            "SELECT id, user_id, product_ids, created_at, updated_at FROM wishlists WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if rows.len() > 1 {
            return self.merge_rows(user_id, rows).await.map(Some);
        }

        match rows.pop() {
            Some(row) => row
                .into_domain()
                .map(Some)
                .map_err(|_| RepositoryError::Persistence),
            None => Ok(None),
        }
    }

    /// Unions the product ids of all rows (oldest row's order first), writes
    /// the union into the oldest row and deletes the redundant ones.
    async fn merge_rows(
        &self,
        user_id: &UserId,
        rows: Vec<WishlistEntity>,
    ) -> Result<Wishlist, RepositoryError> {
        tracing::warn!(
            "Reconciling {} wishlist documents for user {}",
            rows.len(),
            user_id
        );

        let survivor: Uuid = rows
            .first()
            .map(|row| row.id)
            .ok_or(RepositoryError::Persistence)?;
        let merged = union_product_ids(&rows);

        sqlx::query("UPDATE wishlists SET product_ids = $2, updated_at = now() WHERE id = $1")
            .bind(survivor)
            .bind(Json(merged.clone()))
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM wishlists WHERE user_id = $1 AND id <> $2")
            .bind(user_id.as_str())
            .bind(survivor)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Wishlist::rehydrate(
            user_id.clone(),
            merged.into_iter().map(ProductId::new).collect(),
        )
        .map_err(|_| RepositoryError::Persistence)
    }
}

/// Unions product ids across duplicate rows, first-seen order winning.
fn union_product_ids(rows: &[WishlistEntity]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for row in rows {
        for product_id in &row.product_ids.0 {
            if !merged.contains(product_id) {
                merged.push(product_id.clone());
            }
        }
    }
    merged
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Wishlist>, RepositoryError> {
        self.fetch_reconciled(user_id).await
    }

    async fn find_product_for_user_wishlist(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Option<Wishlist>, RepositoryError> {
        let wishlist = self.fetch_reconciled(user_id).await?;
        Ok(wishlist.filter(|w| w.contains(product_id)))
    }

    async fn save(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError> {
        let entity = WishlistEntity::from_domain(wishlist);

        // Upsert keyed by user_id: update-first so an existing document keeps
        // its storage-assigned id, insert only when the user has none.
        let updated =
            sqlx::query("UPDATE wishlists SET product_ids = $2, updated_at = now() WHERE user_id = $1")
                .bind(&entity.user_id)
                .bind(&entity.product_ids)
                .execute(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        if updated.rows_affected() == 0 {
            sqlx::query(
                "INSERT INTO wishlists (id, user_id, product_ids, created_at, updated_at) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(entity.id)
            .bind(&entity.user_id)
            .bind(&entity.product_ids)
            .bind(entity.created_at)
            .bind(entity.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        // Round-trip through the store so callers see canonical persisted
        // state.
        self.fetch_reconciled(wishlist.user_id())
            .await?
            .ok_or(RepositoryError::Persistence)
    }

    async fn remove(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE wishlists SET product_ids = product_ids - $2::text, updated_at = now() WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .bind(product_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(ids: &[&str]) -> WishlistEntity {
        WishlistEntity {
            id: Uuid::new_v4(),
            user_id: "9".to_string(),
            product_ids: Json(ids.iter().map(|id| id.to_string()).collect()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn should_union_duplicate_rows_preserving_first_seen_order() {
        let rows = vec![row(&["1", "2"]), row(&["3"])];

        let merged = union_product_ids(&rows);

        assert_eq!(merged, vec!["1", "2", "3"]);
    }

    #[test]
    fn should_drop_ids_shared_between_rows() {
        let rows = vec![row(&["1", "2"]), row(&["2", "3", "1"])];

        let merged = union_product_ids(&rows);

        assert_eq!(merged, vec!["1", "2", "3"]);
    }

    #[test]
    fn should_union_to_empty_when_all_rows_empty() {
        let rows = vec![row(&[]), row(&[])];

        assert!(union_product_ids(&rows).is_empty());
    }
}
