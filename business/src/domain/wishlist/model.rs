use crate::domain::shared::value_objects::{ProductId, UserId};

use super::errors::WishlistError;

/// Wishlist aggregate root.
///
/// Owns its product list exclusively: uniqueness, insertion order and the
/// [`Wishlist::MAX_ITEMS`] cap are enforced here and callers only ever see
/// snapshots. Identity (and equality) is the `user_id` alone.
#[derive(Debug, Clone)]
pub struct Wishlist {
    user_id: UserId,
    product_ids: Vec<ProductId>,
}

impl Wishlist {
    pub const MAX_ITEMS: usize = 20;

    /// Creates an empty wishlist for the given user.
    pub fn create(user_id: UserId) -> Result<Self, WishlistError> {
        Self::build(user_id, Vec::new())
    }

    /// Rebuilds a wishlist from persisted state.
    ///
    /// Duplicate entries are dropped (first occurrence wins); a deduplicated
    /// list larger than [`Wishlist::MAX_ITEMS`] is rejected rather than
    /// silently truncated.
    pub fn rehydrate(user_id: UserId, items: Vec<ProductId>) -> Result<Self, WishlistError> {
        Self::build(user_id, items)
    }

    fn build(user_id: UserId, items: Vec<ProductId>) -> Result<Self, WishlistError> {
        if user_id.is_blank() {
            return Err(WishlistError::UserIdRequired);
        }

        let mut product_ids: Vec<ProductId> = Vec::new();
        for item in items {
            if !product_ids.contains(&item) {
                product_ids.push(item);
            }
        }

        if product_ids.len() > Self::MAX_ITEMS {
            return Err(WishlistError::MaxLimitExceeded);
        }

        Ok(Self {
            user_id,
            product_ids,
        })
    }

    /// Adds a product, preserving insertion order.
    ///
    /// Adding a product that is already present succeeds without touching the
    /// list and without running the size check.
    pub fn add_product(&mut self, product_id: ProductId) -> Result<(), WishlistError> {
        if product_id.is_blank() {
            return Err(WishlistError::ProductIdRequired);
        }
        if self.product_ids.contains(&product_id) {
            return Ok(());
        }
        if self.product_ids.len() >= Self::MAX_ITEMS {
            return Err(WishlistError::MaxLimitExceeded);
        }
        self.product_ids.push(product_id);
        Ok(())
    }

    /// Removes a product. Removing a product that is not present is a silent
    /// no-op at this level; surfacing absence to callers is the service
    /// layer's policy.
    pub fn remove_product(&mut self, product_id: &ProductId) -> Result<(), WishlistError> {
        if product_id.is_blank() {
            return Err(WishlistError::ProductIdRequired);
        }
        self.product_ids.retain(|id| id != product_id);
        Ok(())
    }

    /// Independent snapshot of the product list; mutating it cannot bypass
    /// the aggregate's invariants.
    pub fn items(&self) -> Vec<ProductId> {
        self.product_ids.clone()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.product_ids.contains(product_id)
    }

    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

impl PartialEq for Wishlist {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for Wishlist {}
