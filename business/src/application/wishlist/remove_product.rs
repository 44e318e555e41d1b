use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};

pub struct RemoveProductUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<(), WishlistError> {
        self.logger.info(&format!(
            "Removing product {} from wishlist of user {}",
            params.product_id, params.user_id
        ));

        let mut wishlist = self
            .repository
            .find_by_user_id(&params.user_id)
            .await?
            .ok_or(WishlistError::NotFound)?;

        // The aggregate treats removing an absent product as a no-op; this
        // explicit remove-by-id API surfaces absence to the caller instead.
        let was_present = wishlist.contains(&params.product_id);
        wishlist.remove_product(&params.product_id)?;
        if !was_present {
            return Err(WishlistError::ProductNotFound);
        }

        self.repository
            .remove(&params.user_id, &params.product_id)
            .await?;

        self.logger.info(&format!(
            "Product {} removed from wishlist of user {}",
            params.product_id, params.user_id
        ));
        Ok(())
    }
}
