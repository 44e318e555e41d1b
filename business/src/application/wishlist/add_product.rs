use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::add_product::{AddProductParams, AddProductUseCase};

pub struct AddProductUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Wishlist, WishlistError> {
        self.logger.info(&format!(
            "Adding product {} to wishlist of user {}",
            params.product_id, params.user_id
        ));

        let mut wishlist = match self.repository.find_by_user_id(&params.user_id).await? {
            Some(wishlist) => wishlist,
            None => Wishlist::create(params.user_id.clone())?,
        };

        wishlist.add_product(params.product_id)?;
        let saved = self.repository.save(&wishlist).await?;

        self.logger.info(&format!(
            "Wishlist of user {} now holds {} products",
            params.user_id,
            saved.len()
        ));
        Ok(saved)
    }
}
