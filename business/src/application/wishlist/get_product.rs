use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_product::{GetProductParams, GetProductUseCase};

pub struct GetProductUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductUseCase for GetProductUseCaseImpl {
    async fn execute(&self, params: GetProductParams) -> Result<Wishlist, WishlistError> {
        self.logger.info(&format!(
            "Looking up product {} in wishlist of user {}",
            params.product_id, params.user_id
        ));

        self.repository
            .find_product_for_user_wishlist(&params.user_id, &params.product_id)
            .await?
            .ok_or(WishlistError::ProductNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{ProductId, UserId};
    use mockall::mock;

    mock! {
        pub WishlistRepo {}

        #[async_trait]
        impl WishlistRepository for WishlistRepo {
            async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Wishlist>, RepositoryError>;
            async fn find_product_for_user_wishlist(&self, user_id: &UserId, product_id: &ProductId) -> Result<Option<Wishlist>, RepositoryError>;
            async fn save(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError>;
            async fn remove(&self, user_id: &UserId, product_id: &ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_wishlist_when_product_present() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_product_for_user_wishlist()
            .returning(|_, _| {
                Ok(Some(
                    Wishlist::rehydrate(UserId::new("5"), vec![ProductId::new("99")]).unwrap(),
                ))
            });

        let use_case = GetProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductParams {
                user_id: UserId::new("5"),
                product_id: ProductId::new("99"),
            })
            .await;

        assert!(result.unwrap().contains(&ProductId::new("99")));
    }

    #[tokio::test]
    async fn should_fail_with_product_not_found_when_absent() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_product_for_user_wishlist()
            .returning(|_, _| Ok(None));

        let use_case = GetProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductParams {
                user_id: UserId::new("5"),
                product_id: ProductId::new("99"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::ProductNotFound
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_product_for_user_wishlist()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = GetProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductParams {
                user_id: UserId::new("5"),
                product_id: ProductId::new("99"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::Repository(_)));
    }
}
