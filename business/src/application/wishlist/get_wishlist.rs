use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_wishlist::{GetWishlistParams, GetWishlistUseCase};

pub struct GetWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistUseCase for GetWishlistUseCaseImpl {
    async fn execute(&self, params: GetWishlistParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Getting wishlist of user {}", params.user_id));

        // An unknown user simply has an empty wishlist; listing never fails
        // with not-found.
        let wishlist = match self.repository.find_by_user_id(&params.user_id).await? {
            Some(wishlist) => wishlist,
            None => Wishlist::create(params.user_id)?,
        };

        self.logger
            .info(&format!("Retrieved {} products", wishlist.len()));
        Ok(wishlist)
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
    async fn should_return_stored_wishlist() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_find_by_user_id().returning(|_| {
            Ok(Some(
                Wishlist::rehydrate(
                    UserId::new("42"),
                    vec![ProductId::new("1"), ProductId::new("2")],
                )
                .unwrap(),
            ))
        });

        let use_case = GetWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetWishlistParams {
                user_id: UserId::new("42"),
            })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_wishlist_for_unknown_user() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_find_by_user_id().returning(|_| Ok(None));

        let use_case = GetWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetWishlistParams {
                user_id: UserId::new("unknown"),
            })
            .await;

        let wishlist = result.unwrap();
        assert!(wishlist.is_empty());
        assert_eq!(wishlist.user_id().as_str(), "unknown");
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_user_id()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = GetWishlistUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetWishlistParams {
                user_id: UserId::new("42"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), WishlistError::Repository(_)));
    }
}
