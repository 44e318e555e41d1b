use std::sync::Arc;

use logger::TracingLogger;
use persistence::wishlist::repository::WishlistRepositoryPostgres;

use business::application::wishlist::add_product::AddProductUseCaseImpl;
use business::application::wishlist::get_product::GetProductUseCaseImpl;
use business::application::wishlist::get_wishlist::GetWishlistUseCaseImpl;
use business::application::wishlist::remove_product::RemoveProductUseCaseImpl;
use business::domain::wishlist::repository::WishlistRepository;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub wishlist_api: crate::api::wishlist::routes::WishlistApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let repository: Arc<dyn WishlistRepository> =
            Arc::new(WishlistRepositoryPostgres::new(pool));

        // Wishlist use cases
        let add_use_case = Arc::new(AddProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let remove_use_case = Arc::new(RemoveProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetWishlistUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductUseCaseImpl {
            repository,
            logger,
        });

        let wishlist_api = crate::api::wishlist::routes::WishlistApi::new(
            add_use_case,
            remove_use_case,
            get_use_case,
            get_product_use_case,
        );

        Ok(Self {
            health_api,
            wishlist_api,
        })
    }
}
