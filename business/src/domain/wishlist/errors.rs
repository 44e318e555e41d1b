#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.user_id_required")]
    UserIdRequired,
    #[error("wishlist.product_id_required")]
    ProductIdRequired,
    #[error("wishlist.max_limit_exceeded")]
    MaxLimitExceeded,
    #[error("wishlist.not_found")]
    NotFound,
    #[error("wishlist.product_not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
