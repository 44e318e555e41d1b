use poem_openapi::Object;

use business::domain::wishlist::model::Wishlist;

#[derive(Debug, Clone, Object)]
pub struct AddProductRequest {
    /// Product identifier to add (cannot be blank)
    pub product_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct WishlistResponse {
    /// Owner of the wishlist
    pub user_id: String,
    /// Product identifiers in insertion order
    pub product_ids: Vec<String>,
}

impl From<Wishlist> for WishlistResponse {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            user_id: wishlist.user_id().as_str().to_string(),
            product_ids: wishlist
                .items()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier found in the wishlist
    pub product_id: String,
}
