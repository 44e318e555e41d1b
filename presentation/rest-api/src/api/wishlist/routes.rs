use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::{ProductId, UserId};
use business::domain::wishlist::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::wishlist::use_cases::get_product::{GetProductParams, GetProductUseCase};
use business::domain::wishlist::use_cases::get_wishlist::{GetWishlistParams, GetWishlistUseCase};
use business::domain::wishlist::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ServiceBearer;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{AddProductRequest, ProductResponse, WishlistResponse};

pub struct WishlistApi {
    add_use_case: Arc<dyn AddProductUseCase>,
    remove_use_case: Arc<dyn RemoveProductUseCase>,
    get_use_case: Arc<dyn GetWishlistUseCase>,
    get_product_use_case: Arc<dyn GetProductUseCase>,
}

impl WishlistApi {
    pub fn new(
        add_use_case: Arc<dyn AddProductUseCase>,
        remove_use_case: Arc<dyn RemoveProductUseCase>,
        get_use_case: Arc<dyn GetWishlistUseCase>,
        get_product_use_case: Arc<dyn GetProductUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            get_use_case,
            get_product_use_case,
        }
    }
}

/// Wishlist management API
///
/// Endpoints for managing a user's wishlist of products.
#[OpenApi]
impl WishlistApi {
    /// Add a product to the user's wishlist
    ///
    /// Creates the wishlist on first use. Adding a product that is already
    /// present is idempotent. A wishlist holds at most 20 products.
    #[oai(
        path = "/v1/wishlists/:user_id/product",
        method = "post",
        tag = "ApiTags::Wishlists"
    )]
    async fn add_product(
        &self,
        user_id: Path<String>,
        body: Json<AddProductRequest>,
        _auth: ServiceBearer,
    ) -> AddProductWishlistResponse {
        let params = AddProductParams {
            user_id: UserId::new(user_id.0),
            product_id: ProductId::new(body.0.product_id),
        };

        match self.add_use_case.execute(params).await {
            Ok(wishlist) => AddProductWishlistResponse::Created(Json(wishlist.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddProductWishlistResponse::BadRequest(json),
                    422 => AddProductWishlistResponse::LimitReached(json),
                    _ => AddProductWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the user's wishlist
    ///
    /// Fails with 404 when the user has no wishlist or the product is not in
    /// it.
    #[oai(
        path = "/v1/wishlists/:user_id/product/:product_id",
        method = "delete",
        tag = "ApiTags::Wishlists"
    )]
    async fn remove_product(
        &self,
        user_id: Path<String>,
        product_id: Path<String>,
        _auth: ServiceBearer,
    ) -> RemoveProductWishlistResponse {
        let params = RemoveProductParams {
            user_id: UserId::new(user_id.0),
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveProductWishlistResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveProductWishlistResponse::BadRequest(json),
                    404 => RemoveProductWishlistResponse::NotFound(json),
                    _ => RemoveProductWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the user's wishlist
    ///
    /// An unknown user gets an empty wishlist, never a 404.
    #[oai(
        path = "/v1/wishlists/:user_id",
        method = "get",
        tag = "ApiTags::Wishlists"
    )]
    async fn get_wishlist(
        &self,
        user_id: Path<String>,
        _auth: ServiceBearer,
    ) -> GetWishlistApiResponse {
        let params = GetWishlistParams {
            user_id: UserId::new(user_id.0),
        };

        match self.get_use_case.execute(params).await {
            Ok(wishlist) => GetWishlistApiResponse::Ok(Json(wishlist.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetWishlistApiResponse::BadRequest(json),
                    _ => GetWishlistApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Check that a product is in the user's wishlist
    #[oai(
        path = "/v1/wishlists/:user_id/product/:product_id",
        method = "get",
        tag = "ApiTags::Wishlists"
    )]
    async fn get_product(
        &self,
        user_id: Path<String>,
        product_id: Path<String>,
        _auth: ServiceBearer,
    ) -> GetProductWishlistResponse {
        let params = GetProductParams {
            user_id: UserId::new(user_id.0),
            product_id: ProductId::new(product_id.0.clone()),
        };

        match self.get_product_use_case.execute(params).await {
            Ok(_) => GetProductWishlistResponse::Ok(Json(ProductResponse {
                product_id: product_id.0,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductWishlistResponse::NotFound(json),
                    _ => GetProductWishlistResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductWishlistResponse {
    #[oai(status = 201)]
    Created(Json<WishlistResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    LimitReached(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductWishlistResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWishlistApiResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
