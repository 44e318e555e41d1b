use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            WishlistError::UserIdRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "wishlist.user_id_required",
            ),
            WishlistError::ProductIdRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "wishlist.product_id_required",
            ),
            WishlistError::MaxLimitExceeded => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "BusinessRuleViolation",
                "wishlist.max_limit_exceeded",
            ),
            WishlistError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "wishlist.not_found"),
            WishlistError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "wishlist.product_not_found",
            ),
            WishlistError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_limit_violation_to_unprocessable_entity() {
        let (status, json) = WishlistError::MaxLimitExceeded.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "wishlist.max_limit_exceeded");
    }

    #[test]
    fn should_map_absence_errors_to_not_found() {
        let (status, _) = WishlistError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = WishlistError::ProductNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, _) = WishlistError::ProductIdRequired.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_repository_errors_to_internal_error() {
        let (status, json) =
            WishlistError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
