use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::product::errors::ProductError;

/// JSON body returned when a product request is rejected as invalid.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain error onto the HTTP status and error body the API returns.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::EanEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.ean_empty",
            ),
            ProductError::NegativeStock => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.negative_stock",
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

    #[test]
    fn should_map_blank_ean_to_bad_request() {
        let (status, body) = ProductError::EanEmpty.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "ValidationError");
        assert_eq!(body.0.message, "product.ean_empty");
    }

    #[test]
    fn should_map_negative_stock_to_bad_request() {
        let (status, body) = ProductError::NegativeStock.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "ValidationError");
        assert_eq!(body.0.message, "product.negative_stock");
    }
}
