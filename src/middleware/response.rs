use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Success body. Keyed responses render as `{ "<key>": data }`.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub key: Option<&'static str>,
    pub data: T,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with the data wrapped under `key`.
    pub fn success(key: &'static str, data: T) -> Self {
        Self {
            key: Some(key),
            data,
            status_code: StatusCode::OK,
        }
    }

    /// 201 with the data wrapped under `key`.
    pub fn created(key: &'static str, data: T) -> Self {
        Self {
            key: Some(key),
            data,
            status_code: StatusCode::CREATED,
        }
    }

    /// Serialize `data` as the whole body.
    pub fn body(data: T, status_code: StatusCode) -> Self {
        Self {
            key: None,
            data,
            status_code,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return ApiError::internal_server_error("Failed to serialize response data")
                    .into_response();
            }
        };

        let body = match self.key {
            Some(key) => {
                let mut envelope = Map::with_capacity(1);
                envelope.insert(key.to_string(), data_value);
                Value::Object(envelope)
            }
            None => data_value,
        };

        (self.status_code, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_of(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn keyed_response_wraps_data() {
        let response = ApiResponse::created("deleted", "c1").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_of(response).await, json!({ "deleted": "c1" }));
    }

    #[tokio::test]
    async fn body_response_is_unwrapped() {
        let response = ApiResponse::body(json!({ "token": "t" }), StatusCode::OK).into_response();
        assert_eq!(body_of(response).await, json!({ "token": "t" }));
    }
}
