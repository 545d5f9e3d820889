//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use orders_types::{
    AddLineRequest, AppError, CreateOrderRequest, OrderId, OrderRepository, PaymentGateway,
    ProductId,
};

use crate::{OrderService, PayOrderUseCase};

/// Application state shared across handlers.
pub struct AppState<R: OrderRepository, G: PaymentGateway> {
    pub service: OrderService<R>,
    pub pay_order: PayOrderUseCase<R, G>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Open a new order.
#[tracing::instrument(skip(state), fields(customer_id = %req.customer_id))]
pub async fn create_order<R: OrderRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state.service.create_order(req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Get order by ID.
#[tracing::instrument(skip(state), fields(order_id = %id))]
pub async fn get_order<R: OrderRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id: OrderId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid order ID".into()))?;

    let order = state.service.get_order(order_id).await?;
    Ok(Json(order))
}

/// Append a line item to an order.
#[tracing::instrument(skip(state), fields(order_id = %id, product_id = %req.product_id))]
pub async fn add_line<R: OrderRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
    Path(id): Path<String>,
    Json(req): Json<AddLineRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id: OrderId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid order ID".into()))?;

    let order = state.service.add_line(order_id, req).await?;
    Ok(Json(order))
}

/// Remove all lines for a product from an order.
#[tracing::instrument(skip(state), fields(order_id = %id, product_id = %product_id))]
pub async fn remove_line<R: OrderRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
    Path((id, product_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id: OrderId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid order ID".into()))?;
    let product_id: ProductId = product_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))?;

    let order = state.service.remove_line(order_id, product_id).await?;
    Ok(Json(order))
}

/// Attempt payment for an order.
///
/// Always answers 200 with a `PaymentResult` body; failure is expressed
/// in the result, not the status code.
#[tracing::instrument(skip(state), fields(order_id = %id))]
pub async fn pay_order<R: OrderRepository, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, G>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id: OrderId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid order ID".into()))?;

    let result = state.pay_order.execute(order_id).await;
    Ok(Json(result))
}
