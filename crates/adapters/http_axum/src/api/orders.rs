//! JSON REST handlers for the orders collection.
//!
//! The original site spelled these routes `/orders`, `/myOrders/{email}`,
//! and `/deleteOrder/{id}`; the spellings are kept for client compatibility.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use carhub_app::ports::{OrderRepository, ReviewRepository, ServiceRepository, UserRepository};
use carhub_domain::error::ValidationError;
use carhub_domain::id::OrderId;
use carhub_domain::order::Order;

use crate::api::{DeletedBody, InsertedBody};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for placing an order.
#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub email: String,
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Possible responses from the list-by-email endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Order>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<InsertedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeletedBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /orders`
pub async fn create<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let mut extra = req.extra;
    crate::api::strip_client_id(&mut extra);
    let order = Order::builder().email(req.email).extra(extra).build()?;
    let placed = state.order_service.place_order(order).await?;
    Ok(CreateResponse::Ok(Json(InsertedBody::new(placed.id))))
}

/// `GET /myOrders/{email}`
pub async fn list_by_email<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Path(email): Path<String>,
) -> Result<ListResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let orders = state.order_service.orders_for(&email).await?;
    Ok(ListResponse::Ok(Json(orders)))
}

/// `DELETE /deleteOrder/{id}`
pub async fn delete<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let id = OrderId::from_str(&id).map_err(|_| ValidationError::InvalidIdentifier)?;
    let outcome = state.order_service.cancel_order(id).await?;
    Ok(DeleteResponse::Ok(Json(outcome.into())))
}
