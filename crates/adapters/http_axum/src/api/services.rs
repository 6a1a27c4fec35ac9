//! JSON REST handlers for the services collection (listed items).

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use carhub_app::ports::{OrderRepository, ReviewRepository, ServiceRepository, UserRepository};
use carhub_domain::error::ValidationError;
use carhub_domain::id::ServiceId;
use carhub_domain::service::Service;

use crate::api::{DeletedBody, InsertedBody};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for listing a new service.
#[derive(Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Service>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint. A missing document is an `Ok`
/// with a JSON `null` body, never an error.
pub enum GetResponse {
    Ok(Json<Option<Service>>),
}

impl IntoResponse for GetResponse {
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

/// `GET /services`
pub async fn list<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
) -> Result<ListResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let services = state.catalog_service.list_services().await?;
    Ok(ListResponse::Ok(Json(services)))
}

/// `GET /services/{id}`
pub async fn get<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let id = ServiceId::from_str(&id).map_err(|_| ValidationError::InvalidIdentifier)?;
    let service = state.catalog_service.find_service(id).await?;
    Ok(GetResponse::Ok(Json(service)))
}

/// `POST /services`
pub async fn create<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Json(req): Json<CreateServiceRequest>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let mut extra = req.extra;
    crate::api::strip_client_id(&mut extra);
    let mut builder = Service::builder().name(req.name).extra(extra);
    if let Some(description) = req.description {
        builder = builder.description(description);
    }
    if let Some(price) = req.price {
        builder = builder.price(price);
    }
    if let Some(img) = req.img {
        builder = builder.img(img);
    }

    let service = builder.build()?;
    let created = state.catalog_service.create_service(service).await?;
    Ok(CreateResponse::Ok(Json(InsertedBody::new(created.id))))
}

/// `DELETE /services/{id}`
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
    let id = ServiceId::from_str(&id).map_err(|_| ValidationError::InvalidIdentifier)?;
    let outcome = state.catalog_service.delete_service(id).await?;
    Ok(DeleteResponse::Ok(Json(outcome.into())))
}
