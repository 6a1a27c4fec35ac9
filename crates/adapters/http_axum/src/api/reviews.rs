//! JSON REST handlers for the reviews collection.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use carhub_app::ports::{OrderRepository, ReviewRepository, ServiceRepository, UserRepository};
use carhub_domain::review::Review;

use crate::api::InsertedBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for submitting a review. Entirely free-form; every field is
/// optional.
#[derive(Deserialize)]
pub struct CreateReviewRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Review>>),
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

/// `GET /reviews`
pub async fn list<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
) -> Result<ListResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let reviews = state.review_service.list_reviews().await?;
    Ok(ListResponse::Ok(Json(reviews)))
}

/// `POST /reviews`
pub async fn create<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let mut extra = req.extra;
    crate::api::strip_client_id(&mut extra);
    let review = Review {
        name: req.name,
        rating: req.rating,
        description: req.description,
        extra,
        ..Review::default()
    };
    let stored = state.review_service.submit_review(review).await?;
    Ok(CreateResponse::Ok(Json(InsertedBody::new(stored.id))))
}
