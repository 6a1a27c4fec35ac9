//! JSON REST handlers for the users collection and the admin flag.
//!
//! None of these routes are authenticated — any caller can promote any email
//! to admin or query admin status for any email. The flag is advisory only.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use carhub_app::ports::{OrderRepository, ReviewRepository, ServiceRepository, UserRepository};
use carhub_domain::user::User;

use crate::api::{InsertedBody, PromotedBody, UpdatedBody};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or upserting a user.
#[derive(Deserialize)]
pub struct UserRequest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserRequest {
    fn into_user(self) -> Result<User, ApiError> {
        let mut extra = self.extra;
        crate::api::strip_client_id(&mut extra);
        let mut builder = User::builder().email(self.email).extra(extra);
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(role) = self.role {
            builder = builder.role(role);
        }
        Ok(builder.build()?)
    }
}

/// Request body for the admin promotion route.
#[derive(Deserialize)]
pub struct PromoteAdminRequest {
    pub email: String,
}

/// Wire shape of the admin check.
#[derive(Serialize)]
pub struct AdminStatusBody {
    pub admin: bool,
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

/// Possible responses from the upsert endpoint.
pub enum UpdateResponse {
    Ok(Json<UpdatedBody>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the promote endpoint. The promote path never
/// upserts, so its acknowledgement carries no upsert count.
pub enum PromoteResponse {
    Ok(Json<PromotedBody>),
}

impl IntoResponse for PromoteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the admin-status endpoint.
pub enum AdminStatusResponse {
    Ok(Json<AdminStatusBody>),
}

impl IntoResponse for AdminStatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /users` — plain insert, duplicates allowed.
pub async fn create<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Json(req): Json<UserRequest>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let user = req.into_user()?;
    let created = state.user_service.register_user(user).await?;
    Ok(CreateResponse::Ok(Json(InsertedBody::new(created.id))))
}

/// `PUT /users` — upsert keyed on email.
pub async fn upsert<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Json(req): Json<UserRequest>,
) -> Result<UpdateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let user = req.into_user()?;
    let outcome = state.user_service.upsert_user(user).await?;
    Ok(UpdateResponse::Ok(Json(outcome.into())))
}

/// `PUT /users/admin` — set role=admin for the matching email.
pub async fn promote_admin<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Json(req): Json<PromoteAdminRequest>,
) -> Result<PromoteResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let outcome = state.user_service.promote_admin(&req.email).await?;
    Ok(PromoteResponse::Ok(Json(outcome.into())))
}

/// `GET /users/{email}` — report whether the matching user is an admin.
pub async fn admin_status<SR, RR, OR, UR>(
    State(state): State<AppState<SR, RR, OR, UR>>,
    Path(email): Path<String>,
) -> Result<AdminStatusResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let admin = state.user_service.is_admin(&email).await?;
    Ok(AdminStatusResponse::Ok(Json(AdminStatusBody { admin })))
}
