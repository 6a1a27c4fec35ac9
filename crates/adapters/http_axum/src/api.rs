//! JSON REST API handler modules and shared wire types.

#[allow(clippy::missing_errors_doc)]
pub mod orders;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod services;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{delete, get, post, put};
use serde::Serialize;

use carhub_app::ports::{OrderRepository, ReviewRepository, ServiceRepository, UserRepository};
use carhub_domain::outcome::{DeleteOutcome, UpdateOutcome};

use crate::state::AppState;

/// Drop a client-supplied `_id` from an extra-fields bag. The identifier is
/// always generated server-side; a smuggled one would serialize as a second
/// `_id` key and shadow the real one in last-key-wins parsers.
fn strip_client_id(extra: &mut serde_json::Map<String, serde_json::Value>) {
    extra.remove("_id");
}

/// Wire shape of an insert acknowledgement.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedBody {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertedBody {
    fn new(id: impl ToString) -> Self {
        Self {
            acknowledged: true,
            inserted_id: id.to_string(),
        }
    }
}

/// Wire shape of a delete acknowledgement.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedBody {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteOutcome> for DeletedBody {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            acknowledged: true,
            deleted_count: outcome.deleted_count,
        }
    }
}

/// Wire shape of an update/upsert acknowledgement.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedBody {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
}

impl From<UpdateOutcome> for UpdatedBody {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            acknowledged: true,
            matched_count: outcome.matched_count,
            modified_count: outcome.modified_count,
            upserted_count: outcome.upserted_count,
        }
    }
}

/// Wire shape of an update acknowledgement on a path with no upsert.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotedBody {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateOutcome> for PromotedBody {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            acknowledged: true,
            matched_count: outcome.matched_count,
            modified_count: outcome.modified_count,
        }
    }
}

/// Build the API router.
///
/// Paths mirror the public surface of the original listing site verbatim,
/// including the odd `/myOrders/{email}` and `/deleteOrder/{id}` spellings.
pub fn routes<SR, RR, OR, UR>() -> Router<AppState<SR, RR, OR, UR>>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        // Services (listed items)
        .route(
            "/services",
            get(services::list::<SR, RR, OR, UR>).post(services::create::<SR, RR, OR, UR>),
        )
        .route(
            "/services/{id}",
            get(services::get::<SR, RR, OR, UR>).delete(services::delete::<SR, RR, OR, UR>),
        )
        // Reviews
        .route(
            "/reviews",
            get(reviews::list::<SR, RR, OR, UR>).post(reviews::create::<SR, RR, OR, UR>),
        )
        // Orders
        .route("/orders", post(orders::create::<SR, RR, OR, UR>))
        .route(
            "/myOrders/{email}",
            get(orders::list_by_email::<SR, RR, OR, UR>),
        )
        .route(
            "/deleteOrder/{id}",
            delete(orders::delete::<SR, RR, OR, UR>),
        )
        // Users
        .route(
            "/users",
            post(users::create::<SR, RR, OR, UR>).put(users::upsert::<SR, RR, OR, UR>),
        )
        .route("/users/admin", put(users::promote_admin::<SR, RR, OR, UR>))
        .route("/users/{email}", get(users::admin_status::<SR, RR, OR, UR>))
}
