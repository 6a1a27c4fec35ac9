//! Shared application state for axum handlers.

use std::sync::Arc;

use carhub_app::ports::{OrderRepository, ReviewRepository, ServiceRepository, UserRepository};
use carhub_app::services::catalog_service::CatalogService;
use carhub_app::services::order_service::OrderService;
use carhub_app::services::review_service::ReviewService;
use carhub_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<SR, RR, OR, UR> {
    /// Listed-item use-cases.
    pub catalog_service: Arc<CatalogService<SR>>,
    /// Review use-cases.
    pub review_service: Arc<ReviewService<RR>>,
    /// Order use-cases.
    pub order_service: Arc<OrderService<OR>>,
    /// User/admin-flag use-cases.
    pub user_service: Arc<UserService<UR>>,
}

impl<SR, RR, OR, UR> Clone for AppState<SR, RR, OR, UR> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
            review_service: Arc::clone(&self.review_service),
            order_service: Arc::clone(&self.order_service),
            user_service: Arc::clone(&self.user_service),
        }
    }
}

impl<SR, RR, OR, UR> AppState<SR, RR, OR, UR>
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        catalog_service: CatalogService<SR>,
        review_service: ReviewService<RR>,
        order_service: OrderService<OR>,
        user_service: UserService<UR>,
    ) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
            review_service: Arc::new(review_service),
            order_service: Arc::new(order_service),
            user_service: Arc::new(user_service),
        }
    }
}
