//! Order service — use-cases for placing and cancelling orders.

use carhub_domain::error::CarHubError;
use carhub_domain::id::OrderId;
use carhub_domain::order::Order;
use carhub_domain::outcome::DeleteOutcome;

use crate::ports::OrderRepository;

/// Application service for the orders collection.
pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Place a new order after validating domain invariants.
    ///
    /// The email is not checked against the users collection; it is an
    /// advisory key only.
    ///
    /// # Errors
    ///
    /// Returns [`CarHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn place_order(&self, order: Order) -> Result<Order, CarHubError> {
        order.validate()?;
        tracing::debug!(order = %order.id, email = %order.email, "placing order");
        self.repo.create(order).await
    }

    /// List every order placed under the given email.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn orders_for(&self, email: &str) -> Result<Vec<Order>, CarHubError> {
        self.repo.find_by_email(email).await
    }

    /// Cancel (delete) an order by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn cancel_order(&self, id: OrderId) -> Result<DeleteOutcome, CarHubError> {
        tracing::debug!(order = %id, "cancelling order");
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carhub_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryOrderRepo {
        store: Mutex<HashMap<OrderId, Order>>,
    }

    impl OrderRepository for InMemoryOrderRepo {
        fn create(&self, order: Order) -> impl Future<Output = Result<Order, CarHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(order.id, order.clone());
            async { Ok(order) }
        }

        fn find_by_email(
            &self,
            email: &str,
        ) -> impl Future<Output = Result<Vec<Order>, CarHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Order> = store
                .values()
                .filter(|order| order.email == email)
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: OrderId,
        ) -> impl Future<Output = Result<DeleteOutcome, CarHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let deleted = u64::from(store.remove(&id).is_some());
            async move {
                Ok(DeleteOutcome {
                    deleted_count: deleted,
                })
            }
        }
    }

    fn make_service() -> OrderService<InMemoryOrderRepo> {
        OrderService::new(InMemoryOrderRepo::default())
    }

    fn order_for(email: &str) -> Order {
        Order::builder().email(email).build().unwrap()
    }

    #[tokio::test]
    async fn should_place_order_when_valid() {
        let svc = make_service();
        let order = order_for("ada@example.com");
        let id = order.id;

        let placed = svc.place_order(order).await.unwrap();
        assert_eq!(placed.id, id);
    }

    #[tokio::test]
    async fn should_reject_order_without_email() {
        let svc = make_service();
        let mut order = order_for("ada@example.com");
        order.email = String::new();

        let result = svc.place_order(order).await;
        assert!(matches!(
            result,
            Err(CarHubError::Validation(ValidationError::EmptyEmail))
        ));
    }

    #[tokio::test]
    async fn should_only_return_orders_matching_email() {
        let svc = make_service();
        svc.place_order(order_for("ada@example.com")).await.unwrap();
        svc.place_order(order_for("ada@example.com")).await.unwrap();
        svc.place_order(order_for("grace@example.com"))
            .await
            .unwrap();

        let mine = svc.orders_for("ada@example.com").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|order| order.email == "ada@example.com"));

        let none = svc.orders_for("nobody@example.com").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn should_report_cancelled_count() {
        let svc = make_service();
        let order = order_for("ada@example.com");
        let id = order.id;
        svc.place_order(order).await.unwrap();

        let outcome = svc.cancel_order(id).await.unwrap();
        assert_eq!(outcome.deleted_count, 1);

        let outcome = svc.cancel_order(id).await.unwrap();
        assert_eq!(outcome.deleted_count, 0);
    }
}
