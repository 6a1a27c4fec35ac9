//! Catalog service — use-cases for the listed items.

use carhub_domain::error::CarHubError;
use carhub_domain::id::ServiceId;
use carhub_domain::outcome::DeleteOutcome;
use carhub_domain::service::Service;

use crate::ports::ServiceRepository;

/// Application service for the services collection.
///
/// There is no update use-case: listed items are created, read, and deleted
/// only.
pub struct CatalogService<R> {
    repo: R,
}

impl<R: ServiceRepository> CatalogService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new listed item after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CarHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_service(&self, service: Service) -> Result<Service, CarHubError> {
        service.validate()?;
        tracing::debug!(service = %service.id, "creating service");
        self.repo.create(service).await
    }

    /// Look up a listed item by id. A missing item is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_service(&self, id: ServiceId) -> Result<Option<Service>, CarHubError> {
        self.repo.get_by_id(id).await
    }

    /// List every item in the catalog.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(&self) -> Result<Vec<Service>, CarHubError> {
        self.repo.get_all().await
    }

    /// Delete a listed item by id, reporting how many documents went away.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_service(&self, id: ServiceId) -> Result<DeleteOutcome, CarHubError> {
        tracing::debug!(service = %id, "deleting service");
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

    struct InMemoryServiceRepo {
        store: Mutex<HashMap<ServiceId, Service>>,
    }

    impl Default for InMemoryServiceRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
            }
        }
    }

    impl ServiceRepository for InMemoryServiceRepo {
        fn create(
            &self,
            service: Service,
        ) -> impl Future<Output = Result<Service, CarHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(service.id, service.clone());
            async { Ok(service) }
        }

        fn get_by_id(
            &self,
            id: ServiceId,
        ) -> impl Future<Output = Result<Option<Service>, CarHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, CarHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Service> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: ServiceId,
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

    fn make_service() -> CatalogService<InMemoryServiceRepo> {
        CatalogService::new(InMemoryServiceRepo::default())
    }

    fn valid_service() -> Service {
        Service::builder()
            .name("1965 Mustang")
            .price(12000.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_service_when_valid() {
        let svc = make_service();
        let service = valid_service();
        let id = service.id;

        let created = svc.create_service(service).await.unwrap();
        assert_eq!(created.id, id);

        let fetched = svc.find_service(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "1965 Mustang");
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let mut service = valid_service();
        service.name = String::new();

        let result = svc.create_service(service).await;
        assert!(matches!(
            result,
            Err(CarHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_return_none_when_service_missing() {
        let svc = make_service();
        let result = svc.find_service(ServiceId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_services() {
        let svc = make_service();
        svc.create_service(valid_service()).await.unwrap();
        svc.create_service(Service::builder().name("DeLorean DMC-12").build().unwrap())
            .await
            .unwrap();

        let all = svc.list_services().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_report_deleted_count() {
        let svc = make_service();
        let service = valid_service();
        let id = service.id;
        svc.create_service(service).await.unwrap();

        let outcome = svc.delete_service(id).await.unwrap();
        assert_eq!(outcome.deleted_count, 1);

        // Idempotent absence: a second delete matches nothing.
        let outcome = svc.delete_service(id).await.unwrap();
        assert_eq!(outcome.deleted_count, 0);

        let result = svc.find_service(id).await.unwrap();
        assert!(result.is_none());
    }
}
