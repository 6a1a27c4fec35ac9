//! Review service — use-cases for customer feedback.

use carhub_domain::error::CarHubError;
use carhub_domain::review::Review;

use crate::ports::ReviewRepository;

/// Application service for the reviews collection.
///
/// Reviews are free-form: no invariants to check, nothing to delete.
pub struct ReviewService<R> {
    repo: R,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a submitted review.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn submit_review(&self, review: Review) -> Result<Review, CarHubError> {
        tracing::debug!(review = %review.id, "storing review");
        self.repo.create(review).await
    }

    /// List every stored review.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, CarHubError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carhub_domain::id::ReviewId;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryReviewRepo {
        store: Mutex<HashMap<ReviewId, Review>>,
    }

    impl ReviewRepository for InMemoryReviewRepo {
        fn create(&self, review: Review) -> impl Future<Output = Result<Review, CarHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(review.id, review.clone());
            async { Ok(review) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, CarHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Review> = store.values().cloned().collect();
            async { Ok(result) }
        }
    }

    #[tokio::test]
    async fn should_store_and_list_reviews() {
        let svc = ReviewService::new(InMemoryReviewRepo::default());

        let review: Review =
            serde_json::from_str(r#"{"name":"Ada","rating":5,"description":"Great car"}"#).unwrap();
        svc.submit_review(review).await.unwrap();

        let all = svc.list_reviews().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_reviews() {
        let svc = ReviewService::new(InMemoryReviewRepo::default());
        assert!(svc.list_reviews().await.unwrap().is_empty());
    }
}
