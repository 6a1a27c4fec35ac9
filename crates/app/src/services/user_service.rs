//! User service — use-cases for account records and the admin flag.

use carhub_domain::error::CarHubError;
use carhub_domain::outcome::UpdateOutcome;
use carhub_domain::user::{ADMIN_ROLE, User};

use crate::ports::UserRepository;

/// Application service for the users collection.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a user via plain insert. Duplicate emails are allowed on
    /// this path; only [`Self::upsert_user`] keys on email.
    ///
    /// # Errors
    ///
    /// Returns [`CarHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn register_user(&self, user: User) -> Result<User, CarHubError> {
        user.validate()?;
        tracing::debug!(email = %user.email, "registering user");
        self.repo.create(user).await
    }

    /// Upsert a user keyed on email: update the matching document's fields,
    /// or insert when no user with that email exists.
    ///
    /// # Errors
    ///
    /// Returns [`CarHubError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn upsert_user(&self, user: User) -> Result<UpdateOutcome, CarHubError> {
        user.validate()?;
        tracing::debug!(email = %user.email, "upserting user");
        self.repo.upsert(user).await
    }

    /// Promote the user matching `email` to admin. Matches nothing when the
    /// email is unknown (no upsert on this path).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn promote_admin(&self, email: &str) -> Result<UpdateOutcome, CarHubError> {
        tracing::debug!(%email, "promoting user to admin");
        self.repo.set_role(email, ADMIN_ROLE).await
    }

    /// Whether the user matching `email` carries the admin role. Unknown
    /// emails are simply not admins.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn is_admin(&self, email: &str) -> Result<bool, CarHubError> {
        let user = self.repo.find_by_email(email).await?;
        Ok(user.is_some_and(|user| user.is_admin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carhub_domain::error::ValidationError;
    use std::future::Future;
    use std::sync::Mutex;

    /// Backing store is a plain `Vec` so the duplicate-insert path behaves
    /// like the schema-less collection it models.
    #[derive(Default)]
    struct InMemoryUserRepo {
        store: Mutex<Vec<User>>,
    }

    impl UserRepository for InMemoryUserRepo {
        fn create(&self, user: User) -> impl Future<Output = Result<User, CarHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.push(user.clone());
            async { Ok(user) }
        }

        fn upsert(&self, user: User) -> impl Future<Output = Result<UpdateOutcome, CarHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let mut matched = 0;
            for existing in store.iter_mut().filter(|u| u.email == user.email) {
                existing.name.clone_from(&user.name);
                existing.role.clone_from(&user.role);
                existing.extra.clone_from(&user.extra);
                matched += 1;
            }
            let outcome = if matched == 0 {
                store.push(user);
                UpdateOutcome::upserted()
            } else {
                UpdateOutcome::matched(matched)
            };
            async move { Ok(outcome) }
        }

        fn set_role(
            &self,
            email: &str,
            role: &str,
        ) -> impl Future<Output = Result<UpdateOutcome, CarHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let mut matched = 0;
            for existing in store.iter_mut().filter(|u| u.email == email) {
                existing.role = Some(role.to_string());
                matched += 1;
            }
            async move { Ok(UpdateOutcome::matched(matched)) }
        }

        fn find_by_email(
            &self,
            email: &str,
        ) -> impl Future<Output = Result<Option<User>, CarHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|u| u.email == email).cloned();
            async { Ok(result) }
        }
    }

    fn make_service() -> UserService<InMemoryUserRepo> {
        UserService::new(InMemoryUserRepo::default())
    }

    fn user(email: &str) -> User {
        User::builder().email(email).name("Ada").build().unwrap()
    }

    #[tokio::test]
    async fn should_reject_user_without_email() {
        let svc = make_service();
        let mut invalid = user("ada@example.com");
        invalid.email = String::new();

        let result = svc.register_user(invalid).await;
        assert!(matches!(
            result,
            Err(CarHubError::Validation(ValidationError::EmptyEmail))
        ));
    }

    #[tokio::test]
    async fn should_insert_on_upsert_when_email_unknown() {
        let svc = make_service();
        let outcome = svc.upsert_user(user("ada@example.com")).await.unwrap();
        assert_eq!(outcome.upserted_count, 1);
        assert_eq!(outcome.matched_count, 0);
    }

    #[tokio::test]
    async fn should_update_on_upsert_when_email_known() {
        let svc = make_service();
        svc.upsert_user(user("ada@example.com")).await.unwrap();

        let outcome = svc.upsert_user(user("ada@example.com")).await.unwrap();
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.upserted_count, 0);
    }

    #[tokio::test]
    async fn should_report_admin_only_after_promotion() {
        let svc = make_service();
        svc.register_user(user("ada@example.com")).await.unwrap();

        assert!(!svc.is_admin("ada@example.com").await.unwrap());

        let outcome = svc.promote_admin("ada@example.com").await.unwrap();
        assert_eq!(outcome.modified_count, 1);

        assert!(svc.is_admin("ada@example.com").await.unwrap());
        assert!(!svc.is_admin("grace@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn should_match_nothing_when_promoting_unknown_email() {
        let svc = make_service();
        let outcome = svc.promote_admin("nobody@example.com").await.unwrap();
        assert_eq!(outcome.matched_count, 0);
        assert_eq!(outcome.upserted_count, 0);
    }
}
