//! `SQLite` implementation of [`ReviewRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use carhub_app::ports::ReviewRepository;
use carhub_domain::error::CarHubError;
use carhub_domain::id::ReviewId;
use carhub_domain::review::Review;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Review`].
struct Wrapper(Review);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: Option<String> = row.try_get("name")?;
        let rating: Option<f64> = row.try_get("rating")?;
        let description: Option<String> = row.try_get("description")?;
        let extra: String = row.try_get("extra")?;

        let id = ReviewId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let extra =
            serde_json::from_str(&extra).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Review {
            id,
            name,
            rating,
            description,
            extra,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO reviews (id, name, rating, description, extra) VALUES (?, ?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT * FROM reviews";

/// `SQLite`-backed review repository.
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, CarHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let extra = serde_json::to_string(&review.extra).map_err(StorageError::from)?;
            sqlx::query(INSERT)
                .bind(review.id.to_string())
                .bind(review.name.as_deref())
                .bind(review.rating)
                .bind(review.description.as_deref())
                .bind(extra)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(review)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, CarHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteReviewRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteReviewRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_store_and_scan_reviews() {
        let repo = setup().await;
        let review: Review =
            serde_json::from_str(r#"{"name":"Ada","rating":5,"description":"Great car"}"#).unwrap();
        repo.create(review).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name.as_deref(), Some("Ada"));
        assert_eq!(all[0].rating, Some(5.0));
    }

    #[tokio::test]
    async fn should_return_empty_scan_when_no_reviews() {
        let repo = setup().await;
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_store_extra_fields_through_roundtrip() {
        let repo = setup().await;
        let review: Review = serde_json::from_str(r#"{"name":"Ada","img":"ada.png"}"#).unwrap();
        repo.create(review).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].extra["img"], "ada.png");
    }
}
