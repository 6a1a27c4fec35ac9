//! `SQLite` implementation of [`OrderRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use carhub_app::ports::OrderRepository;
use carhub_domain::error::CarHubError;
use carhub_domain::id::OrderId;
use carhub_domain::order::Order;
use carhub_domain::outcome::DeleteOutcome;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Order`].
struct Wrapper(Order);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let email: String = row.try_get("email")?;
        let extra: String = row.try_get("extra")?;

        let id = OrderId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let extra =
            serde_json::from_str(&extra).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Order { id, email, extra }))
    }
}

const INSERT: &str = "INSERT INTO orders (id, email, extra) VALUES (?, ?, ?)";
const SELECT_BY_EMAIL: &str = "SELECT * FROM orders WHERE email = ?";
const DELETE_BY_ID: &str = "DELETE FROM orders WHERE id = ?";

/// `SQLite`-backed order repository.
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for SqliteOrderRepository {
    fn create(&self, order: Order) -> impl Future<Output = Result<Order, CarHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let extra = serde_json::to_string(&order.extra).map_err(StorageError::from)?;
            sqlx::query(INSERT)
                .bind(order.id.to_string())
                .bind(&order.email)
                .bind(extra)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(order)
        }
    }

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Vec<Order>, CarHubError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_owned();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(email)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(
        &self,
        id: OrderId,
    ) -> impl Future<Output = Result<DeleteOutcome, CarHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(DeleteOutcome {
                deleted_count: result.rows_affected(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteOrderRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteOrderRepository::new(db.pool().clone())
    }

    fn order_for(email: &str) -> Order {
        Order::builder().email(email).build().unwrap()
    }

    #[tokio::test]
    async fn should_only_find_orders_matching_email() {
        let repo = setup().await;
        repo.create(order_for("ada@example.com")).await.unwrap();
        repo.create(order_for("ada@example.com")).await.unwrap();
        repo.create(order_for("grace@example.com")).await.unwrap();

        let mine = repo.find_by_email("ada@example.com").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|order| order.email == "ada@example.com"));

        let none = repo.find_by_email("nobody@example.com").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn should_report_deleted_count_when_order_exists() {
        let repo = setup().await;
        let order = order_for("ada@example.com");
        let id = order.id;
        repo.create(order).await.unwrap();

        let outcome = repo.delete(id).await.unwrap();
        assert_eq!(outcome.deleted_count, 1);

        let outcome = repo.delete(id).await.unwrap();
        assert_eq!(outcome.deleted_count, 0);
    }

    #[tokio::test]
    async fn should_store_order_details_through_roundtrip() {
        let repo = setup().await;
        let order: Order = serde_json::from_str(
            r#"{"email":"ada@example.com","serviceName":"1965 Mustang","address":"12 Main St"}"#,
        )
        .unwrap();
        repo.create(order).await.unwrap();

        let fetched = repo.find_by_email("ada@example.com").await.unwrap();
        assert_eq!(fetched[0].extra["serviceName"], "1965 Mustang");
        assert_eq!(fetched[0].extra["address"], "12 Main St");
    }
}
