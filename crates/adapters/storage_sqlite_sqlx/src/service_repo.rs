//! `SQLite` implementation of [`ServiceRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use carhub_app::ports::ServiceRepository;
use carhub_domain::error::CarHubError;
use carhub_domain::id::ServiceId;
use carhub_domain::outcome::DeleteOutcome;
use carhub_domain::service::Service;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Service`].
struct Wrapper(Service);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let description: Option<String> = row.try_get("description")?;
        let price: Option<f64> = row.try_get("price")?;
        let img: Option<String> = row.try_get("img")?;
        let extra: String = row.try_get("extra")?;

        let id = ServiceId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let extra =
            serde_json::from_str(&extra).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Service {
            id,
            name,
            description,
            price,
            img,
            extra,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO services (id, name, description, price, img, extra) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM services WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM services";
const DELETE_BY_ID: &str = "DELETE FROM services WHERE id = ?";

/// `SQLite`-backed service repository.
pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ServiceRepository for SqliteServiceRepository {
    fn create(
        &self,
        service: Service,
    ) -> impl Future<Output = Result<Service, CarHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let extra = serde_json::to_string(&service.extra).map_err(StorageError::from)?;
            sqlx::query(INSERT)
                .bind(service.id.to_string())
                .bind(&service.name)
                .bind(service.description.as_deref())
                .bind(service.price)
                .bind(service.img.as_deref())
                .bind(extra)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(service)
        }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, CarHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, CarHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(
        &self,
        id: ServiceId,
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
