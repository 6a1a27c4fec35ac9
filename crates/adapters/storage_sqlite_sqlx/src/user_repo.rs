//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use carhub_app::ports::UserRepository;
use carhub_domain::error::CarHubError;
use carhub_domain::id::UserId;
use carhub_domain::outcome::UpdateOutcome;
use carhub_domain::user::User;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let email: String = row.try_get("email")?;
        let name: Option<String> = row.try_get("name")?;
        let role: Option<String> = row.try_get("role")?;
        let extra: String = row.try_get("extra")?;

        let id = UserId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let extra =
            serde_json::from_str(&extra).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(User {
            id,
            email,
            name,
            role,
            extra,
        }))
    }
}

const INSERT: &str = "INSERT INTO users (id, email, name, role, extra) VALUES (?, ?, ?, ?, ?)";
const UPDATE_BY_EMAIL: &str = "UPDATE users SET name = ?, role = ?, extra = ? WHERE email = ?";
const SET_ROLE_BY_EMAIL: &str = "UPDATE users SET role = ? WHERE email = ?";
const SELECT_BY_EMAIL: &str = "SELECT * FROM users WHERE email = ? LIMIT 1";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, CarHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let extra = serde_json::to_string(&user.extra).map_err(StorageError::from)?;
            sqlx::query(INSERT)
                .bind(user.id.to_string())
                .bind(&user.email)
                .bind(user.name.as_deref())
                .bind(user.role.as_deref())
                .bind(extra)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(user)
        }
    }

    fn upsert(&self, user: User) -> impl Future<Output = Result<UpdateOutcome, CarHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let extra = serde_json::to_string(&user.extra).map_err(StorageError::from)?;

            // The check and the conditional insert must not interleave with
            // a concurrent upsert for the same email. The UPDATE takes the
            // write lock for the whole transaction even when it matches
            // nothing, so the second writer waits and then sees the row.
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let result = sqlx::query(UPDATE_BY_EMAIL)
                .bind(user.name.as_deref())
                .bind(user.role.as_deref())
                .bind(&extra)
                .bind(&user.email)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            let outcome = if result.rows_affected() > 0 {
                UpdateOutcome::matched(result.rows_affected())
            } else {
                sqlx::query(INSERT)
                    .bind(user.id.to_string())
                    .bind(&user.email)
                    .bind(user.name.as_deref())
                    .bind(user.role.as_deref())
                    .bind(extra)
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
                UpdateOutcome::upserted()
            };

            tx.commit().await.map_err(StorageError::from)?;
            Ok(outcome)
        }
    }

    fn set_role(
        &self,
        email: &str,
        role: &str,
    ) -> impl Future<Output = Result<UpdateOutcome, CarHubError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_owned();
        let role = role.to_owned();
        async move {
            let result = sqlx::query(SET_ROLE_BY_EMAIL)
                .bind(role)
                .bind(email)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(UpdateOutcome::matched(result.rows_affected()))
        }
    }

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, CarHubError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_owned();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(email)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }
}
