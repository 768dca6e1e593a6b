use sqlx::{FromRow, PgPool};

use crate::auth::password::{hash_password, verify_password};
use crate::database::models::{NewUser, User, UserDetail, UserUpdate, USER_COLUMNS};
use crate::database::{bind_value, sql_for_partial_update, update_statement};

use super::ServiceError;

const INVALID_CREDENTIALS: &str = "Invalid username/password";

#[derive(FromRow)]
struct UserCredentials {
    #[sqlx(flatten)]
    user: User,
    password: String,
}

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(pool: PgPool, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    /// Create an account. Username and email must both be unused; a taken
    /// username is reported ahead of a taken email.
    pub async fn register(&self, data: NewUser) -> Result<User, ServiceError> {
        let taken: Option<(String, String)> = sqlx::query_as(
            "SELECT username, email FROM users WHERE username = $1 OR email = $2 \
             ORDER BY (username = $1) DESC LIMIT 1",
        )
        .bind(&data.username)
        .bind(&data.email)
        .fetch_optional(&self.pool)
        .await?;

        if let Some((username, _)) = taken {
            return Err(if username == data.username {
                ServiceError::Duplicate(format!("Duplicate username: {}", data.username))
            } else {
                ServiceError::Duplicate(format!("Duplicate email: {}", data.email))
            });
        }

        let hashed = hash_password(data.password, self.bcrypt_cost).await?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, password, first_name, last_name, email, is_admin) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {USER_COLUMNS}"
        ))
        .bind(&data.username)
        .bind(&hashed)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.is_admin.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Registered user {}", user.username);
        Ok(user)
    }

    /// Check a username/password pair. Unknown users and wrong passwords fail the same way.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let found = sqlx::query_as::<_, UserCredentials>(&format!(
            "SELECT {USER_COLUMNS}, password FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let Some(found) = found else {
            tracing::debug!("Login failed: no user {}", username);
            return Err(ServiceError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if verify_password(password.to_string(), found.password).await? {
            Ok(found.user)
        } else {
            tracing::debug!("Login failed: bad password for {}", username);
            Err(ServiceError::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY username"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get(&self, username: &str) -> Result<UserDetail, ServiceError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("No user: {username}")))?;

        let jobs_applications: Vec<String> = sqlx::query_scalar(
            "SELECT j.title FROM applications a JOIN jobs j ON j.id = a.job_id \
             WHERE a.username = $1 ORDER BY j.id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(UserDetail {
            user,
            jobs_applications,
        })
    }

    /// Partial update. A new password is hashed before it is stored.
    pub async fn update(&self, username: &str, data: UserUpdate) -> Result<User, ServiceError> {
        let password_hash = match data.password.clone() {
            Some(password) => Some(hash_password(password, self.bcrypt_cost).await?),
            None => None,
        };

        let fragment = sql_for_partial_update(data.into_patch(password_hash))?;
        let stmt = update_statement("users", "username", fragment, username, USER_COLUMNS);

        let mut query = sqlx::query_as::<_, User>(&stmt.sql);
        for value in &stmt.values {
            query = bind_value(query, value);
        }

        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No user: {username}")))
    }

    pub async fn remove(&self, username: &str) -> Result<(), ServiceError> {
        let deleted: Option<(String,)> =
            sqlx::query_as("DELETE FROM users WHERE username = $1 RETURNING username")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        match deleted {
            Some(_) => {
                tracing::info!("Deleted user {}", username);
                Ok(())
            }
            None => Err(ServiceError::NotFound(format!("No user: {username}"))),
        }
    }

    /// Record an application. User and job must already exist.
    pub async fn apply_to_job(&self, username: &str, job_id: i32) -> Result<(), ServiceError> {
        let existing: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM applications WHERE username = $1 AND job_id = $2",
        )
        .bind(username)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await?;

        if existing.0 > 0 {
            return Err(ServiceError::Duplicate(format!(
                "Duplicate application: {username} already applied to job {job_id}"
            )));
        }

        sqlx::query("INSERT INTO applications (username, job_id) VALUES ($1, $2)")
            .bind(username)
            .bind(job_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("User {} applied to job {}", username, job_id);
        Ok(())
    }
}
