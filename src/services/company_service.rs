use sqlx::PgPool;

use crate::database::models::{
    Company, CompanyDetail, CompanyUpdate, Job, NewCompany, COMPANY_COLUMNS, JOB_COLUMNS,
};
use crate::database::{bind_value, sql_for_partial_update, update_statement};
use crate::filter::{build_filtered_query, CompanyFilter};

use super::ServiceError;

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: NewCompany) -> Result<Company, ServiceError> {
        if self.exists(&data.handle).await? {
            return Err(ServiceError::Duplicate(format!("Duplicate company: {}", data.handle)));
        }

        let company = sqlx::query_as::<_, Company>(&format!(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(&data.handle)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.num_employees)
        .bind(&data.logo_url)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created company {}", company.handle);
        Ok(company)
    }

    /// Companies matching `filters`, ordered by name.
    pub async fn find_all(&self, filters: &CompanyFilter) -> Result<Vec<Company>, ServiceError> {
        filters.validate()?;

        let sql = build_filtered_query(&format!("SELECT {COMPANY_COLUMNS} FROM companies"), filters);
        let mut query = sqlx::query_as::<_, Company>(&sql.query);
        for value in &sql.params {
            query = bind_value(query, value);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    pub async fn get(&self, handle: &str) -> Result<CompanyDetail, ServiceError> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE handle = $1"
        ))
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("No company: {handle}")))?;

        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE company_handle = $1 ORDER BY id"
        ))
        .bind(handle)
        .fetch_all(&self.pool)
        .await?;

        Ok(CompanyDetail { company, jobs })
    }

    pub async fn update(&self, handle: &str, data: CompanyUpdate) -> Result<Company, ServiceError> {
        let fragment = sql_for_partial_update(data.into_patch())?;
        let stmt = update_statement("companies", "handle", fragment, handle, COMPANY_COLUMNS);

        let mut query = sqlx::query_as::<_, Company>(&stmt.sql);
        for value in &stmt.values {
            query = bind_value(query, value);
        }

        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No company: {handle}")))
    }

    pub async fn remove(&self, handle: &str) -> Result<(), ServiceError> {
        let deleted: Option<(String,)> =
            sqlx::query_as("DELETE FROM companies WHERE handle = $1 RETURNING handle")
                .bind(handle)
                .fetch_optional(&self.pool)
                .await?;

        match deleted {
            Some(_) => {
                tracing::info!("Deleted company {}", handle);
                Ok(())
            }
            None => Err(ServiceError::NotFound(format!("No company: {handle}"))),
        }
    }

    pub async fn exists(&self, handle: &str) -> Result<bool, ServiceError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM companies WHERE handle = $1")
            .bind(handle)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0 > 0)
    }
}
