use sqlx::PgPool;

use crate::database::models::job::equity_in_range;
use crate::database::models::{Job, JobUpdate, NewJob, JOB_COLUMNS};
use crate::database::{bind_value, sql_for_partial_update, update_statement};
use crate::filter::{build_filtered_query, JobFilter};

use super::ServiceError;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a job; the id is assigned by the database.
    pub async fn create(&self, data: NewJob) -> Result<Job, ServiceError> {
        check_equity(&data.equity)?;

        let job = sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) RETURNING {JOB_COLUMNS}"
        ))
        .bind(&data.title)
        .bind(data.salary)
        .bind(data.equity)
        .bind(&data.company_handle)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created job {} for {}", job.id, job.company_handle);
        Ok(job)
    }

    pub async fn find_all(&self, filters: &JobFilter) -> Result<Vec<Job>, ServiceError> {
        let sql = build_filtered_query(&format!("SELECT {JOB_COLUMNS} FROM jobs"), filters);
        let mut query = sqlx::query_as::<_, Job>(&sql.query);
        for value in &sql.params {
            query = bind_value(query, value);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Job, ServiceError> {
        sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No job: {id}")))
    }

    /// Jobs posted by one company. An empty result is reported as not found.
    pub async fn for_company(&self, handle: &str) -> Result<Vec<Job>, ServiceError> {
        let jobs = self.find_all(&JobFilter::for_company(handle)).await?;
        if jobs.is_empty() {
            return Err(ServiceError::NotFound(format!("No jobs found for: {handle}")));
        }
        Ok(jobs)
    }

    pub async fn update(&self, id: i32, data: JobUpdate) -> Result<Job, ServiceError> {
        check_equity(&data.equity)?;

        let fragment = sql_for_partial_update(data.into_patch())?;
        let stmt = update_statement("jobs", "id", fragment, id, JOB_COLUMNS);

        let mut query = sqlx::query_as::<_, Job>(&stmt.sql);
        for value in &stmt.values {
            query = bind_value(query, value);
        }

        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No job: {id}")))
    }

    pub async fn remove(&self, id: i32) -> Result<(), ServiceError> {
        let deleted: Option<(i32,)> = sqlx::query_as("DELETE FROM jobs WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match deleted {
            Some(_) => {
                tracing::info!("Deleted job {}", id);
                Ok(())
            }
            None => Err(ServiceError::NotFound(format!("No job: {id}"))),
        }
    }
}

fn check_equity(equity: &Option<rust_decimal::Decimal>) -> Result<(), ServiceError> {
    if equity_in_range(*equity) {
        Ok(())
    } else {
        Err(ServiceError::Validation("equity must be between 0 and 1".to_string()))
    }
}
