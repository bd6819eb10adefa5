use crate::error::{RecommendError, RecommendResult};
use crate::models::course::ScoredCourse;
use crate::models::request::RecommendationRequest;
use crate::scoring::SCORE_SQL;
use async_trait::async_trait;
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Row};
use tracing::{debug, error, info};

/// Parameterised scoring query over the `courses` table.
///
/// The category value only ever travels as a bound parameter; the statement
/// text depends solely on whether a filter is present.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub category: Option<String>,
    pub limit: i64,
}

impl RecommendationQuery {
    pub fn new(category: Option<String>, limit: i64) -> Self {
        RecommendationQuery { category, limit }
    }

    /// Statement text with `$n` placeholders in the order of [`Self::params`].
    pub fn sql(&self) -> String {
        let mut sql = format!(
            "SELECT id::BIGINT AS id, title, instructor, price::TEXT AS price, image_url, category, \
             CAST(rating AS FLOAT8) AS rating, students_count::BIGINT AS students_count, \
             {} AS score \
             FROM courses \
             WHERE is_active = true",
            SCORE_SQL
        );
        let mut param_count = 1;

        if self.category.is_some() {
            sql.push_str(&format!(" AND category = ${}", param_count));
            param_count += 1;
        }

        sql.push_str(&format!(" ORDER BY score DESC NULLS LAST LIMIT ${}", param_count));
        sql
    }

    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();

        if let Some(ref category) = self.category {
            params.push(category);
        }
        params.push(&self.limit);

        params
    }
}

impl From<&RecommendationRequest> for RecommendationQuery {
    fn from(request: &RecommendationRequest) -> Self {
        RecommendationQuery::new(request.category.clone(), request.limit)
    }
}

/// Read access to scored courses.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Runs `query` against the store reachable at `database_url`.
    async fn fetch_recommendations(
        &self,
        database_url: &str,
        query: &RecommendationQuery,
    ) -> RecommendResult<Vec<ScoredCourse>>;
}

/// Postgres-backed store.
///
/// Each call opens its own connection and closes it before returning, so no
/// state is carried between invocations.
#[derive(Debug, Clone, Default)]
pub struct PgCourseStore;

impl PgCourseStore {
    pub fn new() -> Self {
        PgCourseStore
    }

    fn tls_connector() -> RecommendResult<MakeTlsConnector> {
        let connector = TlsConnector::builder().build().map_err(|e| {
            error!("Failed to create TLS connector: {}", e);
            RecommendError::Database(format!("TLS connector creation failed: {}", e))
        })?;
        Ok(MakeTlsConnector::new(connector))
    }

    async fn run_query(
        client: &Client,
        query: &RecommendationQuery,
    ) -> RecommendResult<Vec<ScoredCourse>> {
        let sql = query.sql();
        debug!("Executing recommendation query: {}", sql);

        let rows = client.query(sql.as_str(), &query.params()).await?;

        rows.iter().map(course_from_row).collect()
    }
}

#[async_trait]
impl CourseStore for PgCourseStore {
    async fn fetch_recommendations(
        &self,
        database_url: &str,
        query: &RecommendationQuery,
    ) -> RecommendResult<Vec<ScoredCourse>> {
        let tls = Self::tls_connector()?;
        let (client, connection) = tokio_postgres::connect(database_url, tls)
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                RecommendError::from(e)
            })?;

        let connection_task = tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("PostgreSQL connection error: {}", e);
            }
        });

        let result = Self::run_query(&client, query).await;

        // Dropping the last client handle terminates the connection future.
        drop(client);
        if let Err(e) = connection_task.await {
            error!("PostgreSQL connection task did not shut down cleanly: {}", e);
        }

        if let Ok(ref courses) = result {
            info!("Fetched {} scored courses", courses.len());
        }
        result
    }
}

fn course_from_row(row: &Row) -> RecommendResult<ScoredCourse> {
    let mapping = |e: tokio_postgres::Error| RecommendError::RowMapping(e.to_string());

    Ok(ScoredCourse {
        id: row.try_get("id").map_err(mapping)?,
        title: row.try_get("title").map_err(mapping)?,
        instructor: row.try_get("instructor").map_err(mapping)?,
        price: row.try_get("price").map_err(mapping)?,
        image_url: row.try_get("image_url").map_err(mapping)?,
        category: row.try_get("category").map_err(mapping)?,
        rating: row.try_get("rating").map_err(mapping)?,
        students_count: row.try_get("students_count").map_err(mapping)?,
        score: row.try_get("score").map_err(mapping)?,
    })
}
