use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::listings::{find_job, list_jobs, JobFilter, JobListing};

#[derive(Debug, Default, Deserialize)]
pub struct JobQuery {
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub tag: Option<String>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(Query(query): Query<JobQuery>) -> Json<Vec<&'static JobListing>> {
    let filter = JobFilter {
        employment_type: query.employment_type.as_deref(),
        tag: query.tag.as_deref(),
    };
    Json(list_jobs(&filter))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(Path(id): Path<u32>) -> Result<Json<&'static JobListing>, AppError> {
    find_job(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
