//! HTTP Handlers

use crate::application::{
    CreateProblemUseCase, DeleteProblemUseCase, GetProblemUseCase, ListProblemsUseCase,
    UpdateProblemUseCase,
};
use crate::domain::repository::ProblemRepository;
use crate::error::ProblemResult;
use crate::presentation::dto::{MessageResponse, ProblemBody, ProblemResponse};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// Shared state for problem handlers
#[derive(Clone)]
pub struct ProblemAppState<R>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /api/problem
#[utoipa::path(
    post,
    path = "/api/problem",
    request_body = ProblemBody,
    responses(
        (status = 201, description = "Problem created", body = ProblemResponse),
        (status = 400, description = "Missing or empty field"),
        (status = 500, description = "The store did not confirm the write")
    ),
    tags = ["problem"],
    operation_id = "createProblem"
)]
pub async fn create_problem<R>(
    State(state): State<ProblemAppState<R>>,
    payload: Result<Json<ProblemBody>, JsonRejection>,
) -> ProblemResult<(StatusCode, Json<ProblemResponse>)>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    let Json(body) = payload?;

    let problem = CreateProblemUseCase::new(state.repo.clone())
        .execute(body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(problem.into())))
}

/// GET /api/problem
///
/// At most 100 problems, oldest first.
#[utoipa::path(
    get,
    path = "/api/problem",
    responses(
        (status = 200, description = "Stored problems", body = [ProblemResponse])
    ),
    tags = ["problem"],
    operation_id = "listProblems"
)]
pub async fn list_problems<R>(
    State(state): State<ProblemAppState<R>>,
) -> ProblemResult<Json<Vec<ProblemResponse>>>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    let problems = ListProblemsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(problems.into_iter().map(Into::into).collect()))
}

/// GET /api/problem/{id}
#[utoipa::path(
    get,
    path = "/api/problem/{id}",
    params(("id" = String, Path, description = "Problem ID")),
    responses(
        (status = 200, description = "The problem", body = ProblemResponse),
        (status = 404, description = "Problem of ID:{id} not found")
    ),
    tags = ["problem"],
    operation_id = "getProblem"
)]
pub async fn get_problem<R>(
    State(state): State<ProblemAppState<R>>,
    Path(id): Path<String>,
) -> ProblemResult<Json<ProblemResponse>>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    let problem = GetProblemUseCase::new(state.repo.clone()).execute(&id).await?;

    Ok(Json(problem.into()))
}

/// PUT /api/problem/{id}
///
/// Replaces all three fields. An update that changes nothing is a 404.
#[utoipa::path(
    put,
    path = "/api/problem/{id}",
    params(("id" = String, Path, description = "Problem ID")),
    request_body = ProblemBody,
    responses(
        (status = 200, description = "Updated problem", body = ProblemResponse),
        (status = 400, description = "Missing or empty field"),
        (status = 404, description = "Failed to Update Problem of ID:{id}")
    ),
    tags = ["problem"],
    operation_id = "updateProblem"
)]
pub async fn update_problem<R>(
    State(state): State<ProblemAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<ProblemBody>, JsonRejection>,
) -> ProblemResult<Json<ProblemResponse>>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    let Json(body) = payload?;

    let problem = UpdateProblemUseCase::new(state.repo.clone())
        .execute(&id, body.into())
        .await?;

    Ok(Json(problem.into()))
}

/// DELETE /api/problem/{id}
#[utoipa::path(
    delete,
    path = "/api/problem/{id}",
    params(("id" = String, Path, description = "Problem ID")),
    responses(
        (status = 200, description = "Problem of ID:{id} deleted", body = MessageResponse),
        (status = 404, description = "Failed to Delete Problem of ID:{id}")
    ),
    tags = ["problem"],
    operation_id = "deleteProblem"
)]
pub async fn delete_problem<R>(
    State(state): State<ProblemAppState<R>>,
    Path(id): Path<String>,
) -> ProblemResult<Json<MessageResponse>>
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    DeleteProblemUseCase::new(state.repo.clone())
        .execute(&id)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Problem of ID:{} deleted", id),
    }))
}
