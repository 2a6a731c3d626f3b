//! Problem Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::ProblemRepository;
use crate::infra::postgres::PgProblemRepository;
use crate::presentation::handlers::{self, ProblemAppState};

/// Create the Problem router with PostgreSQL repository
pub fn problem_router(repo: PgProblemRepository) -> Router {
    problem_router_generic(repo)
}

/// Create a generic Problem router for any repository implementation
pub fn problem_router_generic<R>(repo: R) -> Router
where
    R: ProblemRepository + Clone + Send + Sync + 'static,
{
    let state = ProblemAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/problem",
            get(handlers::list_problems::<R>).post(handlers::create_problem::<R>),
        )
        .route(
            "/problem/{id}",
            get(handlers::get_problem::<R>)
                .put(handlers::update_problem::<R>)
                .delete(handlers::delete_problem::<R>),
        )
        .with_state(state)
}
