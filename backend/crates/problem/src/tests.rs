//! Unit tests for Problem crate
//! Use cases over the in-memory repository, then the HTTP surface

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::ProblemId;

    use crate::application::*;
    use crate::error::ProblemError;
    use crate::infra::memory::InMemoryProblemRepository;

    fn input(title: &str, problem: &str, educational: &str) -> ProblemInput {
        ProblemInput {
            title: title.to_string(),
            problem: problem.to_string(),
            educational: educational.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let repo = Arc::new(InMemoryProblemRepository::new());

        let created = CreateProblemUseCase::new(repo.clone())
            .execute(input("Two Sum", "Find two numbers", "Use a hash map"))
            .await
            .unwrap();

        let fetched = GetProblemUseCase::new(repo)
            .execute(&created.id.to_string())
            .await
            .unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.fields.title(), "Two Sum");
        assert_eq!(fetched.fields.problem(), "Find two numbers");
        assert_eq!(fetched.fields.educational(), "Use a hash map");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_field() {
        let repo = Arc::new(InMemoryProblemRepository::new());

        let result = CreateProblemUseCase::new(repo.clone())
            .execute(input("", "P", "E"))
            .await;

        assert!(matches!(result, Err(ProblemError::Validation(_))));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_missing_and_malformed_ids() {
        let use_case = GetProblemUseCase::new(Arc::new(InMemoryProblemRepository::new()));

        let missing = ProblemId::new().to_string();
        assert!(matches!(
            use_case.execute(&missing).await,
            Err(ProblemError::NotFound(id)) if id == missing
        ));
        assert!(matches!(
            use_case.execute("not-an-id").await,
            Err(ProblemError::NotFound(id)) if id == "not-an-id"
        ));
    }

    #[tokio::test]
    async fn test_alternate_id_spellings_are_not_found() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        let created = CreateProblemUseCase::new(repo.clone())
            .execute(input("T", "P", "E"))
            .await
            .unwrap();
        let use_case = GetProblemUseCase::new(repo);

        let canonical = created.id.to_string();
        let spellings = [
            format!("{{{}}}", canonical),
            created.id.as_uuid().simple().to_string(),
            format!("urn:uuid:{}", canonical),
            format!(" {} ", canonical),
        ];

        for spelling in spellings {
            assert!(matches!(
                use_case.execute(&spelling).await,
                Err(ProblemError::NotFound(id)) if id == spelling
            ));
        }
        assert!(use_case.execute(&canonical).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_changes_fields_keeps_id() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        let created = CreateProblemUseCase::new(repo.clone())
            .execute(input("T", "P", "E"))
            .await
            .unwrap();

        let updated = UpdateProblemUseCase::new(repo.clone())
            .execute(&created.id.to_string(), input("T2", "P2", "E2"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields.title(), "T2");

        let fetched = GetProblemUseCase::new(repo)
            .execute(&created.id.to_string())
            .await
            .unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_not_found() {
        let use_case = UpdateProblemUseCase::new(Arc::new(InMemoryProblemRepository::new()));

        let result = use_case
            .execute(&ProblemId::new().to_string(), input("T", "P", "E"))
            .await;
        assert!(matches!(result, Err(ProblemError::UpdateFailed(_))));

        let malformed = use_case.execute("12345", input("T", "P", "E")).await;
        assert!(matches!(malformed, Err(ProblemError::UpdateFailed(_))));
    }

    #[tokio::test]
    async fn test_identical_update_is_not_found() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        let created = CreateProblemUseCase::new(repo.clone())
            .execute(input("T", "P", "E"))
            .await
            .unwrap();

        let result = UpdateProblemUseCase::new(repo)
            .execute(&created.id.to_string(), input("T", "P", "E"))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, ProblemError::UpdateFailed(_)));
        assert_eq!(err.kind(), kernel::error::kind::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let result = UpdateProblemUseCase::new(Arc::new(InMemoryProblemRepository::new()))
            .execute("not-an-id", input("T", "", "E"))
            .await;

        assert!(matches!(result, Err(ProblemError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        let created = CreateProblemUseCase::new(repo.clone())
            .execute(input("T", "P", "E"))
            .await
            .unwrap();
        let id = created.id.to_string();

        assert!(DeleteProblemUseCase::new(repo.clone()).execute(&id).await.unwrap());
        assert!(matches!(
            GetProblemUseCase::new(repo.clone()).execute(&id).await,
            Err(ProblemError::NotFound(_))
        ));
        assert!(matches!(
            DeleteProblemUseCase::new(repo).execute(&id).await,
            Err(ProblemError::DeleteFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_not_found() {
        let result = DeleteProblemUseCase::new(Arc::new(InMemoryProblemRepository::new()))
            .execute(&ProblemId::new().to_string())
            .await;

        assert!(matches!(result, Err(ProblemError::DeleteFailed(_))));
    }

    #[tokio::test]
    async fn test_list_caps_at_page_size() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        let create = CreateProblemUseCase::new(repo.clone());

        for i in 0..(LIST_PAGE_SIZE + 5) {
            create
                .execute(input(&format!("T{}", i), "P", "E"))
                .await
                .unwrap();
        }

        let listed = ListProblemsUseCase::new(repo.clone()).execute().await.unwrap();
        assert_eq!(listed.len(), LIST_PAGE_SIZE);
        assert_eq!(listed[0].fields.title(), "T0");
        assert_eq!(repo.len().await, LIST_PAGE_SIZE + 5);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let listed = ListProblemsUseCase::new(Arc::new(InMemoryProblemRepository::new()))
            .execute()
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}

#[cfg(test)]
mod store_failure_tests {
    use std::sync::Arc;

    use kernel::id::ProblemId;

    use crate::application::{CreateProblemUseCase, ProblemInput};
    use crate::domain::entities::Problem;
    use crate::domain::repository::ProblemRepository;
    use crate::domain::value_objects::ProblemFields;
    use crate::error::{ProblemError, ProblemResult};

    /// Accepts inserts but never finds anything
    #[derive(Clone)]
    struct WriteOnlyRepository;

    impl ProblemRepository for WriteOnlyRepository {
        async fn insert(&self, _fields: &ProblemFields) -> ProblemResult<ProblemId> {
            Ok(ProblemId::new())
        }

        async fn find_by_id(&self, _id: &ProblemId) -> ProblemResult<Option<Problem>> {
            Ok(None)
        }

        async fn list(&self, _limit: usize) -> ProblemResult<Vec<Problem>> {
            Ok(Vec::new())
        }

        async fn update(
            &self,
            _id: &ProblemId,
            _fields: &ProblemFields,
        ) -> ProblemResult<Option<Problem>> {
            Ok(None)
        }

        async fn delete(&self, _id: &ProblemId) -> ProblemResult<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_unconfirmed_write_is_server_error() {
        let result = CreateProblemUseCase::new(Arc::new(WriteOnlyRepository))
            .execute(ProblemInput {
                title: "T".to_string(),
                problem: "P".to_string(),
                educational: "E".to_string(),
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, ProblemError::StoreWriteFailed));
        assert!(err.kind().is_server_error());
    }
}

#[cfg(test)]
mod http_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryProblemRepository;
    use crate::presentation::dto::ProblemResponse;
    use crate::presentation::router::problem_router_generic;

    fn app() -> Router {
        problem_router_generic(InMemoryProblemRepository::new())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(app: &Router, title: &str) -> ProblemResponse {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/problem",
                json!({"title": title, "problem": "P", "educational": "E"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        serde_json::from_value(body_json(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_string_id() {
        let app = app();
        let created = create(&app, "Two Sum").await;

        assert!(!created.id.is_empty());
        assert_eq!(created.title, "Two Sum");

        let response = app
            .oneshot(empty_request("GET", &format!("/problem/{}", created.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: ProblemResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_with_missing_field_is_400() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/problem",
                json!({"title": "T", "problem": "P"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn test_create_with_empty_field_is_400() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/problem",
                json!({"title": "T", "problem": "P", "educational": ""}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "educational must not be empty"
        );
    }

    #[tokio::test]
    async fn test_list_returns_array() {
        let app = app();
        create(&app, "a").await;
        create(&app, "b").await;

        let response = app
            .oneshot(empty_request("GET", "/problem"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_get_unknown_id_message() {
        let response = app()
            .oneshot(empty_request("GET", "/problem/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["message"],
            "Problem of ID:abc not found"
        );
    }

    #[tokio::test]
    async fn test_put_identical_values_is_404() {
        let app = app();
        let created = create(&app, "T").await;
        let uri = format!("/problem/{}", created.id);

        let response = app
            .oneshot(json_request(
                "PUT",
                &uri,
                json!({"title": "T", "problem": "P", "educational": "E"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["message"],
            format!("Failed to Update Problem of ID:{}", created.id)
        );
    }

    #[tokio::test]
    async fn test_put_changes_record() {
        let app = app();
        let created = create(&app, "T").await;
        let uri = format!("/problem/{}", created.id);

        let response = app
            .oneshot(json_request(
                "PUT",
                &uri,
                json!({"title": "T2", "problem": "P", "educational": "E"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: ProblemResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "T2");
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let app = app();
        let created = create(&app, "T").await;
        let uri = format!("/problem/{}", created.id);

        let deleted = app
            .clone()
            .oneshot(empty_request("DELETE", &uri))
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::OK);
        assert_eq!(
            body_json(deleted).await["message"],
            format!("Problem of ID:{} deleted", created.id)
        );

        let again = app
            .clone()
            .oneshot(empty_request("DELETE", &uri))
            .await
            .unwrap();
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(again).await["message"],
            format!("Failed to Delete Problem of ID:{}", created.id)
        );

        let gone = app.oneshot(empty_request("GET", &uri)).await.unwrap();
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    }
}
