//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ProblemInput;
use crate::domain::entities::Problem;

/// Body of `POST /problem` and `PUT /problem/{id}`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProblemBody {
    pub title: String,
    pub problem: String,
    pub educational: String,
}

impl From<ProblemBody> for ProblemInput {
    fn from(body: ProblemBody) -> Self {
        Self {
            title: body.title,
            problem: body.problem,
            educational: body.educational,
        }
    }
}

/// Problem as returned to clients; the store key is rendered as `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProblemResponse {
    pub id: String,
    pub title: String,
    pub problem: String,
    pub educational: String,
}

impl From<Problem> for ProblemResponse {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id.to_string(),
            title: problem.fields.title().to_string(),
            problem: problem.fields.problem().to_string(),
            educational: problem.fields.educational().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProblemFields;
    use kernel::id::ProblemId;

    #[test]
    fn test_response_shape() {
        let id = ProblemId::new();
        let problem = Problem::new(
            id,
            ProblemFields::new("T".to_string(), "P".to_string(), "E".to_string()).unwrap(),
        );

        let json = serde_json::to_value(ProblemResponse::from(problem)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": id.to_string(),
                "title": "T",
                "problem": "P",
                "educational": "E",
            })
        );
    }
}
