//! Application Layer - Use Cases
//!
//! Ids arrive as the raw path string. Anything that does not parse as a
//! store key is reported like a missing record, echoing the string back.

pub mod create_problem;
pub mod delete_problem;
pub mod get_problem;
pub mod list_problems;
pub mod update_problem;

pub use create_problem::{CreateProblemUseCase, ProblemInput};
pub use delete_problem::DeleteProblemUseCase;
pub use get_problem::GetProblemUseCase;
pub use list_problems::{LIST_PAGE_SIZE, ListProblemsUseCase};
pub use update_problem::UpdateProblemUseCase;
