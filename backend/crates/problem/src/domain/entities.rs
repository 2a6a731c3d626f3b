//! Domain Entities

use kernel::id::ProblemId;

use crate::domain::value_objects::ProblemFields;

/// A stored problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub id: ProblemId,
    pub fields: ProblemFields,
}

impl Problem {
    pub fn new(id: ProblemId, fields: ProblemFields) -> Self {
        Self { id, fields }
    }
}
