use serde::{Deserialize, Serialize};
use sqlx::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "userrole", rename_all = "lowercase")]
pub(crate) enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub(crate) fn can_review_exams(self) -> bool {
        matches!(self, Self::Teacher | Self::Admin)
    }
}

/// Objective questions have a single correct option, so near-identical
/// answers are expected and are never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "questiontype", rename_all = "lowercase")]
pub(crate) enum QuestionType {
    Subjective,
    Objective,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_teachers_and_admins_review_exams() {
        assert!(UserRole::Teacher.can_review_exams());
        assert!(UserRole::Admin.can_review_exams());
        assert!(!UserRole::Student.can_review_exams());
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&QuestionType::Subjective).unwrap(), "\"subjective\"");
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }
}
