use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::db::types::{QuestionType, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) email: String,
    pub(crate) full_name: Option<String>,
    pub(crate) role: UserRole,
    pub(crate) is_active: bool,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Exam {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) created_by: String,
    pub(crate) created_at: PrimitiveDateTime,
}

/// Subjective question together with its 1-based position among the exam's
/// subjective questions.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct NumberedQuestion {
    pub(crate) id: String,
    pub(crate) question_type: QuestionType,
    pub(crate) text: String,
    pub(crate) marks: i32,
    pub(crate) ordinal: i64,
}

/// Answer joined with its author.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct AuthoredAnswer {
    pub(crate) id: String,
    pub(crate) question_id: String,
    pub(crate) student_id: String,
    pub(crate) student_name: Option<String>,
    pub(crate) student_email: Option<String>,
    pub(crate) answer_text: Option<String>,
}
