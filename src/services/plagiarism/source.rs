use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::models::{AuthoredAnswer, NumberedQuestion};
use crate::db::types::QuestionType;
use crate::repositories;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QuestionRecord {
    pub(crate) id: String,
    pub(crate) question_type: QuestionType,
    /// 1-based position among the exam's subjective questions.
    pub(crate) ordinal: i64,
    pub(crate) text: String,
    pub(crate) marks: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnswerRecord {
    pub(crate) id: String,
    pub(crate) question_id: String,
    pub(crate) student_id: String,
    pub(crate) student_name: Option<String>,
    pub(crate) student_email: Option<String>,
    pub(crate) text: Option<String>,
}

impl AnswerRecord {
    /// Full name, else email, else the raw student id.
    pub(crate) fn display_name(&self) -> &str {
        [self.student_name.as_deref(), self.student_email.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(&self.student_id)
    }
}

/// Read-only access to the questions and answers of an exam.
#[async_trait]
pub(crate) trait ExamAnswerSource: Send + Sync {
    async fn subjective_questions(&self, exam_id: &str)
        -> Result<Vec<QuestionRecord>, sqlx::Error>;

    async fn answers_for_questions(
        &self,
        question_ids: &[String],
    ) -> Result<Vec<AnswerRecord>, sqlx::Error>;
}

#[async_trait]
impl ExamAnswerSource for PgPool {
    async fn subjective_questions(
        &self,
        exam_id: &str,
    ) -> Result<Vec<QuestionRecord>, sqlx::Error> {
        let rows = repositories::questions::list_subjective_for_exam(self, exam_id).await?;
        Ok(rows.into_iter().map(QuestionRecord::from).collect())
    }

    async fn answers_for_questions(
        &self,
        question_ids: &[String],
    ) -> Result<Vec<AnswerRecord>, sqlx::Error> {
        let rows = repositories::answers::list_for_questions(self, question_ids).await?;
        Ok(rows.into_iter().map(AnswerRecord::from).collect())
    }
}

impl From<NumberedQuestion> for QuestionRecord {
    fn from(row: NumberedQuestion) -> Self {
        Self {
            id: row.id,
            question_type: row.question_type,
            ordinal: row.ordinal,
            text: row.text,
            marks: row.marks,
        }
    }
}

impl From<AuthoredAnswer> for AnswerRecord {
    fn from(row: AuthoredAnswer) -> Self {
        Self {
            id: row.id,
            question_id: row.question_id,
            student_id: row.student_id,
            student_name: row.student_name,
            student_email: row.student_email,
            text: row.answer_text,
        }
    }
}
