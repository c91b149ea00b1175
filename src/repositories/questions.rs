use sqlx::PgPool;

use crate::db::models::NumberedQuestion;
use crate::db::types::QuestionType;

/// Subjective questions of an exam in presentation order, numbered from 1.
pub(crate) async fn list_subjective_for_exam(
    pool: &PgPool,
    exam_id: &str,
) -> Result<Vec<NumberedQuestion>, sqlx::Error> {
    sqlx::query_as::<_, NumberedQuestion>(
        "SELECT id,
                question_type,
                text,
                marks,
                ROW_NUMBER() OVER (ORDER BY order_index, id) AS ordinal
         FROM questions
         WHERE exam_id = $1 AND question_type = $2
         ORDER BY order_index, id",
    )
    .bind(exam_id)
    .bind(QuestionType::Subjective)
    .fetch_all(pool)
    .await
}
