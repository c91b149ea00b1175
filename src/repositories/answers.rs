use sqlx::PgPool;

use crate::db::models::AuthoredAnswer;

pub(crate) async fn list_for_questions(
    pool: &PgPool,
    question_ids: &[String],
) -> Result<Vec<AuthoredAnswer>, sqlx::Error> {
    if question_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, AuthoredAnswer>(
        "SELECT a.id,
                a.question_id,
                a.student_id,
                u.full_name AS student_name,
                u.email AS student_email,
                a.answer_text
         FROM student_answers a
         JOIN users u ON u.id = a.student_id
         WHERE a.question_id = ANY($1)
         ORDER BY a.created_at, a.id",
    )
    .bind(question_ids)
    .fetch_all(pool)
    .await
}
