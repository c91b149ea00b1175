//! Plagiarism report for an exam: answers to the same subjective question are
//! compared pairwise and groups of mutually similar answers are reported.

mod clustering;
pub(crate) mod evaluation;
pub(crate) mod similarity;
pub(crate) mod source;

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

use crate::core::config::PlagiarismSettings;
use crate::db::types::QuestionType;

use clustering::{connected_clusters, similarity_edges, AnswerCluster, Candidate};
use source::{AnswerRecord, ExamAnswerSource, QuestionRecord};

const TRUNCATION_MARKER: &str = "...";

#[derive(Debug, Error)]
pub(crate) enum AnalysisError {
    #[error("failed to fetch exam answers: {0}")]
    Fetch(#[from] sqlx::Error),
    #[error("malformed answer {answer_id}: {reason}")]
    MalformedAnswer { answer_id: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlagiarismPolicy {
    /// Minimum similarity ratio, inclusive, for two answers to be linked.
    pub(crate) threshold: f64,
    /// Answers with fewer trimmed characters are ignored entirely.
    pub(crate) min_answer_chars: usize,
    pub(crate) snippet_chars: usize,
}

impl PlagiarismPolicy {
    pub(crate) fn with_threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    fn qualifies(&self, text: Option<&str>) -> bool {
        text.is_some_and(|text| text.trim().chars().count() >= self.min_answer_chars)
    }

    fn snippet(&self, text: &str) -> String {
        match text.char_indices().nth(self.snippet_chars) {
            Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
            None => text.to_string(),
        }
    }
}

impl From<&PlagiarismSettings> for PlagiarismPolicy {
    fn from(settings: &PlagiarismSettings) -> Self {
        Self {
            threshold: settings.threshold,
            min_answer_chars: settings.min_answer_chars,
            snippet_chars: settings.snippet_chars,
        }
    }
}

impl Default for PlagiarismPolicy {
    fn default() -> Self {
        Self::from(&PlagiarismSettings::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StudentMatch {
    pub(crate) name: String,
    pub(crate) snippet: String,
}

/// One group of similar answers to one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PlagiarismAlert {
    pub(crate) question_id: String,
    pub(crate) question_number: i64,
    pub(crate) question_text: String,
    pub(crate) question_marks: i32,
    pub(crate) students: Vec<StudentMatch>,
    /// Highest pairwise similarity in the group, as a percentage with one decimal.
    pub(crate) similarity_score: f64,
    pub(crate) group_size: usize,
}

/// Fetches the exam's subjective answers and reports similar groups, most
/// similar first. An exam without subjective questions or answers yields an
/// empty report.
pub(crate) async fn analyze_exam<S>(
    source: &S,
    exam_id: &str,
    policy: &PlagiarismPolicy,
) -> Result<Vec<PlagiarismAlert>, AnalysisError>
where
    S: ExamAnswerSource + ?Sized,
{
    let started = Instant::now();
    let result = fetch_and_analyze(source, exam_id, policy).await;
    let status = if result.is_ok() { "success" } else { "failed" };

    metrics::counter!("plagiarism_reports_total", "status" => status).increment(1);
    metrics::histogram!("plagiarism_analysis_duration_seconds")
        .record(started.elapsed().as_secs_f64());

    match &result {
        Ok(alerts) => {
            metrics::counter!("plagiarism_alerts_total").increment(alerts.len() as u64);
        }
        Err(err) => {
            tracing::warn!(exam_id = %exam_id, error = %err, "Plagiarism analysis failed");
        }
    }

    result
}

async fn fetch_and_analyze<S>(
    source: &S,
    exam_id: &str,
    policy: &PlagiarismPolicy,
) -> Result<Vec<PlagiarismAlert>, AnalysisError>
where
    S: ExamAnswerSource + ?Sized,
{
    let questions = source.subjective_questions(exam_id).await?;
    if questions.is_empty() {
        tracing::debug!(exam_id = %exam_id, "No subjective questions; skipping plagiarism analysis");
        return Ok(Vec::new());
    }

    let question_ids: Vec<String> = questions.iter().map(|question| question.id.clone()).collect();
    let answers = source.answers_for_questions(&question_ids).await?;

    let alerts = build_alerts(&questions, &answers, policy)?;

    tracing::info!(
        exam_id = %exam_id,
        questions = questions.len(),
        answers = answers.len(),
        alerts = alerts.len(),
        threshold = policy.threshold,
        "Plagiarism analysis completed"
    );

    Ok(alerts)
}

/// Pure part of the analysis over already fetched records.
pub(crate) fn build_alerts(
    questions: &[QuestionRecord],
    answers: &[AnswerRecord],
    policy: &PlagiarismPolicy,
) -> Result<Vec<PlagiarismAlert>, AnalysisError> {
    let mut by_question: HashMap<&str, Vec<&AnswerRecord>> =
        questions.iter().map(|question| (question.id.as_str(), Vec::new())).collect();

    for answer in answers {
        if answer.student_id.trim().is_empty() {
            return Err(AnalysisError::MalformedAnswer {
                answer_id: answer.id.clone(),
                reason: "missing student id",
            });
        }

        let Some(bucket) = by_question.get_mut(answer.question_id.as_str()) else {
            return Err(AnalysisError::MalformedAnswer {
                answer_id: answer.id.clone(),
                reason: "question is not part of the analyzed exam",
            });
        };

        if policy.qualifies(answer.text.as_deref()) {
            bucket.push(answer);
        }
    }

    let mut alerts = Vec::new();

    for question in questions {
        if question.question_type != QuestionType::Subjective {
            tracing::warn!(question_id = %question.id, "Skipping non-subjective question");
            continue;
        }

        let Some(qualifying) = by_question.get(question.id.as_str()) else {
            continue;
        };
        if qualifying.len() < 2 {
            continue;
        }

        let candidates: Vec<Candidate<'_>> = qualifying
            .iter()
            .map(|answer| Candidate {
                student_id: &answer.student_id,
                text: answer.text.as_deref().unwrap_or_default(),
            })
            .collect();

        let edges = similarity_edges(&candidates, policy.threshold);
        for cluster in connected_clusters(candidates.len(), &edges) {
            alerts.push(to_alert(question, qualifying, &cluster, policy));
        }
    }

    // Stable, so equal scores keep discovery order.
    alerts.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));

    Ok(alerts)
}

fn to_alert(
    question: &QuestionRecord,
    answers: &[&AnswerRecord],
    cluster: &AnswerCluster,
    policy: &PlagiarismPolicy,
) -> PlagiarismAlert {
    let students = cluster
        .members
        .iter()
        .map(|&index| {
            let answer = answers[index];
            StudentMatch {
                name: answer.display_name().to_string(),
                snippet: policy.snippet(answer.text.as_deref().unwrap_or_default()),
            }
        })
        .collect();

    PlagiarismAlert {
        question_id: question.id.clone(),
        question_number: question.ordinal,
        question_text: question.text.clone(),
        question_marks: question.marks,
        students,
        similarity_score: as_percentage(cluster.max_score),
        group_size: cluster.members.len(),
    }
}

fn as_percentage(ratio: f64) -> f64 {
    (ratio * 1000.0).round_ties_even() / 10.0
}
