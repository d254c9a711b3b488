// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::error::AppError;

/// Row shape of the 'exam_questions' table.
/// `options` holds the raw stored text and is decoded before leaving the
/// service boundary.
#[derive(Debug, FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub question: String,
    pub options: String,
    pub correct_answer: String,
}

impl QuestionRow {
    /// Decodes the stored options text into the client-facing shape.
    /// A row whose options no longer parse is an internal-consistency
    /// failure; the whole read fails rather than returning partial data.
    pub fn into_question(self) -> Result<Question, AppError> {
        let options = decode_options(&self.options).map_err(|e| {
            AppError::CorruptRecord(format!("question {}: bad options text: {}", self.id, e))
        })?;

        Ok(Question {
            id: self.id,
            question: self.question,
            options,
            correct_answer: self.correct_answer,
        })
    }
}

/// Question as served to clients, with `options` decoded into an ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// DTO for creating or fully replacing a question.
#[derive(Debug, Deserialize, Validate)]
pub struct QuestionPayload {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    #[validate(length(min = 1, message = "correct_answer must not be empty"))]
    pub correct_answer: String,
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.is_empty() {
        return Err(validator::ValidationError::new("options_cannot_be_empty"));
    }
    Ok(())
}

/// Serialization contract for the `options` column: the canonical JSON
/// encoding of an array of strings.
pub fn encode_options(options: &[String]) -> String {
    // A slice of strings always serializes; never fall back to an empty list.
    serde_json::to_string(options).expect("string slice serializes to JSON")
}

/// Decodes the stored options text, rejecting anything that is not a JSON
/// array of strings.
pub fn decode_options(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}
