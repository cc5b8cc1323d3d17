//! 单个学生评分

use crate::models::{AnswerKey, ScoreResult, StudentSubmission};

/// 按答案卡逐题比对，未作答算错；答案卡之外的作答忽略
pub fn score(key: &AnswerKey, submission: &StudentSubmission) -> ScoreResult {
    let mut correct = 0u32;
    let mut wrong = 0u32;

    for (question, expected) in key.iter() {
        if submission.answers.get(&question) == Some(&expected) {
            correct += 1;
        } else {
            wrong += 1;
        }
    }

    let total_questions = key.len() as u32;
    let percentage = if total_questions > 0 {
        correct as f64 / total_questions as f64 * 100.0
    } else {
        0.0
    };

    ScoreResult {
        student_name: submission.name.clone(),
        student_id: submission.id.clone(),
        correct,
        wrong,
        percentage,
        total_questions,
    }
}
