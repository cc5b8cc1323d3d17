//! 班级统计 - 业务能力层
//!
//! 所有学生结果在这里汇总，是并行提取之后唯一的合并点。

use crate::error::{AppResult, GradingError};
use crate::models::{AnswerKey, ClassStatistics, QuestionDifficulty, StudentSubmission};
use crate::services::scoring::score;
use std::collections::BTreeMap;

/// 汇总班级统计
///
/// # 参数
/// - `key`: 答案卡
/// - `submissions`: 全部学生答卷（顺序即排名并列时的先后）
///
/// # 返回
/// 平均/最高/最低分、按正确率降序的排名、按错误次数降序的难度表
pub fn aggregate(key: &AnswerKey, submissions: &[StudentSubmission]) -> ClassStatistics {
    let mut ranking: Vec<_> = submissions.iter().map(|s| score(key, s)).collect();

    let (average, max, min) = if key.is_empty() || ranking.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let percentages = ranking.iter().map(|r| r.percentage);
        let sum: f64 = percentages.clone().sum();
        (
            sum / ranking.len() as f64,
            percentages.clone().fold(f64::MIN, f64::max),
            percentages.fold(f64::MAX, f64::min),
        )
    };

    // 每道题初始化为 0，保证答案卡中的每道题都有一条记录
    let mut errors: BTreeMap<u32, u32> = key.iter().map(|(q, _)| (q, 0)).collect();
    for submission in submissions {
        for (question, expected) in key.iter() {
            if submission.answers.get(&question) != Some(&expected) {
                *errors.entry(question).or_default() += 1;
            }
        }
    }

    let student_count = submissions.len();
    let mut difficulty: Vec<QuestionDifficulty> = errors
        .into_iter()
        .map(|(question_number, error_count)| QuestionDifficulty {
            question_number,
            error_count,
            error_percentage: if student_count > 0 {
                error_count as f64 / student_count as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();

    // sort_by 是稳定排序，并列时保持原有顺序
    ranking.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    difficulty.sort_by(|a, b| b.error_count.cmp(&a.error_count));

    ClassStatistics {
        average,
        max,
        min,
        student_count,
        total_questions: key.len(),
        ranking,
        difficulty,
    }
}

/// 批量评分入口：没有答案卡属于调用方误用
pub fn grade_batch(
    key: Option<&AnswerKey>,
    submissions: &[StudentSubmission],
) -> AppResult<ClassStatistics> {
    let key = key.ok_or(GradingError::MissingAnswerKey)?;
    Ok(aggregate(key, submissions))
}
