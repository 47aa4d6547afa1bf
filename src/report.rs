//! Terminal rendering
//!
//! Plain strings so the output can be asserted on.

use perfect_cv_common::format::{
    format_date, format_number, format_percent, format_years, health_line, join_or_dash, leaderboard_row,
    LEADERBOARD_EMPTY, SCORES_EMPTY,
};
use perfect_cv_common::{CompetitionStats, HealthStatus, LeaderboardEntry, ScoreHistory, ScoreResult};
use std::fmt::Write;

pub fn score_result(result: &ScoreResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Score: {}", format_percent(result.score));
    let _ = writeln!(out, "Verdict: {}", result.verdict);
    let _ = writeln!(out, "Skills: {}", join_or_dash(&result.skills));
    let _ = writeln!(out, "Matched skills: {}", join_or_dash(&result.matched_skills));
    let _ = writeln!(out, "Experience: {} years", format_number(result.experience_years));
    if let Some(similarity) = result.keyword_similarity {
        let _ = writeln!(out, "Keyword similarity: {}", format_percent(similarity));
    }
    let _ = writeln!(out, "Plagiarism: {}", format_percent(result.plagiarism_score));

    if let Some(breakdown) = &result.breakdown {
        let _ = writeln!(out, "\nBreakdown:");
        for (label, value) in breakdown.categories() {
            let _ = writeln!(out, "  {:<18} {}", label, format_number(value));
        }
    }
    if !result.feedback.is_empty() {
        let _ = writeln!(out, "\nFeedback:");
        for line in &result.feedback {
            let _ = writeln!(out, "  - {}", line);
        }
    }
    if !result.penalties.is_empty() {
        let _ = writeln!(out, "\nPenalties:");
        for line in &result.penalties {
            let _ = writeln!(out, "  - {}", line);
        }
    }
    out
}

pub fn scores(history: &ScoreHistory) -> String {
    let mut out = String::new();
    if let Some(best) = history.best_score {
        let _ = writeln!(out, "Best Score: {}\n", format_percent(best));
    }
    if history.scores.is_empty() {
        let _ = writeln!(out, "{}", SCORES_EMPTY);
        return out;
    }

    let _ = writeln!(out, "{:<4} {:<8} {:<8} {:<12} {}", "#", "Score", "Skills", "Experience", "Date");
    for (index, record) in history.scores.iter().enumerate() {
        let date = record.created_at.as_deref().map(format_date).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<4} {:<8} {:<8} {:<12} {}",
            index + 1,
            format_percent(record.score),
            record.skills_count,
            format_years(record.experience_years),
            date
        );
    }
    out
}

pub fn leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        let _ = writeln!(out, "{}", LEADERBOARD_EMPTY);
        return out;
    }

    let _ = writeln!(
        out,
        "{:<7} {:<32} {:<8} {:<8} {}",
        "Rank", "Participant", "Score", "Skills", "Experience"
    );
    for entry in entries {
        let [rank, name, score, skills, experience] = leaderboard_row(entry);
        let _ = writeln!(
            out,
            "{:<7} {:<32} {:<8} {:<8} {}",
            rank, name, score, skills, experience
        );
    }
    out
}

pub fn stats(stats: &CompetitionStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Participants: {}", stats.total_participants);
    let _ = writeln!(out, "Average score: {}", format_percent(stats.avg_score));
    let _ = writeln!(out, "Top score: {}", format_percent(stats.top_score));
    let _ = writeln!(out, "High scorers (80%+): {}", stats.high_scorers);
    if !stats.score_distribution.is_empty() {
        let _ = writeln!(out, "\nScore distribution:");
        for bucket in &stats.score_distribution {
            let _ = writeln!(out, "  {:<10} {}", bucket.range, bucket.count);
        }
    }
    if !stats.experience_distribution.is_empty() {
        let _ = writeln!(out, "\nExperience distribution:");
        for bucket in &stats.experience_distribution {
            let _ = writeln!(out, "  {:<10} {}", bucket.range, bucket.count);
        }
    }
    out
}

pub fn health(status: Option<&HealthStatus>) -> String {
    health_line(status)
}
