//! Display helpers shared by the terminal and browser renderers

use chrono::{DateTime, NaiveDate};

use crate::types::{HealthStatus, LeaderboardEntry};
use crate::validation::MAX_UPLOADS;

pub const LEADERBOARD_EMPTY: &str = "No submissions yet. Be the first to compete!";
pub const SCORES_EMPTY: &str = "No submissions yet. Upload your resume to get started!";

/// One decimal at most; whole numbers print without a fraction.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

pub fn format_years(value: f64) -> String {
    format!("{} yrs", format_number(value))
}

pub fn medal(rank: u32) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "",
    }
}

/// "3 🥇" style rank cell
pub fn rank_label(rank: u32) -> String {
    let medal = medal(rank);
    if medal.is_empty() {
        rank.to_string()
    } else {
        format!("{} {}", rank, medal)
    }
}

pub fn uploads_label(count: u32) -> String {
    format!("Uploads: {}/{}", count, MAX_UPLOADS)
}

/// `Welcome, {name} | Uploads: n/5`
pub fn welcome_line(name: &str, count: u32) -> String {
    format!("Welcome, {} | {}", name, uploads_label(count))
}

/// Calendar date of a backend timestamp.
///
/// Accepts RFC 3339 and the space-separated form the backend emits
/// (`2025-03-01 10:00:00.123456+00:00`). Anything unparseable is shown as is.
pub fn format_date(created_at: &str) -> String {
    let trimmed = created_at.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Some(date) = trimmed
        .get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
    {
        return date.format("%Y-%m-%d").to_string();
    }
    trimmed.to_string()
}

/// Comma-joined list, "-" when empty.
pub fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Rank, participant, score, skills, experience
pub fn leaderboard_row(entry: &LeaderboardEntry) -> [String; 5] {
    [
        rank_label(entry.rank),
        entry.display_name().to_string(),
        format_percent(entry.score),
        entry.skills_count.to_string(),
        format_years(entry.experience),
    ]
}

pub fn health_line(status: Option<&HealthStatus>) -> String {
    match status {
        Some(h) if !h.status.is_empty() => format!("Backend is up ({})", h.status),
        Some(_) => "Backend is up".to_string(),
        None => "Backend is unreachable or unhealthy".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(72.5), "72.5");
        assert_eq!(format_number(72.46), "72.5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_percent_and_years() {
        assert_eq!(format_percent(91.0), "91%");
        assert_eq!(format_years(3.0), "3 yrs");
    }

    #[test]
    fn test_medals() {
        assert_eq!(medal(1), "🥇");
        assert_eq!(medal(2), "🥈");
        assert_eq!(medal(3), "🥉");
        assert_eq!(medal(4), "");
        assert_eq!(rank_label(1), "1 🥇");
        assert_eq!(rank_label(7), "7");
    }

    #[test]
    fn test_welcome_line() {
        assert_eq!(welcome_line("Ada", 2), "Welcome, Ada | Uploads: 2/5");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-01T10:00:00+00:00"), "2025-03-01");
        assert_eq!(format_date("2025-03-01 10:00:00.123456+00:00"), "2025-03-01");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_join_or_dash() {
        assert_eq!(join_or_dash(&[]), "-");
        assert_eq!(join_or_dash(&["rust".to_string(), "sql".to_string()]), "rust, sql");
    }

    #[test]
    fn test_leaderboard_row_shows_score_as_percent() {
        let entry = LeaderboardEntry {
            rank: 2,
            email: Some("grace@x.com".to_string()),
            score: 87.5,
            skills_count: 9,
            experience: 4.0,
            ..Default::default()
        };
        assert_eq!(
            leaderboard_row(&entry),
            ["2 🥈", "grace@x.com", "87.5%", "9", "4 yrs"].map(String::from)
        );
    }

    #[test]
    fn test_health_line() {
        let up = HealthStatus {
            status: "healthy".into(),
            ..Default::default()
        };
        assert_eq!(health_line(Some(&up)), "Backend is up (healthy)");
        assert_eq!(health_line(Some(&HealthStatus::default())), "Backend is up");
        assert_eq!(health_line(None), "Backend is unreachable or unhealthy");
    }
}
