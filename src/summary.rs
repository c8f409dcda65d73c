use indexmap::IndexMap;

use crate::models::CommitRecord;

const POSITIVE_KEYWORDS: [&str; 6] = ["fix", "add", "improve", "refactor", "update", "feat"];
const NEGATIVE_KEYWORDS: [&str; 7] = ["bug", "fail", "broken", "revert", "wip", "fixme", "hotfix"];

const TOP_CONTRIBUTORS: usize = 5;

/// Keyword sentiment for a commit message: +1 for each positive keyword
/// present, -1 for each negative keyword present. Presence counts once per
/// keyword; matching is a case-insensitive substring check.
pub fn sentiment_score(message: &str) -> i32 {
    let message = message.to_lowercase();
    let mut score = 0;

    for keyword in POSITIVE_KEYWORDS {
        if message.contains(keyword) {
            score += 1;
        }
    }
    for keyword in NEGATIVE_KEYWORDS {
        if message.contains(keyword) {
            score -= 1;
        }
    }

    score
}

/// Render the one-line summary: commit count, top contributors by commit
/// count (ties keep encounter order), and the average sentiment score.
pub fn summarize_commits(commits: &[CommitRecord]) -> String {
    let mut by_author: IndexMap<&str, usize> = IndexMap::new();
    let mut total_score = 0;

    for commit in commits {
        let author = commit.author.as_deref().unwrap_or("unknown");
        *by_author.entry(author).or_insert(0) += 1;
        total_score += commit.message.as_deref().map_or(0, sentiment_score);
    }

    // Stable sort keeps first-seen order among equal counts
    let mut authors: Vec<_> = by_author.into_iter().collect();
    authors.sort_by(|a, b| b.1.cmp(&a.1));

    let top_authors = authors
        .iter()
        .take(TOP_CONTRIBUTORS)
        .map(|(name, count)| format!("{name} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");

    let avg_sentiment = if commits.is_empty() {
        "0".to_string()
    } else {
        #[allow(clippy::cast_precision_loss)]
        let avg = f64::from(total_score) / commits.len() as f64;
        format!("{avg:.2}")
    };

    format!(
        "Commit summary: {} commits. Top contributors: {}. Average commit sentiment score: {}",
        commits.len(),
        top_authors,
        avg_sentiment
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(author: Option<&str>, message: Option<&str>) -> CommitRecord {
        CommitRecord {
            sha: "abc123".to_string(),
            author: author.map(str::to_string),
            message: message.map(str::to_string),
            date: None,
            url: None,
        }
    }

    #[test]
    fn test_sentiment_positive_and_negative_cancel() {
        assert_eq!(sentiment_score("fix bug"), 0);
    }

    #[test]
    fn test_sentiment_accumulates_positives() {
        assert_eq!(sentiment_score("feat: add user login"), 2);
    }

    #[test]
    fn test_sentiment_is_case_insensitive() {
        assert_eq!(sentiment_score("FIX the build"), 1);
    }

    #[test]
    fn test_sentiment_counts_presence_not_occurrences() {
        assert_eq!(sentiment_score("fix fix fix"), 1);
    }

    #[test]
    fn test_sentiment_overlapping_keywords_score_independently() {
        // "fixme" also contains "fix", so +1 and -1 cancel
        assert_eq!(sentiment_score("FIXME: broken parser"), -1);
        assert_eq!(sentiment_score("fixme"), 0);
    }

    #[test]
    fn test_sentiment_empty_message_is_zero() {
        assert_eq!(sentiment_score(""), 0);
    }

    #[test]
    fn test_top_contributors_sorted_by_count() {
        let commits = vec![
            commit(Some("alice"), None),
            commit(Some("alice"), None),
            commit(Some("bob"), None),
        ];

        let summary = summarize_commits(&commits);
        assert!(summary.contains("Top contributors: alice (2), bob (1)."));
    }

    #[test]
    fn test_top_contributors_ties_keep_encounter_order() {
        let commits = vec![
            commit(Some("bob"), None),
            commit(Some("alice"), None),
            commit(Some("alice"), None),
            commit(Some("bob"), None),
        ];

        let summary = summarize_commits(&commits);
        assert!(summary.contains("Top contributors: bob (2), alice (2)."));
    }

    #[test]
    fn test_top_contributors_truncates_to_five() {
        let commits: Vec<_> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|name| commit(Some(name), None))
            .collect();

        let summary = summarize_commits(&commits);
        assert!(summary.contains("a (1), b (1), c (1), d (1), e (1)."));
        assert!(!summary.contains("f (1)"));
    }

    #[test]
    fn test_missing_author_buckets_as_unknown() {
        let commits = vec![commit(None, None)];

        let summary = summarize_commits(&commits);
        assert!(summary.contains("Top contributors: unknown (1)."));
    }

    #[test]
    fn test_empty_input_renders_literal_zero() {
        let summary = summarize_commits(&[]);
        assert_eq!(
            summary,
            "Commit summary: 0 commits. Top contributors: . Average commit sentiment score: 0"
        );
    }

    #[test]
    fn test_full_summary_format() {
        let commits = vec![
            commit(Some("alice"), Some("feat: add user login")),
            commit(Some("bob"), Some("fix: bug in auth")),
            commit(Some("alice"), Some("refactor: improve session handling")),
        ];

        // scores: 2 + 0 + 2 => average 4/3 = 1.33
        let summary = summarize_commits(&commits);
        assert_eq!(
            summary,
            "Commit summary: 3 commits. Top contributors: alice (2), bob (1). \
             Average commit sentiment score: 1.33"
        );
    }
}
