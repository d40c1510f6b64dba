//! Sentiment Analyzer
//!
//! Crude keyword-count sentiment estimate. The highest-scoring sentiment
//! wins; ties resolve to the earliest entry in the table, so detection is
//! deterministic.

use crate::models::sentiment::Sentiment;

/// Fixed keyword table, in tie-break order.
const SENTIMENT_KEYWORDS: &[(Sentiment, &[&str])] = &[
    (
        Sentiment::Worried,
        &["worried", "concerned", "anxious", "scared", "afraid", "nervous", "panic", "stress"],
    ),
    (
        Sentiment::Curious,
        &["curious", "interested", "wonder", "learn", "know more", "tell me", "explain", "how does"],
    ),
    (
        Sentiment::Frustrated,
        &["frustrated", "annoyed", "angry", "mad", "upset", "irritated", "confused", "don't understand"],
    ),
    (
        Sentiment::Happy,
        &["great", "awesome", "excellent", "wonderful", "amazing", "love", "like", "good", "nice"],
    ),
    (
        Sentiment::Confident,
        &["confident", "sure", "ready", "prepared", "understand", "got it", "clear", "easy"],
    ),
    (
        Sentiment::Overwhelmed,
        &["overwhelmed", "too much", "complicated", "difficult", "hard", "complex", "lost"],
    ),
];

/// Keyword-counting sentiment analyzer.
pub struct SentimentAnalyzer;

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Estimate the dominant sentiment of one utterance.
    pub fn detect(&self, input: &str) -> Sentiment {
        if input.trim().is_empty() {
            return Sentiment::Neutral;
        }

        let lowered = input.to_lowercase();
        let mut best = Sentiment::Neutral;
        let mut best_score = 0usize;

        for (sentiment, keywords) in SENTIMENT_KEYWORDS {
            let score = keywords.iter().filter(|k| lowered.contains(*k)).count();
            if score > best_score {
                best = *sentiment;
                best_score = score;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_for_plain_input() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.detect("show my tasks"), Sentiment::Neutral);
        assert_eq!(analyzer.detect("   "), Sentiment::Neutral);
    }

    #[test]
    fn test_worried_keywords_dominate() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(
            analyzer.detect("i'm scared and anxious about this breach"),
            Sentiment::Worried
        );
    }

    #[test]
    fn test_highest_count_wins() {
        let analyzer = SentimentAnalyzer::new();
        // One worried keyword vs two frustrated keywords.
        assert_eq!(
            analyzer.detect("i'm worried but mostly angry and upset"),
            Sentiment::Frustrated
        );
    }

    #[test]
    fn test_tie_resolves_to_table_order() {
        let analyzer = SentimentAnalyzer::new();
        // "scared" (worried) ties with "angry" (frustrated); worried is first.
        assert_eq!(analyzer.detect("scared and angry"), Sentiment::Worried);
    }
}
