//! Raw text cleaning and tokenization.
//!
//! Cleaning strips the noise that short-message corpora carry (URLs,
//! @-mentions, retweet markers) and is idempotent: running it over already
//! cleaned text is a no-op. Tokenization keeps runs of three or more
//! letters, lower-cased, minus a standard English stopword set. The
//! minimum token length and letters-only rule determine the vocabulary,
//! so they are reproduced exactly.

use regex::Regex;
use tracing::trace;

/// Literal retweet marker removed during cleaning.
const RETWEET_MARKER: &str = "RT:";

/// Deterministic text normalizer.
///
/// Holds the compiled patterns; build one per run and share it across
/// documents.
pub struct Normalizer {
    /// A URL-scheme marker and everything up to the next whitespace
    url: Regex,
    /// One or more @-mention groups preceded by start-of-string or whitespace
    mention: Regex,
    /// Runs of three or more letters
    token: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            url: Regex::new(r"http\S*").expect("url pattern is valid"),
            mention: Regex::new(r"(?:^|\s)(?:@+[A-Za-z0-9_-]+)+")
                .expect("mention pattern is valid"),
            token: Regex::new(r"[A-Za-z]{3,}").expect("token pattern is valid"),
        }
    }

    /// Remove URLs, @-mentions and retweet markers, then trim.
    ///
    /// The rewrite passes run repeatedly until the text stops changing, so
    /// a removal that exposes new noise (e.g. `RT @x:` collapsing to `RT:`)
    /// is still cleaned away and `clean(clean(x)) == clean(x)` holds.
    pub fn clean(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        loop {
            let pass = self.url.replace_all(&text, "");
            let pass = self.mention.replace_all(&pass, "");
            let pass = pass.replace(RETWEET_MARKER, "");
            if pass == text {
                break;
            }
            trace!(before = text.len(), after = pass.len(), "Cleaning pass");
            text = pass;
        }
        text.trim().to_string()
    }

    /// Split cleaned text into lower-cased tokens.
    ///
    /// Keeps runs of 3+ alphabetic characters; shorter runs and anything
    /// non-alphabetic are discarded, as are stopwords. An empty result is
    /// legal and yields a zero vector downstream.
    pub fn tokenize(&self, cleaned: &str) -> Vec<String> {
        self.token
            .find_iter(cleaned)
            .map(|m| m.as_str().to_lowercase())
            .filter(|t| !is_stop_word(t))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a word is a stop word.
fn is_stop_word(word: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
        "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each",
        "else", "every", "few", "for", "from", "further", "had", "has", "have", "having", "he",
        "her", "here", "hers", "herself", "him", "himself", "his", "how", "if", "in", "into",
        "is", "it", "its", "itself", "just", "me", "might", "more", "most", "must", "my",
        "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
        "our", "ours", "ourselves", "out", "over", "own", "same", "shall", "she", "should", "so",
        "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
        "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
        "up", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
        "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
    ];

    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_urls_mentions_and_marker() {
        let normalizer = Normalizer::new();
        let cleaned = normalizer.clean("check out http://example.com/x now @joe RT: cool");
        assert!(!cleaned.contains("http"));
        assert!(!cleaned.contains("example"));
        assert!(!cleaned.contains("@joe"));
        assert!(!cleaned.contains("RT:"));
        assert!(cleaned.contains("check out"));
        assert!(cleaned.contains("cool"));
    }

    #[test]
    fn test_clean_is_idempotent() {
        let normalizer = Normalizer::new();
        let inputs = [
            "check out http://example.com/x now @joe RT: cool",
            "RT:@joe nested marker",
            "RT @x: exposed marker",
            "plain text stays plain",
            "  padded  ",
            "@leading mention",
            "trailing mention @tail",
        ];
        for input in inputs {
            let once = normalizer.clean(input);
            let twice = normalizer.clean(&once);
            assert_eq!(once, twice, "clean not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_clean_url_runs_to_end_of_string() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.clean("read https://t.co/abc123"), "read");
    }

    #[test]
    fn test_clean_keeps_mid_word_at_signs() {
        let normalizer = Normalizer::new();
        // Not preceded by whitespace or start-of-string, so not a mention
        assert_eq!(normalizer.clean("mail me x@example"), "mail me x@example");
    }

    #[test]
    fn test_clean_removes_mention_chains() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.clean("hello @a@b world"), "hello world");
    }

    #[test]
    fn test_tokenize_lowercases_and_keeps_three_plus_letters() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.tokenize("big Cats Run fast");
        assert_eq!(tokens, vec!["big", "cats", "run", "fast"]);
    }

    #[test]
    fn test_tokenize_drops_short_and_non_alphabetic_runs() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.tokenize("a is 42 ok but markets123crash");
        // "a"/"is"/"ok" too short or stopwords, digits split the letter runs
        assert_eq!(tokens, vec!["markets", "crash"]);
    }

    #[test]
    fn test_tokenize_removes_stop_words() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.tokenize("the quick brown fox and the lazy dog");
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"and".to_string()));
        assert!(tokens.contains(&"quick".to_string()));
        assert!(tokens.contains(&"lazy".to_string()));
    }

    #[test]
    fn test_tokenize_empty_after_filtering_is_legal() {
        let normalizer = Normalizer::new();
        assert!(normalizer.tokenize("a an 12 :)").is_empty());
        assert!(normalizer.tokenize("").is_empty());
    }

    #[test]
    fn test_clean_then_tokenize() {
        let normalizer = Normalizer::new();
        let cleaned = normalizer.clean("RT: @fan Big cats run FAST http://cats.example/x");
        let tokens = normalizer.tokenize(&cleaned);
        assert_eq!(tokens, vec!["big", "cats", "run", "fast"]);
    }
}
