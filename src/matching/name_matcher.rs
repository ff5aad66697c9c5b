//! Fuzzy name matching for "did you mean" suggestions.
//!
//! When a lookup by exact name misses, the command layer asks the matcher for
//! close names so a typo like `Jhon` can point the user at `John`.

/// A candidate name and its similarity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// The stored contact name
    pub name: String,

    /// Similarity score (0-100, where 100 is an exact match after normalization)
    pub score: u8,
}

/// Suggests contact names similar to a query.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    min_score: u8,
}

impl NameMatcher {
    /// Default minimum score for a name to be suggested.
    pub const DEFAULT_MIN_SCORE: u8 = 40;

    pub fn new() -> Self {
        Self::with_min_score(Self::DEFAULT_MIN_SCORE)
    }

    pub fn with_min_score(min_score: u8) -> Self {
        Self { min_score }
    }

    /// Score every candidate against `query` and keep the best ones.
    ///
    /// Results are sorted by score (highest first), then by name, and limited
    /// to `max_results`.
    pub fn find_matches<'a, I>(&self, query: &str, names: I, max_results: usize) -> Vec<NameMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = Self::normalize_name(query);

        let mut results: Vec<NameMatch> = names
            .into_iter()
            .filter_map(|name| {
                let score = Self::calculate_fuzzy_score(&query, &Self::normalize_name(name));
                (score >= self.min_score && score > 0).then(|| NameMatch {
                    name: name.to_string(),
                    score,
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        results.truncate(max_results);
        results
    }

    /// Names only, for rendering in a message.
    pub fn suggest<'a, I>(&self, query: &str, names: I, max_results: usize) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.find_matches(query, names, max_results)
            .into_iter()
            .map(|m| m.name)
            .collect()
    }

    /// Calculate fuzzy match score using substring matching and Levenshtein distance.
    ///
    /// Returns a score from 0-100.
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 100;
        }

        // Contains match (substring), 60-90 range by coverage
        if target.contains(query) || query.contains(target) {
            let (short, long) = if query.len() <= target.len() {
                (query, target)
            } else {
                (target, query)
            };
            let ratio = short.chars().count() as f64 / long.chars().count() as f64;
            return (30.0 * ratio + 60.0) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 90.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1: Vec<char> = s1.chars().collect();
        let s2: Vec<char> = s2.chars().collect();

        if s1.is_empty() {
            return s2.len();
        }
        if s2.is_empty() {
            return s1.len();
        }

        // Two rolling rows instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2.len()).collect();
        let mut current = vec![0; s2.len() + 1];

        for (i, c1) in s1.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 5] = ["John", "Jane", "Johnny", "Alice", "Bob"];

    #[test]
    fn test_normalize_name() {
        assert_eq!(NameMatcher::normalize_name("  Mary   Ann "), "mary ann");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(NameMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(NameMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(NameMatcher::levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_case_insensitive_exact_match_scores_highest() {
        let matches = NameMatcher::new().find_matches("jOhN", NAMES, 5);
        assert_eq!(matches[0].name, "John");
        assert_eq!(matches[0].score, 100);
    }

    #[test]
    fn test_typo_suggests_close_name() {
        let suggestions = NameMatcher::new().suggest("Jhon", NAMES, 3);
        assert_eq!(suggestions.first().map(String::as_str), Some("John"));
    }

    #[test]
    fn test_substring_match() {
        let suggestions = NameMatcher::new().suggest("Ali", NAMES, 3);
        assert_eq!(suggestions, vec!["Alice".to_string()]);
    }

    #[test]
    fn test_unrelated_query_has_no_suggestions() {
        assert!(NameMatcher::new().suggest("Xavier", NAMES, 3).is_empty());
    }

    #[test]
    fn test_max_results_limit() {
        let matches = NameMatcher::with_min_score(0).find_matches("Jo", NAMES, 1);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_empty_query() {
        assert!(NameMatcher::new().suggest("   ", NAMES, 3).is_empty());
    }
}
