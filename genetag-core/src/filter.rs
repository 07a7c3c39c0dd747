//! Removal of obviously wrong gene name detections

use crate::annotation::Annotation;
use crate::error::Result;
use regex::Regex;

/// Names consisting of a single lowercase letter or only digits
pub const DEFAULT_FILTER_PATTERN: &str = "^[a-z]$|^[0-9]+$";

/// Drops annotations whose name matches a rejection pattern
///
/// The pattern is searched for anywhere in the name rather than required to
/// cover it; anchors inside the pattern decide what is rejected.
#[derive(Debug, Clone)]
pub struct AnnotationFilter {
    pattern: Regex,
}

impl AnnotationFilter {
    /// Build a filter from a custom rejection pattern
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The rejection pattern in use
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether an annotation with this name would be removed
    pub fn rejects(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Return the annotations that survive the filter, in their original order
    pub fn apply(&self, mut annotations: Vec<Annotation>) -> Vec<Annotation> {
        let rejected: Vec<usize> = annotations
            .iter()
            .enumerate()
            .filter(|(_, annotation)| self.rejects(&annotation.name))
            .map(|(index, _)| index)
            .collect();

        for &index in rejected.iter().rev() {
            let removed = annotations.remove(index);
            log::trace!("Filtered out {}", removed.gold_key());
        }

        log::debug!(
            "Filter removed {} annotations, {} remain",
            rejected.len(),
            annotations.len()
        );
        annotations
    }
}

impl Default for AnnotationFilter {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_FILTER_PATTERN).expect("default filter pattern is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(name: &str) -> Annotation {
        Annotation {
            id: "id".to_string(),
            name: name.to_string(),
            begin: 0,
            end: 0,
            correction: 0,
        }
    }

    #[test]
    fn test_rejects_single_lowercase_letter_and_digits() {
        let filter = AnnotationFilter::default();
        assert!(filter.rejects("a"));
        assert!(filter.rejects("z"));
        assert!(filter.rejects("42"));
        assert!(filter.rejects("7"));
    }

    #[test]
    fn test_keeps_everything_else() {
        let filter = AnnotationFilter::default();
        for name in ["A", "a1", "x7", "ab3", "", "ab", "4 2", "42a", "BRCA1"] {
            assert!(!filter.rejects(name), "{name:?} should be kept");
        }
    }

    #[test]
    fn test_apply_preserves_order_of_survivors() {
        let filter = AnnotationFilter::default();
        let input = vec![
            annotation("p53"),
            annotation("a"),
            annotation("BRCA1"),
            annotation("12"),
            annotation("c"),
            annotation("TNF"),
        ];

        let names: Vec<String> = filter.apply(input).into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["p53", "BRCA1", "TNF"]);
    }

    #[test]
    fn test_custom_pattern_uses_search_semantics() {
        let filter = AnnotationFilter::new("[0-9]{3}").unwrap();
        assert!(filter.rejects("abc1234"));
        assert!(!filter.rejects("ab12"));
        assert_eq!(filter.pattern(), "[0-9]{3}");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(AnnotationFilter::new("[unclosed").is_err());
    }
}
