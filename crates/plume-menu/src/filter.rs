//! Filter seam for menu options.
//!
//! Matching is delegated through the [`MenuFilter`] trait so fuzzy scoring
//! can live outside this crate. The built-in [`SubstringFilter`] is the
//! default: case-insensitive substring matching with highlight indices.

use plume_core::{FilteredOption, MenuOption};

/// Predicate that decides which options survive the current filter text.
///
/// Implementations return survivors in display order, annotated with the
/// character indices that matched.
pub trait MenuFilter: Send + Sync {
    /// Filter `options` against `query`.
    ///
    /// An empty query must pass every option through unchanged.
    fn filter(&self, options: &[MenuOption], query: &str) -> Vec<FilteredOption>;
}

/// Case-insensitive substring filter.
///
/// An option matches when its label or detail contains the query as a
/// contiguous substring. Matched character positions are reported as
/// highlights for the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter {
    /// Match case-sensitively instead.
    pub case_sensitive: bool,
}

impl SubstringFilter {
    /// Create a case-insensitive substring filter.
    pub fn new() -> Self {
        Self::default()
    }

    fn highlights(&self, haystack: &str, needle: &str) -> Option<Vec<usize>> {
        let (h, n) = if self.case_sensitive {
            (haystack.to_string(), needle.to_string())
        } else {
            (haystack.to_lowercase(), needle.to_lowercase())
        };

        // Byte offset of the match, converted to a character index so
        // highlights line up with rendered glyphs.
        let byte_start = h.find(&n)?;
        let char_start = h[..byte_start].chars().count();
        let char_len = n.chars().count();
        Some((char_start..char_start + char_len).collect())
    }
}

impl MenuFilter for SubstringFilter {
    fn filter(&self, options: &[MenuOption], query: &str) -> Vec<FilteredOption> {
        if query.is_empty() {
            return options
                .iter()
                .cloned()
                .map(FilteredOption::unhighlighted)
                .collect();
        }

        options
            .iter()
            .filter_map(|option| {
                if let Some(label_highlights) = self.highlights(&option.label, query) {
                    return Some(FilteredOption {
                        option: option.clone(),
                        label_highlights,
                        detail_highlights: Vec::new(),
                    });
                }

                let detail = option.detail.as_deref()?;
                let detail_highlights = self.highlights(detail, query)?;
                Some(FilteredOption {
                    option: option.clone(),
                    label_highlights: Vec::new(),
                    detail_highlights,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<MenuOption> {
        vec![
            MenuOption::new("Open File").with_detail("workspace"),
            MenuOption::new("Close Buffer"),
            MenuOption::new("Quit").with_detail("close the editor"),
        ]
    }

    #[test]
    fn test_empty_query_passes_everything() {
        let filter = SubstringFilter::new();
        let filtered = filter.filter(&options(), "");
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|f| f.label_highlights.is_empty()));
    }

    #[test]
    fn test_label_match_is_case_insensitive() {
        let filter = SubstringFilter::new();
        let filtered = filter.filter(&options(), "open");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].option.label, "Open File");
        assert_eq!(filtered[0].label_highlights, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_detail_match_when_label_misses() {
        let filter = SubstringFilter::new();
        let filtered = filter.filter(&options(), "editor");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].option.label, "Quit");
        assert!(filtered[0].label_highlights.is_empty());
        assert_eq!(filtered[0].detail_highlights.len(), "editor".len());
    }

    #[test]
    fn test_case_sensitive_mode() {
        let filter = SubstringFilter {
            case_sensitive: true,
        };
        assert!(filter.filter(&options(), "open").is_empty());
        assert_eq!(filter.filter(&options(), "Open").len(), 1);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let filter = SubstringFilter::new();
        assert!(filter.filter(&options(), "zzz").is_empty());
    }

    #[test]
    fn test_result_never_larger_than_input() {
        let filter = SubstringFilter::new();
        let opts = options();
        for query in ["", "o", "open", "e", "zzz"] {
            assert!(filter.filter(&opts, query).len() <= opts.len());
        }
    }
}
