//! Inline fuzzy filter for the links tab

use nucleo_matcher::{
    Config, Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

use crate::models::Link;

/// `/` search state; matches against `short_code` and `original_url`
pub struct LinkFilter {
    pub query: String,
    pub editing: bool,
    matcher: Matcher,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            editing: false,
            matcher: Matcher::new(Config::DEFAULT),
        }
    }
}

impl LinkFilter {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.editing = false;
    }

    /// Links matching the query, in their original order
    pub fn apply(&mut self, links: &[Link]) -> Vec<Link> {
        if !self.is_active() {
            return links.to_vec();
        }

        let pattern = Pattern::parse(&self.query, CaseMatching::Ignore, Normalization::Smart);
        let mut buf = Vec::new();
        links
            .iter()
            .filter(|link| {
                let haystack = format!("{} {}", link.short_code, link.original_url);
                pattern
                    .score(Utf32Str::new(&haystack, &mut buf), &mut self.matcher)
                    .is_some()
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn link(code: &str, url: &str) -> Link {
        Link {
            short_code: code.to_string(),
            original_url: url.to_string(),
            clicks: 0,
            created_at: Utc::now(),
            created_by_username: None,
        }
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let links = vec![link("a", "https://a.com"), link("b", "https://b.com")];
        let mut filter = LinkFilter::default();
        assert_eq!(filter.apply(&links).len(), 2);
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let links = vec![
            link("zz1", "https://github.com/rust"),
            link("ab2", "https://example.com"),
            link("gh3", "https://github.com/tokio"),
        ];
        let mut filter = LinkFilter {
            query: "github".to_string(),
            ..Default::default()
        };

        let codes: Vec<_> = filter
            .apply(&links)
            .into_iter()
            .map(|l| l.short_code)
            .collect();
        assert_eq!(codes, vec!["zz1", "gh3"]);
    }

    #[test]
    fn test_filter_matches_short_code() {
        let links = vec![link("Xyz42", "https://a.com"), link("q", "https://b.com")];
        let mut filter = LinkFilter {
            query: "xyz".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&links).len(), 1);
    }
}
