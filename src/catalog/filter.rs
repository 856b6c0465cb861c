use crate::catalog::data::ContentCatalog;
use crate::catalog::models::{CatalogEntry, CategoryTag};

/// Selected category tag plus the derivation of the visible subset. The
/// visible sequence is recomputed in full on every read, so a selection
/// change always replaces the whole grid at once.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    selected: CategoryTag,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            selected: CategoryTag::All,
        }
    }
}

impl CategoryFilter {
    pub fn selected(&self) -> CategoryTag {
        self.selected
    }

    /// Returns true when the selection actually changed. Re-selecting the
    /// current tag is a no-op transition.
    pub fn select(&mut self, tag: CategoryTag) -> bool {
        if self.selected == tag {
            return false;
        }
        self.selected = tag;
        true
    }

    /// Entries matching the selected tag, in catalog order. For `All` this
    /// is products, then designs, then videos.
    pub fn visible<'a>(&self, catalog: &'a ContentCatalog) -> Vec<&'a CatalogEntry> {
        catalog
            .entries()
            .filter(|entry| self.selected.matches(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_shows_everything_in_kind_order() {
        let catalog = ContentCatalog::built_in();
        let filter = CategoryFilter::default();

        let visible = filter.visible(&catalog);
        assert_eq!(visible.len(), 42);

        let expected: Vec<&CatalogEntry> = catalog.entries().collect();
        let got_titles: Vec<&str> = visible.iter().map(|entry| entry.title()).collect();
        let expected_titles: Vec<&str> = expected.iter().map(|entry| entry.title()).collect();
        assert_eq!(got_titles, expected_titles);
    }

    #[test]
    fn each_tag_shows_only_matching_entries() {
        let catalog = ContentCatalog::built_in();
        let mut filter = CategoryFilter::default();

        for tag in CategoryTag::ALL {
            filter.select(tag);
            for entry in filter.visible(&catalog) {
                assert!(tag.matches(entry), "{} should match {tag:?}", entry.title());
            }
        }
    }

    #[test]
    fn video_selection_yields_the_three_videos_in_catalog_order() {
        let catalog = ContentCatalog::built_in();
        let mut filter = CategoryFilter::default();

        assert!(filter.select(CategoryTag::Video));
        let visible = filter.visible(&catalog);
        let titles: Vec<&str> = visible.iter().map(|entry| entry.title()).collect();
        assert_eq!(
            titles,
            vec!["Product Launch Teaser", "Brand Story", "Tutorial Series"]
        );
    }

    #[test]
    fn filtering_preserves_relative_order_within_a_kind() {
        let catalog = ContentCatalog::built_in();
        let mut filter = CategoryFilter::default();
        filter.select(CategoryTag::Design);

        let filtered: Vec<&str> = filter
            .visible(&catalog)
            .iter()
            .map(|entry| entry.title())
            .collect();
        let from_catalog: Vec<&str> = catalog
            .designs()
            .iter()
            .map(CatalogEntry::title)
            .collect();
        assert_eq!(filtered, from_catalog);
    }

    #[test]
    fn reselecting_the_current_tag_is_a_no_op() {
        let catalog = ContentCatalog::built_in();
        let mut filter = CategoryFilter::default();

        assert!(filter.select(CategoryTag::ThreeD));
        let once: Vec<&str> = filter
            .visible(&catalog)
            .iter()
            .map(|entry| entry.title())
            .collect();

        assert!(!filter.select(CategoryTag::ThreeD));
        let twice: Vec<&str> = filter
            .visible(&catalog)
            .iter()
            .map(|entry| entry.title())
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn empty_catalog_yields_empty_grid_for_every_tag() {
        let catalog = ContentCatalog::new(Vec::new(), Vec::new(), Vec::new());
        let mut filter = CategoryFilter::default();

        for tag in CategoryTag::ALL {
            filter.select(tag);
            assert!(filter.visible(&catalog).is_empty());
        }
    }
}
