//! In-memory episode catalog with derived facets.

use tale_core::{Episode, Facet, ALL_FACET};
use tracing::debug;

/// The full episode set plus derived category/language facets.
///
/// Filtering is pure and deterministic: the same selectors always produce
/// the same list, in source order. Replacing the episode set recomputes the
/// facet lists; a failed catalog fetch must simply not call [`set_all`],
/// which leaves every list untouched.
///
/// [`set_all`]: EpisodeCatalog::set_all
#[derive(Debug, Clone, Default)]
pub struct EpisodeCatalog {
    episodes: Vec<Episode>,
    categories: Vec<Facet>,
    languages: Vec<Facet>,
    featured: Vec<Episode>,
    recent: Vec<Episode>,
}

impl EpisodeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full episode set and recompute both facet lists.
    ///
    /// Facets appear in first-seen order with the synthetic "All" facet
    /// prepended, carrying the total episode count.
    pub fn set_all(&mut self, episodes: Vec<Episode>) {
        self.categories = derive_facets(&episodes, |ep| &ep.category);
        self.languages = derive_facets(&episodes, |ep| &ep.language);
        debug!(
            episodes = episodes.len(),
            categories = self.categories.len() - 1,
            languages = self.languages.len() - 1,
            "Catalog replaced"
        );
        self.episodes = episodes;
    }

    /// Episodes matching both selectors, in source order.
    ///
    /// The "All" sentinel matches every episode on its dimension; no episode
    /// is excluded by default.
    pub fn filter(&self, category: &str, language: &str) -> Vec<Episode> {
        self.episodes
            .iter()
            .filter(|ep| {
                (category == ALL_FACET || ep.category == category)
                    && (language == ALL_FACET || ep.language == language)
            })
            .cloned()
            .collect()
    }

    /// Full episode set in source order.
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Category facets, "All" first.
    pub fn categories(&self) -> &[Facet] {
        &self.categories
    }

    /// Language facets, "All" first.
    pub fn languages(&self) -> &[Facet] {
        &self.languages
    }

    /// Store the service-supplied featured subset.
    pub fn set_featured(&mut self, episodes: Vec<Episode>) {
        self.featured = episodes;
    }

    /// Store the service-supplied recently-played subset.
    pub fn set_recent(&mut self, episodes: Vec<Episode>) {
        self.recent = episodes;
    }

    /// Featured episodes as supplied by the service.
    pub fn featured(&self) -> &[Episode] {
        &self.featured
    }

    /// Recently-played episodes as supplied by the service.
    pub fn recent(&self) -> &[Episode] {
        &self.recent
    }

    /// Number of episodes in the full set.
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// True when no episodes have been loaded.
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

/// Distinct facet values in first-seen order, each with its match count,
/// with "All" prepended carrying the total.
fn derive_facets<F>(episodes: &[Episode], key: F) -> Vec<Facet>
where
    F: Fn(&Episode) -> &str,
{
    let mut facets = vec![Facet::new(ALL_FACET, episodes.len())];
    for episode in episodes {
        let name = key(episode);
        if let Some(facet) = facets[1..].iter_mut().find(|f| f.name == name) {
            facet.count += 1;
        } else {
            facets.push(Facet::new(name, 1));
        }
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str, category: &str, language: &str) -> Episode {
        Episode {
            id: id.to_string(),
            title: format!("Episode {id}"),
            description: String::new(),
            audio_url: format!("https://cdn.example.com/{id}.mp3"),
            image_url: String::new(),
            category: category.to_string(),
            language: language.to_string(),
            duration_label: "00:10:00".to_string(),
            pub_date: None,
        }
    }

    #[test]
    fn facets_derived_in_first_seen_order() {
        let mut catalog = EpisodeCatalog::new();
        catalog.set_all(vec![
            episode("a", "Animals", "English"),
            episode("b", "Folktales", "Swahili"),
            episode("c", "Animals", "English"),
        ]);

        let categories = catalog.categories();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0], Facet::new("All", 3));
        assert_eq!(categories[1], Facet::new("Animals", 2));
        assert_eq!(categories[2], Facet::new("Folktales", 1));

        let languages = catalog.languages();
        assert_eq!(languages[0], Facet::new("All", 3));
        assert_eq!(languages[1], Facet::new("English", 2));
        assert_eq!(languages[2], Facet::new("Swahili", 1));
    }

    #[test]
    fn set_all_replaces_and_recomputes() {
        let mut catalog = EpisodeCatalog::new();
        catalog.set_all(vec![episode("a", "Animals", "English")]);
        catalog.set_all(vec![
            episode("b", "Bedtime", "Swahili"),
            episode("c", "Bedtime", "Swahili"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories()[0], Facet::new("All", 2));
        assert_eq!(catalog.categories()[1], Facet::new("Bedtime", 2));
        assert!(!catalog.categories().iter().any(|f| f.name == "Animals"));
    }

    #[test]
    fn filter_matches_both_selectors() {
        let mut catalog = EpisodeCatalog::new();
        catalog.set_all(vec![
            episode("a", "Animals", "English"),
            episode("b", "Folktales", "Swahili"),
            episode("c", "Animals", "Swahili"),
        ]);

        let animals = catalog.filter("Animals", ALL_FACET);
        assert_eq!(animals.len(), 2);
        assert_eq!(animals[0].id, "a");
        assert_eq!(animals[1].id, "c");

        let swahili = catalog.filter(ALL_FACET, "Swahili");
        assert_eq!(swahili.len(), 2);
        assert_eq!(swahili[0].id, "b");

        let both = catalog.filter("Animals", "Swahili");
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, "c");

        assert!(catalog.filter("Animals", "French").is_empty());
    }

    #[test]
    fn all_selectors_exclude_nothing() {
        let mut catalog = EpisodeCatalog::new();
        catalog.set_all(vec![
            episode("a", "Animals", "English"),
            episode("b", "Folktales", "Swahili"),
        ]);

        assert_eq!(catalog.filter(ALL_FACET, ALL_FACET).len(), 2);
    }

    #[test]
    fn filter_is_deterministic() {
        let mut catalog = EpisodeCatalog::new();
        catalog.set_all(vec![
            episode("a", "Animals", "English"),
            episode("b", "Animals", "English"),
        ]);

        assert_eq!(
            catalog.filter("Animals", "English"),
            catalog.filter("Animals", "English")
        );
    }

    #[test]
    fn featured_and_recent_survive_refresh() {
        let mut catalog = EpisodeCatalog::new();
        catalog.set_featured(vec![episode("f", "Nature", "English")]);
        catalog.set_recent(vec![episode("r", "Bedtime", "Swahili")]);

        // A filter refresh replaces the main set only.
        catalog.set_all(vec![episode("a", "Animals", "English")]);

        assert_eq!(catalog.featured().len(), 1);
        assert_eq!(catalog.featured()[0].id, "f");
        assert_eq!(catalog.recent().len(), 1);
        assert_eq!(catalog.recent()[0].id, "r");
    }

    #[test]
    fn empty_catalog_has_all_facet_only() {
        let mut catalog = EpisodeCatalog::new();
        catalog.set_all(Vec::new());

        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), &[Facet::new("All", 0)]);
        assert_eq!(catalog.languages(), &[Facet::new("All", 0)]);
    }
}
