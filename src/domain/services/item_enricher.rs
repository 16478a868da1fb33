use std::sync::Arc;

use crate::domain::{
    RepoFormat, RepositoryDisplay, RepositoryItem, FALLBACK_FORMAT, NOT_AVAILABLE,
};

use super::relative_time::{format_from_now, Clock, SystemClock};

/// Derives the display-only fields of repository items.
///
/// Derivation only reads source fields, so enriching an already enriched item
/// produces the same result (relative times move only with the clock).
pub struct ItemEnricher {
    clock: Arc<dyn Clock>,
}

impl ItemEnricher {
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn enrich_all(&self, items: Vec<RepositoryItem>) -> Vec<RepositoryItem> {
        items.into_iter().map(|item| self.enrich(item)).collect()
    }

    pub fn enrich(&self, mut item: RepositoryItem) -> RepositoryItem {
        let now = self.clock.now();

        let format = match item.format.as_deref() {
            Some(f) if !f.is_empty() => f.to_string(),
            _ => FALLBACK_FORMAT.to_string(),
        };
        let presentation = RepoFormat::parse(&format);

        let (last_import, last_import_state) = match item
            .summary_fields
            .latest_import
            .as_ref()
            .and_then(|import| import.finished.map(|finished| (finished, import)))
        {
            Some((finished, import)) => (
                format_from_now(finished, now),
                import
                    .state
                    .clone()
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        };

        let last_commit = item
            .commit_created
            .map(|created| format_from_now(created, now))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        // Legacy repositories have no description until their first import.
        if !item.has_description() {
            if let Some(description) = first_content_description(&item) {
                item.description = Some(description);
            }
        }

        item.display = Some(RepositoryDisplay {
            icon_class: presentation.map(|p| p.icon_class().to_string()),
            tooltip: presentation.map(|p| p.tooltip().to_string()),
            last_import,
            last_import_state,
            last_commit,
        });
        item.format = Some(format);
        item
    }
}

impl Default for ItemEnricher {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

fn first_content_description(item: &RepositoryItem) -> Option<String> {
    item.summary_fields
        .content_objects
        .as_ref()?
        .iter()
        .filter_map(|object| object.description.as_deref())
        .find(|description| !description.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentObject, FixedClock, LatestImport};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn enricher() -> ItemEnricher {
        ItemEnricher::with_clock(Arc::new(FixedClock(now())))
    }

    fn content(description: &str) -> ContentObject {
        ContentObject {
            name: None,
            description: Some(description.to_string()),
        }
    }

    #[test]
    fn test_missing_format_falls_back_to_role() {
        let item = enricher().enrich(RepositoryItem::new(1, "nginx"));
        let display = item.display.as_ref().unwrap();

        assert_eq!(item.format.as_deref(), Some("role"));
        assert_eq!(display.icon_class.as_deref(), Some("fa fa-gear"));
        assert_eq!(display.tooltip.as_deref(), Some("Role"));
    }

    #[test]
    fn test_known_format_is_kept() {
        let mut item = RepositoryItem::new(1, "bundle");
        item.format = Some("apb".to_string());
        let item = enricher().enrich(item);

        assert_eq!(item.format.as_deref(), Some("apb"));
        assert_eq!(
            item.display.unwrap().icon_class.as_deref(),
            Some("pficon pficon-bundle")
        );
    }

    #[test]
    fn test_unknown_format_has_no_presentation() {
        let mut item = RepositoryItem::new(1, "odd");
        item.format = Some("mystery".to_string());
        let display = enricher().enrich(item).display.unwrap();

        assert!(display.icon_class.is_none());
        assert!(display.tooltip.is_none());
    }

    #[test]
    fn test_timestamps_default_to_na() {
        let display = enricher().enrich(RepositoryItem::new(1, "x")).display.unwrap();

        assert_eq!(display.last_import, "NA");
        assert_eq!(display.last_import_state, "NA");
        assert_eq!(display.last_commit, "NA");
    }

    #[test]
    fn test_unfinished_import_is_na() {
        let mut item = RepositoryItem::new(1, "x");
        item.summary_fields.latest_import = Some(LatestImport {
            id: Some(1),
            state: Some("RUNNING".to_string()),
            finished: None,
        });
        let display = enricher().enrich(item).display.unwrap();

        assert_eq!(display.last_import, "NA");
        assert_eq!(display.last_import_state, "NA");
    }

    #[test]
    fn test_finished_import_and_commit_are_relative() {
        let mut item = RepositoryItem::new(1, "x");
        item.summary_fields.latest_import = Some(LatestImport {
            id: Some(1),
            state: Some("SUCCESS".to_string()),
            finished: Some(now() - Duration::days(3)),
        });
        item.commit_created = Some(now() - Duration::hours(5));
        let display = enricher().enrich(item).display.unwrap();

        assert_eq!(display.last_import, "3 days ago");
        assert_eq!(display.last_import_state, "SUCCESS");
        assert_eq!(display.last_commit, "5 hours ago");
    }

    #[test]
    fn test_description_backfilled_from_first_non_empty_content() {
        let mut item = RepositoryItem::new(1, "x");
        item.description = Some(String::new());
        item.summary_fields.content_objects = Some(vec![content(""), content("B"), content("C")]);

        assert_eq!(enricher().enrich(item).description.as_deref(), Some("B"));
    }

    #[test]
    fn test_own_description_wins() {
        let mut item = RepositoryItem::new(1, "x");
        item.description = Some("mine".to_string());
        item.summary_fields.content_objects = Some(vec![content("other")]);

        assert_eq!(enricher().enrich(item).description.as_deref(), Some("mine"));
    }

    #[test]
    fn test_no_description_anywhere_stays_empty() {
        let mut item = RepositoryItem::new(1, "x");
        item.summary_fields.content_objects = Some(vec![content("")]);

        assert!(enricher().enrich(item).description.is_none());
    }

    #[test]
    fn test_enrichment_is_idempotent() {
        let mut item = RepositoryItem::new(1, "x");
        item.commit_created = Some(now() - Duration::days(40));
        item.summary_fields.content_objects = Some(vec![content("desc")]);

        let once = enricher().enrich(item);
        let twice = enricher().enrich(once.clone());

        assert_eq!(once, twice);
    }
}
