//! Search and category filtering over the static catalogs.

use crate::models::{CategoryFilter, CommandDescriptor, FaqEntry};

/// Case-insensitive substring test. `needle` must already be lowercase.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Search text plus category selection for the command reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandQuery {
    pub search: String,
    pub category: CategoryFilter,
}

impl CommandQuery {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// True when neither search text nor a category narrows the list.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.category == CategoryFilter::All
    }

    pub fn matches(&self, command: &CommandDescriptor) -> bool {
        if !self.category.accepts(command.category) {
            return false;
        }
        let needle = self.search.to_lowercase();
        contains_folded(command.name, &needle) || contains_folded(command.description, &needle)
    }
}

/// Keep the commands matching `query`, in their original order.
pub fn filter_commands<'a, I>(commands: I, query: &CommandQuery) -> Vec<&'a CommandDescriptor>
where
    I: IntoIterator<Item = &'a CommandDescriptor>,
{
    commands
        .into_iter()
        .filter(|command| query.matches(command))
        .collect()
}

/// Search text for the FAQ list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqQuery {
    pub search: String,
}

impl FaqQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }

    pub fn matches(&self, entry: &FaqEntry) -> bool {
        let needle = self.search.to_lowercase();
        contains_folded(entry.question, &needle) || contains_folded(entry.answer, &needle)
    }
}

/// Keep the FAQ entries matching `query` along with their position in the
/// unfiltered list, so accordion panel ids stay stable under filtering.
pub fn filter_faqs<'a>(entries: &'a [FaqEntry], query: &FaqQuery) -> Vec<(usize, &'a FaqEntry)> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| query.matches(entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::models::CommandCategory;

    #[test]
    fn empty_query_keeps_everything() {
        let all = content::commands();
        let filtered = filter_commands(&all, &CommandQuery::default());
        assert_eq!(filtered.len(), all.len());
    }

    #[test]
    fn search_is_case_insensitive() {
        let all = content::commands();
        let filtered = filter_commands(&all, &CommandQuery::new("PING", CategoryFilter::All));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "/ping");
    }

    #[test]
    fn search_matches_description_text() {
        let all = content::commands();
        let filtered = filter_commands(&all, &CommandQuery::new("latency", CategoryFilter::All));
        assert_eq!(filtered.iter().map(|c| c.name).collect::<Vec<_>>(), vec!["/ping"]);
    }

    #[test]
    fn category_and_search_must_both_match() {
        let all = content::commands();
        let query = CommandQuery::new("ping", CategoryFilter::Only(CommandCategory::Pomodoro));
        assert!(filter_commands(&all, &query).is_empty());
    }

    #[test]
    fn faq_filter_keeps_original_positions() {
        let faqs = content::faqs();
        let filtered = filter_faqs(&faqs, &FaqQuery::new("mongodb"));
        assert_eq!(filtered.len(), 1);
        let (index, entry) = filtered[0];
        assert_eq!(faqs[index], *entry);
        assert!(entry.answer.contains("MongoDB"));
    }
}
