//! Capped catalog search.

use super::models::Book;
use serde::Deserialize;

/// Maximum number of search results returned.
pub const SEARCH_RESULT_CAP: usize = 10;

/// Criteria for a catalog search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Case-insensitive substring matched against title, author and
    /// category. Empty matches everything.
    pub query: String,

    /// Exact author match. Empty or absent means no author filter.
    pub author: Option<String>,

    /// Language filter. The whole catalog is English, so any value other
    /// than "English" matches nothing. Empty or absent means no filter.
    pub language: Option<String>,
}

fn unset(filter: &Option<String>) -> bool {
    filter.as_deref().map_or(true, str::is_empty)
}

/// Returns the first [`SEARCH_RESULT_CAP`] matches in catalog order.
///
/// There is no ranking: truncation happens after matching, so the result is
/// the first ten matches, not the best ten.
pub fn search(catalog: &[Book], criteria: &SearchCriteria) -> Vec<Book> {
    let query = criteria.query.to_lowercase();

    catalog
        .iter()
        .filter(|b| {
            let matches_query = b.title.to_lowercase().contains(&query)
                || b.author.to_lowercase().contains(&query)
                || b.category.to_lowercase().contains(&query);
            let matches_author =
                unset(&criteria.author) || criteria.author.as_deref() == Some(b.author.as_str());
            let matches_language =
                unset(&criteria.language) || criteria.language.as_deref() == Some("English");

            matches_query && matches_author && matches_language
        })
        .take(SEARCH_RESULT_CAP)
        .cloned()
        .collect()
}
