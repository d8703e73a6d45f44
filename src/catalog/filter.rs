//! Filter/Sort Engine
//!
//! `filter_and_sort` is a pure function over the catalog: it never mutates
//! its input and is re-run in full on every criteria change (the catalog is
//! small, so there is no incremental recomputation).

use super::models::Book;
use serde::{Deserialize, Serialize};

/// Upper bound of the price slider. `max_price` defaults to this.
pub const PRICE_CEILING: f64 = 100.0;

/// Result ordering for the filtered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Default ordering: rating, highest first.
    #[default]
    #[serde(rename = "recommended")]
    Recommended,
    #[serde(rename = "price-low")]
    PriceAsc,
    #[serde(rename = "price-high")]
    PriceDesc,
    #[serde(rename = "rating")]
    RatingDesc,
    /// Newest arrivals first (highest id first).
    #[serde(rename = "trendy")]
    RecencyDesc,
}

/// Page-count buckets offered by the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageBucket {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "0-200")]
    UpTo200,
    #[serde(rename = "201-400")]
    From201To400,
    #[serde(rename = "401-600")]
    From401To600,
    #[serde(rename = "601+")]
    From601,
}

impl PageBucket {
    /// Resolves the bucket to an inclusive page range.
    fn range(self) -> (u32, u32) {
        match self {
            PageBucket::All => (0, u32::MAX),
            PageBucket::UpTo200 => (0, 200),
            PageBucket::From201To400 => (201, 400),
            PageBucket::From401To600 => (401, 600),
            PageBucket::From601 => (601, u32::MAX),
        }
    }
}

/// User-selected constraints driving [`filter_and_sort`].
///
/// Every field has a default equal to the cleared-filters state, so a partial
/// payload (or `{}`) selects the whole catalog in recommended order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// One of the catalog's categories, or "all".
    pub category: String,

    /// Keep books rated at least this much; 0 disables the filter.
    pub min_rating: f64,

    /// Page-count bucket.
    pub pages: PageBucket,

    /// Inclusive price range. `min_price > max_price` yields an empty result.
    pub min_price: f64,
    pub max_price: f64,

    /// Result ordering.
    pub sort: SortMode,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            min_rating: 0.0,
            pages: PageBucket::All,
            min_price: 0.0,
            max_price: PRICE_CEILING,
            sort: SortMode::Recommended,
        }
    }
}

/// Applies the active predicates in order (category, rating, pages, price),
/// then stable-sorts by the chosen key.
///
/// Sort stability matters: rating and price ties are common, and tied books
/// must keep their catalog-relative order.
pub fn filter_and_sort(catalog: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let (min_pages, max_pages) = criteria.pages.range();

    let mut results: Vec<Book> = catalog
        .iter()
        .filter(|b| criteria.category == "all" || b.category == criteria.category)
        .filter(|b| criteria.min_rating <= 0.0 || b.rating >= criteria.min_rating)
        .filter(|b| b.pages >= min_pages && b.pages <= max_pages)
        .filter(|b| b.price >= criteria.min_price && b.price <= criteria.max_price)
        .cloned()
        .collect();

    match criteria.sort {
        SortMode::PriceAsc => results.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => results.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::RecencyDesc => results.sort_by(|a, b| b.id.cmp(&a.id)),
        SortMode::Recommended | SortMode::RatingDesc => {
            results.sort_by(|a, b| b.rating.total_cmp(&a.rating))
        }
    }

    results
}
