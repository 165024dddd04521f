use chrono::{Duration, NaiveDateTime};
use regex::{Regex, RegexBuilder};

use crate::db::{DbConnection, DbPool};
use crate::domain::post::{NewPost, Post};
use crate::domain::types::{CategoryName, DomainName, PostId, TagName};

pub mod errors;
pub mod observation;
pub mod post;

pub use errors::{RepositoryError, RepositoryResult};

/// Hard cap on keyword search results. Search is a "top N" tool, not a
/// paged browse, so there is no cursor.
pub const SEARCH_RESULT_LIMIT: usize = 30;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Parameters of a multi-field clip search.
///
/// Every dimension is optional; an empty string means "no constraint". The
/// raw user input is held verbatim and only turned into match conditions by
/// [`SearchQuery::compile`].
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Whitespace-separated keywords matched against title or description.
    pub keyword: String,
    /// Exact, case-sensitive category equality.
    pub category: String,
    /// Substring matched against the clip URL.
    pub url_fragment: String,
}

impl SearchQuery {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn url_fragment(mut self, url_fragment: impl Into<String>) -> Self {
        self.url_fragment = url_fragment.into();
        self
    }

    /// Compiles the raw inputs into executable match conditions.
    ///
    /// The keyword is split on whitespace; empty tokens are discarded. Every
    /// token and the URL fragment pass through [`regex::escape`] before a
    /// pattern is built, so metacharacters in user input (`C++`, `file.txt`,
    /// `$100`) always match literally.
    pub fn compile(&self) -> RepositoryResult<SearchFilter> {
        let keyword = self
            .keyword
            .split_whitespace()
            .map(|token| {
                RegexBuilder::new(&regex::escape(token))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let category = match self.category.as_str() {
            "" => None,
            category => Some(category.to_owned()),
        };

        let url = match self.url_fragment.as_str() {
            "" => None,
            fragment => Some(
                RegexBuilder::new(&regex::escape(fragment))
                    .case_insensitive(true)
                    .build()?,
            ),
        };

        Ok(SearchFilter {
            keyword,
            category,
            url,
        })
    }
}

/// Compiled form of a [`SearchQuery`].
///
/// All active conditions are ANDed together; a token condition is satisfied
/// when the token appears in the title or in the description. With no
/// conditions at all, every clip matches.
#[derive(Debug)]
pub struct SearchFilter {
    keyword: Vec<Regex>,
    category: Option<String>,
    url: Option<Regex>,
}

impl SearchFilter {
    /// Category equality constraint, if any. Exposed so SQL-backed
    /// implementations can push it down into the query.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Evaluates the filter against one clip's fields.
    pub fn matches(
        &self,
        title: &str,
        description: Option<&str>,
        url: &str,
        category: &str,
    ) -> bool {
        let keyword_hit = self.keyword.iter().all(|token| {
            token.is_match(title) || description.is_some_and(|text| token.is_match(text))
        });
        let category_hit = self
            .category
            .as_deref()
            .is_none_or(|wanted| wanted == category);
        let url_hit = self.url.as_ref().is_none_or(|fragment| fragment.is_match(url));

        keyword_hit && category_hit && url_hit
    }
}

/// A trailing wall-clock window, closed on both ends.
///
/// A clip added exactly `hours` ago, to the second, is still inside the
/// window. Keeping the arithmetic in a plain value makes the boundary
/// testable without racing the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    since: NaiveDateTime,
    until: NaiveDateTime,
}

impl TimeWindow {
    /// The window `[until - hours, until]`.
    pub fn trailing(hours: i64, until: NaiveDateTime) -> Self {
        Self {
            since: until - Duration::hours(hours),
            until,
        }
    }

    pub fn since(&self) -> NaiveDateTime {
        self.since
    }

    pub fn until(&self) -> NaiveDateTime {
        self.until
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.since <= instant && instant <= self.until
    }
}

/// Query parameters for recency-bounded clip listings.
#[derive(Debug, Clone)]
pub struct RecentPostsQuery {
    pub window: TimeWindow,
    /// Exact category match.
    pub category: Option<String>,
    /// Set membership: the clip's tags contain this exact value.
    pub tag: Option<String>,
}

impl RecentPostsQuery {
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            category: None,
            tag: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Read-only operations for clip entities.
pub trait PostReader {
    /// Top matches for a multi-field search, newest first, capped at
    /// [`SEARCH_RESULT_LIMIT`].
    fn search_posts(&self, query: SearchQuery) -> RepositoryResult<Vec<Post>>;
    /// Clips inside a trailing time window, newest first, uncapped.
    fn list_recent_posts(&self, query: RecentPostsQuery) -> RepositoryResult<Vec<Post>>;
    /// Retrieve a clip by its identifier.
    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
    /// Distinct category values across all clips, name ascending.
    fn distinct_categories(&self) -> RepositoryResult<Vec<CategoryName>>;
    /// Distinct tag values across all clips, name ascending.
    fn distinct_tags(&self) -> RepositoryResult<Vec<TagName>>;
}

/// Write operations for clip entities.
pub trait PostWriter {
    /// Persist a new clip together with its tags and one domain-observation
    /// row, atomically. Fails with [`RepositoryError::Conflict`] when a clip
    /// with the same URL already exists.
    fn create_post(&self, post: NewPost) -> RepositoryResult<Post>;
}

/// Read-only operations for the domain-observation log.
pub trait ObservationReader {
    /// Observation counts per category for one origin domain, ordered by
    /// descending count; equal counts order by category name ascending.
    fn count_observations_by_category(
        &self,
        domain: &DomainName,
    ) -> RepositoryResult<Vec<(CategoryName, i64)>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(keyword: &str, category: &str, url_fragment: &str) -> SearchFilter {
        SearchQuery::default()
            .keyword(keyword)
            .category(category)
            .url_fragment(url_fragment)
            .compile()
            .unwrap()
    }

    #[test]
    fn empty_query_matches_everything() {
        let filter = filter("", "", "");
        assert!(filter.matches("anything", None, "https://example.com", "tech"));
    }

    #[test]
    fn metacharacters_match_literally() {
        for needle in ["C++", "$100", "[1,2,3]", "(x,y)", "file.txt", "Question?", "Wildcard *"] {
            let filter = filter(needle, "", "");
            let title = format!("about {needle} today");
            assert!(filter.matches(&title, None, "https://example.com", "tech"));
            // `.` and friends must not broaden the match
            assert!(!filter.matches("unrelated", None, "https://example.com", "tech"));
        }
    }

    #[test]
    fn dot_does_not_act_as_wildcard() {
        let filter = filter("file.txt", "", "");
        assert!(!filter.matches("fileatxt", None, "https://example.com", "tech"));
    }

    #[test]
    fn tokens_and_across_title_and_description() {
        let filter = filter("rust async", "", "");
        assert!(filter.matches("Rust in production", Some("async runtimes compared"), "u", "c"));
        assert!(filter.matches("rust async book", None, "u", "c"));
        assert!(!filter.matches("Rust in production", Some("sync only"), "u", "c"));
        assert!(!filter.matches("Rust in production", None, "u", "c"));
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let filter = filter("RUST", "", "");
        assert!(filter.matches("learning rust", None, "u", "c"));
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let filter = filter("", "Tech", "");
        assert!(filter.matches("t", None, "u", "Tech"));
        assert!(!filter.matches("t", None, "u", "tech"));
        assert!(!filter.matches("t", None, "u", "Technology"));
    }

    #[test]
    fn url_fragment_is_escaped_substring() {
        let filter = filter("", "", "example.com/a+b");
        assert!(filter.matches("t", None, "https://example.com/a+b?x=1", "c"));
        assert!(!filter.matches("t", None, "https://exampleXcom/a+b", "c"));
    }

    #[test]
    fn surrounding_whitespace_produces_no_tokens() {
        let filter = filter("  rust   ", "", "");
        assert_eq!(filter.keyword.len(), 1);
        assert!(filter.matches("rust", None, "u", "c"));
    }

    #[test]
    fn trailing_window_is_closed_on_both_ends() {
        let until = chrono::DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .naive_utc();
        let window = TimeWindow::trailing(24, until);

        assert!(window.contains(until));
        assert!(window.contains(until - Duration::hours(24)));
        assert!(!window.contains(until - Duration::hours(24) - Duration::seconds(1)));
        assert!(!window.contains(until + Duration::seconds(1)));
    }
}
