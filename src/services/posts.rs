use chrono::Utc;

use crate::domain::types::PostId;
use crate::dto::posts::PostDto;
use crate::forms::posts::AddPostFormPayload;
use crate::repository::{
    PostReader, PostWriter, RecentPostsQuery, RepositoryError, SearchQuery, TimeWindow,
};

use super::{ServiceError, ServiceResult};

/// Window of the daily feed.
pub const DAILY_WINDOW_HOURS: i64 = 24;
/// Window of the weekly feed.
pub const WEEKLY_WINDOW_HOURS: i64 = 7 * 24;

/// Multi-field keyword search over the catalog. Empty inputs mean "no
/// constraint on this dimension"; with all three empty the newest clips win.
pub fn search_posts<R>(
    keyword: &str,
    category: &str,
    url_fragment: &str,
    repo: &R,
) -> ServiceResult<Vec<PostDto>>
where
    R: PostReader,
{
    let query = SearchQuery::default()
        .keyword(keyword)
        .category(category)
        .url_fragment(url_fragment);

    match repo.search_posts(query) {
        Ok(posts) => Ok(posts.into_iter().map(PostDto::from).collect()),
        Err(e) => {
            log::error!("Failed to search posts: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Clips added within the trailing `hours` window (closed on both ends),
/// optionally narrowed to a category or a tag, newest first.
pub fn latest_posts<R>(
    hours: i64,
    category: Option<&str>,
    tag: Option<&str>,
    repo: &R,
) -> ServiceResult<Vec<PostDto>>
where
    R: PostReader,
{
    let window = TimeWindow::trailing(hours, Utc::now().naive_utc());
    let mut query = RecentPostsQuery::new(window);
    if let Some(category) = category.map(str::trim).filter(|c| !c.is_empty()) {
        query = query.category(category);
    }
    if let Some(tag) = tag.map(str::trim).filter(|t| !t.is_empty()) {
        query = query.tag(tag);
    }

    match repo.list_recent_posts(query) {
        Ok(posts) => Ok(posts.into_iter().map(PostDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list recent posts: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// The standing 24-hour feed.
pub fn latest_24h_posts<R: PostReader>(repo: &R) -> ServiceResult<Vec<PostDto>> {
    latest_posts(DAILY_WINDOW_HOURS, None, None, repo)
}

/// The standing 7-day feed, optionally narrowed by category or tag.
pub fn latest_7d_posts<R: PostReader>(
    category: Option<&str>,
    tag: Option<&str>,
    repo: &R,
) -> ServiceResult<Vec<PostDto>> {
    latest_posts(WEEKLY_WINDOW_HOURS, category, tag, repo)
}

pub fn get_post<R: PostReader>(id: i32, repo: &R) -> ServiceResult<PostDto> {
    let id = PostId::new(id).map_err(|e| ServiceError::Form(e.to_string()))?;

    match repo.get_post_by_id(id) {
        Ok(Some(post)) => Ok(PostDto::from(post)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get post: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn add_post<R: PostWriter>(payload: AddPostFormPayload, repo: &R) -> ServiceResult<PostDto> {
    match repo.create_post(payload.into_new_post()) {
        Ok(post) => Ok(PostDto::from(post)),
        Err(RepositoryError::Conflict(e)) => {
            log::error!("Refused to create post: {e}");
            Err(ServiceError::Conflict)
        }
        Err(e) => {
            log::error!("Failed to create post: {e}");
            Err(ServiceError::Internal)
        }
    }
}
