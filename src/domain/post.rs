use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, ImageUrl, PostId, PostTitle, PostUrl, TagName};

/// A saved bookmark ("clip").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub url: PostUrl,
    pub category: CategoryName,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub image: Option<ImageUrl>,
    /// Tags are a set; order carries no meaning.
    pub tags: Vec<TagName>,
    pub added_at: NaiveDateTime,
}

/// Information required to create a new [`Post`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPost {
    pub title: PostTitle,
    pub url: PostUrl,
    pub category: CategoryName,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub image: Option<ImageUrl>,
    pub tags: Vec<TagName>,
    pub added_at: NaiveDateTime,
}
