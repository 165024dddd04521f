use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::post::{NewPost as DomainNewPost, Post as DomainPost};
use crate::domain::types::{
    CategoryName, ImageUrl, PostId, PostTitle, PostUrl, TagName, TypeConstraintError,
};

/// Diesel model representing the `posts` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::posts)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub category: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub image: Option<String>,
    pub added_at: NaiveDateTime,
}

/// Insertable form of [`Post`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost {
    pub title: String,
    pub url: String,
    pub category: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub image: Option<String>,
    pub added_at: NaiveDateTime,
}

/// Row of the `post_tags` join table.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = crate::schema::post_tags)]
pub struct PostTag {
    pub post_id: i32,
    pub tag: String,
}

impl Post {
    /// Converts a stored row plus its tag rows into a domain [`Post`],
    /// failing if the row violates domain constraints.
    pub fn into_domain(self, tags: Vec<String>) -> Result<DomainPost, TypeConstraintError> {
        Ok(DomainPost {
            id: PostId::new(self.id)?,
            title: PostTitle::new(self.title)?,
            url: PostUrl::new(self.url)?,
            category: CategoryName::new(self.category)?,
            description: self.description,
            comment: self.comment,
            image: self.image.map(ImageUrl::new).transpose()?,
            tags: tags
                .into_iter()
                .map(TagName::new)
                .collect::<Result<Vec<_>, _>>()?,
            added_at: self.added_at,
        })
    }
}

impl From<DomainNewPost> for NewPost {
    fn from(post: DomainNewPost) -> Self {
        Self {
            title: post.title.into_inner(),
            url: post.url.into_inner(),
            category: post.category.into_inner(),
            description: post.description,
            comment: post.comment,
            image: post.image.map(ImageUrl::into_inner),
            added_at: post.added_at,
        }
    }
}
