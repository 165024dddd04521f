use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::post::Post;

/// Serializable clip shape returned by the JSON API.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub category: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub added_at: NaiveDateTime,
}

impl From<Post> for PostDto {
    fn from(value: Post) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            url: value.url.into_inner(),
            category: value.category.into_inner(),
            description: value.description,
            comment: value.comment,
            image: value.image.map(|image| image.into_inner()),
            tags: value.tags.into_iter().map(Into::into).collect(),
            added_at: value.added_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn serializes_expected_shape() {
        let dto = PostDto {
            id: 1,
            title: "A clip".into(),
            url: "https://example.com/a".into(),
            category: "tech".into(),
            description: None,
            comment: None,
            image: None,
            tags: vec!["rust".into()],
            added_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["title"], "A clip");
        assert_eq!(value["tags"], serde_json::json!(["rust"]));
        assert!(value["description"].is_null());
    }
}
