use crate::repository::PostReader;

use super::{ServiceError, ServiceResult};

/// Every distinct tag across all clips, name ascending.
pub fn all_tags<R: PostReader>(repo: &R) -> ServiceResult<Vec<String>> {
    match repo.distinct_tags() {
        Ok(tags) => Ok(tags.into_iter().map(Into::into).collect()),
        Err(e) => {
            log::error!("Failed to list tags: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::Post;
    use crate::domain::types::{CategoryName, PostId, PostTitle, PostUrl, TagName};
    use crate::repository::test::TestRepository;
    use chrono::Utc;

    fn tagged_post(id: i32, tags: &[&str]) -> Post {
        Post {
            id: PostId::new(id).unwrap(),
            title: PostTitle::new(format!("post {id}")).unwrap(),
            url: PostUrl::new(format!("https://example.com/{id}")).unwrap(),
            category: CategoryName::new("tech").unwrap(),
            description: None,
            comment: None,
            image: None,
            tags: tags.iter().map(|t| TagName::new(*t).unwrap()).collect(),
            added_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn tags_are_distinct_and_sorted() {
        let repo = TestRepository::new(
            vec![tagged_post(1, &["rust", "wasm"]), tagged_post(2, &["rust"])],
            vec![],
        );
        assert_eq!(all_tags(&repo).unwrap(), vec!["rust", "wasm"]);
    }

    #[test]
    fn no_tags_is_an_empty_list() {
        let repo = TestRepository::new(vec![tagged_post(1, &[])], vec![]);
        assert_eq!(all_tags(&repo).unwrap(), Vec::<String>::new());
    }
}
