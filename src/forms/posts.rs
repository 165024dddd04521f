use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::post::NewPost;
use crate::domain::types::{
    CategoryName, ImageUrl, PostTitle, PostUrl, TagName, TypeConstraintError,
};

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// Raw request body for creating a clip.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPostForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(url)]
    pub url: String,
    #[validate(length(min = 1))]
    pub category: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Validated, strongly-typed form data.
#[derive(Debug, Clone, PartialEq)]
pub struct AddPostFormPayload {
    pub title: PostTitle,
    pub url: PostUrl,
    pub category: CategoryName,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub image: Option<ImageUrl>,
    pub tags: Vec<TagName>,
}

#[derive(Debug, Error)]
pub enum AddPostFormError {
    #[error("Add post form validation failed: {0}")]
    Validation(String),
    #[error("Add post form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddPostFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddPostFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddPostForm> for AddPostFormPayload {
    type Error = AddPostFormError;

    fn try_from(form: AddPostForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            title: PostTitle::new(form.title)?,
            url: PostUrl::new(form.url)?,
            category: CategoryName::new(form.category)?,
            description: normalize_optional_text(form.description),
            comment: normalize_optional_text(form.comment),
            image: form.image.map(ImageUrl::new).transpose()?,
            tags: form
                .tags
                .into_iter()
                .map(TagName::new)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl AddPostFormPayload {
    /// Stamps the clip with the creation time.
    pub fn into_new_post(self) -> NewPost {
        NewPost {
            title: self.title,
            url: self.url,
            category: self.category,
            description: self.description,
            comment: self.comment,
            image: self.image,
            tags: self.tags,
            added_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AddPostForm {
        AddPostForm {
            title: "A clip".into(),
            url: "https://example.com/article".into(),
            category: "tech".into(),
            description: Some("  about things  ".into()),
            comment: None,
            image: None,
            tags: vec!["rust".into()],
        }
    }

    #[test]
    fn accepts_valid_form_and_trims_description() {
        let payload = AddPostFormPayload::try_from(valid_form()).unwrap();
        assert_eq!(payload.description.as_deref(), Some("about things"));
        assert_eq!(payload.tags.len(), 1);
    }

    #[test]
    fn rejects_invalid_url() {
        let form = AddPostForm {
            url: "not a url".into(),
            ..valid_form()
        };
        assert!(matches!(
            AddPostFormPayload::try_from(form),
            Err(AddPostFormError::Validation(_))
        ));
    }

    #[test]
    fn rejects_blank_tag() {
        let form = AddPostForm {
            tags: vec!["   ".into()],
            ..valid_form()
        };
        assert!(matches!(
            AddPostFormPayload::try_from(form),
            Err(AddPostFormError::TypeConstraint(_))
        ));
    }
}
