//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service error types, so the
//! service-facing conversions live here instead of next to the types they
//! convert from.

use crate::domain::types::TypeConstraintError;
use crate::forms::posts::AddPostFormError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddPostFormError> for ServiceError {
    fn from(val: AddPostFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
