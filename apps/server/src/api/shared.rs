use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use smartedtech_core::Error as CoreError;

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
};

/// Unwraps a request field, rejecting absent or blank values.
pub fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::missing_field(field)),
    }
}

/// Unwraps a non-text request field.
pub fn required_value<T>(value: Option<T>, field: &str) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::missing_field(field))
}

/// Caller identity from the bearer token. Empty when auth is not configured,
/// in which case every check passes.
pub struct CurrentUser(Option<String>);

impl CurrentUser {
    /// Another user's id is reported as missing.
    pub fn ensure_user(&self, user_id: &str) -> ApiResult<()> {
        self.ensure_owner(user_id, "User")
    }

    /// Records owned by someone else are reported as `resource` not found.
    pub fn ensure_owner(&self, owner_id: &str, resource: &str) -> ApiResult<()> {
        match &self.0 {
            Some(caller) if caller != owner_id => {
                Err(CoreError::NotFound(resource.to_string()).into())
            }
            _ => Ok(()),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(
            parts.extensions.get::<AuthUser>().map(|user| user.0.clone()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_counts_as_missing() {
        assert!(required(Some("  ".into()), "title").is_err());
        assert!(required(None, "title").is_err());
        assert_eq!(required(Some("Essay".into()), "title").unwrap(), "Essay");
        assert_eq!(required_value(Some(0.0), "grade").unwrap(), 0.0);
    }

    #[test]
    fn ownership_checks_only_apply_with_a_token() {
        let open = CurrentUser(None);
        assert!(open.ensure_user("anyone").is_ok());

        let ada = CurrentUser(Some("ada".into()));
        assert!(ada.ensure_user("ada").is_ok());
        assert!(matches!(
            ada.ensure_owner("eve", "Booster"),
            Err(ApiError::Core(CoreError::NotFound(ref what))) if what == "Booster"
        ));
    }
}
