//! Profile endpoints on the auth backend. Both identify the user by the raw
//! token in the request body.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::Serialize;
use serde::de::IgnoredAny;

use super::config::ApiBase;
use super::error::ApiError;
use super::http::{ApiClient, Method, Transport};
use super::types::{ProfileUpdate, TokenRequest, UserProfile};
use crate::util::storage::KeyValueStore;

#[derive(Serialize)]
struct ProfileUpdateRequest<'a> {
    token: &'a str,
    #[serde(flatten)]
    update: &'a ProfileUpdate,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// Current user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotSignedIn`] without sending anything when no
    /// token is stored, else the request-layer error.
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        let session = self.session().get();
        let token = session.bearer().ok_or(ApiError::NotSignedIn)?;
        self.send_json(Method::Post, ApiBase::Auth, "/auth/get-profile", &TokenRequest { token })
            .await
    }

    /// Save edited profile attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotSignedIn`] without sending anything when no
    /// token is stored, else the request-layer error.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let session = self.session().get();
        let token = session.bearer().ok_or(ApiError::NotSignedIn)?;
        let _: IgnoredAny = self
            .send_json(
                Method::Post,
                ApiBase::Auth,
                "/auth/update-profile",
                &ProfileUpdateRequest { token, update },
            )
            .await?;
        Ok(())
    }
}
