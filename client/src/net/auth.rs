//! Sign-in, sign-up, token verification and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` and `logout` are the only code paths (besides the 401 handler)
//! that write the session. Login is complete only once the token has been
//! verified and its role resolved; any failure on the way leaves the user
//! logged out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::de::IgnoredAny;

use super::config::ApiBase;
use super::error::ApiError;
use super::http::{ApiClient, Method, Transport};
use super::types::{
    MessageResponse, SigninRequest, SigninResponse, SignupRequest, TokenRequest, USER_TYPE_ATTRIBUTE, UserProfile,
};
use crate::state::session::Role;
use crate::util::storage::{KeyValueStore, StorageError};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /auth/signin`, returning the access token.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn signin(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let resp: SigninResponse = self
            .send_json(Method::Post, ApiBase::Auth, "/auth/signin", &SigninRequest { username, password })
            .await?;
        Ok(resp.authentication_result.access_token)
    }

    /// `POST /auth/verify-token`, returning the user record.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn verify_token(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.send_json(Method::Post, ApiBase::Auth, "/auth/verify-token", &TokenRequest { token })
            .await
    }

    /// `POST /auth/signup`, returning the server's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure; a rejected signup carries
    /// the server's `error` text in [`ApiError::Status`].
    pub async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        let resp: MessageResponse = self.send_json(Method::Post, ApiBase::Auth, "/auth/signup", request).await?;
        Ok(resp.message.unwrap_or_default())
    }

    /// Sign in, verify the token, and store token + role.
    ///
    /// # Errors
    ///
    /// - Sign-in errors as returned by [`Self::signin`].
    /// - [`ApiError::Verification`] when verification fails or the user has
    ///   no recognized role.
    /// - [`ApiError::Storage`] when the session could not be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<Role, ApiError> {
        // A stale token must not ride along on the sign-in request.
        self.session().clear();

        let token = self.signin(username, password).await?;
        let profile = self
            .verify_token(&token)
            .await
            .map_err(|e| ApiError::Verification(e.to_string()))?;
        let role = role_from_profile(&profile)?;

        self.session().set(&token, role);
        if !self.session().get().is_authenticated() {
            return Err(ApiError::Storage(StorageError::Unavailable));
        }
        log::info!("signed in as {role}");
        Ok(role)
    }

    /// `POST /auth/signout` with the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotSignedIn`] without a session, else the
    /// request-layer error.
    pub async fn signout(&self) -> Result<(), ApiError> {
        let session = self.session().get();
        let token = session.bearer().ok_or(ApiError::NotSignedIn)?;
        let _: IgnoredAny = self
            .send_json(Method::Post, ApiBase::Auth, "/auth/signout", &TokenRequest { token })
            .await?;
        Ok(())
    }

    /// Sign out remotely when possible and always clear the local session.
    /// Calling it while logged out changes nothing.
    ///
    /// # Errors
    ///
    /// Returns the sign-out error for reporting; the session is cleared
    /// regardless.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = match self.signout().await {
            Err(ApiError::NotSignedIn) => Ok(()),
            other => other,
        };
        self.session().clear();
        if let Err(e) = &result {
            log::warn!("sign-out failed, cleared local session anyway: {e}");
        }
        result
    }
}

/// Role from the `custom:userType` attribute.
pub(crate) fn role_from_profile(profile: &UserProfile) -> Result<Role, ApiError> {
    if profile.user_attributes.is_none() {
        return Err(ApiError::Verification("response has no user attributes".to_owned()));
    }
    let raw = profile
        .attribute(USER_TYPE_ATTRIBUTE)
        .ok_or_else(|| ApiError::Verification(format!("{USER_TYPE_ATTRIBUTE} not found")))?;
    raw.parse::<Role>().map_err(|e| ApiError::Verification(e.to_string()))
}
