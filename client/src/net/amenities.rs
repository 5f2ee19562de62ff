//! Amenity catalogue endpoints (landowner-managed).

#[cfg(test)]
#[path = "amenities_test.rs"]
mod amenities_test;

use serde::de::IgnoredAny;

use super::config::ApiBase;
use super::error::ApiError;
use super::http::{ApiClient, Transport};
use super::types::{AmenitiesEnvelope, Amenity};
use crate::util::storage::KeyValueStore;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, ApiError> {
        let env: AmenitiesEnvelope = self.get_json(ApiBase::Api, "/landowner/all/amenities").await?;
        Ok(env.amenities)
    }

    /// Create an amenity by name (multipart, as the backend expects).
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn add_amenity(&self, name: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .send_multipart(
                ApiBase::Api,
                "/landowner/add-amenities",
                vec![("name".to_owned(), name.to_owned())],
            )
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn delete_amenity(&self, id: i64) -> Result<(), ApiError> {
        self.delete(ApiBase::Api, &format!("/landowner/delete/amenities/{id}")).await
    }
}
