//! Product (property listing) and contact-request endpoints.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use serde::de::IgnoredAny;

use super::config::ApiBase;
use super::error::ApiError;
use super::http::{ApiClient, Method, Transport};
use super::types::{
    AmenityFilter, ContactOwner, ContactRequest, PriceRange, Product, ProductDetails, ProductsEnvelope,
    PropertyDraft, RequestStatus, RequestsEnvelope, StatusChange,
};
use crate::util::storage::KeyValueStore;

/// Server-side ordering of the product list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceOrder {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl PriceOrder {
    fn path(self) -> &'static str {
        match self {
            PriceOrder::Unsorted => "/product/list",
            PriceOrder::Ascending => "/product/min-to-max-price",
            PriceOrder::Descending => "/product/max-to-min-price",
        }
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// All products in the requested order.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn list_products(&self, order: PriceOrder) -> Result<Vec<Product>, ApiError> {
        let env: ProductsEnvelope = self.get_json(ApiBase::Api, order.path()).await?;
        Ok(env.products)
    }

    /// Products priced within `[min_price, max_price]`.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn filter_by_price(&self, min_price: f64, max_price: f64) -> Result<Vec<Product>, ApiError> {
        let env: ProductsEnvelope = self
            .send_json(Method::Post, ApiBase::Api, "/product/price-range", &PriceRange { min_price, max_price })
            .await?;
        Ok(env.products)
    }

    /// Products offering `amenity`.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn filter_by_amenity(&self, amenity: &str) -> Result<Vec<Product>, ApiError> {
        let env: ProductsEnvelope = self
            .send_json(
                Method::Post,
                ApiBase::Api,
                "/product/filter/desired-amenities",
                &AmenityFilter { desired_amenities: amenity },
            )
            .await?;
        Ok(env.products)
    }

    /// Product plus owner contact information. Served by the auth backend.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn product_details(&self, id: i64) -> Result<ProductDetails, ApiError> {
        self.get_json(ApiBase::Auth, &format!("/mp/product/details/{id}")).await
    }

    /// Create a listing from the form draft (multipart).
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn add_product(&self, draft: &PropertyDraft) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .send_multipart(ApiBase::Api, "/product/add", draft.to_form_fields())
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.delete(ApiBase::Api, &format!("/product/delete/{id}")).await
    }

    /// Send a message to a listing's owner.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn contact_owner(&self, message: &ContactOwner) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .send_json(Method::Post, ApiBase::Api, "/product/contact-owner", message)
            .await?;
        Ok(())
    }

    /// Requests the signed-in investor has sent.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn contact_requests(&self) -> Result<Vec<ContactRequest>, ApiError> {
        let env: RequestsEnvelope = self.get_json(ApiBase::Api, "/product/contact-requests").await?;
        Ok(env.requests)
    }

    /// Requests addressed to the signed-in landowner.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn landowner_requests(&self) -> Result<Vec<ContactRequest>, ApiError> {
        let env: RequestsEnvelope = self
            .get_json(ApiBase::Api, "/product/landowner/to/all-requests")
            .await?;
        Ok(env.requests)
    }

    /// Accept or reject a contact request.
    ///
    /// # Errors
    ///
    /// Returns the request-layer error on failure.
    pub async fn update_request_status(&self, id: i64, status: RequestStatus) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .send_json(Method::Post, ApiBase::Api, "/product/status/change", &StatusChange { id, status })
            .await?;
        Ok(())
    }
}
