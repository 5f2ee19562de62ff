//! Wire DTOs for the marketplace and auth backends.
//!
//! DESIGN
//! ======
//! Field names follow the backend verbatim (including its spellings such as
//! `enviroment_area`). Numeric fields that the backend sometimes sends as
//! strings are decoded leniently.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SigninRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SigninResponse {
    #[serde(rename = "AuthenticationResult")]
    pub authentication_result: AuthenticationResult,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthenticationResult {
    #[serde(rename = "AccessToken")]
    pub access_token: String,
}

/// Body for endpoints that take the raw token (`verify-token`, `signout`,
/// `get-profile`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRequest<'a> {
    pub token: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAttribute {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Identity-provider user record returned by `verify-token` and
/// `get-profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "Username", default)]
    pub username: Option<String>,
    #[serde(rename = "UserAttributes", default)]
    pub user_attributes: Option<Vec<UserAttribute>>,
}

/// Attribute carrying the account role.
pub const USER_TYPE_ATTRIBUTE: &str = "custom:userType";

impl UserProfile {
    /// Value of attribute `name`, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.user_attributes
            .as_deref()?
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub gender: String,
    pub given_name: String,
    pub family_name: String,
    pub address: String,
    /// `YYYY-MM-DD`, empty when not given.
    pub birthdate: String,
    pub country: String,
    pub user_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub family_name: String,
    pub given_name: String,
    pub address: String,
    pub gender: String,
    pub birthdate: String,
    pub country: String,
}

// =============================================================================
// PRODUCTS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub collected_amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub amount_of_module: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub min_persons: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub max_persons: Option<f64>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub desired_amenities: Option<serde_json::Value>,
    #[serde(default)]
    pub financial_aspects: Option<String>,
    #[serde(default)]
    pub enviroment_area: Option<String>,
    #[serde(default)]
    pub special_attractions: Option<String>,
    #[serde(default)]
    pub public_transportation: Option<String>,
    #[serde(default)]
    pub other_details: Option<String>,
    #[serde(default)]
    pub requirements_investors: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Product {
    /// Case-insensitive match against name or description.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.description.to_lowercase().contains(&needle)
    }

    /// Case-insensitive match against the location type.
    #[must_use]
    pub fn matches_location(&self, needle: &str) -> bool {
        self.location_type
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// List envelope. Sorted and price-range endpoints use the `product` key,
/// the others `products`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductsEnvelope {
    #[serde(default, alias = "product", deserialize_with = "deserialize_null_as_empty")]
    pub products: Vec<Product>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Person {
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductDetails {
    pub product: Product,
    #[serde(default)]
    pub product_owner_information: Option<Person>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceRange {
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AmenityFilter<'a> {
    pub desired_amenities: &'a str,
}

/// Text fields of the add-property form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyDraft {
    pub name: String,
    pub description: String,
    pub kind: String,
    pub price: f64,
    pub collected_amount: f64,
    pub amount_of_module: f64,
    pub min_persons: u32,
    pub max_persons: u32,
    pub country: String,
    pub city: String,
    pub desired_amenities: Vec<String>,
    pub financial_aspects: String,
    pub enviroment_area: String,
    pub special_attractions: String,
    pub public_transportation: String,
    pub other_details: String,
    pub location_type: String,
    pub requirements_investors: String,
}

impl PropertyDraft {
    /// Multipart fields: numbers as decimal text, lists as JSON arrays.
    #[must_use]
    pub fn to_form_fields(&self) -> Vec<(String, String)> {
        let amenities = serde_json::to_string(&self.desired_amenities).unwrap_or_else(|_| "[]".to_owned());
        [
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("type", self.kind.clone()),
            ("price", self.price.to_string()),
            ("collected_amount", self.collected_amount.to_string()),
            ("amount_of_module", self.amount_of_module.to_string()),
            ("min_persons", self.min_persons.to_string()),
            ("max_persons", self.max_persons.to_string()),
            ("country", self.country.clone()),
            ("city", self.city.clone()),
            ("desired_amenities", amenities),
            ("financial_aspects", self.financial_aspects.clone()),
            ("enviroment_area", self.enviroment_area.clone()),
            ("special_attractions", self.special_attractions.clone()),
            ("public_transportation", self.public_transportation.clone()),
            ("other_details", self.other_details.clone()),
            ("location_type", self.location_type.clone()),
            ("requirements_investors", self.requirements_investors.clone()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect()
    }
}

// =============================================================================
// CONTACT REQUESTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactOwner {
    pub message: String,
    pub recipient_email: String,
    pub product_id: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactRequest {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Present on investor-side listings.
    #[serde(default)]
    pub recipient: Option<Person>,
    /// Present on landowner-side listings.
    #[serde(default)]
    pub owner: Option<Person>,
    #[serde(default)]
    pub product: Option<ProductRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RequestsEnvelope {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub requests: Vec<ContactRequest>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    pub id: i64,
    pub status: RequestStatus,
}

// =============================================================================
// AMENITIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Amenity {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AmenitiesEnvelope {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub amenities: Vec<Amenity>,
}

// =============================================================================
// LENIENT DECODERS
// =============================================================================

fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("expected integer id, got {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected integer id, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected integer id, got {other}"))),
    }
}

fn deserialize_opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => Ok(n.as_f64()),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected number, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
