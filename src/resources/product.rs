//! Product resource implementation.
//!
//! [`ProductsClient`] is generic over the product type `P` and the variation
//! type `PV`. Stores running extensions that add fields can decode into their
//! own types, typically by flattening [`Product`] or [`ProductVariation`]:
//!
//! ```rust
//! use serde::Deserialize;
//! use woocommerce_api::resources::Product;
//!
//! #[derive(Deserialize)]
//! struct BrandedProduct {
//!     #[serde(flatten)]
//!     product: Product,
//!     brand: Option<String>,
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{ApiSurface, HttpClient, HttpError, HttpMethod};
use crate::parameters::{BaseParameters, Parameters};
use crate::scalars::NullFloat;

use super::common::MetaData;

const PRODUCTS_PATH: &str = "/products";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Simple,
    Grouped,
    External,
    Variable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Pending,
    Private,
    #[default]
    Publish,
}

/// Fields shared by products and product variations.
///
/// Prices are nullable: WooCommerce sends `""` for an unset sale price.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductCommon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sku: String,
    #[serde(default)]
    pub price: NullFloat,
    #[serde(default)]
    pub regular_price: NullFloat,
    #[serde(default)]
    pub sale_price: NullFloat,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta_data: Vec<MetaData>,
}

/// The default product record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    #[serde(flatten)]
    pub common: ProductCommon,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    /// IDs of the variations of a variable product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<u64>,
}

/// The default product variation record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariation {
    #[serde(flatten)]
    pub common: ProductCommon,
}

/// Client for the `/products` endpoints.
pub struct ProductsClient<P = Product, PV = ProductVariation> {
    http: Arc<HttpClient>,
    _records: PhantomData<fn() -> (P, PV)>,
}

impl<P, PV> ProductsClient<P, PV>
where
    P: DeserializeOwned,
    PV: DeserializeOwned,
{
    /// Creates a products client over a shared transport.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            _records: PhantomData,
        }
    }

    /// Lists products matching `parameters`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn list<Q>(&self, parameters: &Q) -> Result<Vec<P>, HttpError>
    where
        Q: Parameters + ?Sized,
    {
        self.get(PRODUCTS_PATH, Some(parameters)).await
    }

    /// Retrieves a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn retrieve(&self, id: u64) -> Result<P, HttpError> {
        self.get(&format!("{PRODUCTS_PATH}/{id}"), None::<&BaseParameters>)
            .await
    }

    /// Lists the variations of a product.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn list_variations<Q>(
        &self,
        product_id: u64,
        parameters: &Q,
    ) -> Result<Vec<PV>, HttpError>
    where
        Q: Parameters + ?Sized,
    {
        self.get(
            &format!("{PRODUCTS_PATH}/{product_id}/variations"),
            Some(parameters),
        )
        .await
    }

    async fn get<T, Q>(&self, path: &str, parameters: Option<&Q>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        Q: Parameters + ?Sized,
    {
        self.http
            .execute(
                ApiSurface::Management,
                HttpMethod::Get,
                path,
                None::<&()>,
                parameters,
                None,
            )
            .await?
            .json()
            .await
    }
}

impl<P, PV> Clone for ProductsClient<P, PV> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            _records: PhantomData,
        }
    }
}

impl<P, PV> fmt::Debug for ProductsClient<P, PV> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductsClient")
            .field("http", &self.http)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_decodes_nullable_prices() {
        let product: Product = serde_json::from_value(json!({
            "id": 93,
            "name": "Mug",
            "type": "variable",
            "status": "publish",
            "price": "10",
            "regular_price": 12.5,
            "sale_price": "",
            "variations": [94, 95]
        }))
        .unwrap();

        assert_eq!(product.common.id, Some(93));
        assert_eq!(product.product_type, Some(ProductType::Variable));
        assert_eq!(product.common.price.get(), Some(10.0));
        assert_eq!(product.common.regular_price.get(), Some(12.5));
        assert!(!product.common.sale_price.is_valid());
        assert_eq!(product.variations, vec![94, 95]);
    }

    #[test]
    fn test_variation_decodes_null_price() {
        let variation: ProductVariation =
            serde_json::from_value(json!({"id": 94, "sku": "MUG-RED", "price": null})).unwrap();

        assert_eq!(variation.common.sku, "MUG-RED");
        assert!(!variation.common.price.is_valid());
    }

    #[test]
    fn test_product_encodes_absent_price_as_null() {
        let product = Product {
            name: "Mug".into(),
            common: ProductCommon {
                regular_price: NullFloat(Some(12.5)),
                ..Default::default()
            },
            ..Default::default()
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["regular_price"], "12.50");
        assert_eq!(value["sale_price"], serde_json::Value::Null);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_extension_type_flattens_product() {
        #[derive(Deserialize)]
        struct BrandedProduct {
            #[serde(flatten)]
            product: Product,
            brand: Option<String>,
        }

        let branded: BrandedProduct =
            serde_json::from_value(json!({"id": 1, "name": "Mug", "brand": "Acme"})).unwrap();

        assert_eq!(branded.product.name, "Mug");
        assert_eq!(branded.brand.as_deref(), Some("Acme"));
    }
}
