//! Cart resource implementation.
//!
//! The cart lives on the storefront surface. It is not authenticated with the
//! consumer key; instead the server identifies the cart by its `Cart-Token`
//! header and protects mutations with a `Nonce` header. Both come back as
//! response headers and are surfaced as a [`CartSession`].
//!
//! The session is the caller's to carry: each call returns the session to use
//! for the next one. Nothing is cached between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::resources::{CartItemAdd, CartResponse};
//!
//! let CartResponse { cart, session } = api.cart.get(None).await?;
//!
//! let added = api
//!     .cart
//!     .add_item(&session, &CartItemAdd::new(93, 2))
//!     .await?;
//! assert_eq!(added.cart.items_count, cart.items_count + 2);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{
    ApiSurface, HttpClient, HttpError, HttpMethod, HttpResponse, CART_TOKEN_HEADER, NONCE_HEADER,
};
use crate::parameters::BaseParameters;
use crate::scalars::Int;

const CART_PATH: &str = "/cart";
const ADD_ITEM_PATH: &str = "/cart/add-item";
const REMOVE_ITEM_PATH: &str = "/cart/remove-item";

/// Currency totals of a coupon, in minor units.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CouponTotals {
    pub currency_code: String,
    pub currency_symbol: String,
    /// Number of decimal places in the currency; `2` means totals are in cents.
    pub currency_minor_unit: u32,
    pub currency_decimal_separator: String,
    pub currency_thousand_separator: String,
    pub currency_prefix: String,
    pub currency_suffix: String,
    pub total_discount: Int,
    pub total_discount_tax: Int,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Coupon {
    pub code: String,
    pub totals: CouponTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CartImage {
    pub id: u64,
    pub src: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CartItemTotals {
    pub currency_code: String,
    pub currency_minor_unit: u32,
    /// Line total after discounts, in minor units.
    pub line_total: Int,
    pub line_total_tax: Int,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CartItemVariation {
    pub attribute: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CartItem {
    /// Key identifying the line in the cart, used by `remove_item`.
    pub key: String,
    /// Product or variation id.
    pub id: u64,
    pub quantity: u32,
    pub name: String,
    pub summary: String,
    pub short_description: String,
    pub description: String,
    pub sku: String,
    pub images: Vec<CartImage>,
    pub totals: CartItemTotals,
    #[serde(rename = "variation")]
    pub variations: Vec<CartItemVariation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CartAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
}

/// Cart totals, in minor units of the cart currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CartTotals {
    pub currency_code: String,
    pub currency_minor_unit: u32,
    pub total_items: Int,
    pub total_items_tax: Int,
    pub total_fees: Int,
    pub total_fees_tax: Int,
    pub total_discount: Int,
    pub total_discount_tax: Int,
    pub total_shipping: Int,
    pub total_shipping_tax: Int,
    /// Grand total including tax and shipping.
    pub total_price: Int,
    pub total_tax: Int,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CartShippingRateOption {
    /// Method and instance id joined by a colon, e.g. `flat_rate:1`.
    pub rate_id: String,
    /// Rate price, in minor units.
    pub price: Int,
    pub method_id: String,
    pub selected: bool,
    pub currency_code: String,
}

/// Shipping rates offered for one package of the cart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CartShippingRate {
    /// Index of the package within the cart.
    pub package_id: u64,
    pub name: String,
    pub shipping_rates: Vec<CartShippingRateOption>,
}

/// A shopper's cart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Cart {
    pub coupons: Vec<Coupon>,
    pub items: Vec<CartItem>,
    pub items_count: u32,
    pub shipping_address: CartAddress,
    pub billing_address: CartAddress,
    pub totals: CartTotals,
    pub shipping_rates: Vec<CartShippingRate>,
}

/// The storefront session headers of a cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSession {
    /// Identifies the cart; `None` before the server has issued one.
    pub cart_token: Option<String>,
    /// Required by mutations; refreshed by the server on every response.
    pub nonce: Option<String>,
}

impl CartSession {
    /// Creates a session for an existing cart token.
    #[must_use]
    pub fn new(cart_token: impl Into<String>) -> Self {
        Self {
            cart_token: Some(cart_token.into()),
            nonce: None,
        }
    }

    /// Returns the session as request headers.
    #[must_use]
    pub fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        if let Some(token) = &self.cart_token {
            headers.insert(CART_TOKEN_HEADER.to_string(), token.clone());
        }
        if let Some(nonce) = &self.nonce {
            headers.insert(NONCE_HEADER.to_string(), nonce.clone());
        }
        headers
    }

    /// Returns the session to use after `response`.
    ///
    /// Headers the server sent replace the current values; missing ones are
    /// carried over.
    fn refreshed(&self, response: &HttpResponse) -> Self {
        Self {
            cart_token: response
                .cart_token()
                .map(str::to_string)
                .or_else(|| self.cart_token.clone()),
            nonce: response
                .nonce()
                .map(str::to_string)
                .or_else(|| self.nonce.clone()),
        }
    }
}

/// A cart together with the session to use for the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartResponse {
    pub cart: Cart,
    pub session: CartSession,
}

/// The payload of [`CartClient::add_item`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItemAdd {
    /// Product or variation ID.
    pub id: u64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variation: Vec<CartItemVariation>,
}

impl CartItemAdd {
    #[must_use]
    pub const fn new(id: u64, quantity: u32) -> Self {
        Self {
            id,
            quantity,
            variation: Vec::new(),
        }
    }
}

#[derive(Serialize)]
struct CartItemRemove<'a> {
    key: &'a str,
}

/// Client for the storefront `/cart` endpoints.
#[derive(Debug, Clone)]
pub struct CartClient {
    http: Arc<HttpClient>,
}

impl CartClient {
    /// Creates a cart client over a shared transport.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches the cart identified by `cart_token`.
    ///
    /// Without a token the server starts a new cart and issues its token in
    /// the returned session.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn get(&self, cart_token: Option<&str>) -> Result<CartResponse, HttpError> {
        let session = CartSession {
            cart_token: cart_token.map(str::to_string),
            nonce: None,
        };
        self.send(HttpMethod::Get, CART_PATH, None::<&()>, &session)
            .await
    }

    /// Adds an item to the cart of `session`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error. A session without a nonce is
    /// usually rejected by the server with [`HttpError::Api`].
    pub async fn add_item(
        &self,
        session: &CartSession,
        item: &CartItemAdd,
    ) -> Result<CartResponse, HttpError> {
        self.send(HttpMethod::Post, ADD_ITEM_PATH, Some(item), session)
            .await
    }

    /// Removes the line with `key` from the cart of `session`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn remove_item(
        &self,
        session: &CartSession,
        key: &str,
    ) -> Result<CartResponse, HttpError> {
        self.send(
            HttpMethod::Post,
            REMOVE_ITEM_PATH,
            Some(&CartItemRemove { key }),
            session,
        )
        .await
    }

    async fn send<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        session: &CartSession,
    ) -> Result<CartResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        if method != HttpMethod::Get && session.nonce.is_none() {
            tracing::debug!("Sending cart mutation to {} without a nonce", path);
        }

        let response = self
            .http
            .execute(
                ApiSurface::Storefront,
                method,
                path,
                body,
                None::<&BaseParameters>,
                Some(&session.headers()),
            )
            .await?;

        let session = session.refreshed(&response);
        let cart = response.json().await?;
        Ok(CartResponse { cart, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cart_decodes_minor_unit_totals() {
        let cart: Cart = serde_json::from_value(json!({
            "items": [{
                "key": "c4ca4238",
                "id": 93,
                "quantity": 2,
                "name": "Mug",
                "totals": {"currency_code": "EUR", "currency_minor_unit": 2, "line_total": "2000"},
                "variation": [{"attribute": "Color", "value": "Red"}]
            }],
            "items_count": 2,
            "totals": {"currency_code": "EUR", "total_price": "2440", "total_tax": 440}
        }))
        .unwrap();

        assert_eq!(cart.items[0].key, "c4ca4238");
        assert_eq!(cart.items[0].totals.line_total, Int(2000));
        assert_eq!(cart.items[0].variations[0].value, "Red");
        assert_eq!(cart.totals.total_price, Int(2440));
        assert_eq!(cart.totals.total_tax, Int(440));
    }

    #[test]
    fn test_cart_decodes_shipping_rates_per_package() {
        let cart: Cart = serde_json::from_value(json!({
            "shipping_rates": [{
                "package_id": 0,
                "name": "Shipment 1",
                "shipping_rates": [
                    {"rate_id": "flat_rate:1", "price": "500", "method_id": "flat_rate", "selected": true},
                    {"rate_id": "free_shipping:2", "price": 0, "method_id": "free_shipping"}
                ]
            }]
        }))
        .unwrap();

        let package = &cart.shipping_rates[0];
        assert_eq!(package.package_id, 0);
        assert_eq!(package.shipping_rates[0].rate_id, "flat_rate:1");
        assert_eq!(package.shipping_rates[0].price, Int(500));
        assert!(package.shipping_rates[0].selected);
        assert!(!package.shipping_rates[1].selected);
    }

    #[test]
    fn test_session_headers_skip_missing_values() {
        let session = CartSession::new("token-1");
        let headers = session.headers();

        assert_eq!(headers.get(CART_TOKEN_HEADER), Some(&"token-1".to_string()));
        assert!(!headers.contains_key(NONCE_HEADER));
        assert!(CartSession::default().headers().is_empty());
    }

    #[test]
    fn test_item_add_omits_empty_variation() {
        assert_eq!(
            serde_json::to_value(CartItemAdd::new(93, 1)).unwrap(),
            json!({"id": 93, "quantity": 1})
        );
    }
}
