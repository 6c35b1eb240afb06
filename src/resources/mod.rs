//! Resource clients for the WooCommerce APIs.
//!
//! Each resource client is a thin layer over the shared [`HttpClient`]: it
//! picks the surface and path, hands over the body and parameters, and decodes
//! the response into a record type.
//!
//! # Overview
//!
//! | Client | Surface | Endpoints |
//! |--------|---------|-----------|
//! | [`OrdersClient`] | management | `/orders`, `/orders/{id}` |
//! | [`ProductsClient`] | management | `/products`, `/products/{id}`, `/products/{id}/variations` |
//! | [`CustomersClient`] | management | `/customers`, `/customers/{id}` |
//! | [`TaxesClient`] | management | `/taxes` |
//! | [`CartClient`] | storefront | `/cart`, `/cart/add-item`, `/cart/remove-item` |
//!
//! [`WooCommerce`] bundles all of them over a single transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::parameters::PageParams;
//! use woocommerce_api::resources::WooCommerce;
//!
//! let api: WooCommerce = WooCommerce::new(&config)?;
//!
//! let (orders, total) = api.orders.list(&PageParams::default()).await?;
//! let product = api.products.retrieve(93).await?;
//! ```

mod cart;
mod common;
mod customer;
mod order;
mod product;
mod tax;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError};
use crate::config::WooCommerceConfig;

pub use cart::{
    Cart, CartAddress, CartClient, CartImage, CartItem, CartItemAdd, CartItemTotals,
    CartItemVariation, CartResponse, CartSession, CartShippingRate, CartShippingRateOption,
    CartTotals, Coupon, CouponTotals,
};
pub use common::{Address, MetaData};
pub use customer::{Customer, CustomersClient};
pub use order::{
    Order, OrderCoupon, OrderCreate, OrderCreateItem, OrderItem, OrderRefund, OrderShipping,
    OrderShippingLine, OrderStatus, OrderTax, OrderUpdate, OrdersClient,
};
pub use product::{
    Product, ProductCommon, ProductStatus, ProductType, ProductVariation, ProductsClient,
};
pub use tax::{Tax, TaxesClient};

/// Entry point bundling every resource client over one transport.
///
/// The type parameters select the record types decoded for customers (`C`),
/// products (`P`) and product variations (`PV`). The defaults are the records
/// of this crate.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::{BaseUrl, ConsumerKey, ConsumerSecret, WooCommerceConfig};
/// use woocommerce_api::resources::WooCommerce;
///
/// let config = WooCommerceConfig::builder()
///     .base_url(BaseUrl::new("https://shop.example.com").unwrap())
///     .consumer_key(ConsumerKey::new("ck_live").unwrap())
///     .consumer_secret(ConsumerSecret::new("cs_live").unwrap())
///     .build()
///     .unwrap();
///
/// let api: WooCommerce = WooCommerce::new(&config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct WooCommerce<C = Customer, P = Product, PV = ProductVariation> {
    pub orders: OrdersClient,
    pub products: ProductsClient<P, PV>,
    pub customers: CustomersClient<C>,
    pub taxes: TaxesClient,
    pub cart: CartClient,
    http: Arc<HttpClient>,
}

impl<C, P, PV> WooCommerce<C, P, PV>
where
    C: DeserializeOwned,
    P: DeserializeOwned,
    PV: DeserializeOwned,
{
    /// Creates every resource client over a new transport built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be created.
    pub fn new(config: &WooCommerceConfig) -> Result<Self, HttpError> {
        Ok(Self::with_client(Arc::new(HttpClient::new(config)?)))
    }

    /// Creates every resource client over an existing transport.
    #[must_use]
    pub fn with_client(http: Arc<HttpClient>) -> Self {
        Self {
            orders: OrdersClient::new(Arc::clone(&http)),
            products: ProductsClient::new(Arc::clone(&http)),
            customers: CustomersClient::new(Arc::clone(&http)),
            taxes: TaxesClient::new(Arc::clone(&http)),
            cart: CartClient::new(Arc::clone(&http)),
            http,
        }
    }

    /// Returns the shared transport, for endpoints without a resource client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http
    }
}

// Verify the default facade is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooCommerce>();
};
