//! Order resource implementation.
//!
//! Orders live on the management surface under `/orders`.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::parameters::{PageParams, Parameters};
//! use woocommerce_api::resources::{OrderStatus, OrderUpdate};
//!
//! let params = PageParams { page: 1, per_page: 20 }.with_value("status", "processing");
//! let (orders, total) = api.orders.list(&params).await?;
//!
//! let update = OrderUpdate {
//!     status: Some(OrderStatus::Completed),
//!     ..Default::default()
//! };
//! let order = api.orders.update(orders[0].id, &update).await?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiSurface, HttpClient, HttpError, HttpMethod};
use crate::parameters::{BaseParameters, Parameters};
use crate::scalars::{Float, NullTime, NumericString, Time};

use super::common::{Address, MetaData};

const ORDERS_PATH: &str = "/orders";

/// The lifecycle state of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
    Trash,
    CheckoutDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderTax {
    pub id: u64,
    /// Rate identifier in `COUNTRY-STATE-NAME-PRIORITY` form, e.g. `US-CA-TAX-1`.
    #[serde(default)]
    pub rate_code: String,
    /// Id of the tax rate this line was computed from.
    #[serde(default)]
    pub rate_id: NumericString,
    #[serde(default)]
    pub label: String,
    /// Compound rates apply on top of the other taxes.
    #[serde(default)]
    pub compound: bool,
    /// Tax total, not including shipping taxes.
    #[serde(default)]
    pub tax_total: Float,
    /// Tax charged on shipping at this rate.
    #[serde(default)]
    pub shipping_tax_total: Float,
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub product_id: u64,
    /// Variation id, `0` for a simple product.
    #[serde(default)]
    pub variation_id: u64,
    pub quantity: i64,
    #[serde(default)]
    pub tax_class: String,
    /// Line subtotal before discounts.
    #[serde(default)]
    pub subtotal: Float,
    #[serde(default)]
    pub subtotal_tax: Float,
    /// Line total after discounts.
    #[serde(default)]
    pub total: Float,
    #[serde(default)]
    pub total_tax: Float,
    #[serde(default)]
    pub taxes: Vec<OrderTax>,
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
    #[serde(default)]
    pub sku: String,
    /// Unit price.
    #[serde(default)]
    pub price: Float,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderShipping {
    pub id: u64,
    #[serde(default)]
    pub method_title: String,
    /// Shipping method slug, e.g. `flat_rate`.
    #[serde(default)]
    pub method_id: String,
    #[serde(default)]
    pub total: Float,
    #[serde(default)]
    pub total_tax: Float,
    #[serde(default)]
    pub taxes: Vec<OrderTax>,
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderCoupon {
    pub id: u64,
    pub code: String,
    #[serde(default)]
    pub discount: Float,
    #[serde(default)]
    pub discount_tax: Float,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRefund {
    pub id: u64,
    #[serde(default)]
    pub reason: String,
    /// Refunded amount. WooCommerce reports it as a negative value.
    pub total: Float,
}

/// An order as returned by the management API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: u64,
    /// Id of the parent order, `0` when there is none.
    #[serde(default)]
    pub parent_id: u64,
    /// Display number, which may differ from `id`.
    #[serde(default)]
    pub number: String,
    /// Opaque key used in order-received and payment links.
    #[serde(default)]
    pub order_key: String,
    /// Channel that created the order, e.g. `checkout`, `admin` or `rest-api`.
    #[serde(default)]
    pub created_via: String,
    /// WooCommerce version that last updated the order.
    #[serde(default)]
    pub version: String,
    pub status: OrderStatus,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: String,
    pub date_created: Time,
    pub date_modified: Time,
    #[serde(default)]
    pub discount_total: Float,
    #[serde(default)]
    pub discount_tax: Float,
    #[serde(default)]
    pub shipping_total: Float,
    #[serde(default)]
    pub shipping_tax: Float,
    /// Sum of line item taxes only.
    #[serde(default)]
    pub cart_tax: Float,
    pub total: Float,
    #[serde(default)]
    pub total_tax: Float,
    /// Whether line prices were entered inclusive of tax.
    #[serde(default)]
    pub prices_include_tax: bool,
    /// `0` for guest orders.
    #[serde(default)]
    pub customer_id: u64,
    #[serde(default)]
    pub customer_ip_address: String,
    #[serde(default)]
    pub customer_user_agent: String,
    #[serde(default)]
    pub customer_note: String,
    #[serde(default)]
    pub billing: Address,
    #[serde(default)]
    pub shipping: Address,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_method_title: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub date_paid: NullTime,
    #[serde(default)]
    pub date_completed: NullTime,
    /// Hash of the cart the order was created from; empty for admin orders.
    #[serde(default)]
    pub cart_hash: String,
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
    #[serde(default)]
    pub line_items: Vec<OrderItem>,
    #[serde(default)]
    pub tax_lines: Vec<OrderTax>,
    #[serde(default)]
    pub shipping_lines: Vec<OrderShipping>,
    #[serde(default)]
    pub coupon_lines: Vec<OrderCoupon>,
    #[serde(default)]
    pub refunds: Vec<OrderRefund>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderCreateItem {
    pub product_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<u64>,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderShippingLine {
    pub method_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_title: Option<String>,
    /// Encoded with exactly two decimals.
    pub total: Float,
}

/// The payload of [`OrdersClient::create`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderCreate {
    pub payment_method: String,
    pub payment_method_title: String,
    pub currency: String,
    pub set_paid: bool,
    pub billing: Address,
    pub shipping: Address,
    pub line_items: Vec<OrderCreateItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meta_data: Vec<MetaData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shipping_lines: Vec<OrderShippingLine>,
}

/// The payload of [`OrdersClient::update`]. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<MetaData>>,
}

/// Client for the `/orders` endpoints.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    http: Arc<HttpClient>,
}

impl OrdersClient {
    /// Creates an orders client over a shared transport.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists orders, returning the page and the total number of matching
    /// orders reported by the server.
    ///
    /// A missing total header yields a total of `0`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Format`] if the total header is not an integer,
    /// plus any transport or decode error.
    pub async fn list<P>(&self, parameters: &P) -> Result<(Vec<Order>, u64), HttpError>
    where
        P: Parameters + ?Sized,
    {
        let response = self
            .http
            .execute(
                ApiSurface::Management,
                HttpMethod::Get,
                ORDERS_PATH,
                None::<&()>,
                Some(parameters),
                None,
            )
            .await?;

        let total = response.total_count()?.unwrap_or(0);
        let orders = response.json().await?;
        Ok((orders, total))
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn create(&self, order: &OrderCreate) -> Result<Order, HttpError> {
        self.http
            .execute(
                ApiSurface::Management,
                HttpMethod::Post,
                ORDERS_PATH,
                Some(order),
                None::<&BaseParameters>,
                None,
            )
            .await?
            .json()
            .await
    }

    /// Updates the order with the given ID.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn update(&self, id: u64, update: &OrderUpdate) -> Result<Order, HttpError> {
        self.http
            .execute(
                ApiSurface::Management,
                HttpMethod::Put,
                &format!("{ORDERS_PATH}/{id}"),
                Some(update),
                None::<&BaseParameters>,
                None,
            )
            .await?
            .json()
            .await
    }
}
