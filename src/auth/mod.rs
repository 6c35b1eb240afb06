//! Authentication types for the WooCommerce API client.
//!
//! The two API surfaces authenticate differently:
//!
//! - **Management** (REST v3): every call carries `Authorization: Basic ...`
//!   built from the consumer key/secret, see [`Credentials`].
//! - **Storefront** (Store API): no static credential. Calls rely on the
//!   session headers (`Cart-Token`, `Nonce`) returned by a previous call,
//!   supplied by the caller as extra headers.

mod credentials;

pub use credentials::Credentials;
