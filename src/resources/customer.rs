//! Customer resource implementation.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{ApiSurface, HttpClient, HttpError, HttpMethod};
use crate::parameters::{BaseParameters, Parameters};

use super::common::{Address, MetaData};

const CUSTOMERS_PATH: &str = "/customers";

/// The default customer record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Customer {
    pub id: u64,
    pub date_created: String,
    pub date_modified: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub username: String,
    pub billing: Address,
    pub shipping: Address,
    pub is_paying_customer: bool,
    pub avatar_url: String,
    pub meta_data: Vec<MetaData>,
}

/// Client for the `/customers` endpoints, generic over the customer record.
pub struct CustomersClient<C = Customer> {
    http: Arc<HttpClient>,
    _record: PhantomData<fn() -> C>,
}

impl<C: DeserializeOwned> CustomersClient<C> {
    /// Creates a customers client over a shared transport.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            _record: PhantomData,
        }
    }

    /// Lists customers matching `parameters`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn list<Q>(&self, parameters: &Q) -> Result<Vec<C>, HttpError>
    where
        Q: Parameters + ?Sized,
    {
        self.http
            .execute(
                ApiSurface::Management,
                HttpMethod::Get,
                CUSTOMERS_PATH,
                None::<&()>,
                Some(parameters),
                None,
            )
            .await?
            .json()
            .await
    }

    /// Retrieves a single customer by ID.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn retrieve(&self, id: u64) -> Result<C, HttpError> {
        self.http
            .execute(
                ApiSurface::Management,
                HttpMethod::Get,
                &format!("{CUSTOMERS_PATH}/{id}"),
                None::<&()>,
                None::<&BaseParameters>,
                None,
            )
            .await?
            .json()
            .await
    }
}

impl<C> Clone for CustomersClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            _record: PhantomData,
        }
    }
}

impl<C> fmt::Debug for CustomersClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomersClient")
            .field("http", &self.http)
            .finish()
    }
}
