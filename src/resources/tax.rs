//! Tax rate resource implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiSurface, HttpClient, HttpError, HttpMethod};
use crate::parameters::Parameters;
use crate::scalars::Float;

const TAXES_PATH: &str = "/taxes";

/// A tax rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tax {
    pub id: u64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    /// Percentage, e.g. `22.0000` for 22 %.
    pub rate: Float,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub shipping: bool,
    #[serde(default)]
    pub class: String,
}

/// Client for the `/taxes` endpoint.
#[derive(Debug, Clone)]
pub struct TaxesClient {
    http: Arc<HttpClient>,
}

impl TaxesClient {
    /// Creates a taxes client over a shared transport.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists tax rates matching `parameters`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error.
    pub async fn list<Q>(&self, parameters: &Q) -> Result<Vec<Tax>, HttpError>
    where
        Q: Parameters + ?Sized,
    {
        self.http
            .execute(
                ApiSurface::Management,
                HttpMethod::Get,
                TAXES_PATH,
                None::<&()>,
                Some(parameters),
                None,
            )
            .await?
            .json()
            .await
    }
}
