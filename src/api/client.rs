//! HTTP client for the Customers REST service
//!
//! Maps every [`CustomerApi`] operation onto one request against the
//! `/customers` resource and its nested `/addresses` collection.

use super::{ApiError, CustomerApi};
use crate::state::{
    Address, AddressFilters, AddressPayload, Customer, CustomerFilters, CustomerUpdate,
    NewCustomer,
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

/// Default service address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Default path prefix of the REST resources
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Join the service address and the resource prefix into one root URL
fn api_root(base_url: &str, api_prefix: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let prefix = api_prefix.trim_matches('/');
    if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{prefix}")
    }
}

fn with_query(url: String, query: &str) -> String {
    if query.is_empty() {
        url
    } else {
        format!("{url}?{query}")
    }
}

/// Client for communicating with the Customers service
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    /// Service address plus resource prefix, without trailing slash
    root: String,
}

impl RestClient {
    /// Create a new client; no connection is made until the first request
    pub fn new(base_url: &str, api_prefix: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            root: api_root(base_url, api_prefix),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    fn customers_url(&self) -> String {
        format!("{}/customers", self.root)
    }

    fn customer_url(&self, customer_id: &str) -> String {
        format!("{}/customers/{}", self.root, urlencoding::encode(customer_id))
    }

    fn addresses_url(&self, customer_id: &str) -> String {
        format!("{}/addresses", self.customer_url(customer_id))
    }

    fn address_url(&self, customer_id: &str, address_id: &str) -> String {
        format!(
            "{}/{}",
            self.addresses_url(customer_id),
            urlencoding::encode(address_id)
        )
    }

    /// Send a request and decode a JSON success body
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            tracing::warn!("Request failed with {status}: {err}");
            return Err(err);
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request whose success body is ignored
    async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status, &body);
            tracing::warn!("Request failed with {status}: {err}");
            return Err(err);
        }

        Ok(())
    }
}

#[async_trait]
impl CustomerApi for RestClient {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, ApiError> {
        let url = self.customers_url();
        tracing::debug!("POST {url}");
        self.send_json(self.client.post(url).json(customer)).await
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Customer, ApiError> {
        let url = self.customer_url(customer_id);
        tracing::debug!("GET {url}");
        self.send_json(self.client.get(url)).await
    }

    async fn update_customer(
        &self,
        customer_id: &str,
        changes: &CustomerUpdate,
    ) -> Result<Customer, ApiError> {
        let url = self.customer_url(customer_id);
        tracing::debug!("PUT {url}");
        self.send_json(self.client.put(url).json(changes)).await
    }

    async fn delete_customer(&self, customer_id: &str) -> Result<(), ApiError> {
        let url = self.customer_url(customer_id);
        tracing::debug!("DELETE {url}");
        self.send_empty(self.client.delete(url)).await
    }

    async fn lock_customer(&self, customer_id: &str) -> Result<Customer, ApiError> {
        let url = format!("{}/lock", self.customer_url(customer_id));
        tracing::debug!("PUT {url}");
        self.send_json(self.client.put(url).header(CONTENT_TYPE, "application/json"))
            .await
    }

    async fn unlock_customer(&self, customer_id: &str) -> Result<Customer, ApiError> {
        let url = format!("{}/unlock", self.customer_url(customer_id));
        tracing::debug!("PUT {url}");
        self.send_json(self.client.put(url).header(CONTENT_TYPE, "application/json"))
            .await
    }

    async fn list_customers(&self, filters: &CustomerFilters) -> Result<Vec<Customer>, ApiError> {
        let url = with_query(self.customers_url(), &filters.to_query_string());
        tracing::debug!("GET {url}");
        self.send_json(self.client.get(url)).await
    }

    async fn create_address(
        &self,
        customer_id: &str,
        address: &AddressPayload,
    ) -> Result<Address, ApiError> {
        let url = self.addresses_url(customer_id);
        tracing::debug!("POST {url}");
        self.send_json(self.client.post(url).json(address)).await
    }

    async fn get_address(&self, customer_id: &str, address_id: &str) -> Result<Address, ApiError> {
        let url = self.address_url(customer_id, address_id);
        tracing::debug!("GET {url}");
        self.send_json(self.client.get(url)).await
    }

    async fn update_address(
        &self,
        customer_id: &str,
        address_id: &str,
        address: &AddressPayload,
    ) -> Result<Address, ApiError> {
        let url = self.address_url(customer_id, address_id);
        tracing::debug!("PUT {url}");
        self.send_json(self.client.put(url).json(address)).await
    }

    async fn delete_address(&self, customer_id: &str, address_id: &str) -> Result<(), ApiError> {
        let url = self.address_url(customer_id, address_id);
        tracing::debug!("DELETE {url}");
        self.send_empty(self.client.delete(url)).await
    }

    async fn list_addresses(
        &self,
        customer_id: &str,
        filters: &AddressFilters,
    ) -> Result<Vec<Address>, ApiError> {
        let url = with_query(self.addresses_url(customer_id), &filters.to_query_string());
        tracing::debug!("GET {url}");
        self.send_json(self.client.get(url)).await
    }
}
