//! Trait abstraction for the Customers API to enable mocking in tests

use super::ApiError;
use crate::state::{
    Address, AddressFilters, AddressPayload, Customer, CustomerFilters, CustomerUpdate,
    NewCustomer,
};
use async_trait::async_trait;

/// Operations on the customer resource and its nested addresses.
///
/// Identifiers are passed as typed by the user; the service validates them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// Create a customer, optionally with one address
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, ApiError>;

    /// Fetch a single customer
    async fn get_customer(&self, customer_id: &str) -> Result<Customer, ApiError>;

    /// Apply a partial update
    async fn update_customer(
        &self,
        customer_id: &str,
        changes: &CustomerUpdate,
    ) -> Result<Customer, ApiError>;

    async fn delete_customer(&self, customer_id: &str) -> Result<(), ApiError>;

    async fn lock_customer(&self, customer_id: &str) -> Result<Customer, ApiError>;

    async fn unlock_customer(&self, customer_id: &str) -> Result<Customer, ApiError>;

    /// List customers matching the filters
    async fn list_customers(&self, filters: &CustomerFilters) -> Result<Vec<Customer>, ApiError>;

    async fn create_address(
        &self,
        customer_id: &str,
        address: &AddressPayload,
    ) -> Result<Address, ApiError>;

    async fn get_address(&self, customer_id: &str, address_id: &str) -> Result<Address, ApiError>;

    async fn update_address(
        &self,
        customer_id: &str,
        address_id: &str,
        address: &AddressPayload,
    ) -> Result<Address, ApiError>;

    async fn delete_address(&self, customer_id: &str, address_id: &str) -> Result<(), ApiError>;

    /// List a customer's addresses matching the filters
    async fn list_addresses(
        &self,
        customer_id: &str,
        filters: &AddressFilters,
    ) -> Result<Vec<Address>, ApiError>;
}
