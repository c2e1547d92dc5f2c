//! Requests planned from the view and their execution

use super::outcome::Outcome;
use crate::api::CustomerApi;
use crate::state::{AddressFilters, AddressPayload, CustomerFilters, CustomerUpdate, NewCustomer};

/// A single call to the Customers service, fully built from form values
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    CreateCustomer(NewCustomer),
    LockCustomer {
        customer_id: String,
    },
    UnlockCustomer {
        customer_id: String,
    },
    UpdateCustomer {
        customer_id: String,
        changes: CustomerUpdate,
    },
    RetrieveCustomer {
        customer_id: String,
    },
    DeleteCustomer {
        customer_id: String,
    },
    SearchCustomers(CustomerFilters),
    CreateAddress {
        customer_id: String,
        address: AddressPayload,
    },
    UpdateAddress {
        customer_id: String,
        address_id: String,
        address: AddressPayload,
    },
    RetrieveAddress {
        customer_id: String,
        address_id: String,
    },
    DeleteAddress {
        customer_id: String,
        address_id: String,
    },
    SearchAddresses {
        customer_id: String,
        filters: AddressFilters,
    },
}

impl ApiRequest {
    /// Perform the call. Never fails: errors travel inside the outcome.
    pub async fn execute(self, api: &dyn CustomerApi) -> Outcome {
        match self {
            Self::CreateCustomer(body) => Outcome::CustomerCreated(api.create_customer(&body).await),
            Self::LockCustomer { customer_id } => {
                let result = api.lock_customer(&customer_id).await;
                Outcome::LockChanged {
                    customer_id,
                    result,
                }
            }
            Self::UnlockCustomer { customer_id } => {
                let result = api.unlock_customer(&customer_id).await;
                Outcome::LockChanged {
                    customer_id,
                    result,
                }
            }
            Self::UpdateCustomer {
                customer_id,
                changes,
            } => {
                let result = api.update_customer(&customer_id, &changes).await;
                Outcome::CustomerUpdated {
                    customer_id,
                    result,
                }
            }
            Self::RetrieveCustomer { customer_id } => {
                Outcome::CustomerRetrieved(api.get_customer(&customer_id).await)
            }
            Self::DeleteCustomer { customer_id } => {
                Outcome::CustomerDeleted(api.delete_customer(&customer_id).await)
            }
            Self::SearchCustomers(filters) => {
                Outcome::CustomersFound(api.list_customers(&filters).await)
            }
            Self::CreateAddress {
                customer_id,
                address,
            } => Outcome::AddressSaved(api.create_address(&customer_id, &address).await),
            Self::UpdateAddress {
                customer_id,
                address_id,
                address,
            } => Outcome::AddressSaved(
                api.update_address(&customer_id, &address_id, &address)
                    .await,
            ),
            Self::RetrieveAddress {
                customer_id,
                address_id,
            } => Outcome::AddressRetrieved(api.get_address(&customer_id, &address_id).await),
            Self::DeleteAddress {
                customer_id,
                address_id,
            } => Outcome::AddressDeleted(api.delete_address(&customer_id, &address_id).await),
            Self::SearchAddresses {
                customer_id,
                filters,
            } => Outcome::AddressesFound(api.list_addresses(&customer_id, &filters).await),
        }
    }
}
