//! Completed requests and how they repaint the view

use crate::api::ApiError;
use crate::state::{Address, Customer, Form, ViewState};

pub const SUCCESS: &str = "Success";
pub const CUSTOMER_DELETED: &str = "Customer has been Deleted!";
pub const ADDRESS_DELETED: &str = "Address has been Deleted!";
/// Shown for failed deletes, whatever the service answered
pub const SERVER_ERROR: &str = "Server error!";

/// Result of one request, ready to be applied to the view
#[derive(Debug)]
pub enum Outcome {
    CustomerCreated(Result<Customer, ApiError>),
    /// Lock or unlock; the response carries no id, so the requested one is kept
    LockChanged {
        customer_id: String,
        result: Result<Customer, ApiError>,
    },
    CustomerUpdated {
        customer_id: String,
        result: Result<Customer, ApiError>,
    },
    CustomerRetrieved(Result<Customer, ApiError>),
    CustomerDeleted(Result<(), ApiError>),
    CustomersFound(Result<Vec<Customer>, ApiError>),
    AddressSaved(Result<Address, ApiError>),
    AddressRetrieved(Result<Address, ApiError>),
    AddressDeleted(Result<(), ApiError>),
    AddressesFound(Result<Vec<Address>, ApiError>),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        match self {
            Self::CustomerCreated(r) | Self::CustomerRetrieved(r) => r.is_ok(),
            Self::LockChanged { result, .. } | Self::CustomerUpdated { result, .. } => {
                result.is_ok()
            }
            Self::CustomerDeleted(r) | Self::AddressDeleted(r) => r.is_ok(),
            Self::CustomersFound(r) => r.is_ok(),
            Self::AddressSaved(r) | Self::AddressRetrieved(r) => r.is_ok(),
            Self::AddressesFound(r) => r.is_ok(),
        }
    }

    /// Repaint the view from the outcome. Every path ends in a flash message.
    pub fn apply(self, view: &mut ViewState) {
        match self {
            Self::CustomerCreated(Ok(customer)) => {
                view.show_customer(&customer);
                view.show_primary_address(&customer);
                view.flash(SUCCESS);
            }
            Self::LockChanged {
                customer_id,
                result: Ok(mut customer),
            } => {
                // Lock responses omit id and password
                customer.password = view.customer.password.as_text().to_string();
                show_with_id(view, customer, &customer_id);
            }
            Self::CustomerUpdated {
                customer_id,
                result: Ok(customer),
            } => show_with_id(view, customer, &customer_id),
            Self::CustomerRetrieved(Ok(customer)) => {
                view.clear_forms();
                view.show_customer_results(vec![customer]);
                view.flash(SUCCESS);
            }
            Self::CustomerRetrieved(Err(err)) => {
                view.clear_forms();
                fail(view, &err);
            }
            Self::CustomerDeleted(Ok(())) => {
                view.clear_forms();
                view.flash(CUSTOMER_DELETED);
            }
            Self::CustomerDeleted(Err(err)) | Self::AddressDeleted(Err(err)) => {
                tracing::warn!("Delete failed: {err}");
                view.flash(SERVER_ERROR);
            }
            Self::CustomersFound(Ok(customers)) => {
                view.clear_forms();
                view.show_customer_results(customers);
                view.flash(SUCCESS);
            }
            Self::AddressSaved(Ok(address)) | Self::AddressRetrieved(Ok(address)) => {
                view.show_address(&address);
                view.flash(SUCCESS);
            }
            Self::AddressDeleted(Ok(())) => {
                view.address.clear();
                view.flash(ADDRESS_DELETED);
            }
            Self::AddressesFound(Ok(addresses)) => {
                view.address.clear();
                view.show_address_results(addresses);
                view.flash(SUCCESS);
            }
            Self::CustomerCreated(Err(err))
            | Self::LockChanged {
                result: Err(err), ..
            }
            | Self::CustomerUpdated {
                result: Err(err), ..
            }
            | Self::CustomersFound(Err(err))
            | Self::AddressSaved(Err(err))
            | Self::AddressRetrieved(Err(err))
            | Self::AddressesFound(Err(err)) => fail(view, &err),
        }
    }
}

fn show_with_id(view: &mut ViewState, customer: Customer, customer_id: &str) {
    view.show_customer(&customer);
    view.customer.id.set_text(customer_id);
    view.flash(SUCCESS);
}

fn fail(view: &mut ViewState, err: &ApiError) {
    tracing::warn!("Request failed: {err}");
    view.flash(err.flash_message());
}
