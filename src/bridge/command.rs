//! Command identifiers and request planning

use super::request::ApiRequest;
use crate::state::{Panel, ViewState};

pub const MISSING_CUSTOMER_ID: &str = "Invalid request: missing Customer ID";
pub const MISSING_ADDRESS_ID: &str = "Invalid request: missing Address ID";

/// Every user action the bridge understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CreateCustomer,
    LockCustomer,
    UnlockCustomer,
    UpdateCustomer,
    RetrieveCustomer,
    DeleteCustomer,
    SearchCustomers,
    QueryByPrefix,
    ClearCustomer,
    CreateAddress,
    UpdateAddress,
    RetrieveAddress,
    DeleteAddress,
    SearchAddresses,
    ClearAddress,
}

/// What a command resolves to for the current view
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Local-only reset of a panel
    Clear(Panel),
    /// Precondition failed; the message goes to the flash line
    Reject(&'static str),
    /// One request to the service
    Send(ApiRequest),
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreateCustomer => "Create Customer",
            Self::LockCustomer => "Lock",
            Self::UnlockCustomer => "Unlock",
            Self::UpdateCustomer => "Update Customer",
            Self::RetrieveCustomer => "Retrieve",
            Self::DeleteCustomer => "Delete",
            Self::SearchCustomers => "Search for Customer",
            Self::QueryByPrefix => "Query by Username Prefix",
            Self::ClearCustomer => "Clear",
            Self::CreateAddress => "Create Customer Address",
            Self::UpdateAddress => "Update Customer Address",
            Self::RetrieveAddress => "Retrieve Address",
            Self::DeleteAddress => "Delete Address",
            Self::SearchAddresses => "Search for Customer Addresses",
            Self::ClearAddress => "Clear Address",
        }
    }

    /// Panel the command belongs to
    pub fn panel(&self) -> Panel {
        match self {
            Self::CreateCustomer
            | Self::LockCustomer
            | Self::UnlockCustomer
            | Self::UpdateCustomer
            | Self::RetrieveCustomer
            | Self::DeleteCustomer
            | Self::SearchCustomers
            | Self::QueryByPrefix
            | Self::ClearCustomer => Panel::Customer,
            Self::CreateAddress
            | Self::UpdateAddress
            | Self::RetrieveAddress
            | Self::DeleteAddress
            | Self::SearchAddresses
            | Self::ClearAddress => Panel::Address,
        }
    }

    /// Read the view and decide what the command does
    pub fn plan(&self, view: &ViewState) -> Plan {
        let customer = &view.customer;
        let address = &view.address;

        // Customer commands send whatever id is in the form; the service
        // answers blank or bogus ids with its own error.
        let customer_id = customer.id.as_text().trim().to_string();

        match self {
            Self::ClearCustomer => Plan::Clear(Panel::Customer),
            Self::ClearAddress => Plan::Clear(Panel::Address),
            Self::CreateCustomer => {
                Plan::Send(ApiRequest::CreateCustomer(
                    customer.to_new_customer(address.to_payload()),
                ))
            }
            Self::LockCustomer => Plan::Send(ApiRequest::LockCustomer { customer_id }),
            Self::UnlockCustomer => Plan::Send(ApiRequest::UnlockCustomer { customer_id }),
            Self::UpdateCustomer => Plan::Send(ApiRequest::UpdateCustomer {
                customer_id,
                changes: customer.to_update(),
            }),
            Self::RetrieveCustomer => Plan::Send(ApiRequest::RetrieveCustomer { customer_id }),
            Self::DeleteCustomer => Plan::Send(ApiRequest::DeleteCustomer { customer_id }),
            Self::SearchCustomers => {
                Plan::Send(ApiRequest::SearchCustomers(customer.search_filters()))
            }
            Self::QueryByPrefix => Plan::Send(ApiRequest::SearchCustomers(customer.prefix_filter())),
            Self::CreateAddress
            | Self::UpdateAddress
            | Self::RetrieveAddress
            | Self::DeleteAddress
            | Self::SearchAddresses => {
                let Some(customer_id) = customer.customer_id() else {
                    return Plan::Reject(MISSING_CUSTOMER_ID);
                };
                self.plan_address(customer_id, view)
            }
        }
    }

    fn plan_address(&self, customer_id: String, view: &ViewState) -> Plan {
        let address = &view.address;
        match self {
            Self::CreateAddress => Plan::Send(ApiRequest::CreateAddress {
                customer_id,
                address: address.to_payload(),
            }),
            Self::SearchAddresses => Plan::Send(ApiRequest::SearchAddresses {
                customer_id,
                filters: address.filters(),
            }),
            _ => {
                let Some(address_id) = address.address_id() else {
                    return Plan::Reject(MISSING_ADDRESS_ID);
                };
                match self {
                    Self::UpdateAddress => Plan::Send(ApiRequest::UpdateAddress {
                        customer_id,
                        address_id,
                        address: address.to_payload(),
                    }),
                    Self::RetrieveAddress => Plan::Send(ApiRequest::RetrieveAddress {
                        customer_id,
                        address_id,
                    }),
                    _ => Plan::Send(ApiRequest::DeleteAddress {
                        customer_id,
                        address_id,
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AddressPayload, CustomerFilters, CustomerUpdate};
    use pretty_assertions::assert_eq;

    const ADDRESS_COMMANDS: [Command; 5] = [
        Command::CreateAddress,
        Command::UpdateAddress,
        Command::RetrieveAddress,
        Command::DeleteAddress,
        Command::SearchAddresses,
    ];

    #[test]
    fn test_clear_commands_stay_local() {
        let view = ViewState::new();
        assert_eq!(Command::ClearCustomer.plan(&view), Plan::Clear(Panel::Customer));
        assert_eq!(Command::ClearAddress.plan(&view), Plan::Clear(Panel::Address));
    }

    #[test]
    fn test_address_commands_need_customer_id() {
        let mut view = ViewState::new();
        view.address.id.set_text("3");
        view.address.city.set_text("Austin");
        for command in ADDRESS_COMMANDS {
            assert_eq!(
                command.plan(&view),
                Plan::Reject(MISSING_CUSTOMER_ID),
                "{command:?}"
            );
        }
    }

    #[test]
    fn test_address_item_commands_need_address_id() {
        let mut view = ViewState::new();
        view.customer.id.set_text("1");
        for command in [
            Command::UpdateAddress,
            Command::RetrieveAddress,
            Command::DeleteAddress,
        ] {
            assert_eq!(command.plan(&view), Plan::Reject(MISSING_ADDRESS_ID));
        }
        assert!(matches!(
            Command::CreateAddress.plan(&view),
            Plan::Send(ApiRequest::CreateAddress { .. })
        ));
    }

    #[test]
    fn test_update_customer_sends_partial_changes() {
        let mut view = ViewState::new();
        view.customer.id.set_text("9");
        view.customer.last_name.set_text("Byron");
        assert_eq!(
            Command::UpdateCustomer.plan(&view),
            Plan::Send(ApiRequest::UpdateCustomer {
                customer_id: "9".to_string(),
                changes: CustomerUpdate {
                    last_name: Some("Byron".to_string()),
                    ..Default::default()
                },
            })
        );
    }

    #[test]
    fn test_prefix_query_uses_username_only() {
        let mut view = ViewState::new();
        view.customer.username.set_text("ad");
        view.customer.first_name.set_text("Ada");
        assert_eq!(
            Command::QueryByPrefix.plan(&view),
            Plan::Send(ApiRequest::SearchCustomers(CustomerFilters::prefix("ad")))
        );
    }

    #[test]
    fn test_create_customer_attaches_filled_address() {
        let mut view = ViewState::new();
        view.customer.username.set_text("ada");
        view.address.country.set_text("UK");
        let Plan::Send(ApiRequest::CreateCustomer(body)) = Command::CreateCustomer.plan(&view)
        else {
            panic!("expected a create request");
        };
        assert_eq!(
            body.addresses,
            vec![AddressPayload {
                country: Some("UK".to_string()),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn test_every_command_belongs_to_its_panel() {
        assert_eq!(Command::QueryByPrefix.panel(), Panel::Customer);
        for command in ADDRESS_COMMANDS {
            assert_eq!(command.panel(), Panel::Address);
        }
    }
}
