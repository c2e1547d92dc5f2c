//! Explicit view state shared by every command

use super::forms::{AddressForm, CustomerForm, Form, FormField};
use super::models::{Address, Customer};

/// Which panel has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Customer,
    Address,
}

impl Panel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Address => "Address",
        }
    }
}

/// Column headers of the customer results table
pub const CUSTOMER_COLUMNS: [&str; 7] = [
    "ID",
    "First Name",
    "Last Name",
    "Username",
    "Password",
    "Locked",
    "Address",
];

/// Column headers of the address results table
pub const ADDRESS_COLUMNS: [&str; 7] = [
    "ID",
    "Customer ID",
    "Street",
    "City",
    "State",
    "Zip",
    "Country",
];

/// Cells of one customer results row
pub fn customer_row(customer: &Customer) -> [String; 7] {
    [
        customer.id.to_string(),
        customer.first_name.clone(),
        customer.last_name.clone(),
        customer.username.clone(),
        customer.password.clone(),
        customer.locked.to_string(),
        customer
            .primary_address()
            .map(Address::summary)
            .unwrap_or_default(),
    ]
}

/// Cells of one address results row
pub fn address_row(address: &Address) -> [String; 7] {
    [
        address.address_id.to_string(),
        address.customer_id.to_string(),
        address.street_address.clone(),
        address.city.clone(),
        address.state.clone(),
        address.zipcode.to_string(),
        address.country.clone(),
    ]
}

/// Everything the screen shows: both forms, the flash line and the result
/// tables. A table is `None` until a search or retrieve rebuilds it; an empty
/// `Some` renders the header only.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub customer: CustomerForm,
    pub address: AddressForm,
    pub focus: Panel,
    pub flash: Option<String>,
    pub customer_results: Option<Vec<Customer>>,
    pub address_results: Option<Vec<Address>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the flash message
    pub fn flash(&mut self, message: impl Into<String>) {
        self.flash = Some(message.into());
    }

    /// Clear every form field in both panels
    pub fn clear_forms(&mut self) {
        self.customer.clear();
        self.address.clear();
    }

    /// Reset the customer form and its results table.
    ///
    /// The address panel has its own clear command, so its fields are kept.
    pub fn clear_customer_panel(&mut self) {
        self.customer.clear();
        self.customer_results = None;
    }

    /// Reset the address form and its results table
    pub fn clear_address_panel(&mut self) {
        self.address.clear();
        self.address_results = None;
    }

    pub fn show_customer(&mut self, customer: &Customer) {
        self.customer.fill(customer);
    }

    /// Fill the address form from the customer's primary address, if any
    pub fn show_primary_address(&mut self, customer: &Customer) {
        if let Some(address) = customer.primary_address() {
            self.address.fill(address);
        }
    }

    pub fn show_address(&mut self, address: &Address) {
        self.address.fill(address);
    }

    /// Rebuild the customer table and fill the forms from the first record
    pub fn show_customer_results(&mut self, customers: Vec<Customer>) {
        if let Some(first) = customers.first() {
            self.customer.fill(first);
            if let Some(address) = first.primary_address() {
                self.address.fill(address);
            }
        }
        self.customer_results = Some(customers);
    }

    /// Rebuild the address table and fill the address form from the first record
    pub fn show_address_results(&mut self, addresses: Vec<Address>) {
        if let Some(first) = addresses.first() {
            self.address.fill(first);
        }
        self.address_results = Some(addresses);
    }

    pub fn active_form(&self) -> &dyn Form {
        match self.focus {
            Panel::Customer => &self.customer,
            Panel::Address => &self.address,
        }
    }

    pub fn active_form_mut(&mut self) -> &mut dyn Form {
        match self.focus {
            Panel::Customer => &mut self.customer,
            Panel::Address => &mut self.address,
        }
    }

    /// Move to the next field, flowing from the customer panel into the
    /// address panel and back
    pub fn next_field(&mut self) {
        if self.active_form().is_last_field() {
            self.focus = match self.focus {
                Panel::Customer => Panel::Address,
                Panel::Address => Panel::Customer,
            };
            self.active_form_mut().set_active_field(0);
        } else {
            self.active_form_mut().next_field();
        }
    }

    /// Move to the previous field, flowing across panels
    pub fn prev_field(&mut self) {
        if self.active_form().active_field() == 0 {
            self.focus = match self.focus {
                Panel::Customer => Panel::Address,
                Panel::Address => Panel::Customer,
            };
            let last = self.active_form().field_count() - 1;
            self.active_form_mut().set_active_field(last);
        } else {
            self.active_form_mut().prev_field();
        }
    }

    /// Switch focus to the other panel, keeping each panel's cursor
    pub fn toggle_panel(&mut self) {
        self.focus = match self.focus {
            Panel::Customer => Panel::Address,
            Panel::Address => Panel::Customer,
        };
    }

    fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.active_form_mut().get_active_field_mut()
    }

    /// Handle character input in the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            field.push_char(c);
        }
    }

    /// Handle backspace in the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }
}
