//! Customer and address form structs

use super::field::FormField;
use crate::state::{
    Address, AddressFilters, AddressPayload, Customer, CustomerFilters, CustomerUpdate,
    NewCustomer, Zipcode,
};

/// Trait for common form operations
pub trait Form {
    fn fields(&self) -> Vec<&FormField>;
    fn fields_mut(&mut self) -> Vec<&mut FormField>;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn field_count(&self) -> usize {
        self.fields().len()
    }
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn is_last_field(&self) -> bool {
        self.active_field() + 1 >= self.field_count()
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.fields_mut().into_iter().nth(index)
    }
    /// Reset every value, keeping the cursor where it is
    fn clear(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
    }
}

// Customer Form
#[derive(Debug, Clone)]
pub struct CustomerForm {
    pub id: FormField,
    pub first_name: FormField,
    pub last_name: FormField,
    pub username: FormField,
    pub password: FormField,
    pub locked: FormField,
    pub active_field_index: usize,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self {
            id: FormField::text("id", "Customer ID"),
            first_name: FormField::text("first_name", "First Name"),
            last_name: FormField::text("last_name", "Last Name"),
            username: FormField::text("username", "Username"),
            password: FormField::text("password", "Password"),
            locked: FormField::read_only("locked", "Locked"),
            active_field_index: 0,
        }
    }

    /// Customer id as typed, `None` when blank
    pub fn customer_id(&self) -> Option<String> {
        self.id.filled()
    }

    /// Repaint every field from a service response
    pub fn fill(&mut self, customer: &Customer) {
        self.id.set_text(customer.id.to_string());
        self.first_name.set_text(customer.first_name.as_str());
        self.last_name.set_text(customer.last_name.as_str());
        self.username.set_text(customer.username.as_str());
        self.password.set_text(customer.password.as_str());
        self.locked
            .set_text(if customer.locked { "true" } else { "false" });
    }

    /// Create body; `address` is attached only when it carries a value
    pub fn to_new_customer(&self, address: AddressPayload) -> NewCustomer {
        let addresses = if address.is_empty() {
            Vec::new()
        } else {
            vec![address]
        };
        NewCustomer {
            first_name: self.first_name.filled(),
            last_name: self.last_name.filled(),
            username: self.username.filled(),
            password: self.password.filled(),
            addresses,
        }
    }

    /// Partial update holding only the fields the user filled in
    pub fn to_update(&self) -> CustomerUpdate {
        CustomerUpdate {
            first_name: self.first_name.filled(),
            last_name: self.last_name.filled(),
            username: self.username.filled(),
            password: self.password.filled(),
        }
    }

    pub fn search_filters(&self) -> CustomerFilters {
        CustomerFilters::search(
            self.username.as_text(),
            self.first_name.as_text(),
            self.last_name.as_text(),
        )
    }

    pub fn prefix_filter(&self) -> CustomerFilters {
        CustomerFilters::prefix(self.username.as_text())
    }
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CustomerForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.id,
            &self.first_name,
            &self.last_name,
            &self.username,
            &self.password,
            &self.locked,
        ]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![
            &mut self.id,
            &mut self.first_name,
            &mut self.last_name,
            &mut self.username,
            &mut self.password,
            &mut self.locked,
        ]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

// Address Form
#[derive(Debug, Clone)]
pub struct AddressForm {
    pub id: FormField,
    pub street_address: FormField,
    pub city: FormField,
    pub state: FormField,
    pub country: FormField,
    pub zipcode: FormField,
    pub active_field_index: usize,
}

impl AddressForm {
    pub fn new() -> Self {
        Self {
            id: FormField::text("address_id", "Address ID"),
            street_address: FormField::text("street_address", "Street Address"),
            city: FormField::text("city", "City"),
            state: FormField::text("state", "State"),
            country: FormField::text("country", "Country"),
            zipcode: FormField::text("zipcode", "Zip"),
            active_field_index: 0,
        }
    }

    /// Address id as typed, `None` when blank
    pub fn address_id(&self) -> Option<String> {
        self.id.filled()
    }

    /// Repaint every field from a service response
    pub fn fill(&mut self, address: &Address) {
        self.id.set_text(address.address_id.to_string());
        self.street_address.set_text(address.street_address.as_str());
        self.city.set_text(address.city.as_str());
        self.state.set_text(address.state.as_str());
        self.country.set_text(address.country.as_str());
        self.zipcode.set_text(address.zipcode.to_string());
    }

    /// Body holding only the fields the user filled in
    pub fn to_payload(&self) -> AddressPayload {
        AddressPayload {
            street_address: self.street_address.filled(),
            city: self.city.filled(),
            state: self.state.filled(),
            country: self.country.filled(),
            zipcode: self.zipcode.filled().map(|z| Zipcode::from_input(&z)),
        }
    }

    pub fn filters(&self) -> AddressFilters {
        AddressFilters {
            street_address: self.street_address.as_text().trim().to_string(),
            city: self.city.as_text().trim().to_string(),
            state: self.state.as_text().trim().to_string(),
            zipcode: self.zipcode.as_text().trim().to_string(),
            country: self.country.as_text().trim().to_string(),
        }
    }
}

impl Default for AddressForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AddressForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.id,
            &self.street_address,
            &self.city,
            &self.state,
            &self.country,
            &self.zipcode,
        ]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![
            &mut self.id,
            &mut self.street_address,
            &mut self.city,
            &mut self.state,
            &mut self.country,
            &mut self.zipcode,
        ]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn sample_customer() -> Customer {
        Customer {
            id: 12,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            username: "grace".to_string(),
            password: "cobol".to_string(),
            locked: true,
            addresses: vec![],
        }
    }

    mod customer_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = CustomerForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.id.name, "id");
            assert!(form.locked.read_only);
            assert_eq!(form.field_count(), 6);
        }

        #[test]
        fn test_fill_renders_locked_as_text() {
            let mut form = CustomerForm::new();
            form.fill(&sample_customer());
            assert_eq!(form.id.as_text(), "12");
            assert_eq!(form.username.as_text(), "grace");
            assert_eq!(form.locked.as_text(), "true");

            let unlocked = Customer {
                locked: false,
                ..sample_customer()
            };
            form.fill(&unlocked);
            assert_eq!(form.locked.as_text(), "false");
        }

        #[test]
        fn test_customer_id_blank_is_none() {
            let mut form = CustomerForm::new();
            assert_eq!(form.customer_id(), None);
            form.id.set_text(" 4 ");
            assert_eq!(form.customer_id(), Some("4".to_string()));
        }

        #[test]
        fn test_update_contains_exactly_the_filled_fields() {
            let names = ["first_name", "last_name", "username", "password"];
            for mask in 1..16u32 {
                let mut form = CustomerForm::new();
                form.id.set_text("1");
                let mut expected = BTreeSet::new();
                for (bit, name) in names.iter().enumerate() {
                    if mask & (1 << bit) == 0 {
                        continue;
                    }
                    expected.insert(name.to_string());
                    let field = match *name {
                        "first_name" => &mut form.first_name,
                        "last_name" => &mut form.last_name,
                        "username" => &mut form.username,
                        _ => &mut form.password,
                    };
                    field.set_text(format!("value-{bit}"));
                }

                let body = serde_json::to_value(form.to_update()).unwrap();
                let keys: BTreeSet<String> = body
                    .as_object()
                    .map(|o| o.keys().cloned().collect())
                    .unwrap_or_default();
                assert_eq!(keys, expected, "mask {mask:04b}");
            }
        }

        #[test]
        fn test_new_customer_without_address() {
            let mut form = CustomerForm::new();
            form.username.set_text("grace");
            let body = form.to_new_customer(AddressPayload::default());
            assert!(body.addresses.is_empty());
            assert_eq!(body.username.as_deref(), Some("grace"));
            assert_eq!(body.first_name, None);
        }

        #[test]
        fn test_new_customer_with_single_address() {
            let form = CustomerForm::new();
            let address = AddressPayload {
                city: Some("Arlington".to_string()),
                ..Default::default()
            };
            let body = form.to_new_customer(address.clone());
            assert_eq!(body.addresses, vec![address]);
        }

        #[test]
        fn test_prev_field_wraps() {
            let mut form = CustomerForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 5);
            assert!(form.is_last_field());
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_clear_keeps_cursor() {
            let mut form = CustomerForm::new();
            form.fill(&sample_customer());
            form.set_active_field(3);
            form.clear();
            assert!(form.fields().iter().all(|f| f.is_blank()));
            assert_eq!(form.active_field(), 3);
        }

        #[test]
        fn test_set_active_field_clamps_to_last_field() {
            let mut form = CustomerForm::new();
            form.set_active_field(usize::MAX);
            assert_eq!(form.active_field(), form.field_count() - 1);
            assert!(form.is_last_field());
            assert_eq!(form.get_active_field_mut().unwrap().name, "locked");
        }

        #[test]
        fn test_get_active_field_mut() {
            let mut form = CustomerForm::new();
            form.set_active_field(3);
            let field = form.get_active_field_mut().unwrap();
            assert_eq!(field.name, "username");
        }
    }

    mod address_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fill_and_payload() {
            let mut form = AddressForm::new();
            form.fill(&Address {
                address_id: 5,
                customer_id: 12,
                street_address: "1 Navy Way".to_string(),
                city: "Arlington".to_string(),
                state: "VA".to_string(),
                country: "US".to_string(),
                zipcode: Zipcode::Number(22202),
            });
            assert_eq!(form.id.as_text(), "5");
            assert_eq!(form.zipcode.as_text(), "22202");

            let payload = form.to_payload();
            assert_eq!(payload.zipcode, Some(Zipcode::Number(22202)));
            assert_eq!(payload.city.as_deref(), Some("Arlington"));
        }

        #[test]
        fn test_payload_skips_blank_fields() {
            let mut form = AddressForm::new();
            form.state.set_text("VA");
            let payload = form.to_payload();
            assert_eq!(
                payload,
                AddressPayload {
                    state: Some("VA".to_string()),
                    ..Default::default()
                }
            );
        }

        #[test]
        fn test_filters_trim_values() {
            let mut form = AddressForm::new();
            form.city.set_text(" Austin ");
            assert_eq!(form.filters().to_query_string(), "city=Austin");
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = AddressForm::new();
            form.set_active_field(42);
            assert_eq!(form.active_field_index, form.field_count() - 1);
            assert_eq!(form.get_active_field_mut().unwrap().name, "zipcode");
        }
    }
}
