//! Customer and address resources as exchanged with the REST service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zipcode as it travels on the wire.
///
/// The service declares zipcodes as integers, but older deployments answer
/// with strings, so both shapes decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Zipcode {
    Number(i64),
    Text(String),
}

impl Zipcode {
    /// Build a zipcode from form input.
    ///
    /// Input that parses as an integer is sent as a number; anything else is
    /// sent verbatim and left for the service to reject.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Zipcode::Number(n),
            Err(_) => Zipcode::Text(trimmed.to_string()),
        }
    }
}

impl Default for Zipcode {
    fn default() -> Self {
        Zipcode::Text(String::new())
    }
}

impl fmt::Display for Zipcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zipcode::Number(n) => write!(f, "{n}"),
            Zipcode::Text(s) => f.write_str(s),
        }
    }
}

/// Address belonging to exactly one customer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub address_id: i64,
    pub customer_id: i64,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: Zipcode,
}

impl Address {
    /// One-line summary used in the customer results table
    pub fn summary(&self) -> String {
        format!(
            "address_id={}: {}, {}, {} {}, {}",
            self.address_id, self.street_address, self.city, self.state, self.zipcode, self.country
        )
    }
}

/// Customer account.
///
/// Every field defaults because lock/unlock responses omit `id` and `password`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub locked: bool,
    pub addresses: Vec<Address>,
}

impl Customer {
    /// The address shown in list views and the address form
    pub fn primary_address(&self) -> Option<&Address> {
        self.addresses.first()
    }
}

/// Address fields sent on create/update; empty fields are left out
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AddressPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<Zipcode>,
}

impl AddressPayload {
    pub fn is_empty(&self) -> bool {
        self.street_address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.zipcode.is_none()
    }
}

/// Body of a customer create request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NewCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Zero or one address
    pub addresses: Vec<AddressPayload>,
}

/// Partial customer update; only the fields the user filled in are sent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Server error body
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod zipcode {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_numeric_input_becomes_number() {
            assert_eq!(Zipcode::from_input("10001"), Zipcode::Number(10001));
            assert_eq!(Zipcode::from_input(" 7 "), Zipcode::Number(7));
        }

        #[test]
        fn test_non_numeric_input_is_kept_as_text() {
            assert_eq!(
                Zipcode::from_input("SW1A 1AA"),
                Zipcode::Text("SW1A 1AA".to_string())
            );
        }

        #[test]
        fn test_decodes_from_number_or_string() {
            let n: Zipcode = serde_json::from_str("10001").unwrap();
            let s: Zipcode = serde_json::from_str("\"10001\"").unwrap();
            assert_eq!(n, Zipcode::Number(10001));
            assert_eq!(s, Zipcode::Text("10001".to_string()));
            assert_eq!(n.to_string(), s.to_string());
        }
    }

    mod customer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_decodes_full_service_response() {
            let json = r#"{
                "id": 3,
                "first_name": "Ada",
                "last_name": "Lovelace",
                "username": "ada",
                "password": "engine",
                "locked": false,
                "addresses": [{
                    "customer_id": 3,
                    "address_id": 9,
                    "street_address": "12 St James Sq",
                    "city": "London",
                    "state": "LDN",
                    "zipcode": 10001,
                    "country": "UK"
                }]
            }"#;
            let customer: Customer = serde_json::from_str(json).unwrap();
            assert_eq!(customer.id, 3);
            assert_eq!(customer.username, "ada");
            let primary = customer.primary_address().unwrap();
            assert_eq!(primary.address_id, 9);
            assert_eq!(primary.zipcode, Zipcode::Number(10001));
        }

        #[test]
        fn test_decodes_lock_response_without_id_or_password() {
            let json = r#"{"username": "ada", "first_name": "Ada", "last_name": "L",
                           "addresses": [], "locked": true}"#;
            let customer: Customer = serde_json::from_str(json).unwrap();
            assert_eq!(customer.id, 0);
            assert!(customer.password.is_empty());
            assert!(customer.locked);
        }

        #[test]
        fn test_no_primary_address_when_list_empty() {
            assert!(Customer::default().primary_address().is_none());
        }
    }

    mod payloads {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_customer_omits_missing_fields() {
            let body = NewCustomer {
                username: Some("ada".to_string()),
                ..Default::default()
            };
            let value = serde_json::to_value(&body).unwrap();
            assert_eq!(
                value,
                serde_json::json!({"username": "ada", "addresses": []})
            );
        }

        #[test]
        fn test_address_payload_sends_numeric_zipcode() {
            let body = AddressPayload {
                city: Some("Paris".to_string()),
                zipcode: Some(Zipcode::from_input("75001")),
                ..Default::default()
            };
            let value = serde_json::to_value(&body).unwrap();
            assert_eq!(value, serde_json::json!({"city": "Paris", "zipcode": 75001}));
        }

        #[test]
        fn test_address_payload_is_empty() {
            assert!(AddressPayload::default().is_empty());
            let body = AddressPayload {
                country: Some("FR".to_string()),
                ..Default::default()
            };
            assert!(!body.is_empty());
        }

        #[test]
        fn test_address_summary() {
            let address = Address {
                address_id: 4,
                customer_id: 1,
                street_address: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                country: "US".to_string(),
                zipcode: Zipcode::Number(62701),
            };
            assert_eq!(
                address.summary(),
                "address_id=4: 1 Main St, Springfield, IL 62701, US"
            );
        }
    }
}
