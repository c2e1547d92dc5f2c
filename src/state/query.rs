//! Search filters and query string construction

/// Join the non-empty `(key, value)` pairs into a query string.
///
/// Pairs keep their given order, values are percent-encoded and empty values
/// are skipped, so the result never starts or ends with `&`.
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Filters for the customer collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerFilters {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub prefix_username: String,
}

impl CustomerFilters {
    /// Exact-match search on username and names
    pub fn search(username: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            prefix_username: String::new(),
        }
    }

    /// Username prefix query
    pub fn prefix(prefix: &str) -> Self {
        Self {
            prefix_username: prefix.trim().to_string(),
            ..Default::default()
        }
    }

    pub fn to_query_string(&self) -> String {
        build_query(&[
            ("username", self.username.as_str()),
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("prefix_username", self.prefix_username.as_str()),
        ])
    }
}

/// Filters for a customer's address collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressFilters {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}

impl AddressFilters {
    pub fn to_query_string(&self) -> String {
        build_query(&[
            ("street_address", self.street_address.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("zipcode", self.zipcode.as_str()),
            ("country", self.country.as_str()),
        ])
    }
}
