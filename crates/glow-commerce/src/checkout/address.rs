//! Checkout contact and shipping address form.

use serde::{Deserialize, Serialize};

/// Contact details and shipping address entered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Street address.
    pub address: String,
    /// Apartment, suite, etc.
    #[serde(default)]
    pub apartment: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Country code, defaults to "US".
    pub country: String,
    #[serde(default)]
    pub phone: String,
}

impl Default for ShippingInfo {
    fn default() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            apartment: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "US".to_string(),
            phone: String::new(),
        }
    }
}

impl ShippingInfo {
    /// Names of required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("email", &self.email),
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("ZIP code", &self.zip_code),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address.clone()];
        if !self.apartment.is_empty() {
            parts.push(self.apartment.clone());
        }
        parts.push(self.city.clone());
        parts.push(format!("{} {}", self.state, self.zip_code));
        parts.push(self.country.clone());
        parts.join(", ")
    }

    /// Format as mailing label lines.
    pub fn multi_line(&self) -> Vec<String> {
        let mut lines = vec![self.full_name(), self.address.clone()];
        if !self.apartment.is_empty() {
            lines.push(self.apartment.clone());
        }
        lines.push(format!("{}, {} {}", self.city, self.state, self.zip_code));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ShippingInfo {
        ShippingInfo {
            email: "sarah.johnson@example.com".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            address: "123 Main Street".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            ..ShippingInfo::default()
        }
    }

    #[test]
    fn test_default_country() {
        assert_eq!(ShippingInfo::default().country, "US");
    }

    #[test]
    fn test_missing_fields() {
        assert!(filled().is_complete());

        let mut info = filled();
        info.email = "  ".to_string();
        info.zip_code.clear();
        assert_eq!(info.missing_fields(), vec!["email", "ZIP code"]);
    }

    #[test]
    fn test_optional_fields_not_required() {
        let info = filled();
        assert!(info.apartment.is_empty());
        assert!(info.phone.is_empty());
        assert!(info.is_complete());
    }

    #[test]
    fn test_formatting() {
        let mut info = filled();
        assert_eq!(info.one_line(), "123 Main Street, New York, NY 10001, US");

        info.apartment = "Apt 4B".to_string();
        assert_eq!(
            info.multi_line(),
            vec!["Sarah Johnson", "123 Main Street", "Apt 4B", "New York, NY 10001"]
        );
    }
}
