//! Delivery address collected by the checkout form.

use serde::{Deserialize, Serialize};

/// The delivery address fields of the checkout form.
///
/// All fields are required on the form; the wire format uses the backend's
/// camelCase keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
}

impl DeliveryAddress {
    /// Required-field presence check for the rendering layer.
    ///
    /// The assembler itself does not gate on this: the form enforces
    /// required fields before submit is offered.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.street.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.zip_code.is_empty()
            && !self.country.is_empty()
            && !self.phone.is_empty()
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DeliveryAddress {
        DeliveryAddress {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            street: "12 Analytical Way".into(),
            city: "London".into(),
            state: "LDN".into(),
            zip_code: "E1 6AN".into(),
            country: "UK".into(),
            phone: "02079460000".into(),
        }
    }

    #[test]
    fn test_is_complete() {
        let mut address = sample();
        assert!(address.is_complete());
        address.zip_code.clear();
        assert!(!address.is_complete());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("zipCode").is_some());
        assert!(json.get("first_name").is_none());
    }
}
