//! Service — a listed item (an antique car offered on the site).

use serde::{Deserialize, Serialize};

use crate::error::{CarHubError, ValidationError};
use crate::id::ServiceId;

/// A listed item in the catalog.
///
/// Beyond the typed fields, clients may attach arbitrary descriptive fields;
/// those round-trip through the flattened `extra` bag. The identifier
/// serializes as `_id` for compatibility with the site's existing clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", default)]
    pub id: ServiceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Client-supplied fields with no dedicated column.
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Service {
    /// Create a builder for constructing a [`Service`].
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CarHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), CarHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Service`].
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<ServiceId>,
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    img: Option<String>,
    extra: serde_json::Map<String, serde_json::Value>,
}

impl ServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: ServiceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn img(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    #[must_use]
    pub fn extra(mut self, extra: serde_json::Map<String, serde_json::Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Consume the builder, validate, and return a [`Service`].
    ///
    /// # Errors
    ///
    /// Returns [`CarHubError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Service, CarHubError> {
        let service = Service {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description,
            price: self.price,
            img: self.img,
            extra: self.extra,
        };
        service.validate()?;
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_service_when_name_provided() {
        let service = Service::builder()
            .name("1965 Mustang")
            .price(12000.0)
            .build()
            .unwrap();
        assert_eq!(service.name, "1965 Mustang");
        assert_eq!(service.price, Some(12000.0));
        assert!(service.extra.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Service::builder().build();
        assert!(matches!(
            result,
            Err(CarHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_serialize_id_as_underscore_id() {
        let service = Service::builder().name("DeLorean DMC-12").build().unwrap();
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["_id"], service.id.to_string().as_str());
    }

    #[test]
    fn should_keep_unknown_fields_in_extra_bag() {
        let body = r#"{"name":"Jaguar E-Type","price":45000,"year":1961,"color":"green"}"#;
        let service: Service = serde_json::from_str(body).unwrap();
        assert_eq!(service.extra["year"], 1961);
        assert_eq!(service.extra["color"], "green");

        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["year"], 1961);
    }

    #[test]
    fn should_generate_id_when_deserializing_without_one() {
        let a: Service = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        let b: Service = serde_json::from_str(r#"{"name":"B"}"#).unwrap();
        assert_ne!(a.id, b.id);
    }
}
