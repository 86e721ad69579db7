//! Request DTOs for the property cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::records::{NewProperty, Price, PropertyChanges, MAX_LOCATION_LENGTH, MAX_TITLE_LENGTH};

/// Request body for POST /properties/
///
/// `price` is a decimal string such as `"1500.00"`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePropertyRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    pub location: String,
}

impl CreatePropertyRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_title(&self.title)
            .or_else(|| validate_location(&self.location))
            .or_else(|| self.price.parse::<Price>().err())
    }

    /// Validates and converts into a record ready for insertion.
    pub fn into_new_property(self) -> Result<NewProperty> {
        if let Some(error_msg) = self.validate() {
            return Err(AppError::InvalidRequest(error_msg));
        }
        let price = self
            .price
            .parse::<Price>()
            .map_err(AppError::InvalidRequest)?;
        Ok(NewProperty::new(self.title, self.description, price, self.location))
    }
}

/// Request body for PUT /properties/:id
///
/// Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePropertyRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl UpdatePropertyRequest {
    /// Validates the fields that are present.
    pub fn validate(&self) -> Option<String> {
        self.title
            .as_deref()
            .and_then(validate_title)
            .or_else(|| self.location.as_deref().and_then(validate_location))
            .or_else(|| {
                self.price
                    .as_deref()
                    .and_then(|price| price.parse::<Price>().err())
            })
    }

    pub fn into_changes(self) -> Result<PropertyChanges> {
        if let Some(error_msg) = self.validate() {
            return Err(AppError::InvalidRequest(error_msg));
        }
        let price = self
            .price
            .map(|price| price.parse::<Price>())
            .transpose()
            .map_err(AppError::InvalidRequest)?;

        Ok(PropertyChanges {
            title: self.title,
            description: self.description,
            price,
            location: self.location,
        })
    }
}

fn validate_title(title: &str) -> Option<String> {
    if title.trim().is_empty() {
        return Some("Title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Some(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        ));
    }
    None
}

fn validate_location(location: &str) -> Option<String> {
    if location.trim().is_empty() {
        return Some("Location cannot be empty".to_string());
    }
    if location.chars().count() > MAX_LOCATION_LENGTH {
        return Some(format!(
            "Location exceeds maximum length of {} characters",
            MAX_LOCATION_LENGTH
        ));
    }
    None
}
