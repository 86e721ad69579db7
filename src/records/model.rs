//! Property Record Model
//!
//! The entity the listing serves, plus the shapes used to create and edit it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted title, in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Longest accepted location, in characters
pub const MAX_LOCATION_LENGTH: usize = 100;

/// Most digits allowed before the decimal point
pub const MAX_PRICE_INTEGER_DIGITS: usize = 10;

// == Price ==
/// Non-negative fixed-point amount with two fractional digits.
///
/// Held as hundredths; rendered as `"250000.00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid price '{}'", s));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) || frac.len() > 2 {
            return Err(format!("Price '{}' allows at most 2 decimal places", s));
        }

        let whole = whole.trim_start_matches('0');
        if whole.len() > MAX_PRICE_INTEGER_DIGITS {
            return Err(format!(
                "Price '{}' exceeds {} integer digits",
                s, MAX_PRICE_INTEGER_DIGITS
            ));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| format!("Invalid price '{}'", s))?
        };
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| format!("Invalid price '{}'", s))? * 10,
            _ => frac.parse().map_err(|_| format!("Invalid price '{}'", s))?,
        };

        Ok(Self(whole * 100 + frac))
    }
}

impl TryFrom<String> for Price {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

// == Property ==
/// A stored property listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

// == New Property ==
/// Fields for a property that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub location: String,
}

impl NewProperty {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            location: location.into(),
        }
    }
}

// == Property Changes ==
/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub location: Option<String>,
}

impl PropertyChanges {
    /// Applies the changes to `property` in place.
    pub fn apply_to(self, property: &mut Property) {
        if let Some(title) = self.title {
            property.title = title;
        }
        if let Some(description) = self.description {
            property.description = description;
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(location) = self.location {
            property.location = location;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_parse_and_display() {
        assert_eq!("250000.00".parse::<Price>().unwrap().to_string(), "250000.00");
        assert_eq!("12.5".parse::<Price>().unwrap().cents(), 1250);
        assert_eq!("12".parse::<Price>().unwrap().to_string(), "12.00");
        assert_eq!("0.07".parse::<Price>().unwrap().to_string(), "0.07");
        assert_eq!("007.10".parse::<Price>().unwrap().to_string(), "7.10");
    }

    #[test]
    fn test_price_rejects_bad_input() {
        assert!("".parse::<Price>().is_err());
        assert!("-5.00".parse::<Price>().is_err());
        assert!("1.234".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
        assert!(".50".parse::<Price>().is_err());
        assert!("12345678901.00".parse::<Price>().is_err());
        assert!("9999999999.99".parse::<Price>().is_ok());
    }

    #[test]
    fn test_price_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_cents(150_050)).unwrap();
        assert_eq!(json, r#""1500.50""#);

        let price: Price = serde_json::from_str(r#""99.99""#).unwrap();
        assert_eq!(price.cents(), 9999);
    }

    #[test]
    fn test_changes_apply_only_set_fields() {
        let mut property = Property {
            id: 1,
            title: "Cottage".to_string(),
            description: "Small".to_string(),
            price: Price::from_cents(100),
            location: "Nairobi".to_string(),
            created_at: Utc::now(),
        };

        PropertyChanges {
            title: Some("Villa".to_string()),
            price: Some(Price::from_cents(900)),
            ..Default::default()
        }
        .apply_to(&mut property);

        assert_eq!(property.title, "Villa");
        assert_eq!(property.description, "Small");
        assert_eq!(property.price.cents(), 900);
        assert_eq!(property.location, "Nairobi");
    }
}
