//! Tunables for a simulation run.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const PREP_DELAY_ENV: &str = "RESTAURANT_PREP_DELAY_MS";
pub const UNIT_PRICE_ENV: &str = "RESTAURANT_UNIT_PRICE";
pub const MAILBOX_CAPACITY_ENV: &str = "RESTAURANT_MAILBOX_CAPACITY";
pub const EVENT_CAPACITY_ENV: &str = "RESTAURANT_EVENT_CAPACITY";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantConfig {
    /// Time between `InPreparation` and `Ready`.
    #[serde(with = "millis")]
    pub preparation_delay: Duration,
    /// Price of every item.
    pub unit_price: u64,
    /// Pending requests the order actor will queue.
    pub mailbox_capacity: usize,
    /// How far an event subscriber may lag before missing events.
    pub event_capacity: usize,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            preparation_delay: Duration::from_millis(2000),
            unit_price: 10,
            mailbox_capacity: 32,
            event_capacity: 256,
        }
    }
}

impl RestaurantConfig {
    /// Defaults overridden by any `RESTAURANT_*` variable that is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(ms) = parse::<u64>(&lookup, PREP_DELAY_ENV, "a number of milliseconds")? {
            config.preparation_delay = Duration::from_millis(ms);
        }
        if let Some(price) = parse(&lookup, UNIT_PRICE_ENV, "a non-negative integer")? {
            config.unit_price = price;
        }
        if let Some(capacity) = parse(&lookup, MAILBOX_CAPACITY_ENV, "a positive integer")? {
            config.mailbox_capacity = capacity;
        }
        if let Some(capacity) = parse(&lookup, EVENT_CAPACITY_ENV, "a positive integer")? {
            config.event_capacity = capacity;
        }
        config.validate()?;
        Ok(config)
    }

    /// Channel capacities must be non-zero; tokio panics otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Invalid {
                name: MAILBOX_CAPACITY_ENV,
                value: "0".into(),
                expected: "a positive integer",
            });
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid {
                name: EVENT_CAPACITY_ENV,
                value: "0".into(),
                expected: "a positive integer",
            });
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                name,
                value: raw,
                expected,
            }),
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = RestaurantConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RestaurantConfig::default());
        assert_eq!(config.preparation_delay, Duration::from_millis(2000));
        assert_eq!(config.unit_price, 10);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = RestaurantConfig::from_lookup(lookup(&[
            (PREP_DELAY_ENV, "150"),
            (UNIT_PRICE_ENV, " 12 "),
        ]))
        .unwrap();
        assert_eq!(config.preparation_delay, Duration::from_millis(150));
        assert_eq!(config.unit_price, 12);
        assert_eq!(config.mailbox_capacity, 32);
    }

    #[test]
    fn test_malformed_value_is_rejected() {
        let err = RestaurantConfig::from_lookup(lookup(&[(UNIT_PRICE_ENV, "ten")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: UNIT_PRICE_ENV,
                value: "ten".into(),
                expected: "a non-negative integer",
            }
        );
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(RestaurantConfig::from_lookup(lookup(&[(EVENT_CAPACITY_ENV, "0")])).is_err());
    }

    #[test]
    fn test_delay_serializes_as_millis() {
        let json = serde_json::to_value(RestaurantConfig::default()).unwrap();
        assert_eq!(json["preparation_delay"], 2000);
        let back: RestaurantConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, RestaurantConfig::default());
    }
}
