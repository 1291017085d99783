//! Runtime configuration

use crate::export::CSV_FILE_NAME;
use crate::session::DEFAULT_CAPACITY;

/// Development address of the calculation service
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct CurveConfig {
    pub api_url: String,
    pub capacity: usize,
    /// Name given to the comparison export
    pub csv_file_name: String,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            capacity: DEFAULT_CAPACITY,
            csv_file_name: CSV_FILE_NAME.to_string(),
        }
    }
}

impl CurveConfig {
    /// Read `CURVE_API_URL`, `CURVE_SESSION_CAPACITY` and `CURVE_CSV_FILE_NAME`
    /// from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Values baked in at compile time, for targets without a process environment
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "CURVE_API_URL" => option_env!("CURVE_API_URL").map(str::to_string),
            "CURVE_SESSION_CAPACITY" => option_env!("CURVE_SESSION_CAPACITY").map(str::to_string),
            "CURVE_CSV_FILE_NAME" => option_env!("CURVE_CSV_FILE_NAME").map(str::to_string),
            _ => None,
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let api_url = lookup("CURVE_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.api_url);
        let capacity = lookup("CURVE_SESSION_CAPACITY")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(defaults.capacity);
        let csv_file_name = lookup("CURVE_CSV_FILE_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or(defaults.csv_file_name);

        Self {
            api_url,
            capacity,
            csv_file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = CurveConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, CurveConfig::default());
        assert_eq!(config.capacity, 10);
    }

    #[test]
    fn overrides_are_applied() {
        let config = CurveConfig::from_lookup(lookup_from(&[
            ("CURVE_API_URL", "https://curves.example.org"),
            ("CURVE_SESSION_CAPACITY", "4"),
            ("CURVE_CSV_FILE_NAME", " steels.csv "),
        ]));
        assert_eq!(config.api_url, "https://curves.example.org");
        assert_eq!(config.capacity, 4);
        assert_eq!(config.csv_file_name, "steels.csv");
    }

    #[test]
    fn blank_file_name_keeps_default() {
        let config = CurveConfig::from_lookup(lookup_from(&[("CURVE_CSV_FILE_NAME", "  ")]));
        assert_eq!(config.csv_file_name, CSV_FILE_NAME);
    }

    #[test]
    fn invalid_capacity_falls_back() {
        for raw in ["0", "-2", "many"] {
            let config = CurveConfig::from_lookup(lookup_from(&[("CURVE_SESSION_CAPACITY", raw)]));
            assert_eq!(config.capacity, 10, "input {raw:?}");
        }
    }
}
