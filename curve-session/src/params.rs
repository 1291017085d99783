//! Input parameters for a curve calculation and the coercion rules applied to
//! every form edit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CurveError, CurveResult};

/// Curve model selected in the form. The wire names are the labels the
/// calculation service dispatches on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    #[default]
    #[serde(rename = "Nelson")]
    Nelson,
    #[serde(rename = "Fracture fit")]
    FractureFit,
    #[serde(rename = "Considere")]
    Considere,
}

impl ModelType {
    pub const ALL: [ModelType; 3] = [ModelType::Nelson, ModelType::FractureFit, ModelType::Considere];

    pub fn label(&self) -> &'static str {
        match self {
            ModelType::Nelson => "Nelson",
            ModelType::FractureFit => "Fracture fit",
            ModelType::Considere => "Considere",
        }
    }

    /// Lenient lookup used by the form select; unknown labels fall back to
    /// `Nelson`, which is also what the service does with them.
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelType {
    type Err = CurveError;

    fn from_str(s: &str) -> CurveResult<Self> {
        let wanted = s.trim();
        ModelType::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CurveError::UnknownModelType(s.to_string()))
    }
}

/// Numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    E,
    Sy,
    Et,
    Emax,
    NumPoints,
}

impl NumericField {
    pub const ALL: [NumericField; 5] = [
        NumericField::E,
        NumericField::Sy,
        NumericField::Et,
        NumericField::Emax,
        NumericField::NumPoints,
    ];

    /// Label shown next to the input, also the key accepted by the CLI `set` command
    pub fn label(&self) -> &'static str {
        match self {
            NumericField::E => "E",
            NumericField::Sy => "Sy",
            NumericField::Et => "Et",
            NumericField::Emax => "emax",
            NumericField::NumPoints => "points",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        NumericField::ALL.into_iter().find(|f| f.label().eq_ignore_ascii_case(wanted))
    }
}

/// Parameter set collected by the input form
#[derive(Debug, Clone, PartialEq)]
pub struct InputParameters {
    /// Display name for the resulting entry; blank means "generate one"
    pub material_name: String,
    /// Elastic modulus
    pub e: f64,
    /// Yield stress
    pub sy: f64,
    /// Tangent modulus
    pub et: f64,
    /// Maximum strain
    pub emax: f64,
    pub model_type: ModelType,
    pub num_points: u32,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            material_name: String::new(),
            e: 210000.0,
            sy: 250.0,
            et: 2000.0,
            emax: 0.1,
            model_type: ModelType::Nelson,
            num_points: 20,
        }
    }
}

impl InputParameters {
    /// Apply a raw edit to a numeric field. Invalid text stores 0.
    pub fn set_field(&mut self, field: NumericField, raw: &str) {
        let value = parse_numeric(raw);
        match field {
            NumericField::E => self.e = value,
            NumericField::Sy => self.sy = value,
            NumericField::Et => self.et = value,
            NumericField::Emax => self.emax = value,
            NumericField::NumPoints => self.num_points = to_point_count(value),
        }
    }

    /// Current value of a numeric field, as shown in the form
    pub fn field(&self, field: NumericField) -> f64 {
        match field {
            NumericField::E => self.e,
            NumericField::Sy => self.sy,
            NumericField::Et => self.et,
            NumericField::Emax => self.emax,
            NumericField::NumPoints => self.num_points as f64,
        }
    }

    /// Wire body for the calculation service
    pub fn to_request(&self) -> CurveRequest {
        CurveRequest {
            e: self.e,
            sy: self.sy,
            et: self.et,
            emax: self.emax,
            model_type: self.model_type,
            num_points: self.num_points,
        }
    }
}

/// Body of `POST /calculate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRequest {
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "Sy")]
    pub sy: f64,
    #[serde(rename = "Et")]
    pub et: f64,
    pub emax: f64,
    #[serde(rename = "modelType")]
    pub model_type: ModelType,
    #[serde(rename = "numPoints")]
    pub num_points: u32,
}

/// Parse a form value as a float. Anything that is not a finite number
/// (including the empty string) becomes 0.
pub fn parse_numeric(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn to_point_count(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value.trunc() as u32
    }
}

/// Key-press mask for numeric inputs: blocks exponent and sign characters.
/// Pasted text is not filtered here; it only goes through [`parse_numeric`].
pub fn accepts_key(ch: char) -> bool {
    !matches!(ch, 'e' | 'E' | '+' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn valid_numbers_are_stored_as_parsed() {
        let mut params = InputParameters::default();
        params.set_field(NumericField::E, "200000.5");
        params.set_field(NumericField::Sy, " 355 ");
        params.set_field(NumericField::Emax, "0.25");
        assert_relative_eq!(params.e, 200000.5);
        assert_relative_eq!(params.sy, 355.0);
        assert_relative_eq!(params.emax, 0.25);
    }

    #[test]
    fn invalid_numbers_fall_back_to_zero() {
        let mut params = InputParameters::default();
        for raw in ["", "abc", "1.2.3", "NaN", "inf", "--4"] {
            params.set_field(NumericField::Et, raw);
            assert_eq!(params.et, 0.0, "input {raw:?}");
        }
    }

    #[test]
    fn pasted_sign_and_exponent_are_still_accepted() {
        let mut params = InputParameters::default();
        params.set_field(NumericField::Sy, "-12");
        assert_relative_eq!(params.sy, -12.0);
        params.set_field(NumericField::E, "2.1e5");
        assert_relative_eq!(params.e, 210000.0);
    }

    #[test]
    fn point_count_keeps_integral_part() {
        let mut params = InputParameters::default();
        params.set_field(NumericField::NumPoints, "25.9");
        assert_eq!(params.num_points, 25);
        params.set_field(NumericField::NumPoints, "-3");
        assert_eq!(params.num_points, 0);
        params.set_field(NumericField::NumPoints, "lots");
        assert_eq!(params.num_points, 0);
    }

    #[test]
    fn key_mask_blocks_exponent_and_sign() {
        for ch in ['e', 'E', '+', '-'] {
            assert!(!accepts_key(ch));
        }
        for ch in ['0', '9', '.', 'x'] {
            assert!(accepts_key(ch));
        }
    }

    #[test]
    fn request_uses_service_field_names() {
        let params = InputParameters {
            material_name: "S355".to_string(),
            model_type: ModelType::FractureFit,
            ..InputParameters::default()
        };
        let json = serde_json::to_value(params.to_request()).unwrap();
        assert_eq!(json["E"], 210000.0);
        assert_eq!(json["Sy"], 250.0);
        assert_eq!(json["Et"], 2000.0);
        assert_eq!(json["emax"], 0.1);
        assert_eq!(json["modelType"], "Fracture fit");
        assert_eq!(json["numPoints"], 20);
        assert!(json.get("materialName").is_none());
    }

    #[test]
    fn model_type_lookup() {
        assert_eq!("considere".parse::<ModelType>().unwrap(), ModelType::Considere);
        assert_eq!("Fracture fit".parse::<ModelType>().unwrap(), ModelType::FractureFit);
        assert!("Ramberg".parse::<ModelType>().is_err());
        assert_eq!(ModelType::from_label_or_default("Ramberg"), ModelType::Nelson);
    }
}
