use crate::utils::error::{IfscError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a well-formed IFSC code.
pub const IFSC_CODE_LEN: usize = 11;

/// Zone suffix every record owner name lives under.
pub const ZONE: &str = "ifsc.";

pub const RECORD_TTL: u32 = 1;

/// A normalized IFSC code.
///
/// Only codes shorter than [`IFSC_CODE_LEN`] are rejected; longer codes are
/// passed through to the upstream as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IfscCode(String);

impl IfscCode {
    /// Normalizes a raw query such as `sbin0001234.ifsc.` into `SBIN0001234`.
    ///
    /// A trailing `.` is stripped first, then a trailing `.ifsc`, each at most
    /// once. Suffix matching is case-sensitive and happens before uppercasing.
    pub fn parse(query: &str) -> Result<Self> {
        let code = query.strip_suffix('.').unwrap_or(query);
        let code = code.strip_suffix(".ifsc").unwrap_or(code);
        let code = code.to_uppercase();

        if code.len() < IFSC_CODE_LEN {
            return Err(IfscError::InvalidInput {
                length: code.len(),
                code,
            });
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IfscCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One zone-file style TXT line: `<CODE>.ifsc. 1 IN TXT "<text>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    pub owner: IfscCode,
    pub text: String,
}

impl TxtRecord {
    pub fn new(owner: &IfscCode, text: impl Into<String>) -> Self {
        Self {
            owner: owner.clone(),
            text: text.into(),
        }
    }

    pub fn field(owner: &IfscCode, name: &str, value: &str) -> Self {
        Self::new(owner, format!("{}: {}", name, value))
    }

    pub fn not_found(owner: &IfscCode) -> Self {
        Self::new(owner, format!("IFSC code {} not found", owner))
    }
}

impl fmt::Display for TxtRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} {} IN TXT \"", self.owner, ZONE, RECORD_TTL)?;
        for ch in self.text.chars() {
            if ch == '"' || ch == '\\' {
                f.write_str("\\")?;
            }
            write!(f, "{}", ch)?;
        }
        f.write_str("\"")
    }
}

/// Branch fields published as TXT records, in output order. `ADDRESS` is
/// returned by the upstream but not published.
pub const PUBLISHED_FIELDS: [&str; 4] = ["BANK", "BRANCH", "CITY", "STATE"];

/// Upstream branch payload, kept loosely typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchDetails {
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl BranchDetails {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Display text of a field. Missing and `null` fields render empty,
    /// non-string values as compact JSON.
    pub fn field_text(&self, name: &str) -> String {
        match self.data.get(name) {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn to_records(&self, code: &IfscCode) -> Vec<TxtRecord> {
        PUBLISHED_FIELDS
            .iter()
            .map(|name| TxtRecord::field(code, name, &self.field_text(name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_trailing_dot() {
        let code = IfscCode::parse("sbin0001234.").unwrap();
        assert_eq!(code.as_str(), "SBIN0001234");
    }

    #[test]
    fn test_parse_strips_zone_suffix() {
        assert_eq!(IfscCode::parse("sbin0001234.ifsc").unwrap().as_str(), "SBIN0001234");
        assert_eq!(IfscCode::parse("sbin0001234.ifsc.").unwrap().as_str(), "SBIN0001234");
        assert_eq!(IfscCode::parse("HDFC0000001").unwrap().as_str(), "HDFC0000001");
    }

    #[test]
    fn test_parse_strips_each_suffix_once() {
        // Only one trailing dot is removed, leaving a 12 character code.
        assert_eq!(IfscCode::parse("sbin0001234..").unwrap().as_str(), "SBIN0001234.");
        assert_eq!(
            IfscCode::parse("sbin0001234.ifsc.ifsc").unwrap().as_str(),
            "SBIN0001234.IFSC"
        );
    }

    #[test]
    fn test_parse_suffix_is_case_sensitive() {
        assert_eq!(
            IfscCode::parse("sbin0001234.IFSC").unwrap().as_str(),
            "SBIN0001234.IFSC"
        );
    }

    #[test]
    fn test_parse_rejects_short_codes() {
        for input in ["", ".", "sbin", "sbin000123", "SBIN000123.", "sbin000123.ifsc."] {
            match IfscCode::parse(input) {
                Err(IfscError::InvalidInput { length, .. }) => assert!(length < IFSC_CODE_LEN),
                other => panic!("expected InvalidInput for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_parse_accepts_long_codes() {
        let code = IfscCode::parse("sbin00012345678").unwrap();
        assert_eq!(code.as_str(), "SBIN00012345678");
    }

    #[test]
    fn test_record_display() {
        let code = IfscCode::parse("SBIN0001234").unwrap();
        assert_eq!(
            TxtRecord::field(&code, "BANK", "State Bank of India").to_string(),
            r#"SBIN0001234.ifsc. 1 IN TXT "BANK: State Bank of India""#
        );
        assert_eq!(
            TxtRecord::not_found(&code).to_string(),
            r#"SBIN0001234.ifsc. 1 IN TXT "IFSC code SBIN0001234 not found""#
        );
    }

    #[test]
    fn test_record_display_escapes_quotes() {
        let code = IfscCode::parse("SBIN0001234").unwrap();
        let record = TxtRecord::field(&code, "BRANCH", r#"The "Main" \ Branch"#);
        assert_eq!(
            record.to_string(),
            r#"SBIN0001234.ifsc. 1 IN TXT "BRANCH: The \"Main\" \\ Branch""#
        );
    }

    #[test]
    fn test_branch_details_field_text() {
        let details = BranchDetails::from_slice(
            br#"{"BANK": "HDFC Bank", "CITY": null, "MICR": 400240002}"#,
        )
        .unwrap();

        assert_eq!(details.field_text("BANK"), "HDFC Bank");
        assert_eq!(details.field_text("CITY"), "");
        assert_eq!(details.field_text("STATE"), "");
        assert_eq!(details.field_text("MICR"), "400240002");
    }

    #[test]
    fn test_branch_details_rejects_non_objects() {
        assert!(matches!(
            BranchDetails::from_slice(b"[1, 2, 3]"),
            Err(IfscError::Parse(_))
        ));
        assert!(matches!(
            BranchDetails::from_slice(b"<html>"),
            Err(IfscError::Parse(_))
        ));
    }

    #[test]
    fn test_to_records_field_order() {
        let details = BranchDetails::from_slice(
            br#"{"ADDRESS": "1 Main Road", "STATE": "KARNATAKA", "CITY": "BANGALORE", "BRANCH": "MG ROAD", "BANK": "State Bank of India"}"#,
        )
        .unwrap();
        let code = IfscCode::parse("sbin0001234").unwrap();

        let lines: Vec<String> = details.to_records(&code).iter().map(|r| r.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                r#"SBIN0001234.ifsc. 1 IN TXT "BANK: State Bank of India""#,
                r#"SBIN0001234.ifsc. 1 IN TXT "BRANCH: MG ROAD""#,
                r#"SBIN0001234.ifsc. 1 IN TXT "CITY: BANGALORE""#,
                r#"SBIN0001234.ifsc. 1 IN TXT "STATE: KARNATAKA""#,
            ]
        );
    }
}
