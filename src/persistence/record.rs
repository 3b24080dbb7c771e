//! The flat save record.
//!
//! Field names and order (`rows, cols, faces, matched, score, streak,
//! seed`) are the on-disk contract; older saves without `seed` still load.

use serde::{Deserialize, Serialize};

use crate::core::CodecError;

/// Full snapshot of a game in progress.
///
/// Parsing a record only checks its shape. Whether it describes a playable
/// grid is decided by [`super::decode`], which needs the host's face count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaveRecord {
    pub rows: u32,
    pub cols: u32,

    /// Face index of each slot, row-major.
    pub faces: Vec<u32>,

    /// Matched flag of each slot, row-major.
    pub matched: Vec<bool>,

    pub score: i64,
    pub streak: u32,

    /// Seed the grid was dealt from, if known.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SaveRecord {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode in the compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(self)?)
    }

    /// Parse the compact binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SaveRecord {
        SaveRecord {
            rows: 2,
            cols: 2,
            faces: vec![3, 1, 1, 3],
            matched: vec![false, true, true, false],
            score: 8,
            streak: 1,
            seed: Some(77),
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = record().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"rows":2,"cols":2,"faces":[3,1,1,3],"matched":[false,true,true,false],"score":8,"streak":1,"seed":77}"#
        );
    }

    #[test]
    fn test_json_without_seed() {
        let json = r#"{"rows":1,"cols":2,"faces":[0,0],"matched":[false,false],"score":0,"streak":0}"#;
        let parsed = SaveRecord::from_json(json).unwrap();
        assert_eq!(parsed.seed, None);
    }

    #[test]
    fn test_json_malformed() {
        let err = SaveRecord::from_json("{\"rows\": 2").unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn test_bytes() {
        let bytes = record().to_bytes().unwrap();
        assert_eq!(SaveRecord::from_bytes(&bytes).unwrap(), record());

        let err = SaveRecord::from_bytes(&bytes[..3]).unwrap_err();
        assert!(matches!(err, CodecError::Binary(_)));
    }
}
