use crate::error::ExportError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Document-store primary key: 12 bytes shown as 24 lower-case hex digits.
///
/// Generation and hex handling come from `bson`. In JSON the id is always
/// wrapped as `{"$oid": "<hex>"}` so the exported file can be fed straight into
/// a document-store import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(bson::oid::ObjectId);

impl ObjectId {
    /// Generates a fresh identifier. Two calls never return the same value
    /// within one process.
    pub fn new() -> Self {
        Self(bson::oid::ObjectId::new())
    }

    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bson::oid::ObjectId::from_bytes(bytes))
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0.bytes()
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bson::oid::ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| ExportError::InvalidObjectId(s.to_string()))
    }
}

#[derive(Serialize, Deserialize)]
struct OidWrapper {
    #[serde(rename = "$oid")]
    oid: String,
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OidWrapper { oid: self.to_hex() }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wrapper = OidWrapper::deserialize(deserializer)?;
        wrapper.oid.parse().map_err(D::Error::custom)
    }
}
