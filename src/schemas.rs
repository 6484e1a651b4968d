use std::fmt;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

const KEY_ADDRESS_OWNER: &str = "AddressOwner";
const KEY_OBJECT_OWNER: &str = "ObjectOwner";
const KEY_SHARED: &str = "Shared";

/// Who controls an object after a transaction.
///
/// Chain data reports owners as loosely shaped JSON (`{"AddressOwner": "0x.."}`,
/// `{"Shared": {..}}`, `"Immutable"`, ...). Every shape is classified into one
/// of these variants on deserialize; shapes we don't recognize land in
/// `Unknown` carrying the value of their first field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    AddressOwner(String),
    ObjectOwner(String),
    Shared,
    Unknown(String),
}

/// Ownership tag attached to a change once it has been grouped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OwnerKind {
    AddressOwner,
    ObjectOwner,
    Shared,
    Unknown,
}

impl OwnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerKind::AddressOwner => "AddressOwner",
            OwnerKind::ObjectOwner => "ObjectOwner",
            OwnerKind::Shared => "Shared",
            OwnerKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Owner {
    /// Classify a raw owner shape. Never fails.
    pub fn from_value(v: &Value) -> Owner {
        match v {
            Value::Object(map) => Self::from_map(map),
            // bare tags such as "Immutable" carry no payload; the tag is the key
            Value::String(s) => Owner::Unknown(s.clone()),
            other => Owner::Unknown(value_as_key(other)),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Owner {
        if let Some(addr) = map.get(KEY_ADDRESS_OWNER) {
            return Owner::AddressOwner(value_as_key(addr));
        }
        if let Some(obj) = map.get(KEY_OBJECT_OWNER) {
            return Owner::ObjectOwner(value_as_key(obj));
        }
        if map.contains_key(KEY_SHARED) {
            return Owner::Shared;
        }
        let key = map.values().next().map(value_as_key).unwrap_or_default();
        Owner::Unknown(key)
    }

    /// Resolve the grouping key and kind for a change owned by `self`.
    ///
    /// Shared owners carry nothing that identifies them, so the change's own
    /// object id becomes the key.
    pub fn resolve(&self, object_id: &str) -> (String, OwnerKind) {
        match self {
            Owner::AddressOwner(addr) => (addr.clone(), OwnerKind::AddressOwner),
            Owner::ObjectOwner(id) => (id.clone(), OwnerKind::ObjectOwner),
            Owner::Shared => (object_id.to_string(), OwnerKind::Shared),
            Owner::Unknown(key) => (key.clone(), OwnerKind::Unknown),
        }
    }
}

fn value_as_key(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl<'de> Deserialize<'de> for Owner {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Owner::from_value(&raw))
    }
}

impl Serialize for Owner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = Map::new();
        match self {
            Owner::AddressOwner(a) => {
                map.insert(KEY_ADDRESS_OWNER.to_string(), Value::String(a.clone()));
            }
            Owner::ObjectOwner(o) => {
                map.insert(KEY_OBJECT_OWNER.to_string(), Value::String(o.clone()));
            }
            Owner::Shared => {
                map.insert(KEY_SHARED.to_string(), Value::Object(Map::new()));
            }
            Owner::Unknown(k) => {
                map.insert("Unknown".to_string(), Value::String(k.clone()));
            }
        }
        Value::Object(map).serialize(serializer)
    }
}

/// One created/mutated/transferred object reported by a transaction's effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectChange {
    pub object_id: String,
    #[serde(default)]
    pub object_type: String,
    pub owner: Owner,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    #[serde(default)]
    pub created: Option<Vec<ObjectChange>>,
    #[serde(default)]
    pub mutated: Option<Vec<ObjectChange>>,
    #[serde(default)]
    pub transferred: Option<Vec<ObjectChange>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    #[serde(default)]
    pub owner: String,
    pub coin_type: String,
    /// Signed integer in the coin's smallest unit, as a decimal string.
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

/// Everything the transaction page needs, as handed over by the fetch layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub balance_changes: Option<Vec<BalanceChange>>,
    #[serde(default)]
    pub object_summary: Option<ObjectSummary>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
    Local,
}

impl Network {
    pub const ALL: [Network; 4] =
        [Network::Mainnet, Network::Testnet, Network::Devnet, Network::Local];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Local => "local",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Devnet => "Devnet",
            Network::Local => "Local",
        }
    }
}
