//! Structured attached data carried by items.
//!
//! Attached data is a schemaless tree of compounds, lists and scalars. Rules
//! read it through [`DataRef`], whose accessors return `None` for absent or
//! mistyped keys; a missing key is never an error, it just makes a rule
//! abstain.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key of the compound holding a block item's block entity.
pub const BLOCK_ENTITY_TAG: &str = "BlockEntityTag";

/// Key of the compound holding a block item's block state properties.
pub const BLOCK_STATE_TAG: &str = "BlockStateTag";

/// Key of the compound holding an entity-spawning item's entity data.
pub const ENTITY_TAG: &str = "EntityTag";

/// Key of the inventory list inside a block entity.
pub const ITEMS: &str = "Items";

/// Owned attached data for one item stack.
///
/// # Examples
///
/// ```
/// use glance::data::AttachedData;
/// use serde_json::json;
///
/// let data = AttachedData::new(json!({"BlockEntityTag": {"LootTable": "chests/igloo"}}));
/// let block_entity = data.block_entity().unwrap();
/// assert_eq!(block_entity.string("LootTable"), Some("chests/igloo"));
/// assert!(data.root().compound("Missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachedData(Value);

impl AttachedData {
    /// Wraps a JSON value as attached data.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Attached data with nothing in it.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Value::Null)
    }

    /// Returns `true` if there is no data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// A view of the root compound.
    #[must_use]
    pub const fn root(&self) -> DataRef<'_> {
        DataRef(&self.0)
    }

    /// The block entity compound, if present.
    #[must_use]
    pub fn block_entity(&self) -> Option<DataRef<'_>> {
        self.root().compound(BLOCK_ENTITY_TAG)
    }

    /// The entity compound, if present.
    #[must_use]
    pub fn entity(&self) -> Option<DataRef<'_>> {
        self.root().compound(ENTITY_TAG)
    }

    /// The underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for AttachedData {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A borrowed view into attached data.
#[derive(Debug, Clone, Copy)]
pub struct DataRef<'a>(&'a Value);

impl<'a> DataRef<'a> {
    /// Wraps a borrowed JSON value.
    #[must_use]
    pub const fn new(value: &'a Value) -> Self {
        Self(value)
    }

    fn get(self, key: &str) -> Option<&'a Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    /// Returns `true` if the key is present, whatever its type.
    #[must_use]
    pub fn contains(self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// A nested compound.
    #[must_use]
    pub fn compound(self, key: &str) -> Option<DataRef<'a>> {
        self.get(key).filter(|v| v.is_object()).map(DataRef)
    }

    /// A list of entries.
    #[must_use]
    pub fn list(self, key: &str) -> Option<Vec<DataRef<'a>>> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(DataRef).collect())
    }

    /// A string value.
    #[must_use]
    pub fn string(self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    /// An integer value.
    #[must_use]
    pub fn int(self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// A floating point value; integers are accepted.
    #[must_use]
    pub fn float(self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// A boolean value; `0`/`1` bytes and `"true"`/`"false"` strings are
    /// accepted too, since block state and legacy data store flags that way.
    #[must_use]
    pub fn bool(self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_i64().map(|n| n != 0),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// The underlying JSON value.
    #[must_use]
    pub const fn as_value(self) -> &'a Value {
        self.0
    }

    /// Converts this view to owned attached data.
    #[must_use]
    pub fn to_owned_data(self) -> AttachedData {
        AttachedData(self.0.clone())
    }
}
