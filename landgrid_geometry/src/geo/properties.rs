use serde_json::{Map, Value};
use std::fmt::Debug;

/// The properties of a feature: an opaque, string-keyed JSON object that is
/// carried through parsing and serialization untouched.
///
/// Two conventional keys get typed readers: `NAME` (display name) and the
/// region key, which is `stateKey` when present and non-empty, falling back
/// to `NAME_1`. Only string values count; anything else reads as absent.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties(Map<String, Value>);

impl GeoProperties {
	pub fn new() -> Self {
		Self(Map::new())
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Returns the value for `key` if it is a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}

	pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
		self.0.insert(key.to_string(), value.into());
	}

	/// The display name of the feature, from the `NAME` property.
	pub fn name(&self) -> Option<&str> {
		self.get_str("NAME")
	}

	/// The marketplace region key: `stateKey` when present and non-empty,
	/// otherwise `NAME_1`.
	pub fn region_key(&self) -> Option<&str> {
		self
			.get_str("stateKey")
			.filter(|key| !key.is_empty())
			.or_else(|| self.get_str("NAME_1"))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn to_json(&self) -> Value {
		Value::Object(self.0.clone())
	}
}

impl From<Map<String, Value>> for GeoProperties {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(&self.0).finish()
	}
}
