use super::GeoFeature;
use serde_json::Value;
use std::fmt::Debug;

/// An ordered list of features, the parsed form of a GeoJSON
/// `FeatureCollection`. Feature order is the document order and is
/// significant for the classifier (first match wins) and for the sampler
/// (output follows input order).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}

	/// Serializes to a GeoJSON `FeatureCollection` object.
	pub fn to_json(&self) -> Value {
		serde_json::json!({
			"type": "FeatureCollection",
			"features": self.features.iter().map(GeoFeature::to_json).collect::<Vec<_>>()
		})
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}
}

impl<'a> IntoIterator for &'a GeoCollection {
	type Item = &'a GeoFeature;
	type IntoIter = std::slice::Iter<'a, GeoFeature>;

	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;

	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}
