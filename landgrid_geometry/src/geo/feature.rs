use super::{Geometry, GeometryTrait, properties::GeoProperties};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// A GeoJSON feature: optional id, geometry and free-form properties.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	/// Feature id, passed through untouched. GeoJSON allows strings and
	/// numbers here.
	pub id: Option<Value>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	/// Planar area of the feature's geometry, in degrees squared.
	pub fn area(&self) -> f64 {
		self.geometry.area()
	}

	pub fn name(&self) -> Option<&str> {
		self.properties.name()
	}

	pub fn region_key(&self) -> Option<&str> {
		self.properties.region_key()
	}

	/// Serializes to a GeoJSON `Feature` object.
	pub fn to_json(&self) -> Value {
		let mut object = Map::new();
		object.insert("type".to_string(), Value::from("Feature"));
		if let Some(id) = &self.id {
			object.insert("id".to_string(), id.clone());
		}
		object.insert("properties".to_string(), self.properties.to_json());
		object.insert("geometry".to_string(), self.geometry.to_json());
		Value::Object(object)
	}
}
