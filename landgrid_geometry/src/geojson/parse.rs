use crate::geo::{
	Coordinates, GeoCollection, GeoFeature, GeoProperties, Geometry, MultiPolygonGeometry,
	PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
struct CollectionDto {
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	features: Vec<FeatureDto>,
}

#[derive(Deserialize)]
struct FeatureDto {
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	id: Option<Value>,
	#[serde(default)]
	geometry: Option<GeometryDto>,
	#[serde(default)]
	properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
struct GeometryDto {
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	coordinates: Value,
}

/// Parses a GeoJSON `FeatureCollection`.
///
/// Fails on malformed JSON, a wrong top-level `type` or coordinates that do
/// not match their declared polygonal type. Geometry types other than
/// `Polygon` and `MultiPolygon` (and `null` geometry) are kept as
/// [`Geometry::Unsupported`] instead of failing. Feature `id` and
/// `properties` pass through untouched.
pub fn parse_geojson(text: &str) -> Result<GeoCollection> {
	let dto: CollectionDto = serde_json::from_str(text).context("invalid GeoJSON document")?;
	ensure!(
		dto.kind == "FeatureCollection",
		"expected a FeatureCollection, got {:?}",
		dto.kind
	);

	let features = dto
		.features
		.into_iter()
		.enumerate()
		.map(|(index, feature)| parse_feature(feature).with_context(|| format!("in feature {index}")))
		.collect::<Result<Vec<_>>>()?;

	Ok(GeoCollection::from(features))
}

fn parse_feature(dto: FeatureDto) -> Result<GeoFeature> {
	ensure!(dto.kind == "Feature", "expected a Feature, got {:?}", dto.kind);

	let geometry = match dto.geometry {
		Some(geometry) => parse_geometry(geometry)?,
		None => Geometry::Unsupported("null".to_string()),
	};

	Ok(GeoFeature {
		id: dto.id.filter(|id| !id.is_null()),
		geometry,
		properties: dto.properties.map(GeoProperties::from).unwrap_or_default(),
	})
}

fn parse_geometry(dto: GeometryDto) -> Result<Geometry> {
	let GeometryDto { kind, coordinates } = dto;
	if kind == "Polygon" {
		Ok(Geometry::Polygon(
			parse_polygon(&coordinates).context("invalid Polygon coordinates")?,
		))
	} else if kind == "MultiPolygon" {
		Ok(Geometry::MultiPolygon(
			parse_multi_polygon(&coordinates).context("invalid MultiPolygon coordinates")?,
		))
	} else {
		Ok(Geometry::Unsupported(kind))
	}
}

fn parse_multi_polygon(value: &Value) -> Result<MultiPolygonGeometry> {
	let polygons = value.as_array().context("expected an array of polygons")?;
	Ok(MultiPolygonGeometry(
		polygons.iter().map(parse_polygon).collect::<Result<Vec<_>>>()?,
	))
}

fn parse_polygon(value: &Value) -> Result<PolygonGeometry> {
	let rings = value.as_array().context("expected an array of rings")?;
	Ok(PolygonGeometry(
		rings.iter().map(parse_ring).collect::<Result<Vec<_>>>()?,
	))
}

fn parse_ring(value: &Value) -> Result<RingGeometry> {
	let positions = value.as_array().context("expected an array of positions")?;
	Ok(RingGeometry(
		positions.iter().map(parse_position).collect::<Result<Vec<_>>>()?,
	))
}

// A position may carry an altitude as a third element; it is ignored.
fn parse_position(value: &Value) -> Result<Coordinates> {
	let parts = value.as_array().context("expected a position")?;
	ensure!(parts.len() >= 2, "a position needs longitude and latitude");
	let lng = parts[0].as_f64().context("longitude must be a number")?;
	let lat = parts[1].as_f64().context("latitude must be a number")?;
	Ok(Coordinates::new(lng, lat))
}
