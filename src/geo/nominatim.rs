//! Nominatim search client.
//!
//! Issues a single `/search` request with `polygon_geojson=1` and turns the
//! first result's GeoJSON into a `LocationGeometry`.

use geo::{Area, LineString, Polygon};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::types::LocationGeometry;
use crate::error_handling::GeometryResolutionError;

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    geojson: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

type Ring = Vec<Vec<f64>>;

/// An exterior ring as a polygon, plus its `(lon, lat)` pairs as received.
type Boundary = (Polygon<f64>, Vec<(f64, f64)>);

/// Builds the search URL for `name` under `base_url`, keeping any path
/// prefix the base already has.
fn search_url(base_url: &str, name: &str) -> Result<Url, GeometryResolutionError> {
    let invalid = |source| GeometryResolutionError::InvalidUrl {
        url: base_url.to_string(),
        source,
    };
    let mut url = Url::parse(base_url).map_err(invalid)?;
    url.path_segments_mut()
        .map_err(|_| invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push("search");
    url.query_pairs_mut()
        .append_pair("q", name)
        .append_pair("format", "jsonv2")
        .append_pair("polygon_geojson", "1")
        .append_pair("limit", "1");
    Ok(url)
}

/// Resolves `name` against the geocoder at `base_url`.
///
/// No caching and no retry; see `GeometryLoader` for the cached entry point.
///
/// # Errors
///
/// Returns `GeometryResolutionError` if the request fails, the geocoder
/// answers with a non-success status, nothing matches, or the match is not
/// an area.
pub async fn fetch_geometry(
    client: &Client,
    base_url: &str,
    name: &str,
) -> Result<LocationGeometry, GeometryResolutionError> {
    let url = search_url(base_url, name)?;
    log::debug!("Geocoding '{}' via {}", name, url);

    let request_error = |source| GeometryResolutionError::Request {
        name: name.to_string(),
        source,
    };
    let response = client.get(url).send().await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeometryResolutionError::Status {
            name: name.to_string(),
            status: status.as_u16(),
        });
    }
    let results: Vec<SearchResult> = response.json().await.map_err(request_error)?;

    let result = results
        .into_iter()
        .next()
        .ok_or_else(|| GeometryResolutionError::NotFound(name.to_string()))?;
    let geometry = result
        .geojson
        .ok_or_else(|| GeometryResolutionError::NoPolygon {
            name: name.to_string(),
            kind: "no geometry".to_string(),
        })?;

    let (polygon, ring) = exterior_ring(&geometry).ok_or_else(|| GeometryResolutionError::NoPolygon {
        name: name.to_string(),
        kind: geometry.kind.clone(),
    })?;

    log::debug!(
        "Resolved '{}' to a {} with {} boundary points",
        name,
        geometry.kind,
        ring.len()
    );
    Ok(LocationGeometry::from_polygon(name, &polygon, ring))
}

/// Picks the exterior ring: the only one for a `Polygon`, the one enclosing
/// the largest area for a `MultiPolygon`.
fn exterior_ring(geometry: &RawGeometry) -> Option<Boundary> {
    let candidates: Vec<Ring> = match geometry.kind.as_str() {
        "Polygon" => {
            let rings: Vec<Ring> = serde_json::from_value(geometry.coordinates.clone()).ok()?;
            rings.into_iter().take(1).collect()
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Ring>> =
                serde_json::from_value(geometry.coordinates.clone()).ok()?;
            polygons
                .into_iter()
                .filter_map(|rings| rings.into_iter().next())
                .collect()
        }
        _ => return None,
    };

    candidates
        .into_iter()
        .filter_map(|ring| to_pairs(&ring))
        .map(|pairs| (Polygon::new(LineString::from(pairs.clone()), vec![]), pairs))
        .max_by(|(a, _), (b, _)| a.unsigned_area().total_cmp(&b.unsigned_area()))
}

/// Converts GeoJSON positions to `(lon, lat)` pairs, ignoring any altitude.
/// Rings with fewer than three positions are not areas.
fn to_pairs(ring: &Ring) -> Option<Vec<(f64, f64)>> {
    if ring.len() < 3 {
        return None;
    }
    ring.iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        })
        .collect()
}
