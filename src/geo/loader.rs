//! Cached geometry loader.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OnceCell;

use super::nominatim::fetch_geometry;
use super::types::LocationGeometry;
use crate::error_handling::GeometryResolutionError;

type GeometryCell = Arc<OnceCell<Arc<LocationGeometry>>>;

/// Resolves place names into geometries, at most once per name.
///
/// Concurrent first calls for the same name share one geocoder request.
/// Failures are not cached: a later call tries again, but nothing retries on
/// its own.
pub struct GeometryLoader {
    client: Arc<reqwest::Client>,
    base_url: String,
    cache: Mutex<HashMap<String, GeometryCell>>,
}

impl GeometryLoader {
    /// Creates a loader that queries the geocoder at `base_url`.
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cell(&self, name: &str) -> GeometryCell {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(name.to_string()).or_default())
    }

    /// Returns the geometry for `name`, resolving it on first use.
    ///
    /// # Errors
    ///
    /// Returns `GeometryResolutionError` if the geocoder cannot resolve the
    /// name into a polygon.
    pub async fn load(&self, name: &str) -> Result<Arc<LocationGeometry>, GeometryResolutionError> {
        let cell = self.cell(name);
        let geometry = cell
            .get_or_try_init(|| async {
                log::info!("Resolving campus geometry for '{}'", name);
                let geometry = fetch_geometry(&self.client, &self.base_url, name).await?;
                Ok::<_, GeometryResolutionError>(Arc::new(geometry))
            })
            .await?;
        Ok(Arc::clone(geometry))
    }

    /// Returns the geometry for `name` if it has already been resolved.
    pub fn cached(&self, name: &str) -> Option<Arc<LocationGeometry>> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.get(name).and_then(|cell| cell.get().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::json;

    fn polygon_body() -> serde_json::Value {
        json!([{
            "geojson": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]]
            }
        }])
    }

    #[tokio::test]
    async fn test_load_resolves_once_per_name() {
        let server = Server::run();
        // Exactly one request even though load() is called three times.
        server.expect(
            Expectation::matching(request::method_path("GET", "/search"))
                .times(1)
                .respond_with(json_encoded(polygon_body())),
        );

        let loader = GeometryLoader::new(Arc::new(reqwest::Client::new()), server.url_str("/"));
        assert!(loader.cached("Campus").is_none());

        let first = loader.load("Campus").await.unwrap();
        let second = loader.load("Campus").await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        let (lat, lon) = first.centroid();
        assert!((lat - 1.0).abs() < 1e-9 && (lon - 1.0).abs() < 1e-9);

        let cached = loader.cached("Campus").unwrap();
        assert!(Arc::ptr_eq(&first, &cached));
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_share_one_request() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/search"))
                .times(1)
                .respond_with(json_encoded(polygon_body())),
        );

        let loader = Arc::new(GeometryLoader::new(
            Arc::new(reqwest::Client::new()),
            server.url_str("/"),
        ));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let loader = Arc::clone(&loader);
                tokio::spawn(async move { loader.load("Campus").await })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/search"))
                .times(2)
                .respond_with(status_code(500)),
        );

        let loader = GeometryLoader::new(Arc::new(reqwest::Client::new()), server.url_str("/"));
        assert!(loader.load("Campus").await.is_err());
        assert!(loader.cached("Campus").is_none());
        assert!(loader.load("Campus").await.is_err());
    }
}
