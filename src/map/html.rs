//! Leaflet HTML output.

use std::fmt::Write;

use serde::Serialize;
use serde_json::json;

use super::document::{Layer, MapDocument};

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const TILE_MAX_ZOOM: u8 = 19;

/// Serializes a value as a JavaScript literal that is safe inside `<script>`.
fn js<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

/// Escapes text for an HTML element body or attribute.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Popup content for Leaflet. `bindPopup` treats strings as HTML, so the
/// text is escaped before it is embedded.
fn popup_js(text: &str) -> String {
    js(&escape_html(text))
}

fn render_layer(script: &mut String, layer: &Layer) {
    // Writing to a String cannot fail.
    let _ = match layer {
        Layer::Polygon {
            vertices,
            color,
            fill_opacity,
            popup,
        } => writeln!(
            script,
            "L.polygon({}, {}).bindPopup({}).addTo(map);",
            js(vertices),
            js(&json!({"color": color, "fill": true, "fillOpacity": fill_opacity})),
            popup_js(popup)
        ),
        Layer::Marker { position, popup } => writeln!(
            script,
            "L.marker({}).bindPopup({}).addTo(map);",
            js(position),
            popup_js(popup)
        ),
        Layer::PolyLine {
            vertices,
            color,
            weight,
        } => writeln!(
            script,
            "L.polyline({}, {}).addTo(map);",
            js(vertices),
            js(&json!({"color": color, "weight": weight}))
        ),
    };
}

/// Renders a complete HTML page for `doc`.
pub(super) fn render(doc: &MapDocument) -> String {
    let mut script = String::new();
    let _ = writeln!(
        script,
        "var map = L.map(\"map\").setView({}, {});",
        js(&doc.center),
        doc.zoom
    );
    let _ = writeln!(
        script,
        "L.tileLayer({}, {}).addTo(map);",
        js(TILE_URL),
        js(&json!({"maxZoom": TILE_MAX_ZOOM, "attribution": TILE_ATTRIBUTION}))
    );
    for layer in &doc.layers {
        render_layer(&mut script, layer);
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>{title}</title>
<link rel="stylesheet" href="{css}" />
<script src="{leaflet}"></script>
<style>
html, body {{ height: 100%; margin: 0; padding: 0; }}
#map {{ position: absolute; top: 0; bottom: 0; left: 0; right: 0; }}
</style>
</head>
<body>
<div id="map"></div>
<script>
{script}</script>
</body>
</html>
"#,
        title = escape_html(&doc.title),
        css = LEAFLET_CSS_URL,
        leaflet = LEAFLET_JS_URL,
        script = script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LocationGeometry;
    use crate::map::build_map;

    fn sample_doc(points: Vec<(f64, f64, String)>) -> MapDocument {
        let geometry = LocationGeometry::from_boundary(
            "Javeriana <Cali>",
            vec![(-76.54, 3.33), (-76.52, 3.33), (-76.52, 3.35), (-76.54, 3.33)],
        );
        build_map(&geometry, points, 17)
    }

    #[test]
    fn test_render_contains_view_and_layers() {
        let html = sample_doc(vec![
            (3.3415, -76.5295, "Punto 1".to_string()),
            (3.342, -76.5288, String::new()),
        ])
        .render_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("leaflet.js"));
        assert!(html.contains(".setView(["));
        assert!(html.contains(", 17);"));
        assert_eq!(html.matches("L.polygon(").count(), 1);
        assert_eq!(html.matches("L.marker(").count(), 2);
        assert_eq!(html.matches("L.polyline(").count(), 1);
        assert!(html.contains("[3.3415,-76.5295]"));
        assert!(html.contains("\"Punto 2\""));
        assert!(html.contains("\"fillOpacity\":0.3"));
        assert!(html.contains("\"weight\":2.5"));
    }

    #[test]
    fn test_title_is_html_escaped() {
        let html = sample_doc(Vec::new()).render_html();
        assert!(html.contains("<title>Javeriana &lt;Cali&gt;</title>"));
    }

    #[test]
    fn test_labels_cannot_close_script_tag() {
        let html = sample_doc(vec![(
            3.34,
            -76.53,
            "</script><script>alert(1)</script>".to_string(),
        )])
        .render_html();
        // Only the page's own script elements may close.
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("&lt;/script&gt;"));
    }

    #[test]
    fn test_popup_markup_is_rendered_as_text() {
        let html = sample_doc(vec![(
            0.5,
            0.5,
            "<img src=x onerror=alert(1)>".to_string(),
        )])
        .render_html();
        assert!(html.contains(r#"bindPopup("&lt;img src=x onerror=alert(1)&gt;")"#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_place_name_popup_is_escaped() {
        let html = sample_doc(Vec::new()).render_html();
        assert!(html.contains(r#"bindPopup("Javeriana &lt;Cali&gt;")"#));
    }

    #[test]
    fn test_no_polyline_without_points() {
        let html = sample_doc(Vec::new()).render_html();
        assert!(!html.contains("L.polyline("));
        assert!(!html.contains("L.marker("));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a&b"c'd"#), "a&amp;b&quot;c&#39;d");
    }
}
