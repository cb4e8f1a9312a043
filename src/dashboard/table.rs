//! Terminal rendering of the points table and summary.

use chrono::{DateTime, FixedOffset, Utc};
use comfy_table::{presets, Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::config::{DISPLAY_TIMEZONE_NAME, DISPLAY_UTC_OFFSET_SECS, UNLABELLED_POINT};
use crate::server::LocationOut;

/// Converts a UTC timestamp to the display timezone.
pub fn to_display_time(ts: DateTime<Utc>) -> DateTime<FixedOffset> {
    match FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS) {
        Some(offset) => ts.with_timezone(&offset),
        None => ts.fixed_offset(),
    }
}

fn format_time(ts: DateTime<Utc>) -> String {
    to_display_time(ts).format("%Y-%m-%d %H:%M:%S %:z").to_string()
}

/// Renders the points as a table, oldest first.
pub fn render_table(points: &[LocationOut]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_HORIZONTAL_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Latitude").add_attribute(Attribute::Bold),
        Cell::new("Longitude").add_attribute(Attribute::Bold),
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new(format!("Created ({})", DISPLAY_TIMEZONE_NAME)).add_attribute(Attribute::Bold),
    ]);

    for point in points {
        table.add_row(vec![
            Cell::new(format!("{:.6}", point.latitude)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.6}", point.longitude)).set_alignment(CellAlignment::Right),
            Cell::new(&point.label),
            Cell::new(&point.source),
            Cell::new(format_time(point.created_at)),
        ]);
    }

    table.to_string()
}

/// One-line description of the most recent point, if any.
pub fn last_point_summary(points: &[LocationOut]) -> Option<String> {
    points.last().map(|last| {
        let label = if last.label.is_empty() {
            UNLABELLED_POINT
        } else {
            &last.label
        };
        format!(
            "{} - ({:.5}, {:.5}) - {}",
            label,
            last.latitude,
            last.longitude,
            format_time(last.created_at)
        )
    })
}

/// Visible count plus the last point.
pub fn render_summary(points: &[LocationOut]) -> String {
    let mut out = format!("Visible points: {}", points.len());
    if let Some(last) = last_point_summary(points) {
        out.push_str("\nLast point: ");
        out.push_str(&last);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(label: &str, hour: u32) -> LocationOut {
        LocationOut {
            latitude: 3.3415,
            longitude: -76.5295,
            label: label.to_string(),
            source: "api".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_display_time_is_bogota() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap();
        assert_eq!(format_time(ts), "2024-04-30 22:00:00 -05:00");
    }

    #[test]
    fn test_table_lists_every_point() {
        let table = render_table(&[point("Gate", 13), point("Library", 14)]);
        assert!(table.contains("Gate"));
        assert!(table.contains("Library"));
        assert!(table.contains("America/Bogota"));
        assert!(table.contains("2024-05-01 08:00:00 -05:00"));
    }

    #[test]
    fn test_summary_uses_last_point() {
        let summary = render_summary(&[point("Gate", 13), point("", 14)]);
        assert!(summary.starts_with("Visible points: 2"));
        assert!(summary.contains("Last point: Sin etiqueta - (3.34150, -76.52950) - 2024-05-01 09:00:00 -05:00"));
    }

    #[test]
    fn test_summary_of_empty_window() {
        assert_eq!(render_summary(&[]), "Visible points: 0");
    }
}
