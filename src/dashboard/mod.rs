//! Terminal dashboard for the tracker API.
//!
//! Fetches the points and the rendered map for a time window, writes the map
//! to a file and prints a table plus a short summary. Optionally re-renders on
//! a fixed interval until Ctrl-C.

mod client;
mod range;
mod table;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

pub use client::ApiClient;
pub use range::{RangePreset, Window};
pub use table::{last_point_summary, render_summary, render_table, to_display_time};

use crate::app::shutdown_signal;
use crate::config::MIN_REFRESH_SECS;
use crate::error_handling::ConnectivityError;
use crate::server::LocationOut;

/// What to show and where to write the map.
#[derive(Debug, Clone)]
pub struct ShowOptions {
    /// Time window preset
    pub preset: RangePreset,
    /// Custom window start, read only for `RangePreset::Custom`
    pub start: Option<DateTime<Utc>>,
    /// Custom window end, read only for `RangePreset::Custom`
    pub end: Option<DateTime<Utc>>,
    /// File the map HTML is written to
    pub map_output: PathBuf,
}

/// Everything fetched for one render.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Window the data was fetched for
    pub window: Window,
    /// Points in the window, oldest first
    pub points: Vec<LocationOut>,
    /// Map document returned by the API
    pub map_html: String,
}

/// Fetches points and map for `window` concurrently.
pub async fn fetch_view(api: &ApiClient, window: Window) -> Result<DashboardView, ConnectivityError> {
    let (start, end) = window;
    let (points, map_html) =
        tokio::try_join!(api.fetch_locations(start, end), api.fetch_map_html(start, end))?;
    Ok(DashboardView {
        window,
        points,
        map_html,
    })
}

fn describe_window(preset: RangePreset, window: &Window) -> String {
    match window {
        (Some(start), Some(end)) => format!(
            "{} ({} to {})",
            preset,
            to_display_time(*start).format("%Y-%m-%d %H:%M"),
            to_display_time(*end).format("%Y-%m-%d %H:%M")
        ),
        _ => preset.to_string(),
    }
}

/// Text printed for one render: window, table, summary and map location.
pub fn render_view(view: &DashboardView, preset: RangePreset, map_output: &Path) -> String {
    format!(
        "Range: {}\n{}\n{}\nMap written to {}",
        describe_window(preset, &view.window),
        render_table(&view.points),
        render_summary(&view.points),
        map_output.display()
    )
}

/// Fetches, writes the map file and returns the text to print.
pub async fn show_once(api: &ApiClient, options: &ShowOptions) -> Result<String> {
    let window = options.preset.window(Utc::now(), options.start, options.end)?;
    let view = fetch_view(api, window).await?;
    std::fs::write(&options.map_output, &view.map_html)
        .with_context(|| format!("Failed to write map to {}", options.map_output.display()))?;
    log::debug!(
        "Rendered {} points, map written to {}",
        view.points.len(),
        options.map_output.display()
    );
    Ok(render_view(&view, options.preset, &options.map_output))
}

/// Re-renders every `refresh_secs` seconds until Ctrl-C.
///
/// A failed render is reported and the loop keeps going; the next tick is the
/// retry.
pub async fn watch(api: &ApiClient, options: &ShowOptions, refresh_secs: u64) -> Result<()> {
    let every = Duration::from_secs(refresh_secs.max(MIN_REFRESH_SECS));
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = interval.tick() => {
                match show_once(api, options).await {
                    Ok(text) => println!("{}\n", text),
                    Err(e) => eprintln!("{}\n", describe_error(api.base_url(), &e)),
                }
            }
        }
    }
    Ok(())
}

/// User-facing message for a dashboard failure.
///
/// Connectivity failures name the API URL and how to start it.
pub fn describe_error(api_url: &str, err: &anyhow::Error) -> String {
    match err.downcast_ref::<ConnectivityError>() {
        Some(ConnectivityError::Request { .. }) => format!(
            "Could not connect to the tracker API at {}. Start it with `campus_tracker serve`. Detail: {}",
            api_url, err
        ),
        Some(other) => format!("The tracker API at {} rejected the request: {}", api_url, other),
        None => format!("{:#}", err),
    }
}
