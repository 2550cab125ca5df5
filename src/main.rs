//! Netatmo status-bar widget feeder.
//!
//! Invoked by the host bar on every refresh:
//!
//! ```text
//! netatmo_widget <station_name>
//! ```
//!
//! Prints newline-delimited JSON payloads to stdout: zero or more
//! intermediate "connecting" lines while the probe retries, then exactly
//! one final line. Diagnostics go to stderr via env_logger (RUST_LOG).
//! The exit code is 0 on every path - the bar reads outcomes from the
//! payload, not from the exit status.

use chrono::Local;
use log::{info, warn};
use netatmo_widget::connectivity::{self, MAX_TRIES, RETRY_DELAY};
use netatmo_widget::model::{StationError, WidgetPayload};
use netatmo_widget::netatmo::{self, auth, station};
use netatmo_widget::{layout, payload};
use std::env;
use std::io::{self, Write};

/// Prints one payload line to stdout, flushing so the bar sees it even
/// when stdout is a pipe.
fn emit(payload: &WidgetPayload) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = writeln!(out, "{}", payload.to_json());
    let _ = out.flush();
}

/// The full query pipeline: authenticate, fetch, resolve layout, build.
/// Every failure keeps its kind for the stderr log even though the bar
/// only ever sees the generic service-error payload.
fn run_pipeline(station_name: &str) -> Result<WidgetPayload, StationError> {
    let client = netatmo::api_client()
        .map_err(|e| StationError::Query(format!("cannot build HTTP client: {}", e)))?;

    let credentials_path = auth::credentials_path()?;
    let access_token = auth::authenticate(&client, &credentials_path)?;

    let data = station::fetch_stations_data(&client, &access_token)?;
    let module_names = station::module_names(&data, station_name)?;
    let readings = station::latest_readings(&data);
    let layouts = layout::resolve(module_names.len())?;

    payload::build(station_name, &module_names, &layouts, &readings, Local::now())
}

fn main() {
    env_logger::init();

    // The argument check comes before any network traffic: a misconfigured
    // bar entry should not burn probe attempts.
    let station_name = match env::args().nth(1) {
        Some(name) if !name.is_empty() => name,
        _ => {
            emit(&payload::not_configured());
            return;
        }
    };

    let probe_client = match connectivity::probe_client() {
        Ok(client) => client,
        Err(e) => {
            warn!("cannot build probe client: {}", e);
            emit(&payload::no_internet());
            return;
        }
    };

    let online = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        connectivity::wait_for_connectivity(
            || connectivity::probe(&probe_client),
            &mut out,
            MAX_TRIES,
            RETRY_DELAY,
        )
    };
    if !online {
        info!("no connectivity after {} probes", MAX_TRIES);
        emit(&payload::no_internet());
        return;
    }

    match run_pipeline(&station_name) {
        Ok(widget) => emit(&widget),
        Err(e) => {
            warn!("{}", e);
            // Distinguish a failing service from connectivity lost mid-run.
            if connectivity::probe(&probe_client) {
                emit(&payload::service_error());
            } else {
                emit(&payload::no_internet());
            }
        }
    }
}
