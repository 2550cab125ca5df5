/// Network reachability pre-check, run before touching the Netatmo API.
///
/// The probe hits a fixed well-known host (not the weather API itself) with
/// a short timeout. It only distinguishes "the request completed" from "it
/// did not" - DNS failure and connection refusal both count as unreachable.
///
/// `wait_for_connectivity` keeps the host bar informed: after every failed
/// probe it writes one intermediate JSON line to the given sink, so the bar
/// shows live progress during the bounded retry loop. Those lines are
/// always ordered strictly before the invocation's final payload line.

use crate::payload;
use log::debug;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Captive-portal check endpoint; any HTTP status counts as reachable.
pub const PROBE_URL: &str = "http://connectivitycheck.gstatic.com/generate_204";

/// Per-probe timeout. Kept short - the widget runs on every bar refresh.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Bounded retry policy for the probe loop.
pub const MAX_TRIES: usize = 3;
pub const RETRY_DELAY: Duration = Duration::from_secs(3);

/// Builds the short-timeout client used exclusively for probing.
pub fn probe_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
}

/// Single reachability check. True iff the request completed at all;
/// the response status is irrelevant.
pub fn probe(client: &reqwest::blocking::Client) -> bool {
    match client.get(PROBE_URL).send() {
        Ok(_) => true,
        Err(e) => {
            debug!("connectivity probe failed: {}", e);
            false
        }
    }
}

/// Runs the probe up to `max_tries` times, writing one "connecting" JSON
/// line to `out` after each failure and sleeping `delay` between attempts.
/// Returns whether connectivity was established.
///
/// Generic over the probe and the sink so the retry behavior is testable
/// without a network or a real stdout.
pub fn wait_for_connectivity<P, W>(
    mut probe: P,
    out: &mut W,
    max_tries: usize,
    delay: Duration,
) -> bool
where
    P: FnMut() -> bool,
    W: Write,
{
    for attempt in 1..=max_tries {
        if probe() {
            return true;
        }
        let line = payload::connecting(attempt, max_tries).to_json();
        // The bar reads stdout line by line; a failed write just means
        // nobody is listening, which is not this loop's problem.
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
        if attempt < max_tries {
            thread::sleep(delay);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WidgetPayload;

    #[test]
    fn test_immediate_success_emits_nothing() {
        let mut sink = Vec::new();
        let ok = wait_for_connectivity(|| true, &mut sink, 3, Duration::ZERO);
        assert!(ok);
        assert!(sink.is_empty(), "no intermediate lines on first-try success");
    }

    #[test]
    fn test_exhausted_probe_emits_one_line_per_failure() {
        let mut calls = 0;
        let mut sink = Vec::new();
        let ok = wait_for_connectivity(
            || {
                calls += 1;
                false
            },
            &mut sink,
            3,
            Duration::ZERO,
        );
        assert!(!ok);
        assert_eq!(calls, 3, "probe runs exactly max_tries times");

        let output = String::from_utf8(sink).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            let parsed: WidgetPayload =
                serde_json::from_str(line).expect("each intermediate line is valid JSON");
            assert_eq!(parsed.text, "connecting...", "bar must show a visible indicator while retrying");
            assert_eq!(parsed.tooltip, format!("connection attempt {} of 3", i + 1));
            assert!(parsed.class.is_none());
        }
    }

    #[test]
    fn test_late_success_stops_retrying() {
        let mut calls = 0;
        let mut sink = Vec::new();
        let ok = wait_for_connectivity(
            || {
                calls += 1;
                calls == 2
            },
            &mut sink,
            3,
            Duration::ZERO,
        );
        assert!(ok);
        assert_eq!(calls, 2);
        let output = String::from_utf8(sink).unwrap();
        assert_eq!(output.lines().count(), 1, "one line for the single failure");
    }
}
