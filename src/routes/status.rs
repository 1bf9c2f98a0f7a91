//! Liveness/status endpoint handler.
//!
//! Reports that the service is up along with the current UTC time, read
//! fresh from the system clock on every request.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

/// Timestamp format: ISO-8601 with microsecond precision and no timezone
/// suffix, e.g. `2026-08-07T14:03:21.532114`. Existing consumers parse
/// exactly this shape.
const SERVER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub server_time_utc: String,
}

/// Formats a UTC instant the way `server_time_utc` advertises it.
fn format_server_time(now: DateTime<Utc>) -> String {
    now.format(SERVER_TIME_FORMAT).to_string()
}

/// Status endpoint handler.
#[instrument(name = "status::show")]
pub async fn show() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "OK",
        server_time_utc: format_server_time(Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    #[test]
    fn test_format_has_microseconds_and_no_offset() {
        let instant = NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_micro_opt(14, 3, 21, 532_114)
            .unwrap()
            .and_utc();

        assert_eq!(format_server_time(instant), "2026-08-07T14:03:21.532114");
    }

    #[test]
    fn test_format_pads_zero_microseconds() {
        let instant = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
            .and_utc();

        assert_eq!(format_server_time(instant), "2026-01-02T03:04:05.000000");
    }

    #[test]
    fn test_formatted_now_round_trips() {
        let formatted = format_server_time(Utc::now());
        let parsed =
            NaiveDateTime::parse_from_str(&formatted, "%Y-%m-%dT%H:%M:%S%.f").unwrap();

        let drift = (Utc::now().naive_utc() - parsed).num_seconds().abs();
        assert!(drift < 5, "timestamp drifted {}s from wall clock", drift);
    }
}
