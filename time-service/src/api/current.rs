use axum_macros::debug_handler;
use chrono::{DateTime, Local, TimeZone, Utc};

pub const PATH: &str = "/api/time/current";

#[debug_handler]
#[tracing::instrument(ret)]
pub async fn handler() -> String {
    iso8601(Utc::now(), &Local)
}

/// `instant` in `zone`, e.g. `2024-03-15T10:30:00.123456789+01:00`.
///
/// The offset follows the zone's rules at `instant`, so it moves across
/// daylight saving transitions.
fn iso8601<Tz: TimeZone>(instant: DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(zone).to_rfc3339()
}
