use chrono::{DateTime, Duration, Locale, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::models::{Event, EventKind, EventsResponse};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MEETUP_CUTOFF_HOURS: i64 = 24;

/// Applies both read-time transforms in order: trim, then localize, so no
/// formatting work is spent on entries about to be dropped. Runs on every
/// read, cache hit or fresh fetch, and its output is never written back to
/// the cache.
pub fn normalize_response(
    response: &mut EventsResponse,
    locale: &str,
    timezone: Option<&str>,
    cap: usize,
) {
    let timezone = parse_timezone(timezone);
    trim_events(&mut response.events, Utc::now(), &timezone, cap);
    localize_events(&mut response.events, parse_locale(locale), &timezone);
}

/// Drops meetups whose start lies strictly more than 24 hours in the past,
/// then caps the list. Future and recent-past meetups survive; other kinds
/// have no staleness cutoff. A stable filter: original order is kept, and
/// an entry whose date cannot be parsed is kept too.
pub fn trim_events(events: &mut Vec<Event>, now: DateTime<Utc>, timezone: &Tz, cap: usize) {
    events.retain(|event| {
        if event.kind != EventKind::Meetup {
            return true;
        }

        match event_start(event, timezone) {
            Some(start) => now - start <= Duration::hours(MEETUP_CUTOFF_HOURS),
            None => true,
        }
    });

    events.truncate(cap);
}

/// Attaches human-readable date and time strings rendered for the reading
/// user's locale and timezone. Events with unparseable dates are left
/// unformatted.
pub fn localize_events(events: &mut [Event], locale: Locale, timezone: &Tz) {
    for event in events {
        if let Some(start) = local_start(event, timezone) {
            event.formatted_date =
                Some(start.format_localized("%A, %B %e, %Y", locale).to_string());
            let time = start.format_localized("%l:%M %p", locale).to_string();
            event.formatted_time = Some(time.trim().to_string());
        }
    }
}

fn event_start(event: &Event, timezone: &Tz) -> Option<DateTime<Utc>> {
    local_start(event, timezone).map(|start| start.with_timezone(&Utc))
}

/// Directory dates are naive local timestamps; they are interpreted in the
/// reading user's timezone, falling back to UTC.
fn local_start(event: &Event, timezone: &Tz) -> Option<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(&event.date, DATE_FORMAT).ok()?;
    timezone.from_local_datetime(&naive).earliest()
}

fn parse_timezone(timezone: Option<&str>) -> Tz {
    timezone
        .and_then(|name| name.parse().ok())
        .unwrap_or(Tz::UTC)
}

fn parse_locale(locale: &str) -> Locale {
    Locale::try_from(locale).unwrap_or(Locale::en_US)
}
