//! # Event Catalog
//!
//! The compiled-in calendar event list for the February/March 2026 window.
//! Events are static data: the calendar view is a read-only schedule, not a
//! scheduler, so there is no runtime create/update/delete path.
//!
//! Each entry carries a layer for filtering, an optional inclusive end date
//! for multi-day spans, an optional short tag (shown only on the first day
//! of a span) and an importance used to sort a day's entries.

use chrono::NaiveDate;
use shared::{CalendarEvent, EventLayer};

/// Build one catalog entry from ISO date strings. Entries with malformed
/// dates are dropped rather than aborting the whole catalog.
fn event(
    id: &str,
    layer: EventLayer,
    title: &str,
    date: &str,
    end_date: Option<&str>,
    tag: Option<&str>,
    importance: i32,
) -> Option<CalendarEvent> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let end_date = match end_date {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?),
        None => None,
    };
    Some(CalendarEvent {
        id: id.to_string(),
        layer,
        title: title.to_string(),
        date,
        end_date,
        tag: tag.map(str::to_string),
        importance,
    })
}

/// The full compiled-in event catalog.
pub fn calendar_events() -> Vec<CalendarEvent> {
    use EventLayer::{Expo, Hack, Stock};

    [
        event(
            "ai-hackathon-deadline",
            Hack,
            "AI hackathon submission deadline 23:59",
            "2026-02-20",
            None,
            Some("deadline"),
            5,
        ),
        event(
            "ai-hackathon-prelim",
            Hack,
            "AI hackathon preliminary judging",
            "2026-02-21",
            Some("2026-03-01"),
            None,
            3,
        ),
        event(
            "ai-hackathon-announce",
            Hack,
            "AI hackathon preliminary results announced",
            "2026-03-02",
            None,
            Some("results"),
            5,
        ),
        event(
            "ai-hackathon-finals",
            Hack,
            "AI hackathon offline finals & award ceremony",
            "2026-03-07",
            None,
            Some("finals"),
            5,
        ),
        event(
            "semicon-korea-2026",
            Expo,
            "Semicon Korea",
            "2026-02-11",
            Some("2026-02-13"),
            None,
            3,
        ),
        event(
            "golf-expo-2026",
            Expo,
            "Golf Expo",
            "2026-02-20",
            Some("2026-02-22"),
            None,
            2,
        ),
        event(
            "living-design-fair-2026",
            Expo,
            "Seoul Living Design Fair",
            "2026-02-25",
            Some("2026-03-01"),
            None,
            4,
        ),
        event(
            "automation-world-2026",
            Expo,
            "Smart Factory & Automation World",
            "2026-03-04",
            Some("2026-03-06"),
            None,
            3,
        ),
        event(
            "krx-lunar-1",
            Stock,
            "KRX Lunar New Year holiday, market closed",
            "2026-02-16",
            None,
            Some("closed"),
            5,
        ),
        event(
            "krx-lunar-2",
            Stock,
            "KRX Lunar New Year holiday, market closed",
            "2026-02-17",
            None,
            Some("closed"),
            5,
        ),
        event(
            "krx-lunar-3",
            Stock,
            "KRX Lunar New Year holiday, market closed",
            "2026-02-18",
            None,
            Some("closed"),
            5,
        ),
        event(
            "krx-mar1-holiday",
            Stock,
            "March 1st substitute holiday (market closed)",
            "2026-03-02",
            None,
            Some("closed"),
            5,
        ),
        event(
            "krx-quad-witching",
            Stock,
            "Futures & options quadruple witching day",
            "2026-03-12",
            None,
            Some("expiry"),
            4,
        ),
        event(
            "krx-quad-witching-note",
            Stock,
            "Watch for volatility into the close",
            "2026-03-12",
            None,
            Some("caution"),
            2,
        ),
        event(
            "manho-steel-halt",
            Stock,
            "Manho Steel stock-split trading halt",
            "2026-02-20",
            Some("2026-03-06"),
            Some("halted"),
            4,
        ),
        event(
            "abpro-bio-halt",
            Stock,
            "Abpro Bio capital-reduction trading halt begins",
            "2026-02-20",
            None,
            Some("halted"),
            4,
        ),
        event(
            "customs-trade-early-feb",
            Stock,
            "Customs early-February trade figures released",
            "2026-02-11",
            None,
            Some("trade"),
            3,
        ),
        event(
            "fomc-meeting",
            Stock,
            "US FOMC meeting",
            "2026-03-17",
            Some("2026-03-18"),
            Some("FOMC"),
            3,
        ),
        event(
            "fomc-result",
            Stock,
            "FOMC decision released (overnight KST)",
            "2026-03-19",
            None,
            Some("FOMC"),
            3,
        ),
        event(
            "shareholder-season",
            Stock,
            "AGM season: meeting notices, dividend and audit reports",
            "2026-03-01",
            Some("2026-03-10"),
            Some("AGM"),
            2,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses_completely() {
        let events = calendar_events();
        assert_eq!(events.len(), 20);
    }

    #[test]
    fn catalog_ranges_are_well_formed() {
        for event in calendar_events() {
            assert!(event.end() >= event.date, "range inverted for {}", event.id);
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let events = calendar_events();
        let mut ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }
}
