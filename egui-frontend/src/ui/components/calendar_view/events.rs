//! # Event Index Builder
//!
//! Maps the flat event catalog onto calendar dates. Multi-day events are
//! expanded into one entry per covered day; the short tag stays on the
//! first day only so a "deadline"-style label does not repeat across a
//! span. Also provides the per-layer month counter used by the filter
//! chips.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use shared::{CalendarEvent, EventLayer};

use super::grid::{add_months, to_iso};

/// ISO date -> events active on that date, in insertion order.
pub type EventIndex = HashMap<String, Vec<CalendarEvent>>;

/// Build the date index for the given set of visible layers.
pub fn build_event_index(events: &[CalendarEvent], active_layers: &BTreeSet<EventLayer>) -> EventIndex {
    let mut index: EventIndex = HashMap::new();

    for event in events {
        if !active_layers.contains(&event.layer) {
            continue;
        }
        match event.end_date {
            None => {
                index.entry(to_iso(event.date)).or_default().push(event.clone());
            }
            Some(end) => {
                for (offset, day) in event
                    .date
                    .iter_days()
                    .take_while(|day| *day <= end)
                    .enumerate()
                {
                    let mut entry = event.clone();
                    if offset > 0 {
                        // Continuation days keep title/layer but lose the tag
                        entry.tag = None;
                    }
                    index.entry(to_iso(day)).or_default().push(entry);
                }
            }
        }
    }

    index
}

/// Stable sort by importance, highest first; ties keep catalog order.
pub fn sort_by_importance(events: &mut [CalendarEvent]) {
    events.sort_by(|a, b| b.importance.cmp(&a.importance));
}

/// Count events of one layer whose date range intersects the month, not
/// merely those that start inside it.
pub fn count_in_month(events: &[CalendarEvent], layer: EventLayer, year: i32, month: u32) -> usize {
    let Some(month_start) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let Some(month_end) = add_months(month_start, 1).pred_opt() else {
        return 0;
    };

    events
        .iter()
        .filter(|event| {
            event.layer == layer && event.date <= month_end && event.end() >= month_start
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(
        id: &str,
        layer: EventLayer,
        date: &str,
        end_date: Option<&str>,
        tag: Option<&str>,
        importance: i32,
    ) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            layer,
            title: format!("Event {}", id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            end_date: end_date.map(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()),
            tag: tag.map(str::to_string),
            importance,
        }
    }

    fn all_layers() -> BTreeSet<EventLayer> {
        EventLayer::ALL.into_iter().collect()
    }

    #[test]
    fn ranges_expand_and_only_the_first_day_keeps_the_tag() {
        let events = vec![event(
            "deadline",
            EventLayer::Hack,
            "2026-02-20",
            Some("2026-02-22"),
            Some("deadline"),
            5,
        )];
        let index = build_event_index(&events, &all_layers());

        assert_eq!(index["2026-02-20"][0].tag.as_deref(), Some("deadline"));
        assert_eq!(index["2026-02-21"][0].tag, None);
        assert_eq!(index["2026-02-22"][0].tag, None);
        assert!(!index.contains_key("2026-02-23"));
        // Title and layer survive on continuation days
        assert_eq!(index["2026-02-22"][0].title, "Event deadline");
    }

    #[test]
    fn inactive_layers_are_skipped() {
        let events = vec![
            event("a", EventLayer::Hack, "2026-02-20", None, None, 0),
            event("b", EventLayer::Stock, "2026-02-20", None, None, 0),
        ];
        let mut only_stock = BTreeSet::new();
        only_stock.insert(EventLayer::Stock);

        let index = build_event_index(&events, &only_stock);
        let day = &index["2026-02-20"];
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].id, "b");
    }

    #[test]
    fn importance_sort_is_stable_for_ties() {
        let mut events = vec![
            event("low", EventLayer::Stock, "2026-03-12", None, None, 2),
            event("tie-1", EventLayer::Stock, "2026-03-12", None, None, 4),
            event("tie-2", EventLayer::Stock, "2026-03-12", None, None, 4),
        ];
        sort_by_importance(&mut events);

        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["tie-1", "tie-2", "low"]);
    }

    #[test]
    fn month_count_uses_range_intersection() {
        let events = vec![event(
            "fair",
            EventLayer::Expo,
            "2026-02-25",
            Some("2026-03-01"),
            None,
            4,
        )];

        // Spans the month boundary: counted in both months
        assert_eq!(count_in_month(&events, EventLayer::Expo, 2026, 2), 1);
        assert_eq!(count_in_month(&events, EventLayer::Expo, 2026, 3), 1);
        assert_eq!(count_in_month(&events, EventLayer::Expo, 2026, 4), 0);
        assert_eq!(count_in_month(&events, EventLayer::Hack, 2026, 2), 0);
    }

    #[test]
    fn single_day_events_count_in_their_month_only() {
        let events = vec![event("one", EventLayer::Hack, "2026-02-20", None, None, 5)];
        assert_eq!(count_in_month(&events, EventLayer::Hack, 2026, 2), 1);
        assert_eq!(count_in_month(&events, EventLayer::Hack, 2026, 3), 0);
    }
}
