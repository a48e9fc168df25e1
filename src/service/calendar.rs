//! Calendar occurrence expansion.
//!
//! Recurring events are stored as a single row plus a rule; the expansion
//! query materializes the concrete occurrences falling inside a window.

use chrono::{DateTime, Days, Duration, Months, Utc};

use crate::model::calendar::{CalendarEvent, Occurrence, Recurrence};

/// Hard cap on occurrences returned from one expansion, guarding against
/// pathological windows.
const MAX_OCCURRENCES: usize = 500;

/// Expands events into concrete occurrences overlapping `[from, to)`.
///
/// An occurrence overlaps the window when it ends after `from` and starts
/// before `to`. Results are sorted by start time and capped at
/// `MAX_OCCURRENCES`.
pub fn expand_occurrences(
    events: &[CalendarEvent],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();

    for event in events {
        expand_event(event, from, to, &mut occurrences);
        if occurrences.len() >= MAX_OCCURRENCES {
            break;
        }
    }

    occurrences.sort_by_key(|o| o.starts_at);
    occurrences.truncate(MAX_OCCURRENCES);
    occurrences
}

fn expand_event(
    event: &CalendarEvent,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    out: &mut Vec<Occurrence>,
) {
    let duration: Duration = event.ends_at - event.starts_at;

    for iteration in 0u32.. {
        let Some(starts_at) = nth_start(event.starts_at, event.recurrence, iteration) else {
            break;
        };
        if starts_at >= to {
            break;
        }

        let ends_at = starts_at + duration;
        if ends_at > from {
            out.push(Occurrence {
                event_id: event.id,
                title: event.title.clone(),
                starts_at,
                ends_at,
            });
            if out.len() >= MAX_OCCURRENCES {
                break;
            }
        }

        if event.recurrence == Recurrence::None {
            break;
        }
    }
}

/// Start time of the nth repetition, or None past the rule's range.
fn nth_start(
    start: DateTime<Utc>,
    recurrence: Recurrence,
    iteration: u32,
) -> Option<DateTime<Utc>> {
    match recurrence {
        Recurrence::None => (iteration == 0).then_some(start),
        Recurrence::Daily => start.checked_add_days(Days::new(u64::from(iteration))),
        Recurrence::Weekly => {
            start.checked_add_days(Days::new(u64::from(iteration) * 7))
        }
        Recurrence::Monthly => start.checked_add_months(Months::new(iteration)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: i32, starts: DateTime<Utc>, hours: i64, recurrence: Recurrence) -> CalendarEvent {
        CalendarEvent {
            id,
            title: format!("Event {}", id),
            description: None,
            starts_at: starts,
            ends_at: starts + Duration::hours(hours),
            recurrence,
            created_by: 1,
            created_at: starts,
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    #[test]
    fn one_shot_event_appears_once_inside_window() {
        let events = vec![event(1, at(2026, 7, 10, 18), 2, Recurrence::None)];
        let occurrences = expand_occurrences(&events, at(2026, 7, 6, 0), at(2026, 7, 13, 0));

        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].event_id, 1);
        assert_eq!(occurrences[0].starts_at, at(2026, 7, 10, 18));
    }

    #[test]
    fn one_shot_event_outside_window_is_dropped() {
        let events = vec![event(1, at(2026, 7, 20, 18), 2, Recurrence::None)];
        let occurrences = expand_occurrences(&events, at(2026, 7, 6, 0), at(2026, 7, 13, 0));

        assert!(occurrences.is_empty());
    }

    #[test]
    fn weekly_event_repeats_inside_window() {
        let events = vec![event(1, at(2026, 7, 1, 19), 1, Recurrence::Weekly)];
        let occurrences = expand_occurrences(&events, at(2026, 7, 1, 0), at(2026, 7, 29, 0));

        assert_eq!(occurrences.len(), 4);
        assert_eq!(occurrences[1].starts_at, at(2026, 7, 8, 19));
        assert_eq!(occurrences[3].starts_at, at(2026, 7, 22, 19));
    }

    #[test]
    fn daily_event_starting_before_window_still_lands_in_it() {
        let events = vec![event(1, at(2026, 6, 1, 8), 1, Recurrence::Daily)];
        let occurrences = expand_occurrences(&events, at(2026, 7, 6, 0), at(2026, 7, 8, 0));

        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[0].starts_at, at(2026, 7, 6, 8));
        assert_eq!(occurrences[1].starts_at, at(2026, 7, 7, 8));
    }

    #[test]
    fn monthly_event_keeps_day_of_month() {
        let events = vec![event(1, at(2026, 1, 15, 12), 1, Recurrence::Monthly)];
        let occurrences = expand_occurrences(&events, at(2026, 3, 1, 0), at(2026, 5, 1, 0));

        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[0].starts_at, at(2026, 3, 15, 12));
        assert_eq!(occurrences[1].starts_at, at(2026, 4, 15, 12));
    }

    #[test]
    fn expansion_is_sorted_across_events() {
        let events = vec![
            event(1, at(2026, 7, 7, 10), 1, Recurrence::None),
            event(2, at(2026, 7, 6, 9), 1, Recurrence::Daily),
        ];
        let occurrences = expand_occurrences(&events, at(2026, 7, 6, 0), at(2026, 7, 8, 0));

        let starts: Vec<_> = occurrences.iter().map(|o| o.starts_at).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn expansion_respects_the_occurrence_cap() {
        let events = vec![event(1, at(2020, 1, 1, 0), 1, Recurrence::Daily)];
        let occurrences = expand_occurrences(&events, at(2020, 1, 1, 0), at(2026, 1, 1, 0));

        assert_eq!(occurrences.len(), MAX_OCCURRENCES);
    }
}
