use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hour_minute")]
    pub time: NaiveTime,
    pub instructor: String,
    pub category: String,
}

/// Classes on `date`, earliest first.
pub fn events_on(events: &[GymEvent], date: NaiveDate) -> Vec<&GymEvent> {
    let mut found: Vec<&GymEvent> = events.iter().filter(|e| e.date == date).collect();
    found.sort_by_key(|e| e.time);
    found
}

/// Classes from `today` through `today + days` inclusive, in schedule order.
///
/// Windows reaching past the calendar's range are clamped to its ends.
pub fn upcoming(events: &[GymEvent], today: NaiveDate, days: i64) -> Vec<&GymEvent> {
    let until = Duration::try_days(days)
        .and_then(|span| today.checked_add_signed(span))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });
    let mut found: Vec<&GymEvent> = events
        .iter()
        .filter(|e| e.date >= today && e.date <= until)
        .collect();
    found.sort_by_key(|e| (e.date, e.time));
    found
}

mod hour_minute {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, date: (i32, u32, u32), time: (u32, u32)) -> GymEvent {
        GymEvent {
            id: id.to_string(),
            title: id.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            instructor: "Alex".to_string(),
            category: "Cardio".to_string(),
        }
    }

    #[test]
    fn test_events_on_sorted_by_time() {
        let events = vec![
            event("yoga", (2024, 5, 20), (10, 0)),
            event("wod", (2024, 5, 20), (8, 0)),
            event("zumba", (2024, 5, 21), (18, 0)),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let ids: Vec<&str> = events_on(&events, day).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["wod", "yoga"]);
    }

    #[test]
    fn test_upcoming_window() {
        let events = vec![
            event("late", (2024, 5, 30), (8, 0)),
            event("zumba", (2024, 5, 21), (18, 0)),
            event("past", (2024, 5, 19), (8, 0)),
            event("wod", (2024, 5, 20), (8, 0)),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let ids: Vec<&str> = upcoming(&events, today, 7)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["wod", "zumba"]);
    }

    #[test]
    fn test_upcoming_clamps_huge_windows() {
        let events = vec![
            event("late", (2030, 1, 1), (8, 0)),
            event("past", (2024, 5, 19), (8, 0)),
            event("wod", (2024, 5, 20), (8, 0)),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        for days in [200_000_000, i64::MAX] {
            let ids: Vec<&str> = upcoming(&events, today, days)
                .iter()
                .map(|e| e.id.as_str())
                .collect();
            assert_eq!(ids, vec!["wod", "late"]);
        }
        for days in [-200_000_000, i64::MIN] {
            assert!(upcoming(&events, today, days).is_empty());
        }
    }

    #[test]
    fn test_event_time_format() {
        let json = r#"{"id":"e1","title":"Crossfit WOD","date":"2024-05-20","time":"08:00","instructor":"Alex","category":"High Intensity"}"#;
        let e: GymEvent = serde_json::from_str(json).unwrap();
        assert_eq!(e.time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(serde_json::to_value(&e).unwrap()["time"], "08:00");
    }
}
