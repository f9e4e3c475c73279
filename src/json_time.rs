//! Wire formats for appointment fields: dates as `YYYY-MM-DD`, times as
//! `HH:MM`, matching what the browser's date/time inputs submit.

pub mod date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{format_description::FormatItem, macros::format_description, Date};

    const FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let s = value.format(FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

pub mod time_of_day {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{format_description::FormatItem, macros::format_description, Time};

    const FORMAT: &[FormatItem<'_>] = format_description!("[hour]:[minute]");

    pub fn serialize<S: Serializer>(value: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        let s = value.format(FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let s = String::deserialize(deserializer)?;
        Time::parse(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use time::macros::{date, time};

    #[derive(Debug, Serialize, Deserialize)]
    struct Slot {
        #[serde(with = "super::date")]
        date: time::Date,
        #[serde(with = "super::time_of_day")]
        time: time::Time,
    }

    #[test]
    fn parses_browser_input() {
        let slot: Slot = serde_json::from_str(r#"{"date":"2024-06-01","time":"10:00"}"#)
            .expect("valid slot");
        assert_eq!(slot.date, date!(2024 - 06 - 01));
        assert_eq!(slot.time, time!(10:00));
    }

    #[test]
    fn serializes_back_to_the_same_strings() {
        let slot = Slot {
            date: date!(2024 - 06 - 01),
            time: time!(10:00),
        };
        let json = serde_json::to_string(&slot).expect("serialize");
        assert_eq!(json, r#"{"date":"2024-06-01","time":"10:00"}"#);
    }

    #[test]
    fn rejects_malformed_date() {
        let err = serde_json::from_str::<Slot>(r#"{"date":"06/01/2024","time":"10:00"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_malformed_time() {
        let err = serde_json::from_str::<Slot>(r#"{"date":"2024-06-01","time":"10am"}"#);
        assert!(err.is_err());
    }
}
