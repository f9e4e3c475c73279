use serde::{Deserialize, Serialize};
use time::{Date, Time};

use crate::json_time;

/// Request body for scheduling an appointment.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    #[serde(with = "json_time::date")]
    pub date: Date,
    #[serde(with = "json_time::time_of_day")]
    pub time: Time,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn parses_schedule_body() {
        let req: ScheduleRequest =
            serde_json::from_str(r#"{"date":"2024-06-01","time":"10:00"}"#).expect("valid body");
        assert_eq!(req.date, date!(2024 - 06 - 01));
        assert_eq!(req.time, time!(10:00));
    }
}
