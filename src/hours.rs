use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::America::Sao_Paulo;
use chrono_tz::Tz;

/// Weekly opening hours, evaluated in São Paulo local time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusinessHours {
    pub first_day: Weekday,
    pub last_day: Weekday,
    pub open_hour: u32,
    pub close_hour: u32,
}

pub const HOURS: BusinessHours = BusinessHours {
    first_day: Weekday::Mon,
    last_day: Weekday::Sat,
    open_hour: 7,
    close_hour: 19,
};

impl BusinessHours {
    pub fn is_open_at(&self, at: DateTime<Tz>) -> bool {
        let day = at.weekday().num_days_from_monday();
        let days = self.first_day.num_days_from_monday()..=self.last_day.num_days_from_monday();
        days.contains(&day) && (self.open_hour..self.close_hour).contains(&at.hour())
    }

    pub fn is_open_now(&self) -> bool {
        self.is_open_at(Utc::now().with_timezone(&Sao_Paulo))
    }

    /// "Segunda a Sábado: 7h às 19h"
    pub fn summary(&self) -> String {
        format!(
            "{} a {}: {}h às {}h",
            weekday_name(self.first_day),
            weekday_name(self.last_day),
            self.open_hour,
            self.close_hour
        )
    }

    /// schema.org `openingHours` value, e.g. "Mo-Sa 07:00-19:00".
    pub fn schema_value(&self) -> String {
        format!(
            "{}-{} {:02}:00-{:02}:00",
            schema_day(self.first_day),
            schema_day(self.last_day),
            self.open_hour,
            self.close_hour
        )
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Segunda",
        Weekday::Tue => "Terça",
        Weekday::Wed => "Quarta",
        Weekday::Thu => "Quinta",
        Weekday::Fri => "Sexta",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

fn schema_day(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        Sao_Paulo.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn open_during_weekday_hours() {
        // 2026-10-14 is a Wednesday
        assert!(HOURS.is_open_at(local(2026, 10, 14, 7, 0)));
        assert!(HOURS.is_open_at(local(2026, 10, 14, 18, 59)));
    }

    #[test]
    fn closed_outside_hours() {
        assert!(!HOURS.is_open_at(local(2026, 10, 14, 6, 59)));
        assert!(!HOURS.is_open_at(local(2026, 10, 14, 19, 0)));
    }

    #[test]
    fn saturday_open_sunday_closed() {
        assert!(HOURS.is_open_at(local(2026, 10, 17, 10, 0)));
        assert!(!HOURS.is_open_at(local(2026, 10, 18, 10, 0)));
    }

    #[test]
    fn utc_instants_are_judged_in_local_time() {
        // 21:30 UTC on a Wednesday is 18:30 in São Paulo
        let at = Utc.with_ymd_and_hms(2026, 10, 14, 21, 30, 0).unwrap();
        assert!(HOURS.is_open_at(at.with_timezone(&Sao_Paulo)));
        let late = Utc.with_ymd_and_hms(2026, 10, 14, 22, 30, 0).unwrap();
        assert!(!HOURS.is_open_at(late.with_timezone(&Sao_Paulo)));
    }

    #[test]
    fn summaries() {
        assert_eq!(HOURS.summary(), "Segunda a Sábado: 7h às 19h");
        assert_eq!(HOURS.schema_value(), "Mo-Sa 07:00-19:00");
    }
}
