//! pt-BR day headings for the ledger ("Hoje, 16 de outubro").

use chrono::{Datelike, NaiveDate, Weekday};

use crate::time::parse_timestamp;

/// Heading for records whose date could not be parsed
pub const INVALID_DATE_LABEL: &str = "Data inválida";

const MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn day_and_month(day: NaiveDate) -> String {
    format!("{:02} de {}", day.day(), MONTHS[day.month0() as usize])
}

/// Label for a calendar day relative to `today`. No year is shown.
pub fn label_for_day(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        return format!("Hoje, {}", day_and_month(day));
    }
    if today.pred_opt() == Some(day) {
        return format!("Ontem, {}", day_and_month(day));
    }
    format!("{}, {}", weekday_name(day.weekday()), day_and_month(day))
}

/// Label for an ISO date string; never fails.
pub fn format_day_label(iso: &str, today: NaiveDate) -> String {
    match parse_timestamp(iso) {
        Some(ts) => label_for_day(ts.date(), today),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        // a Friday
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_today_and_yesterday() {
        assert_eq!(format_day_label("2026-10-16T09:15:00", today()), "Hoje, 16 de outubro");
        assert_eq!(format_day_label("2026-10-15", today()), "Ontem, 15 de outubro");
    }

    #[test]
    fn test_older_days_use_weekday() {
        assert_eq!(format_day_label("2026-10-06", today()), "terça-feira, 06 de outubro");
        assert_eq!(format_day_label("2026-03-01", today()), "domingo, 01 de março");
    }

    #[test]
    fn test_yesterday_across_month_boundary() {
        let first = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(format_day_label("2026-02-28", first), "Ontem, 28 de fevereiro");
    }

    #[test]
    fn test_future_date_is_not_today() {
        assert_eq!(format_day_label("2026-10-17", today()), "sábado, 17 de outubro");
    }

    #[test]
    fn test_invalid_input_gives_sentinel() {
        assert_eq!(format_day_label("not-a-date", today()), INVALID_DATE_LABEL);
        assert_eq!(format_day_label("", today()), "Data inválida");
    }
}
