use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::HashSet;

use crate::database::models::CitDiaInhabil;
use crate::database::{DatabaseError, Entity, Repository};

/// How far ahead available days are searched
pub const HORIZON_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitDiaDisponible {
    pub fecha: NaiveDate,
}

/// Weekdays after `today` that are not holidays, at most `limit` of them
pub fn next_available_days(today: NaiveDate, holidays: &HashSet<NaiveDate>, limit: usize) -> Vec<NaiveDate> {
    (1..=HORIZON_DAYS)
        .map(|offset| today + Duration::days(offset))
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .filter(|day| !holidays.contains(day))
        .take(limit)
        .collect()
}

pub async fn cit_dias_disponibles(pool: &PgPool, today: NaiveDate, limit: usize) -> Result<Vec<CitDiaDisponible>, DatabaseError> {
    let mut filter = CitDiaInhabil::filter()?;
    filter.compare(&CitDiaInhabil::column("fecha"), crate::filter::FilterOp::Gt, today)?;
    filter.lte(&CitDiaInhabil::column("fecha"), today + Duration::days(HORIZON_DAYS))?;
    let holidays: HashSet<NaiveDate> = Repository::<CitDiaInhabil>::new(pool.clone())
        .select_any(filter)
        .await?
        .into_iter()
        .map(|dia| dia.fecha)
        .collect();

    Ok(next_available_days(today, &holidays, limit)
        .into_iter()
        .map(|fecha| CitDiaDisponible { fecha })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn skips_weekends_and_holidays() {
        // Friday 2024-03-15; Monday 18 is a holiday
        let holidays: HashSet<NaiveDate> = [date(2024, 3, 18)].into_iter().collect();
        let days = next_available_days(date(2024, 3, 15), &holidays, 3);
        assert_eq!(days, vec![date(2024, 3, 19), date(2024, 3, 20), date(2024, 3, 21)]);
    }

    #[test]
    fn today_is_never_available() {
        let days = next_available_days(date(2024, 3, 13), &HashSet::new(), 1);
        assert_eq!(days, vec![date(2024, 3, 14)]);
    }

    #[test]
    fn stops_at_the_horizon() {
        let days = next_available_days(date(2024, 1, 1), &HashSet::new(), 1000);
        assert!(days.len() < HORIZON_DAYS as usize);
        assert!(days.iter().all(|d| *d <= date(2024, 1, 1) + Duration::days(HORIZON_DAYS)));
    }

    #[test]
    fn zero_limit_is_empty() {
        assert!(next_available_days(date(2024, 1, 1), &HashSet::new(), 0).is_empty());
    }
}
