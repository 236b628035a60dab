use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::database::DatabaseError;

/// Days covered when a range has no bounds at all
const DEFAULT_SPAN_DAYS: i64 = 30;

/// The earliest date any filter accepts
pub fn antigua_fecha() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Whether dates after today are acceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    Today,
    Unbounded,
}

/// Inclusive day range; a missing side is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub desde: Option<NaiveDate>,
    pub hasta: Option<NaiveDate>,
}

impl DateRange {
    pub fn day(date: NaiveDate) -> Self {
        Self {
            desde: Some(date),
            hasta: Some(date),
        }
    }

    /// First instant included, as a timestamp bound
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.desde.map(|d| d.and_time(NaiveTime::MIN))
    }

    /// First instant excluded, as a timestamp bound
    pub fn end_exclusive(&self) -> Option<NaiveDateTime> {
        self.hasta
            .and_then(|d| d.succ_opt())
            .map(|d| d.and_time(NaiveTime::MIN))
    }
}

/// Reject dates before 2022-01-01 and, when bounded, after today
pub fn within_history(date: NaiveDate, today: NaiveDate, upper: UpperBound) -> bool {
    date >= antigua_fecha() && (upper == UpperBound::Unbounded || date <= today)
}

fn check(date: NaiveDate, today: NaiveDate, upper: UpperBound, message: String) -> Result<NaiveDate, DatabaseError> {
    if within_history(date, today, upper) {
        Ok(date)
    } else {
        Err(DatabaseError::OutOfRange(message))
    }
}

/// Resolve the range of an aggregation from its query parameters.
///
/// `single` wins over the bounds. Without any bound the range is the last
/// thirty days; with only `desde` it runs up to today. `label` names the
/// column in error messages ("Creado", "Inicio").
pub fn resolve_range(
    label: &str,
    single: Option<NaiveDate>,
    desde: Option<NaiveDate>,
    hasta: Option<NaiveDate>,
    today: NaiveDate,
    upper: UpperBound,
) -> Result<DateRange, DatabaseError> {
    if let Some(date) = single {
        let date = check(date, today, upper, format!("{} fuera de rango", label))?;
        return Ok(DateRange::day(date));
    }

    if let (Some(d), Some(h)) = (desde, hasta) {
        if d > h {
            return Err(DatabaseError::OutOfRange("El rango de fechas no es correcto".to_string()));
        }
    }

    let (desde, hasta) = match (desde, hasta) {
        (None, None) => (Some(today - Duration::days(DEFAULT_SPAN_DAYS)), Some(today)),
        (Some(d), None) => (Some(d), Some(today)),
        other => other,
    };

    let desde = desde
        .map(|d| check(d, today, upper, format!("{} desde fuera de rango", label)))
        .transpose()?;
    let hasta = hasta
        .map(|h| check(h, today, upper, format!("{} hasta fuera de rango", label)))
        .transpose()?;

    Ok(DateRange { desde, hasta })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: (i32, u32, u32) = (2024, 5, 15);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn single_day_wins_over_bounds() {
        let range = resolve_range(
            "Creado",
            Some(date(2024, 5, 1)),
            Some(date(2023, 1, 1)),
            None,
            today(),
            UpperBound::Today,
        )
        .unwrap();
        assert_eq!(range, DateRange::day(date(2024, 5, 1)));
    }

    #[test]
    fn no_bounds_means_last_thirty_days() {
        let range = resolve_range("Creado", None, None, None, today(), UpperBound::Today).unwrap();
        assert_eq!(range.desde, Some(date(2024, 4, 15)));
        assert_eq!(range.hasta, Some(today()));
    }

    #[test]
    fn only_desde_runs_to_today() {
        let range = resolve_range("Creado", None, Some(date(2024, 1, 1)), None, today(), UpperBound::Today).unwrap();
        assert_eq!(range.hasta, Some(today()));
    }

    #[test]
    fn only_hasta_leaves_lower_side_open() {
        let range = resolve_range("Creado", None, None, Some(date(2024, 1, 1)), today(), UpperBound::Today).unwrap();
        assert_eq!(range.desde, None);
        assert_eq!(range.hasta, Some(date(2024, 1, 1)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = resolve_range(
            "Creado",
            None,
            Some(date(2024, 3, 1)),
            Some(date(2024, 2, 1)),
            today(),
            UpperBound::Today,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "El rango de fechas no es correcto");
    }

    #[test]
    fn bounds_outside_history_are_rejected() {
        let too_old = resolve_range("Creado", Some(date(2021, 12, 31)), None, None, today(), UpperBound::Today);
        assert_eq!(too_old.unwrap_err().to_string(), "Creado fuera de rango");

        let future = resolve_range("Creado", None, None, Some(date(2024, 6, 1)), today(), UpperBound::Today);
        assert_eq!(future.unwrap_err().to_string(), "Creado hasta fuera de rango");
    }

    #[test]
    fn unbounded_ranges_accept_future_days() {
        let range = resolve_range(
            "Inicio",
            None,
            Some(date(2024, 6, 1)),
            Some(date(2024, 6, 30)),
            today(),
            UpperBound::Unbounded,
        )
        .unwrap();
        assert_eq!(range.hasta, Some(date(2024, 6, 30)));

        let too_old = resolve_range("Inicio", None, Some(date(2020, 1, 1)), None, today(), UpperBound::Unbounded);
        assert_eq!(too_old.unwrap_err().to_string(), "Inicio desde fuera de rango");
    }

    #[test]
    fn timestamp_bounds_cover_whole_days() {
        let range = DateRange::day(date(2024, 2, 29));
        assert_eq!(range.start(), Some(date(2024, 2, 29).and_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(range.end_exclusive(), Some(date(2024, 3, 1).and_hms_opt(0, 0, 0).unwrap()));
    }
}
