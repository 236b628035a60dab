use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use chrono::{DateTime, Local, Locale, TimeZone};

use crate::database::models::CantidadAgendada;

const TABLE_OPEN: &str = r#"<table border="1" style="width:100%; border: 1px solid black; border-collapse: collapse;">"#;
const CELL_OPEN: &str = r#"<td style="padding: 4px;">"#;

/// Escape text placed inside HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Bordered full-width table with padded cells
pub fn html_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut html = String::from(TABLE_OPEN);
    html.push_str("\n<thead>\n<tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", escape(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(CELL_OPEN);
            html.push_str(&escape(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

/// "Fecha de elaboración" stamp, long Spanish month names
pub fn elaboracion<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format_localized("%d/%B/%Y %I:%M%p", Locale::es_MX).to_string()
}

pub fn elaboracion_now() -> String {
    elaboracion(Local::now())
}

/// One outgoing HTML message, built section by section
pub struct Message {
    parts: Vec<String>,
}

impl Message {
    pub fn new() -> Self {
        Self {
            parts: vec![
                "<style> td {border:2px black solid !important} </style>".to_string(),
                "<h1>PJECZ Citas V2</h1>".to_string(),
            ],
        }
    }

    pub fn heading(mut self, title: &str) -> Self {
        self.parts.push(format!("<h2>{}</h2>", escape(title)));
        self
    }

    pub fn paragraph(mut self, text: &str) -> Self {
        self.parts.push(format!("<p>{}</p>", escape(text)));
        self
    }

    /// Pre-rendered HTML, e.g. from `html_table`
    pub fn html(mut self, html: String) -> Self {
        self.parts.push(html);
        self
    }

    pub fn finish(mut self, elaboracion: &str) -> String {
        self.parts.push(format!("<p>Fecha de elaboración: <b>{}.</b></p>", escape(elaboracion)));
        self.parts
            .push("<p>ESTE MENSAJE ES ELABORADO POR UN PROGRAMA. FAVOR DE NO RESPONDER.</p>".to_string());
        self.parts.join("<br>")
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

/// Office by service matrix of scheduled appointments
#[derive(Debug, Default)]
pub struct Pivot {
    servicios: BTreeSet<String>,
    cells: BTreeMap<String, BTreeMap<String, i64>>,
}

impl Pivot {
    pub fn from_items(items: &[CantidadAgendada]) -> Self {
        let mut pivot = Self::default();
        for item in items {
            pivot.servicios.insert(item.servicio.clone());
            *pivot
                .cells
                .entry(item.oficina.clone())
                .or_default()
                .entry(item.servicio.clone())
                .or_insert(0) += item.cantidad;
        }
        pivot
    }

    /// "oficina" followed by each service in order
    pub fn headers(&self) -> Vec<&str> {
        std::iter::once("oficina")
            .chain(self.servicios.iter().map(String::as_str))
            .collect()
    }

    /// One row per office; services the office lacks stay blank
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|(oficina, counts)| {
                std::iter::once(oficina.clone())
                    .chain(
                        self.servicios
                            .iter()
                            .map(|servicio| counts.get(servicio).map(i64::to_string).unwrap_or_default()),
                    )
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn agendada(oficina: &str, servicio: &str, cantidad: i64) -> CantidadAgendada {
        CantidadAgendada {
            oficina: oficina.to_string(),
            servicio: servicio.to_string(),
            cantidad,
        }
    }

    #[test]
    fn table_is_styled_and_escaped() {
        let html = html_table(&["ID", "Notas"], &[vec!["1".to_string(), "a < b".to_string()]]);
        assert!(html.starts_with(TABLE_OPEN));
        assert!(html.contains(r#"<td style="padding: 4px;">a &lt; b</td>"#));
        assert!(html.contains("<th>Notas</th>"));
    }

    #[test]
    fn message_has_header_and_footer() {
        let html = Message::new().heading("Citas").paragraph("SIN CITAS AGENDADAS").finish("01/enero/2024");
        let parts: Vec<&str> = html.split("<br>").collect();
        assert_eq!(parts[1], "<h1>PJECZ Citas V2</h1>");
        assert_eq!(parts[2], "<h2>Citas</h2>");
        assert_eq!(parts[4], "<p>Fecha de elaboración: <b>01/enero/2024.</b></p>");
        assert!(parts[5].contains("FAVOR DE NO RESPONDER"));
    }

    #[test]
    fn elaboracion_uses_spanish_months() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 30, 0).unwrap();
        let when = Utc.from_utc_datetime(&naive);
        assert!(elaboracion(when).starts_with("05/marzo/2024 09:30"));
    }

    #[test]
    fn pivot_sums_per_office_and_service() {
        let pivot = Pivot::from_items(&[
            agendada("OF2", "TRAM", 1),
            agendada("OF1", "TRAM", 2),
            agendada("OF1", "COPIAS", 3),
            agendada("OF1", "TRAM", 4),
        ]);
        assert_eq!(pivot.headers(), vec!["oficina", "COPIAS", "TRAM"]);
        assert_eq!(
            pivot.rows(),
            vec![
                vec!["OF1".to_string(), "3".to_string(), "6".to_string()],
                vec!["OF2".to_string(), String::new(), "1".to_string()],
            ]
        );
    }
}
