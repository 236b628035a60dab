use super::error::FilterError;
use super::filter_where::quote_identifier;
use super::types::{FilterOrderInfo, SortDirection};

pub struct FilterOrder;

impl FilterOrder {
    /// Parse `"inicio"`, `"id desc"` or `"clave asc, id desc"`
    pub fn parse(s: &str) -> Result<Vec<FilterOrderInfo>, FilterError> {
        let mut out = Vec::new();
        for part in s.split(',') {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                continue;
            }
            let mut it = trimmed.split_whitespace();
            if let Some(col) = it.next() {
                let sort = match it.next() {
                    None => SortDirection::Asc,
                    Some(dir) if dir.eq_ignore_ascii_case("asc") => SortDirection::Asc,
                    Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Desc,
                    Some(dir) => return Err(FilterError::InvalidOperatorData(format!("Unknown sort direction: {}", dir))),
                };
                out.push(FilterOrderInfo { column: col.to_string(), sort });
            }
        }
        Ok(out)
    }

    pub fn generate(infos: &[FilterOrderInfo]) -> String {
        if infos.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = infos
            .iter()
            .map(|i| format!("{} {}", quote_identifier(&i.column), i.sort.to_sql()))
            .collect();
        format!("ORDER BY {}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_directions() {
        let infos = FilterOrder::parse("cit_citas.inicio, id desc").unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].sort, SortDirection::Asc);
        assert_eq!(infos[1].sort, SortDirection::Desc);
        assert_eq!(
            FilterOrder::generate(&infos),
            "ORDER BY \"cit_citas\".\"inicio\" ASC, \"id\" DESC"
        );
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!(FilterOrder::parse("id sideways").is_err());
    }
}
