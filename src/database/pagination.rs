use serde::Serialize;

/// Validated limit/offset pair for one listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

/// One page of a listing, as returned on the wire
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Aggregation results carry the summed amount in `total`
#[derive(Debug, Clone, Serialize)]
pub struct Totals<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Totals<T> {
    pub fn new(items: Vec<T>, amount: impl Fn(&T) -> i64) -> Self {
        let total = items.iter().map(amount).sum();
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_the_amounts() {
        let totals = Totals::new(vec![3_i64, 4, 5], |n| *n);
        assert_eq!(totals.total, 12);
        assert_eq!(totals.items.len(), 3);
    }

    #[test]
    fn page_serializes_flat() {
        let page = Page { items: vec!["a"], total: 1, limit: 10, offset: 0 };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json, serde_json::json!({"items": ["a"], "total": 1, "limit": 10, "offset": 0}));
    }
}
