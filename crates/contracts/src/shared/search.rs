//! Client-side free-text search over fetched records.

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// String form of every field value of the record, ids included
    fn search_values(&self) -> Vec<String>;

    /// Case-insensitive substring match against any field.
    /// `query_lower` must already be lowercased.
    fn matches_query(&self, query_lower: &str) -> bool {
        self.search_values()
            .iter()
            .any(|value| value.to_lowercase().contains(query_lower))
    }
}

/// Фильтрует список по поисковому запросу
///
/// An empty query keeps everything in the original order. Any other query
/// (whitespace included) keeps the records that contain it in at least one
/// field, preserving order.
pub fn filter_records<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }

    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_query(&query_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        city: &'static str,
    }

    impl Searchable for Row {
        fn search_values(&self) -> Vec<String> {
            vec![self.id.to_string(), self.name.to_string(), self.city.to_string()]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Nimal Perera", city: "Gampaha" },
            Row { id: 2, name: "Kumari Silva", city: "Colombo" },
            Row { id: 12, name: "Ruwan", city: "Kandy" },
        ]
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        assert_eq!(filter_records(&rows(), ""), rows());
    }

    #[test]
    fn test_case_insensitive_match_on_any_field() {
        let found = filter_records(&rows(), "GAMPAHA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);

        let found = filter_records(&rows(), "silva");
        assert_eq!(found[0].name, "Kumari Silva");
    }

    #[test]
    fn test_numeric_fields_are_searched_as_text() {
        let ids: Vec<u32> = filter_records(&rows(), "1").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 12]);
    }

    #[test]
    fn test_every_retained_row_contains_query() {
        let all = rows();
        for query in ["a", "an", "o", "er", " ", "xyz"] {
            let found = filter_records(&all, query);
            assert!(found.len() <= all.len());
            for row in &found {
                assert!(row.matches_query(&query.to_lowercase()));
                assert!(all.contains(row));
            }
        }
        assert!(filter_records(&all, "xyz").is_empty());
    }
}
