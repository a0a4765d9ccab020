//! Query-string contracts for listing endpoints.
//!
//! Products and articles page by offset, comments page by cursor. Raw query
//! parameters are decoded and checked once at the boundary and turned into
//! [`OffsetPage`] / [`CursorPage`], which every store understands. The helpers
//! at the bottom evaluate the same pages over in-memory rows.

use crate::errors::ApiError;
use serde::Deserialize;
use serde_valid::Validate;
use std::cmp::Ordering;
use uuid::Uuid;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Sort direction over creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Newest first
    #[default]
    Recent,
    /// Oldest first
    Oldest,
}

impl Order {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Order::Recent => "DESC",
            Order::Oldest => "ASC",
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct OffsetQuery {
    #[validate(minimum = 0)]
    pub offset: Option<i64>,
    #[validate(minimum = 1)]
    pub limit: Option<i64>,
    pub order: Option<Order>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OffsetPage {
    pub offset: i64,
    pub limit: i64,
    pub order: Order,
    pub search: String,
}

impl Default for OffsetPage {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            order: Order::default(),
            search: String::new(),
        }
    }
}

impl TryFrom<OffsetQuery> for OffsetPage {
    type Error = ApiError;

    fn try_from(query: OffsetQuery) -> Result<Self, Self::Error> {
        query
            .validate()
            .map_err(|errors| ApiError::not_valid(format!("Invalid query: {}", errors)))?;

        Ok(Self {
            offset: query.offset.unwrap_or(0),
            limit: cap_limit(query.limit),
            order: query.order.unwrap_or_default(),
            search: query.search.unwrap_or_default(),
        })
    }
}

impl OffsetPage {
    /// `ILIKE` pattern matching the search text literally anywhere in a column.
    pub fn like_pattern(&self) -> String {
        format!("%{}%", escape_like(&self.search))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CursorQuery {
    pub cursor: Option<String>,
    #[validate(minimum = 1)]
    pub limit: Option<i64>,
}

/// Where a cursor page starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// No cursor given, start from the newest row
    Start,
    /// Continue strictly after this row
    After(Uuid),
    /// The cursor cannot name any row, the page is empty
    Unresolvable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage {
    pub cursor: Cursor,
    pub limit: i64,
}

impl Default for CursorPage {
    fn default() -> Self {
        Self {
            cursor: Cursor::Start,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TryFrom<CursorQuery> for CursorPage {
    type Error = ApiError;

    fn try_from(query: CursorQuery) -> Result<Self, Self::Error> {
        query
            .validate()
            .map_err(|errors| ApiError::not_valid(format!("Invalid query: {}", errors)))?;

        let cursor = match query.cursor.as_deref().map(str::trim) {
            None | Some("") => Cursor::Start,
            Some(raw) => Uuid::parse_str(raw)
                .map(Cursor::After)
                .unwrap_or(Cursor::Unresolvable),
        };

        Ok(Self {
            cursor,
            limit: cap_limit(query.limit),
        })
    }
}

fn cap_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
}

/// Escapes `LIKE` metacharacters, to be used with `ESCAPE '\'`.
pub fn escape_like(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive literal substring match against any of the fields.
pub fn search_matches(search: &str, fields: &[&str]) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Sorts rows by a creation key in the requested direction.
pub fn sort_by_order<T, K, F>(rows: &mut [T], order: Order, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    rows.sort_by(|a, b| {
        let ord: Ordering = key(a).cmp(&key(b));
        match order {
            Order::Oldest => ord,
            Order::Recent => ord.reverse(),
        }
    });
}

/// Applies offset and limit to rows that are already filtered and sorted.
pub fn offset_window<T>(rows: Vec<T>, page: &OffsetPage) -> Vec<T> {
    rows.into_iter()
        .skip(page.offset.max(0) as usize)
        .take(page.limit.max(0) as usize)
        .collect()
}

/// Applies a cursor to rows already sorted newest first.
pub fn cursor_window<T, F>(rows: Vec<T>, page: &CursorPage, id: F) -> Vec<T>
where
    F: Fn(&T) -> Uuid,
{
    let limit = page.limit.max(0) as usize;
    match page.cursor {
        Cursor::Start => rows.into_iter().take(limit).collect(),
        Cursor::Unresolvable => Vec::new(),
        Cursor::After(cursor) => match rows.iter().position(|row| id(row) == cursor) {
            Some(position) => rows.into_iter().skip(position + 1).take(limit).collect(),
            None => Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;

    fn offset_query(offset: Option<i64>, limit: Option<i64>) -> OffsetQuery {
        OffsetQuery {
            offset,
            limit,
            ..Default::default()
        }
    }

    #[test]
    fn offset_defaults() {
        let page = OffsetPage::try_from(OffsetQuery::default()).unwrap();
        assert_eq!(page, OffsetPage::default());
        assert_eq!(page.limit, 10);
        assert_eq!(page.order, Order::Recent);
    }

    #[test]
    fn limit_is_capped() {
        let page = OffsetPage::try_from(offset_query(None, Some(5000))).unwrap();
        assert_eq!(page.limit, MAX_LIMIT);
    }

    #[test]
    fn negative_offset_and_zero_limit_are_rejected() {
        assert!(OffsetPage::try_from(offset_query(Some(-1), None)).is_err());
        assert!(OffsetPage::try_from(offset_query(None, Some(0))).is_err());
        assert!(OffsetPage::try_from(offset_query(None, Some(-3))).is_err());
    }

    #[test]
    fn non_numeric_limit_fails_to_decode() {
        let query = web::Query::<OffsetQuery>::from_query("limit=ten");
        assert!(query.is_err());
    }

    #[test]
    fn order_decodes_from_lowercase() {
        let query = web::Query::<OffsetQuery>::from_query("order=oldest&search=Wid").unwrap();
        let page = OffsetPage::try_from(query.into_inner()).unwrap();
        assert_eq!(page.order, Order::Oldest);
        assert_eq!(page.search, "Wid");
        assert!(web::Query::<OffsetQuery>::from_query("order=popular").is_err());
    }

    #[test]
    fn search_is_escaped_for_like() {
        assert_eq!(escape_like(r"50%_off\"), r"50\%\_off\\");
        let page = OffsetPage {
            search: "a%".to_string(),
            ..Default::default()
        };
        assert_eq!(page.like_pattern(), r"%a\%%");
    }

    #[test]
    fn search_matches_literally_and_ignores_case() {
        assert!(search_matches("", &["anything"]));
        assert!(search_matches("WIDGET", &["blue widget", "d"]));
        assert!(search_matches("desc", &["name", "A Description"]));
        assert!(!search_matches("w.dget", &["widget", "d"]));
        assert!(search_matches("100%", &["100% cotton", ""]));
    }

    #[test]
    fn malformed_cursor_is_unresolvable() {
        let query = CursorQuery {
            cursor: Some("not-an-id".to_string()),
            limit: None,
        };
        let page = CursorPage::try_from(query).unwrap();
        assert_eq!(page.cursor, Cursor::Unresolvable);
    }

    #[test]
    fn cursor_window_continues_after_cursor() {
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let first = cursor_window(
            ids.clone(),
            &CursorPage {
                cursor: Cursor::Start,
                limit: 2,
            },
            |id| *id,
        );
        assert_eq!(first, ids[0..2].to_vec());

        let second = cursor_window(
            ids.clone(),
            &CursorPage {
                cursor: Cursor::After(ids[1]),
                limit: 2,
            },
            |id| *id,
        );
        assert_eq!(second, ids[2..4].to_vec());

        let past_end = cursor_window(
            ids.clone(),
            &CursorPage {
                cursor: Cursor::After(ids[4]),
                limit: 2,
            },
            |id| *id,
        );
        assert!(past_end.is_empty());

        let unknown = cursor_window(
            ids,
            &CursorPage {
                cursor: Cursor::After(Uuid::new_v4()),
                limit: 2,
            },
            |id| *id,
        );
        assert!(unknown.is_empty());
    }

    #[test]
    fn sort_and_window() {
        let mut rows = vec![3, 1, 2, 5, 4];
        sort_by_order(&mut rows, Order::Recent, |v| *v);
        assert_eq!(rows, vec![5, 4, 3, 2, 1]);

        let page = OffsetPage {
            offset: 1,
            limit: 2,
            ..Default::default()
        };
        assert_eq!(offset_window(rows.clone(), &page), vec![4, 3]);

        sort_by_order(&mut rows, Order::Oldest, |v| *v);
        assert_eq!(rows, vec![1, 2, 3, 4, 5]);
    }
}
