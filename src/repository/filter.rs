//! Query filters
//!
//! Column names are `&'static str` and come from code, never from request
//! input. Values are always bound as parameters.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

/// Comparison operator for a [`Filter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    Ne,
    In,
    IsNull,
    IsNotNull,
}

impl FilterOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Gt => ">",
            FilterOp::Gte => ">=",
            FilterOp::Lt => "<",
            FilterOp::Lte => "<=",
            FilterOp::Ne => "<>",
            FilterOp::In => "= ANY",
            FilterOp::IsNull => "IS NULL",
            FilterOp::IsNotNull => "IS NOT NULL",
        }
    }
}

/// Bound value of a [`Filter`]
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Uuid(Uuid),
    Text(String),
    Int(i64),
    Decimal(Decimal),
    Bool(bool),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    UuidList(Vec<Uuid>),
    TextList(Vec<String>),
    None,
}

impl From<Uuid> for FilterValue {
    fn from(value: Uuid) -> Self {
        FilterValue::Uuid(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(i64::from(value))
    }
}

impl From<Decimal> for FilterValue {
    fn from(value: Decimal) -> Self {
        FilterValue::Decimal(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        FilterValue::Date(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::Timestamp(value)
    }
}

impl From<Vec<Uuid>> for FilterValue {
    fn from(value: Vec<Uuid>) -> Self {
        FilterValue::UuidList(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        FilterValue::TextList(value)
    }
}

/// A single `column op value` condition
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: &'static str,
    pub op: FilterOp,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(field: &'static str, op: FilterOp, value: impl Into<FilterValue>) -> Self {
        Self {
            field,
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: &'static str, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }

    pub fn ne(field: &'static str, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Ne, value)
    }

    pub fn gt(field: &'static str, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Gt, value)
    }

    pub fn gte(field: &'static str, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Gte, value)
    }

    pub fn lt(field: &'static str, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Lt, value)
    }

    pub fn lte(field: &'static str, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::Lte, value)
    }

    pub fn in_list(field: &'static str, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOp::In, value)
    }

    pub fn is_null(field: &'static str) -> Self {
        Self {
            field,
            op: FilterOp::IsNull,
            value: FilterValue::None,
        }
    }

    pub fn is_not_null(field: &'static str) -> Self {
        Self {
            field,
            op: FilterOp::IsNotNull,
            value: FilterValue::None,
        }
    }

    /// Equality on the tenant partition
    pub fn tenant(organization_id: Uuid, branch_id: Uuid) -> [Filter; 2] {
        [
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
        ]
    }

    /// Append ` AND <condition>` to the builder
    pub(crate) fn push_to(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        qb.push(" AND ");
        qb.push(self.field);
        qb.push(" ");
        qb.push(self.op.as_sql());

        match self.op {
            FilterOp::IsNull | FilterOp::IsNotNull => {}
            FilterOp::In => {
                qb.push("(");
                push_value(qb, &self.value);
                qb.push(")");
            }
            _ => {
                qb.push(" ");
                push_value(qb, &self.value);
            }
        }
    }
}

fn push_value(qb: &mut QueryBuilder<'static, Postgres>, value: &FilterValue) {
    match value.clone() {
        FilterValue::Uuid(v) => qb.push_bind(v),
        FilterValue::Text(v) => qb.push_bind(v),
        FilterValue::Int(v) => qb.push_bind(v),
        FilterValue::Decimal(v) => qb.push_bind(v),
        FilterValue::Bool(v) => qb.push_bind(v),
        FilterValue::Date(v) => qb.push_bind(v),
        FilterValue::Timestamp(v) => qb.push_bind(v),
        FilterValue::UuidList(v) => qb.push_bind(v),
        FilterValue::TextList(v) => qb.push_bind(v),
        FilterValue::None => qb.push("NULL"),
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
    DescNullsLast,
}

impl SortOrder {
    fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
            SortOrder::DescNullsLast => "DESC NULLS LAST",
        }
    }
}

/// `ORDER BY` term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: &'static str,
    pub order: SortOrder,
}

impl Sort {
    pub const fn asc(field: &'static str) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    pub const fn desc(field: &'static str) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }

    pub const fn desc_nulls_last(field: &'static str) -> Self {
        Self {
            field,
            order: SortOrder::DescNullsLast,
        }
    }

    /// Default ordering of every find
    pub const LATEST_UPDATE: Sort = Sort::desc("updated_at");

    pub(crate) fn push_all(sorts: &[Sort], qb: &mut QueryBuilder<'static, Postgres>) {
        let sorts = if sorts.is_empty() {
            &[Sort::LATEST_UPDATE][..]
        } else {
            sorts
        };

        qb.push(" ORDER BY ");
        for (i, sort) in sorts.iter().enumerate() {
            if i > 0 {
                qb.push(", ");
            }
            qb.push(sort.field);
            qb.push(" ");
            qb.push(sort.order.as_sql());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(filters: &[Filter], sorts: &[Sort]) -> String {
        let mut qb = QueryBuilder::new("SELECT * FROM t WHERE deleted_at IS NULL");
        for filter in filters {
            filter.push_to(&mut qb);
        }
        Sort::push_all(sorts, &mut qb);
        qb.sql().to_string()
    }

    #[test]
    fn test_filter_sql_binds_values() {
        let sql = render(
            &[
                Filter::eq("organization_id", Uuid::new_v4()),
                Filter::ne("account_id", Uuid::new_v4()),
                Filter::gte("print_number", 3_i32),
            ],
            &[],
        );

        assert_eq!(
            sql,
            "SELECT * FROM t WHERE deleted_at IS NULL AND organization_id = $1 \
             AND account_id <> $2 AND print_number >= $3 ORDER BY updated_at DESC"
        );
    }

    #[test]
    fn test_in_filter_uses_any() {
        let sql = render(&[Filter::in_list("source", vec!["payment".to_string()])], &[]);
        assert!(sql.contains("source = ANY($1)"));
    }

    #[test]
    fn test_null_filters_bind_nothing() {
        let sql = render(
            &[
                Filter::is_null("member_profile_id"),
                Filter::is_not_null("entry_date"),
            ],
            &[],
        );
        assert!(sql.contains("member_profile_id IS NULL AND entry_date IS NOT NULL"));
        assert!(!sql.contains('$'));
    }

    #[test]
    fn test_explicit_sorts_replace_default() {
        let sql = render(
            &[],
            &[Sort::desc_nulls_last("entry_date"), Sort::desc("created_at")],
        );
        assert!(sql.ends_with("ORDER BY entry_date DESC NULLS LAST, created_at DESC"));
    }

    #[test]
    fn test_tenant_filters() {
        let org = Uuid::new_v4();
        let branch = Uuid::new_v4();
        let [first, second] = Filter::tenant(org, branch);
        assert_eq!(first.value, FilterValue::Uuid(org));
        assert_eq!(second.field, "branch_id");
    }
}
