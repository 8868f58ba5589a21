//! Renders a [`Predicate`] into parametrized statements.
//!
//! Column names only ever come from [`MerchantField`] and the fixed lists
//! below; every request-derived value is bound as a parameter.

use sea_orm::{DbBackend, Statement, Value};

use crate::domain::merchant::{
    query::{Comparison, FilterValue, MerchantField, Predicate},
    value_objects::Pagination,
};

const MERCHANT_TABLE: &str = "mb_merchant";
const SOFT_DELETE_CONDITION: &str = "is_deleted IS NULL";
const LIKE_ESCAPE: char = '!';

/// Column order of every merchant fetch.
pub const MERCHANT_COLUMNS: [&str; 14] = [
    "mb_merchant_id",
    "name",
    "address",
    "latitude",
    "longitude",
    "phone",
    "description",
    "mb_category_id",
    "area_id",
    "image",
    "delivery",
    "time_start",
    "time_end",
    "facebook",
];

/// Alias of the single column returned by [`count_merchants`].
pub const COUNT_ALIAS: &str = "count";

struct StatementWriter {
    backend: DbBackend,
    sql: String,
    values: Vec<Value>,
}

impl StatementWriter {
    fn new(backend: DbBackend) -> Self {
        Self {
            backend,
            sql: String::new(),
            values: Vec::new(),
        }
    }

    fn push(&mut self, fragment: &str) {
        self.sql.push_str(fragment);
    }

    fn bind(&mut self, value: Value) {
        self.values.push(value);
        match self.backend {
            DbBackend::Postgres => self.sql.push_str(&format!("${}", self.values.len())),
            _ => self.sql.push('?'),
        }
    }

    fn finish(self) -> Statement {
        Statement::from_sql_and_values(self.backend, self.sql, self.values)
    }
}

/// Fetch statement: predicate, stable id order, then the optional window.
pub fn select_merchants(
    backend: DbBackend,
    predicate: &Predicate,
    pagination: Option<&Pagination>,
) -> Statement {
    let mut writer = StatementWriter::new(backend);
    writer.push("SELECT ");
    writer.push(&MERCHANT_COLUMNS.join(", "));
    writer.push(" FROM ");
    writer.push(MERCHANT_TABLE);
    write_where(&mut writer, predicate);
    writer.push(" ORDER BY ");
    writer.push(MerchantField::Id.column());
    writer.push(" ASC");

    if let Some(pagination) = pagination {
        writer.push(" LIMIT ");
        writer.bind(Value::from(pagination.limit()));
        writer.push(" OFFSET ");
        writer.bind(Value::from(pagination.skip()));
    }

    writer.finish()
}

/// Count statement over the same predicate, never windowed.
pub fn count_merchants(backend: DbBackend, predicate: &Predicate) -> Statement {
    let mut writer = StatementWriter::new(backend);
    writer.push("SELECT COUNT(*) AS ");
    writer.push(COUNT_ALIAS);
    writer.push(" FROM ");
    writer.push(MERCHANT_TABLE);
    write_where(&mut writer, predicate);

    writer.finish()
}

fn write_where(writer: &mut StatementWriter, predicate: &Predicate) {
    writer.push(" WHERE ");
    writer.push(SOFT_DELETE_CONDITION);

    for condition in predicate.conditions() {
        let column = condition.field.column();
        writer.push(" AND ");

        match &condition.comparison {
            Comparison::Equals(value) => {
                writer.push(column);
                writer.push(" = ");
                writer.bind(filter_value(value));
            }
            Comparison::OneOf(values) => {
                writer.push(column);
                writer.push(" IN (");
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        writer.push(", ");
                    }
                    writer.bind(filter_value(value));
                }
                writer.push(")");
            }
            Comparison::Contains(keyword) => {
                writer.push("LOWER(");
                writer.push(column);
                writer.push(") LIKE ");
                writer.bind(Value::from(like_pattern(keyword)));
                writer.push(&format!(" ESCAPE '{LIKE_ESCAPE}'"));
            }
        }
    }
}

fn filter_value(value: &FilterValue) -> Value {
    match value {
        FilterValue::Integer(value) => Value::from(*value),
        FilterValue::Float(value) => Value::from(*value),
        FilterValue::Text(value) => Value::from(value.clone()),
    }
}

fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.to_lowercase().chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
