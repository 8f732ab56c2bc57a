//! Empty Relation - The typed, always-empty result of a to-many association on a stand-in

use std::fmt;

use serde_json::{Map, Value};

/// A row as it would be returned from the target table
pub type Row = Map<String, Value>;

/// Condition operators that can be chained onto an empty relation
#[derive(Debug, Clone, PartialEq)]
pub enum RelationOperator {
    Equal,
    NotEqual,
    In,
    IsNull,
}

impl fmt::Display for RelationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationOperator::Equal => write!(f, "="),
            RelationOperator::NotEqual => write!(f, "!="),
            RelationOperator::In => write!(f, "IN"),
            RelationOperator::IsNull => write!(f, "IS NULL"),
        }
    }
}

/// Where clause condition
#[derive(Debug, Clone, PartialEq)]
pub struct RelationCondition {
    pub column: String,
    pub operator: RelationOperator,
    pub values: Vec<Value>,
}

/// Order by direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "ASC"),
            OrderDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Query handle on a target model that never yields rows.
///
/// Filters, ordering and limits can be chained as on a real relation; they are
/// recorded for inspection and SQL rendering but the result stays empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyRelation {
    model: String,
    table: String,
    conditions: Vec<RelationCondition>,
    order_by: Vec<(String, OrderDirection)>,
    limit_count: Option<i64>,
}

impl EmptyRelation {
    /// Create an empty relation over a model's table
    pub fn none(model: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            table: table.into(),
            conditions: Vec::new(),
            order_by: Vec::new(),
            limit_count: None,
        }
    }

    /// Name of the model this relation is typed on
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Table of the model this relation is typed on
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Recorded where conditions
    pub fn conditions(&self) -> &[RelationCondition] {
        &self.conditions
    }

    /// Add WHERE column = value
    pub fn where_eq<T: Into<Value>>(self, column: &str, value: T) -> Self {
        self.push_condition(column, RelationOperator::Equal, vec![value.into()])
    }

    /// Add WHERE column != value
    pub fn where_ne<T: Into<Value>>(self, column: &str, value: T) -> Self {
        self.push_condition(column, RelationOperator::NotEqual, vec![value.into()])
    }

    /// Add WHERE column IN (values)
    pub fn where_in<T: Into<Value>>(self, column: &str, values: Vec<T>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.push_condition(column, RelationOperator::In, values)
    }

    /// Add WHERE column IS NULL
    pub fn where_null(self, column: &str) -> Self {
        self.push_condition(column, RelationOperator::IsNull, Vec::new())
    }

    /// Add ORDER BY column
    pub fn order_by(mut self, column: &str, direction: OrderDirection) -> Self {
        self.order_by.push((column.to_string(), direction));
        self
    }

    /// Add LIMIT
    pub fn limit(mut self, count: i64) -> Self {
        self.limit_count = Some(count);
        self
    }

    fn push_condition(mut self, column: &str, operator: RelationOperator, values: Vec<Value>) -> Self {
        self.conditions.push(RelationCondition {
            column: column.to_string(),
            operator,
            values,
        });
        self
    }

    /// Iterate the (always empty) result rows
    pub fn iter(&self) -> std::iter::Empty<&Row> {
        std::iter::empty()
    }

    /// Materialize the result rows
    pub fn to_vec(&self) -> Vec<Row> {
        Vec::new()
    }

    pub fn first(&self) -> Option<Row> {
        None
    }

    pub fn count(&self) -> usize {
        0
    }

    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    /// Render the never-matching SQL this relation stands for, with bind parameters
    pub fn to_sql_with_params(&self) -> (String, Vec<String>) {
        let mut sql = format!("SELECT * FROM {} WHERE 1=0", self.table);
        let mut params = Vec::new();
        let mut param_counter = 1;

        for condition in &self.conditions {
            sql.push_str(" AND ");
            sql.push_str(&condition.column);
            sql.push(' ');
            sql.push_str(&condition.operator.to_string());

            match condition.operator {
                RelationOperator::In if condition.values.is_empty() => {
                    sql.push_str(" (NULL)");
                }
                RelationOperator::In => {
                    sql.push_str(" (");
                    for (i, value) in condition.values.iter().enumerate() {
                        if i > 0 {
                            sql.push_str(", ");
                        }
                        sql.push_str(&format!("${}", param_counter));
                        params.push(value.to_string());
                        param_counter += 1;
                    }
                    sql.push(')');
                }
                RelationOperator::IsNull => {}
                _ => {
                    for value in &condition.values {
                        sql.push_str(&format!(" ${}", param_counter));
                        params.push(value.to_string());
                        param_counter += 1;
                    }
                }
            }
        }

        if !self.order_by.is_empty() {
            let order: Vec<String> = self
                .order_by
                .iter()
                .map(|(column, direction)| format!("{} {}", column, direction))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&order.join(", "));
        }

        if let Some(limit) = self.limit_count {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        (sql, params)
    }

    /// Render the never-matching SQL this relation stands for
    pub fn to_sql(&self) -> String {
        self.to_sql_with_params().0
    }
}

impl<'a> IntoIterator for &'a EmptyRelation {
    type Item = &'a Row;
    type IntoIter = std::iter::Empty<&'a Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
