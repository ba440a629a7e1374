use crate::errors::QueryError;

/// Represents a GROUP BY clause
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupBy {
    /// Fields to group by, in insertion order
    pub fields: Vec<String>,
}

impl GroupBy {
    /// Create a new GROUP BY clause with the specified fields
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Append a field, rejecting empty or whitespace-only names
    pub fn push(&mut self, field: impl Into<String>) -> Result<(), QueryError> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(QueryError::invalid_argument(
                "GROUP BY field name cannot be empty",
            ));
        }
        self.fields.push(field);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render `GROUP BY a, b` or an empty string when no fields are set
    pub fn to_sql(&self) -> String {
        if self.fields.is_empty() {
            return String::new();
        }
        format!("GROUP BY {}", self.fields.join(", "))
    }
}
