//! LIMIT handling
//!
//! A limit of `0` is treated exactly like no limit at all: neither renders a
//! `LIMIT` clause.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<i64>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The limit that will be rendered, if any
    pub fn effective_limit(&self) -> Option<i64> {
        self.limit.filter(|limit| *limit != 0)
    }

    pub fn to_sql(&self) -> String {
        match self.effective_limit() {
            Some(limit) => format!("LIMIT {}", limit),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_limit() {
        assert_eq!(Pagination::new().to_sql(), "");
    }

    #[test]
    fn test_limit() {
        assert_eq!(Pagination::new().with_limit(10).to_sql(), "LIMIT 10");
    }

    #[test]
    fn test_zero_limit_is_no_limit() {
        let pagination = Pagination::new().with_limit(0);
        assert_eq!(pagination.limit, Some(0));
        assert_eq!(pagination.effective_limit(), None);
        assert_eq!(pagination.to_sql(), "");
    }

    #[test]
    fn test_negative_limit_rendered_verbatim() {
        assert_eq!(Pagination::new().with_limit(-5).to_sql(), "LIMIT -5");
    }
}
