//! Larger scenario tests for the query builder

use crate::query_builder::filter::count_placeholders;
use crate::query_builder::sql_generation::SELECT_ALL;
use crate::query_builder::{QueryBuilder, QueryOperator, SortOrder};
use serde_json::{json, Value};
use std::time::Instant;

// ========================================
// Performance Edge Cases
// ========================================

#[test]
fn test_performance_many_conditions() {
    let start = Instant::now();

    let mut builder = QueryBuilder::new("events").unwrap();
    for i in 0..1000 {
        builder.where_(&format!("field_{}", i), QueryOperator::Eq, i);
    }

    let result = builder.to_sql(SELECT_ALL);
    let duration = start.elapsed();

    assert!(duration.as_millis() < 100);
    assert_eq!(result.bindings.len(), 1000);
    assert_eq!(count_placeholders(&result.sql), 1000);
}

#[test]
fn test_performance_large_in_clause() {
    let start = Instant::now();

    let values: Vec<Value> = (0..1000).map(|i| json!(i)).collect();
    let mut builder = QueryBuilder::new("events").unwrap();
    builder.where_in("id", values);

    let result = builder.to_sql(SELECT_ALL);
    let duration = start.elapsed();

    assert!(duration.as_millis() < 50);
    assert!(result.sql.contains("id IN (?, ?"));
    assert_eq!(result.bindings.len(), 1000);
    assert_eq!(count_placeholders(&result.sql), 1000);
}

#[test]
fn test_memory_usage_large_strings() {
    let large_string = "x".repeat(100_000);

    let mut builder = QueryBuilder::new("documents").unwrap();
    builder.where_("body", "=", large_string);

    let result = builder.to_sql(SELECT_ALL);
    assert_eq!(result.bindings.len(), 1);
    assert_eq!(result.bindings[0].as_str().unwrap().len(), 100_000);
}

// ========================================
// Real-World Scenario Tests
// ========================================

#[test]
fn test_ecommerce_product_search_query() {
    let mut builder = QueryBuilder::with_connection("products", "catalog").unwrap();
    builder
        .where_in("category", ["electronics", "computers"])
        .where_("price", QueryOperator::Gte, 100)
        .where_("price", QueryOperator::Lte, 1000)
        .where_raw("(stock > ? OR backorder = ?)", [json!(0), json!(true)])
        .unwrap()
        .where_("name", QueryOperator::Like, "%laptop%")
        .order_by("rating", SortOrder::Desc)
        .order_by("price", SortOrder::Asc);

    let page = builder.all(Some(20));

    assert_eq!(
        page.sql,
        "SELECT * FROM products WHERE category IN (?, ?) AND price >= ? AND price <= ? \
         AND (stock > ? OR backorder = ?) AND name LIKE ? \
         ORDER BY rating DESC, price ASC LIMIT 20"
    );
    assert_eq!(
        page.bindings,
        vec![
            json!("electronics"),
            json!("computers"),
            json!(100),
            json!(1000),
            json!(0),
            json!(true),
            json!("%laptop%")
        ]
    );

    // counting after paging keeps the same filters and limit
    let total = builder.count();
    assert!(total.sql.starts_with("SELECT COUNT(*) FROM products WHERE category IN"));
    assert_eq!(total.bindings, page.bindings);
}

#[test]
fn test_reporting_query_with_grouping() {
    let mut builder = QueryBuilder::new("orders").unwrap();
    builder
        .where_("status", "=", "completed")
        .where_raw("created_at >= ? AND created_at < ?", ["2024-01-01", "2024-02-01"])
        .unwrap();
    builder.group_by("customer_id").unwrap();
    builder.order_by("COUNT(*)", SortOrder::Desc);

    let result = builder.to_sql("SELECT customer_id, COUNT(*)");

    assert_eq!(
        result.sql,
        "SELECT customer_id, COUNT(*) FROM orders WHERE status = ? \
         AND created_at >= ? AND created_at < ? GROUP BY customer_id ORDER BY COUNT(*) DESC"
    );
    assert_eq!(result.bindings.len(), 3);
}

#[test]
fn test_sql_injection_values_stay_in_bindings() {
    let mut builder = QueryBuilder::new("users").unwrap();
    builder.where_("name", "=", "'; DROP TABLE users; --");

    let result = builder.first();
    assert_eq!(result.sql, "SELECT * FROM users WHERE name = ? LIMIT 1");
    assert_eq!(result.bindings, vec![json!("'; DROP TABLE users; --")]);
}

#[test]
fn test_unicode_values() {
    let mut builder = QueryBuilder::new("notes").unwrap();
    builder.where_("title", QueryOperator::Like, "%测试数据%");

    let result = builder.to_sql(SELECT_ALL);
    assert_eq!(result.bindings, vec![json!("%测试数据%")]);
}
