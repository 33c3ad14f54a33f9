//! Query text properties across both products.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use realtime_query::product::ProductType;
use realtime_query::query::{build_query, DateRange, FieldSelection, Filter};

fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
}

/// Lines of the `filter: { ... }` block, trimmed.
fn filter_lines(text: &str) -> Vec<String> {
    text.lines()
        .skip_while(|l| l.trim() != "filter: {")
        .skip(1)
        .take_while(|l| l.trim() != "},")
        .map(|l| l.trim().to_string())
        .collect()
}

#[test]
fn test_ts_range_for_every_product() {
    for product in ProductType::ALL {
        let fields = FieldSelection::new([product.default_field()]).unwrap();
        let query = build_query(product, &fields, &range("2024-02-27", "2024-03-02"), None);

        let lines = filter_lines(query.text());
        assert_eq!(
            lines,
            vec![r#"tsRange: {begin: "2024-02-27T00:00:00", end: "2024-03-02T23:59:59"}"#]
        );
        let head = format!(
            "query {} {{\n    {}(",
            product.query_name(),
            product.root_field()
        );
        assert!(query.text().starts_with(&head));
    }
}

#[test]
fn test_filter_rendering() {
    let fields = FieldSelection::new(["host", "status"]).unwrap();
    let r = range("2024-03-01", "2024-03-01");

    let numeric = Filter::from_parts("status", "200");
    let text = build_query(ProductType::Events, &fields, &r, numeric.as_ref());
    assert_eq!(filter_lines(text.text())[1], "status: 200");

    let quoted = Filter::from_parts("host", "example.com");
    let text = build_query(ProductType::Events, &fields, &r, quoted.as_ref());
    assert_eq!(filter_lines(text.text())[1], r#"host: "example.com""#);

    for (field, value) in [("", "200"), ("host", ""), ("", "")] {
        let filter = Filter::from_parts(field, value);
        let text = build_query(ProductType::Events, &fields, &r, filter.as_ref());
        assert_eq!(filter_lines(text.text()).len(), 1);
    }
}

#[test]
fn test_metrics_query_text() {
    let fields = FieldSelection::new(["geolocCountryName", "requests", "requests"]).unwrap();
    let filter = Filter::from_parts("geolocCountryName", "Brazil");
    let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let query = build_query(
        ProductType::Metrics,
        &fields,
        &DateRange::new(day, day).unwrap(),
        filter.as_ref(),
    );

    let expected = r#"query MetricsQuery {
    httpMetrics(
        limit: 10000,
        filter: {
            tsRange: {begin: "2024-05-10T00:00:00", end: "2024-05-10T23:59:59"},
            geolocCountryName: "Brazil"
        },
        aggregate: {count: ts},
        groupBy: [geolocCountryName,requests],
        orderBy: [count_DESC]
    ) {
        geolocCountryName
        requests
    }
}
"#;
    assert_eq!(query.text(), expected);
}

#[test]
fn test_repeated_builds_are_identical() {
    let fields = FieldSelection::new(["status", "host"]).unwrap();
    let filter = Filter::from_parts("status", "503");
    let r = range("2024-03-01", "2024-03-07");

    let first = build_query(ProductType::Events, &fields, &r, filter.as_ref());
    for _ in 0..5 {
        let again = build_query(ProductType::Events, &fields, &r, filter.as_ref());
        assert_eq!(again.text(), first.text());
    }
}
