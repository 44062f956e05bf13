use serde_json::json;

use tabula::{Cell, CellValue, Column, ColumnDescriptor, ColumnSpec, Record, Row, RowInput, Table};

fn values(row: &Row) -> Vec<CellValue> {
    row.cells().into_iter().map(|c| c.value.clone()).collect()
}

#[test]
fn test_add_columns() {
    let mut table = Table::new();
    table.add_columns([Column::new("a"), Column::new("b")]);

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.columns()[0].table(), Some(table.table_ref()));
    assert_eq!(table.columns()[0].name(), Some("a"));
    assert_eq!(table.columns()[1].table(), Some(table.table_ref()));
    assert_eq!(table.columns()[1].name(), Some("b"));
}

#[test]
fn test_add_column_names() {
    let mut table = Table::new();
    table.add_columns(["a", "b"]);

    assert_eq!(table.column_count(), 2);
    for (column, name) in table.columns().iter().zip(["a", "b"]) {
        assert_eq!(column.table(), Some(table.table_ref()));
        assert_eq!(column.name(), Some(name));
    }
}

#[test]
fn test_add_descriptors() {
    let mut table = Table::new();
    table.add_columns([
        ColumnDescriptor::named("a"),
        ColumnDescriptor::named("b").with_title("B"),
    ]);

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.columns()[0].name(), Some("a"));
    assert!(table.columns()[0].title().is_none());
    assert_eq!(table.columns()[1].name(), Some("b"));
    assert_eq!(table.columns()[1].title(), Some("B"));
    assert!(table
        .columns()
        .iter()
        .all(|c| c.table() == Some(table.table_ref())));
}

#[test]
fn test_add_mixture_of_inputs() {
    let mut table = Table::new();
    table.add_columns([
        ColumnSpec::from("a"),
        Column::qualified("b", "ObjectB", None).into(),
        ColumnDescriptor::named("c")
            .with_object_name("ObjectC")
            .with_title("C")
            .into(),
    ]);

    let columns = table.columns();
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0].name(), Some("a"));
    assert!(columns[0].title().is_none());
    assert_eq!(columns[1].name(), Some("b"));
    assert_eq!(columns[1].object_name(), Some("ObjectB"));
    assert_eq!(columns[2].name(), Some("c"));
    assert_eq!(columns[2].object_name(), Some("ObjectC"));
    assert_eq!(columns[2].title(), Some("C"));
    assert!(columns.iter().all(|c| c.table() == Some(table.table_ref())));
}

#[test]
fn test_add_json_columns_skips_other_values() {
    let mut table = Table::new();
    table.add_columns([
        json!("a"),
        json!(42),
        json!({ "name": "b", "objectName": "ObjectB", "title": "B" }),
        json!(null),
        json!("c"),
    ]);

    let names: Vec<_> = table.columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec![Some("a"), Some("b"), Some("c")]);
    assert_eq!(table.columns()[1].id().as_deref(), Some("ObjectB.b"));
}

#[test]
fn test_get_column() {
    let mut table = Table::new();
    table.add_columns(["a", "aa", "A"]);

    assert_eq!(table.get_column("a").and_then(Column::name), Some("a"));
    assert_eq!(table.get_column("aa").and_then(Column::name), Some("aa"));
    assert_eq!(table.get_column("A").and_then(Column::name), Some("A"));
    assert!(table.get_column("b").is_none());
}

#[test]
fn test_get_column_returns_first_match() {
    let mut table = Table::new();
    table.add_columns([
        ColumnDescriptor::named("a").with_title("first"),
        ColumnDescriptor::named("a").with_title("second"),
    ]);

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.get_column("a").and_then(Column::title), Some("first"));
}

#[test]
fn test_add_records_reads_declared_columns() {
    let mut table = Table::new();
    table.add_columns([Column::new("a"), Column::new("c")]);

    table.add([
        json!({ "a": "a1", "b": "b1", "c": "c1", "d": "d1" }),
        json!({ "a": "a2", "b": "b2", "c": "c2", "d": "d2" }),
    ]);

    assert_eq!(table.row_count(), 2);
    assert_eq!(values(&table.rows()[0]), vec![CellValue::from("a1"), CellValue::from("c1")]);
    assert_eq!(values(&table.rows()[1]), vec![CellValue::from("a2"), CellValue::from("c2")]);
    for row in table.rows() {
        assert!(row.get("b").is_none());
        assert!(row.get("d").is_none());
        assert_eq!(row.table(), Some(table.table_ref()));
    }
}

#[test]
fn test_missing_fields_produce_no_cells() {
    let mut table = Table::new();
    table.add_columns(["a", "b", "c"]);

    table.add_row(Record::new().with("c", 3).with("a", 1));
    table.add_row(json!({ "b": null }));

    let first = &table.rows()[0];
    assert_eq!(first.column_names().collect::<Vec<_>>(), vec!["a", "c"]);
    assert_eq!(values(first), vec![CellValue::Int(1), CellValue::Int(3)]);

    let second = &table.rows()[1];
    assert_eq!(second.len(), 1);
    assert_eq!(second.get("b").map(|c| &c.value), Some(&CellValue::Null));
}

#[test]
fn test_cell_factory_on_column() {
    let mut table = Table::new();
    table.add_columns([Column::with_cell("a", |value: CellValue| {
        Cell::new(format!("{}x", value))
    })]);

    table.add_row(json!({ "a": "a" }));

    assert_eq!(table.rows()[0].cells()[0].value, CellValue::from("ax"));
}

#[test]
fn test_cell_factory_display_value_is_cleared() {
    let mut table = Table::new();
    table.add_columns([ColumnDescriptor::named("price").with_cell(|value: CellValue| {
        let display = format!("${}", value);
        Cell::with_display(value, Some(display))
    })]);

    table.add_row(json!({ "price": 5 }));

    let cell = table.rows()[0].get("price").unwrap();
    assert_eq!(cell.value, CellValue::Int(5));
    assert!(cell.display_value.is_none());
}

#[test]
fn test_column_id() {
    let mut named = Table::named("T");
    named.add_columns([
        ColumnSpec::from("a"),
        Column::qualified("b", "O", None).into(),
    ]);
    assert_eq!(named.columns()[0].id().as_deref(), Some("T.a"));
    assert_eq!(named.columns()[1].id().as_deref(), Some("O.b"));

    let mut unnamed = Table::new();
    unnamed.add_columns(["a"]);
    assert_eq!(unnamed.columns()[0].id().as_deref(), Some("a"));
}

#[test]
fn test_prebuilt_row_is_appended_as_is() {
    let other = Table::named("other");
    let mut table = Table::new();
    table.add_columns([Column::with_cell("a", |value: CellValue| {
        Cell::new(format!("{}x", value))
    })]);

    let mut row = Row::bound_to(other.table_ref().clone());
    row.add("z", "kept", None);
    row.add("a", "raw", None);
    let expected = row.clone();

    table.add([RowInput::from(row), RowInput::from(Row::new())]);

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0], expected);
    assert_eq!(table.rows()[0].table(), Some(other.table_ref()));
    assert_eq!(table.rows()[0].get("a").unwrap().value, CellValue::from("raw"));
    assert!(table.rows()[1].table().is_none());
}

#[test]
fn test_row_add_same_column_twice() {
    let mut row = Row::new();
    row.add("a", 1, None);
    row.add("a", 2, None);

    assert_eq!(row.len(), 1);
    assert_eq!(row.cells()[0].value, CellValue::Int(2));
}

#[test]
fn test_row_cells_follow_insertion_order() {
    let mut table = Table::new();
    table.add_columns(["a", "b"]);
    table.add_row(json!({ "a": 1, "b": 2 }));

    let mut row = table.row_mut(0).unwrap();
    row.add("z", 26, None);
    row.add("a", 10, None);

    assert_eq!(row.column_names().collect::<Vec<_>>(), vec!["a", "b", "z"]);
    assert_eq!(
        values(&table.rows()[0]),
        vec![CellValue::Int(10), CellValue::Int(2), CellValue::Int(26)]
    );
}
