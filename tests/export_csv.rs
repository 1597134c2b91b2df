mod common;

use common::{full_product, product};
use shopdesk::api::Product;
use shopdesk::export::{export_page, ExportError};

fn read_without_bom(path: &std::path::Path) -> String {
    let raw = std::fs::read(path).expect("read export");
    let text = String::from_utf8(raw).expect("utf-8");
    text.strip_prefix('\u{feff}')
        .map(str::to_string)
        .unwrap_or(text)
}

#[test]
fn empty_page_produces_no_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let slice: Vec<&Product> = Vec::new();
    let err = export_page(&slice, 1, dir.path()).unwrap_err();
    assert!(matches!(err, ExportError::NothingToExport));
    assert_eq!(
        std::fs::read_dir(dir.path()).unwrap().count(),
        0,
        "no artifact on the empty path"
    );
}

#[test]
fn file_name_carries_page_and_utc_date() {
    let dir = tempfile::tempdir().expect("tempdir");
    let p = product(1, "Mug", 12.5);
    let slice = vec![&p];
    let path = export_page(&slice, 3, dir.path()).expect("export");
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    assert_eq!(name, format!("products_page3_{}.csv", date));
}

#[test]
fn export_starts_with_a_bom_and_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let p = product(1, "Mug", 12.5);
    let slice = vec![&p];
    let path = export_page(&slice, 1, dir.path()).expect("export");

    let raw = std::fs::read(&path).expect("read");
    assert_eq!(&raw[..3], "\u{feff}".as_bytes());

    let text = read_without_bom(&path);
    let header = text.lines().next().unwrap();
    assert_eq!(header, "id,title,price,category,images,description");
}

#[test]
fn round_trip_preserves_every_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut tricky = full_product(7, r#"Mug with "quotes", commas"#, 12.5);
    tricky.description = Some("Line one, line two \"quoted\"".to_string());
    let plain = product(8, "Pen", 2.0);
    let slice = vec![&tricky, &plain];

    let path = export_page(&slice, 1, dir.path()).expect("export");
    let text = read_without_bom(&path);

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 2);

    let row = &rows[0];
    assert_eq!(&row[0], "7");
    assert_eq!(&row[1], r#"Mug with "quotes", commas"#);
    assert_eq!(&row[2], "12.5");
    assert_eq!(&row[3], "General");
    assert_eq!(
        &row[4],
        "https://img.example/7-front.png; https://img.example/7-back.png"
    );
    assert_eq!(&row[5], "Line one, line two \"quoted\"");

    let row = &rows[1];
    assert_eq!(&row[0], "8");
    assert_eq!(&row[3], "", "absent category renders empty");
    assert_eq!(&row[4], "", "no images renders empty");
    assert_eq!(&row[5], "", "absent description renders empty");
}
