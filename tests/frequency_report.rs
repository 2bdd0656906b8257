mod common;

use shelter_tally::application::services::FrequencyService;
use shelter_tally::domain::frequency_table::{FrequencyTable, FrequencyView};
use shelter_tally::error::AppError;

#[test]
fn test_list_all_counts_every_line() {
    let source = common::write_source("list", common::GROCERIES);
    let service = FrequencyService::new(source.path());
    let mut out = Vec::new();

    let written = service.print(&FrequencyView::List, &mut out).unwrap();

    assert_eq!(written, 3);
    assert_eq!(
        common::output_lines(out),
        vec!["Spinach: 3", "Radishes: 2", "Peppers: 1"]
    );
}

#[test]
fn test_counts_sum_to_line_total() {
    let source = common::write_source("total", common::GROCERIES);
    let table = FrequencyService::new(source.path()).load().unwrap();

    assert_eq!(table.total(), common::GROCERIES.lines().count());
}

#[test]
fn test_lookup_present_item() {
    let source = common::write_source("lookup-present", common::GROCERIES);
    let service = FrequencyService::new(source.path());
    let mut out = Vec::new();

    service
        .print(&FrequencyView::Lookup("Radishes".to_string()), &mut out)
        .unwrap();

    let lines = common::output_lines(out);
    assert_eq!(lines, vec!["Radishes", "Radishes: 2"]);
}

#[test]
fn test_lookup_absent_item_prints_header_only() {
    let source = common::write_source("lookup-absent", common::GROCERIES);
    let service = FrequencyService::new(source.path());
    let mut out = Vec::new();

    let written = service
        .print(&FrequencyView::Lookup("Zucchini".to_string()), &mut out)
        .unwrap();

    assert_eq!(written, 1);
    assert_eq!(common::output_lines(out), vec!["Zucchini"]);
}

#[test]
fn test_histogram_bars() {
    let source = common::write_source("histogram", "cat\ndog\ncat\n");
    let service = FrequencyService::new(source.path());
    let mut out = Vec::new();

    service.print(&FrequencyView::Histogram, &mut out).unwrap();

    assert_eq!(common::output_lines(out), vec!["cat: **", "dog: *"]);
}

#[test]
fn test_reports_reread_source() {
    let source = common::write_source("reread", "cat\n");
    let service = FrequencyService::new(source.path());

    assert_eq!(service.load().unwrap().get("cat"), Some(1));

    std::fs::write(source.path(), "cat\ncat\n").unwrap();

    assert_eq!(service.load().unwrap().get("cat"), Some(2));
}

#[test]
fn test_windows_line_endings() {
    let source = common::write_source("crlf", "Peppers\r\nPeppers\r\n");
    let table = FrequencyTable::open(source.path()).unwrap();

    assert_eq!(table.get("Peppers"), Some(2));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_missing_file_fails_at_load() {
    let service = FrequencyService::new(std::env::temp_dir().join("shelter-tally-missing.txt"));

    let result = service.load();

    assert!(matches!(result, Err(AppError::Io { .. })));
}
