//! Описание отчёта: сборка текста и свёртка в строку истории

use ptobot_common::{encode, summarize, ReportDetails, ReportRecord};

#[test]
fn test_full_report_round_trip() {
    let description = encode("Бетонирование ростверка", "12,5 м³", "2", "7");
    assert_eq!(
        description,
        "Бетонирование ростверка\nОбъём: 12,5 м³\nТехника: 2\nЛюди: 7"
    );
    assert_eq!(summarize(&description), "Объём: 12,5 м³ • Техника: 2 • Люди: 7");

    let details = ReportDetails::from_description(&description);
    assert_eq!(details.comment, "Бетонирование ростверка");
    assert_eq!(details.encode(), description);
}

#[test]
fn test_only_filled_fields_are_encoded() {
    assert_eq!(encode("", "", "", "5"), "Люди: 5");
    assert_eq!(summarize(&encode("Работы", "", "3", "")), "Техника: 3");
}

#[test]
fn test_free_text_is_collapsed() {
    assert_eq!(summarize("  Разгрузка\n\n арматуры\t"), "Разгрузка арматуры");
    assert_eq!(summarize(""), "");
}

#[test]
fn test_labels_found_anywhere() {
    let text = "утром объём: 40 м²\nвечером ЛЮДИ: 3";
    assert_eq!(summarize(text), "Объём: 40 м² • Люди: 3");
}

#[test]
fn test_summary_is_stable() {
    let once = summarize("Объём: 10\nТехника: 1\nЛюди: 4");
    assert_eq!(summarize(&once), once);
}

#[test]
fn test_record_fields_preferred_over_text() {
    let record = ReportRecord {
        description: "Объём: 1 м³".into(),
        volume: "2 м³".into(),
        ..Default::default()
    };
    assert_eq!(ptobot_common::history_summary(&record), "Объём: 2 м³");
}
