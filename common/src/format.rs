//! Форматирование для отображения

/// ISO дата `YYYY-MM-DD` в `DD.MM.YYYY`
///
/// Берутся первые три части через `-`, остальное отбрасывается.
/// Строка другого вида возвращается без изменений.
pub fn format_ru_date(iso: &str) -> String {
    let mut parts = iso.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day))
            if !year.is_empty() && !month.is_empty() && !day.is_empty() =>
        {
            format!("{}.{}.{}", day, month, year)
        }
        _ => iso.to_string(),
    }
}

/// Подпись счётчика фотографий в истории
pub fn photo_count_label(count: usize) -> String {
    format!("{} фото", count)
}
