//! Шапка экрана: логотип из параметра `?logo=` адреса Web App

use reqwest::Url;

/// Заголовок, если логотип не задан
pub const DEFAULT_TITLE: &str = "Отчёты";

/// Значение `logo` из строки запроса; пустое значение = нет логотипа
pub fn logo_from_webapp_url(webapp_url: &str) -> Option<String> {
    let url = Url::parse(webapp_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "logo")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Строка шапки для вывода в терминал
pub fn header_line(logo_url: Option<&str>) -> String {
    match logo_url {
        Some(url) => format!("🏗  {} [логотип: {}]", DEFAULT_TITLE, url),
        None => format!("🏗  {}", DEFAULT_TITLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_from_query() {
        assert_eq!(
            logo_from_webapp_url(
                "https://reports.example/?logo=https%3A%2F%2Fcdn.example%2Flogo.png"
            ),
            Some("https://cdn.example/logo.png".to_string())
        );
    }

    #[test]
    fn test_logo_missing_or_empty() {
        assert_eq!(logo_from_webapp_url("https://reports.example/"), None);
        assert_eq!(logo_from_webapp_url("https://reports.example/?logo="), None);
        assert_eq!(logo_from_webapp_url("not a url"), None);
    }

    #[test]
    fn test_header_line() {
        assert_eq!(header_line(None), "🏗  Отчёты");
        assert!(header_line(Some("https://cdn/logo.png")).contains("https://cdn/logo.png"));
    }
}
