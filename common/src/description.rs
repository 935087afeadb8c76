//! Описание отчёта: сборка и разбор
//!
//! Бэкенд хранит одно текстовое поле `description`. Клиент собирает его из
//! комментария и трёх показателей (объём, техника, люди), а в истории
//! вытаскивает показатели обратно в одну строку.
//!
//! Формат описания:
//! ```text
//! Бетонирование ростверка
//! Объём: 12,5 м³
//! Техника: 2
//! Люди: 7
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const VOLUME_LABEL: &str = "Объём";
pub const MACHINES_LABEL: &str = "Техника";
pub const PEOPLE_LABEL: &str = "Люди";

/// Разделитель фрагментов в однострочной сводке
pub const SUMMARY_SEPARATOR: &str = " • ";

const SUMMARY_BULLET: char = '•';

lazy_static::lazy_static! {
    static ref VOLUME_RE: Regex = Regex::new(r"(?i)Объём:[\s•]*([^\n]+)").unwrap();
    static ref MACHINES_RE: Regex = Regex::new(r"(?i)Техника:[\s•]*([^\n]+)").unwrap();
    static ref PEOPLE_RE: Regex = Regex::new(r"(?i)Люди:[\s•]*([^\n]+)").unwrap();
    static ref ANY_LABEL_RE: Regex = Regex::new(r"(?i)(?:Объём|Техника|Люди):").unwrap();
    static ref LABEL_LINE_RE: Regex = Regex::new(r"(?i)^\s*(Объём|Техника|Люди):").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Собрать описание из комментария и показателей
///
/// Пустые поля пропускаются. Комментарий идёт первой строкой без метки,
/// затем `Объём`, `Техника`, `Люди` в фиксированном порядке.
///
/// # Examples
/// ```
/// use ptobot_common::encode;
///
/// assert_eq!(
///     encode("Shift done", "10", "2", "5"),
///     "Shift done\nОбъём: 10\nТехника: 2\nЛюди: 5"
/// );
/// assert_eq!(encode("", "", "", ""), "");
/// ```
pub fn encode(comment: &str, volume: &str, machines: &str, people: &str) -> String {
    let labeled = [
        (VOLUME_LABEL, volume),
        (MACHINES_LABEL, machines),
        (PEOPLE_LABEL, people),
    ];

    let mut lines = Vec::with_capacity(4);
    if !comment.is_empty() {
        lines.push(comment.to_string());
    }
    lines.extend(
        labeled
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| format!("{}: {}", label, value)),
    );

    lines.join("\n")
}

/// Свернуть описание в одну строку для списка истории
///
/// Если найдена хотя бы одна метка, возвращает фрагменты `Метка: значение`
/// через `" • "` в порядке объём, техника, люди. Иначе возвращает исходный
/// текст со схлопнутыми пробелами.
///
/// Значение метки обрывается на следующей метке, поэтому в строке
/// `Объём: Техника: 2` объёма нет. Повторная свёртка результата ничего
/// не меняет.
///
/// # Examples
/// ```
/// use ptobot_common::summarize;
///
/// assert_eq!(
///     summarize("Текст\nОбъём: 10 м³\nТехника: 2\nЛюди: 6"),
///     "Объём: 10 м³ • Техника: 2 • Люди: 6"
/// );
/// assert_eq!(summarize("  просто\n текст "), "просто текст");
/// ```
pub fn summarize(description: &str) -> String {
    let fields = LabeledFields::scan(description);
    match fields.render() {
        Some(line) => line,
        None => collapse_whitespace(description),
    }
}

/// Схлопнуть все пробельные последовательности в один пробел
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Первое значение после метки
///
/// Значение идёт до конца строки или до следующей метки. Точки `•` и
/// пробелы по краям отбрасываются, так что значения из готовой сводки
/// читаются обратно без изменений.
fn capture_value<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    let raw = re.captures(text)?.get(1)?.as_str();
    let raw = match ANY_LABEL_RE.find(raw) {
        Some(next) => &raw[..next.start()],
        None => raw,
    };
    let value = raw.trim_matches(|c: char| c.is_whitespace() || c == SUMMARY_BULLET);
    (!value.is_empty()).then_some(value)
}

/// Показатели, найденные по меткам в произвольном тексте
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LabeledFields<'a> {
    volume: Option<&'a str>,
    machines: Option<&'a str>,
    people: Option<&'a str>,
}

impl<'a> LabeledFields<'a> {
    fn scan(text: &'a str) -> Self {
        Self {
            volume: capture_value(&VOLUME_RE, text),
            machines: capture_value(&MACHINES_RE, text),
            people: capture_value(&PEOPLE_RE, text),
        }
    }

    fn render(&self) -> Option<String> {
        render_fragments(
            self.volume.unwrap_or_default(),
            self.machines.unwrap_or_default(),
            self.people.unwrap_or_default(),
        )
    }
}

fn render_fragments(volume: &str, machines: &str, people: &str) -> Option<String> {
    let parts: Vec<String> = [
        (VOLUME_LABEL, volume),
        (MACHINES_LABEL, machines),
        (PEOPLE_LABEL, people),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SUMMARY_SEPARATOR))
    }
}

/// Описательная часть отчёта в виде отдельных полей
///
/// Основное представление: поля хранятся и отправляются по отдельности,
/// а текст `description` строится из них через [`encode`]. Обратный разбор
/// [`ReportDetails::from_description`] нужен только для старых записей,
/// где есть лишь текст.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportDetails {
    pub comment: String,
    pub volume: String,
    pub machines: String,
    pub people: String,
}

impl ReportDetails {
    /// Текст для поля `description`
    pub fn encode(&self) -> String {
        encode(&self.comment, &self.volume, &self.machines, &self.people)
    }

    /// Однострочная сводка по показателям, `None` если все пусты
    pub fn summary(&self) -> Option<String> {
        render_fragments(self.volume.trim(), self.machines.trim(), self.people.trim())
    }

    /// Разобрать старое описание обратно на поля
    ///
    /// Показатели ищутся так же, как в [`summarize`]. Комментарием становятся строки
    /// без меток.
    pub fn from_description(description: &str) -> Self {
        let fields = LabeledFields::scan(description);
        let comment = description
            .lines()
            .filter(|line| !LABEL_LINE_RE.is_match(line))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        Self {
            comment,
            volume: fields.volume.unwrap_or_default().to_string(),
            machines: fields.machines.unwrap_or_default().to_string(),
            people: fields.people.unwrap_or_default().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.comment.is_empty()
            && self.volume.is_empty()
            && self.machines.is_empty()
            && self.people.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // encode
    // =============================================

    #[test]
    fn test_encode_all_fields() {
        assert_eq!(
            encode("Shift done", "10", "2", "5"),
            "Shift done\nОбъём: 10\nТехника: 2\nЛюди: 5"
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode("", "", "", ""), "");
    }

    #[test]
    fn test_encode_skips_empty_fields() {
        assert_eq!(encode("", "80 м³", "", "5"), "Объём: 80 м³\nЛюди: 5");
        assert_eq!(encode("Только текст", "", "", ""), "Только текст");
        assert_eq!(encode("", "", "3", ""), "Техника: 3");
    }

    #[test]
    fn test_encode_keeps_multiline_comment_first() {
        let out = encode("Строка 1\nСтрока 2", "1", "", "");
        assert_eq!(out, "Строка 1\nСтрока 2\nОбъём: 1");
    }

    #[test]
    fn test_encode_label_present_iff_value_present() {
        let values = ["", "7"];
        for volume in values {
            for machines in values {
                for people in values {
                    let out = encode("к", volume, machines, people);
                    assert_eq!(out.contains("Объём: 7"), !volume.is_empty());
                    assert_eq!(out.contains("Техника: 7"), !machines.is_empty());
                    assert_eq!(out.contains("Люди: 7"), !people.is_empty());
                    assert_eq!(out.lines().next(), Some("к"));
                }
            }
        }
    }

    // =============================================
    // summarize
    // =============================================

    #[test]
    fn test_summarize_encoded() {
        assert_eq!(
            summarize("Текст\nОбъём: 10 м³\nТехника: 2\nЛюди: 6"),
            "Объём: 10 м³ • Техника: 2 • Люди: 6"
        );
    }

    #[test]
    fn test_summarize_free_text() {
        assert_eq!(
            summarize("random free text with no labels"),
            "random free text with no labels"
        );
        assert_eq!(summarize("  много \n\t пробелов  "), "много пробелов");
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(""), "");
        assert_eq!(summarize(" \n "), "");
    }

    #[test]
    fn test_summarize_fixed_order() {
        assert_eq!(
            summarize("Люди: 4\nОбъём: 3 т"),
            "Объём: 3 т • Люди: 4"
        );
    }

    #[test]
    fn test_summarize_case_insensitive() {
        assert_eq!(summarize("ОБЪЁМ: 5\nтехника: 1"), "Объём: 5 • Техника: 1");
    }

    #[test]
    fn test_summarize_first_occurrence_wins() {
        assert_eq!(summarize("Техника: 2\nТехника: 9"), "Техника: 2");
    }

    #[test]
    fn test_summarize_not_anchored() {
        assert_eq!(summarize("итого Люди: 12 чел."), "Люди: 12 чел.");
    }

    #[test]
    fn test_summarize_value_on_next_line() {
        assert_eq!(summarize("Объём:\n15"), "Объём: 15");
    }

    #[test]
    fn test_summarize_blank_value_is_ignored() {
        assert_eq!(summarize("Объём: "), "Объём:");
    }

    #[test]
    fn test_summarize_round_trip() {
        let encoded = encode("", "12,5 м³", "2", "7");
        assert_eq!(summarize(&encoded), "Объём: 12,5 м³ • Техника: 2 • Люди: 7");
    }

    #[test]
    fn test_summarize_idempotent() {
        let inputs = [
            "Текст\nОбъём: 10 м³\nТехника: 2\nЛюди: 6",
            "Люди: 3",
            "random   free\ntext",
            "",
            "Объём: Техника: 5",
            "Объём: 5 •\nЛюди: 2",
            "Техника: 1\nОбъём: Техника: 2",
            "Объём: •\nбетон",
            "Объём: 10 м³ • бетон B25",
        ];
        for input in inputs {
            let once = summarize(input);
            assert_eq!(summarize(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_summarize_idempotent_mixed_fragments() {
        let pieces = [
            "Объём:", "Техника:", "ЛЮДИ:", " • ", "•", "\n", " ", "5", "м³", "бетон",
        ];
        let n = pieces.len();
        for len in 1..=4 {
            for mut code in 0..n.pow(len) {
                let mut input = String::new();
                for _ in 0..len {
                    input.push_str(pieces[code % n]);
                    code /= n;
                }
                let once = summarize(&input);
                assert_eq!(summarize(&once), once, "input: {:?}", input);
            }
        }
    }

    #[test]
    fn test_summarize_trailing_bullet_dropped() {
        assert_eq!(summarize("Объём: 5 •\nЛюди: 2"), "Объём: 5 • Люди: 2");
    }

    #[test]
    fn test_summarize_value_stops_at_next_label() {
        assert_eq!(summarize("Техника: 1\nОбъём: Техника: 2"), "Техника: 1");
        assert_eq!(summarize("Объём: 10 м³ Люди: 5"), "Объём: 10 м³ • Люди: 5");
    }

    #[test]
    fn test_summarize_keeps_bullet_inside_value() {
        assert_eq!(summarize("Объём: 10 м³ • бетон B25"), "Объём: 10 м³ • бетон B25");
    }

    // =============================================
    // ReportDetails
    // =============================================

    #[test]
    fn test_details_from_description() {
        let details = ReportDetails::from_description(
            "Бетонирование ростверка\nОбъём: 12,5 м³\nТехника: 2\nЛюди: 7",
        );
        assert_eq!(details.comment, "Бетонирование ростверка");
        assert_eq!(details.volume, "12,5 м³");
        assert_eq!(details.machines, "2");
        assert_eq!(details.people, "7");
    }

    #[test]
    fn test_details_round_trip() {
        let details = ReportDetails {
            comment: "Разработка котлована\nвторая захватка".into(),
            volume: "80 м³".into(),
            machines: "3".into(),
            people: "5".into(),
        };
        assert_eq!(ReportDetails::from_description(&details.encode()), details);
    }

    #[test]
    fn test_details_legacy_text_is_comment() {
        let details = ReportDetails::from_description("старый отчёт без меток");
        assert_eq!(details.comment, "старый отчёт без меток");
        assert!(details.summary().is_none());
    }

    #[test]
    fn test_details_summary_matches_summarize() {
        let details = ReportDetails {
            volume: "80 м³".into(),
            people: "5".into(),
            ..Default::default()
        };
        assert_eq!(details.summary().as_deref(), Some("Объём: 80 м³ • Люди: 5"));
        assert_eq!(details.summary().unwrap(), summarize(&details.encode()));
    }

    #[test]
    fn test_details_is_empty() {
        assert!(ReportDetails::default().is_empty());
        let details = ReportDetails { people: "1".into(), ..Default::default() };
        assert!(!details.is_empty());
    }
}
