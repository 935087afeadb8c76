//! Встроенные справочники
//!
//! Используются, пока сервер не ответил, и как запасной вариант при ошибке.

use crate::types::{AccessRow, AccessUser, Project, RecordId, ReportRecord, Role, WorkType};

/// Виды работ по умолчанию
pub fn default_work_types() -> Vec<WorkType> {
    vec![
        WorkType::new("1", "Земляные работы"),
        WorkType::new("2", "Бетонирование"),
        WorkType::new("3", "Монтаж конструкций"),
    ]
}

/// Объекты строительства
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            name: "ЖК «Северный»".into(),
            address: "ул. Парковая, 12".into(),
        },
        Project {
            id: "2".into(),
            name: "ЖК «Академический»".into(),
            address: "пр-т Науки, 5".into(),
        },
    ]
}

/// Демонстрационная история для режима без сервера
pub fn demo_history() -> Vec<ReportRecord> {
    vec![
        ReportRecord {
            id: RecordId::from("101"),
            project_id: "1".into(),
            date: "2025-11-11".into(),
            work_type_id: "2".into(),
            description: "Бетонирование ростверка\nОбъём: 12,5 м³\nТехника: 2\nЛюди: 7".into(),
            photo_urls: vec![
                "https://picsum.photos/seed/a/300/200".into(),
                "https://picsum.photos/seed/b/300/200".into(),
            ],
            ..Default::default()
        },
        ReportRecord {
            id: RecordId::from("100"),
            project_id: "1".into(),
            date: "2025-11-10".into(),
            work_type_id: "1".into(),
            description: "Разработка котлована\nОбъём: 80 м³\nТехника: 3\nЛюди: 5".into(),
            photo_urls: vec!["https://picsum.photos/seed/c/300/200".into()],
            ..Default::default()
        },
    ]
}

/// Назначения подрядчиков на объекты
pub fn access_rows() -> Vec<AccessRow> {
    vec![
        AccessRow {
            user: AccessUser { id: 8, name: "ИП «СтройСервис»".into() },
            projects: vec!["1".into()],
            role: Role::Reporter,
        },
        AccessRow {
            user: AccessUser { id: 9, name: "ООО «МонтажГрупп»".into() },
            projects: vec!["1".into(), "2".into()],
            role: Role::Reporter,
        },
    ]
}

/// Название вида работ по id, иначе сам id
pub fn work_type_name<'a>(work_types: &'a [WorkType], id: &'a str) -> &'a str {
    work_types
        .iter()
        .find(|w| w.id.0 == id)
        .map(|w| w.name.as_str())
        .unwrap_or(id)
}

/// Название объекта по id, иначе сам id
pub fn project_name<'a>(projects: &'a [Project], id: &'a str) -> &'a str {
    projects
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name.as_str())
        .unwrap_or(id)
}
