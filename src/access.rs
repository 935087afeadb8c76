//! Вкладка «Доступ»: назначение подрядчиков на объекты

use crate::error::{PtobotError, Result};
use ptobot_common::catalog::project_name;
use ptobot_common::{AccessList, Project};

/// Изменение назначения из командной строки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessChange {
    Assign(String),
    Revoke(String),
}

/// Применить изменение к списку
///
/// Возвращает `true`, если назначения изменились. Неизвестный
/// пользователь считается ошибкой.
pub fn apply_change(access: &mut AccessList, user_id: u64, change: &AccessChange) -> Result<bool> {
    if access.find(user_id).is_none() {
        return Err(PtobotError::Config(format!("пользователь {} не найден", user_id)));
    }
    let changed = match change {
        AccessChange::Assign(project_id) => {
            let changed = !access.can_report(user_id, project_id);
            access.assign(user_id, project_id);
            changed
        }
        AccessChange::Revoke(project_id) => access.revoke(user_id, project_id),
    };
    Ok(changed)
}

/// Строки таблицы доступа, при `user` только для одного пользователя
pub fn render_access(access: &AccessList, projects: &[Project], user: Option<u64>) -> Vec<String> {
    access
        .rows()
        .iter()
        .filter(|row| user.map(|id| id == row.user.id).unwrap_or(true))
        .map(|row| {
            let names: Vec<&str> = row
                .projects
                .iter()
                .map(|id| project_name(projects, id))
                .collect();
            format!("{} ({}) [{}]: {}", row.user.name, row.user.id, row.role, names.join(", "))
        })
        .collect()
}
