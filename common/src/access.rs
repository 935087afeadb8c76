//! Панель доступа: какие подрядчики могут сдавать отчёты по каким объектам

use crate::types::AccessRow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessList {
    rows: Vec<AccessRow>,
}

impl AccessList {
    pub fn new(rows: Vec<AccessRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[AccessRow] {
        &self.rows
    }

    pub fn find(&self, user_id: u64) -> Option<&AccessRow> {
        self.rows.iter().find(|row| row.user.id == user_id)
    }

    /// Объекты пользователя; пусто, если пользователя нет в списке
    pub fn projects_for(&self, user_id: u64) -> &[String] {
        self.find(user_id)
            .map(|row| row.projects.as_slice())
            .unwrap_or(&[])
    }

    pub fn can_report(&self, user_id: u64, project_id: &str) -> bool {
        self.projects_for(user_id).iter().any(|p| p == project_id)
    }

    /// Назначить объект. Повторное назначение ничего не меняет.
    ///
    /// Возвращает `false`, если пользователя нет в списке.
    pub fn assign(&mut self, user_id: u64, project_id: &str) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.user.id == user_id) else {
            return false;
        };
        if !row.projects.iter().any(|p| p == project_id) {
            row.projects.push(project_id.to_string());
        }
        true
    }

    /// Снять объект. Возвращает `true`, если назначение было.
    pub fn revoke(&mut self, user_id: u64, project_id: &str) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.user.id == user_id) else {
            return false;
        };
        let before = row.projects.len();
        row.projects.retain(|p| p != project_id);
        row.projects.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::access_rows;

    #[test]
    fn test_projects_for() {
        let list = AccessList::new(access_rows());
        assert_eq!(list.projects_for(9), ["1".to_string(), "2".to_string()]);
        assert!(list.projects_for(100).is_empty());
    }

    #[test]
    fn test_can_report() {
        let list = AccessList::new(access_rows());
        assert!(list.can_report(8, "1"));
        assert!(!list.can_report(8, "2"));
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut list = AccessList::new(access_rows());
        assert!(list.assign(8, "2"));
        assert!(list.assign(8, "2"));
        assert_eq!(list.projects_for(8), ["1".to_string(), "2".to_string()]);
        assert!(!list.assign(100, "1"));
    }

    #[test]
    fn test_revoke() {
        let mut list = AccessList::new(access_rows());
        assert!(list.revoke(9, "1"));
        assert!(!list.revoke(9, "1"));
        assert!(!list.can_report(9, "1"));
        assert!(list.can_report(9, "2"));
    }
}
