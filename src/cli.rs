use clap::{Parser, Subcommand};
use ptobot_common::Theme;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ptobot")]
#[command(about = "Ежедневные отчёты со стройплощадки", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Подробный лог
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Адрес бэкенда (перекрывает настройки)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Отправить отчёт за день
    Submit {
        /// Фото или папки с фото
        photos: Vec<PathBuf>,

        /// Объект (id)
        #[arg(short, long)]
        project: Option<String>,

        /// Вид работ (id)
        #[arg(short, long)]
        work_type: Option<String>,

        /// Дата работ ГГГГ-ММ-ДД (по умолчанию сегодня)
        #[arg(short, long)]
        date: Option<String>,

        /// Объём, например «12,5 м³»
        #[arg(long, default_value = "")]
        volume: String,

        /// Количество техники
        #[arg(long, default_value = "")]
        machines: String,

        /// Количество людей
        #[arg(long, default_value = "")]
        people: String,

        /// Комментарий
        #[arg(short, long, default_value = "")]
        comment: String,

        /// Заполнить форму в диалоге
        #[arg(short, long)]
        interactive: bool,

        /// Отправить одно фото в поле `photo` (старый бэкенд)
        #[arg(long)]
        legacy_photo_field: bool,

        /// Показать, что будет отправлено, без отправки
        #[arg(long)]
        dry_run: bool,
    },

    /// История отчётов
    History {
        /// Фильтр по пользователю
        #[arg(long)]
        user: Option<String>,

        /// Фильтр по объекту
        #[arg(short, long)]
        project: Option<String>,

        /// Фильтр по виду работ
        #[arg(short, long)]
        work_type: Option<String>,

        /// Показать демонстрационную историю без сервера
        #[arg(long)]
        demo: bool,

        /// Выводить описание целиком
        #[arg(long)]
        full: bool,
    },

    /// Справочник видов работ
    WorkTypes {
        /// Не обращаться к серверу
        #[arg(long)]
        offline: bool,
    },

    /// Свернуть описание в строку истории (текст или stdin)
    Summarize {
        text: Option<String>,
    },

    /// Собрать описание из полей
    Encode {
        #[arg(short, long, default_value = "")]
        comment: String,

        #[arg(long, default_value = "")]
        volume: String,

        #[arg(long, default_value = "")]
        machines: String,

        #[arg(long, default_value = "")]
        people: String,
    },

    /// Назначения подрядчиков на объекты
    Access {
        /// Только этот пользователь
        #[arg(long)]
        user: Option<u64>,

        /// Назначить пользователю объект (id)
        #[arg(long, requires = "user", conflicts_with = "revoke")]
        assign: Option<String>,

        /// Снять с пользователя объект (id)
        #[arg(long, requires = "user")]
        revoke: Option<String>,
    },

    /// Проверить доступность бэкенда
    Status,

    /// Показать или изменить настройки
    Config {
        /// Адрес бэкенда
        #[arg(long)]
        set_api_url: Option<String>,

        /// Идентификатор пользователя для отчётов
        #[arg(long)]
        set_user_id: Option<String>,

        /// Адрес Web App (для логотипа из `?logo=`)
        #[arg(long)]
        set_webapp_url: Option<String>,

        /// Тема (light/dark-glass/frosted-glass)
        #[arg(long)]
        set_theme: Option<Theme>,

        /// Показать настройки
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_submit() {
        let cli = Cli::try_parse_from([
            "ptobot", "submit", "a.jpg", "b.jpg", "-w", "1", "--volume", "10", "--people", "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Submit { photos, work_type, volume, people, machines, .. } => {
                assert_eq!(photos.len(), 2);
                assert_eq!(work_type.as_deref(), Some("1"));
                assert_eq!(volume, "10");
                assert_eq!(people, "5");
                assert_eq!(machines, "");
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_parse_theme() {
        let cli = Cli::try_parse_from(["ptobot", "config", "--set-theme", "dark-glass"]).unwrap();
        match cli.command {
            Commands::Config { set_theme, .. } => assert_eq!(set_theme, Some(Theme::DarkGlass)),
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_parse_access_assign() {
        let cli =
            Cli::try_parse_from(["ptobot", "access", "--user", "8", "--assign", "2"]).unwrap();
        match cli.command {
            Commands::Access { user, assign, revoke } => {
                assert_eq!(user, Some(8));
                assert_eq!(assign.as_deref(), Some("2"));
                assert_eq!(revoke, None);
            }
            _ => panic!("expected access"),
        }
    }

    #[test]
    fn test_access_change_requires_user() {
        assert!(Cli::try_parse_from(["ptobot", "access", "--assign", "2"]).is_err());
    }

    #[test]
    fn test_global_verbose() {
        let cli = Cli::try_parse_from(["ptobot", "history", "--demo", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
