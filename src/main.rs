use clap::Parser;
use ptobot::{
    access, api, branding, cli, config, error, history, interactive, logging, photos, submit,
};
use access::AccessChange;
use api::{ReportApi, ReportFilter};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use ptobot_common::{catalog, encode, summarize, ReportSession, Tab};
use std::io::Read;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    match cli.command {
        Commands::Submit {
            photos: photo_paths,
            project,
            work_type,
            date,
            volume,
            machines,
            people,
            comment,
            interactive: interactive_mode,
            legacy_photo_field,
            dry_run,
        } => {
            let mut session = ReportSession::new(&config.user_id, &submit::today());
            session.set_theme(config.theme);
            session.set_logo_url(branding::logo_from_webapp_url(&config.webapp_url));
            println!("{}\n", branding::header_line(session.logo_url()));

            let api = ReportApi::from_config(&config)?
                .with_legacy_photo_field(config.legacy_photo_field || legacy_photo_field);
            session.apply_work_types(api.work_types_or_default().await);

            {
                let draft = session.draft_mut();
                if let Some(project) = project {
                    draft.project_id = project;
                }
                if let Some(work_type) = work_type {
                    draft.work_type_id = work_type;
                }
                if let Some(date) = date {
                    draft.date = submit::validate_date(&date)?;
                }
                draft.volume = volume;
                draft.machine_count = machines;
                draft.worker_count = people;
                draft.comment = comment;
            }

            if interactive_mode {
                interactive::fill_draft(&mut session)?;
            }

            session.draft_mut().photos = photos::collect_photos(&photo_paths)?;
            session.draft().validate()?;

            let draft = session.draft();
            println!(
                "- Объект: {}",
                catalog::project_name(session.projects(), &draft.project_id)
            );
            println!(
                "- Вид работ: {}",
                catalog::work_type_name(session.work_types(), &draft.work_type_id)
            );
            println!("- Дата: {}", draft.date);
            println!("- Фото: {}", draft.photos.len());

            if dry_run {
                println!("\nОписание:\n{}", draft.description());
                println!("\n(пробный запуск, отчёт не отправлен)");
                return Ok(());
            }

            let progress = submit::progress_bar();
            let id = submit::submit_draft(&mut session, &api, &progress).await?;
            println!("\n✅ Отчёт успешно отправлен! ID: {}", id);
        }

        Commands::History { user, project, work_type, demo, full } => {
            let mut session = ReportSession::new(&config.user_id, &submit::today());
            session.set_tab(Tab::History);

            let filter = ReportFilter {
                user_id: user,
                project_id: project,
                work_type_id: work_type,
            };

            let records = if demo {
                history::demo_history(&filter)
            } else {
                let api = ReportApi::from_config(&config)?;
                session.apply_work_types(api.work_types_or_default().await);
                history::load_history(&api, &filter).await?
            };

            if records.is_empty() {
                println!("Отчётов пока нет");
            }
            let lines =
                history::render_history(&records, session.work_types(), session.projects(), full);
            for line in lines {
                println!("{}", line);
            }
        }

        Commands::WorkTypes { offline } => {
            let work_types = if offline {
                catalog::default_work_types()
            } else {
                ReportApi::from_config(&config)?.work_types_or_default().await
            };
            for work_type in work_types {
                println!("{}\t{}", work_type.id, work_type.name);
            }
        }

        Commands::Summarize { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            println!("{}", summarize(&text));
        }

        Commands::Encode { comment, volume, machines, people } => {
            println!("{}", encode(&comment, &volume, &machines, &people));
        }

        Commands::Access { user, assign, revoke } => {
            let mut session = ReportSession::new(&config.user_id, &submit::today());
            session.set_tab(Tab::Access);

            let change = assign
                .map(AccessChange::Assign)
                .or(revoke.map(AccessChange::Revoke));
            if let (Some(user_id), Some(change)) = (user, change) {
                if access::apply_change(session.access_mut(), user_id, &change)? {
                    println!("✔ Назначения изменены\n");
                } else {
                    println!("Назначения не изменились\n");
                }
            }

            for line in access::render_access(session.access(), session.projects(), user) {
                println!("{}", line);
            }
        }

        Commands::Status => {
            let api = ReportApi::from_config(&config)?;
            let info = api.root_info().await?;
            println!("Бэкенд: {}", api.base_url());
            println!("Статус: {}", info.status);
            if !info.message.is_empty() {
                println!("{}", info.message);
            }
        }

        Commands::Config { set_api_url, set_user_id, set_webapp_url, set_theme, show } => {
            let mut stored = Config::load_from(&Config::config_path()?)?;
            let mut changed = false;

            if let Some(url) = set_api_url {
                stored.api_url = url;
                changed = true;
            }
            if let Some(user_id) = set_user_id {
                stored.user_id = user_id;
                changed = true;
            }
            if let Some(url) = set_webapp_url {
                stored.webapp_url = url;
                changed = true;
            }
            if let Some(theme) = set_theme {
                stored.theme = theme;
                changed = true;
            }

            if changed {
                stored.save()?;
                println!("✔ Настройки сохранены: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let palette = stored.theme.palette();
                println!("Бэкенд: {}", stored.api_url);
                println!("Пользователь: {}", stored.user_id);
                println!("Web App: {}", stored.webapp_url);
                println!(
                    "Логотип: {}",
                    branding::logo_from_webapp_url(&stored.webapp_url).unwrap_or_else(|| "-".into())
                );
                println!(
                    "Тема: {} (фон {}, акцент {})",
                    stored.theme, palette.background, palette.accent
                );
                println!("Таймаут: {} с", stored.timeout_seconds);
            }
        }
    }

    Ok(())
}
