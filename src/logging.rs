//! Настройка логирования
//!
//! Сообщения для пользователя печатаются через `println!`, диагностика идёт
//! через `tracing` в stderr. Уровень задаётся `RUST_LOG`, иначе `warn`
//! (`debug` с `--verbose`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "ptobot=debug,ptobot_common=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // повторная инициализация (в тестах) не считается ошибкой
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
