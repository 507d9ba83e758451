/// Модуль для инициализации логирования
/// Логирует в файл logs/luxe.log, если файл недоступен - в stderr

use std::io::Write;
use log::LevelFilter;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "logs/luxe.log";

fn open_log_file() -> std::io::Result<std::fs::File> {
    std::fs::create_dir_all(LOG_DIR)?;
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
}

pub fn init() {
    let mut builder = env_logger::Builder::new();

    // Читаем RUST_LOG переменную если она установлена
    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // Отключаем логи от зависимостей (слишком многословно)
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
        builder.filter_module("winit", LevelFilter::Warn);
    }

    // Формат логов: [HH:MM:SS LEVEL] модуль - сообщение
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    let file_error = match open_log_file() {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            None
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr);
            Some(e)
        }
    };

    if builder.try_init().is_err() {
        // Логгер уже установлен (повторный вызов)
        return;
    }

    match file_error {
        None => log::info!("Логирование инициализировано ✓"),
        Some(e) => log::warn!("⚠️ Не удалось открыть {}: {}, пишем в stderr", LOG_FILE, e),
    }
}
