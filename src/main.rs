// Модули приложения
mod config;
mod ai;
mod services;
mod ui;
mod core;
mod logger;

use anyhow::Context;
use config::Config;
use eframe::NativeOptions;
use ui::AssistantApp;

fn main() -> anyhow::Result<()> {
    // Инициализируем логирование
    logger::init();
    log::info!("💎 Ассистент магазина запущен");

    // Создаем tokio runtime для очереди ответов
    let rt = tokio::runtime::Runtime::new().context("не удалось создать tokio runtime")?;
    let _guard = rt.enter();

    let config = Config::default();
    log::info!("📁 Конфигурация загружена: {:?}", config);
    let title = config.window_title();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([320.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(
            move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
                Ok(Box::new(AssistantApp::new(config, cc.egui_ctx.clone())))
            },
        ),
    )
    .map_err(|e| anyhow::anyhow!("не удалось открыть окно: {}", e))
}
