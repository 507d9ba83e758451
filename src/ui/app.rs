/// Main application structure and lifecycle management
use crate::ai::ResponseSelector;
use crate::config::Config;
use crate::core::{ChatSession, Sender};
use crate::services::Catalog;
use eframe::egui;
use std::sync::Arc;
use super::{chat, chat_bubble};

pub struct AssistantApp {
    pub config: Config,
    pub session: ChatSession,
    pub input_text: String,
}

impl AssistantApp {
    /// Должен вызываться внутри tokio runtime: сессия запускает очередь ассистента
    pub fn new(config: Config, ctx: egui::Context) -> Self {
        let selector = ResponseSelector::new(Catalog::default());
        if selector.catalog().is_empty() {
            log::warn!("⚠️ Каталог пуст, карточки товаров показываться не будут");
        }
        log::info!(
            "📚 Каталог: {} товаров, правил: {}",
            selector.catalog().len(),
            selector.rules().len()
        );

        let notify = Arc::new(move || ctx.request_repaint());
        let session = ChatSession::start(&config, selector, notify);

        Self {
            config,
            session,
            input_text: String::new(),
        }
    }

    /// Общий путь отправки для Enter, кнопки Send и подсказок
    pub fn submit(&mut self, text: &str) {
        if self.session.submit(text) {
            log::info!("💬 Пользователь: {}", text);
        }
    }

    fn send_input(&mut self) {
        let text = std::mem::take(&mut self.input_text);
        if !crate::core::session::is_submittable(&text) {
            // Пробелы оставляем в поле как есть
            self.input_text = text;
            return;
        }
        self.submit(&text);
    }

    fn draw_messages(&mut self, ui: &mut egui::Ui) {
        let mut clicked: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add_space(chat::MESSAGE_SPACING);
                for message in self.session.conversation().messages() {
                    if let Some(label) = chat_bubble::draw_message(ui, message) {
                        clicked = Some(label);
                    }
                    ui.add_space(chat::MESSAGE_SPACING);
                }

                if self.session.is_typing() {
                    chat::draw_typing_indicator(ui);
                }
            });

        if let Some(label) = clicked {
            self.submit(&label);
        }
    }
}

impl eframe::App for AssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Проверяем наличие новых ответов
        let received = self.session.poll();
        if received > 0 {
            log::debug!("📨 Получено ответов: {}", received);
        }

        let header_frame = egui::Frame::new()
            .fill(chat::HEADER_FILL)
            .inner_margin(egui::Margin::same(10));
        egui::TopBottomPanel::top("header")
            .frame(header_frame)
            .show(ctx, |ui| {
                chat::draw_header(ui, &self.config.store_name);
            });

        let input_frame = egui::Frame::new()
            .fill(egui::Color32::from_gray(240))
            .inner_margin(egui::Margin::same(10));
        egui::TopBottomPanel::bottom("input")
            .frame(input_frame)
            .show(ctx, |ui| {
                if chat::draw_input_row(ui, &mut self.input_text) {
                    self.send_input();
                }
            });

        let messages_frame = egui::Frame::new()
            .fill(chat::BACKGROUND_FILL)
            .inner_margin(egui::Margin::symmetric(10, 0));
        egui::CentralPanel::default()
            .frame(messages_frame)
            .show(ctx, |ui| {
                self.draw_messages(ui);
            });
    }
}

impl Drop for AssistantApp {
    fn drop(&mut self) {
        let conversation = self.session.conversation();
        log::info!(
            "👋 Сессия завершена: {} сообщений ({} от пользователя)",
            conversation.len(),
            conversation.count_by(Sender::User)
        );

        if conversation.is_empty() {
            return;
        }

        match conversation.transcript_json() {
            Ok(json) => log::debug!("Переписка:\n{}", json),
            Err(e) => log::warn!("⚠️ Не удалось сериализовать переписку: {}", e),
        }
    }
}
