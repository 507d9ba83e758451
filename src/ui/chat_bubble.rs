/// Пузырь сообщения: текст, карточки товаров, кнопки-подсказки и время
use crate::core::Message;
use crate::services::catalog::Product;
use chrono::{DateTime, Local};
use eframe::egui;

/// Максимальная доля ширины окна под пузырь
pub const BUBBLE_WIDTH_RATIO: f32 = 0.8;
pub const BUBBLE_ROUNDING: u8 = 12;

const USER_FILL: egui::Color32 = egui::Color32::from_rgb(220, 248, 198);
const ASSISTANT_FILL: egui::Color32 = egui::Color32::WHITE;
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);
const TIME_COLOR: egui::Color32 = egui::Color32::from_rgb(130, 130, 130);
const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(248, 246, 240);
const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(225, 215, 190);
const PRICE_COLOR: egui::Color32 = egui::Color32::from_rgb(176, 132, 40);
const QUICK_REPLY_COLOR: egui::Color32 = egui::Color32::from_rgb(7, 94, 84);

/// Время сообщения в формате ЧЧ:ММ
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Рисует сообщение. Возвращает текст подсказки, если по ней кликнули
pub fn draw_message(ui: &mut egui::Ui, message: &Message) -> Option<String> {
    let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;
    let layout = if message.is_user() {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };

    let mut clicked = None;
    ui.with_layout(layout, |ui| {
        let fill = if message.is_user() { USER_FILL } else { ASSISTANT_FILL };

        egui::Frame::new()
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .stroke(egui::Stroke::new(0.5, egui::Color32::from_gray(210)))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    let text = egui::RichText::new(&message.text).size(14.0).color(TEXT_COLOR);
                    ui.add(egui::Label::new(text).wrap());

                    for product in &message.products {
                        draw_product_card(ui, product);
                    }

                    if !message.suggestions.is_empty() {
                        clicked = draw_quick_replies(ui, &message.suggestions);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.label(
                            egui::RichText::new(format_time(&message.timestamp))
                                .size(10.0)
                                .color(TIME_COLOR),
                        );
                    });
                });
            });
    });

    clicked
}

/// Карточка товара: название, цена, описание
pub fn draw_product_card(ui: &mut egui::Ui, product: &Product) {
    ui.add_space(6.0);
    egui::Frame::new()
        .fill(CARD_FILL)
        .corner_radius(8)
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, CARD_STROKE))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(product.name).strong().size(13.0).color(TEXT_COLOR));
            ui.label(egui::RichText::new(product.price).strong().size(13.0).color(PRICE_COLOR));
            let description = egui::RichText::new(product.description)
                .size(11.0)
                .color(TIME_COLOR);
            ui.add(egui::Label::new(description).wrap());
        });
}

fn draw_quick_replies(ui: &mut egui::Ui, suggestions: &[String]) -> Option<String> {
    let mut clicked = None;
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for suggestion in suggestions {
            let button = egui::Button::new(
                egui::RichText::new(suggestion).size(12.0).color(QUICK_REPLY_COLOR),
            )
            .corner_radius(14)
            .stroke(egui::Stroke::new(1.0, QUICK_REPLY_COLOR))
            .fill(egui::Color32::WHITE);

            if ui.add(button).clicked() {
                log::debug!("🟢 Нажата подсказка: {}", suggestion);
                clicked = Some(suggestion.clone());
            }
        }
    });
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_is_hours_and_minutes() {
        let ts = Local.with_ymd_and_hms(2024, 2, 14, 9, 5, 33).unwrap();
        assert_eq!(format_time(&ts), "09:05");
    }
}
