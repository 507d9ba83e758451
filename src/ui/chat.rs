/// Chat window rendering and interaction module
use eframe::egui;

/// Constants for chat window styling
pub const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(7, 94, 84);
pub const BACKGROUND_FILL: egui::Color32 = egui::Color32::from_rgb(236, 229, 221);
pub const INPUT_HINT: &str = "Type a message...";
pub const SEND_BUTTON_WIDTH: f32 = 64.0;
pub const MESSAGE_SPACING: f32 = 8.0;

/// Шапка окна: аватар, название магазина и статус
pub fn draw_header(ui: &mut egui::Ui, store_name: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("💎").size(28.0));
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(format!("{} Assistant", store_name))
                    .strong()
                    .size(16.0)
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                egui::RichText::new("Online • Here to help you find perfect jewellery")
                    .size(11.0)
                    .color(egui::Color32::from_rgb(200, 230, 225)),
            );
        });
    });
}

/// Индикатор "ассистент печатает": три точки, подсвечиваются по очереди
pub fn draw_typing_indicator(ui: &mut egui::Ui) {
    let phase = ((ui.input(|i| i.time) * 3.0) as usize) % 3;

    egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for dot in 0..3 {
                    let color = if dot == phase {
                        egui::Color32::from_gray(90)
                    } else {
                        egui::Color32::from_gray(180)
                    };
                    ui.label(egui::RichText::new("●").size(10.0).color(color));
                }
            });
        });

    // Анимация точек
    ui.ctx().request_repaint_after(std::time::Duration::from_millis(150));
}

/// Строка ввода с кнопкой Send. Возвращает true, если нужно отправить сообщение
pub fn draw_input_row(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    let mut submit = false;

    ui.horizontal(|ui| {
        let field_width = (ui.available_width() - SEND_BUTTON_WIDTH - 8.0).max(80.0);
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text(INPUT_HINT)
                .desired_width(field_width),
        );

        // Отправка по Enter
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
            response.request_focus();
        }

        let can_send = crate::core::session::is_submittable(input_text);
        let send = ui.add_enabled(
            can_send,
            egui::Button::new("Send").min_size(egui::vec2(SEND_BUTTON_WIDTH, 0.0)),
        );
        if send.clicked() {
            submit = true;
        }
    });

    submit
}
