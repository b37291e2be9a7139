use secrecy::{ExposeSecret as _, SecretString};

use crate::shortcuts::{shortcut_button, SHORTCUT_CANCEL, SHORTCUT_REFRESH};

pub fn get_text_height(ui: &mut egui::Ui) -> f32 {
    egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y)
}

pub fn ui_password_edit(
    ui: &mut egui::Ui,
    password: &mut SecretString,
    hint_text: &str,
) -> egui::Response {
    let mut temp = password.expose_secret().to_owned();
    let result = ui.add(
        egui::TextEdit::singleline(&mut temp)
            .password(true)
            .hint_text(hint_text),
    );
    *password = SecretString::from(temp);
    result
}

pub fn readonly_checkbox_no_text(ui: &mut egui::Ui, mut value: bool) {
    ui.add_enabled(false, egui::Checkbox::without_text(&mut value));
}

/// Convenience function to create escape buttons
pub fn ui_escape_button(ui: &mut egui::Ui, caption: impl Into<egui::WidgetText>) -> bool {
    shortcut_button(ui, caption, "", &SHORTCUT_CANCEL)
}

pub fn ui_refresh_button(ui: &mut egui::Ui) -> bool {
    shortcut_button(ui, "⟳ Refresh", "Reload from the server", &SHORTCUT_REFRESH)
}

pub fn ui_error_label(ui: &mut egui::Ui, text: impl Into<egui::RichText>) {
    ui.colored_label(ui.visuals().error_fg_color, text);
}

/// Money is shown with two decimals everywhere
pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}

pub fn format_timestamp(value: Option<&chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|x| {
            x.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}
