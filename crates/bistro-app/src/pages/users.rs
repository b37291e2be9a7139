use bistro_client_core::Client;
use bistro_shared::{
    const_config::route::ROUTE_USERS,
    id::UserId,
    req_args::auth::RegisterUserReqArgs,
    uac::{Identity, Permission, Role, StatusFilter, UserFilter, UserStats},
};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator as _;
use tracing::warn;

use super::{
    data_state::{AwaitingType, DataState, SaveState},
    DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{
        get_text_height, readonly_checkbox_no_text, ui_error_label, ui_escape_button,
        ui_password_edit, ui_refresh_button,
    },
    DataShared,
};

#[derive(Debug, Default)]
pub struct UiUsers {
    should_refresh: bool,
    data_state: DataState<Vec<Identity>>,
    filter: UserFilter,
    register_form: Option<RegisterForm>,
    status_change: Option<StatusChange>,
}

#[derive(Debug, Default)]
struct RegisterForm {
    args: RegisterUserReqArgs,
    save_state: DataState<()>,
}

#[derive(Debug)]
struct StatusChange {
    id: UserId,
    save_state: DataState<Identity>,
}

impl StatusChange {
    fn failure_text(&self, error: &str) -> String {
        format!("Could not update user {}: {error}", self.id)
    }
}

impl DisplayablePage for UiUsers {
    displayable_page_common!("Users", ROUTE_USERS, Role::Admin);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        if self.should_refresh {
            // Filters survive a refresh
            let filter = std::mem::take(&mut self.filter);
            *self = Self {
                filter,
                ..Default::default()
            };
        }
        let can_register = data_shared.can_perform::<Self>(Permission::Create);
        let can_change_status = data_shared.can_perform::<Self>(Permission::Write);

        ui.horizontal(|ui| {
            if ui_refresh_button(ui) {
                self.should_refresh = true;
            }
            if can_register && self.register_form.is_none() && ui.button("Add User").clicked() {
                self.register_form = Some(Default::default());
            }
        });

        if let Some(form) = self.register_form.as_mut() {
            match ui_register_form(ui, &data_shared.client, form) {
                RegisterResult::Open => {}
                RegisterResult::Cancelled => self.register_form = None,
                RegisterResult::Registered => self.should_refresh = true,
            }
            ui.separator();
        }

        self.poll_status_change(ui);

        let ctx = ui.ctx().clone();
        self.data_state.get(ui, None, || {
            AwaitingType(data_shared.client.list_users(wake_fn(ctx)))
        });
        let Some(users) = self.data_state.present() else {
            return;
        };

        ui_stats(ui, &UserStats::from_users(users));
        ui.separator();
        ui_filter(ui, &mut self.filter);
        ui.separator();

        let visible = self.filter.apply(users);
        let is_busy = self.status_change.is_some();
        if let Some((id, is_active)) =
            ui_user_table(ui, &visible, can_change_status && !is_busy)
        {
            self.status_change = Some(StatusChange {
                save_state: DataState::AwaitingResponse(AwaitingType(
                    data_shared
                        .client
                        .set_user_status(&id, is_active, wake_fn(ui.ctx().clone())),
                )),
                id,
            });
        }
    }
}

#[must_use]
#[derive(Debug, PartialEq, Eq)]
enum RegisterResult {
    Open,
    Cancelled,
    Registered,
}

impl UiUsers {
    fn poll_status_change(&mut self, ui: &mut egui::Ui) {
        let Some(change) = self.status_change.as_mut() else {
            return;
        };
        match change.save_state.save_outcome() {
            Some(SaveState::Ongoing) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Updating status of user {}", change.id));
                });
            }
            Some(SaveState::Completed) => {
                if let (Some(updated), Some(users)) = (
                    change.save_state.present().cloned(),
                    self.data_state.present_mut(),
                ) {
                    replace_user(users, updated);
                }
                self.status_change = None;
            }
            Some(SaveState::Failed(e)) => {
                ui_error_label(ui, change.failure_text(&e));
                if ui.button("Dismiss").clicked() {
                    self.status_change = None;
                }
            }
            None => self.status_change = None,
        }
    }
}

/// Swaps in the copy returned by the server, keeping the list order
fn replace_user(users: &mut [Identity], updated: Identity) {
    match users.iter_mut().find(|user| user.id == updated.id) {
        Some(user) => *user = updated,
        None => warn!(id = ?updated.id, "updated user is not in the list"),
    }
}

fn ui_register_form(ui: &mut egui::Ui, client: &Client, form: &mut RegisterForm) -> RegisterResult {
    ui.strong("New user");
    match form.save_state.save_outcome() {
        Some(SaveState::Completed) => return RegisterResult::Registered,
        Some(SaveState::Ongoing) => {
            ui.spinner();
            return RegisterResult::Open;
        }
        Some(SaveState::Failed(e)) => ui_error_label(ui, e),
        None => {}
    }

    egui::Grid::new("register user").num_columns(2).show(ui, |ui| {
        ui.label("Full name");
        ui.text_edit_singleline(&mut form.args.full_name);
        ui.end_row();

        ui.label("Email");
        ui.text_edit_singleline(&mut form.args.email);
        ui.end_row();

        ui.label("Password");
        ui_password_edit(ui, &mut form.args.password, "Password");
        ui.end_row();

        ui.label("Role");
        ui_role_combo(ui, "register role", &mut form.args.role);
        ui.end_row();

        ui.label("Active");
        ui.checkbox(&mut form.args.is_active, "");
        ui.end_row();
    });

    let mut result = RegisterResult::Open;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(form.args.is_complete(), egui::Button::new("Register"))
            .on_disabled_hover_text("Name, a valid email and a password are required")
            .clicked()
        {
            form.save_state = DataState::AwaitingResponse(AwaitingType(
                client.register_user(&form.args, wake_fn(ui.ctx().clone())),
            ));
        }
        if ui_escape_button(ui, "Cancel") {
            result = RegisterResult::Cancelled;
        }
    });
    result
}

fn ui_role_combo(ui: &mut egui::Ui, id_salt: &str, role: &mut Role) {
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(role.to_string())
        .show_ui(ui, |ui| {
            for option in Role::iter() {
                ui.selectable_value(role, option, option.to_string());
            }
        });
}

fn ui_stats(ui: &mut egui::Ui, stats: &UserStats) {
    ui.horizontal(|ui| {
        ui.label(format!("Total: {}", stats.total));
        ui.separator();
        ui.label(format!("Active: {}", stats.active));
        ui.separator();
        ui.label(format!("Administrators: {}", stats.admins));
        ui.separator();
        ui.label(format!("Waiters: {}", stats.waiters));
    });
}

fn ui_filter(ui: &mut egui::Ui, filter: &mut UserFilter) {
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut filter.search).hint_text("Search name or email"));

        egui::ComboBox::from_id_salt("role filter")
            .selected_text(filter.role.map_or("All roles".to_string(), |x| x.to_string()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.role, None, "All roles");
                for option in Role::iter() {
                    ui.selectable_value(&mut filter.role, Some(option), option.to_string());
                }
            });

        egui::ComboBox::from_id_salt("status filter")
            .selected_text(filter.status.label())
            .show_ui(ui, |ui| {
                for option in StatusFilter::iter() {
                    ui.selectable_value(&mut filter.status, option, option.label());
                }
            });

        if ui.button("Clear filters").clicked() {
            *filter = Default::default();
        }
    });
}

/// Returns the user whose status should be toggled and the new value
fn ui_user_table(
    ui: &mut egui::Ui,
    users: &[&Identity],
    can_change_status: bool,
) -> Option<(UserId, bool)> {
    if users.is_empty() {
        ui.label("No users match the filters");
        return None;
    }
    let mut chosen = None;
    let text_height = get_text_height(ui);
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::LEFT))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .min_scrolled_height(0.0)
        .header(text_height, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Email");
            });
            header.col(|ui| {
                ui.strong("Role");
            });
            header.col(|ui| {
                ui.strong("Active");
            });
            header.col(|ui| {
                ui.strong("Actions");
            });
        })
        .body(|body| {
            body.rows(text_height, users.len(), |mut row| {
                let user = users[row.index()];
                row.col(|ui| {
                    ui.label(&user.display_name);
                });
                row.col(|ui| {
                    ui.label(&user.email);
                });
                row.col(|ui| {
                    ui.label(user.role.to_string());
                });
                row.col(|ui| {
                    ui.vertical_centered(|ui| {
                        readonly_checkbox_no_text(ui, user.active);
                    });
                });
                row.col(|ui| {
                    let caption = if user.active { "Deactivate" } else { "Activate" };
                    if ui
                        .add_enabled(can_change_status, egui::Button::new(caption).small())
                        .clicked()
                    {
                        chosen = Some((user.id.clone(), !user.active));
                    }
                });
            });
        });
    chosen
}
