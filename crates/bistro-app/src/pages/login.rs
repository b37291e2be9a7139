use bistro_client_core::LoginOutcome;
use bistro_shared::{
    const_config::route::ROUTE_DASHBOARD, internal_error, req_args::auth::LoginReqArgs,
};
use futures::channel::oneshot;
use secrecy::SecretString;
use std::fmt::Debug;
use tracing::info;

use crate::{app::wake_fn, ui_helpers::ui_password_edit, DataShared};

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug)]
pub struct UiLogin {
    args: LoginReqArgs,
    login_attempt_status: LoginAttemptStatus,
}

type AwaitingType = oneshot::Receiver<anyhow::Result<LoginOutcome>>;

#[derive(Default)]
enum LoginAttemptStatus {
    #[default]
    NotAttempted,
    AwaitingResponse(AwaitingType),
    Failed(String),
}

impl Debug for LoginAttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAttempted => write!(f, "NotAttempted"),
            Self::AwaitingResponse(_) => write!(f, "AwaitingResponse"),
            Self::Failed(e) => f.debug_tuple("Failed").field(e).finish(),
        }
    }
}

impl LoginAttemptStatus {
    fn is_allowed_to_login(&self) -> bool {
        match self {
            LoginAttemptStatus::NotAttempted | LoginAttemptStatus::Failed(_) => true,
            LoginAttemptStatus::AwaitingResponse(_) => false,
        }
    }

    /// Maps the outcome of a finished attempt, `None` means the session is in place
    fn after_outcome(outcome: anyhow::Result<LoginOutcome>) -> Option<Self> {
        match outcome {
            Ok(LoginOutcome::Success(session)) => {
                info!(role = %session.role(), "login succeeded");
                None
            }
            Ok(LoginOutcome::InvalidCredentials) => {
                info!("credentials rejected");
                Some(Self::Failed(MSG_INVALID_CREDENTIALS.to_string()))
            }
            Ok(LoginOutcome::Discarded) => {
                info!("login response arrived after the session changed");
                Some(Self::NotAttempted)
            }
            Err(e) => {
                info!("error returned from client-core: {e:?}");
                Some(Self::Failed(format!("Could not complete login. {e}")))
            }
        }
    }
}

impl UiLogin {
    pub fn new(email: String) -> Self {
        Self {
            args: LoginReqArgs::new(email, SecretString::from("")),
            login_attempt_status: Default::default(),
        }
    }

    pub fn email(&self) -> &str {
        &self.args.email
    }

    fn is_allowed_to_login(&self) -> bool {
        self.args.is_complete() && self.login_attempt_status.is_allowed_to_login()
    }

    fn login_prompt(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let mut lost_focus = ui
            .add(egui::TextEdit::singleline(&mut self.args.email).hint_text("Email"))
            .lost_focus();

        lost_focus =
            ui_password_edit(ui, &mut self.args.password, "Password").lost_focus() || lost_focus;

        if lost_focus && self.is_allowed_to_login() && ui.input(|i| i.key_pressed(egui::Key::Enter))
        {
            self.send_login_attempt(ui, data_shared)
        }
    }

    fn check_login_attempt_status(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        match &mut self.login_attempt_status {
            LoginAttemptStatus::NotAttempted => {
                // No special UI needed
            }
            LoginAttemptStatus::AwaitingResponse(rx) => match rx.try_recv() {
                Ok(Some(outcome)) => match LoginAttemptStatus::after_outcome(outcome) {
                    Some(status) => self.login_attempt_status = status,
                    None => {
                        // Password is not kept around once it has been used
                        self.args.password = SecretString::from("");
                        self.login_attempt_status = LoginAttemptStatus::NotAttempted;
                        data_shared.navigate_to(ROUTE_DASHBOARD);
                        ui.ctx().request_repaint();
                    }
                },
                Ok(None) => {
                    ui.spinner();
                }
                Err(e) => {
                    self.login_attempt_status = LoginAttemptStatus::Failed(internal_error!(
                        format!("login response channel closed: {e}")
                    ));
                }
            },
            LoginAttemptStatus::Failed(e) => {
                let err_msg = format!("Login attempt failed: {e}");
                ui.separator();
                ui.colored_label(ui.visuals().error_fg_color, err_msg);
                if ui.button("Clear error status").clicked() {
                    self.login_attempt_status = LoginAttemptStatus::NotAttempted;
                }
                ui.separator();
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        ui.vertical_centered(|ui| {
            ui.heading("Login");

            self.login_prompt(ui, data_shared);

            self.check_login_attempt_status(ui, data_shared);

            self.login_button(ui, data_shared);
        });
    }

    fn login_button(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        if ui
            .add_enabled(self.is_allowed_to_login(), egui::Button::new("Login"))
            .clicked()
        {
            self.send_login_attempt(ui, data_shared);
        }
    }

    fn send_login_attempt(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let mut args = self.args.clone();
        args.email = args.email.trim().to_string();
        let rx = data_shared.client.login(args, wake_fn(ui.ctx().clone()));
        self.login_attempt_status = LoginAttemptStatus::AwaitingResponse(rx);
    }
}

impl Default for UiLogin {
    fn default() -> Self {
        Self::new(String::new())
    }
}
