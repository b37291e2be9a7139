use std::sync::Arc;

use bistro_client_core::{
    navigation::{
        build_menu, can_perform_on, is_public, landing_route, GuardAction, MenuItem, RoutePath,
        RouteGuard,
    },
    Client, UiCallBack,
};
use bistro_shared::{
    const_config::route::{ROUTE_DASHBOARD, ROUTE_ROOT},
    session::Session,
    uac::Permission,
};
use tracing::{debug, info, instrument, warn};

use crate::{
    icons::glyph,
    pages::{UiLogin, UiPage},
    DisplayablePage,
};

/// Enough for public -> dashboard -> landing page
const MAX_REDIRECTS_PER_FRAME: usize = 3;

#[derive(Debug)]
pub struct BistroApp {
    data_shared: DataShared,
    login_page: UiLogin,
    active_page: Option<UiPage>,
    guard: RouteGuard,
    route_state: Option<RouteState>,
}

/// State shared between the app and its pages
#[derive(Debug)]
pub struct DataShared {
    pub client: Client,
    current_path: String,
}

/// What is on screen for a path and session, recomputed only when either changes
#[derive(Debug)]
struct RouteState {
    path: String,
    session: Option<Arc<Session>>,
    screen: Screen,
    menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Login,
    Page,
    NotFound,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Show(Screen),
    Redirect(&'static str),
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
struct PersistedState {
    last_path: String,
    last_email: String,
}

impl DataShared {
    pub fn new(client: Client, current_path: String) -> Self {
        Self {
            client,
            current_path,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Takes effect from the next frame
    #[instrument(skip(self))]
    pub fn navigate_to(&mut self, path: &str) {
        if self.current_path != path {
            self.current_path = path.to_string();
        }
    }

    /// Whether the menu entry for the page's resource allows `permission`
    pub fn can_perform<P: DisplayablePage>(&self, permission: Permission) -> bool {
        let session = self.client.session();
        RoutePath::parse(P::route())
            .resource
            .is_some_and(|resource| can_perform_on(session.as_deref(), resource, permission))
    }
}

impl eframe::App for BistroApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        info!("Saving with key: {}", eframe::APP_KEY);
        let state = PersistedState {
            last_path: self.data_shared.current_path.clone(),
            last_email: self.login_page.email().to_string(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &state);
    }

    /// Called each time the UI needs repainting, which may be many times per
    /// second. Put your widgets into a `SidePanel`, `TopPanel`,
    /// `CentralPanel`, `Window` or `Area`.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_route();
        self.top_panel(ctx);
        self.bottom_panel(ctx);
        self.central_panel(ctx);

        // Request repaint after 1 second
        ctx.request_repaint_after(std::time::Duration::from_secs(1));
    }
}

impl BistroApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, client: Client) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let persisted: PersistedState = if let Some(storage) = cc.storage {
            info!("Storage found. Loading...");
            match eframe::get_value(storage, eframe::APP_KEY) {
                Some(value) => {
                    info!("Loaded succeeded");
                    value
                }
                None => {
                    warn!("Load failed");
                    Default::default()
                }
            }
        } else {
            info!("No storage found");
            Default::default()
        };
        Self::with_state(client, persisted)
    }

    fn with_state(client: Client, persisted: PersistedState) -> Self {
        let PersistedState {
            last_path,
            last_email,
        } = persisted;
        let current_path = if last_path.is_empty() {
            ROUTE_ROOT.to_string()
        } else {
            last_path
        };
        Self {
            data_shared: DataShared::new(client, current_path),
            login_page: UiLogin::new(last_email),
            active_page: None,
            guard: RouteGuard::default(),
            route_state: None,
        }
    }

    /// Follows redirects until something can be shown for the current path
    fn sync_route(&mut self) {
        for _ in 0..MAX_REDIRECTS_PER_FRAME {
            let session = self.data_shared.client.session();
            let path = self.data_shared.current_path.clone();
            let previous = self.route_state.take();
            if previous
                .as_ref()
                .is_some_and(|x| x.path == path && x.session == session)
            {
                self.route_state = previous;
                return;
            }

            let menu = match previous {
                Some(state) if state.session == session => state.menu,
                _ => build_menu(session.as_deref()),
            };
            let resolution = self.resolve(session.as_deref(), &path);
            debug!(?resolution, path, "route resolved");
            match resolution {
                Resolution::Show(screen) => {
                    self.route_state = Some(RouteState {
                        path,
                        session,
                        screen,
                        menu,
                    });
                    return;
                }
                Resolution::Redirect(target) => {
                    self.route_state = Some(RouteState {
                        path,
                        session,
                        screen: Screen::Denied,
                        menu,
                    });
                    self.data_shared.navigate_to(target);
                }
            }
        }
        warn!(path = %self.data_shared.current_path, "gave up following redirects");
    }

    fn resolve(&mut self, session: Option<&Session>, path: &str) -> Resolution {
        if self.active_page.as_ref().map(UiPage::route) != Some(path) {
            // Replacing the page drops any request it still had in flight
            self.active_page = UiPage::for_path(path);
        }
        resolve(
            &mut self.guard,
            session,
            path,
            self.active_page.as_ref(),
        )
    }

    fn top_panel(&mut self, ctx: &egui::Context) {
        let mut clicked: Option<String> = None;
        let mut should_logout = false;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                let Some(state) = &self.route_state else {
                    return;
                };
                let Some(session) = &state.session else {
                    return;
                };
                ui.separator();
                for item in &state.menu {
                    let text = format!("{} {}", glyph(item.icon()), item.label());
                    if ui
                        .selectable_label(item.is_active(&state.path), text)
                        .clicked()
                    {
                        clicked = Some(item.href.clone());
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logout").clicked() {
                        should_logout = true;
                    }
                    ui.label(format!(
                        "{} ({})",
                        session.identity().display_name,
                        session.role()
                    ));
                });
            });
        });
        if let Some(href) = clicked {
            self.data_shared.navigate_to(&href);
        }
        if should_logout {
            self.logout();
        }
    }

    fn bottom_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::BOTTOM), |ui| {
                ui.label(current_time());
                ui.weak(self.data_shared.client.server_address());
                egui::warn_if_debug_build(ui);
            });
        });
    }

    fn central_panel(&mut self, ctx: &egui::Context) {
        let screen = self.route_state.as_ref().map(|x| x.screen);
        egui::CentralPanel::default().show(ctx, |ui| match screen {
            Some(Screen::Login) => self.login_page.show(ui, &mut self.data_shared),
            Some(Screen::Page) => match self.active_page.as_mut() {
                Some(page) => page.display_page(ui, &mut self.data_shared),
                None => ui_not_found(ui, &self.data_shared.current_path),
            },
            Some(Screen::NotFound) => ui_not_found(ui, &self.data_shared.current_path),
            Some(Screen::Denied) => self.ui_denied(ui),
            None => {
                ui.spinner();
            }
        });
    }

    fn ui_denied(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Access denied");
            let Some(session) = self.data_shared.client.session() else {
                return;
            };
            ui.label(format!(
                "The {} role cannot open {}",
                session.role(),
                self.data_shared.current_path
            ));
            let landing = landing_route(session.role());
            if landing != self.data_shared.current_path && ui.button("Go to start page").clicked() {
                self.data_shared.navigate_to(landing);
            }
        });
    }

    /// Drops everything the previous session could see
    #[instrument(skip(self))]
    fn logout(&mut self) {
        self.data_shared.client.logout();
        let email = self.login_page.email().to_string();
        self.login_page = UiLogin::new(email);
        self.active_page = None;
        self.guard = RouteGuard::default();
        self.route_state = None;
        self.data_shared.navigate_to(ROUTE_ROOT);
    }
}

/// Public paths show the login form, or move an existing session into the app
fn resolve(
    guard: &mut RouteGuard,
    session: Option<&Session>,
    path: &str,
    page: Option<&UiPage>,
) -> Resolution {
    if is_public(path) {
        return match session {
            Some(_) => Resolution::Redirect(ROUTE_DASHBOARD),
            None => Resolution::Show(Screen::Login),
        };
    }
    guard.set_required_role(page.and_then(UiPage::required_role));
    let decision = guard.on_navigate(session, path);
    match decision.action {
        GuardAction::Redirect(target) => Resolution::Redirect(target),
        GuardAction::ShowDenied => Resolution::Show(Screen::Denied),
        GuardAction::Render if page.is_some() => Resolution::Show(Screen::Page),
        GuardAction::Render => Resolution::Show(Screen::NotFound),
    }
}

fn ui_not_found(ui: &mut egui::Ui, path: &str) {
    ui.vertical_centered(|ui| {
        ui.heading("Page not found");
        ui.label(path);
    });
}

fn current_time() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[inline]
pub fn wake_fn(ctx: egui::Context) -> impl UiCallBack {
    move || ctx.request_repaint()
}

#[cfg(test)]
mod tests {
    use bistro_shared::{
        const_config::route::{ROUTE_HOME, ROUTE_LOGIN, ROUTE_PRODUCTS, ROUTE_USERS},
        uac::{IconKey, Identity, MenuEntry, Role},
    };
    use rstest::rstest;

    use super::*;

    fn session(role: Role) -> Session {
        let identity = Identity {
            id: "1".into(),
            display_name: "Ana Lopez".into(),
            short_name: "Ana".into(),
            email: "ana@bistro.test".into(),
            role,
            active: true,
        };
        let mut menu = vec![MenuEntry::new(
            "Products",
            "products",
            IconKey::Package,
            [Permission::Read, Permission::Write],
        )];
        if role.is_admin() {
            menu.push(MenuEntry::new(
                "Dashboard",
                "dashboard",
                IconKey::BarChart3,
                [Permission::Read],
            ));
            menu.push(MenuEntry::new("Users", "users", IconKey::Users, [Permission::Read]));
        }
        Session::new(identity, menu)
    }

    fn resolve_path(session: Option<&Session>, path: &str) -> Resolution {
        let page = UiPage::for_path(path);
        resolve(&mut RouteGuard::default(), session, path, page.as_ref())
    }

    #[rstest]
    #[case::root(ROUTE_ROOT)]
    #[case::login(ROUTE_LOGIN)]
    fn public_paths_show_login(#[case] path: &str) {
        assert_eq!(resolve_path(None, path), Resolution::Show(Screen::Login));
    }

    #[test]
    fn logged_in_user_leaves_login() {
        assert_eq!(
            resolve_path(Some(&session(Role::Waiter)), ROUTE_ROOT),
            Resolution::Redirect(ROUTE_DASHBOARD)
        );
    }

    #[test]
    fn protected_path_without_session_goes_to_root() {
        assert_eq!(
            resolve_path(None, ROUTE_PRODUCTS),
            Resolution::Redirect(ROUTE_ROOT)
        );
    }

    #[test]
    fn waiter_cannot_reach_users() {
        assert_eq!(
            resolve_path(Some(&session(Role::Waiter)), ROUTE_USERS),
            Resolution::Redirect(ROUTE_PRODUCTS)
        );
    }

    #[rstest]
    #[case::products(ROUTE_PRODUCTS)]
    #[case::users(ROUTE_USERS)]
    #[case::dashboard(ROUTE_DASHBOARD)]
    fn admin_sees_pages(#[case] path: &str) {
        assert_eq!(
            resolve_path(Some(&session(Role::Admin)), path),
            Resolution::Show(Screen::Page)
        );
    }

    #[test]
    fn accessible_path_without_page_is_not_found() {
        assert_eq!(
            resolve_path(Some(&session(Role::Admin)), "/main/products/7"),
            Resolution::Show(Screen::NotFound)
        );
    }

    #[test]
    fn admin_home_goes_to_dashboard() {
        assert_eq!(
            resolve_path(Some(&session(Role::Admin)), ROUTE_HOME),
            Resolution::Redirect(ROUTE_DASHBOARD)
        );
    }

    #[test]
    fn empty_path_state_starts_at_root() {
        let app = BistroApp::with_state(Client::default(), PersistedState::default());
        assert_eq!(app.data_shared.current_path(), ROUTE_ROOT);
    }

    #[test]
    fn logged_out_client_shows_login_after_sync() {
        let mut app = BistroApp::with_state(
            Client::default(),
            PersistedState {
                last_path: ROUTE_USERS.to_string(),
                last_email: "ana@bistro.test".to_string(),
            },
        );
        app.sync_route();
        assert_eq!(app.data_shared.current_path(), ROUTE_ROOT);
        assert_eq!(
            app.route_state.as_ref().map(|x| x.screen),
            Some(Screen::Login)
        );
        assert_eq!(app.login_page.email(), "ana@bistro.test");
    }

    #[test]
    fn can_perform_follows_page_resource() {
        let data_shared = DataShared::new(Client::default(), ROUTE_ROOT.to_string());
        assert!(!data_shared.can_perform::<crate::pages::products::UiProducts>(Permission::Read));
    }
}
