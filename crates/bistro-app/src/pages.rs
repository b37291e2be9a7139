use bistro_shared::uac::Role;
use strum::{EnumIter, IntoEnumIterator};

use crate::DataShared;

pub mod dashboard;
pub mod data_state;
pub mod login;
mod macros;
pub mod orders;
pub mod products;
pub mod users;

use dashboard::UiDashboard;
pub use login::UiLogin;
use orders::UiCreateOrder;
use products::UiProducts;
use users::UiUsers;

/// Every screen reachable under the protected prefix
#[derive(Debug, EnumIter)]
pub enum UiPage {
    Dashboard(UiDashboard),
    Products(UiProducts),
    CreateOrder(UiCreateOrder),
    Users(UiUsers),
}

/// Trait for types that can be treated as pages to display
pub trait DisplayablePage: Default {
    /// Heading shown above the page
    fn title() -> &'static str;

    /// The one path this page is shown for
    fn route() -> &'static str;

    /// Role the page is restricted to, if any. Checked in addition to the
    /// menu based access.
    fn required_role() -> Option<Role> {
        None
    }

    /// Displays the page
    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared);
}

macro_rules! do_on_ui_page {
    ($on:ident, $page:ident, $body:expr) => {
        match $on {
            UiPage::Dashboard($page) => $body,
            UiPage::Products($page) => $body,
            UiPage::CreateOrder($page) => $body,
            UiPage::Users($page) => $body,
        }
    };
}

macro_rules! on_page_type {
    ($on:ident, $page_type:ident, $body:expr) => {
        match $on {
            UiPage::Dashboard(_) => {
                type $page_type = UiDashboard;
                $body
            }
            UiPage::Products(_) => {
                type $page_type = UiProducts;
                $body
            }
            UiPage::CreateOrder(_) => {
                type $page_type = UiCreateOrder;
                $body
            }
            UiPage::Users(_) => {
                type $page_type = UiUsers;
                $body
            }
        }
    };
}

impl UiPage {
    /// The page registered for `path` if there is one
    #[tracing::instrument(ret)]
    pub fn for_path(path: &str) -> Option<Self> {
        Self::iter().find(|page| page.route() == path)
    }

    pub fn route(&self) -> &'static str {
        on_page_type!(self, P, P::route())
    }

    pub fn title(&self) -> &'static str {
        on_page_type!(self, P, P::title())
    }

    pub fn required_role(&self) -> Option<Role> {
        on_page_type!(self, P, P::required_role())
    }

    pub fn display_page(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let title = self.title();
        ui.heading(title);
        ui.separator();
        do_on_ui_page!(self, page, page.show(ui, data_shared))
    }
}
