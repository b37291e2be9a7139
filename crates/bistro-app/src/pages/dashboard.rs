use bistro_shared::{
    const_config::route::ROUTE_DASHBOARD,
    orders::{Order, SalesSummary},
};
use egui_extras::{Column, TableBuilder};

use super::{
    data_state::{AwaitingType, DataState},
    DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{format_money, format_timestamp, get_text_height, ui_refresh_button},
    DataShared,
};

#[derive(Debug, Default)]
pub struct UiDashboard {
    data_state: DataState<Vec<Order>>,
}

impl DisplayablePage for UiDashboard {
    displayable_page_common!("Dashboard", ROUTE_DASHBOARD);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        if ui_refresh_button(ui) {
            self.data_state = Default::default();
        }
        let ctx = ui.ctx().clone();
        self.data_state.get(ui, None, || {
            AwaitingType(data_shared.client.list_orders(wake_fn(ctx)))
        });
        if let Some(orders) = self.data_state.present() {
            ui_summary(ui, &SalesSummary::from_orders(orders));
            ui.separator();
            ui.strong("Recent orders");
            ui_order_table(ui, &recent_first(orders));
        }
    }
}

/// Orders without a timestamp go last
fn recent_first(orders: &[Order]) -> Vec<&Order> {
    let mut result: Vec<&Order> = orders.iter().collect();
    result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    result
}

fn ui_summary(ui: &mut egui::Ui, summary: &SalesSummary) {
    egui::Grid::new("sales summary")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("Revenue");
            ui.strong(format_money(summary.revenue));
            ui.end_row();

            ui.label("Orders");
            ui.strong(summary.order_count.to_string());
            ui.end_row();

            ui.label("Units sold");
            ui.strong(summary.units.to_string());
            ui.end_row();

            ui.label("Average order");
            ui.strong(format_money(summary.average_order_value));
            ui.end_row();
        });
}

fn ui_order_table(ui: &mut egui::Ui, orders: &[&Order]) {
    if orders.is_empty() {
        ui.label("No orders yet");
        return;
    }
    let text_height = get_text_height(ui);
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::LEFT))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .min_scrolled_height(0.0)
        .header(text_height, |mut header| {
            header.col(|ui| {
                ui.strong("Order");
            });
            header.col(|ui| {
                ui.strong("Placed");
            });
            header.col(|ui| {
                ui.strong("Units");
            });
            header.col(|ui| {
                ui.strong("Total");
            });
        })
        .body(|body| {
            body.rows(text_height, orders.len(), |mut row| {
                let order = orders[row.index()];
                row.col(|ui| {
                    ui.label(format!("#{}", order.id));
                });
                row.col(|ui| {
                    ui.label(format_timestamp(order.created_at.as_ref()));
                });
                row.col(|ui| {
                    ui.label(order.units().to_string());
                });
                row.col(|ui| {
                    ui.label(format_money(order.total));
                });
            });
        });
}
