use bistro_shared::{
    catalog::Product, const_config::route::ROUTE_ORDERS_CREATE, orders::OrderDraft,
    uac::Permission,
};
use tracing::info;

use super::{
    data_state::{AwaitingType, DataState, SaveState},
    DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{format_money, ui_error_label, ui_refresh_button},
    DataShared,
};

#[derive(Debug, Default)]
pub struct UiCreateOrder {
    products: DataState<Vec<Product>>,
    draft: OrderDraft,
    save_state: DataState<()>,
    last_placed: Option<String>,
}

impl DisplayablePage for UiCreateOrder {
    displayable_page_common!("New Order", ROUTE_ORDERS_CREATE);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        let can_create = data_shared.can_perform::<Self>(Permission::Create);
        if ui_refresh_button(ui) {
            self.products = Default::default();
        }
        let ctx = ui.ctx().clone();
        self.products.get(ui, None, || {
            AwaitingType(data_shared.client.list_products(wake_fn(ctx)))
        });

        ui.columns(2, |columns| {
            if let Some(products) = self.products.present() {
                ui_product_picker(&mut columns[0], products, &mut self.draft, can_create);
            }
            self.ui_draft(&mut columns[1], data_shared, can_create);
        });
    }
}

impl UiCreateOrder {
    fn ui_draft(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared, can_create: bool) {
        ui.strong("Current order");
        if let Some(msg) = &self.last_placed {
            ui.label(msg);
        }

        match self.save_state.save_outcome() {
            Some(SaveState::Completed) => {
                let msg = format!("Order placed for {}", format_money(self.draft.total()));
                info!("{msg}");
                self.last_placed = Some(msg);
                self.draft.clear();
                self.save_state = Default::default();
            }
            Some(SaveState::Ongoing) => {
                ui.spinner();
                return;
            }
            Some(SaveState::Failed(e)) => ui_error_label(ui, e),
            None => {}
        }

        if self.draft.is_empty() {
            ui.label("Pick products to add them");
            return;
        }

        let mut changes = Vec::new();
        egui::Grid::new("order draft")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                for line in self.draft.lines() {
                    ui.label(&line.product.name);
                    let mut quantity = line.quantity;
                    if ui
                        .add(egui::DragValue::new(&mut quantity).range(0..=999))
                        .changed()
                    {
                        changes.push((line.product.id, quantity));
                    }
                    ui.label(format_money(line.subtotal()));
                    if ui.small_button("✖").on_hover_text("Remove").clicked() {
                        changes.push((line.product.id, 0));
                    }
                    ui.end_row();
                }
            });
        for (product_id, quantity) in changes {
            self.draft.set_quantity(product_id, quantity);
        }

        ui.separator();
        ui.label(format!("Units: {}", self.draft.units()));
        ui.strong(format!("Total: {}", format_money(self.draft.total())));

        ui.horizontal(|ui| {
            if ui
                .add_enabled(can_create, egui::Button::new("Place order"))
                .on_disabled_hover_text("Your account cannot create orders")
                .clicked()
            {
                match self.draft.to_req_args() {
                    Ok(args) => {
                        self.last_placed = None;
                        self.save_state = DataState::AwaitingResponse(AwaitingType(
                            data_shared
                                .client
                                .create_order(&args, wake_fn(ui.ctx().clone())),
                        ));
                    }
                    Err(e) => self.save_state = DataState::Failed(e.to_string()),
                }
            }
            if ui.button("Clear").clicked() {
                self.draft.clear();
                self.save_state = Default::default();
            }
        });
    }
}

fn ui_product_picker(
    ui: &mut egui::Ui,
    products: &[Product],
    draft: &mut OrderDraft,
    can_create: bool,
) {
    ui.strong("Products");
    if products.is_empty() {
        ui.label("No products available");
        return;
    }
    egui::ScrollArea::vertical()
        .id_salt("order products")
        .show(ui, |ui| {
            egui::Grid::new("order product picker")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui| {
                    for product in products {
                        ui.label(&product.name);
                        ui.label(format_money(product.price));
                        if ui
                            .add_enabled(can_create, egui::Button::new("Add"))
                            .clicked()
                        {
                            draft.add(product);
                        }
                        ui.end_row();
                    }
                });
        });
}
