use bistro_client_core::Client;
use bistro_shared::{
    catalog::{Product, ProductDraft},
    const_config::{route::ROUTE_PRODUCTS, validation::VALIDATION_MIN_PRICE},
    id::DbId,
    uac::Permission,
};
use egui_extras::{Column, TableBuilder};

use super::{
    data_state::{AwaitingType, DataState, SaveState},
    DisplayablePage,
};
use crate::{
    app::wake_fn,
    displayable_page_common,
    ui_helpers::{
        format_money, format_timestamp, get_text_height, ui_error_label, ui_escape_button,
        ui_refresh_button,
    },
    DataShared,
};

#[derive(Debug, Default)]
pub struct UiProducts {
    should_refresh: bool,
    data_state: DataState<Vec<Product>>,
    product_op: ProductOp,
}

/// What the user is currently doing to the catalog
#[derive(Debug, Default)]
enum ProductOp {
    #[default]
    None,
    New(ProductForm),
    Edit(DbId, ProductForm),
    Delete(Product, DataState<()>),
}

#[derive(Debug, Default)]
struct ProductForm {
    draft: ProductDraft,
    save_state: DataState<()>,
}

/// Actions available to the current session on this page
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Allowed {
    create: bool,
    write: bool,
    delete: bool,
}

#[must_use]
#[derive(Debug, PartialEq, Eq)]
enum OpResult {
    NoAction,
    Cancel,
    ResetPage,
}

impl DisplayablePage for UiProducts {
    displayable_page_common!("Products", ROUTE_PRODUCTS);

    fn show(&mut self, ui: &mut egui::Ui, data_shared: &mut DataShared) {
        if self.should_refresh {
            *self = Default::default();
        }
        let allowed = Allowed {
            create: data_shared.can_perform::<Self>(Permission::Create),
            write: data_shared.can_perform::<Self>(Permission::Write),
            delete: data_shared.can_perform::<Self>(Permission::Delete),
        };

        ui.horizontal(|ui| {
            if ui_refresh_button(ui) {
                self.should_refresh = true;
            }
            if allowed.create
                && matches!(self.product_op, ProductOp::None)
                && ui.button("Add Product").clicked()
            {
                self.product_op = ProductOp::New(Default::default());
            }
        });

        match ui_product_op(ui, &data_shared.client, &mut self.product_op) {
            OpResult::NoAction => {}
            OpResult::Cancel => self.product_op = ProductOp::None,
            OpResult::ResetPage => self.should_refresh = true,
        }
        ui.separator();

        let ctx = ui.ctx().clone();
        self.data_state.get(ui, None, || {
            AwaitingType(data_shared.client.list_products(wake_fn(ctx)))
        });
        if let Some(products) = self.data_state.present() {
            if let Some(op) = ui_product_table(ui, products, allowed) {
                self.product_op = op;
            }
        }
    }
}

impl ProductForm {
    fn for_product(product: &Product) -> Self {
        Self {
            draft: ProductDraft::from_product(product),
            save_state: Default::default(),
        }
    }
}

fn ui_product_op(ui: &mut egui::Ui, client: &Client, product_op: &mut ProductOp) -> OpResult {
    match product_op {
        ProductOp::None => OpResult::NoAction,
        ProductOp::New(form) => {
            ui.strong("New product");
            ui_product_form(ui, form, |draft, ctx| {
                client.create_product(draft, wake_fn(ctx))
            })
        }
        ProductOp::Edit(id, form) => {
            let id = *id;
            ui.strong(format!("Editing product #{id}"));
            ui_product_form(ui, form, |draft, ctx| {
                client.update_product(id, draft, wake_fn(ctx))
            })
        }
        ProductOp::Delete(product, save_state) => {
            ui.label(format!("Delete \"{}\"?", product.name));
            match save_state.save_outcome() {
                Some(SaveState::Completed) => return OpResult::ResetPage,
                Some(SaveState::Ongoing) => {
                    ui.spinner();
                    return OpResult::NoAction;
                }
                Some(SaveState::Failed(e)) => ui_error_label(ui, e),
                None => {}
            }
            let mut result = OpResult::NoAction;
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    *save_state = DataState::AwaitingResponse(AwaitingType(
                        client.delete_product(product.id, wake_fn(ui.ctx().clone())),
                    ));
                }
                if ui_escape_button(ui, "Cancel") {
                    result = OpResult::Cancel;
                }
            });
            result
        }
    }
}

/// Shows the fields, validation happens before anything is sent
fn ui_product_form<F>(ui: &mut egui::Ui, form: &mut ProductForm, send: F) -> OpResult
where
    F: FnOnce(&ProductDraft, egui::Context) -> futures::channel::oneshot::Receiver<anyhow::Result<()>>,
{
    match form.save_state.save_outcome() {
        Some(SaveState::Completed) => return OpResult::ResetPage,
        Some(SaveState::Ongoing) => {
            ui.spinner();
            return OpResult::NoAction;
        }
        Some(SaveState::Failed(e)) => ui_error_label(ui, e),
        None => {}
    }

    egui::Grid::new("product form").num_columns(2).show(ui, |ui| {
        ui.label("Name");
        ui.text_edit_singleline(&mut form.draft.name);
        ui.end_row();

        ui.label("Price");
        ui.add(
            egui::DragValue::new(&mut form.draft.price)
                .speed(0.1)
                .range(0.0..=f64::MAX)
                .min_decimals(2)
                .max_decimals(2)
                .prefix("$"),
        );
        ui.end_row();
    });

    let validated = form.draft.validated();
    if let Err(e) = &validated {
        ui_error_label(ui, e.to_string());
    }

    let mut result = OpResult::NoAction;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(validated.is_ok(), egui::Button::new("Save"))
            .on_disabled_hover_text(format!(
                "A name and a price of at least {} are required",
                format_money(VALIDATION_MIN_PRICE)
            ))
            .clicked()
        {
            if let Ok(draft) = &validated {
                form.save_state =
                    DataState::AwaitingResponse(AwaitingType(send(draft, ui.ctx().clone())));
            }
        }
        if ui_escape_button(ui, "Cancel") {
            result = OpResult::Cancel;
        }
    });
    result
}

/// Returns the operation chosen from one of the rows
fn ui_product_table(ui: &mut egui::Ui, products: &[Product], allowed: Allowed) -> Option<ProductOp> {
    if products.is_empty() {
        ui.label("No products yet");
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
        .column(Column::remainder())
        .min_scrolled_height(0.0)
        .header(text_height, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Price");
            });
            header.col(|ui| {
                ui.strong("Added");
            });
            header.col(|ui| {
                ui.strong("Actions");
            });
        })
        .body(|body| {
            body.rows(text_height, products.len(), |mut row| {
                let product = &products[row.index()];
                row.col(|ui| {
                    ui.label(&product.name);
                });
                row.col(|ui| {
                    ui.label(format_money(product.price));
                });
                row.col(|ui| {
                    ui.label(format_timestamp(product.created_at.as_ref()));
                });
                row.col(|ui| {
                    if allowed.write && ui.small_button("Edit").clicked() {
                        chosen = Some(ProductOp::Edit(product.id, ProductForm::for_product(product)));
                    }
                    if allowed.delete && ui.small_button("Delete").clicked() {
                        chosen = Some(ProductOp::Delete(product.clone(), Default::default()));
                    }
                });
            });
        });
    chosen
}
