use bistro_shared::{
    catalog::Product,
    const_config::path::{
        PATH_PRODUCTS, PATH_PRODUCTS_CREATE, PATH_PRODUCT_DELETE, PATH_PRODUCT_UPDATE,
    },
    id::DbId,
    req_args::products::ProductReqArgs,
};
use futures::channel::oneshot;

use crate::{
    client::{Endpoint, UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_products<F>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<Vec<Product>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_PRODUCTS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_product<F>(
        &self,
        args: &ProductReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_success(PATH_PRODUCTS_CREATE, Some(args), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_product<F>(
        &self,
        id: DbId,
        args: &ProductReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_success(
            Endpoint::with_id(PATH_PRODUCT_UPDATE, id),
            Some(args),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_product<F>(&self, id: DbId, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_success(
            Endpoint::with_id(PATH_PRODUCT_DELETE, id),
            NO_ARGS,
            ui_notify,
        )
    }
}
