use bistro_shared::{
    const_config::path::{PATH_ORDERS, PATH_ORDERS_CREATE},
    orders::Order,
    req_args::orders::NewOrderReqArgs,
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_orders<F>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<Vec<Order>>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(PATH_ORDERS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_order<F>(
        &self,
        args: &NewOrderReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_success(PATH_ORDERS_CREATE, Some(args), ui_notify)
    }
}
