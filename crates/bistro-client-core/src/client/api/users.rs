use bistro_shared::{
    const_config::path::{PATH_AUTH_REGISTER, PATH_AUTH_USERS, PATH_AUTH_USER_STATUS},
    id::UserId,
    req_args::auth::{RegisterUserReqArgs, UserStatusReqArgs},
    send_or_discard,
    uac::Identity,
};
use futures::channel::oneshot;
use secrecy::ExposeSecret as _;

use crate::{
    client::{process_json_body, Endpoint, UiCallBack, NO_ARGS},
    Client,
};

/// The user list comes wrapped in an object
#[derive(Debug, serde::Deserialize)]
struct UserList {
    data: Vec<Identity>,
}

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_users<F>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<Vec<Identity>>>
    where
        F: UiCallBack,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_json_body::<UserList>(resp).await.map(|x| x.data);
            send_or_discard!(tx, msg);
            ui_notify();
        };
        self.initiate_request(PATH_AUTH_USERS, NO_ARGS, on_done);
        rx
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn register_user<F>(
        &self,
        args: &RegisterUserReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        let args = serde_json::json!({
            "fullName": args.full_name,
            "email": args.email,
            "password": args.password.expose_secret(),
            "role": args.role,
            "isActive": args.is_active,
        });
        self.send_request_expect_success(PATH_AUTH_REGISTER, Some(&args), ui_notify)
    }

    /// Returns the user as updated by the server
    #[tracing::instrument(skip(ui_notify))]
    pub fn set_user_status<F>(
        &self,
        id: &UserId,
        is_active: bool,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Identity>>
    where
        F: UiCallBack,
    {
        self.send_request_expect_json(
            Endpoint::with_id(PATH_AUTH_USER_STATUS, id),
            Some(&UserStatusReqArgs { is_active }),
            ui_notify,
        )
    }
}
