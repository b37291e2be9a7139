#[macro_export]
macro_rules! internal_error {
    ($arg: expr) => {{
        let internal_error_msg = format!(
            "{}\ninternal error: {}:{}:{}",
            $arg,
            file!(),
            line!(),
            column!()
        );
        tracing::error!(?internal_error_msg);
        internal_error_msg
    }};
}

/// Use this version if we know that under normal operation this can happen but
/// we wish to monitor it
#[macro_export]
macro_rules! log_err_as_warn {
    ($arg: expr) => {
        if let Err(mishap) = $arg {
            tracing::warn!(?mishap);
        }
    };
}

/// Delivers a response to whoever is still waiting on it. When the receiving
/// side is gone (page closed, logout, ...) the response is stale and dropped.
#[macro_export]
macro_rules! send_or_discard {
    ($tx: expr, $msg: expr) => {
        if $tx.send($msg).is_err() {
            tracing::debug!("receiver dropped before the response arrived; response discarded");
        }
    };
}
