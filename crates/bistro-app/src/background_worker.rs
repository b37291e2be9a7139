//! Native only. Requests are spawned by `reqwest_cross` onto the tokio runtime
//! created here, which runs on its own thread for the life of the app.

use std::future::pending;

pub fn create_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .thread_name("bistro-worker")
        .enable_all()
        .build()
        .expect("Unable to create Runtime")
}

/// Keeps the runtime driving its tasks until the process exits
pub fn start_background_worker(rt: tokio::runtime::Runtime) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        tracing::info!("Background worker started");
        rt.block_on(pending::<()>())
    })
}
