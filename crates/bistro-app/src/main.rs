#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use bistro_app::{
        configuration::get_configuration, startup::native_client, tracing::TraceTarget,
    };
    use clap::Parser;

    let args = bistro_app::cli::Cli::parse();

    match bistro_app::tracing::init(&args) {
        Ok(TraceTarget::File(path)) => println!("Tracing started to file {path:?}"),
        Ok(TraceTarget::Stdout) => {}
        Err(e) => eprintln!("Failed to start tracing: {e}"),
    }

    let configuration = match get_configuration() {
        Ok(configuration) => Some(configuration),
        Err(err) => {
            tracing::error!(?err, "failed to load configuration, using defaults");
            None
        }
    };
    let client = native_client(&args, configuration.as_ref());

    let rt = bistro_app::background_worker::create_runtime();
    let _enter = rt.enter(); // This Guard must be held to call `tokio::spawn` anywhere in the program
    bistro_app::background_worker::start_background_worker(rt); // This is also needed to prevent the runtime from stopping

    let [width, height] = configuration
        .as_ref()
        .map(|x| [x.window.width, x.window.height])
        .unwrap_or([1024.0, 720.0]);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bistro",
        native_options,
        Box::new(|cc| Ok(Box::new(bistro_app::BistroApp::new(cc, client)))),
    )
}

// When compiling to web using trunk
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(bistro_app::wasm_log_level()).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window found")
            .document()
            .expect("No document found (No DOM)");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    Ok(Box::new(bistro_app::BistroApp::new(
                        cc,
                        bistro_app::startup::web_client(),
                    )))
                }),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
