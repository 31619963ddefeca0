use campus_materials::components::App;
use campus_materials::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Campus Materials starting ({})...", CONFIG.environment);
    log::debug!("API base URL: {}", CONFIG.api_url);

    yew::Renderer::<App>::new().render();
}
