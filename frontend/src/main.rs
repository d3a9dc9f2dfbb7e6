use frontend::App;
use yew::Renderer;

fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Swirl wheel starting");

    Renderer::<App>::new().render();
}
