mod app;

fn main() {
    env_logger::init();
    log::info!("Deskorb starting up");

    app::run();
}
