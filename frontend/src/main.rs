mod components;
mod config;
mod dom;
mod logging;

fn main() {
    logging::init();
    let Some(document) = dom::document() else {
        tracing::warn!("no document, nothing to attach");
        return;
    };
    let config = config::load_page_config(&document);
    components::mount_all(&document, &config);
}
