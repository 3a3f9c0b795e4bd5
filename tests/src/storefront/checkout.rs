use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shopfront_common::catalog::product::{Product, format_amount};
use shopfront_common::config::Config;
use shopfront_core::adapters::outbound::generated_catalog::GeneratedCatalog;
use shopfront_core::adapters::outbound::memory_document::MemoryDocument;
use shopfront_core::application::coordinator::Application;
use shopfront_core::components::render_unit::Renderable;
use shopfront_core::ports::outbound::host_surface::HostSurface;

const CATALOG_SIZE: usize = 10;

fn start(seed: u64) -> (Rc<MemoryDocument>, Application) {
    let document = Rc::new(MemoryDocument::with_mount_point("app"));
    let source = GeneratedCatalog::new(CATALOG_SIZE).with_seed(seed);
    let app = Application::start(document.clone(), &source, &Config::default()).unwrap();
    (document, app)
}

fn entry_html(document: &MemoryDocument, app: &Application) -> Vec<String> {
    app.shop()
        .catalog()
        .entries()
        .iter()
        .map(|entry| document.outer_html(entry.root().unwrap()).unwrap())
        .collect()
}

/// Random click sequences: after every click the cart grew by exactly the
/// clicked product and the displayed total is the running sum.
#[test]
fn displayed_total_tracks_every_click() {
    for seed in [1_u64, 2, 3, 99] {
        let (document, app) = start(seed);
        let entries = app.shop().catalog().entries();
        let total_node = app.cart().total_output().unwrap();
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
        let mut expected: Vec<Product> = Vec::new();

        for _ in 0..40 {
            let idx: usize = rng.random_range(0..CATALOG_SIZE);
            let button = document
                .query_selector(entries[idx].root().unwrap(), "button")
                .unwrap();
            document.click(button).unwrap();

            expected.push(entries[idx].product().clone());
            let sum: f64 = expected.iter().fold(0.0, |acc, p| acc + p.price);

            assert_eq!(app.cart().items(), expected);
            assert_eq!(
                document.text_content(total_node).unwrap(),
                format!("Total: {}", format_amount("€", sum))
            );
        }
    }
}

#[test]
fn clicks_never_touch_catalog_markup() {
    let (document, app) = start(11);
    let before = entry_html(&document, &app);

    let entries = app.shop().catalog().entries();
    for entry in entries.iter().rev() {
        let button = document.query_selector(entry.root().unwrap(), "button").unwrap();
        document.click(button).unwrap();
    }

    assert_eq!(entry_html(&document, &app), before);
    assert_eq!(app.cart().items().len(), CATALOG_SIZE);
}

#[test]
fn ordering_keeps_the_cart() {
    let (document, app) = start(5);
    app.coordinator()
        .add_product_to_cart(app.shop().catalog().products()[0].clone())
        .unwrap();
    let before = app.cart().items();

    let order_button = document
        .query_selector(app.cart().root().unwrap(), "button")
        .unwrap();
    document.click(order_button).unwrap();

    assert_eq!(app.cart().items(), before);
    assert_eq!(app.cart().order_products(), before);
}
