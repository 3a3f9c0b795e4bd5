use std::rc::Rc;

use shopfront_common::config::Config;
use shopfront_common::error::{ShopError, SurfaceError};
use shopfront_core::adapters::outbound::fixture_catalog::FixtureCatalog;
use shopfront_core::adapters::outbound::generated_catalog::GeneratedCatalog;
use shopfront_core::adapters::outbound::memory_document::MemoryDocument;
use shopfront_core::application::coordinator::Application;
use shopfront_core::components::render_unit::Renderable;
use shopfront_core::ports::outbound::host_surface::HostSurface;

fn start(config: &Config) -> (Rc<MemoryDocument>, Application) {
    let document = Rc::new(MemoryDocument::with_mount_point(&config.mount_point));
    let app = Application::start(document.clone(), &FixtureCatalog, config)
        .expect("shop should mount");
    (document, app)
}

fn click_add_to_cart(document: &MemoryDocument, app: &Application, position: usize) {
    let entries = app.shop().catalog().entries();
    let root = entries[position].root().expect("entry is mounted");
    let button = document.query_selector(root, "button").unwrap();
    assert_eq!(document.click(button).unwrap(), 1);
}

fn displayed_total(document: &MemoryDocument, app: &Application) -> String {
    let node = app.cart().total_output().expect("total is mounted");
    document.text_content(node).unwrap()
}

/// Both fixture products added in order end up at the summed total.
#[test]
fn fixture_both_products_total() {
    let (document, app) = start(&Config::default());

    click_add_to_cart(&document, &app, 0);
    assert_eq!(displayed_total(&document, &app), "Total: € 34.95");

    click_add_to_cart(&document, &app, 1);
    assert_eq!(displayed_total(&document, &app), "Total: € 118.70");

    let titles: Vec<String> = app.cart().items().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["A Product 1", "A Product 2"]);
}

#[test]
fn fixture_untouched_total() {
    let (document, app) = start(&Config::default());
    assert_eq!(displayed_total(&document, &app), "Total: € 0.00");
    assert!(app.cart().items().is_empty());
}

#[test]
fn document_layout_after_startup() {
    let (document, _app) = start(&Config::default());
    let html = document.to_html();

    assert!(html.starts_with(
        "<body><div id=\"app\"><section class=\"cart\"><h2>Total: € 0.00</h2>\
         <button>Order Now</button></section><ul class=\"product-list\" id=\"prod-list\">"
    ));
    assert!(html.contains(
        "<li class=\"product-item\"><div><img src=\"https://dummyimage.com/800x320/a89fa8/540075&amp;text=A+Product+Image+1\" alt=\"A Product 1\">"
    ));
    assert!(html.contains("<h3>€ 83.75</h3>"));
    assert!(html.ends_with("</ul></div></body>"));
}

#[test]
fn missing_mount_point_is_fatal() {
    let document = Rc::new(MemoryDocument::with_mount_point("root"));
    let result = Application::start(document.clone(), &FixtureCatalog, &Config::default());

    match result {
        Err(ShopError::Surface(SurfaceError::MissingElement(id))) => assert_eq!(id, "app"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("shop mounted without its mount point"),
    }
    assert_eq!(document.to_html(), "<body><div id=\"root\"></div></body>");
}

#[test]
fn custom_config_is_honored() {
    let config = Config {
        mount_point: String::from("shop"),
        catalog_list_id: String::from("catalog"),
        currency: String::from("$"),
        ..Config::default()
    };
    let (document, app) = start(&config);

    let list = document.element_by_id("catalog").unwrap();
    assert_eq!(document.children(list).unwrap().len(), 2);
    assert!(document.element_by_id("prod-list").is_err());

    click_add_to_cart(&document, &app, 1);
    assert_eq!(displayed_total(&document, &app), "Total: $ 83.75");
}

#[test]
fn generated_catalog_renders_every_product_in_order() {
    let source = GeneratedCatalog::new(12).with_seed(7);
    let document = Rc::new(MemoryDocument::with_mount_point("app"));
    let app = Application::start(document.clone(), &source, &Config::default()).unwrap();

    let catalog = app.shop().catalog();
    let items = document.children(document.element_by_id("prod-list").unwrap()).unwrap();
    assert_eq!(items.len(), 12);
    assert_eq!(catalog.products().len(), 12);

    for (item, product) in items.iter().zip(catalog.products()) {
        let heading = document.query_selector(*item, "h2").unwrap();
        assert_eq!(document.text_content(heading).unwrap(), product.title);
    }
}

#[test]
fn empty_catalog_still_mounts() {
    let document = Rc::new(MemoryDocument::with_mount_point("app"));
    let app = Application::start(document.clone(), &GeneratedCatalog::new(0), &Config::default())
        .unwrap();

    let list = document.element_by_id("prod-list").unwrap();
    assert!(document.children(list).unwrap().is_empty());
    assert_eq!(displayed_total(&document, &app), "Total: € 0.00");
}
