use std::cell::Cell;
use std::rc::{Rc, Weak};

use shopfront_common::catalog::product::{Product, format_amount};
use shopfront_common::dom::{Markup, NodeId};
use shopfront_common::error::ShopError;
use tracing::{info, warn};

use crate::cart_store::{CartChange, CartStore};
use crate::components::render_unit::{RenderMode, RenderUnit, Renderable, construct};
use crate::ports::outbound::host_surface::HostSurface;

/// The cart: its total display and the "Order Now" button.
///
/// Item changes go through [`CartView::set_items`]. The view subscribes its
/// own total renderer to the underlying [`CartStore`], so every change is
/// reflected in the total before `set_items` returns.
pub struct CartView {
    unit: RenderUnit,
    store: CartStore,
    currency: String,
    total_output: Cell<Option<NodeId>>,
    this: Weak<CartView>,
}

impl CartView {
    pub fn new(
        hook_id: &str,
        surface: Rc<dyn HostSurface>,
        currency: &str,
    ) -> Result<Rc<Self>, ShopError> {
        let cart = Rc::new_cyclic(|this| Self {
            unit: RenderUnit::new(hook_id, surface),
            store: CartStore::new(),
            currency: currency.to_string(),
            total_output: Cell::new(None),
            this: this.clone(),
        });
        let cart = construct(cart, RenderMode::Immediate)?;

        let this = Rc::downgrade(&cart);
        cart.store.subscribe(move |change: &CartChange<'_>| match this.upgrade() {
            Some(cart) => cart.render_total(change.total),
            None => Ok(()),
        });
        Ok(cart)
    }

    /// Replaces the whole item collection and re-renders the total.
    pub fn set_items(&self, items: Vec<Product>) -> Result<(), ShopError> {
        self.store.replace(items)
    }

    /// Appends `product` by replacing the collection with `old + product`.
    pub fn add_product(&self, product: Product) -> Result<(), ShopError> {
        let mut updated = self.store.items();
        updated.push(product);
        self.set_items(updated)
    }

    pub fn items(&self) -> Vec<Product> {
        self.store.items()
    }

    pub fn total_amount(&self) -> f64 {
        self.store.total_amount()
    }

    /// Reports the current items as an order. The cart is left as it is.
    pub fn order_products(&self) -> Vec<Product> {
        let items = self.items();
        let titles: Vec<&str> = items.iter().map(|p| p.title.as_str()).collect();
        info!(
            items = ?titles,
            total = %format_amount(&self.currency, self.total_amount()),
            "ordering products"
        );
        items
    }

    /// The node holding the total text, once mounted.
    pub fn total_output(&self) -> Option<NodeId> {
        self.total_output.get()
    }

    fn total_text(&self, total: f64) -> String {
        format!("Total: {}", format_amount(&self.currency, total))
    }

    fn render_total(&self, total: f64) -> Result<(), ShopError> {
        if let Some(node) = self.total_output.get() {
            self.unit
                .surface()
                .set_inner_markup(node, &[Markup::text(self.total_text(total))])?;
        }
        Ok(())
    }
}

impl Renderable for CartView {
    fn unit(&self) -> &RenderUnit {
        &self.unit
    }

    fn mount(&self) -> Result<(), ShopError> {
        let section = self.unit.create_root_element("section", Some("cart"), &[])?;
        let surface = self.unit.surface();
        surface.set_inner_markup(
            section,
            &[
                Markup::element("h2").child(Markup::text(self.total_text(self.total_amount()))),
                Markup::element("button").child(Markup::text("Order Now")),
            ],
        )?;

        let button = surface.query_selector(section, "button")?;
        let this = self.this.clone();
        surface.add_event_listener(
            button,
            "click",
            Rc::new(move || -> Result<(), ShopError> {
                match this.upgrade() {
                    Some(cart) => {
                        cart.order_products();
                    }
                    None => warn!("order clicked on a dropped cart"),
                }
                Ok(())
            }),
        )?;

        self.total_output
            .set(Some(surface.query_selector(section, "h2")?));
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory_document::MemoryDocument;

    fn product(price: f64) -> Product {
        Product::new("A Product", "", price, "").unwrap()
    }

    fn cart() -> (Rc<MemoryDocument>, Rc<CartView>) {
        let doc = Rc::new(MemoryDocument::with_mount_point("app"));
        let cart = CartView::new("app", doc.clone(), "€").unwrap();
        (doc, cart)
    }

    fn displayed_total(doc: &MemoryDocument, cart: &CartView) -> String {
        doc.text_content(cart.total_output().unwrap()).unwrap()
    }

    #[test]
    fn test_initial_render() {
        let (doc, cart) = cart();
        let section = cart.root().unwrap();
        assert_eq!(doc.attribute(section, "class").unwrap().as_deref(), Some("cart"));
        assert_eq!(displayed_total(&doc, &cart), "Total: € 0.00");
        let button = doc.query_selector(section, "button").unwrap();
        assert_eq!(doc.text_content(button).unwrap(), "Order Now");
    }

    #[test]
    fn test_add_product_updates_total_each_time() {
        let (doc, cart) = cart();
        cart.add_product(product(34.95)).unwrap();
        assert_eq!(displayed_total(&doc, &cart), "Total: € 34.95");
        cart.add_product(product(83.75)).unwrap();
        assert_eq!(displayed_total(&doc, &cart), "Total: € 118.70");
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_set_items_replaces_collection() {
        let (doc, cart) = cart();
        cart.add_product(product(10.0)).unwrap();
        cart.set_items(vec![product(1.25), product(2.5)]).unwrap();
        assert_eq!(cart.items(), vec![product(1.25), product(2.5)]);
        assert_eq!(displayed_total(&doc, &cart), "Total: € 3.75");

        cart.set_items(Vec::new()).unwrap();
        assert_eq!(displayed_total(&doc, &cart), "Total: € 0.00");
    }

    #[test]
    fn test_order_reports_without_clearing() {
        let (doc, cart) = cart();
        cart.add_product(product(5.0)).unwrap();
        assert_eq!(cart.order_products(), vec![product(5.0)]);

        let button = doc.query_selector(cart.root().unwrap(), "button").unwrap();
        assert_eq!(doc.click(button).unwrap(), 1);
        assert_eq!(cart.items(), vec![product(5.0)]);
        assert_eq!(displayed_total(&doc, &cart), "Total: € 5.00");
    }

    #[test]
    fn test_total_node_is_the_heading() {
        let (doc, cart) = cart();
        let heading = doc.query_selector(cart.root().unwrap(), "h2").unwrap();
        assert_eq!(cart.total_output(), Some(heading));
    }
}
