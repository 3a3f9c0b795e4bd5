use std::rc::{Rc, Weak};

use shopfront_common::catalog::product::Product;
use shopfront_common::dom::Markup;
use shopfront_common::error::ShopError;
use tracing::{debug, warn};

use crate::components::render_unit::{RenderMode, RenderUnit, Renderable, construct};
use crate::ports::inbound::cart_router::CartRouter;
use crate::ports::outbound::host_surface::HostSurface;

/// A single product card with its "Add to Cart" button.
///
/// The entry only knows the [`CartRouter`] it was given, never the cart.
pub struct ProductEntry {
    unit: RenderUnit,
    product: Product,
    currency: String,
    router: Rc<dyn CartRouter>,
    this: Weak<ProductEntry>,
}

impl ProductEntry {
    /// Builds the entry and mounts it under `hook_id`.
    ///
    /// Mounting is deferred past the base construction so that the product is
    /// stored before the first render reads it.
    pub fn new(
        product: Product,
        hook_id: &str,
        surface: Rc<dyn HostSurface>,
        router: Rc<dyn CartRouter>,
        currency: &str,
    ) -> Result<Rc<Self>, ShopError> {
        let entry = Rc::new_cyclic(|this| Self {
            unit: RenderUnit::new(hook_id, surface),
            product,
            currency: currency.to_string(),
            router,
            this: this.clone(),
        });
        let entry = construct(entry, RenderMode::Deferred)?;
        entry.mount()?;
        Ok(entry)
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Raises this entry's product to the cart router.
    pub fn add_to_cart(&self) -> Result<(), ShopError> {
        debug!(title = %self.product.title, "adding product to cart");
        self.router.route_to_cart(self.product.clone())
    }

    fn card(&self) -> Markup {
        let product = &self.product;
        Markup::element("div").children([
            Markup::element("img")
                .attr("src", &product.image)
                .attr("alt", &product.title),
            Markup::element("div")
                .class("product-item__content")
                .child(Markup::element("h2").child(Markup::text(&product.title)))
                .child(
                    Markup::element("h3")
                        .child(Markup::text(format!("{} {}", self.currency, product.price))),
                )
                .child(Markup::element("p").child(Markup::text(&product.description)))
                .child(Markup::element("button").child(Markup::text("Add to Cart"))),
        ])
    }
}

impl Renderable for ProductEntry {
    fn unit(&self) -> &RenderUnit {
        &self.unit
    }

    fn mount(&self) -> Result<(), ShopError> {
        let item = self
            .unit
            .create_root_element("li", Some("product-item"), &[])?;
        let surface = self.unit.surface();
        surface.set_inner_markup(item, &[self.card()])?;

        let button = surface.query_selector(item, "button")?;
        let this = self.this.clone();
        surface.add_event_listener(
            button,
            "click",
            Rc::new(move || -> Result<(), ShopError> {
                match this.upgrade() {
                    Some(entry) => entry.add_to_cart(),
                    None => {
                        warn!("add to cart clicked on a dropped product entry");
                        Ok(())
                    }
                }
            }),
        )?;
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
