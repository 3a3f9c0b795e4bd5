use std::cell::RefCell;
use std::rc::Rc;

use shopfront_common::catalog::product::Product;
use shopfront_common::dom::ElementAttribute;
use shopfront_common::error::ShopError;
use tracing::info;

use crate::components::product_entry::ProductEntry;
use crate::components::render_unit::{RenderMode, RenderUnit, Renderable, construct};
use crate::ports::inbound::cart_router::CartRouter;
use crate::ports::outbound::host_surface::HostSurface;
use crate::ports::outbound::product_source::ProductSource;

/// The product container and one [`ProductEntry`] per product.
///
/// The list never touches an entry's nodes. It hands each entry the
/// container's id as mount point and the entry attaches itself.
pub struct CatalogList {
    unit: RenderUnit,
    list_id: String,
    currency: String,
    products: RefCell<Vec<Product>>,
    entries: RefCell<Vec<Rc<ProductEntry>>>,
    router: Rc<dyn CartRouter>,
}

impl CatalogList {
    /// Mounts the (still empty) container, then fetches the products from
    /// `source` and renders their entries.
    pub fn new(
        hook_id: &str,
        surface: Rc<dyn HostSurface>,
        source: &dyn ProductSource,
        router: Rc<dyn CartRouter>,
        list_id: &str,
        currency: &str,
    ) -> Result<Rc<Self>, ShopError> {
        let list = Rc::new(Self {
            unit: RenderUnit::new(hook_id, surface),
            list_id: list_id.to_string(),
            currency: currency.to_string(),
            products: RefCell::new(Vec::new()),
            entries: RefCell::new(Vec::new()),
            router,
        });
        let list = construct(list, RenderMode::Immediate)?;
        list.fetch_products(source)?;
        Ok(list)
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    pub fn entries(&self) -> Vec<Rc<ProductEntry>> {
        self.entries.borrow().clone()
    }

    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Populates the collection, and only then renders the entries.
    fn fetch_products(&self, source: &dyn ProductSource) -> Result<(), ShopError> {
        let products = source.fetch_products()?;
        info!(count = products.len(), "fetched products");
        *self.products.borrow_mut() = products;
        self.render_products()
    }

    fn render_products(&self) -> Result<(), ShopError> {
        let products = self.products();
        let mut entries = Vec::with_capacity(products.len());
        for product in products {
            entries.push(ProductEntry::new(
                product,
                &self.list_id,
                Rc::clone(self.unit.surface()),
                Rc::clone(&self.router),
                &self.currency,
            )?);
        }
        self.entries.borrow_mut().extend(entries);
        Ok(())
    }
}

impl Renderable for CatalogList {
    fn unit(&self) -> &RenderUnit {
        &self.unit
    }

    fn mount(&self) -> Result<(), ShopError> {
        self.unit.create_root_element(
            "ul",
            Some("product-list"),
            &[ElementAttribute::new("id", &self.list_id)],
        )?;

        if !self.products.borrow().is_empty() {
            self.render_products()?;
        }
        Ok(())
    }
}
