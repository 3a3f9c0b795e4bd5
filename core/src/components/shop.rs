use std::rc::Rc;

use shopfront_common::config::Config;
use shopfront_common::error::ShopError;

use crate::components::cart_view::CartView;
use crate::components::catalog_list::CatalogList;
use crate::ports::inbound::cart_router::CartRouter;
use crate::ports::outbound::host_surface::HostSurface;
use crate::ports::outbound::product_source::ProductSource;

/// The cart and the catalog, mounted side by side under one mount point.
pub struct ShopComposite {
    cart: Rc<CartView>,
    catalog: Rc<CatalogList>,
}

impl ShopComposite {
    /// Mounts the cart first, then the catalog, both under `config.mount_point`.
    pub fn new(
        surface: Rc<dyn HostSurface>,
        source: &dyn ProductSource,
        router: Rc<dyn CartRouter>,
        config: &Config,
    ) -> Result<Self, ShopError> {
        let cart = CartView::new(&config.mount_point, Rc::clone(&surface), &config.currency)?;
        let catalog = CatalogList::new(
            &config.mount_point,
            surface,
            source,
            router,
            &config.catalog_list_id,
            &config.currency,
        )?;
        Ok(Self { cart, catalog })
    }

    pub fn cart(&self) -> &Rc<CartView> {
        &self.cart
    }

    pub fn catalog(&self) -> &Rc<CatalogList> {
        &self.catalog
    }
}
