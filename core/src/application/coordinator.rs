use std::cell::OnceCell;
use std::rc::Rc;

use shopfront_common::catalog::product::Product;
use shopfront_common::config::Config;
use shopfront_common::error::ShopError;
use tracing::{debug, info};

use crate::components::cart_view::CartView;
use crate::components::shop::ShopComposite;
use crate::ports::inbound::cart_router::CartRouter;
use crate::ports::outbound::host_surface::HostSurface;
use crate::ports::outbound::product_source::ProductSource;

/// Holds the shop's cart and routes products into it.
///
/// The cart is set exactly once, by [`AppCoordinator::init`], and never
/// replaced. Catalog entries receive the coordinator as their
/// [`CartRouter`], so they keep working against this narrow interface
/// rather than a concrete cart instance.
#[derive(Default)]
pub struct AppCoordinator {
    cart: OnceCell<Rc<CartView>>,
}

impl AppCoordinator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Builds the shop, wiring `this` in as the catalog's cart router, and
    /// keeps the shop's cart.
    ///
    /// # Errors
    /// * [`ShopError::AlreadyInitialized`] - `init` already succeeded once.
    /// * Any error raised while mounting the shop; the coordinator then stays
    ///   uninitialized.
    pub fn init(
        this: &Rc<Self>,
        surface: Rc<dyn HostSurface>,
        source: &dyn ProductSource,
        config: &Config,
    ) -> Result<ShopComposite, ShopError> {
        if this.cart.get().is_some() {
            return Err(ShopError::AlreadyInitialized);
        }

        let router: Rc<dyn CartRouter> = this.clone();
        let shop = ShopComposite::new(surface, source, router, config)?;
        this.cart
            .set(Rc::clone(shop.cart()))
            .map_err(|_| ShopError::AlreadyInitialized)?;

        info!(
            mount = %config.mount_point,
            products = shop.catalog().products().len(),
            "shop initialized"
        );
        Ok(shop)
    }

    pub fn add_product_to_cart(&self, product: Product) -> Result<(), ShopError> {
        let cart = self.cart.get().ok_or(ShopError::NotInitialized)?;
        debug!(title = %product.title, "routing product to cart");
        cart.add_product(product)
    }

    pub fn cart(&self) -> Option<&Rc<CartView>> {
        self.cart.get()
    }
}

impl CartRouter for AppCoordinator {
    fn route_to_cart(&self, product: Product) -> Result<(), ShopError> {
        self.add_product_to_cart(product)
    }
}

/// A started shop: the coordinator together with the composite it built.
pub struct Application {
    coordinator: Rc<AppCoordinator>,
    shop: ShopComposite,
}

impl Application {
    /// Initializes the application. Call once, after `config.mount_point`
    /// exists in `surface`.
    pub fn start(
        surface: Rc<dyn HostSurface>,
        source: &dyn ProductSource,
        config: &Config,
    ) -> Result<Self, ShopError> {
        let coordinator = AppCoordinator::new();
        let shop = AppCoordinator::init(&coordinator, surface, source, config)?;
        Ok(Self { coordinator, shop })
    }

    pub fn coordinator(&self) -> &Rc<AppCoordinator> {
        &self.coordinator
    }

    pub fn shop(&self) -> &ShopComposite {
        &self.shop
    }

    pub fn cart(&self) -> &Rc<CartView> {
        self.shop.cart()
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
    use crate::adapters::outbound::fixture_catalog::FixtureCatalog;
    use crate::adapters::outbound::memory_document::MemoryDocument;
    use crate::components::render_unit::Renderable;

    fn product(price: f64) -> Product {
        Product::new("A Product", "", price, "").unwrap()
    }

    #[test]
    fn test_route_before_init_fails() {
        let coordinator = AppCoordinator::new();
        assert_eq!(
            coordinator.route_to_cart(product(1.0)),
            Err(ShopError::NotInitialized)
        );
        assert!(coordinator.cart().is_none());
    }

    #[test]
    fn test_init_stores_the_shop_cart() {
        let doc = Rc::new(MemoryDocument::with_mount_point("app"));
        let coordinator = AppCoordinator::new();
        let shop = AppCoordinator::init(&coordinator, doc.clone(), &FixtureCatalog, &Config::default())
            .unwrap();
        assert!(Rc::ptr_eq(coordinator.cart().unwrap(), shop.cart()));

        coordinator.add_product_to_cart(product(2.5)).unwrap();
        assert_eq!(shop.cart().total_amount(), 2.5);
    }

    #[test]
    fn test_second_init_is_rejected() {
        let doc = Rc::new(MemoryDocument::with_mount_point("app"));
        let coordinator = AppCoordinator::new();
        let first = AppCoordinator::init(&coordinator, doc.clone(), &FixtureCatalog, &Config::default())
            .unwrap();
        let second = AppCoordinator::init(&coordinator, doc.clone(), &FixtureCatalog, &Config::default());

        assert!(matches!(second, Err(ShopError::AlreadyInitialized)));
        assert!(Rc::ptr_eq(coordinator.cart().unwrap(), first.cart()));
    }

    #[test]
    fn test_failed_init_leaves_coordinator_uninitialized() {
        let doc = Rc::new(MemoryDocument::new());
        let coordinator = AppCoordinator::new();
        let result = AppCoordinator::init(&coordinator, doc, &FixtureCatalog, &Config::default());
        assert!(matches!(result, Err(ShopError::Surface(_))));
        assert!(coordinator.cart().is_none());
    }

    #[test]
    fn test_application_layout() {
        let doc = Rc::new(MemoryDocument::with_mount_point("app"));
        let app = Application::start(doc.clone(), &FixtureCatalog, &Config::default()).unwrap();

        let mount = doc.element_by_id("app").unwrap();
        let children = doc.children(mount).unwrap();
        assert_eq!(
            children,
            vec![app.cart().root().unwrap(), app.shop().catalog().root().unwrap()]
        );
        assert_eq!(app.shop().catalog().entries().len(), 2);
        assert!(Rc::ptr_eq(app.coordinator().cart().unwrap(), app.cart()));
    }

    #[test]
    fn test_entry_click_reaches_cart_through_coordinator() {
        let doc = Rc::new(MemoryDocument::with_mount_point("app"));
        let app = Application::start(doc.clone(), &FixtureCatalog, &Config::default()).unwrap();

        let entries = app.shop().catalog().entries();
        let second = &entries[1];
        let button = doc.query_selector(second.root().unwrap(), "button").unwrap();
        doc.click(button).unwrap();

        assert_eq!(app.cart().items(), vec![second.product().clone()]);
        let total = app.cart().total_output().unwrap();
        assert_eq!(doc.text_content(total).unwrap(), "Total: € 83.75");
    }
}
