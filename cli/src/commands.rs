pub mod add;
pub mod order;
pub mod render;

use std::rc::Rc;

use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use shopfront_common::catalog::product::Product;
use shopfront_common::config::Config;
use shopfront_core::adapters::outbound::fixture_catalog::FixtureCatalog;
use shopfront_core::adapters::outbound::generated_catalog::GeneratedCatalog;
use shopfront_core::adapters::outbound::memory_document::MemoryDocument;
use shopfront_core::application::coordinator::Application;
use shopfront_core::components::render_unit::Renderable;
use shopfront_core::ports::outbound::host_surface::HostSurface;
use shopfront_core::ports::outbound::product_source::ProductSource;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "Mounts a catalog and a cart into an in-memory document and drives them.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Use a generated catalog of N products instead of the fixture
    #[arg(long, global = true, value_name = "N")]
    pub generate: Option<usize>,

    /// Seed for the generated catalog
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Currency symbol shown with prices
    #[arg(long, global = true, default_value = "€")]
    pub currency: String,

    /// Id of the element the shop mounts under
    #[arg(long = "mount", global = true, default_value = "app")]
    pub mount_point: String,

    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output; repeat for less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the document once the shop has mounted
    #[command(alias = "r")]
    Render,
    /// Press "Add to Cart" on the products at the given 1-based positions
    #[command(alias = "a")]
    Add {
        #[arg(required = true)]
        positions: Vec<usize>,
    },
    /// Add the given products, then press "Order Now"
    #[command(alias = "o")]
    Order { positions: Vec<usize> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn source(&self) -> Box<dyn ProductSource> {
        match self.generate {
            Some(count) => {
                let catalog = GeneratedCatalog::new(count);
                match self.seed {
                    Some(seed) => Box::new(catalog.with_seed(seed)),
                    None => Box::new(catalog),
                }
            }
            None => Box::new(FixtureCatalog),
        }
    }
}

/// A started shop and the document it is mounted in.
pub struct Session {
    pub document: Rc<MemoryDocument>,
    pub app: Application,
}

impl Session {
    pub fn start(cfg: &Config, source: &dyn ProductSource) -> anyhow::Result<Self> {
        let document = Rc::new(MemoryDocument::with_mount_point(&cfg.mount_point));
        let app = Application::start(document.clone(), source, cfg)
            .context("failed to mount the shop")?;
        Ok(Self { document, app })
    }

    /// Clicks "Add to Cart" on the entry at `position` (1-based).
    pub fn add_to_cart(&self, position: usize) -> anyhow::Result<Product> {
        let entries = self.app.shop().catalog().entries();
        let entry = position
            .checked_sub(1)
            .and_then(|idx| entries.get(idx))
            .ok_or_else(|| {
                anyhow!(
                    "no product at position {position}, the catalog has {} products",
                    entries.len()
                )
            })?;

        let root = entry.root().context("product entry is not mounted")?;
        let button = self.document.query_selector(root, "button")?;
        self.document.click(button)?;
        Ok(entry.product().clone())
    }

    /// Clicks "Order Now" and returns what the cart reported.
    pub fn order(&self) -> anyhow::Result<Vec<Product>> {
        let cart = self.app.cart();
        let root = cart.root().context("cart is not mounted")?;
        let button = self.document.query_selector(root, "button")?;
        self.document.click(button)?;
        Ok(cart.items())
    }

    /// The total exactly as the cart displays it.
    pub fn displayed_total(&self) -> anyhow::Result<String> {
        let node = self
            .app
            .cart()
            .total_output()
            .context("cart total is not mounted")?;
        Ok(self.document.text_content(node)?)
    }
}
