use shopfront_common::catalog::product::{format_amount, total_price};
use shopfront_common::config::Config;

use crate::commands::{Session, add};
use crate::terminal::print;

pub fn order(session: &Session, positions: &[usize], cfg: &Config) -> anyhow::Result<()> {
    for position in positions {
        session.add_to_cart(*position)?;
    }

    let ordered = session.order()?;

    print::header("order", cfg.quiet);
    print::set_key_width(["products", "amount"]);
    print::aligned_line("products", ordered.len().to_string());
    print::aligned_line("amount", format_amount(&cfg.currency, total_price(&ordered)));

    // Ordering reports the cart; it does not empty it.
    add::print_cart(session, cfg)
}
