use colored::*;
use shopfront_common::catalog::product::format_amount;
use shopfront_common::config::Config;

use crate::commands::Session;
use crate::terminal::{colors, print};

pub fn add(session: &Session, positions: &[usize], cfg: &Config) -> anyhow::Result<()> {
    for position in positions {
        let product = session.add_to_cart(*position)?;
        print::print_status(format!(
            "added {} for {}",
            product.title.color(colors::PRIMARY),
            format_amount(&cfg.currency, product.price).color(colors::PRICE)
        ));
    }

    print_cart(session, cfg)
}

pub fn print_cart(session: &Session, cfg: &Config) -> anyhow::Result<()> {
    let items = session.app.cart().items();

    print::header("cart", cfg.quiet);
    if items.is_empty() {
        print::empty_cart();
    }
    for (idx, item) in items.iter().enumerate() {
        print::tree_head(idx + 1, &item.title);
        print::as_tree_one_level(vec![(
            String::from("price"),
            format_amount(&cfg.currency, item.price).color(colors::PRICE),
        )]);
    }

    print::set_key_width(["items", "displayed"]);
    print::aligned_line("items", items.len().to_string());
    print::aligned_line("displayed", session.displayed_total()?.bold());
    print::end_of_program();
    Ok(())
}
