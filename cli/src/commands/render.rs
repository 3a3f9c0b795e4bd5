use colored::*;
use shopfront_common::catalog::product::format_amount;
use shopfront_common::config::Config;

use crate::commands::Session;
use crate::terminal::{colors, print};

pub fn render(session: &Session, cfg: &Config) -> anyhow::Result<()> {
    let entries = session.app.shop().catalog().entries();

    print::header("catalog", cfg.quiet);
    for (idx, entry) in entries.iter().enumerate() {
        let product = entry.product();
        print::tree_head(idx + 1, &product.title);
        print::as_tree_one_level(vec![
            (
                String::from("price"),
                format_amount(&cfg.currency, product.price).color(colors::PRICE),
            ),
            (String::from("image"), product.image.normal()),
            (String::from("about"), product.description.normal()),
        ]);
    }

    print::header("document", cfg.quiet);
    print::print(&session.document.to_html());
    print::end_of_program();
    Ok(())
}
