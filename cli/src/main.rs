mod commands;
mod terminal;

use commands::{CommandLine, Commands, Session, add, order, render};
use shopfront_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        mount_point: commands.mount_point.clone(),
        currency: commands.currency.clone(),
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        ..Config::default()
    };
    print::banner(cfg.no_banner, cfg.quiet);

    let source = commands.source();
    let session = Session::start(&cfg, source.as_ref())?;

    match commands.command {
        Commands::Render => render::render(&session, &cfg),
        Commands::Add { positions } => {
            print::header("adding to cart", cfg.quiet);
            add::add(&session, &positions, &cfg)
        }
        Commands::Order { positions } => {
            print::header("placing order", cfg.quiet);
            order::order(&session, &positions, &cfg)
        }
    }
}
