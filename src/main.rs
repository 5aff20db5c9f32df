// An interactive campaign atlas made with the Bevy game engine.

use clap::Parser;
use loremap::core::app::create_app;
use loremap::core::cli::CliArgs;
use loremap::core::logger::init_custom_logger;

fn main() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse();
    init_custom_logger(cli_args.debug);

    let mut app = create_app(cli_args)?;
    app.run();
    Ok(())
}
