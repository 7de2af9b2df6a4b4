use agify_rs::cli::{self, Resolution};
use agify_rs::{Client, source, stats, viz};
use anyhow::Result;

/// Where the rendered chart lands. Not configurable from the command line;
/// the flag surface is fixed to `-h`, `-f`/`--filename` and `-c`/`--country`.
const PLOT_PATH: &str = "agify.png";

fn main() -> Result<()> {
    env_logger::init();

    let argv: Vec<String> = std::env::args().collect();
    let (args, kwargs) = cli::tokenize(&argv)?;
    let config = match cli::resolve(&args, &kwargs)? {
        Resolution::Help => {
            print!("{}", cli::HELP);
            return Ok(());
        }
        Resolution::Run(config) => config,
    };

    // The names file is read fully and closed before any request goes out.
    let names = source::load_names(&config.filename)?;

    let client = Client::default();
    let responses = client.fetch(&names, config.country.as_deref())?;
    let stats = stats::aggregate(&responses);

    viz::plot_stats(&stats, &config.filename, PLOT_PATH, 1000, 600)?;
    eprintln!("Wrote plot to {}", PLOT_PATH);

    Ok(())
}
