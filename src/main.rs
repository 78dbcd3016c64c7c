use clap::Parser;
use fnombre::cli::Cli;
use fnombre::config::{self, Config, Settings};
use fnombre::{Dictionary, Generator};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> fnombre::Result<()> {
    let file_config = match &cli.config {
        Some(path) => {
            log::debug!("reading config from {}", path.display());
            config::read_config(path)?
        }
        None => Config::default(),
    };
    let settings = Settings::resolve(cli, file_config)?;

    let dict = Dictionary::bundled();
    dict.validate()?;

    let mut gen = Generator::new(dict, settings.generator);
    log::debug!(
        "generating {} name(s), size {}, seed {}",
        settings.quantity,
        gen.config().size,
        gen.seed()
    );

    for _ in 0..settings.quantity {
        let name = gen.generate()?;
        println!("{}", name);
    }
    Ok(())
}
