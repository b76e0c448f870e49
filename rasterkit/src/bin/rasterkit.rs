use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use config::FileFormat;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use rasterkit::canvas::Image;
use rasterkit::ops::{self, Channels};
use rasterkit::seq::StorageKind;
use rasterkit::settings::Settings;

#[derive(Debug, clap::Parser)]
struct Cli {
    #[arg(long, default_value_t = false)]
    no_color: bool,
    #[arg(short, long)]
    config: Vec<String>,
    /// Pixel container for loaded images (overrides config)
    #[arg(short, long, value_enum)]
    storage: Option<StorageKind>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Zero one or more color channels (red if none are given)
    Suppress {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        red: bool,
        #[arg(long)]
        green: bool,
        #[arg(long)]
        blue: bool,
    },
    /// Write a double-size image holding four quarter turns of a square input
    Rotations { input: PathBuf, output: PathBuf },
    /// Apply a mask file to the gray values of the input
    Mask {
        input: PathBuf,
        mask: PathBuf,
        output: PathBuf,
        /// Clamp the plain weighted sum instead of averaging
        #[arg(long)]
        sum: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(!cli.no_color)
        .init();
    log::debug!("args: {:?}", cli);

    let mut builder = Settings::config_builder();
    for config_path in &cli.config {
        builder = builder.add_source(config::File::new(config_path.as_str(), FileFormat::Toml));
    }
    let config = builder.build()?;
    let settings = Settings::from_config(&config)?;
    log::debug!("settings: {:?}", settings);
    let storage = cli.storage.unwrap_or(settings.storage);

    match &cli.command {
        Commands::Suppress {
            input,
            output,
            red,
            green,
            blue,
        } => {
            let image = rasterkit::io::open(input, storage)?;
            let result = ops::suppress(&image, Channels::new(*red, *green, *blue))?;
            log::info!("writing suppressed image to {:?}", output);
            rasterkit::io::save(&result, output)?;
        }

        Commands::Rotations { input, output } => {
            let image = rasterkit::io::open(input, storage)?;
            let result = ops::rotations(&image)?;
            log::info!(
                "writing {}x{} mosaic to {:?}",
                result.width(),
                result.height(),
                output
            );
            rasterkit::io::save(&result, output)?;
        }

        Commands::Mask {
            input,
            mask,
            output,
            sum,
        } => {
            let image = rasterkit::io::open(input, storage)?;
            let mask = rasterkit::io::read_mask(mask)?;
            let average = settings.mask_average && !sum;
            let result = ops::apply_mask(&image, &mask, average)?;
            log::info!("writing masked image to {:?}", output);
            rasterkit::io::save(&result, output)?;
        }
    }

    Ok(())
}
