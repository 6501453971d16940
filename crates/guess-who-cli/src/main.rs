use anyhow::{Context, Result};
use clap::Parser;
use guess_who_cards::{CardOptions, DirFontCache, FontResolver, GoogleFontsFetcher};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "guess-who",
    about = "Generate printable Guess Who card sheets from a folder of portraits",
    version
)]
struct Cli {
    /// Directory of card images
    #[arg(required_unless_present = "generate_config")]
    image_dir: Option<PathBuf>,

    /// Output PDF file
    #[arg(short, long, default_value = "guess_who_cards.pdf")]
    output: PathBuf,

    /// Configuration file (YAML, or JSON by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for downloaded fonts
    #[arg(long, default_value = "fonts")]
    font_dir: PathBuf,

    /// Write the default configuration and exit
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "guess_who_config.yaml"
    )]
    generate_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        CardOptions::default().save(&path).await?;
        println!("Wrote default configuration → {}", path.display());
        return Ok(());
    }

    let image_dir = cli.image_dir.context("an image directory is required")?;

    let options = match &cli.config {
        Some(path) => CardOptions::load(path)
            .await
            .with_context(|| format!("loading config {}", path.display()))?,
        None => {
            log::info!("No config given, using defaults");
            CardOptions::default()
        }
    };
    options.validate()?;

    let deck = guess_who_cards::load_deck(&image_dir, &options).await?;

    let font_name = options.name_label.font.clone();
    let font_dir = cli.font_dir.clone();
    let font = tokio::task::spawn_blocking(move || {
        let cache = DirFontCache::new(font_dir);
        let mut resolver = FontResolver::new(cache, GoogleFontsFetcher::new());
        resolver.resolve(&font_name)
    })
    .await??;
    log::info!("Using font {}", font.name());

    let stats = guess_who_cards::generate_pdf(&deck, &options, &font, &cli.output).await?;

    println!(
        "Generated {} cards × {} set(s) → {} pages ({} sheets per set, {} blank slots) → {}",
        stats.cards,
        stats.sets,
        stats.output_pages,
        stats.sheets_per_set,
        stats.blank_slots,
        cli.output.display()
    );

    Ok(())
}
