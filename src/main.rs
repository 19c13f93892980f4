use clap::{Parser, Subcommand};
use gravatar_url::{Dimensions, Gravatar, Rating, config};
use std::path::{Path, PathBuf};

/// Per-call rating override.
#[derive(clap::Args, Clone)]
struct RatingArgs {
    /// Highest rating to serve (g, pg, r, x); defaults to gravatar.maxRating
    #[arg(long)]
    rating: Option<Rating>,
}

#[derive(Parser)]
#[command(name = "gravatar")]
#[command(about = "Gravatar URLs, <img> tags and existence checks")]
#[command(long_about = "\
Gravatar URLs, <img> tags and existence checks

Settings are read from a TOML file:

  [gravatar]
  default = \"identicon\"   # fallback style or image URL (required)
  size = 80               # default size in pixels (required)
  maxRating = \"g\"         # g, pg, r or x (optional, default g)

Sizes given on the command line are clamped to 1..=512.

Run 'gravatar gen-config' to print a documented gravatar.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "gravatar.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the MD5 hash Gravatar uses for an address
    Hash { email: String },
    /// Print the avatar image URL
    Src {
        email: String,
        /// Size in pixels
        #[arg(long)]
        size: Option<u32>,
        #[command(flatten)]
        rating: RatingArgs,
    },
    /// Print an <img> tag for the avatar
    Image {
        email: String,
        /// Alt text
        #[arg(long)]
        alt: Option<String>,
        #[arg(long)]
        width: Option<u32>,
        /// Height in pixels; also the size requested from Gravatar
        #[arg(long)]
        height: Option<u32>,
        #[command(flatten)]
        rating: RatingArgs,
    },
    /// Check whether an avatar was uploaded for an address
    Exists { email: String },
    /// Print a stock gravatar.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Hash { email } => println!("{}", load_client(&cli.config)?.hash(&email)),
        Command::Src {
            email,
            size,
            rating,
        } => {
            let gravatar = load_client(&cli.config)?;
            println!("{}", gravatar.src(&email, size, rating.rating));
        }
        Command::Image {
            email,
            alt,
            width,
            height,
            rating,
        } => {
            let gravatar = load_client(&cli.config)?;
            let dimensions = Dimensions { width, height };
            println!(
                "{}",
                gravatar.image(&email, alt.as_deref(), dimensions, rating.rating)
            );
        }
        Command::Exists { email } => {
            let uploaded = load_client(&cli.config)?.exists(&email)?;
            println!("{}", if uploaded { "yes" } else { "no" });
            if !uploaded {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Build the client from the config file. A missing file only fails on the
/// required keys, so the error names what to add.
fn load_client(path: &Path) -> Result<Gravatar, config::ConfigError> {
    let repository = config::load_config(path)?;
    Gravatar::from_source(&repository)
}
