//! Main entry point for kuler-swatch.
//!
//! Loads or creates a default configuration and dispatches one of the
//! subcommands: print random schemes, derive a complementary color, show a
//! color's hsl channels, or open the terminal preview.

mod ui;

use std::error::Error;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kuler_swatch::{tools, Config, Scheme, Swatch};

#[derive(Parser)]
#[command(name = "kuler-swatch", version, about = "Color theme swatch tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print random schemes and their complementary schemes
    Random {
        /// Number of schemes (defaults to the configured count)
        #[arg(short, long)]
        count: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Print the complementary color of a hex color
    Complement {
        /// Color as RRGGBB, with or without a leading '#'
        hex: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the hsl channels of a hex color
    Hsl { hex: String },
    /// Open the terminal preview
    Preview,
}

fn print_scheme(scheme: &Scheme, complement: &Scheme, show_hsl: bool) {
    println!("{} by {}", scheme.title, scheme.author_name);
    for (swatch, comp) in scheme.swatches.iter().zip(&complement.swatches) {
        let mut line = format!(
            "  [{}] #{}  brightness {:.3}  complement #{}",
            swatch.swatch_index,
            swatch.hex_color,
            tools::brightness(swatch),
            comp.hex_color
        );
        if show_hsl {
            let hsl = tools::to_hsl(swatch);
            line.push_str(&format!(
                "  hsl({:.1}, {:.3}, {:.3})",
                hsl.channel_1, hsl.channel_2, hsl.channel_3
            ));
        }
        println!("{line}");
    }
}

/// Entry point for kuler-swatch.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    // Load or create default config
    let config = Config::load();

    match cli.command {
        Command::Random { count, json } => {
            let count = count.unwrap_or(config.scheme_count);
            let schemes: Vec<Scheme> = (0..count).map(|_| tools::random_scheme()).collect();
            let complements = tools::complementary_schemes(&schemes);

            if json || config.output_json {
                let pairs: Vec<_> = schemes
                    .iter()
                    .zip(&complements)
                    .map(|(scheme, complement)| {
                        json!({ "scheme": scheme, "complement": complement })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&pairs)?);
            } else {
                for (scheme, complement) in schemes.iter().zip(&complements) {
                    print_scheme(scheme, complement, config.show_hsl);
                }
            }
        }
        Command::Complement { hex, json } => {
            let swatch = Swatch::parse_hex(&hex)?;
            let complement = tools::complementary(&swatch);
            if json || config.output_json {
                let out = json!({
                    "swatch": swatch,
                    "complement": complement,
                    "brightness": tools::brightness(&swatch),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!(
                    "#{} -> #{}  (brightness {:.3})",
                    swatch.hex_color,
                    complement.hex_color,
                    tools::brightness(&swatch)
                );
            }
        }
        Command::Hsl { hex } => {
            let hsl = tools::to_hsl(&Swatch::parse_hex(&hex)?);
            println!(
                "hsl({:.2}, {:.4}, {:.4})",
                hsl.channel_1, hsl.channel_2, hsl.channel_3
            );
        }
        Command::Preview => {
            ui::show_preview(&config)?;
        }
    }
    Ok(())
}
