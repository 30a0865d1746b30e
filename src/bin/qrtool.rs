use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_qr_gen::encoder::bitstream::assemble_codewords;
use rust_qr_gen::encoder::config::default_ec_level;
use rust_qr_gen::encoder::interleave::add_ecc_and_interleave;
use rust_qr_gen::encoder::mask::score_masks;
use rust_qr_gen::encoder::placement::ModuleGrid;
use rust_qr_gen::encoder::tables::ec_block_info;
use rust_qr_gen::payload::{Authentication, Wifi};
use rust_qr_gen::tools::{DEFAULT_BORDER, save_image, to_ascii};
use rust_qr_gen::{ECLevel, EncodeOptions, Segment, Symbol, encode_payload, encode_text_with};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR Gen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and print it or save it as an image
    Encode {
        #[arg(long)]
        text: String,
        /// L, M, Q or H (defaults to QR_DEFAULT_ECC, then H)
        #[arg(long)]
        ecc: Option<ECLevel>,
        #[arg(long, default_value_t = 1)]
        min_version: u8,
        #[arg(long, default_value_t = 40)]
        max_version: u8,
        /// Force a mask id (0-7)
        #[arg(long)]
        mask: Option<u8>,
        /// Keep the requested level even when a stronger one fits
        #[arg(long)]
        no_boost: bool,
        /// Write an image instead of printing
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = 8)]
        scale: u32,
        #[arg(long, default_value_t = DEFAULT_BORDER)]
        border: usize,
    },
    /// Print the penalty of every mask for a piece of text
    Inspect {
        #[arg(long)]
        text: String,
        #[arg(long)]
        ecc: Option<ECLevel>,
    },
    /// Encode Wi-Fi credentials
    Wifi {
        #[arg(long)]
        ssid: String,
        #[arg(long)]
        password: Option<String>,
        /// WPA, WEP or nopass
        #[arg(long, default_value = "WPA")]
        auth: Authentication,
        #[arg(long)]
        hidden: bool,
        #[arg(long)]
        ecc: Option<ECLevel>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            text,
            ecc,
            min_version,
            max_version,
            mask,
            no_boost,
            output,
            scale,
            border,
        } => {
            let mut options = EncodeOptions::new(ecc.unwrap_or_else(default_ec_level))
                .with_version_range(min_version, max_version)
                .with_boost_ecc(!no_boost);
            if let Some(mask) = mask {
                options = options.with_mask(mask);
            }
            let symbol = encode_text_with(&text, &options).context("encoding failed")?;
            print_summary(&symbol);
            match output {
                Some(path) => {
                    save_image(&symbol, &path, scale, border)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", to_ascii(&symbol, border)),
            }
        }
        Command::Inspect { text, ecc } => {
            let options = EncodeOptions::new(ecc.unwrap_or_else(default_ec_level));
            let symbol = encode_text_with(&text, &options).context("encoding failed")?;
            print_summary(&symbol);
            inspect_masks(&text, &symbol)?;
        }
        Command::Wifi {
            ssid,
            password,
            auth,
            hidden,
            ecc,
        } => {
            let mut wifi = Wifi::new(ssid).with_authentication(auth).with_hidden(hidden);
            if let Some(password) = password {
                wifi = wifi.with_psk(password);
            }
            let options = EncodeOptions::new(ecc.unwrap_or_else(default_ec_level));
            let symbol = encode_payload(&wifi, &options).context("encoding failed")?;
            print_summary(&symbol);
            print!("{}", to_ascii(&symbol, DEFAULT_BORDER));
        }
    }
    Ok(())
}

fn print_summary(symbol: &Symbol) {
    println!(
        "Version {} ({}x{}), level {:?}, mask {}",
        symbol.version(),
        symbol.size(),
        symbol.size(),
        symbol.ec_level(),
        symbol.mask().id()
    );
}

/// Re-run placement for the chosen version and level and score every mask
fn inspect_masks(text: &str, symbol: &Symbol) -> Result<()> {
    let version = symbol.version();
    let ec_level = symbol.ec_level();
    let segments = Segment::make_segments(text);
    let data = assemble_codewords(&segments, version, ec_level).context("assembly failed")?;
    let codewords = add_ecc_and_interleave(&data, &ec_block_info(version, ec_level));

    let mut grid = ModuleGrid::new(version);
    grid.draw_codewords(&codewords);
    for score in score_masks(&grid, ec_level) {
        let marker = if score.mask == symbol.mask() {
            "  <- chosen"
        } else {
            ""
        };
        println!("mask {}: penalty {}{}", score.mask.id(), score.penalty, marker);
    }
    Ok(())
}
