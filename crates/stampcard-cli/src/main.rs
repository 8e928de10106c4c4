//! `stampcard` — renders a loyalty point-card PNG from the command line.
//!
//! One invocation is one render pass: resolve fields from flags and an
//! optional card file, load fonts and the background photo, draw, write the
//! PNG. The renderer itself never fails over field content; the only hard
//! errors here are unusable fonts and unwritable output.

mod card_file;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use stampcard_engine::card::{CardFields, Theme};
use stampcard_engine::logging::{init_logging, LoggingConfig};
use stampcard_engine::paint::Color;
use stampcard_engine::session::{CardSession, SurfaceConfig, EXPORT_FILENAME};

use card_file::CardFile;

/// Render a loyalty point-card image.
#[derive(Debug, Parser)]
#[command(name = "stampcard", version, about)]
struct Args {
    /// Card spec file (JSON); flags below override its values.
    #[arg(long, value_name = "FILE")]
    card: Option<PathBuf>,

    /// Shop name shown at the top of the card.
    #[arg(long)]
    shop_name: Option<String>,

    /// Card title under the shop name.
    #[arg(long)]
    title: Option<String>,

    /// Benefit line under the title.
    #[arg(long)]
    benefit: Option<String>,

    /// Number of stamp circles. 0 draws an empty grid.
    #[arg(long)]
    points: Option<String>,

    /// Attribution, rendered as "Created by <value>". Empty omits the line.
    #[arg(long)]
    created_by: Option<String>,

    /// Card background color (#rrggbb), used when no photo is set.
    #[arg(long, value_name = "COLOR")]
    background_color: Option<String>,

    /// Accent color (#rrggbb) for the title and stamp rings.
    #[arg(long, value_name = "COLOR")]
    accent_color: Option<String>,

    /// Background photo, stretched to fill the card and darkened.
    #[arg(long, value_name = "FILE")]
    background: Option<PathBuf>,

    /// Regular font file (TTF/OTF). Defaults to a system font probe.
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Bold font file. Falls back to the regular face when absent.
    #[arg(long, value_name = "FILE")]
    font_bold: Option<PathBuf>,

    /// Output path for the rendered PNG.
    #[arg(long, short, default_value = EXPORT_FILENAME)]
    out: PathBuf,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = Args::parse();

    let card = match &args.card {
        Some(path) => card_file::load(path)?,
        None => CardFile::default(),
    };

    let fields = resolve_fields(&args, &card);
    let theme = resolve_theme(&args, &card);

    let (regular, bold) = load_fonts(&args)?;
    let mut session =
        CardSession::with_fonts(SurfaceConfig::default(), &regular, bold.as_deref())
            .context("could not load fonts")?;

    if let Some(path) = args.background.as_ref().or(card.background.as_ref()) {
        if !session.load_background(path) {
            log::warn!("ignoring background image {}", path.display());
        }
    }

    let png = session
        .preview_png(&fields, &theme)
        .context("could not encode card")?;
    fs::write(&args.out, &png)
        .with_context(|| format!("could not write {}", args.out.display()))?;

    let config = session.config();
    println!(
        "wrote {} ({}x{})",
        args.out.display(),
        config.width,
        config.height
    );
    Ok(())
}

/// Merges flag and card-file values into render fields, flags first.
///
/// Unset fields stay empty; the renderer substitutes its placeholders.
fn resolve_fields(args: &Args, card: &CardFile) -> CardFields {
    let pick = |flag: &Option<String>, file: &Option<String>| {
        flag.clone().or_else(|| file.clone()).unwrap_or_default()
    };
    CardFields {
        shop_name:  pick(&args.shop_name, &card.shop_name),
        title:      pick(&args.title, &card.title),
        benefit:    pick(&args.benefit, &card.benefit),
        points:     args
            .points
            .clone()
            .or_else(|| card.points.clone().map(card_file::PointsValue::into_raw))
            .unwrap_or_default(),
        created_by: pick(&args.created_by, &card.created_by),
    }
}

fn resolve_theme(args: &Args, card: &CardFile) -> Theme {
    let defaults = Theme::default();
    Theme {
        background: resolve_color(
            args.background_color.as_deref().or(card.background_color.as_deref()),
            defaults.background,
        ),
        accent: resolve_color(
            args.accent_color.as_deref().or(card.accent_color.as_deref()),
            defaults.accent,
        ),
    }
}

/// Bad color input keeps the render alive: warn and fall back.
fn resolve_color(raw: Option<&str>, fallback: Color) -> Color {
    match raw.map(Color::from_hex) {
        Some(Ok(color)) => color,
        Some(Err(e)) => {
            log::warn!("{e}; using default");
            fallback
        }
        None => fallback,
    }
}

const REGULAR_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

const BOLD_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
];

/// Reads the regular/bold font pair, probing system paths when no flag is
/// given. A missing regular font is fatal; a missing bold face just means
/// headings render in the regular weight.
fn load_fonts(args: &Args) -> Result<(Vec<u8>, Option<Vec<u8>>)> {
    let regular = match &args.font {
        Some(path) => fs::read(path)
            .with_context(|| format!("could not read font {}", path.display()))?,
        None => REGULAR_FONT_PATHS
            .iter()
            .find_map(|p| fs::read(p).ok())
            .context("no usable system font found; pass one with --font")?,
    };
    let bold = match &args.font_bold {
        Some(path) => Some(
            fs::read(path)
                .with_context(|| format!("could not read font {}", path.display()))?,
        ),
        // An explicit regular font without an explicit bold face should not
        // get a probed bold from a different family mixed in.
        None if args.font.is_some() => None,
        None => BOLD_FONT_PATHS.iter().find_map(|p| fs::read(p).ok()),
    };
    Ok((regular, bold))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["stampcard"];
        full.extend_from_slice(argv);
        Args::parse_from(full)
    }

    #[test]
    fn flags_override_card_file() {
        let a = args(&["--shop-name", "From Flag", "--points", "7"]);
        let card = CardFile {
            shop_name: Some("From File".into()),
            title: Some("File Title".into()),
            points: Some(card_file::PointsValue::Number(3)),
            ..CardFile::default()
        };
        let fields = resolve_fields(&a, &card);
        assert_eq!(fields.shop_name, "From Flag");
        assert_eq!(fields.title, "File Title");
        assert_eq!(fields.points, "7");
    }

    #[test]
    fn unset_fields_stay_empty() {
        let fields = resolve_fields(&args(&[]), &CardFile::default());
        assert_eq!(fields, CardFields::default());
    }

    #[test]
    fn theme_flags_parse_hex() {
        let a = args(&["--accent-color", "#00ff00"]);
        let theme = resolve_theme(&a, &CardFile::default());
        assert_eq!(theme.accent, Color::rgb(0, 255, 0));
        assert_eq!(theme.background, Theme::default().background);
    }

    #[test]
    fn bad_color_falls_back_to_default() {
        let a = args(&["--accent-color", "chartreuse"]);
        let theme = resolve_theme(&a, &CardFile::default());
        assert_eq!(theme.accent, Theme::default().accent);
    }

    #[test]
    fn out_defaults_to_download_name() {
        assert_eq!(args(&[]).out, PathBuf::from("point-card.png"));
    }
}
