use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "stickerpress", version)]
struct Cli {
    /// Source image to caption (PNG, JPEG, WebP, ...).
    #[arg(long)]
    image: PathBuf,

    /// Caption font file (TTF/OTF).
    #[arg(long)]
    font: PathBuf,

    /// Explicit caption text. The configured trigger token is stripped.
    #[arg(long)]
    caption: Option<String>,

    /// Fallback caption from a quoted message, used when --caption is empty.
    #[arg(long)]
    quoted: Option<String>,

    /// Caption spec JSON (font size, color, margin, trigger). Defaults apply
    /// for missing fields.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = FormatChoice::Webp)]
    format: FormatChoice,

    /// Print diagnostics about caption font resolution (family name).
    #[arg(long)]
    dump_font: bool,

    /// Output file path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Webp,
    Png,
    Jpeg,
}

impl From<FormatChoice> for stickerpress::StickerFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Webp => stickerpress::StickerFormat::WebP,
            FormatChoice::Png => stickerpress::StickerFormat::Png,
            FormatChoice::Jpeg => stickerpress::StickerFormat::Jpeg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let spec = read_spec(cli.spec.as_deref())?;

    let image_bytes = std::fs::read(&cli.image)
        .with_context(|| format!("read image '{}'", cli.image.display()))?;
    let font_bytes =
        std::fs::read(&cli.font).with_context(|| format!("read font '{}'", cli.font.display()))?;

    let mut font =
        stickerpress::CaptionFont::from_bytes(font_bytes, spec.font_size_px, spec.brush())?;

    if cli.dump_font {
        eprintln!("caption font family: {}", font.family_name());
    }

    let caption = stickerpress::resolve_caption(
        cli.caption.as_deref().unwrap_or(""),
        cli.quoted.as_deref(),
        &spec.trigger,
    );

    let frame = stickerpress::render_sticker(&image_bytes, caption.as_deref(), &spec, &mut font)?;
    let bytes = stickerpress::encode_frame(&frame, cli.format.into())?;

    if let Some(parent) = cli.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&cli.out, bytes)
        .with_context(|| format!("write output '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn read_spec(path: Option<&Path>) -> anyhow::Result<stickerpress::CaptionSpec> {
    let Some(path) = path else {
        return Ok(stickerpress::CaptionSpec::default());
    };

    let f = File::open(path).with_context(|| format!("open spec '{}'", path.display()))?;
    let r = BufReader::new(f);
    let spec: stickerpress::CaptionSpec =
        serde_json::from_reader(r).with_context(|| "parse caption spec JSON")?;
    Ok(spec)
}
