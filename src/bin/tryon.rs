use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tryon", version, about = "Mock virtual try-on compositor (backend: not connected)")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Blend a garment image onto a person image and write the composite.
    Compose(ComposeArgs),
    /// Resize an image into the upload size bounds.
    Normalize(NormalizeArgs),
    /// Write the empty-result placeholder image.
    Placeholder(PlaceholderArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Person (base) image.
    #[arg(long)]
    base: PathBuf,

    /// Garment (overlay) image.
    #[arg(long)]
    overlay: PathBuf,

    /// Output path; `.png`, `.jpg` or `.jpeg`.
    #[arg(long)]
    out: PathBuf,

    /// JSON config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Horizontal offset of the overlay's top-left corner.
    #[arg(long, allow_hyphen_values = true)]
    x: Option<i32>,

    /// Vertical offset of the overlay's top-left corner.
    #[arg(long, allow_hyphen_values = true)]
    y: Option<i32>,

    /// Overlay scale factor (> 0).
    #[arg(long)]
    scale: Option<f32>,

    /// Overlay opacity in [0, 1].
    #[arg(long)]
    opacity: Option<f32>,

    /// Resampling filter for the scaled overlay.
    #[arg(long, value_enum)]
    filter: Option<FilterChoice>,

    /// How overlay pixels are mixed in.
    #[arg(long, value_enum)]
    blend: Option<BlendChoice>,

    /// Normalize both inputs' sizes before compositing.
    #[arg(long)]
    normalize: bool,
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; `.png`, `.jpg` or `.jpeg`.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlaceholderArgs {
    /// Output path; `.png`, `.jpg` or `.jpeg`.
    #[arg(long)]
    out: PathBuf,

    /// Side length in pixels.
    #[arg(long, default_value_t = tryon::PLACEHOLDER_SIDE)]
    side: u32,

    /// Gray level.
    #[arg(long, default_value_t = tryon::PLACEHOLDER_GRAY)]
    gray: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Bilinear,
    Lanczos3,
}

impl From<FilterChoice> for tryon::ResampleFilter {
    fn from(c: FilterChoice) -> Self {
        match c {
            FilterChoice::Nearest => Self::Nearest,
            FilterChoice::Bilinear => Self::Bilinear,
            FilterChoice::Lanczos3 => Self::Lanczos3,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BlendChoice {
    Uniform,
    SourceOver,
}

impl From<BlendChoice> for tryon::BlendMode {
    fn from(c: BlendChoice) -> Self {
        match c {
            BlendChoice::Uniform => Self::Uniform,
            BlendChoice::SourceOver => Self::SourceOver,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Normalize(args) => {
            init_logging(&tryon::LoggingConfig::default())?;
            cmd_normalize(args)
        }
        Command::Placeholder(args) => {
            init_logging(&tryon::LoggingConfig::default())?;
            cmd_placeholder(args)
        }
    }
}

fn init_logging(config: &tryon::LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))
}

fn resolve_config(args: &ComposeArgs) -> anyhow::Result<tryon::TryOnConfig> {
    let mut cfg = match &args.config {
        Some(path) => tryon::TryOnConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => tryon::TryOnConfig::default(),
    };

    if let Some(x) = args.x {
        cfg.placement.x_offset = x;
    }
    if let Some(y) = args.y {
        cfg.placement.y_offset = y;
    }
    if let Some(scale) = args.scale {
        cfg.placement.scale = scale;
    }
    if let Some(opacity) = args.opacity {
        cfg.placement.opacity = opacity.clamp(0.0, 1.0);
    }
    if let Some(filter) = args.filter {
        cfg.filter = filter.into();
    }
    if let Some(blend) = args.blend {
        cfg.blend = blend.into();
    }
    if args.normalize && cfg.normalize.is_none() {
        cfg.normalize = Some(tryon::NormalizeOpts::default());
    }

    cfg.validate().context("invalid compose parameters")?;
    Ok(cfg)
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args)?;
    init_logging(&cfg.logging)?;

    let mut base = tryon::load_image(&args.base)
        .with_context(|| format!("load person image '{}'", args.base.display()))?;
    let mut overlay = tryon::load_image(&args.overlay)
        .with_context(|| format!("load garment image '{}'", args.overlay.display()))?;

    if let Some(opts) = cfg.normalize {
        base = tryon::normalize_image(&base, opts);
        overlay = tryon::normalize_image(&overlay, opts);
    }

    tracing::info!(
        base = ?base.dimensions(),
        overlay = ?overlay.dimensions(),
        placement = ?cfg.placement,
        "compositing"
    );
    let out = tryon::compose_with(&base, &overlay, cfg.placement, cfg.compose_options());

    tryon::save_image(&out, &args.out)
        .with_context(|| format!("write composite '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let img = tryon::load_image(&args.in_path)
        .with_context(|| format!("load image '{}'", args.in_path.display()))?;
    let out = tryon::normalize_image(&img, tryon::NormalizeOpts::default());
    tracing::info!(from = ?img.dimensions(), to = ?out.dimensions(), "normalized");

    tryon::save_image(&out, &args.out)
        .with_context(|| format!("write image '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_placeholder(args: PlaceholderArgs) -> anyhow::Result<()> {
    let img = tryon::placeholder(args.side, args.gray)?;
    tryon::save_image(&img, &args.out)
        .with_context(|| format!("write placeholder '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
