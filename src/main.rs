use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use msxg4::error::AppError;
use msxg4::models::JobConfig;
use msxg4::services::{write_preview, ConversionService};
use screen5::{Color, ConvertError, Encoding};

#[derive(Parser)]
#[command(name = "msxg4", version)]
#[command(about = "Convert images to MSX2 GRAPHICS 4 (SCREEN 5) files")]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PNG into SC5/SR5/DAT/RAW files
    Convert {
        /// Input PNG file
        input: PathBuf,

        /// Output file stem (upper-cased), default NONAME
        #[arg(short, long)]
        name: Option<String>,

        /// Directory receiving the output files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Save the quantized image as PNG (with --encoding none)
        #[arg(long)]
        preview: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },
    /// Print the 16-color palette an image quantizes to
    Palette {
        /// Input PNG file
        input: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },
}

/// Conversion flags shared by all commands. They override the job file.
#[derive(Args)]
struct OptionArgs {
    /// YAML job file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output encoding: sc5, sr5, dat, raw or none
    #[arg(short, long)]
    encoding: Option<Encoding>,

    /// Scatter downsampling error to neighbors
    #[arg(long, overrides_with = "no_dither")]
    dither: bool,

    /// Plain nearest-level downsampling
    #[arg(long, overrides_with = "dither")]
    no_dither: bool,

    /// Write a .PAL file
    #[arg(long, overrides_with = "no_palette")]
    palette: bool,

    /// Do not write a .PAL file
    #[arg(long, overrides_with = "palette")]
    no_palette: bool,

    /// Write a .TXT palette listing
    #[arg(long)]
    text_palette: bool,

    /// Input color standing for transparency, e.g. "#FF00FF"
    #[arg(short, long, conflicts_with = "no_transparency")]
    transparent_color: Option<Color>,

    /// Use all 16 palette entries for image colors
    #[arg(long)]
    no_transparency: bool,
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl OptionArgs {
    fn job_config(&self) -> anyhow::Result<JobConfig> {
        let mut config = match &self.config {
            Some(path) => JobConfig::load(path)?,
            None => JobConfig::default(),
        };
        let options = &mut config.options;

        if let Some(encoding) = self.encoding {
            options.encoding = encoding;
        }
        if let Some(dithering) = flag(self.dither, self.no_dither) {
            options.dithering = dithering;
        }
        if let Some(export) = flag(self.palette, self.no_palette) {
            options.export_palette = export;
        }
        if self.text_palette {
            options.export_text_palette = true;
        }
        if let Some(color) = self.transparent_color {
            options.transparent_color = color;
            options.reserve_transparent_index = true;
        }
        if self.no_transparency {
            options.reserve_transparent_index = false;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            name,
            output_dir,
            preview,
            options,
        } => {
            let mut config = options.job_config()?;
            if let Some(name) = name {
                config.filename = name;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            run_convert_command(&input, config, preview.as_deref())
        }
        Commands::Palette { input, options } => {
            let service = ConversionService::new(options.job_config()?);
            print!("{}", service.palette_listing(&input)?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "msxg4=info,screen5=warn",
        1 => "msxg4=debug,screen5=debug",
        _ => "msxg4=trace,screen5=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn run_convert_command(
    input: &Path,
    config: JobConfig,
    preview: Option<&Path>,
) -> anyhow::Result<()> {
    if let Some(path) = preview.filter(|p| p.exists()) {
        let error = ConvertError::OutputAlreadyExists {
            path: path.to_path_buf(),
        };
        return Err(AppError::from(error).into());
    }

    let service = ConversionService::new(config);
    let report = service.convert_file(input)?;

    if let Some(path) = preview {
        match report.image.preview() {
            Some(image) => write_preview(path, image)?,
            None => tracing::warn!(
                "No preview for {} output, use --encoding none",
                report.image.encoding()
            ),
        }
    }

    for path in &report.written {
        println!("{}", path.display());
    }
    Ok(())
}
