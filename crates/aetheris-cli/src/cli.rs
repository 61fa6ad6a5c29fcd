//! Command-line interface for the `aetheris` binary.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};

use aetheris_core::config::DEFAULT_OUTPUT_STEM;
use aetheris_core::{BatchConverter, Config, ConvertError, DiagramSynthesizer, OutputFormat};

use crate::logging::LogFormat;
use crate::serve::{start_server, ServeOptions};

/// Aetheris - turn Java and Kotlin sources into class diagrams
#[derive(Parser)]
#[command(name = "aetheris")]
#[command(about = "Convert Java and Kotlin sources into PlantUML, AML and JSON class diagrams", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ./aetheris.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a source file or directory into a diagram
    Convert {
        /// Source file or directory
        path: PathBuf,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: aml, puml or json (default: from the output extension)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Diagram title (default: the output file name without extension)
        #[arg(long)]
        title: Option<String>,
    },

    /// List supported languages and file extensions
    Extensions,

    /// Run the layout persistence service for the visualizer
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Model JSON served at /api/model
        #[arg(long)]
        model: Option<PathBuf>,

        /// Layout JSON read and written at /api/layout
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// Print the default configuration as TOML
    Config,
}

/// Load configuration from `--config` or the default locations.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().wrap_err("failed to load configuration")?,
    };
    Ok(config)
}

/// Run the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            path,
            output,
            format,
            title,
        } => convert(&config, &path, output, format, title),
        Commands::Extensions => {
            let converter = BatchConverter::from_config(&config);
            for (language, extensions) in converter.registry().list_extractors() {
                let listed: Vec<String> = extensions.iter().map(|e| format!(".{e}")).collect();
                println!("{:<8} {}", language, listed.join(", "));
            }
            Ok(())
        }
        Commands::Serve { port, model, layout } => {
            let mut options = ServeOptions::from(&config.serve);
            if let Some(port) = port {
                options.port = port;
            }
            if let Some(model) = model {
                options.model_path = model;
            }
            if let Some(layout) = layout {
                options.layout_path = layout;
            }

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(start_server(options))
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
            Ok(())
        }
    }
}

fn convert(
    config: &Config,
    path: &Path,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    title: Option<String>,
) -> Result<()> {
    let converter = BatchConverter::from_config(config);
    let files = converter
        .discover(path)
        .wrap_err_with(|| format!("cannot read {}", path.display()))?;

    if files.is_empty() {
        let supported: Vec<String> = converter
            .registry()
            .supported_extensions()
            .iter()
            .map(|e| format!(".{e}"))
            .collect();
        bail!("No supported files found (supported: {})", supported.join(", "));
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {wide_msg}")?.progress_chars("=> "),
    );

    let report = converter.convert_all_with(&files, |file| {
        progress.set_message(file.display().to_string());
        progress.inc(1);
    });
    progress.finish_and_clear();

    for failure in &report.failures {
        eprintln!("Skipped {}: {}", failure.path.display(), failure.error);
    }

    let entities = match report.into_entities() {
        Ok(entities) => entities,
        Err(ConvertError::NoEntities) => bail!("No classes extracted."),
        Err(e) => return Err(e.into()),
    };

    let format = resolve_format(format, output.as_deref(), config)?;
    let output = output.unwrap_or_else(|| default_output(format));
    let to_stdout = output.as_os_str() == "-";

    let title = title.or_else(|| config.output.title.clone()).or_else(|| {
        output
            .file_stem()
            .filter(|_| !to_stdout)
            .map(|stem| stem.to_string_lossy().to_string())
    });

    let synthesizer = DiagramSynthesizer::with_layout(config.layout.clone());
    let text = synthesizer.render(&entities, format, title.as_deref());

    if to_stdout {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
    } else {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output, text).wrap_err_with(|| format!("failed to write {}", output.display()))?;
        eprintln!(
            "Generated {} ({} entities, {} format)",
            output.display(),
            entities.len(),
            format
        );
    }

    Ok(())
}

/// Flag, then a recognized `-o` extension, then the configured default.
fn resolve_format(
    flag: Option<OutputFormat>,
    output: Option<&Path>,
    config: &Config,
) -> Result<OutputFormat> {
    if let Some(format) = flag.or_else(|| output.and_then(OutputFormat::from_extension)) {
        return Ok(format);
    }
    config
        .output
        .format
        .parse::<OutputFormat>()
        .map_err(color_eyre::eyre::Report::msg)
}

/// Output file used when `-o` is omitted: `diagram.<format>`.
fn default_output(format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{DEFAULT_OUTPUT_STEM}.{}", format.name()))
}
