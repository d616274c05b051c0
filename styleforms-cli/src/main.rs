#![doc = include_str!("../../docs/en/cli_usage.md")]

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::EnvFilter;

use styleforms::{
    EditorOptions, MapDocument, MetaKind, MetaProperty, MetaSchema, PathStyle, SelectChoice,
    Shape, ShapeKind, StyleForms,
};

#[derive(Debug, Parser)]
#[command(
    name = "styleforms",
    version,
    about = "Edit map feature styles and metadata in a terminal form"
)]
struct Cli {
    /// Document spec: file path, inline JSON payload, or "-" for stdin
    #[arg(
        short = 'd',
        long = "document",
        value_name = "SPEC",
        conflicts_with = "sample"
    )]
    document: Option<String>,

    /// Edit the built-in sample document instead of loading one
    #[arg(long = "sample")]
    sample: bool,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Where to save the edited document ("-" writes to stdout). Defaults to
    /// the input file, or stdout when the input was not a file.
    #[arg(short = 'o', long = "output", value_name = "DEST")]
    output: Option<String>,

    /// Overwrite the output file even if it already exists
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Append tracing output to this file (the UI owns the terminal)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Replace the color ramp. Accepts multiple values per flag use.
    #[arg(long = "color", value_name = "HEX", num_args = 1.., action = ArgAction::Append)]
    colors: Vec<String>,

    /// Base URL for marker icon images
    #[arg(long = "marker-api", value_name = "URL")]
    marker_api: Option<String>,

    /// Replace the marker icon list. Accepts multiple values per flag use.
    #[arg(long = "icon", value_name = "NAME", num_args = 1.., action = ArgAction::Append)]
    icons: Vec<String>,
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, PartialEq)]
enum Destination {
    File(PathBuf),
    Stdout,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_ref() {
        init_logging(path)?;
    }

    let (document, source_path) = load_input(&cli)?;
    let destination = resolve_destination(&cli, source_path.as_deref())?;
    info!(shapes = document.len(), "loaded document");

    let mut ui = StyleForms::new(document).with_options(editor_options(&cli));
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }

    let edited = ui.run().map_err(Report::msg)?;

    write_document(&edited, &destination, !cli.no_pretty)?;
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("styleforms=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_input(cli: &Cli) -> Result<(MapDocument, Option<PathBuf>)> {
    if cli.sample {
        return Ok((sample_document(), None));
    }
    let Some(spec) = cli.document.as_deref() else {
        return Err(eyre!("provide --document or --sample"));
    };

    if spec == "-" {
        let contents = read_from_source(&InputSource::Stdin)?;
        return Ok((parse_document(&contents, "stdin document")?, None));
    }

    let path = PathBuf::from(spec);
    match read_from_source(&InputSource::File(path.clone())) {
        Ok(contents) => {
            let label = format!("document {}", path.display());
            Ok((parse_document(&contents, &label)?, Some(path)))
        }
        Err(err) => {
            if is_not_found(&err) {
                return Ok((parse_document(spec, "inline document")?, None));
            }
            Err(err.wrap_err(format!("failed to load document from {}", path.display())))
        }
    }
}

fn read_from_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read from stdin")?;
            Ok(buffer)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read file {}", path.display())),
    }
}

fn is_not_found(err: &Report) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

fn parse_document(contents: &str, label: &str) -> Result<MapDocument> {
    serde_json::from_str(contents)
        .wrap_err_with(|| format!("failed to parse {label} as a JSON shape array"))
}

fn resolve_destination(cli: &Cli, source: Option<&Path>) -> Result<Destination> {
    if let Some(raw) = cli.output.as_deref() {
        if raw.trim().is_empty() {
            return Err(eyre!("output destination cannot be empty"));
        }
        if raw == "-" {
            return Ok(Destination::Stdout);
        }
        let path = PathBuf::from(raw);
        // Writing back over the input never needs --force.
        let replaces_input = source.is_some_and(|input| input == path);
        if !cli.force && !replaces_input && path.exists() {
            return Err(eyre!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
        return Ok(Destination::File(path));
    }

    match source {
        Some(path) => Ok(Destination::File(path.to_path_buf())),
        None => Ok(Destination::Stdout),
    }
}

fn editor_options(cli: &Cli) -> EditorOptions {
    let mut options = EditorOptions::default();
    if !cli.colors.is_empty() {
        options = options.with_color_ramp(cli.colors.clone());
    }
    if let Some(base) = cli.marker_api.as_ref() {
        options = options.with_marker_api(base.clone());
    }
    if !cli.icons.is_empty() {
        options = options.with_marker_icons(cli.icons.clone());
    }
    options
}

fn write_document(document: &MapDocument, destination: &Destination, pretty: bool) -> Result<()> {
    let mut body = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
    .wrap_err("failed to serialize document")?;
    body.push('\n');

    match destination {
        Destination::Stdout => print!("{body}"),
        Destination::File(path) => {
            fs::write(path, body).wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "saved document");
            eprintln!("saved document to {}", path.display());
        }
    }
    Ok(())
}

/// A small park scene touching every form the editor can build: filled and
/// unfilled geometry, a metadata schema, and both plain and text markers.
fn sample_document() -> MapDocument {
    let mut document = MapDocument::new();

    document.insert(
        Shape::new(ShapeKind::Polygon)
            .with_name("City park")
            .with_style(PathStyle {
                color: Some("#27ae60".into()),
                fill_color: Some("#2ecc71".into()),
                fill_opacity: Some(0.35),
                ..PathStyle::default()
            })
            .with_meta(
                MetaSchema::new()
                    .with(MetaProperty::new("district", "District", MetaKind::text()))
                    .with(MetaProperty::new(
                        "benches",
                        "Benches",
                        MetaKind::number(0.0, 120.0, 5.0),
                    ))
                    .with(MetaProperty::new("lit", "Lit at night", MetaKind::Boolean))
                    .with(MetaProperty::new(
                        "surface",
                        "Surface",
                        MetaKind::choices(vec![
                            SelectChoice::plain("grass"),
                            SelectChoice::plain("gravel"),
                            SelectChoice::labeled("Paved", "asphalt"),
                        ]),
                    )),
            )
            .with_property("district", "Riverside")
            .with_property("benches", 40),
    );

    document.insert(
        Shape::new(ShapeKind::Polyline)
            .with_name("River trail")
            .with_style(PathStyle {
                color: Some("#2980b9".into()),
                weight: Some(4.0),
                dash_array: Some("10,10".into()),
                ..PathStyle::default()
            }),
    );

    document.insert(Shape::new(ShapeKind::Rectangle).with_name("Parking lot"));

    document.insert(
        Shape::new(ShapeKind::Circle)
            .with_name("Fountain")
            .with_style(PathStyle {
                color: Some("#8e44ad".into()),
                ..PathStyle::default()
            }),
    );

    document.insert(
        Shape::new(ShapeKind::Marker)
            .with_name("Info kiosk")
            .with_property("color", "#3498db"),
    );

    document.insert(
        Shape::new(ShapeKind::Marker)
            .with_name("Gate sign")
            .with_property("text", "Open 06:00-22:00")
            .with_property("size", 120),
    );

    document
}
