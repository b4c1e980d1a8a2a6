use std::path::PathBuf;

/// Natural-breaks choropleth CLI
#[derive(clap::Parser, Debug)]
#[command(name = "choromap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON style file (attributes, palette, classes, key field)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the selectable attributes, default first
    Attributes,

    /// Print class breaks for one or more attributes
    Breaks(BreaksArgs),

    /// Write the joined, colored features (and optionally chart data)
    Render(RenderArgs),
}

/// Inputs shared by every command that joins data to boundaries.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Indicator table (CSV with a header row)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Neighborhood boundaries (.geojson, .json or .shp)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub features: PathBuf,

    /// Column/property holding the neighborhood name, overrides the style file
    #[arg(long)]
    pub key_field: Option<String>,

    /// Number of classes, overrides the style file
    #[arg(short = 'k', long)]
    pub classes: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct BreaksArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Attribute to classify (repeatable), defaults to every attribute
    #[arg(short, long)]
    pub attribute: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Expressed attribute, defaults to the first in the catalog
    #[arg(short, long)]
    pub attribute: Option<String>,

    /// Output GeoJSON FeatureCollection
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Also write the bar chart as JSON
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub chart: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(short, long)]
    pub force: bool,
}
