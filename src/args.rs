use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "streetpath",
    version,
    about = "Find the shortest path between two named streets and draw it on a map"
)]
pub struct Cli {
    /// TOML configuration file (defaults to ./streetpath.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Road network as a GeoJSON feature collection
    #[arg(short, long, global = true)]
    pub graph: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Route between two streets, print the streets used and save a map
    Route(RouteArgs),
    /// Save a map of the whole street network
    Map(MapArgs),
    /// List the street names present in the network
    Streets(StreetsArgs),
}

#[derive(Args, Debug, Default)]
pub struct TileArgs {
    /// Tile URL template with {z}, {x} and {y} placeholders
    #[arg(long, conflicts_with = "no_tiles")]
    pub tiles: Option<String>,

    /// Render without a base tile layer
    #[arg(long)]
    pub no_tiles: bool,
}

#[derive(Args, Debug, Default)]
pub struct RouteArgs {
    /// Street to start from (case-insensitive substring)
    #[arg(long)]
    pub from: Option<String>,

    /// Street to end on (case-insensitive substring)
    #[arg(long)]
    pub to: Option<String>,

    /// Street whose segments get a traffic penalty
    #[arg(long)]
    pub avoid: Option<String>,

    /// Length multiplier applied to the avoided street
    #[arg(long, requires = "avoid")]
    pub penalty: Option<f64>,

    #[command(flatten)]
    pub tiles: TileArgs,

    /// Where to write the HTML map
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the route as GeoJSON
    #[arg(long)]
    pub geojson: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct MapArgs {
    #[command(flatten)]
    pub tiles: TileArgs,

    /// Where to write the HTML map
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct StreetsArgs {
    /// How many names to print
    #[arg(short, long, default_value_t = streetpath_core::SAMPLE_STREET_NAMES)]
    pub limit: usize,
}
