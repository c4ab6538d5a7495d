use anyhow::bail;
use clap::Parser;
use std::path::Path;
use tracing::{debug, error};

mod chain;
mod emit;
mod osm;
mod params;
mod tango;
mod templates;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "descriptorgen")]
#[command(about = "Generate NSD and VNFDs for a linear service chain", long_about = None)]
struct Cli {
    /// Relative output path for the generated descriptors.
    #[arg(short = 'o', long, default_value = ".")]
    out_path: String,

    /// Only generate 5GTANGO descriptors.
    #[arg(long)]
    tango: bool,

    /// Only generate OSM descriptors.
    #[arg(long)]
    osm: bool,

    /// NSD and VNFD author.
    #[arg(long, default_value = "5GTANGO Developer")]
    author: String,

    /// NSD and VNFD vendor.
    #[arg(long, default_value = "eu.5gtango")]
    vendor: String,

    /// NSD name.
    #[arg(long, default_value = "tango-nsd")]
    name: String,

    /// NSD description.
    #[arg(long, default_value = "Default description")]
    description: String,

    /// Number of VNFs in the chain.
    #[arg(long, default_value_t = 1)]
    vnfs: usize,

    /// VNF image names, one per chain position (default: ubuntu).
    #[arg(long, num_args = 0..)]
    image_names: Vec<String>,

    /// VNF image types, one per chain position (default: docker).
    #[arg(long, num_args = 0..)]
    image_types: Vec<String>,

    /// Increase logging level to debug.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "descriptorgen=debug"
    } else {
        "descriptorgen=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let params = params::GenParams {
        author: cli.author,
        vendor: cli.vendor,
        name: cli.name,
        description: cli.description,
        vnfs: cli.vnfs,
        image_names: cli.image_names,
        image_types: cli.image_types,
    };
    params.notice_image_list_mismatch();

    let out_dir = Path::new(&cli.out_path);
    let mut failed = false;

    // One dialect failing must not block the other; partial output from an
    // earlier dialect is left in place.
    if !cli.osm {
        if let Err(err) = generate_tango(&params, out_dir) {
            error!("5GTANGO generation failed: {err:#}");
            failed = true;
        }
    }
    if !cli.tango {
        if let Err(err) = generate_osm(&params, out_dir) {
            error!("OSM generation failed: {err:#}");
            failed = true;
        }
    }

    if failed {
        bail!("descriptor generation failed for at least one dialect");
    }
    Ok(())
}

fn generate_tango(params: &params::GenParams, out_dir: &Path) -> Result<()> {
    let set = tango::generate_descriptors(params)?;
    let written = emit::save_descriptors(out_dir, "tango", &set)?;
    debug!(files = written.len(), "5GTANGO descriptors complete");
    Ok(())
}

fn generate_osm(params: &params::GenParams, out_dir: &Path) -> Result<()> {
    let set = osm::generate_descriptors(params)?;
    let written = emit::save_descriptors(out_dir, "osm", &set)?;
    debug!(files = written.len(), "OSM descriptors complete");
    Ok(())
}
