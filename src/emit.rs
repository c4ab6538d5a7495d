//! Descriptor emission.
//!
//! One YAML file per function descriptor plus one for the service descriptor,
//! under a per-dialect filename prefix. Key order in the output follows the
//! in-memory documents, so repeated runs produce diff-stable files.

use crate::Result;
use crate::params::DescriptorSet;
use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Write a dialect's descriptor set into `out_dir`, creating the directory if
/// absent. Returns the written paths (`{prefix}_nsd.yml` first, then one
/// `{prefix}_vnfd{i}.yml` per function), which is what surrounding project
/// tooling registers in its manifest.
pub fn save_descriptors<Nsd, Vnfd>(
    out_dir: &Path,
    prefix: &str,
    set: &DescriptorSet<Nsd, Vnfd>,
) -> Result<Vec<PathBuf>>
where
    Nsd: Serialize,
    Vnfd: Serialize,
{
    fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(set.vnfds.len() + 1);

    let nsd_path = out_dir.join(format!("{prefix}_nsd.yml"));
    write_yaml(&nsd_path, &set.nsd)?;
    written.push(nsd_path);

    for (i, vnfd) in set.vnfds.iter().enumerate() {
        let path = out_dir.join(format!("{prefix}_vnfd{i}.yml"));
        write_yaml(&path, vnfd)?;
        written.push(path);
    }

    info!(
        files = written.len(),
        dir = %out_dir.display(),
        "saved {prefix} descriptors"
    );
    Ok(written)
}

fn write_yaml<T: Serialize>(path: &Path, doc: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(doc)
        .with_context(|| format!("cannot serialize {}", path.display()))?;
    fs::write(path, yaml).with_context(|| format!("cannot write {}", path.display()))?;
    debug!(path = %path.display(), "wrote descriptor");
    Ok(())
}
