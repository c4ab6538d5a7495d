//! Generation parameters and the outward result shape.

use serde::Serialize;
use tracing::info;

/// High-level inputs for one generation run, shared by both dialects.
#[derive(Debug, Clone)]
pub struct GenParams {
    pub author: String,
    pub vendor: String,
    pub name: String,
    pub description: String,
    /// Number of functions in the chain. Zero yields the empty-chain
    /// baseline.
    pub vnfs: usize,
    /// Per-index VM image names; indices past the end fall back to the
    /// template default.
    pub image_names: Vec<String>,
    /// Per-index VM image formats; same fallback rule.
    pub image_types: Vec<String>,
}

impl Default for GenParams {
    fn default() -> Self {
        GenParams {
            author: "5GTANGO Developer".to_string(),
            vendor: "eu.5gtango".to_string(),
            name: "tango-nsd".to_string(),
            description: "Default description".to_string(),
            vnfs: 1,
            image_names: Vec::new(),
            image_types: Vec::new(),
        }
    }
}

impl GenParams {
    pub fn image_name(&self, index: usize) -> Option<&str> {
        self.image_names.get(index).map(String::as_str)
    }

    pub fn image_type(&self, index: usize) -> Option<&str> {
        self.image_types.get(index).map(String::as_str)
    }

    /// Image lists shorter (or longer) than the VNF count are not an error;
    /// missing entries are backfilled from the template. Surface it once so
    /// the fallback is visible.
    pub fn notice_image_list_mismatch(&self) {
        if self.vnfs != self.image_names.len() {
            info!(
                vnfs = self.vnfs,
                image_names = self.image_names.len(),
                "number of VNFs and VNF image names don't match; \
                 using default image names where necessary"
            );
        }
        if self.vnfs != self.image_types.len() {
            info!(
                vnfs = self.vnfs,
                image_types = self.image_types.len(),
                "number of VNFs and VNF image types don't match; \
                 using default image types where necessary"
            );
        }
    }
}

/// One dialect's generated documents: the service descriptor plus one
/// function descriptor per chain position. This is the shape handed to the
/// emitter and to any surrounding project/manifest tooling.
#[derive(Debug, Clone, Serialize)]
pub struct DescriptorSet<Nsd, Vnfd> {
    pub nsd: Nsd,
    pub vnfds: Vec<Vnfd>,
}
