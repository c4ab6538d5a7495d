//! Typed 5GTANGO descriptor documents.
//!
//! Field declaration order is serialization order, which keeps emitted YAML
//! stable across runs (diff-friendly output matters more than schema
//! completeness here; unknown schema fields are out of scope).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TangoNsd {
    pub descriptor_schema: String,
    pub vendor: String,
    pub name: String,
    pub version: String,
    pub author: String,
    pub description: String,
    pub network_functions: Vec<NetworkFunction>,
    pub connection_points: Vec<ConnectionPoint>,
    pub virtual_links: Vec<VirtualLink>,
    pub forwarding_graphs: Vec<ForwardingGraph>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TangoVnfd {
    pub descriptor_schema: String,
    pub vendor: String,
    pub name: String,
    pub version: String,
    pub author: String,
    pub description: String,
    pub virtual_deployment_units: Vec<Vdu>,
    pub connection_points: Vec<ConnectionPoint>,
    pub virtual_links: Vec<VirtualLink>,
}

/// One constituent-function entry of the NSD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkFunction {
    pub vnf_id: String,
    pub vnf_name: String,
    pub vnf_vendor: String,
    pub vnf_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionPoint {
    pub id: String,
    pub interface: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualLink {
    pub id: String,
    pub connectivity_type: String,
    pub connection_points_reference: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardingGraph {
    pub fg_id: String,
    pub number_of_endpoints: u32,
    pub number_of_virtual_links: u32,
    pub constituent_virtual_links: Vec<String>,
    pub constituent_vnfs: Vec<String>,
    pub network_forwarding_paths: Vec<ForwardingPath>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardingPath {
    pub fp_id: String,
    pub policy: String,
    pub connection_points: Vec<PathStepRef>,
}

/// One positioned step of a forwarding path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStepRef {
    pub connection_point_ref: String,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vdu {
    pub id: String,
    pub vm_image: String,
    pub vm_image_format: String,
    pub resource_requirements: ResourceRequirements,
    pub connection_points: Vec<ConnectionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRequirements {
    pub cpu: CpuRequirements,
    pub memory: SizedRequirement,
    pub storage: SizedRequirement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuRequirements {
    pub vcpus: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizedRequirement {
    pub size: u32,
    pub size_unit: String,
}
