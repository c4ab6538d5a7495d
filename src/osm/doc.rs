//! Typed OSM descriptor documents.
//!
//! OSM wraps each descriptor in a one-element catalog list and references
//! function ports through member-index-keyed maps instead of tango's
//! colon-qualified strings. Field names are kebab-case throughout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmNsdCatalog {
    #[serde(rename = "nsd-catalog")]
    pub nsd_catalog: NsdCatalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NsdCatalog {
    pub nsd: Vec<OsmNsd>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OsmNsd {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub vendor: String,
    pub version: String,
    pub description: String,
    pub constituent_vnfd: Vec<ConstituentVnfd>,
    pub vld: Vec<OsmVld>,
    pub vnffgd: Vec<OsmVnffgd>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConstituentVnfd {
    pub member_vnf_index: usize,
    pub vnfd_id_ref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OsmVld {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mgmt_network: Option<bool>,
    pub vnfd_connection_point_ref: Vec<VnfdCpRef>,
}

/// Member-index-keyed reference to one function port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VnfdCpRef {
    pub member_vnf_index_ref: usize,
    pub vnfd_connection_point_ref: String,
    pub vnfd_id_ref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmVnffgd {
    pub id: String,
    pub name: String,
    pub rsp: Vec<OsmRsp>,
}

/// Rendered service path: the ordered port traversal of the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OsmRsp {
    pub id: String,
    pub name: String,
    pub vnfd_connection_point_ref: Vec<RspCpRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RspCpRef {
    pub member_vnf_index_ref: usize,
    pub order: u32,
    pub vnfd_connection_point_ref: String,
    pub vnfd_id_ref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmVnfdCatalog {
    #[serde(rename = "vnfd-catalog")]
    pub vnfd_catalog: VnfdCatalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VnfdCatalog {
    pub vnfd: Vec<OsmVnfd>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OsmVnfd {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub vendor: String,
    pub version: String,
    pub description: String,
    pub mgmt_interface: MgmtInterface,
    pub connection_point: Vec<OsmConnectionPoint>,
    pub vdu: Vec<OsmVdu>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MgmtInterface {
    pub cp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmConnectionPoint {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OsmVdu {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub image: String,
    pub vm_flavor: VmFlavor,
    pub interface: Vec<OsmInterface>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VmFlavor {
    pub vcpu_count: u32,
    pub memory_mb: u32,
    pub storage_gb: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OsmInterface {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub external_connection_point_ref: String,
}
