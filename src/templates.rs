//! Baseline descriptor templates.
//!
//! The baselines describe a single-VNF service (one function, a management
//! link, an entry link from the service `input`, an exit link to the service
//! `output`). They are compiled into the binary and re-parsed on every call,
//! so each caller gets an independent owned document and no generation run
//! can leak mutations into another.

use crate::Result;
use crate::osm::doc::{OsmNsdCatalog, OsmVnfdCatalog};
use crate::tango::doc::{TangoNsd, TangoVnfd};
use anyhow::Context;
use serde::de::DeserializeOwned;

const TANGO_NSD: &str = include_str!("../templates/tango_default_nsd.yml");
const TANGO_VNFD: &str = include_str!("../templates/tango_default_vnfd.yml");
const OSM_NSD: &str = include_str!("../templates/osm_default_nsd.yml");
const OSM_VNFD: &str = include_str!("../templates/osm_default_vnfd.yml");

fn parse<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T> {
    serde_yaml::from_str(raw)
        .with_context(|| format!("baseline {what} descriptor is missing or corrupt"))
}

pub fn tango_nsd() -> Result<TangoNsd> {
    parse(TANGO_NSD, "tango NSD")
}

pub fn tango_vnfd() -> Result<TangoVnfd> {
    parse(TANGO_VNFD, "tango VNFD")
}

pub fn osm_nsd() -> Result<OsmNsdCatalog> {
    parse(OSM_NSD, "OSM NSD")
}

pub fn osm_vnfd() -> Result<OsmVnfdCatalog> {
    parse(OSM_VNFD, "OSM VNFD")
}
