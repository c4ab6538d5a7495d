//! OSM dialect adapter.
//!
//! Same chain topology as the tango adapter, expressed in the OSM catalog
//! schema: `constituent-vnfd` for membership, `vld` entries with
//! member-index-keyed `vnfd-connection-point-ref` maps for links, and a
//! `vnffgd` rendered service path for the ordered traversal.

pub mod doc;

use crate::Result;
use crate::chain::{ChainTopology, Endpoint, LinkRole};
use crate::params::{DescriptorSet, GenParams};
use crate::templates;
use anyhow::Context;
use doc::{ConstituentVnfd, OsmNsdCatalog, OsmVld, OsmVnfdCatalog, RspCpRef, VnfdCpRef};
use tracing::debug;

/// Generate the full OSM descriptor set for the given parameters.
pub fn generate_descriptors(
    params: &GenParams,
) -> Result<DescriptorSet<OsmNsdCatalog, OsmVnfdCatalog>> {
    debug!("loading OSM baseline descriptors");
    let nsd_base = templates::osm_nsd()?;

    debug!(vnfs = params.vnfs, "generating OSM VNFDs");
    let vnfds = replicate_vnfds(params)?;

    debug!("generating OSM NSD");
    let nsd = build_nsd(nsd_base, &vnfds, params)?;

    Ok(DescriptorSet { nsd, vnfds })
}

/// Clone the baseline VNFD catalog once per chain position. The OSM baseline
/// carries vendor and image name only (no author or image-format fields), so
/// those are the only per-instance overrides applied.
fn replicate_vnfds(params: &GenParams) -> Result<Vec<OsmVnfdCatalog>> {
    let mut vnfds = Vec::with_capacity(params.vnfs);
    for i in 0..params.vnfs {
        let mut catalog = templates::osm_vnfd()?;
        let vnfd = catalog
            .vnfd_catalog
            .vnfd
            .first_mut()
            .context("baseline OSM VNFD catalog is empty")?;

        let id = format!("default-vnf{i}");
        vnfd.id = id.clone();
        vnfd.name = id.clone();
        vnfd.short_name = id;
        vnfd.vendor = params.vendor.clone();

        let vdu = vnfd
            .vdu
            .first_mut()
            .context("baseline OSM VNFD has no vdu")?;
        if let Some(image) = params.image_name(i) {
            debug!(vnf = i, image, "VNF image override");
            vdu.image = image.to_string();
        } else {
            debug!(vnf = i, "using default image");
        }

        vnfds.push(catalog);
    }
    Ok(vnfds)
}

fn build_nsd(
    mut catalog: OsmNsdCatalog,
    vnfds: &[OsmVnfdCatalog],
    params: &GenParams,
) -> Result<OsmNsdCatalog> {
    let vnfd_ids = vnfd_ids(vnfds)?;
    let topo = ChainTopology::build(vnfds.len());

    let nsd = catalog
        .nsd_catalog
        .nsd
        .first_mut()
        .context("baseline OSM NSD catalog is empty")?;

    nsd.vendor = params.vendor.clone();
    nsd.id = params.name.clone();
    nsd.name = params.name.clone();
    nsd.short_name = params.name.clone();
    nsd.description = params.description.clone();

    nsd.constituent_vnfd = vnfd_ids
        .iter()
        .enumerate()
        .map(|(i, id)| ConstituentVnfd {
            member_vnf_index: i,
            vnfd_id_ref: id.clone(),
        })
        .collect();

    // Keep only the management vld (resolved by its mgmt-network flag, not by
    // position); chain and exit vlds are resynthesized below.
    nsd.vld.retain(|v| v.mgmt_network == Some(true));
    let mgmt = nsd
        .vld
        .first_mut()
        .context("baseline OSM NSD has no management vld")?;
    mgmt.vnfd_connection_point_ref = topo
        .mgmt_endpoints
        .iter()
        .filter_map(|ep| cp_ref(ep, &vnfd_ids))
        .collect();

    for link in &topo.links {
        // The exit link's service-boundary end has no member entry in OSM, so
        // that vld carries a single connection-point reference.
        let refs: Vec<VnfdCpRef> = match link.role {
            LinkRole::Transit => [&link.from, &link.to]
                .into_iter()
                .filter_map(|ep| cp_ref(ep, &vnfd_ids))
                .collect(),
            LinkRole::Exit => cp_ref(&link.from, &vnfd_ids).into_iter().collect(),
        };
        nsd.vld.push(OsmVld {
            id: link.id.clone(),
            name: link.id.clone(),
            kind: "ELINE".to_string(),
            mgmt_network: None,
            vnfd_connection_point_ref: refs,
        });
    }

    if topo.vnf_count == 0 {
        nsd.vnffgd.clear();
        return Ok(catalog);
    }

    let fg = nsd
        .vnffgd
        .first_mut()
        .context("baseline OSM NSD has no vnffgd")?;
    let rsp = fg
        .rsp
        .first_mut()
        .context("baseline OSM vnffgd has no rsp")?;
    rsp.vnfd_connection_point_ref = (0..topo.vnf_count)
        .flat_map(|i| {
            [
                RspCpRef {
                    member_vnf_index_ref: i,
                    order: 2 * i as u32,
                    vnfd_connection_point_ref: "input".to_string(),
                    vnfd_id_ref: vnfd_ids[i].clone(),
                },
                RspCpRef {
                    member_vnf_index_ref: i,
                    order: 2 * i as u32 + 1,
                    vnfd_connection_point_ref: "output".to_string(),
                    vnfd_id_ref: vnfd_ids[i].clone(),
                },
            ]
        })
        .collect();

    Ok(catalog)
}

fn vnfd_ids(vnfds: &[OsmVnfdCatalog]) -> Result<Vec<String>> {
    vnfds
        .iter()
        .map(|c| {
            c.vnfd_catalog
                .vnfd
                .first()
                .map(|v| v.id.clone())
                .context("generated OSM VNFD catalog is empty")
        })
        .collect()
}

/// Render an abstract endpoint as a member-index-keyed reference. Service
/// boundary endpoints have no OSM representation and map to `None`.
fn cp_ref(endpoint: &Endpoint, vnfd_ids: &[String]) -> Option<VnfdCpRef> {
    match endpoint {
        Endpoint::Vnf { index, port } => Some(VnfdCpRef {
            member_vnf_index_ref: *index,
            vnfd_connection_point_ref: port.name().to_string(),
            vnfd_id_ref: vnfd_ids[*index].clone(),
        }),
        Endpoint::Service(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tango;
    use pretty_assertions::assert_eq;

    fn params(vnfs: usize) -> GenParams {
        GenParams {
            vnfs,
            ..GenParams::default()
        }
    }

    fn nsd(set: &DescriptorSet<OsmNsdCatalog, OsmVnfdCatalog>) -> &doc::OsmNsd {
        &set.nsd.nsd_catalog.nsd[0]
    }

    #[test]
    fn three_vnf_chain_scenario() {
        let set = generate_descriptors(&params(3)).unwrap();
        let nsd = nsd(&set);

        assert_eq!(set.vnfds.len(), 3);
        assert_eq!(nsd.constituent_vnfd.len(), 3);
        assert_eq!(nsd.constituent_vnfd[2].member_vnf_index, 2);
        assert_eq!(nsd.constituent_vnfd[2].vnfd_id_ref, "default-vnf2");

        // Management plus N chain/exit links.
        let vld_ids: Vec<&str> = nsd.vld.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(
            vld_ids,
            vec!["mgmt", "vnf0-2-vnf1", "vnf1-2-vnf2", "vnf2-2-output"]
        );

        let mgmt = &nsd.vld[0];
        assert_eq!(mgmt.vnfd_connection_point_ref.len(), 3);
        for (i, cp) in mgmt.vnfd_connection_point_ref.iter().enumerate() {
            assert_eq!(cp.member_vnf_index_ref, i);
            assert_eq!(cp.vnfd_connection_point_ref, "mgmt");
        }

        // Chain hop vnf1 -> vnf2.
        let hop = &nsd.vld[2];
        assert_eq!(hop.vnfd_connection_point_ref.len(), 2);
        assert_eq!(hop.vnfd_connection_point_ref[0].member_vnf_index_ref, 1);
        assert_eq!(hop.vnfd_connection_point_ref[0].vnfd_connection_point_ref, "output");
        assert_eq!(hop.vnfd_connection_point_ref[1].member_vnf_index_ref, 2);
        assert_eq!(hop.vnfd_connection_point_ref[1].vnfd_connection_point_ref, "input");

        // Exit vld carries the single in-service endpoint.
        let exit = &nsd.vld[3];
        assert_eq!(exit.vnfd_connection_point_ref.len(), 1);
        assert_eq!(exit.vnfd_connection_point_ref[0].member_vnf_index_ref, 2);

        // Rendered service path visits input/output of each function in order.
        let rsp = &nsd.vnffgd[0].rsp[0];
        assert_eq!(rsp.vnfd_connection_point_ref.len(), 6);
        for (i, cp) in rsp.vnfd_connection_point_ref.iter().enumerate() {
            assert_eq!(cp.order, i as u32);
            assert_eq!(cp.member_vnf_index_ref, i / 2);
        }
    }

    #[test]
    fn single_vnf_collapses_to_the_baseline() {
        let set = generate_descriptors(&params(1)).unwrap();
        let baseline = templates::osm_nsd().unwrap();
        assert_eq!(set.nsd, baseline);
    }

    #[test]
    fn empty_chain_yields_the_empty_baseline() {
        let set = generate_descriptors(&params(0)).unwrap();
        let nsd = nsd(&set);

        assert!(set.vnfds.is_empty());
        assert!(nsd.constituent_vnfd.is_empty());
        assert!(nsd.vnffgd.is_empty());
        assert_eq!(nsd.vld.len(), 1);
        assert_eq!(nsd.vld[0].id, "mgmt");
        assert!(nsd.vld[0].vnfd_connection_point_ref.is_empty());
    }

    #[test]
    fn image_list_shorter_than_vnf_count_falls_back() {
        let set = generate_descriptors(&GenParams {
            vnfs: 2,
            image_names: vec!["alpine".to_string()],
            ..GenParams::default()
        })
        .unwrap();

        let images: Vec<&str> = set
            .vnfds
            .iter()
            .map(|c| c.vnfd_catalog.vnfd[0].vdu[0].image.as_str())
            .collect();
        assert_eq!(images, vec!["alpine", "ubuntu"]);
    }

    #[test]
    fn both_dialects_encode_the_same_chain() {
        for n in 1..=4 {
            let p = params(n);
            let tango_set = tango::generate_descriptors(&p).unwrap();
            let osm_set = generate_descriptors(&p).unwrap();
            let osm_nsd = nsd(&osm_set);

            // Same function count.
            assert_eq!(tango_set.vnfds.len(), osm_set.vnfds.len());
            assert_eq!(
                tango_set.nsd.network_functions.len(),
                osm_nsd.constituent_vnfd.len()
            );

            // Same link count: the tango graph declares N+1 and the OSM vld
            // list holds exactly that many entries.
            assert_eq!(
                tango_set.nsd.forwarding_graphs[0].number_of_virtual_links as usize,
                osm_nsd.vld.len()
            );

            // Same chain adjacency, each in its own endpoint notation.
            for i in 0..n.saturating_sub(1) {
                let id = format!("vnf{}-2-vnf{}", i, i + 1);
                let tango_link = tango_set
                    .nsd
                    .virtual_links
                    .iter()
                    .find(|l| l.id == id)
                    .unwrap();
                assert_eq!(
                    tango_link.connection_points_reference,
                    vec![format!("vnf{i}:output"), format!("vnf{}:input", i + 1)]
                );

                let osm_link = osm_nsd.vld.iter().find(|v| v.id == id).unwrap();
                let members: Vec<usize> = osm_link
                    .vnfd_connection_point_ref
                    .iter()
                    .map(|cp| cp.member_vnf_index_ref)
                    .collect();
                assert_eq!(members, vec![i, i + 1]);
            }
        }
    }
}
