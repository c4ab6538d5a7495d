//! 5GTANGO dialect adapter.
//!
//! Translates the abstract chain topology into the tango NSD/VNFD schema:
//! `network_functions` / `virtual_links` / `forwarding_graphs`, with
//! colon-qualified endpoint references (`vnf0:output`) and bare `input` /
//! `output` sentinels for the service boundary.

pub mod doc;

use crate::Result;
use crate::chain::{ChainTopology, Endpoint, ServicePort};
use crate::params::{DescriptorSet, GenParams};
use crate::templates;
use anyhow::Context;
use doc::{NetworkFunction, PathStepRef, TangoNsd, TangoVnfd, VirtualLink};
use tracing::debug;

// Link ids the baseline NSD already carries, resolved by id rather than by
// list position.
const MGMT_LINK_ID: &str = "mgmt";
const ENTRY_LINK_ID: &str = "input-2-vnf0";
const EXIT_LINK_ID: &str = "vnf0-2-output";

/// Generate the full 5GTANGO descriptor set for the given parameters.
pub fn generate_descriptors(params: &GenParams) -> Result<DescriptorSet<TangoNsd, TangoVnfd>> {
    debug!("loading 5GTANGO baseline descriptors");
    let nsd_base = templates::tango_nsd()?;

    debug!(vnfs = params.vnfs, "generating 5GTANGO VNFDs");
    let vnfds = replicate_vnfds(params)?;

    debug!("generating 5GTANGO NSD");
    let nsd = build_nsd(nsd_base, &vnfds, params)?;

    Ok(DescriptorSet { nsd, vnfds })
}

/// Clone the baseline VNFD once per chain position, applying the per-instance
/// identity and image overrides.
fn replicate_vnfds(params: &GenParams) -> Result<Vec<TangoVnfd>> {
    let mut vnfds = Vec::with_capacity(params.vnfs);
    for i in 0..params.vnfs {
        let mut vnfd = templates::tango_vnfd()?;
        vnfd.name = format!("default-vnf{i}");
        vnfd.author = params.author.clone();
        vnfd.vendor = params.vendor.clone();

        let vdu = vnfd
            .virtual_deployment_units
            .first_mut()
            .context("baseline tango VNFD has no deployment unit")?;
        if let Some(image) = params.image_name(i) {
            debug!(vnf = i, image, "VNF image name override");
            vdu.vm_image = image.to_string();
        } else {
            debug!(vnf = i, "using default image name");
        }
        if let Some(format) = params.image_type(i) {
            debug!(vnf = i, format, "VNF image format override");
            vdu.vm_image_format = format.to_string();
        } else {
            debug!(vnf = i, "using default image format");
        }

        vnfds.push(vnfd);
    }
    Ok(vnfds)
}

fn build_nsd(mut nsd: TangoNsd, vnfds: &[TangoVnfd], params: &GenParams) -> Result<TangoNsd> {
    nsd.author = params.author.clone();
    nsd.vendor = params.vendor.clone();
    nsd.name = params.name.clone();
    nsd.description = params.description.clone();

    let topo = ChainTopology::build(vnfds.len());

    nsd.network_functions = vnfds
        .iter()
        .enumerate()
        .map(|(i, vnfd)| NetworkFunction {
            vnf_id: format!("vnf{i}"),
            vnf_name: vnfd.name.clone(),
            vnf_vendor: vnfd.vendor.clone(),
            vnf_version: vnfd.version.clone(),
        })
        .collect();

    // The baseline's exit link only fits a single-VNF chain; the synthesizer
    // recreates the exit at the real end of the chain. The entry link stays
    // unless the chain is empty and `vnf0` does not exist.
    nsd.virtual_links.retain(|l| l.id != EXIT_LINK_ID);
    if topo.vnf_count == 0 {
        nsd.virtual_links.retain(|l| l.id != ENTRY_LINK_ID);
    }

    let mgmt = nsd
        .virtual_links
        .iter_mut()
        .find(|l| l.id == MGMT_LINK_ID)
        .context("baseline tango NSD has no management link")?;
    mgmt.connection_points_reference = topo.mgmt_endpoints.iter().map(endpoint_ref).collect();

    for link in &topo.links {
        nsd.virtual_links.push(VirtualLink {
            id: link.id.clone(),
            connectivity_type: "E-Line".to_string(),
            connection_points_reference: vec![endpoint_ref(&link.from), endpoint_ref(&link.to)],
            dhcp: None,
        });
    }

    if topo.vnf_count == 0 {
        nsd.forwarding_graphs.clear();
        return Ok(nsd);
    }

    let fg = nsd
        .forwarding_graphs
        .first_mut()
        .context("baseline tango NSD has no forwarding graph")?;
    fg.number_of_virtual_links = topo.declared_link_count() as u32;
    fg.constituent_virtual_links = vec![MGMT_LINK_ID.to_string(), ENTRY_LINK_ID.to_string()];
    fg.constituent_virtual_links
        .extend(topo.links.iter().map(|l| l.id.clone()));
    fg.constituent_vnfs = (0..topo.vnf_count).map(|i| format!("vnf{i}")).collect();

    let fp = fg
        .network_forwarding_paths
        .first_mut()
        .context("baseline tango NSD has no forwarding path")?;
    fp.connection_points = topo
        .path
        .iter()
        .map(|step| PathStepRef {
            connection_point_ref: endpoint_ref(&step.endpoint),
            position: step.position,
        })
        .collect();

    Ok(nsd)
}

/// Render an abstract endpoint in tango notation.
fn endpoint_ref(endpoint: &Endpoint) -> String {
    match endpoint {
        Endpoint::Service(ServicePort::Input) => "input".to_string(),
        Endpoint::Service(ServicePort::Output) => "output".to_string(),
        Endpoint::Vnf { index, port } => format!("vnf{}:{}", index, port.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(vnfs: usize) -> GenParams {
        GenParams {
            vnfs,
            ..GenParams::default()
        }
    }

    #[test]
    fn three_vnf_chain_scenario() {
        let set = generate_descriptors(&params(3)).unwrap();

        assert_eq!(set.vnfds.len(), 3);
        assert_eq!(set.nsd.network_functions.len(), 3);

        let link_ids: Vec<&str> = set.nsd.virtual_links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(
            link_ids,
            vec![
                "mgmt",
                "input-2-vnf0",
                "vnf0-2-vnf1",
                "vnf1-2-vnf2",
                "vnf2-2-output"
            ]
        );

        let mgmt = &set.nsd.virtual_links[0];
        assert_eq!(
            mgmt.connection_points_reference,
            vec!["vnf0:mgmt", "vnf1:mgmt", "vnf2:mgmt"]
        );

        let fg = &set.nsd.forwarding_graphs[0];
        assert_eq!(fg.number_of_virtual_links, 4);
        assert_eq!(fg.constituent_vnfs, vec!["vnf0", "vnf1", "vnf2"]);
        assert_eq!(
            fg.constituent_virtual_links,
            vec![
                "mgmt",
                "input-2-vnf0",
                "vnf0-2-vnf1",
                "vnf1-2-vnf2",
                "vnf2-2-output"
            ]
        );

        let steps = &fg.network_forwarding_paths[0].connection_points;
        assert_eq!(steps.len(), 9);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.position, i as u32);
        }
        assert_eq!(steps[0].connection_point_ref, "input");
        assert_eq!(steps[8].connection_point_ref, "output");
    }

    #[test]
    fn exactly_one_link_reaches_the_output_sentinel() {
        for n in 2..=5 {
            let set = generate_descriptors(&params(n)).unwrap();
            let exits: Vec<&VirtualLink> = set
                .nsd
                .virtual_links
                .iter()
                .filter(|l| {
                    l.connection_points_reference
                        .iter()
                        .any(|r| r == "output")
                })
                .collect();
            assert_eq!(exits.len(), 1);
            assert_eq!(exits[0].id, format!("vnf{}-2-output", n - 1));
        }
    }

    #[test]
    fn single_vnf_collapses_to_the_baseline() {
        let set = generate_descriptors(&params(1)).unwrap();
        let baseline = templates::tango_nsd().unwrap();
        assert_eq!(set.nsd, baseline);
    }

    #[test]
    fn image_lists_shorter_than_vnf_count_fall_back_to_defaults() {
        let set = generate_descriptors(&GenParams {
            vnfs: 3,
            image_names: vec!["custom-image".to_string()],
            image_types: vec!["qcow2".to_string(), "raw".to_string()],
            ..GenParams::default()
        })
        .unwrap();

        let images: Vec<&str> = set
            .vnfds
            .iter()
            .map(|v| v.virtual_deployment_units[0].vm_image.as_str())
            .collect();
        assert_eq!(images, vec!["custom-image", "ubuntu", "ubuntu"]);

        let formats: Vec<&str> = set
            .vnfds
            .iter()
            .map(|v| v.virtual_deployment_units[0].vm_image_format.as_str())
            .collect();
        assert_eq!(formats, vec!["qcow2", "raw", "docker"]);
    }

    #[test]
    fn vnfd_identity_overrides() {
        let set = generate_descriptors(&GenParams {
            vnfs: 2,
            author: "someone".to_string(),
            vendor: "com.example".to_string(),
            ..GenParams::default()
        })
        .unwrap();

        assert_eq!(set.vnfds[0].name, "default-vnf0");
        assert_eq!(set.vnfds[1].name, "default-vnf1");
        for vnfd in &set.vnfds {
            assert_eq!(vnfd.author, "someone");
            assert_eq!(vnfd.vendor, "com.example");
        }
        assert_eq!(set.nsd.network_functions[1].vnf_name, "default-vnf1");
    }

    #[test]
    fn empty_chain_yields_the_empty_baseline() {
        let set = generate_descriptors(&params(0)).unwrap();

        assert!(set.vnfds.is_empty());
        assert!(set.nsd.network_functions.is_empty());
        assert!(set.nsd.forwarding_graphs.is_empty());

        // Only the (empty) management link survives.
        assert_eq!(set.nsd.virtual_links.len(), 1);
        assert_eq!(set.nsd.virtual_links[0].id, "mgmt");
        assert!(set.nsd.virtual_links[0].connection_points_reference.is_empty());
    }

    #[test]
    fn generation_does_not_mutate_the_baseline() {
        generate_descriptors(&params(5)).unwrap();
        let baseline = templates::tango_nsd().unwrap();
        assert_eq!(baseline.virtual_links.len(), 3);
        assert_eq!(baseline.network_functions.len(), 1);
    }
}
