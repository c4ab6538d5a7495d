//! Chain topology synthesis.
//!
//! Both descriptor dialects encode the same thing: N functions wired into a
//! linear chain, a management network fanning out to every function, and a
//! forwarding graph walking the chain from the service input to the service
//! output. This module builds that topology once, over an abstract
//! endpoint/link representation; the dialect adapters only translate it into
//! their own field names.
//!
//! Links are tagged by role (transit vs. chain exit) instead of being
//! addressed by list position, so adapters never have to splice template
//! lists by numeric offset.

/// A service-boundary port of the NSD itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServicePort {
    Input,
    Output,
}

/// A port on one of the chained functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VnfPort {
    Input,
    Output,
    Mgmt,
}

impl VnfPort {
    pub fn name(self) -> &'static str {
        match self {
            VnfPort::Input => "input",
            VnfPort::Output => "output",
            VnfPort::Mgmt => "mgmt",
        }
    }
}

/// One end of a virtual link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Service(ServicePort),
    Vnf { index: usize, port: VnfPort },
}

/// Role of a synthesized link within the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRole {
    /// Data-plane hop between two consecutive functions.
    Transit,
    /// Last function to the service-level output.
    Exit,
}

/// A synthesized point-to-point link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainLink {
    pub id: String,
    pub role: LinkRole,
    pub from: Endpoint,
    pub to: Endpoint,
}

/// One step of the forwarding path, with its explicit position index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub endpoint: Endpoint,
    pub position: u32,
}

/// The full chain topology for N functions.
///
/// The baseline templates already carry the single-VNF plumbing (management
/// link, `input` to `vnf0` entry link, and the forwarding-path trunk visiting
/// `input`, `vnf0:input`, `vnf0:output` at positions 0..=2). Everything here
/// is what has to be synthesized on top of that, except `path`, which is the
/// complete forwarding-path step list including the trunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTopology {
    pub vnf_count: usize,
    /// Management endpoints, one per function, in index order.
    pub mgmt_endpoints: Vec<Endpoint>,
    /// Synthesized links in creation order: N-1 transit hops, then the exit.
    pub links: Vec<ChainLink>,
    /// Complete forwarding-path steps, positions strictly increasing from 0.
    pub path: Vec<PathStep>,
}

// Positions 0..=2 are reserved by the template trunk; synthesized steps
// continue from here.
const FIRST_SYNTHESIZED_POSITION: u32 = 3;

impl ChainTopology {
    /// Build the topology for a chain of `vnf_count` functions.
    ///
    /// `vnf_count == 0` yields an empty topology (no links, no path, no
    /// management fan-out); the adapters turn that into the empty-chain
    /// baseline. `vnf_count == 1` reproduces exactly the single-VNF shape
    /// the baseline templates encode.
    pub fn build(vnf_count: usize) -> ChainTopology {
        let mut mgmt_endpoints = Vec::with_capacity(vnf_count);
        let mut links = Vec::with_capacity(vnf_count);

        for i in 0..vnf_count {
            mgmt_endpoints.push(Endpoint::Vnf {
                index: i,
                port: VnfPort::Mgmt,
            });

            let from = Endpoint::Vnf {
                index: i,
                port: VnfPort::Output,
            };
            // Last position in the chain gets the exit link; the tie-break is
            // strictly positional, regardless of anything else.
            if i + 1 < vnf_count {
                links.push(ChainLink {
                    id: format!("vnf{}-2-vnf{}", i, i + 1),
                    role: LinkRole::Transit,
                    from,
                    to: Endpoint::Vnf {
                        index: i + 1,
                        port: VnfPort::Input,
                    },
                });
            } else {
                links.push(ChainLink {
                    id: format!("vnf{}-2-output", i),
                    role: LinkRole::Exit,
                    from,
                    to: Endpoint::Service(ServicePort::Output),
                });
            }
        }

        let path = build_path(vnf_count, &links);

        ChainTopology {
            vnf_count,
            mgmt_endpoints,
            links,
            path,
        }
    }

    /// Link count the forwarding graph declares: N chain/exit links plus the
    /// management link.
    pub fn declared_link_count(&self) -> usize {
        self.vnf_count + 1
    }
}

/// Trunk steps (baked into the templates) followed by both endpoints of each
/// synthesized link, two consecutive steps per link, in creation order.
fn build_path(vnf_count: usize, links: &[ChainLink]) -> Vec<PathStep> {
    if vnf_count == 0 {
        return Vec::new();
    }

    let mut path = vec![
        PathStep {
            endpoint: Endpoint::Service(ServicePort::Input),
            position: 0,
        },
        PathStep {
            endpoint: Endpoint::Vnf {
                index: 0,
                port: VnfPort::Input,
            },
            position: 1,
        },
        PathStep {
            endpoint: Endpoint::Vnf {
                index: 0,
                port: VnfPort::Output,
            },
            position: 2,
        },
    ];

    let mut pos = FIRST_SYNTHESIZED_POSITION;
    for link in links {
        path.push(PathStep {
            endpoint: link.from,
            position: pos,
        });
        pos += 1;
        path.push(PathStep {
            endpoint: link.to,
            position: pos,
        });
        pos += 1;
    }

    path
}
