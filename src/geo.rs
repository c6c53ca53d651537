//! Geographic network planning on top of the MST engine.
//!
//! The adapter turns a set of named [`Site`]s (points on a sphere, each
//! assigned to a zone) into a complete weighted graph, prunes it with an
//! optional link filter, runs a chosen [`MstAlgorithm`], and numbers the
//! accepted links in acceptance order — the classic "connect n buildings
//! with the cheapest tunnel network" problem.
//!
//! # Cost model
//!
//! Each candidate link's cost is `length_m * cost_factor`, where the
//! factor depends on the connection's phase and zoning:
//!
//! - **Existing** connections (listed as already-built name pairs) are
//!   phase 0 and charged a low fixed per-meter rate.
//! - **New** connections are phase 1 and charged the base per-meter rate,
//!   plus a surcharge when the link crosses between two zones: an explicit
//!   per-zone-pair surcharge if one is tabled, otherwise a default.
//!
//! Both [`distance_m`] and [`CostModel::cost_factor`] are pure functions
//! of their arguments; planning the same sites with the same model and
//! algorithm always yields the same network.
//!
//! # Distance
//!
//! [`distance_m`] uses the equirectangular (great-circle-like planar)
//! approximation over the Earth's mean radius, which is accurate to well
//! under a percent at the few-kilometer scales a tunnel network spans.
//! Positions are used for pairwise distance only; there is no spatial
//! index.
//!
//! Since a complete graph has O(n²) candidate edges, real inputs should
//! set a length cutoff ([`NetworkPlanner::with_max_length_m`]) or a custom
//! filter to keep the edge count down before the MST runs.

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::mst::MstAlgorithm;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Earth mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A named point on the sphere, assigned to a zone.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    /// Unique display name (also the key for the existing-connection table).
    pub name: String,
    /// Zone this site belongs to; must be one of the model's zones.
    pub zone: String,
    /// Latitude in degrees.
    pub lat_deg: f64,
    /// Longitude in degrees.
    pub lon_deg: f64,
}

impl Site {
    /// Create a site.
    pub fn new(
        name: impl Into<String>,
        zone: impl Into<String>,
        lat_deg: f64,
        lon_deg: f64,
    ) -> Self {
        Self {
            name: name.into(),
            zone: zone.into(),
            lat_deg,
            lon_deg,
        }
    }
}

/// Equirectangular approximation of the great-circle distance, in meters.
pub fn distance_m(a: &Site, b: &Site) -> f64 {
    let lat_a = a.lat_deg.to_radians();
    let lat_b = b.lat_deg.to_radians();
    let x = (b.lon_deg - a.lon_deg).to_radians() * ((lat_a + lat_b) / 2.0).cos();
    let y = lat_b - lat_a;
    EARTH_RADIUS_M * x.hypot(y)
}

/// Construction phase of a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Phase 0: the connection already exists and is only refurbished.
    Existing,
    /// Phase 1: the connection must be newly built.
    New,
}

/// Per-meter cost rates, zoning surcharges, and the existing-connection
/// table that together price a candidate link.
#[derive(Clone, Debug)]
pub struct CostModel {
    zones: Vec<String>,
    base_rate: f64,
    existing_rate: f64,
    default_surcharge: f64,
    /// Symmetric zone-pair key -> per-meter surcharge.
    surcharges: HashMap<(String, String), f64>,
    /// Symmetric site-name pairs that are already connected.
    existing: HashSet<(String, String)>,
}

impl CostModel {
    /// A model over the given zone names, with every rate zeroed; set the
    /// rates through the builder methods.
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            zones: zones.into_iter().map(Into::into).collect(),
            base_rate: 0.0,
            existing_rate: 0.0,
            default_surcharge: 0.0,
            surcharges: HashMap::new(),
            existing: HashSet::new(),
        }
    }

    /// Per-meter rate for a newly built link inside one zone.
    pub fn with_base_rate(mut self, rate: f64) -> Self {
        self.base_rate = rate;
        self
    }

    /// Low per-meter rate for refurbishing an existing connection.
    pub fn with_existing_rate(mut self, rate: f64) -> Self {
        self.existing_rate = rate;
        self
    }

    /// Surcharge applied to zone crossings with no explicit table entry.
    pub fn with_default_surcharge(mut self, rate: f64) -> Self {
        self.default_surcharge = rate;
        self
    }

    /// Explicit per-meter surcharge for links crossing between two zones.
    /// The pair is symmetric.
    pub fn with_surcharge(
        mut self,
        zone_a: impl Into<String>,
        zone_b: impl Into<String>,
        rate: f64,
    ) -> Self {
        self.surcharges
            .insert(ordered(zone_a.into(), zone_b.into()), rate);
        self
    }

    /// Record an already-built connection between two site names. The
    /// pair is symmetric.
    pub fn with_existing_link(
        mut self,
        name_a: impl Into<String>,
        name_b: impl Into<String>,
    ) -> Self {
        self.existing.insert(ordered(name_a.into(), name_b.into()));
        self
    }

    /// The zone names this model knows about.
    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    /// Construction phase of the connection between two sites.
    pub fn phase(&self, a: &Site, b: &Site) -> Phase {
        let key = ordered(a.name.clone(), b.name.clone());
        if self.existing.contains(&key) {
            Phase::Existing
        } else {
            Phase::New
        }
    }

    /// Per-meter cost factor for connecting `a` and `b`.
    ///
    /// A pure function: the factor depends only on the two sites' names
    /// (phase lookup) and zones (surcharge lookup).
    pub fn cost_factor(&self, a: &Site, b: &Site) -> f64 {
        match self.phase(a, b) {
            Phase::Existing => self.existing_rate,
            Phase::New => {
                if a.zone == b.zone {
                    self.base_rate
                } else {
                    let key = ordered(a.zone.clone(), b.zone.clone());
                    let surcharge = self
                        .surcharges
                        .get(&key)
                        .copied()
                        .unwrap_or(self.default_surcharge);
                    self.base_rate + surcharge
                }
            }
        }
    }
}

fn ordered(a: String, b: String) -> (String, String) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Edge attribute of a candidate or planned connection.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    /// Approximate great-circle length in meters.
    pub length_m: f64,
    /// Total construction cost (`length_m` times the model's cost factor).
    pub cost: f64,
    /// Whether this link already exists or must be built.
    pub phase: Phase,
    /// Site-id pair, embedded so cost ties break deterministically.
    tie: (usize, usize),
}

impl Link {
    /// Total order by cost, with the endpoint pair as tiebreaker. This is
    /// the comparator to hand the MST algorithms.
    pub fn by_cost(a: &Link, b: &Link) -> Ordering {
        a.cost.total_cmp(&b.cost).then_with(|| a.tie.cmp(&b.tie))
    }

    /// Total order by length, same tiebreaker.
    pub fn by_length(a: &Link, b: &Link) -> Ordering {
        a.length_m
            .total_cmp(&b.length_m)
            .then_with(|| a.tie.cmp(&b.tie))
    }
}

/// A filter deciding which candidate links enter the graph at all.
type LinkFilter = Box<dyn Fn(&Site, &Site, &Link) -> bool>;

/// Plans a cost-optimal connection network over a set of sites.
pub struct NetworkPlanner {
    sites: Vec<Site>,
    model: CostModel,
    filter: Option<LinkFilter>,
}

impl NetworkPlanner {
    /// Create a planner. Fails if site names collide or a site references
    /// a zone the model does not list.
    pub fn new(sites: Vec<Site>, model: CostModel) -> Result<Self> {
        let mut seen = HashSet::new();
        for site in &sites {
            if !seen.insert(site.name.as_str()) {
                return Err(Error::InvalidParameter {
                    name: "sites",
                    message: "site names must be unique",
                });
            }
            if !model.zones.iter().any(|z| z == &site.zone) {
                return Err(Error::InvalidParameter {
                    name: "sites",
                    message: "site references a zone unknown to the cost model",
                });
            }
        }
        Ok(Self {
            sites,
            model,
            filter: None,
        })
    }

    /// Drop candidate links longer than `max` meters. Existing links are
    /// kept regardless — they are already built.
    pub fn with_max_length_m(self, max: f64) -> Self {
        self.with_link_filter(move |_, _, link| {
            link.phase == Phase::Existing || link.length_m <= max
        })
    }

    /// Install an arbitrary candidate-link predicate. Replaces any filter
    /// set earlier.
    pub fn with_link_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Site, &Site, &Link) -> bool + 'static,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    /// The sites being planned over, in input order (site ids index this).
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Build the filtered complete candidate graph over site ids.
    ///
    /// Every site becomes a vertex even if the filter prunes all of its
    /// candidate links, so a too-aggressive cutoff shows up as a forest
    /// rather than a silently smaller vertex set.
    pub fn candidate_graph(&self) -> Graph<usize, Link> {
        let mut g = Graph::new();
        for id in 0..self.sites.len() {
            g.add_vertex(id);
        }
        for i in 0..self.sites.len() {
            for j in (i + 1)..self.sites.len() {
                let (a, b) = (&self.sites[i], &self.sites[j]);
                let length_m = distance_m(a, b);
                let link = Link {
                    length_m,
                    cost: length_m * self.model.cost_factor(a, b),
                    phase: self.model.phase(a, b),
                    tie: (i, j),
                };
                let keep = match &self.filter {
                    Some(f) => f(a, b, &link),
                    None => true,
                };
                if keep {
                    g.add_edge(Edge::new(i, j, link));
                }
            }
        }
        g
    }

    /// Compute the cheapest connection network with the given algorithm.
    ///
    /// Accepted links are numbered 0-based in acceptance order. A result
    /// with fewer than `sites - 1` links means the filter disconnected the
    /// candidate graph; that is reported, not raised.
    pub fn plan<A>(&self, algorithm: &A) -> Result<NetworkPlan>
    where
        A: MstAlgorithm<usize, Link>,
    {
        if self.sites.is_empty() {
            return Err(Error::EmptySites);
        }
        let graph = self.candidate_graph();
        let forest = algorithm.compute(&graph)?;

        let links = forest
            .sequenced()
            .map(|(sequence, edge)| PlannedLink {
                from: edge.from,
                to: edge.to,
                link: edge.attr.clone(),
                sequence,
            })
            .collect();

        Ok(NetworkPlan {
            sites: self.sites.clone(),
            links,
        })
    }
}

/// One accepted connection, with its final construction sequence number.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedLink {
    /// Site id of one endpoint (index into [`NetworkPlan::sites`]).
    pub from: usize,
    /// Site id of the other endpoint.
    pub to: usize,
    /// Length, cost, and phase of the connection.
    pub link: Link,
    /// 0-based position in the acceptance order; assigned exactly once.
    pub sequence: usize,
}

/// The planned network: sites plus accepted links in construction order.
#[derive(Clone, Debug)]
pub struct NetworkPlan {
    sites: Vec<Site>,
    links: Vec<PlannedLink>,
}

impl NetworkPlan {
    /// Accepted links in construction order.
    pub fn links(&self) -> &[PlannedLink] {
        &self.links
    }

    /// The sites the plan connects, indexed by the links' site ids.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// True when the plan connects every site into one network.
    pub fn is_spanning(&self) -> bool {
        self.links.len() + 1 == self.sites.len()
    }

    /// Total construction cost over all accepted links.
    pub fn total_cost(&self) -> f64 {
        self.links.iter().map(|l| l.link.cost).sum()
    }

    /// Total length in meters over all accepted links.
    pub fn total_length_m(&self) -> f64 {
        self.links.iter().map(|l| l.link.length_m).sum()
    }

    /// `(name, (lat_deg, lon_deg))` pairs for downstream renderers.
    pub fn waypoints(&self) -> impl Iterator<Item = (&str, (f64, f64))> {
        self.sites
            .iter()
            .map(|s| (s.name.as_str(), (s.lat_deg, s.lon_deg)))
    }
}
