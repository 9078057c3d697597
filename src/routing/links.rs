//! Resolution of traversed link ids along a settled node path

use itertools::Itertools;

use crate::{
    Error, LinkId,
    model::{NodeIndex, RoadNetwork},
};

/// Resolves the physical link traversed between each consecutive node pair.
///
/// The link for `a -> b` is the unique id present in both `a`'s outgoing
/// catalog and `b`'s incoming catalog. Pure function of the path and the
/// catalogs; produces exactly `path.len() - 1` link ids.
///
/// # Errors
///
/// `MissingLink` when the catalogs share no id for a pair, `AmbiguousLink`
/// when they share more than one. Neither case is resolved by picking an
/// arbitrary element.
pub(crate) fn resolve_links(
    network: &RoadNetwork,
    path: &[NodeIndex],
) -> Result<Vec<LinkId>, Error> {
    let mut links = Vec::with_capacity(path.len().saturating_sub(1));

    for (&from, &to) in path.iter().tuple_windows() {
        let outgoing = &network.links(from).outgoing;
        let incoming = &network.links(to).incoming;

        let mut shared = outgoing.intersection(incoming);
        match (shared.next(), shared.next()) {
            (Some(&link), None) => links.push(link),
            (None, _) => {
                return Err(Error::MissingLink {
                    from: network.node_id(from),
                    to: network.node_id(to),
                });
            }
            (Some(_), Some(_)) => {
                return Err(Error::AmbiguousLink {
                    from: network.node_id(from),
                    to: network.node_id(to),
                    count: 2 + shared.count(),
                });
            }
        }
    }

    Ok(links)
}
