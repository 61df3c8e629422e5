//! Constellation lines between nearby stars.
//!
//! Every star picks up to `max_neighbors` of its closest stars within
//! `max_distance`. Only picks toward a higher id are kept, so each pair is
//! stored once as `from < to`. A pair can therefore exist because the
//! lower-id star chose the higher one even when the choice is not mutual,
//! and a choice made only by the higher-id star is dropped.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use serde::{Deserialize, Serialize};

use crate::star::{Star, StarId};

/// An undirected edge between two stars, stored with `from < to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Link {
    pub from: StarId,
    pub to: StarId,
}

impl Link {
    /// Look up both endpoint stars. `None` if either id is out of range.
    #[must_use]
    pub fn endpoints<'a>(&self, stars: &'a [Star]) -> Option<(&'a Star, &'a Star)> {
        Some((stars.get(self.from)?, stars.get(self.to)?))
    }
}

/// Parameters for [`build_links`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkParams {
    pub max_distance: f64,
    pub max_neighbors: usize,
}

/// Build the constellation edges for `stars`, whose ids are their indices.
///
/// O(n²) in the star count.
#[must_use]
pub fn build_links(stars: &[Star], params: LinkParams) -> Vec<Link> {
    if params.max_neighbors == 0 || params.max_distance <= 0.0 {
        return Vec::new();
    }

    let mut links = Vec::new();
    let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(stars.len());

    for (i, star) in stars.iter().enumerate() {
        candidates.clear();
        candidates.extend(
            stars
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(j, other)| (j, star.position().distance(other.position())))
                .filter(|(_, d)| *d <= params.max_distance),
        );
        // Stable: equal distances keep index order.
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        for &(j, _) in candidates.iter().take(params.max_neighbors) {
            if i < j {
                links.push(Link { from: i, to: j });
            }
        }
    }

    links
}
