//! Decomposition of line networks into trails.
//!
//! A set of linestrings is treated as an undirected multigraph whose vertices are the
//! distinct coordinates and whose edges are the segments between consecutive
//! coordinates. [`make_eulerian_paths`] re-walks that graph so that every edge is
//! covered by exactly one output path, using as few paths as possible. Offsetting the
//! resulting trails avoids the overlapping and doubled-back strokes that confuse
//! buffer algorithms.

mod graph;
mod trails;

use geo::MultiLineString;
use graph::PathGraph;

/// Switches for [`make_eulerian_paths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecomposeOptions {
	/// Pair odd vertices and splice closed sub-loops into the walk, which yields the
	/// minimum number of trails and keeps closed loops closed. Otherwise paths are
	/// walked greedily until they get stuck.
	pub prefer_closed: bool,
	/// Keep each segment only once, even if the input repeats it (in either direction).
	pub minimize_edges: bool,
}

impl Default for DecomposeOptions {
	fn default() -> Self {
		Self {
			prefer_closed: true,
			minimize_edges: true,
		}
	}
}

/// Splits `paths` into trails that together cover every segment exactly once.
///
/// Zero-length segments are dropped. Linestrings that collapse to a single point and
/// are not touched by any other segment are kept as one-point paths.
///
/// ```
/// use geo::{LineString, MultiLineString};
/// use geoops_paths::{DecomposeOptions, make_eulerian_paths};
///
/// // two strokes of the same triangle, one drawn twice
/// let input = MultiLineString::new(vec![
/// 	LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
/// 	LineString::from(vec![(1.0, 1.0), (0.0, 0.0)]),
/// 	LineString::from(vec![(1.0, 0.0), (0.0, 0.0)]),
/// ]);
/// let output = make_eulerian_paths(&input, DecomposeOptions::default());
/// assert_eq!(output.0.len(), 1);
/// assert!(output.0[0].is_closed());
/// ```
#[must_use]
pub fn make_eulerian_paths(paths: &MultiLineString<f64>, options: DecomposeOptions) -> MultiLineString<f64> {
	let mut graph = PathGraph::from_paths(paths, options.minimize_edges);

	let mut trails = if options.prefer_closed {
		trails::spliced_trails(&mut graph)
	} else {
		trails::greedy_trails(&graph)
	};
	trails.extend(graph.isolated_points());

	log::trace!(
		"decomposed {} linestrings ({} segments) into {} paths",
		paths.0.len(),
		graph.real_edge_count(),
		trails.len()
	);

	MultiLineString::new(trails)
}

#[cfg(test)]
mod tests {
	use super::*;
	use geo::{Coord, LineString};
	use geoops_core::LexPoint;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use std::collections::BTreeMap;

	fn mls(lines: &[&[(f64, f64)]]) -> MultiLineString<f64> {
		MultiLineString::new(lines.iter().map(|l| LineString::from(l.to_vec())).collect())
	}

	/// Counts every undirected segment of the input.
	fn segment_histogram(m: &MultiLineString<f64>) -> BTreeMap<(LexPoint<f64>, LexPoint<f64>), usize> {
		let mut histogram = BTreeMap::new();
		for line in m.iter() {
			for segment in line.lines() {
				let (a, b) = (LexPoint(segment.start), LexPoint(segment.end));
				if a == b {
					continue;
				}
				let key = if a < b { (a, b) } else { (b, a) };
				*histogram.entry(key).or_insert(0) += 1;
			}
		}
		histogram
	}

	#[rstest]
	#[case(true)]
	#[case(false)]
	fn covers_every_edge_once(#[case] prefer_closed: bool) {
		let input = mls(&[
			&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)],
			&[(2.0, 0.0), (4.0, 0.0)],
			&[(2.0, 2.0), (0.0, 2.0), (0.0, 0.0)],
			&[(2.0, 0.0), (2.0, -2.0)],
		]);
		let output = make_eulerian_paths(
			&input,
			DecomposeOptions {
				prefer_closed,
				minimize_edges: true,
			},
		);
		assert_eq!(segment_histogram(&output), segment_histogram(&input));
	}

	#[test]
	fn star_needs_two_trails() {
		// four spokes meeting at the origin: four odd vertices, so two trails
		let input = mls(&[
			&[(-1.0, 0.0), (0.0, 0.0)],
			&[(1.0, 0.0), (0.0, 0.0)],
			&[(0.0, -1.0), (0.0, 0.0)],
			&[(0.0, 1.0), (0.0, 0.0)],
		]);
		let output = make_eulerian_paths(&input, DecomposeOptions::default());
		assert_eq!(output.0.len(), 2);
		assert!(output.0.iter().all(|l| l.0.len() == 3));
	}

	#[test]
	fn duplicate_segments_are_merged() {
		let input = mls(&[&[(0.0, 0.0), (1.0, 0.0)], &[(1.0, 0.0), (0.0, 0.0)], &[(0.0, 0.0), (1.0, 0.0)]]);
		let output = make_eulerian_paths(&input, DecomposeOptions::default());
		assert_eq!(output, mls(&[&[(0.0, 0.0), (1.0, 0.0)]]));
	}

	#[test]
	fn duplicate_segments_are_kept_without_minimizing() {
		let input = mls(&[&[(0.0, 0.0), (1.0, 0.0)], &[(1.0, 0.0), (0.0, 0.0)]]);
		let output = make_eulerian_paths(
			&input,
			DecomposeOptions {
				prefer_closed: true,
				minimize_edges: false,
			},
		);
		// the doubled segment forms a closed loop
		assert_eq!(output, mls(&[&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]]));
	}

	#[test]
	fn closed_square_stays_closed() {
		let input = mls(&[
			&[(0.0, 0.0), (1.0, 0.0)],
			&[(1.0, 1.0), (1.0, 0.0)],
			&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
		]);
		let output = make_eulerian_paths(&input, DecomposeOptions::default());
		assert_eq!(output.0.len(), 1);
		assert!(output.0[0].is_closed());
		assert_eq!(output.0[0].0.len(), 5);
	}

	#[test]
	fn crossing_segments_without_shared_vertex_stay_apart() {
		let input = mls(&[&[(-1.0, 0.0), (1.0, 0.0)], &[(0.0, -1.0), (0.0, 1.0)]]);
		let output = make_eulerian_paths(&input, DecomposeOptions::default());
		assert_eq!(output.0.len(), 2);
	}

	#[test]
	fn isolated_points_are_kept_once() {
		let input = mls(&[
			&[(5.0, 5.0), (5.0, 5.0)],
			&[(5.0, 5.0)],
			&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)],
			&[(1.0, 0.0)],
		]);
		let output = make_eulerian_paths(&input, DecomposeOptions::default());
		assert_eq!(output, mls(&[&[(0.0, 0.0), (1.0, 0.0)], &[(5.0, 5.0)]]));
	}

	#[test]
	fn segments_meeting_at_a_signed_zero_join() {
		let input = mls(&[&[(-1.0, 0.0), (0.0, 0.0)], &[(-0.0, 0.0), (1.0, 0.0)]]);
		let output = make_eulerian_paths(&input, DecomposeOptions::default());
		assert_eq!(output.0.len(), 1);
		assert_eq!(output.0[0].0.len(), 3);
	}

	#[test]
	fn mirrored_zero_duplicates_are_merged() {
		let input = mls(&[&[(0.0, 0.0), (1.0, 0.0)], &[(1.0, -0.0), (-0.0, 0.0)]]);
		let output = make_eulerian_paths(&input, DecomposeOptions::default());
		assert_eq!(output.0.len(), 1);
		assert_eq!(output.0[0].0.len(), 2);
	}

	#[test]
	fn empty_input() {
		let output = make_eulerian_paths(&MultiLineString::new(vec![]), DecomposeOptions::default());
		assert!(output.0.is_empty());
	}

	#[test]
	fn output_is_deterministic() {
		let input = mls(&[&[(3.0, 0.0), (0.0, 0.0), (0.0, 3.0)], &[(0.0, 0.0), (-3.0, 0.0)]]);
		let a = make_eulerian_paths(&input, DecomposeOptions::default());
		let b = make_eulerian_paths(&input, DecomposeOptions::default());
		assert_eq!(a, b);
		assert_eq!(a.0.len(), 2);
		assert_eq!(a.0[1].0, vec![Coord { x: -3.0, y: 0.0 }, Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 0.0 }]);
	}
}
