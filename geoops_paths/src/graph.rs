use geo::{Coord, LineString, MultiLineString};
use geoops_core::LexPoint;
use std::collections::{BTreeMap, BTreeSet};

/// Undirected multigraph over the distinct coordinates of a path set.
///
/// Vertex indices follow the lexicographic order of their coordinates. Edges added
/// with [`PathGraph::add_virtual_edge`] come after all real edges.
pub(crate) struct PathGraph {
	vertices: Vec<Coord<f64>>,
	edges: Vec<[usize; 2]>,
	real_edges: usize,
	adjacency: Vec<Vec<(usize, usize)>>,
	isolated: Vec<usize>,
}

impl PathGraph {
	pub fn from_paths(paths: &MultiLineString<f64>, dedupe: bool) -> Self {
		let index: BTreeMap<LexPoint<f64>, usize> = paths
			.iter()
			.flat_map(|line| line.coords().map(|c| LexPoint(*c)))
			.collect::<BTreeSet<_>>()
			.into_iter()
			.enumerate()
			.map(|(i, p)| (p, i))
			.collect();
		let vertices: Vec<Coord<f64>> = index.keys().map(LexPoint::coord).collect();

		let mut graph = PathGraph {
			adjacency: vec![Vec::new(); vertices.len()],
			vertices,
			edges: Vec::new(),
			real_edges: 0,
			isolated: Vec::new(),
		};

		let mut seen = BTreeSet::new();
		let mut point_only = BTreeSet::new();
		for line in paths {
			let mut has_segment = false;
			for segment in line.lines() {
				let a = index[&LexPoint(segment.start)];
				let b = index[&LexPoint(segment.end)];
				if a == b {
					continue;
				}
				has_segment = true;
				if dedupe && !seen.insert((a.min(b), a.max(b))) {
					continue;
				}
				graph.push_edge(a, b);
			}
			if !has_segment {
				if let Some(first) = line.0.first() {
					point_only.insert(index[&LexPoint(*first)]);
				}
			}
		}
		graph.real_edges = graph.edges.len();
		graph.isolated = point_only.into_iter().filter(|v| graph.adjacency[*v].is_empty()).collect();
		graph
	}

	fn push_edge(&mut self, a: usize, b: usize) {
		let edge = self.edges.len();
		self.edges.push([a, b]);
		self.adjacency[a].push((b, edge));
		self.adjacency[b].push((a, edge));
	}

	pub fn add_virtual_edge(&mut self, a: usize, b: usize) {
		self.push_edge(a, b);
	}

	pub fn is_virtual(&self, edge: usize) -> bool {
		edge >= self.real_edges
	}

	pub fn real_edge_count(&self) -> usize {
		self.real_edges
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn coord(&self, vertex: usize) -> Coord<f64> {
		self.vertices[vertex]
	}

	pub fn degree(&self, vertex: usize) -> usize {
		self.adjacency[vertex].len()
	}

	/// Returns the next edge at `vertex` not yet marked in `used`, advancing `cursor`
	/// past everything already consumed.
	pub fn next_unused(&self, vertex: usize, used: &[bool], cursor: &mut [usize]) -> Option<(usize, usize)> {
		let neighbours = &self.adjacency[vertex];
		while cursor[vertex] < neighbours.len() {
			let (other, edge) = neighbours[cursor[vertex]];
			if !used[edge] {
				return Some((other, edge));
			}
			cursor[vertex] += 1;
		}
		None
	}

	/// One-point paths for input points that no segment touches.
	pub fn isolated_points(&self) -> Vec<LineString<f64>> {
		self
			.isolated
			.iter()
			.map(|v| LineString::new(vec![self.vertices[*v]]))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn vertices_are_sorted_and_shared() {
		let paths = MultiLineString::new(vec![
			LineString::from(vec![(2.0, 0.0), (0.0, 0.0)]),
			LineString::from(vec![(0.0, 0.0), (1.0, 5.0)]),
		]);
		let graph = PathGraph::from_paths(&paths, true);
		assert_eq!(graph.vertex_count(), 3);
		assert_eq!(graph.coord(0), Coord { x: 0.0, y: 0.0 });
		assert_eq!(graph.coord(2), Coord { x: 2.0, y: 0.0 });
		assert_eq!(graph.degree(0), 2);
		assert_eq!(graph.real_edge_count(), 2);
	}

	#[test]
	fn virtual_edges_follow_real_ones() {
		let paths = MultiLineString::new(vec![LineString::from(vec![(0.0, 0.0), (1.0, 0.0)])]);
		let mut graph = PathGraph::from_paths(&paths, true);
		graph.add_virtual_edge(0, 1);
		assert_eq!(graph.edge_count(), 2);
		assert!(!graph.is_virtual(0));
		assert!(graph.is_virtual(1));
		assert_eq!(graph.degree(1), 2);
	}
}
