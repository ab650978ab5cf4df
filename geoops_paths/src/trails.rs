use super::PathGraph;
use geo::LineString;

/// Minimum trail cover: odd vertices are paired by virtual edges so that every
/// component has an Euler circuit, and the circuits are cut where they use a virtual
/// edge. Components without odd vertices come out as closed rings.
pub(crate) fn spliced_trails(graph: &mut PathGraph) -> Vec<LineString<f64>> {
	let odd: Vec<usize> = (0..graph.vertex_count()).filter(|v| graph.degree(*v) % 2 == 1).collect();
	for pair in odd.chunks_exact(2) {
		graph.add_virtual_edge(pair[0], pair[1]);
	}

	let mut used = vec![false; graph.edge_count()];
	let mut cursor = vec![0; graph.vertex_count()];
	let mut trails = Vec::new();

	for start in 0..graph.vertex_count() {
		if graph.next_unused(start, &used, &mut cursor).is_none() {
			continue;
		}
		let (vertices, edges) = euler_circuit(graph, start, &mut used, &mut cursor);
		cut_circuit(graph, &vertices, &edges, &mut trails);
	}
	trails
}

/// Walks from odd vertices first, then from any vertex, until every edge is used.
/// Each walk ends where it gets stuck; no sub-loops are spliced in.
pub(crate) fn greedy_trails(graph: &PathGraph) -> Vec<LineString<f64>> {
	let mut used = vec![false; graph.edge_count()];
	let mut cursor = vec![0; graph.vertex_count()];
	let mut trails = Vec::new();

	let odd = (0..graph.vertex_count()).filter(|v| graph.degree(*v) % 2 == 1);
	let starts: Vec<usize> = odd.chain(0..graph.vertex_count()).collect();

	for start in starts {
		while graph.next_unused(start, &used, &mut cursor).is_some() {
			let mut coords = vec![graph.coord(start)];
			let mut vertex = start;
			while let Some((next, edge)) = graph.next_unused(vertex, &used, &mut cursor) {
				used[edge] = true;
				coords.push(graph.coord(next));
				vertex = next;
			}
			trails.push(LineString::new(coords));
		}
	}
	trails
}

/// Hierholzer's algorithm. Returns the circuit's vertices (first equals last) and
/// the edges between them, `edges[i]` joining `vertices[i]` and `vertices[i + 1]`.
fn euler_circuit(
	graph: &PathGraph,
	start: usize,
	used: &mut [bool],
	cursor: &mut [usize],
) -> (Vec<usize>, Vec<usize>) {
	let mut stack: Vec<(usize, Option<usize>)> = vec![(start, None)];
	let mut circuit: Vec<(usize, Option<usize>)> = Vec::new();

	while let Some(&(vertex, via)) = stack.last() {
		if let Some((next, edge)) = graph.next_unused(vertex, used, cursor) {
			used[edge] = true;
			stack.push((next, Some(edge)));
		} else {
			stack.pop();
			circuit.push((vertex, via));
		}
	}
	circuit.reverse();

	let vertices = circuit.iter().map(|(v, _)| *v).collect();
	let edges = circuit.iter().filter_map(|(_, e)| *e).collect();
	(vertices, edges)
}

fn cut_circuit(graph: &PathGraph, vertices: &[usize], edges: &[usize], trails: &mut Vec<LineString<f64>>) {
	let Some(first_virtual) = edges.iter().position(|e| graph.is_virtual(*e)) else {
		trails.push(LineString::new(vertices.iter().map(|v| graph.coord(*v)).collect()));
		return;
	};

	// rotate so that the walk begins right after a virtual edge
	let count = edges.len();
	let first = (first_virtual + 1) % count;
	let mut coords = vec![graph.coord(vertices[first])];
	for step in 0..count {
		let i = (first + step) % count;
		if graph.is_virtual(edges[i]) {
			if coords.len() >= 2 {
				trails.push(LineString::new(std::mem::take(&mut coords)));
			}
			coords = vec![graph.coord(vertices[i + 1])];
		} else {
			coords.push(graph.coord(vertices[i + 1]));
		}
	}
}
