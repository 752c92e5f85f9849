use std::{cell::Cell, rc::Rc};

use indexed_heap::IndexedHeap;

/// Graph vertex with a tentative distance that the heap orders by.
struct Vertex {
    id: usize,
    dist: Cell<u64>,
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Dijkstra with decrease-key: every vertex is queued once and repositioned on relaxation.
fn dijkstra(num_vertices: usize, edges: &[(usize, usize, u64)], source: usize) -> Vec<u64> {
    let mut adjacency = vec![Vec::new(); num_vertices];
    for &(from, to, weight) in edges {
        adjacency[from].push((to, weight));
    }

    let vertices: Vec<Rc<Vertex>> = (0..num_vertices)
        .map(|id| {
            Rc::new(Vertex {
                id,
                dist: Cell::new(if id == source { 0 } else { u64::MAX }),
            })
        })
        .collect();

    let mut queue = IndexedHeap::by_key(|v: &Rc<Vertex>| v.dist.get());
    queue.extend(vertices.iter().cloned());

    while let Ok(vertex) = queue.poll() {
        let dist = vertex.dist.get();
        if dist == u64::MAX {
            break; // Remaining vertices are unreachable
        }

        for &(to, weight) in &adjacency[vertex.id] {
            let next = &vertices[to];
            let candidate = dist + weight;
            if queue.contains(next) && candidate < next.dist.get() {
                next.dist.set(candidate);
                queue.update_priority(next).unwrap();
                assert_eq!(queue.check_invariants(), Ok(()));
            }
        }
    }

    vertices.iter().map(|v| v.dist.get()).collect()
}

/// Bellman-Ford as the reference for random graphs.
fn bellman_ford(num_vertices: usize, edges: &[(usize, usize, u64)], source: usize) -> Vec<u64> {
    let mut dist = vec![u64::MAX; num_vertices];
    dist[source] = 0;
    for _ in 0..num_vertices {
        for &(from, to, weight) in edges {
            if dist[from] != u64::MAX && dist[from] + weight < dist[to] {
                dist[to] = dist[from] + weight;
            }
        }
    }
    dist
}

#[test]
fn test_small_graph() {
    //   0 --4--> 1 --1--> 3
    //   |        ^        ^
    //   1        2        5
    //   v        |        |
    //   2 -------+--------+
    let edges = vec![(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)];
    assert_eq!(dijkstra(5, &edges, 0), vec![0, 3, 1, 4, u64::MAX]);
}

#[test]
fn test_random_graphs_match_reference() {
    let mut rng = fastrand::Rng::with_seed(2024);

    for _ in 0..20 {
        let num_vertices = rng.usize(2..60);
        let num_edges = rng.usize(0..num_vertices * 4);
        let edges: Vec<(usize, usize, u64)> = (0..num_edges)
            .map(|_| {
                (
                    rng.usize(0..num_vertices),
                    rng.usize(0..num_vertices),
                    rng.u64(0..50),
                )
            })
            .collect();

        assert_eq!(
            dijkstra(num_vertices, &edges, 0),
            bellman_ford(num_vertices, &edges, 0)
        );
    }
}
