use log::{debug, info};
use priomap::{Less, PriorityMap, UnionFind};

fn main() {
    pretty_env_logger::init();

    // u -> v edges
    let graph: Vec<Vec<usize>> = vec![
        vec![1, 3],
        vec![],
        vec![0, 4],
        vec![1],
        vec![3, 5],
        vec![1],
        vec![7], // separate component
        vec![],
    ];

    let mut parts = UnionFind::new();
    for u in 0..graph.len() {
        parts.insert_node(u);
    }
    for (u, edges) in graph.iter().enumerate() {
        for v in edges {
            parts.union(&u, v);
        }
    }
    info!("{} weakly connected components", parts.components());

    // Kahn's algorithm, smallest in-degree on top
    let mut in_degree: PriorityMap<usize, i32, Less> = PriorityMap::with_comparator(Less);
    for u in 0..graph.len() {
        in_degree.set(u, 0);
    }
    for edges in &graph {
        for &v in edges {
            in_degree.at(v).increment();
        }
    }

    let mut order = Vec::with_capacity(graph.len());
    while let Ok((u, d)) = in_degree.pop() {
        if d != 0 {
            println!("cycle detected, {} nodes left", in_degree.len() + 1);
            return;
        }
        debug!("visit {}", u);
        order.push(u);
        for &v in &graph[u] {
            in_degree.at(v).decrement();
        }
    }
    println!("{:?}", order);
}
