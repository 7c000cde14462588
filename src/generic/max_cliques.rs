/*!
Enumeration of the maximal cliques of an undirected graph.

The graph is given as per-vertex adjacency lists, with vertices the indices of the outer vector,
and is assumed undirected: whenever *v* lists *u*, *u* lists *v*.

Enumeration is Bron–Kerbosch with pivoting: a partial clique is extended through the candidate
vertices adjacent to all of its members, and at each step a pivot is chosen to skip candidates
whose cliques are found through the pivot instead.
A clique is reported only when both the candidate set and the excluded set are empty, so every
reported clique is maximal --- in particular, an isolated vertex is reported as the singleton
clique of itself.

Output is deterministic for a fixed input, with each clique listed in increasing vertex order.

```rust
# use canonical_pdb::generic::max_cliques::max_cliques;
let graph = vec![vec![1], vec![0], vec![]];

let cliques = max_cliques(&graph);

assert!(cliques.contains(&vec![0, 1]));
assert!(cliques.contains(&vec![2]));
assert_eq!(cliques.len(), 2);
```
*/

/// All maximal cliques of the graph, each in increasing vertex order.
pub fn max_cliques(adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut cliques = Vec::new();
    let mut clique = Vec::new();

    let candidates = (0..adjacency.len()).collect();

    extend(adjacency, &mut clique, candidates, Vec::new(), &mut cliques);

    cliques
}

/// Extends `clique` through `candidates`, reporting to `cliques`.
///
/// `candidates` and `excluded` hold exactly the vertices adjacent to every member of `clique`,
/// with `excluded` those already explored in an earlier branch.
fn extend(
    adjacency: &[Vec<usize>],
    clique: &mut Vec<usize>,
    mut candidates: Vec<usize>,
    mut excluded: Vec<usize>,
    cliques: &mut Vec<Vec<usize>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        // Members were pushed in branch order, which pivoting may permute.
        let mut maximal = clique.clone();
        maximal.sort_unstable();
        cliques.push(maximal);
        return;
    }

    // The union of candidates and excluded is non-empty here.
    let pivot = candidates
        .iter()
        .chain(excluded.iter())
        .copied()
        .max_by_key(|&vertex| {
            candidates
                .iter()
                .filter(|&&candidate| adjacency[vertex].contains(&candidate))
                .count()
        })
        .unwrap();

    let branches: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&vertex| !adjacency[pivot].contains(&vertex))
        .collect();

    for vertex in branches {
        let neighbours = &adjacency[vertex];

        clique.push(vertex);
        extend(
            adjacency,
            clique,
            candidates
                .iter()
                .copied()
                .filter(|candidate| neighbours.contains(candidate))
                .collect(),
            excluded
                .iter()
                .copied()
                .filter(|prior| neighbours.contains(prior))
                .collect(),
            cliques,
        );
        clique.pop();

        candidates.retain(|&candidate| candidate != vertex);
        excluded.push(vertex);
    }
}
