//! Similarity graph over the answers to a single question.

use super::similarity::similarity;

/// One qualifying answer as seen by the graph builder.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub(crate) student_id: &'a str,
    pub(crate) text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SimilarityEdge {
    pub(crate) left: usize,
    pub(crate) right: usize,
    pub(crate) score: f64,
}

/// Answers connected directly or transitively by similarity edges.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnswerCluster {
    /// Candidate indices in ascending order.
    pub(crate) members: Vec<usize>,
    /// Highest edge score inside the cluster.
    pub(crate) max_score: f64,
}

/// Scores every pair of answers by different students and keeps those at or
/// above `threshold`.
pub(crate) fn similarity_edges(candidates: &[Candidate<'_>], threshold: f64) -> Vec<SimilarityEdge> {
    let mut edges = Vec::new();

    for (left, a) in candidates.iter().enumerate() {
        for (offset, b) in candidates[left + 1..].iter().enumerate() {
            if a.student_id == b.student_id {
                continue;
            }

            let score = similarity(a.text, b.text);
            if score >= threshold {
                edges.push(SimilarityEdge { left, right: left + 1 + offset, score });
            }
        }
    }

    edges
}

/// Connected components of size two or more, in order of their smallest member.
pub(crate) fn connected_clusters(node_count: usize, edges: &[SimilarityEdge]) -> Vec<AnswerCluster> {
    let mut adjacency = vec![Vec::new(); node_count];
    for edge in edges {
        adjacency[edge.left].push(edge.right);
        adjacency[edge.right].push(edge.left);
    }

    let mut component_of: Vec<Option<usize>> = vec![None; node_count];
    let mut clusters: Vec<AnswerCluster> = Vec::new();

    for start in 0..node_count {
        if component_of[start].is_some() || adjacency[start].is_empty() {
            continue;
        }

        let id = clusters.len();
        let mut members = Vec::new();
        let mut stack = vec![start];
        component_of[start] = Some(id);

        while let Some(node) = stack.pop() {
            members.push(node);
            for &next in &adjacency[node] {
                if component_of[next].is_none() {
                    component_of[next] = Some(id);
                    stack.push(next);
                }
            }
        }

        members.sort_unstable();
        clusters.push(AnswerCluster { members, max_score: 0.0 });
    }

    // Both endpoints of an edge always share a component.
    for edge in edges {
        if let Some(id) = component_of[edge.left] {
            let cluster = &mut clusters[id];
            cluster.max_score = cluster.max_score.max(edge.score);
        }
    }

    clusters
}
