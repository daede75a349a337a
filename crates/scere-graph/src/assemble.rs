//! Gene-list resolution, edge selection and the element list handed
//! to the network renderer.

use scere_common::{DistanceEdge, Locus};
use serde::Serialize;
use std::collections::HashSet;

/// Map external feature names (YORF) to internal SGDIDs through the
/// locus table. Names absent from the table resolve to nothing.
pub fn resolve_targets(gene_list: &[String], features: &[Locus]) -> Vec<Locus> {
    let wanted: HashSet<&str> = gene_list.iter().map(String::as_str).collect();
    features
        .iter()
        .filter(|locus| {
            locus
                .feature_name
                .as_deref()
                .is_some_and(|name| wanted.contains(name))
        })
        .cloned()
        .collect()
}

/// Keep the edges whose BOTH endpoints are in the resolved id set.
pub fn select_edges(edges: &[DistanceEdge], ids: &HashSet<String>) -> Vec<DistanceEdge> {
    edges
        .iter()
        .filter(|edge| ids.contains(&edge.a) && ids.contains(&edge.b))
        .cloned()
        .collect()
}

/// (min, max) distance over the selected edges, for the threshold
/// slider. `None` when no edge survived selection.
pub fn slider_bounds(edges: &[DistanceEdge]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for edge in edges {
        bounds = Some(match bounds {
            None => (edge.distance, edge.distance),
            Some((min, max)) => (min.min(edge.distance), max.max(edge.distance)),
        });
    }
    bounds
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeData {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeData {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// One element of the network renderer's input: nodes first, then
/// edges, each wrapped in a `data` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Element {
    Node { data: NodeData },
    Edge { data: EdgeData },
}

/// Build the renderer element list: one node per resolved target
/// (labelled by feature name), then one edge per selected distance.
pub fn elements(targets: &[Locus], edges: &[DistanceEdge]) -> Vec<Element> {
    let mut elements: Vec<Element> = targets
        .iter()
        .map(|locus| Element::Node {
            data: NodeData {
                id: locus.sgdid.clone(),
                label: locus
                    .feature_name
                    .clone()
                    .unwrap_or_else(|| locus.sgdid.clone()),
            },
        })
        .collect();
    elements.extend(edges.iter().map(|edge| Element::Edge {
        data: EdgeData {
            source: edge.a.clone(),
            target: edge.b.clone(),
            weight: edge.distance,
        },
    }));
    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scere_common::Strand;

    fn locus(sgdid: &str, name: &str) -> Locus {
        Locus {
            sgdid: sgdid.to_string(),
            feature_name: Some(name.to_string()),
            standard_name: None,
            chromosome: 1,
            start: 1,
            stop: 2,
            strand: Strand::Watson,
            description: None,
            go_term: None,
            tag: None,
        }
    }

    fn edge(a: &str, b: &str, distance: f64) -> DistanceEdge {
        DistanceEdge {
            a: a.to_string(),
            b: b.to_string(),
            distance,
        }
    }

    fn features() -> Vec<Locus> {
        vec![
            locus("S1", "YAL001C"),
            locus("S2", "YAL003W"),
            locus("S3", "YBR001C"),
        ]
    }

    #[test]
    fn both_endpoints_must_resolve() {
        let targets = resolve_targets(
            &["YAL001C".to_string(), "YAL003W".to_string()],
            &features(),
        );
        let ids: HashSet<String> = targets.iter().map(|locus| locus.sgdid.clone()).collect();
        let table = vec![
            edge("S1", "S2", 10.0),
            edge("S1", "S3", 20.0),
            edge("S3", "S2", 30.0),
        ];
        let selected = select_edges(&table, &ids);
        assert_eq!(selected, vec![edge("S1", "S2", 10.0)]);
    }

    #[test]
    fn empty_intersection_yields_nothing() {
        let targets = resolve_targets(&["YNOPE".to_string()], &features());
        assert!(targets.is_empty());
        let ids: HashSet<String> = targets.iter().map(|locus| locus.sgdid.clone()).collect();
        let selected = select_edges(&[edge("S1", "S2", 10.0)], &ids);
        assert!(selected.is_empty());
        assert_eq!(slider_bounds(&selected), None);
    }

    #[test]
    fn slider_bounds_span_the_selection() {
        let edges = vec![edge("S1", "S2", 10.0), edge("S2", "S3", 3.0)];
        assert_eq!(slider_bounds(&edges), Some((3.0, 10.0)));
    }

    #[test]
    fn elements_serialize_nodes_then_edges() {
        let targets = resolve_targets(&["YAL001C".to_string()], &features());
        let list = elements(&targets, &[edge("S1", "S1", 0.0)]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0]["data"]["id"], "S1");
        assert_eq!(json[0]["data"]["label"], "YAL001C");
        assert_eq!(json[1]["data"]["source"], "S1");
        assert_eq!(json[1]["data"]["weight"], 0.0);
    }
}
