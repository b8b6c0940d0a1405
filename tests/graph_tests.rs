use geo::{Coord, LineString};
use road_graph::{Error, Graph};

fn coord(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

#[test]
fn test_vertex_ids_are_unique() {
    let mut graph = Graph::new();
    graph.add_vertex("a", coord(0.0, 0.0)).unwrap();
    let err = graph.add_vertex("a", coord(1.0, 1.0)).unwrap_err();
    assert!(matches!(&err, Error::DuplicateVertex(id) if id == "a"));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_shared_coordinates_are_allowed() {
    let mut graph = Graph::new();
    let first = graph.add_vertex("a", coord(2.0, 3.0)).unwrap();
    let second = graph.add_vertex("b", coord(2.0, 3.0)).unwrap();
    assert_ne!(first, second);
    assert_eq!(graph.find_vertex_by_coordinate(coord(2.0, 3.0)), Some(first));
    assert_eq!(graph.find_vertex_by_coordinate(coord(2.0, 3.5)), None);
    assert_eq!(graph.find_vertex("b"), Some(second));
    assert_eq!(graph.find_vertex("z"), None);
}

#[test]
fn test_edges_register_on_their_endpoints() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a", coord(0.0, 0.0)).unwrap();
    let b = graph.add_vertex("b", coord(1.0, 0.0)).unwrap();
    let ab = graph.add_edge("ab", a, b, None).unwrap();
    let ba = graph.add_edge("ba", b, a, None).unwrap();
    let aa = graph.add_edge("aa", a, a, None).unwrap();

    assert_eq!(graph.vertex(a).out_edges(), &[ab, aa]);
    assert_eq!(graph.vertex(a).in_edges(), &[ba, aa]);
    assert_eq!(graph.vertex(b).out_edges(), &[ba]);
    assert_eq!(graph.vertex(b).in_edges(), &[ab]);

    let out_ids: Vec<&str> = graph.out_edges(a).map(|e| e.id()).collect();
    assert_eq!(out_ids, vec!["ab", "aa"]);
    let in_ids: Vec<&str> = graph.in_edges(b).map(|e| e.id()).collect();
    assert_eq!(in_ids, vec!["ab"]);
    assert_eq!(graph.find_edge("ba"), Some(ba));
}

#[test]
fn test_edge_construction_errors() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a", coord(0.0, 0.0)).unwrap();
    graph.add_edge("e", a, a, None).unwrap();

    let err = graph.add_edge("e", a, a, None).unwrap_err();
    assert!(matches!(&err, Error::DuplicateEdge(id) if id == "e"));

    let mut other = Graph::new();
    other.add_vertex("x", coord(0.0, 0.0)).unwrap();
    let foreign = other.add_vertex("y", coord(1.0, 0.0)).unwrap();
    let err = graph.add_edge("f", a, foreign, None).unwrap_err();
    assert!(matches!(err, Error::InvalidVertex(1)));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.vertex(a).out_edges().len() == 1);
}

#[test]
fn test_edge_cost_follows_geometry() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("a", coord(0.0, 0.0)).unwrap();
    let b = graph.add_vertex("b", coord(10.0, 0.0)).unwrap();
    let bare = graph.add_edge("bare", a, b, None).unwrap();
    let shaped = graph
        .add_edge(
            "shaped",
            a,
            b,
            Some(LineString::new(vec![coord(0.0, 0.0), coord(0.0, 5.0), coord(10.0, 5.0), coord(10.0, 0.0)])),
        )
        .unwrap();

    // no straight-line fallback without geometry
    assert_eq!(graph.edge(bare).cost(), 0.0);
    assert!(graph.edge(bare).geometry().is_none());
    assert!((graph.edge(shaped).cost() - 20.0).abs() < 1e-12);

    assert_eq!(
        graph.edge_geometry(bare).into_owned(),
        LineString::new(vec![coord(0.0, 0.0), coord(10.0, 0.0)])
    );
    assert_eq!(graph.edge_geometry(shaped).0.len(), 4);
}
