use graphwalk::{load_graph, load_graph_with, GraphError, LoadError, LoaderConfig, VertexId};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn strs(ids: &[VertexId]) -> Vec<&str> {
    ids.iter().map(VertexId::as_str).collect()
}

#[test]
fn test_load_undirected_file_and_query() {
    let file = write_file("G\na,b,c,d,e,f\n(a,b)\n(b,c)\n(c,d)\n(d,a)\n(e,a)\n(f,e)\n(f,a)\n");

    let graph = load_graph(file.path()).unwrap();
    assert!(!graph.is_directed());
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 7);

    let order: Vec<_> = graph.bfs_traversal("a").unwrap().map(VertexId::as_str).collect();
    assert_eq!(order, vec!["a", "b", "d", "e", "f", "c"]);
    assert_eq!(strs(&graph.find_shortest_path("a", "d").unwrap().unwrap()), vec!["a", "d"]);
}

#[test]
fn test_load_directed_file_and_sort() {
    let file = write_file("D\nshirt,tie,jacket\n(shirt,tie)\n(tie,jacket)\n");

    let graph = load_graph(file.path()).unwrap();
    assert!(graph.is_directed());
    assert_eq!(strs(&graph.topological_sort().unwrap()), vec!["shirt", "tie", "jacket"]);
}

#[test]
fn test_load_with_custom_markers_from_json() {
    let config_file =
        write_file(r#"{"undirected_marker": "undirected", "directed_marker": "directed"}"#);
    let config = LoaderConfig::from_json_file(config_file.path()).unwrap();

    let file = write_file("directed\nx,y\n(x,y)\n");
    let graph = load_graph_with(file.path(), &config).unwrap();
    assert!(graph.is_directed());
    assert!(!graph.get_vertex("y").unwrap().has_neighbor("x"));

    // The default markers no longer apply
    let file = write_file("D\nx,y\n");
    assert!(matches!(
        load_graph_with(file.path(), &config),
        Err(LoadError::InvalidGraphType(_))
    ));
}

#[test]
fn test_bad_config_is_reported() {
    let config_file = write_file("{ not json");
    let err = LoaderConfig::from_json_file(config_file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_graph(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_edge_to_undeclared_vertex_fails() {
    let file = write_file("G\na,b\n(a,b)\n(b,q)\n");

    match load_graph(file.path()) {
        Err(LoadError::UnknownVertex { line, source }) => {
            assert_eq!(line, 4);
            assert_eq!(source, GraphError::VertexNotFound(VertexId::new("q")));
        }
        other => panic!("expected UnknownVertex, got {:?}", other.map(|g| g.vertex_count())),
    }
}

#[test]
fn test_improper_graph_type() {
    let file = write_file("W\na,b\n");
    let err = load_graph(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Improper graph type: \"W\"");
}
