//! End-to-end runs: OBJ on disk → hex mesh → VTK on disk.

use std::fs;
use std::path::PathBuf;

use hexmesh::io::{load_surface_obj, read_vtk_counts};
use hexmesh::{run, HexMeshError, MeshingConfig, Strategy, UniformTransform};

const CUBE_OBJ: &str = "\
# closed unit cube, quads only
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
f 1 4 3 2
f 5 6 7 8
f 1 2 6 5
f 2 3 7 6
f 3 4 8 7
f 4 1 5 8
";

/// Scratch directory unique to this test process and test name.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hexmesh-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn loft_cube_round_trip() {
    let dir = scratch("loft");
    let input = dir.join("cube.obj");
    let output = dir.join("cube.vtk");
    fs::write(&input, CUBE_OBJ).unwrap();

    let config = MeshingConfig {
        strategy: Strategy::Loft,
        layers: 10,
        transform: UniformTransform::new(10.0, glam::DVec3::splat(100.0)).unwrap(),
        input: input.clone(),
        output: output.clone(),
        ..MeshingConfig::default()
    };
    let summary = run(&config).unwrap();

    assert_eq!(summary.surface_vertices, 8);
    assert_eq!(summary.surface_quads, 6);
    assert_eq!(summary.vertices, 11 * 4);
    assert_eq!(summary.hexes, 10 * 4);

    let text = fs::read_to_string(&output).unwrap();
    let counts = read_vtk_counts(&text).unwrap();
    assert_eq!(counts.points, summary.vertices);
    assert_eq!(counts.cells, summary.hexes);
    assert!(text.contains(&format!("CELLS 40 {}", 9 * 40)));
    assert_eq!(text.lines().filter(|l| *l == "12").count(), 40);

    // Level 0 is the top loop, scaled and shifted
    let first_point = text.lines().nth(5).unwrap();
    assert!(first_point.ends_with(" 110"), "{first_point}");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn lattice_cube_round_trip() {
    let dir = scratch("lattice");
    let input = dir.join("cube.obj");
    let output = dir.join("cube.vtk");
    fs::write(&input, CUBE_OBJ).unwrap();

    let config = MeshingConfig {
        strategy: Strategy::Lattice,
        resolution: 0.25,
        input,
        output: output.clone(),
        ..MeshingConfig::default()
    };
    let summary = run(&config).unwrap();
    assert_eq!(summary.hexes, 64);
    assert_eq!(summary.vertices, 64 * 8);

    let counts = read_vtk_counts(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!((counts.points, counts.cells), (512, 64));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn welded_lattice_round_trip() {
    let dir = scratch("welded");
    let input = dir.join("cube.obj");
    let output = dir.join("cube.vtk");
    fs::write(&input, CUBE_OBJ).unwrap();

    let config = MeshingConfig {
        strategy: Strategy::Lattice,
        resolution: 0.5,
        weld: true,
        input,
        output: output.clone(),
        ..MeshingConfig::default()
    };
    let summary = run(&config).unwrap();
    assert_eq!((summary.vertices, summary.hexes), (27, 8));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn missing_input_degrades_to_empty_surface() {
    let dir = scratch("missing");
    let input = dir.join("absent.obj");
    assert!(load_surface_obj(&input).is_empty());

    let lattice = MeshingConfig {
        strategy: Strategy::Lattice,
        input: input.clone(),
        output: dir.join("empty.vtk"),
        ..MeshingConfig::default()
    };
    let summary = run(&lattice).unwrap();
    assert_eq!((summary.vertices, summary.hexes), (0, 0));

    let loft = MeshingConfig {
        strategy: Strategy::Loft,
        input,
        output: dir.join("never.vtk"),
        ..MeshingConfig::default()
    };
    assert!(matches!(run(&loft), Err(HexMeshError::EmptyInput { .. })));
    assert!(!dir.join("never.vtk").exists());

    fs::remove_dir_all(dir).ok();
}
