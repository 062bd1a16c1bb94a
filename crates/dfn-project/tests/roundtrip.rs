use std::collections::BTreeMap;

use dfn_project::schema::*;
use dfn_project::{
    ProjectError, ValidationError, load_case, read_flow_network, read_fluid, read_network,
    read_thermal_network, save_case, write_document,
};

fn case() -> CaseDef {
    CaseDef {
        name: "parallel pair".to_string(),
        fluid: FluidDef {
            density: 1000.0,
            viscosity: 1e-3,
            heat_capacity: None,
        },
        network: NetworkDef {
            connectivity: vec![(0, 1), (1, 2), (1, 2), (2, 3)],
            length: vec![100.0, 500.0, 500.0, 100.0],
            thickness: vec![500.0; 4],
            width: vec![1e-3; 4],
        },
        flow: FlowDef {
            essential_bc: BTreeMap::from([(0, 0.0)]),
            point_sources: BTreeMap::from([(3, -50.0)]),
            correct: false,
        },
        thermal: None,
        temperature: vec![],
        study: None,
    }
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("dfn_project_{name}"))
}

#[test]
fn roundtrip_yaml() {
    let path = temp_path("roundtrip.yaml");
    save_case(&path, &case()).unwrap();
    assert_eq!(load_case(&path).unwrap(), case());
}

#[test]
fn roundtrip_json() {
    let path = temp_path("roundtrip.json");
    save_case(&path, &case()).unwrap();
    assert_eq!(load_case(&path).unwrap(), case());
}

#[test]
fn save_rejects_invalid_case() {
    let mut c = case();
    c.flow.essential_bc.clear();
    let err = save_case(&temp_path("invalid.yaml"), &c).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Validation(ValidationError::NoEssentialBc)
    ));
}

#[test]
fn unsupported_extension() {
    let err = save_case(&temp_path("case.txt"), &case()).unwrap_err();
    assert!(matches!(err, ProjectError::UnsupportedFormat { .. }));
}

#[test]
fn single_part_documents() {
    let fluid_path = temp_path("fluid.json");
    std::fs::write(
        &fluid_path,
        r#"{"density": 1000.0, "viscosity": 0.001, "heat_capacity": 4300.0}"#,
    )
    .unwrap();
    let fluid = read_fluid(&fluid_path).unwrap();
    assert_eq!(fluid.heat_capacity, Some(4300.0));

    let network_path = temp_path("network.yaml");
    write_document(&network_path, &case().network).unwrap();
    let topology = read_network(&network_path).unwrap();
    assert_eq!(topology.n_nodes(), 4);
    assert_eq!(read_flow_network(&network_path).unwrap().topology(), &topology);

    let thermal_path = temp_path("thermal_network.json");
    std::fs::write(
        &thermal_path,
        r#"{
            "connectivity": [[0, 1], [1, 2]],
            "length": [1.0, 1.0],
            "thickness": [1.0, 1.0],
            "width": [1.0, 1.0],
            "thermal_cond": 2.9,
            "thermal_diff": 1e-6
        }"#,
    )
    .unwrap();
    let net = read_thermal_network(&thermal_path).unwrap();
    assert_eq!(net.properties().thermal_cond, 2.9);
    assert_eq!(net.topology().n_segments(), 2);
}

#[test]
fn non_physical_fluid_rejected() {
    let path = temp_path("bad_fluid.yaml");
    std::fs::write(&path, "density: -1.0\nviscosity: 0.001\n").unwrap();
    assert!(matches!(
        read_fluid(&path),
        Err(ProjectError::Validation(ValidationError::Fluid(_)))
    ));
}
