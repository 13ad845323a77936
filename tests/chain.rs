#![warn(clippy::pedantic)]

use std::path::PathBuf;

use approx::assert_relative_eq;
use barchain::input::read_model;
use barchain::{
    analyse, assemble, point, reduce, AnalysisError, AnalysisOptions, Element, Load,
    LoadAggregation, Material, MeshError, Model, Node,
};

/// Straight chain of `count` bars of unit length along the X axis.
fn uniform_chain(count: usize, loads: Vec<Load>) -> Model {
    Model {
        material: Material::new(100.0, 0.3),
        nodes: (0..=count)
            .map(|i| Node::new(i + 1, point(i as f64, 0.0), 0.0))
            .collect(),
        elements: (0..count)
            .map(|i| Element::new(i + 1, i + 1, i + 2, 1.0))
            .collect(),
        loads,
    }
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn three_node_chain_reduces_to_single_equation() {
    let model = uniform_chain(2, vec![Load::new(2, 10.0)]);
    let system = assemble(
        model.material.youngs_modulus,
        &model.nodes,
        &model.elements,
        &model.loads,
        LoadAggregation::LastWins,
    )
    .expect("chain assembles");
    let reduced = reduce(&system, &model.nodes).expect("two elements reduce");

    assert_eq!(reduced.stiffness.shape(), (1, 1));
    assert_relative_eq!(reduced.stiffness[(0, 0)], 200.0);
    assert_relative_eq!(reduced.force[0], 5.0);

    let result = analyse(&model, &AnalysisOptions::default()).expect("analysis succeeds");
    assert_relative_eq!(result.reduced[0], 0.025, epsilon = 1.0e-12);
    assert_relative_eq!(result.stresses[0].axial, 2.5, epsilon = 1.0e-12);
}

#[test]
fn unloaded_chains_do_not_move() {
    for count in 2..10 {
        let result = analyse(&uniform_chain(count, Vec::new()), &AnalysisOptions::default())
            .expect("analysis succeeds");
        assert_eq!(result.reduced.len(), count - 1);
        assert!(result.chain.iter().all(|u| *u == 0.0));
        assert!(result.stresses.iter().all(|s| s.axial == 0.0));
    }
}

#[test]
fn loaded_chain_rises_to_the_load_and_falls_to_each_end() {
    let result = analyse(
        &uniform_chain(8, vec![Load::new(3, 1.0)]),
        &AnalysisOptions::default(),
    )
    .expect("analysis succeeds");
    let chain = &result.chain;
    let peak = chain
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(index, _)| index)
        .expect("non-empty field");

    assert!(chain[peak] > 0.0);
    assert!(chain[..=peak].windows(2).all(|w| w[0] <= w[1]));
    assert!(chain[peak..].windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(chain[0], 0.0);
    assert_eq!(chain[chain.len() - 1], 0.0);
}

#[test]
fn stress_table_is_one_shorter_than_element_list() {
    let model = uniform_chain(5, vec![Load::new(2, 3.0), Load::new(4, -1.0)]);
    let result = analyse(&model, &AnalysisOptions::default()).expect("analysis succeeds");
    assert_eq!(result.stresses.len(), model.elements.len() - 1);
    assert_eq!(result.nodal.len(), model.nodes.len());
    assert_eq!(result.expanded.len(), 2 * (model.nodes.len() - 1));
}

#[test]
fn single_bar_is_rejected() {
    let error = analyse(&uniform_chain(1, Vec::new()), &AnalysisOptions::default())
        .expect_err("one element cannot be reduced");
    assert_eq!(error, AnalysisError::Mesh(MeshError::TooFewElements(1)));
}

#[test]
fn text_and_json_inputs_describe_the_same_model() {
    let text = read_model(fixture("three_nodes.txt")).expect("text fixture parses");
    let json = read_model(fixture("three_nodes.json")).expect("json fixture parses");
    assert_eq!(text, json);
    assert_eq!(text, uniform_chain(2, vec![Load::new(2, 10.0)]));
}
