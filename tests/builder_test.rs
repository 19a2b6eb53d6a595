//! Tests for the forest builder

use hns_tree::domain::{build_forest, Node, Resource};
use hns_tree::util::testing::{forest_names, init_test_setup, is_sorted_forest, resources};
use rstest::rstest;

// ============================================================
// Scenarios
// ============================================================

#[test]
fn given_parent_with_two_children_when_building_then_children_sorted() {
    // Arrange
    init_test_setup();
    let input = resources(&[("a", None), ("c", Some("a")), ("b", Some("a"))]);

    // Act
    let forest = build_forest(&input);

    // Assert
    assert_eq!(
        forest,
        vec![Node::new("a").with_children(vec![Node::new("b"), Node::new("c")])]
    );
}

#[test]
fn given_only_roots_when_building_then_roots_sorted() {
    let input = resources(&[("z", None), ("a", None)]);

    let forest = build_forest(&input);

    assert_eq!(forest, vec![Node::new("a"), Node::new("z")]);
}

#[test]
fn given_missing_parent_when_building_then_forest_empty() {
    let input = resources(&[("a", Some("missing"))]);

    let forest = build_forest(&input);

    assert!(forest.is_empty());
}

#[test]
fn given_empty_parent_string_when_building_then_treated_as_root() {
    let input = resources(&[("a", Some(""))]);

    let forest = build_forest(&input);

    assert_eq!(forest, vec![Node::new("a")]);
}

// ============================================================
// Orphans and cycles
// ============================================================

#[test]
fn given_orphan_with_descendants_when_building_then_whole_branch_dropped() {
    let input = resources(&[
        ("root", None),
        ("orphan", Some("gone")),
        ("orphan-child", Some("orphan")),
    ]);

    let forest = build_forest(&input);

    assert_eq!(forest_names(&forest), vec!["root"]);
}

#[test]
fn given_two_node_cycle_when_building_then_both_dropped() {
    let input = resources(&[("a", Some("b")), ("b", Some("a")), ("c", None)]);

    let forest = build_forest(&input);

    assert_eq!(forest, vec![Node::new("c")]);
}

#[test]
fn given_branch_below_cycle_when_building_then_branch_dropped() {
    let input = resources(&[
        ("x", Some("y")),
        ("y", Some("z")),
        ("z", Some("x")),
        ("tail", Some("y")),
    ]);

    let forest = build_forest(&input);

    assert!(forest.is_empty());
}

// ============================================================
// Ordering
// ============================================================

#[rstest]
#[case(&[0, 1, 2, 3, 4, 5])]
#[case(&[5, 4, 3, 2, 1, 0])]
#[case(&[3, 0, 5, 1, 4, 2])]
#[case(&[2, 5, 1, 3, 0, 4])]
fn given_permuted_input_when_building_then_same_forest(#[case] order: &[usize]) {
    let base = resources(&[
        ("prod", None),
        ("dev", None),
        ("team-b", Some("prod")),
        ("team-a", Some("prod")),
        ("svc", Some("team-a")),
        ("api", Some("team-a")),
    ]);
    let permuted: Vec<Resource> = order.iter().map(|&i| base[i].clone()).collect();

    let forest = build_forest(&permuted);

    assert_eq!(forest, build_forest(&base));
    assert_eq!(
        forest_names(&forest),
        vec!["dev", "prod", "team-a", "api", "svc", "team-b"]
    );
}

#[test]
fn given_mixed_case_names_when_building_then_byte_order() {
    let input = resources(&[("b", None), ("B", None), ("a", None), ("A", None)]);

    let forest = build_forest(&input);

    assert_eq!(forest_names(&forest), vec!["A", "B", "a", "b"]);
    assert!(is_sorted_forest(&forest));
}

#[test]
fn given_wide_hierarchy_when_building_then_every_level_sorted() {
    let mut pairs: Vec<(String, Option<String>)> = vec![("root".into(), None)];
    for i in (0..20).rev() {
        let mid = format!("mid-{i:02}");
        pairs.push((mid.clone(), Some("root".into())));
        for j in (0..5).rev() {
            pairs.push((format!("{mid}-leaf-{j}"), Some(mid.clone())));
        }
    }
    let input: Vec<Resource> = pairs
        .into_iter()
        .map(|(name, parent)| Resource { name, parent })
        .collect();

    let forest = build_forest(&input);

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].size(), input.len());
    assert_eq!(forest[0].depth(), 3);
    assert!(is_sorted_forest(&forest));
}

#[test]
fn given_duplicate_names_when_building_then_last_declaration_wins() {
    let input = resources(&[("p", None), ("q", None), ("a", Some("p")), ("a", Some("q"))]);

    let forest = build_forest(&input);

    assert_eq!(
        forest,
        vec![
            Node::new("p"),
            Node::new("q").with_children(vec![Node::new("a")]),
        ]
    );
}
