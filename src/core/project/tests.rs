use super::*;

/// Baut ein Projekt mit `shape[c] = [Schnitte pro Brett]`.
fn project_with_shape(shape: &[&[usize]]) -> Project {
    let mut project = Project::new_default();
    for boards in shape {
        let c = project.add_default_component().component_index();
        for &cuts in boards.iter() {
            let (_, b) = project
                .add_default_board(c)
                .and_then(|p| p.board_indices())
                .expect("Komponente existiert");
            for _ in 0..cuts {
                project.add_default_cut(c, b, CutKind::Dado);
            }
        }
    }
    project
}

#[test]
fn default_names_are_numbered_per_parent() {
    let project = project_with_shape(&[&[2], &[0, 1]]);

    assert_eq!(project.components[0].name, "Component 1");
    assert_eq!(project.components[1].name, "Component 2");
    assert_eq!(project.components[1].boards[1].name, "Board 2");
    assert_eq!(project.components[0].boards[0].cuts[1].name, "Dado 2");
}

#[test]
fn add_board_to_missing_component_returns_none() {
    let mut project = Project::new_default();
    assert!(project.add_default_board(0).is_none());
    assert!(project.add_default_cut(0, 0, CutKind::Hole).is_none());
}

#[test]
fn document_order_is_pre_order() {
    let project = project_with_shape(&[&[1], &[]]);
    assert_eq!(
        project.document_order(),
        vec![
            NodePath::component(0),
            NodePath::board(0, 0),
            NodePath::cut(0, 0, 0),
            NodePath::component(1),
        ]
    );
    assert_eq!(project.node_count(), 4);
}

#[test]
fn remove_invalid_path_is_rejected() {
    let mut project = project_with_shape(&[&[1]]);
    assert!(!project.remove(NodePath::cut(0, 0, 5)));
    assert!(!project.remove(NodePath::board(3, 0)));
    assert_eq!(project.node_count(), 3);
    assert!(project.remove(NodePath::cut(0, 0, 0)));
    assert_eq!(project.node_count(), 2);
}

#[test]
fn remove_many_uses_indices_before_removal() {
    // c0: b0(2 cuts), b1 ; c1: b0(1 cut)
    let mut project = project_with_shape(&[&[2, 0], &[1]]);
    project.components[1].boards[0].name = "keep-me".to_string();

    let removed = project.remove_many([
        NodePath::component(0),
        NodePath::cut(1, 0, 0),
        // Bezieht sich auf den Original-Index: Komponente 1 / Brett 1 gibt es nicht.
        NodePath::board(1, 1),
    ]);

    // Komponente 0 (mit 2 Brettern + 2 Schnitten) + 1 Schnitt
    assert_eq!(removed, 6);
    assert_eq!(project.components.len(), 1);
    assert_eq!(project.components[0].boards.len(), 1);
    assert_eq!(project.components[0].boards[0].name, "keep-me");
    assert!(project.components[0].boards[0].cuts.is_empty());
}

#[test]
fn visibility_toggle_and_all() {
    let mut project = project_with_shape(&[&[1]]);
    let cut = NodePath::cut(0, 0, 0);

    assert!(project.toggle_visible(cut));
    assert_eq!(project.is_visible(cut), Some(false));
    assert_eq!(project.is_visible(NodePath::board(0, 0)), Some(true));

    project.set_all_visible(false);
    assert!(project
        .document_order()
        .into_iter()
        .all(|p| project.is_visible(p) == Some(false)));

    assert!(!project.toggle_visible(NodePath::component(9)));
}

#[test]
fn imperial_projects_get_imperial_defaults() {
    let mut project = Project::new(
        "Shelf",
        ProjectSettings {
            measurement: Measurement::Imperial,
            bounds: 48.0,
        },
    );
    project.add_default_component();
    project.add_default_board(0);
    let board = project.board(0, 0).expect("Brett vorhanden");
    approx::assert_relative_eq!(board.dimensions.z, 0.75);
}

#[test]
fn copy_name_appends_suffix() {
    assert_eq!(copy_name("Leg"), "Leg (Copy)");
}
