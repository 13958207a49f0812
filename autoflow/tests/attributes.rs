//! Loading declarative attributes from disk.

use std::io::Write;

use autoflow::{AutoFlowLayout, FlowAttributes, FlowError, Gravity, LeafView, Orientation, Rect};

#[test]
fn attributes_file_configures_container() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "orientation": 1, "gravity": {} }}"#, (Gravity::BOTTOM | Gravity::LEFT).bits())
        .unwrap();

    let attrs = FlowAttributes::load(file.path()).unwrap();
    let mut flow = AutoFlowLayout::from_attributes(&attrs);
    assert_eq!(flow.orientation(), Orientation::Vertical);

    // One column of two 20-high children, pushed to the bottom.
    let mut children = vec![LeafView::new("a", 20, 20), LeafView::new("b", 20, 20)];
    flow.on_layout(true, 0, 0, 100, 100, &mut children);
    assert_eq!(children[0].bounds(), Some(Rect::new(0, 60, 20, 20)));
    assert_eq!(children[1].bounds(), Some(Rect::new(0, 80, 20, 20)));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FlowAttributes::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, FlowError::Io(_)));
}

#[test]
fn malformed_file_is_attributes_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "orientation = 1").unwrap();

    let err = FlowAttributes::load(file.path()).unwrap_err();
    assert!(matches!(err, FlowError::Attributes(_)));
}
