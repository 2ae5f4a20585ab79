//! Queries and failure reporting on the project table.

use crate::common::{TestProject, sample_res};
use resdex::{FileId, FolderId, FsFile, ProjectResources, ResourceError, ResourceType};

#[test]
fn test_queries_after_scan() {
    let project = TestProject::new();
    project.add_file("values/colors.xml", sample_res::COLORS);
    project.add_file("values/attrs.xml", sample_res::ATTRS);
    project.add_file("layout/activity_main.xml", sample_res::MAIN_LAYOUT);

    let mut table = ProjectResources::new();
    project.scan(&mut table);

    let types: Vec<_> = table.resource_types().into_iter().collect();
    assert_eq!(
        types,
        vec![
            ResourceType::Attr,
            ResourceType::Color,
            ResourceType::DeclareStyleable,
            ResourceType::Id,
            ResourceType::Layout,
            ResourceType::Style,
        ]
    );

    let colors: Vec<_> = table
        .items_of_type(ResourceType::Color)
        .map(|item| item.name())
        .collect();
    assert_eq!(colors, vec!["accent", "primary"]);

    // `toolbar` is declared in a values file and created by a layout
    let toolbar = table.find_resource_item(ResourceType::Id, "toolbar").unwrap();
    assert_eq!(toolbar.sources().len(), 2);

    assert!(table.find_resource_item(ResourceType::Color, "missing").is_none());
    assert!(table.values(ResourceType::Color, "missing").is_empty());
}

#[test]
fn test_single_file_on_disk() {
    let project = TestProject::new();
    let path = project.add_file("menu/main.xml", sample_res::MENU);

    let mut table = ProjectResources::new();
    let folder_id = table.add_folder(path.parent().unwrap(), false).unwrap();
    let file_id = table.add_file(folder_id, Box::new(FsFile::new(&path))).unwrap();

    let file = table.file(file_id).unwrap();
    assert_eq!(file.file().path(), path.as_path());
    assert_eq!(file.kind().resource_names(ResourceType::Menu), vec!["main"]);
    assert_eq!(
        file.kind().resource_names(ResourceType::Id),
        vec!["action_settings"]
    );
    assert!(table.file_info(file_id).is_some());
}

#[test]
fn test_error_reporting() {
    let mut table = ProjectResources::new();

    let err = table.add_folder("/res/not-a-folder", false).unwrap_err();
    assert!(matches!(err, ResourceError::InvalidFolderName { .. }));
    assert_eq!(err.status_code(), "INVALID_FOLDER_NAME");
    assert!(!err.recovery_suggestions().is_empty());

    let err = table
        .add_file(FolderId(42), Box::new(FsFile::new("/res/values/x.xml")))
        .unwrap_err();
    assert_eq!(err.status_code(), "FOLDER_NOT_FOUND");

    let err = table.remove_file(FileId(7)).unwrap_err();
    assert_eq!(err.status_code(), "FILE_NOT_FOUND");
}

#[test]
fn test_unreadable_file_is_a_read_error() {
    let project = TestProject::new();
    let values = project.path().join("values");
    std::fs::create_dir_all(&values).unwrap();

    let mut table = ProjectResources::new();
    let folder_id = table.add_folder(&values, false).unwrap();
    let err = table
        .add_file(folder_id, Box::new(FsFile::new(values.join("gone.xml"))))
        .unwrap_err();
    assert_eq!(err.status_code(), "FILE_READ_ERROR");
}
