//! Properties every resource file must satisfy, whatever its kind.

use crate::common::sample_res;
use resdex::{
    MemoryFile, ProjectResources, Resource, ResourceFile, ResourceType,
};
use std::path::PathBuf;

const RES: &str = "/virtual/app/src/main/res";

fn add(table: &mut ProjectResources, folder: &str, file: &str, content: &str) -> resdex::FileId {
    add_with_flag(table, folder, file, content, false)
}

fn add_with_flag(
    table: &mut ProjectResources,
    folder: &str,
    file: &str,
    content: &str,
    framework: bool,
) -> resdex::FileId {
    let folder_path = PathBuf::from(RES).join(folder);
    let folder_id = table.add_folder(&folder_path, framework).unwrap();
    table
        .add_file(
            folder_id,
            Box::new(MemoryFile::new(folder_path.join(file), content)),
        )
        .unwrap()
}

/// One file of each kind
fn populated_table() -> ProjectResources {
    let mut table = ProjectResources::new();
    add(&mut table, "values", "strings.xml", sample_res::STRINGS);
    add(&mut table, "values-fr", "strings.xml", sample_res::STRINGS_FR);
    add(&mut table, "values", "attrs.xml", sample_res::ATTRS);
    add(&mut table, "layout", "activity_main.xml", sample_res::MAIN_LAYOUT);
    add(&mut table, "menu", "main.xml", sample_res::MENU);
    add(&mut table, "drawable-hdpi", "ic_launcher.png", "not really a png");
    add(&mut table, "raw", "intro.mp3", "ID3");
    table
}

#[test]
fn test_values_file_example() {
    let mut table = ProjectResources::new();
    let id = add(
        &mut table,
        "values",
        "strings.xml",
        r#"<resources><string name="app_name">Demo</string></resources>"#,
    );
    let file = table.file(id).unwrap();

    assert!(file.resource_types().contains(&ResourceType::String));
    assert!(file.has_resources(ResourceType::String));
    assert_eq!(
        file.value(ResourceType::String, "app_name")
            .and_then(|value| value.value)
            .as_deref(),
        Some("Demo")
    );
    assert!(file.value(ResourceType::String, "missing").is_none());
}

#[test]
fn test_type_enumeration_agrees_with_type_test() {
    let table = populated_table();

    for file in table.files() {
        let types = file.resource_types();
        for resource_type in ResourceType::ALL {
            assert_eq!(
                file.has_resources(resource_type),
                types.contains(&resource_type),
                "{file} disagrees about {resource_type}"
            );
        }
    }
}

#[test]
fn test_value_lookup_is_total() {
    let table = populated_table();

    for file in table.files() {
        for resource_type in ResourceType::ALL {
            assert!(file.value(resource_type, "definitely_not_declared").is_none());
            for name in file.kind().resource_names(resource_type) {
                let value = file.value(resource_type, name).unwrap();
                assert_eq!(value.name, name);
                assert_eq!(value.resource_type, resource_type);
            }
        }
    }
}

#[test]
fn test_identity_delegates_to_folder() {
    let mut table = ProjectResources::new();
    let app = add(&mut table, "values-fr-land", "strings.xml", sample_res::STRINGS_FR);
    let platform = add_with_flag(&mut table, "values-night", "colors.xml", sample_res::COLORS, true);

    for id in [app, platform] {
        let file = table.file(id).unwrap();
        let folder = table.folder(file.folder_id()).unwrap();

        assert_eq!(file.configuration(), folder.configuration());
        assert_eq!(file.folder().path(), folder.path());
        assert_eq!(file.is_framework(), folder.is_framework());
        assert_eq!(file.to_string(), file.file().to_string());
    }

    assert!(!table.file(app).unwrap().is_framework());
    assert!(table.file(platform).unwrap().is_framework());
    assert_eq!(
        table.file(app).unwrap().configuration().to_string(),
        "fr-land"
    );
}

#[test]
fn test_materialization_is_duplicate_safe() {
    let mut table = populated_table();
    let before = table.item_count();

    let ids: Vec<_> = table.files().map(ResourceFile::id).collect();
    for id in ids {
        let file = table.file(id).unwrap();
        for resource_type in file.resource_types() {
            // Everything the file declares is already registered
            assert!(file.resources(resource_type, &table).is_empty());
        }
    }

    // Registering again by hand changes nothing either
    let file_id = table.files().next().unwrap().id();
    let file = table.file(file_id).unwrap();
    let again: Vec<_> = file
        .resource_types()
        .into_iter()
        .flat_map(|resource_type| {
            file.kind()
                .resource_names(resource_type)
                .into_iter()
                .map(move |name| resdex::ResourceItem::declared_in(resource_type, name, file_id))
                .collect::<Vec<_>>()
        })
        .collect();
    assert_eq!(table.register(file_id, again), 0);
    assert_eq!(table.item_count(), before);
}

#[test]
fn test_kinds_by_folder() {
    let table = populated_table();
    let types_of = |path: &str| {
        let file = table.file_by_path(&PathBuf::from(RES).join(path)).unwrap();
        file.resource_types().into_iter().collect::<Vec<_>>()
    };

    assert_eq!(
        types_of("values/strings.xml"),
        vec![ResourceType::Plurals, ResourceType::String]
    );
    assert_eq!(
        types_of("values/attrs.xml"),
        vec![
            ResourceType::Attr,
            ResourceType::DeclareStyleable,
            ResourceType::Id,
            ResourceType::Style
        ]
    );
    assert_eq!(
        types_of("layout/activity_main.xml"),
        vec![ResourceType::Id, ResourceType::Layout]
    );
    assert_eq!(
        types_of("menu/main.xml"),
        vec![ResourceType::Id, ResourceType::Menu]
    );
    assert_eq!(
        types_of("drawable-hdpi/ic_launcher.png"),
        vec![ResourceType::Drawable]
    );
    assert_eq!(types_of("raw/intro.mp3"), vec![ResourceType::Raw]);
}

#[test]
fn test_compound_values_have_no_text() {
    let table = populated_table();
    let strings = table
        .file_by_path(&PathBuf::from(RES).join("values/strings.xml"))
        .unwrap();

    let greeting = strings.value(ResourceType::String, "greeting").unwrap();
    assert_eq!(greeting.value.as_deref(), Some("Hello there"));

    let songs = strings.value(ResourceType::Plurals, "songs").unwrap();
    assert!(songs.value.is_none());

    let attrs = table
        .file_by_path(&PathBuf::from(RES).join("values/attrs.xml"))
        .unwrap();
    assert!(attrs.value(ResourceType::Attr, "badgeColor").is_some());
    assert!(attrs.value(ResourceType::Attr, "android:textSize").is_none());
}
