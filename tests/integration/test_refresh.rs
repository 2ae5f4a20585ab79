//! Refresh passes over a real directory.

use crate::common::{TestProject, create_test_scanner, sample_res, test_settings};
use resdex::{ProjectResources, ResourceScanner, ResourceType};
use std::sync::Arc;

fn sample_project() -> TestProject {
    let project = TestProject::new();
    project.add_file("values/strings.xml", sample_res::STRINGS);
    project.add_file("values/colors.xml", sample_res::COLORS);
    project.add_file("values-fr/strings.xml", sample_res::STRINGS_FR);
    project.add_file("layout/activity_main.xml", sample_res::MAIN_LAYOUT);
    project.add_file("drawable-xhdpi/ic_launcher.png", "\u{89}PNG\r\n");
    project
}

#[test]
fn test_initial_scan() {
    let project = sample_project();
    let mut table = ProjectResources::new();

    let stats = project.scan(&mut table);

    assert_eq!(stats.folders_scanned, 4);
    assert_eq!(stats.files_added, 5);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.items_total, table.item_count());

    let app_name = table
        .find_resource_item(ResourceType::String, "app_name")
        .unwrap();
    assert_eq!(app_name.sources().len(), 2);

    let values = table.values(ResourceType::String, "app_name");
    let mut rendered: Vec<_> = values
        .iter()
        .map(|(config, value)| (config.to_string(), value.value.clone().unwrap()))
        .collect();
    rendered.sort();
    assert_eq!(
        rendered,
        vec![
            (String::new(), "Demo".to_string()),
            ("fr".to_string(), "Démo".to_string())
        ]
    );
}

#[test]
fn test_rescan_without_changes_registers_nothing() {
    let project = sample_project();
    let scanner = create_test_scanner();
    let mut table = ProjectResources::new();

    scanner.refresh(&mut table, project.path(), false).unwrap();
    let items = table.item_count();

    let stats = scanner.refresh(&mut table, project.path(), false).unwrap();
    assert_eq!(stats.files_added, 0);
    assert_eq!(stats.files_updated, 0);
    assert_eq!(stats.files_unchanged, 5);
    assert_eq!(table.item_count(), items);

    // Each item still has exactly the sources it had
    let title = table.find_resource_item(ResourceType::Id, "title").unwrap();
    assert_eq!(title.sources().len(), 1);
}

#[test]
fn test_rescan_without_hash_skipping_is_still_idempotent() {
    let project = sample_project();
    let mut settings = test_settings();
    settings.scan.skip_unchanged = false;
    let scanner = ResourceScanner::new(Arc::new(settings));
    let mut table = ProjectResources::new();

    scanner.refresh(&mut table, project.path(), false).unwrap();
    let items = table.item_count();
    let ids: Vec<_> = table.files().map(|file| file.id()).collect();

    let stats = scanner.refresh(&mut table, project.path(), false).unwrap();
    assert_eq!(stats.files_updated, 5);
    assert_eq!(table.item_count(), items);

    // Re-read files keep their ids
    let after: Vec<_> = table.files().map(|file| file.id()).collect();
    assert_eq!(ids, after);
}

#[test]
fn test_edits_and_deletions() {
    let project = sample_project();
    let scanner = create_test_scanner();
    let mut table = ProjectResources::new();
    scanner.refresh(&mut table, project.path(), false).unwrap();

    project.add_file(
        "values/colors.xml",
        r#"<resources><color name="primary">#000000</color></resources>"#,
    );
    project.remove("values-fr");
    project.add_file("menu/main.xml", sample_res::MENU);

    let stats = scanner.refresh(&mut table, project.path(), false).unwrap();

    assert_eq!(stats.files_updated, 1);
    assert_eq!(stats.files_added, 1);
    assert_eq!(stats.folders_removed, 1);
    assert_eq!(stats.files_removed, 1);

    assert!(table.find_resource_item(ResourceType::Color, "accent").is_none());
    assert!(table.find_resource_item(ResourceType::Id, "action_settings").is_some());
    assert_eq!(
        table
            .find_resource_item(ResourceType::String, "app_name")
            .unwrap()
            .sources()
            .len(),
        1
    );
}

#[test]
fn test_bad_folders_and_files_do_not_fail_the_pass() {
    let project = sample_project();
    project.add_file("values-xx-yy-zz/strings.xml", sample_res::STRINGS);
    project.add_file("values/broken.xml", "<string name=\"x\">not in resources</string>");
    project.add_file("values/notes.txt", "not xml");

    let mut table = ProjectResources::new();
    let stats = project.scan(&mut table);

    assert_eq!(stats.folders_skipped, 1);
    assert_eq!(stats.files_failed, 2);
    assert_eq!(stats.files_added, 5);
    assert!(stats.errors.iter().any(|(path, _)| path.ends_with("broken.xml")));
}

#[test]
fn test_framework_and_app_resources_side_by_side() {
    let app = sample_project();
    let platform = TestProject::new();
    platform.add_file(
        "values/colors.xml",
        r#"<resources><color name="white">#ffffff</color></resources>"#,
    );

    let mut settings = test_settings();
    settings.framework.res_dir = Some(platform.path().to_path_buf());
    let scanner = ResourceScanner::new(Arc::new(settings));

    let mut table = ProjectResources::new();
    scanner.refresh_framework(&mut table).unwrap();
    scanner.refresh(&mut table, app.path(), false).unwrap();

    let white = table.values(ResourceType::Color, "white");
    assert_eq!(white.len(), 1);
    assert!(white[0].1.is_framework);
    assert_eq!(white[0].1.reference(), "@android:color/white");

    let primary = table.values(ResourceType::Color, "primary");
    assert!(!primary[0].1.is_framework);

    // Refreshing the app directory leaves platform files alone
    scanner.refresh(&mut table, app.path(), false).unwrap();
    assert_eq!(table.values(ResourceType::Color, "white").len(), 1);
}

#[test]
fn test_snapshot_serializes() {
    let project = sample_project();
    let mut table = ProjectResources::new();
    project.scan(&mut table);

    let json = serde_json::to_value(table.snapshot()).unwrap();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), table.item_count());
    assert!(
        items
            .iter()
            .any(|item| item["type"] == "string" && item["name"] == "app_name")
    );
}
