#![allow(dead_code)]

use resdex::{ProjectResources, ResourceScanner, ScanStats, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A throwaway `res/` directory
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn remove(&self, path: &str) {
        let full = self.dir.path().join(path);
        if full.is_dir() {
            fs::remove_dir_all(full).expect("Failed to remove dir");
        } else {
            fs::remove_file(full).expect("Failed to remove file");
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Refresh `table` against this directory as application resources
    pub fn scan(&self, table: &mut ProjectResources) -> ScanStats {
        create_test_scanner()
            .refresh(table, self.path(), false)
            .expect("Scan failed")
    }
}

/// Scanner with a small fixed pool so tests do not depend on the host
pub fn create_test_scanner() -> ResourceScanner {
    ResourceScanner::new(Arc::new(test_settings()))
}

pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.scan.parallel_threads = 2;
    settings
}

pub mod sample_res {
    pub const STRINGS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="app_name">Demo</string>
    <string name="greeting">Hello <b>there</b></string>
    <plurals name="songs">
        <item quantity="one">%d song</item>
        <item quantity="other">%d songs</item>
    </plurals>
</resources>
"#;

    pub const STRINGS_FR: &str = r#"<resources>
    <string name="app_name">Démo</string>
</resources>
"#;

    pub const COLORS: &str = r#"<resources>
    <color name="primary">#3F51B5</color>
    <color name="accent">#FF4081</color>
</resources>
"#;

    pub const ATTRS: &str = r#"<resources>
    <declare-styleable name="BadgeView">
        <attr name="badgeColor" format="color"/>
        <attr name="android:textSize"/>
    </declare-styleable>
    <style name="AppTheme" parent="Theme.Material">
        <item name="colorPrimary">@color/primary</item>
    </style>
    <item type="id" name="toolbar"/>
</resources>
"#;

    pub const MAIN_LAYOUT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LinearLayout xmlns:android="http://schemas.android.com/apk/res/android"
    android:id="@+id/root"
    android:layout_width="match_parent"
    android:layout_height="match_parent">
    <TextView android:id="@+id/title" android:text="@string/app_name"/>
    <Button android:id="@+id/toolbar" android:layout_below="@id/title"/>
</LinearLayout>
"#;

    pub const MENU: &str = r#"<menu xmlns:android="http://schemas.android.com/apk/res/android">
    <item android:id="@+id/action_settings" android:title="Settings"/>
</menu>
"#;
}
