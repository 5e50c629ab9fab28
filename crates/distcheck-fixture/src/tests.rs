use super::*;

use std::time::{SystemTime, UNIX_EPOCH};

use zip::ZipArchive;

fn test_fixtures_root(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let root = std::env::temp_dir().join(format!(
        "distcheck-fixtures-{label}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&root).expect("must create fixtures root");
    root
}

fn harness_descriptor() -> DistributionDescriptor {
    DistributionDescriptor::new("4.10", "my-project", "1.0").expect("must build descriptor")
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("must create parent dir");
    }
    fs::write(path, content).expect("must write file");
}

#[test]
fn prepare_copies_input_tree_into_resources() {
    let fixtures_root = test_fixtures_root("copy");
    let case_dir = fixtures_root.join("single-distribution-single-template");
    write_file(
        &case_dir.join("input/init.d/setup.gradle"),
        b"println 'injected'\n",
    );
    write_file(&case_dir.join("input/nested/deep/notes.txt"), b"alpha\nbeta\n");

    let store = FixtureStore::new(&fixtures_root);
    let prepared = store
        .prepare("single-distribution-single-template", &harness_descriptor())
        .expect("must prepare");

    let layout = ProjectLayout::new(&prepared.project_root);
    let copied_template = layout.resources_dir().join("init.d/setup.gradle");
    let copied_notes = layout.resources_dir().join("nested/deep/notes.txt");
    assert_eq!(
        fs::read(&copied_template).expect("must read copied template"),
        b"println 'injected'\n"
    );
    assert_eq!(
        fs::read(&copied_notes).expect("must read copied notes"),
        b"alpha\nbeta\n"
    );

    let _ = fs::remove_dir_all(&prepared.project_root);
    let _ = fs::remove_dir_all(&fixtures_root);
}

#[test]
fn prepare_writes_parseable_descriptor() {
    let fixtures_root = test_fixtures_root("descriptor");
    let case_dir = fixtures_root.join("single-distribution-no-templates");
    fs::create_dir_all(case_dir.join("input")).expect("must create input dir");

    let descriptor = harness_descriptor();
    let store = FixtureStore::new(&fixtures_root);
    let prepared = store
        .prepare("single-distribution-no-templates", &descriptor)
        .expect("must prepare");

    let layout = ProjectLayout::new(&prepared.project_root);
    let written = fs::read_to_string(layout.descriptor_path()).expect("must read descriptor");
    let parsed = DistributionDescriptor::from_toml_str(&written).expect("must parse descriptor");
    assert_eq!(parsed, descriptor);

    let _ = fs::remove_dir_all(&prepared.project_root);
    let _ = fs::remove_dir_all(&fixtures_root);
}

#[test]
fn prepare_seeds_placeholder_distribution_with_single_root_entry() {
    let fixtures_root = test_fixtures_root("seed");
    let case_dir = fixtures_root.join("single-distribution-no-templates");
    fs::create_dir_all(case_dir.join("input")).expect("must create input dir");

    let descriptor = harness_descriptor();
    let store = FixtureStore::new(&fixtures_root);
    let prepared = store
        .prepare("single-distribution-no-templates", &descriptor)
        .expect("must prepare");

    let layout = ProjectLayout::new(&prepared.project_root);
    let seed_path = layout.download_archive_path(&descriptor);
    assert!(seed_path.is_file(), "seed archive should exist");

    let file = fs::File::open(&seed_path).expect("must open seed archive");
    let mut archive = ZipArchive::new(file).expect("must read seed archive");
    assert_eq!(archive.len(), 1);
    let entry = archive.by_index(0).expect("must read entry");
    assert_eq!(entry.name(), "gradle-4.10/");
    assert!(entry.is_dir());

    let _ = fs::remove_dir_all(&prepared.project_root);
    let _ = fs::remove_dir_all(&fixtures_root);
}

#[test]
fn prepare_unknown_case_fails() {
    let fixtures_root = test_fixtures_root("unknown");
    let store = FixtureStore::new(&fixtures_root);

    let err = store
        .prepare("no-such-case", &harness_descriptor())
        .expect_err("unknown case should fail");
    assert!(
        err.to_string()
            .contains("fixture-missing: test case 'no-such-case' not found under"),
        "unexpected error: {err}"
    );

    let _ = fs::remove_dir_all(&fixtures_root);
}

#[test]
fn prepare_case_without_input_fails() {
    let fixtures_root = test_fixtures_root("no-input");
    fs::create_dir_all(fixtures_root.join("broken-case")).expect("must create case dir");

    let store = FixtureStore::new(&fixtures_root);
    let err = store
        .prepare("broken-case", &harness_descriptor())
        .expect_err("case without input/ should fail");
    assert!(
        err.to_string().contains("has no input/ directory"),
        "unexpected error: {err}"
    );

    let _ = fs::remove_dir_all(&fixtures_root);
}

#[test]
fn expected_root_points_at_case_expected_tree() {
    let fixtures_root = test_fixtures_root("expected");
    let case_dir = fixtures_root.join("single-distribution-no-templates");
    fs::create_dir_all(case_dir.join("input")).expect("must create input dir");

    let store = FixtureStore::new(&fixtures_root);
    let prepared = store
        .prepare("single-distribution-no-templates", &harness_descriptor())
        .expect("must prepare");
    assert_eq!(prepared.expected_root, case_dir.join(EXPECTED_DIR_NAME));

    let _ = fs::remove_dir_all(&prepared.project_root);
    let _ = fs::remove_dir_all(&fixtures_root);
}

#[test]
fn list_cases_returns_sorted_directory_names() {
    let fixtures_root = test_fixtures_root("list");
    fs::create_dir_all(fixtures_root.join("zeta-case")).expect("must create case dir");
    fs::create_dir_all(fixtures_root.join("alpha-case")).expect("must create case dir");
    fs::write(fixtures_root.join("stray-file.txt"), "ignored").expect("must write stray file");

    let store = FixtureStore::new(&fixtures_root);
    let cases = store.list_cases().expect("must list cases");
    assert_eq!(cases, vec!["alpha-case", "zeta-case"]);

    let _ = fs::remove_dir_all(&fixtures_root);
}

#[test]
fn list_cases_without_root_fails() {
    let missing = std::env::temp_dir().join(format!(
        "distcheck-fixtures-gone-{}-{}",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time")
            .as_nanos()
    ));

    let store = FixtureStore::new(&missing);
    let err = store.list_cases().expect_err("missing root should fail");
    assert!(
        err.to_string()
            .contains("fixture-missing: fixtures root does not exist"),
        "unexpected error: {err}"
    );
}
