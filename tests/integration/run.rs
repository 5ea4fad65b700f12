use predicates::prelude::*;
use std::fs;
use std::path::Path;

use javadoc_links::test_utils::seed_index_file;

use crate::common::{TestProject, id, standard_model};

#[test]
fn test_run_direct_mode() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();

    project
        .command()
        .args(["run", "--model", "build-model.json", "--java-version", "17"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "-link 'https://docs.oracle.com/en/java/javase/17/docs/api/'\n\
             -link 'https://javadoc.io/doc/com.acme/lib-a/1.0/'\n\
             -linkoffline 'https://javadoc.io/doc/com.acme/lib-b/1.0/' ",
        ));

    // Published modules are not cached in direct mode
    assert!(!project.work_dir().join("com.acme/lib-a").exists());
    // Project archives always are
    assert_eq!(
        fs::read_to_string(project.work_dir().join("com.acme/lib-b/1.0/element-list")).unwrap(),
        "com.acme.b\n"
    );
}

#[test]
fn test_run_offline_mode_with_seeded_cache() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();
    let seeded =
        seed_index_file(&project.work_dir(), &id("com.acme:lib-a:1.0"), "package-list", "com.acme.a\n")
            .unwrap();

    // Offline locations are absolute, javadoc runs from elsewhere
    let work_dir = fs::canonicalize(project.project_path()).unwrap().join("build/tmp/javadocLinks");

    project
        .command()
        .args(["run", "--model", "build-model.json", "--java-version", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-link 'https://docs.oracle.com/javase/8/docs/api/'"))
        .stdout(predicate::str::contains(format!(
            "-linkoffline 'https://javadoc.io/doc/com.acme/lib-a/1.0/' '{}'",
            work_dir.join("com.acme/lib-a/1.0").display()
        )))
        .stdout(predicate::str::contains(format!(
            "-linkoffline 'https://javadoc.io/doc/com.acme/lib-b/1.0/' '{}'",
            work_dir.join("com.acme/lib-b/1.0").display()
        )))
        .stderr(predicate::str::contains("Neither package-list").not());

    assert_eq!(fs::read_to_string(seeded).unwrap(), "com.acme.a\n");
}

#[test]
fn test_run_writes_json_to_output_file() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();
    project.write_config("java_version = 11\nwork_dir = \"cache\"\n").unwrap();

    project
        .command()
        .args([
            "--quiet",
            "run",
            "--model",
            "build-model.json",
            "--format",
            "json",
            "--output",
            "build/javadoc-links.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(project.project_path().join("build/javadoc-links.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    let links = json["links"].as_array().unwrap();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0]["url"], "https://docs.oracle.com/en/java/javase/11/docs/api/");
    assert_eq!(links[2]["kind"], "offline");
    let location = Path::new(links[2]["location"].as_str().unwrap());
    assert!(location.is_absolute());
    assert!(location.ends_with("cache/com.acme/lib-b/1.0"));
    assert!(project.project_path().join("cache/com.acme/lib-b/1.0/element-list").exists());
}

#[test]
fn test_run_work_dir_flag_overrides_config() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();
    project.write_config("work_dir = \"from-config\"\n").unwrap();

    project
        .command()
        .args(["run", "--model", "build-model.json", "--java-version", "21", "--work-dir", "from-flag"])
        .assert()
        .success();

    assert!(project.project_path().join("from-flag/com.acme/lib-b/1.0/element-list").exists());
    assert!(!project.project_path().join("from-config").exists());
}

#[test]
fn test_run_warns_when_no_index_file_is_available() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();
    // Nothing listens on the discard port
    project.write_config("url_template = \"http://127.0.0.1:9/{name}/\"\n").unwrap();

    project
        .command()
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .args(["run", "--model", "build-model.json", "--java-version", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-linkoffline 'http://127.0.0.1:9/lib-a/' "))
        .stderr(predicate::str::contains(
            "Neither package-list nor element-list found for http://127.0.0.1:9/lib-a/",
        ));

    assert!(!project.work_dir().join("com.acme/lib-a/1.0/package-list").exists());
    assert!(!project.work_dir().join("com.acme/lib-a/1.0/element-list").exists());
}
