use predicates::prelude::*;

use crate::common::{TestProject, standard_model};

#[test]
fn test_plan_lists_declared_dependencies_only() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();

    project
        .command()
        .args(["plan", "--model", "build-model.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Links for :app (apiElements)"))
        .stdout(predicate::str::contains(
            "com.acme:lib-a:1.0 -> https://javadoc.io/doc/com.acme/lib-a/1.0/",
        ))
        .stdout(predicate::str::contains("project ':lib-b'"))
        .stdout(predicate::str::contains("lib-c").not());
}

#[test]
fn test_plan_json() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();

    let output = project
        .command()
        .args(["plan", "--model", "build-model.json", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["project"], ":app");
    assert_eq!(json["link_set"].as_array().unwrap().len(), 1);
    assert_eq!(json["link_set"][0]["version"], "1.0");
    assert_eq!(json["project_links"][0]["path"], ":lib-b");
}

#[test]
fn test_plan_other_configuration() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();

    project
        .command()
        .args(["plan", "--model", "build-model.json", "--configuration", "implementation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.acme:lib-c:2.0"))
        .stdout(predicate::str::contains("com.acme:lib-a").not());
}

#[test]
fn test_plan_uses_configured_url_template() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();
    project
        .write_config(
            r#"
url_template = "https://mirror.example/{group}/{name}/{version}/"

[url_overrides]
"com.acme:lib-a" = "https://docs.acme.example/a/{version}/"
"#,
        )
        .unwrap();

    project
        .command()
        .args(["plan", "--model", "build-model.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://docs.acme.example/a/1.0/"));
}

#[test]
fn test_plan_does_not_create_cache() {
    let project = TestProject::new().unwrap();
    project.write_model(standard_model(&project).unwrap()).unwrap();

    project.command().args(["plan", "--model", "build-model.json"]).assert().success();
    assert!(!project.work_dir().exists());
}
