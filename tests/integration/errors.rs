use predicates::prelude::*;

use javadoc_links::resolver::DependencyResult;
use javadoc_links::test_utils::BuildModelBuilder;

use crate::common::{TestProject, id};

#[test]
fn test_unresolved_dependency_is_fatal() {
    let project = TestProject::new().unwrap();
    project
        .write_model(
            BuildModelBuilder::new(":app")
                .declare("apiElements", "com.acme", "lib-a")
                .resolve("compileClasspath", DependencyResult::module(id("com.acme:lib-a:1.0")))
                .resolve(
                    "compileClasspath",
                    DependencyResult::unresolved("com.acme:gone:1.+", "Could not find com.acme:gone"),
                ),
        )
        .unwrap();

    let plan: &[&str] = &["plan", "--model", "build-model.json"];
    let run: &[&str] = &["run", "--model", "build-model.json", "--java-version", "17"];
    for args in [plan, run] {
        project
            .command()
            .args(args)
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "can not create javadoc link for unresolved dependency: com.acme:gone:1.+",
            ));
    }
    assert!(!project.work_dir().exists());
}

#[test]
fn test_missing_configuration() {
    let project = TestProject::new().unwrap();
    project
        .write_model(BuildModelBuilder::new(":app").empty_configuration("apiElements"))
        .unwrap();

    project
        .command()
        .args(["plan", "--model", "build-model.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration 'compileClasspath' not found"));
}

#[test]
fn test_missing_model_file() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["plan", "--model", "absent.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn test_invalid_config_file() {
    let project = TestProject::new().unwrap();
    project
        .write_model(BuildModelBuilder::new(":app").empty_configuration("apiElements"))
        .unwrap();
    project.write_config("url_template = \"https://docs.example/{name}\"\n").unwrap();

    project
        .command()
        .args(["plan", "--model", "build-model.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must end with '/'"));
}

#[test]
fn test_run_fails_without_project_archive() {
    let project = TestProject::new().unwrap();
    project
        .write_model(
            BuildModelBuilder::new(":app")
                .declare("apiElements", "com.acme", "lib-b")
                .resolve(
                    "compileClasspath",
                    DependencyResult::project(id("com.acme:lib-b:1.0"), ":lib-b"),
                ),
        )
        .unwrap();

    project
        .command()
        .args(["run", "--model", "build-model.json", "--java-version", "17"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("project ':lib-b'"));
}
