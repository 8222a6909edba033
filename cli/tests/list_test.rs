mod common;

use common::{zeta_at, MockService};
use predicates::prelude::*;
use std::time::Duration;

#[test]
fn test_list_prints_names_in_order() {
    let service = MockService::start(200, r#"[{"name":"a"},{"name":"b"}]"#);

    let output = zeta_at(&service.url).args(["list"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "List of the created zetas\n=========================\n- a\n- b\n"
    );

    let requests = service.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/zeta/meta");
}

#[test]
fn test_ls_alias() {
    let service = MockService::start(200, r#"[{"name":"only"}]"#);

    zeta_at(&service.url)
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- only"));
}

#[test]
fn test_list_record_without_name() {
    let service = MockService::start(200, r#"[{"name":"a"},{"image":"x"}]"#);

    zeta_at(&service.url)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- a\n- <unknown>\n"));
}

#[test]
fn test_list_empty() {
    let service = MockService::start(200, "[]");

    zeta_at(&service.url)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No zetas found"));
}

#[test]
fn test_list_malformed_json() {
    let service = MockService::start(200, r#"{"name":"not an array"}"#);

    zeta_at(&service.url)
        .args(["list"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unable to parse json"));
}

#[test]
fn test_list_unexpected_status() {
    let service = MockService::start(503, "maintenance");

    zeta_at(&service.url)
        .args(["list"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("> status code: 503 Service Unavailable"))
        .stdout(predicate::str::contains("> body: maintenance"));
}

#[test]
fn test_list_rejects_arguments() {
    zeta_at("http://localhost:8000")
        .args(["list", "extra"])
        .assert()
        .code(2);
}

#[test]
fn test_list_times_out() {
    let service = MockService::start_delayed(200, "[]", Duration::from_secs(5));

    zeta_at(&service.url)
        .args(["--timeout", "1", "list"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unable to retrieve zeta information"))
        .stdout(predicate::str::contains(
            "The control service did not respond in time.",
        ));
}

#[test]
fn test_list_json_output_is_raw_records() {
    let body = r#"[{"name":"a","port":8001},{"name":"b","port":8002}]"#;
    let service = MockService::start(200, body);

    zeta_at(&service.url)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(format!("{body}\n"));
}
