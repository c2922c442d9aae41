use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("ra-design-doc"));
    cmd.env_remove("RA_API_KEY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_argument_is_usage_error() {
    cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("GAME_ID"));
}

#[test]
fn test_non_integer_argument_makes_no_network_call() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.path_contains("/");
        then.status(200).body("null");
    });

    cmd()
        .args(["abc", "--api-base-url", server.base_url().as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Argument must be an integer: abc"));

    any_request.assert_hits(0);
}

#[test]
fn test_unknown_game_emits_no_document() {
    let server = MockServer::start();
    let game_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/API/API_GetGameExtended.php")
            .query_param("i", "31337");
        then.status(200).body("null");
    });
    let notes_mock = server.mock(|when, then| {
        when.method(GET).path("/dorequest.php");
        then.status(200).json_body(serde_json::json!({"Success": true, "CodeNotes": []}));
    });

    cmd()
        .args(["31337", "--api-base-url", server.base_url().as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No game found for id 31337"));

    game_mock.assert();
    notes_mock.assert_hits(0);
}

#[test]
fn test_prints_document_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/API/API_GetGameExtended.php")
            .query_param("y", "from-env")
            .query_param("i", "5");
        then.status(200).json_body(serde_json::json!({
            "ID": 5,
            "Title": "Tiny Game",
            "ForumTopicID": null,
            "Achievements": []
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/dorequest.php");
        then.status(200).json_body(serde_json::json!({"Success": true, "CodeNotes": []}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/API/API_GetGameLeaderboards.php");
        then.status(200).json_body(serde_json::json!({"Count": 0, "Total": 0, "Results": []}));
    });

    cmd()
        .env("RA_API_KEY", "from-env")
        .args([
            "5",
            "--api-base-url",
            server.base_url().as_str(),
            "--media-base-url",
            server.base_url().as_str(),
            "--badge-dir",
            temp_dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Design Doc for [Tiny Game](https://retroachievements.org/game/5)\n",
        ))
        .stdout(predicate::str::contains("## Rich Presence"))
        .stdout(predicate::str::contains("Forum Topic").not());
}
