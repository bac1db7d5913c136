mod common;

use common::TrellisTest;
use common::mock_data::SAMPLE_RESPONSE;

// ============================================================================
// Board command tests
// ============================================================================

#[test]
fn test_board_from_file_default_options() {
    let trellis = TrellisTest::new();
    let data = trellis.write_board_data("board.json", SAMPLE_RESPONSE);

    let output = trellis.run_success(&["board", "--from-file", data.to_str().unwrap()]);
    assert!(output.starts_with("Grouping: Status | Ordering: Priority\n"));
    assert!(output.contains("Todo (2)"));
    assert!(output.contains("In Progress (4)"));
    assert!(output.contains("Cancelled (0)\n  No tickets"));
    assert!(output.ends_with("7 of 7 tickets shown\n"));
}

#[test]
fn test_board_overrides_are_not_persisted() {
    let trellis = TrellisTest::new();
    let data = trellis.write_board_data("board.json", SAMPLE_RESPONSE);

    let output = trellis.run_success(&[
        "board",
        "--from-file",
        data.to_str().unwrap(),
        "--group",
        "user",
        "--order",
        "title",
    ]);
    assert!(output.starts_with("Grouping: User | Ordering: Title\n"));
    assert!(output.contains("Anoop sharma (3)"));
    assert!(trellis.read_state().is_none());
}

#[test]
fn test_board_uses_persisted_options() {
    let trellis = TrellisTest::new();
    let data = trellis.write_board_data("board.json", SAMPLE_RESPONSE);

    trellis.run_success(&["group", "Priority"]);
    let output = trellis.run_success(&["board", "--from-file", data.to_str().unwrap()]);
    assert!(output.starts_with("Grouping: Priority | Ordering: Priority\n"));
    assert!(output.contains("Urgent (1)"));
}

#[test]
fn test_board_json_output() {
    let trellis = TrellisTest::new();
    let data = trellis.write_board_data("board.json", SAMPLE_RESPONSE);

    let output = trellis.run_success(&["board", "--from-file", data.to_str().unwrap(), "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["options"]["group"], "Status");
    assert_eq!(json["total_tickets"], 7);
    assert_eq!(json["groups"][1]["header"], "In Progress");
    assert_eq!(json["groups"][1]["body"]["cards"][0]["id"], "CAM-2");
}

#[test]
fn test_board_load_failure_still_renders() {
    let trellis = TrellisTest::new();
    let missing = trellis.temp_dir.path().join("missing.json");

    let output = trellis.run(&["board", "--from-file", missing.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Could not load tickets:"));
    assert!(stdout.contains("Todo (0)"));
    assert!(stdout.ends_with("0 of 0 tickets shown\n"));
}

#[test]
fn test_board_rejects_invalid_group_flag() {
    let trellis = TrellisTest::new();
    let stderr = trellis.run_failure(&["board", "--group", "Tag"]);
    assert!(stderr.contains("Invalid grouping. Must be one of: Status, User, Priority"));
}

// ============================================================================
// Option command tests
// ============================================================================

#[test]
fn test_group_and_order_persist() {
    let trellis = TrellisTest::new();

    let output = trellis.run_success(&["group", "user"]);
    assert!(output.contains("Grouping set to User"));
    trellis.run_success(&["order", "TITLE"]);

    let state = trellis.read_state().unwrap();
    let json: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(json["groupOption"], "User");
    assert_eq!(json["orderOption"], "Title");

    let output = trellis.run_success(&["options", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["group"], "User");
    assert_eq!(json["order"], "Title");
}

#[test]
fn test_invalid_order_is_rejected_and_nothing_written() {
    let trellis = TrellisTest::new();

    let stderr = trellis.run_failure(&["order", "Status"]);
    assert!(stderr.contains("invalid order dimension 'Status'"));
    assert!(trellis.read_state().is_none());
}

#[test]
fn test_options_defaults() {
    let trellis = TrellisTest::new();
    let output = trellis.run_success(&["options"]);
    assert!(output.contains("grouping: Status (one of: Status, User, Priority)"));
    assert!(output.contains("ordering: Priority (one of: Priority, Title)"));
}

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let trellis = TrellisTest::new();
    let output = trellis.run_success(&["config", "show"]);
    assert!(output.contains("Configuration"));
    assert!(output.contains("api_url: https://api.quicksell.co/v1/internal/frontend-assignment"));
    assert!(output.contains("timeout: 30s"));
}

#[test]
fn test_config_set_and_get() {
    let trellis = TrellisTest::new();

    trellis.run_success(&["config", "set", "timeout", "5"]);
    assert_eq!(trellis.run_success(&["config", "get", "timeout"]).trim(), "5");
    assert!(trellis.read_config().unwrap().contains("timeout: 5"));

    trellis.run_success(&["config", "set", "api_url", "http://localhost:9000/board"]);
    assert_eq!(
        trellis.run_success(&["config", "get", "api_url"]).trim(),
        "http://localhost:9000/board"
    );
}

#[test]
fn test_config_set_invalid_values() {
    let trellis = TrellisTest::new();

    let stderr = trellis.run_failure(&["config", "set", "timeout", "0"]);
    assert!(stderr.contains("timeout must be at least 1 second"));

    let stderr = trellis.run_failure(&["config", "set", "api_url", "ftp://example.com"]);
    assert!(stderr.contains("api_url"));

    let stderr = trellis.run_failure(&["config", "get", "token"]);
    assert!(stderr.contains("unknown config key 'token'"));
}

#[test]
fn test_config_file_drives_board_source() {
    let trellis = TrellisTest::new();
    trellis.write_config("api_url: http://127.0.0.1:9/board\ntimeout: 1\n");

    let output = trellis.run_success(&["board"]);
    assert!(output.starts_with("Could not load tickets:"));
}

// ============================================================================
// Color handling
// ============================================================================

fn has_ansi_escape(bytes: &[u8]) -> bool {
    bytes.contains(&0x1b)
}

#[test]
fn test_forced_color_is_applied_without_flag() {
    let trellis = TrellisTest::new();
    let output = trellis.run_with_forced_color(&["group", "user"]);
    assert!(output.status.success());
    assert!(has_ansi_escape(&output.stdout));
}

#[test]
fn test_no_color_flag_applies_to_every_command() {
    let trellis = TrellisTest::new();
    let data = trellis.write_board_data("board.json", SAMPLE_RESPONSE);

    let commands: Vec<Vec<&str>> = vec![
        vec!["--no-color", "group", "user"],
        vec!["--no-color", "order", "title"],
        vec!["--no-color", "options"],
        vec!["--no-color", "config", "show"],
        vec!["--no-color", "config", "set", "timeout", "7"],
        vec!["board", "--no-color", "--from-file", data.to_str().unwrap()],
    ];
    for args in commands {
        let output = trellis.run_with_forced_color(&args);
        assert!(output.status.success(), "{args:?} failed");
        assert!(
            !has_ansi_escape(&output.stdout),
            "{args:?} printed {:?}",
            String::from_utf8_lossy(&output.stdout)
        );
    }
}

#[test]
fn test_no_color_flag_applies_to_error_prefix() {
    let trellis = TrellisTest::new();
    let output = trellis.run_with_forced_color(&["--no-color", "order", "Status"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: invalid order dimension"), "{stderr}");
    assert!(!has_ansi_escape(&output.stderr));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let trellis = TrellisTest::new();
    let output = trellis.run_success(&["completions", "bash"]);
    assert!(output.contains("trellis"));
}
