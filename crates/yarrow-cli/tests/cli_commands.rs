#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// The binary with no LLM credentials, so every reading uses the fallback.
fn yarrow() -> Command {
    let mut cmd = Command::cargo_bin("yarrow").unwrap();
    cmd.env_remove("LLM_API_KEY")
        .env_remove("LLM_API_URL")
        .env("NO_COLOR", "1");
    cmd
}

// -- cast --

#[test]
fn cast_liuyao_with_seed_is_reproducible() {
    yarrow()
        .args(["cast", "liuyao", "-q", "should I move?", "--seed", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("坤"))
        .stdout(predicate::str::contains("豫"))
        .stdout(predicate::str::contains("四爻动"));
}

#[test]
fn cast_json_carries_fallback_interpretation() {
    yarrow()
        .args(["cast", "liuyao", "-q", "x", "--seed", "abc", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"liuyao\""))
        .stdout(predicate::str::contains("\"confidence\": \"low\""))
        .stdout(predicate::str::contains("\"kind\": \"fallback\""))
        .stdout(predicate::str::contains("\"status\": \"completed\""));
}

#[test]
fn cast_tarot_in_english() {
    yarrow()
        .args(["cast", "tarot", "-q", "career?", "--seed", "abc", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Hierophant"))
        .stdout(predicate::str::contains("Past"));
}

#[test]
fn cast_rejects_unknown_method() {
    yarrow()
        .args(["cast", "runes", "-q", "x"])
        .assert()
        .failure();
}

#[test]
fn cast_rejects_unknown_language() {
    yarrow()
        .args(["cast", "tarot", "-q", "x", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language"));
}

#[test]
fn cast_rejects_blank_question() {
    yarrow()
        .args(["cast", "tarot", "-q", "   "])
        .assert()
        .failure();
}

#[test]
fn log_level_installs_stderr_subscriber() {
    yarrow()
        .env_remove("RUST_LOG")
        .args(["--log-level", "debug", "cast", "tarot", "-q", "x", "--seed", "abc", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"tarot\""))
        .stderr(predicate::str::contains("requesting interpretation"))
        .stderr(predicate::str::contains("logging not initialised").not());
}

// -- manual --

#[test]
fn manual_liuyao_from_stdin() {
    yarrow()
        .args(["manual", "liuyao", "-q", "x"])
        .write_stdin("3 3 3\n2 2 2\n3 2 2\n2 3 3\n3 3 2\n2 2 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("贲"))
        .stdout(predicate::str::contains("蛊"));
}

#[test]
fn manual_liuyao_reprompts_on_bad_toss() {
    yarrow()
        .args(["manual", "liuyao", "-q", "x"])
        .write_stdin("3 3\n333\n222\n322\n233\n332\n223\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("贲"))
        .stderr(predicate::str::contains("expected three coins"));
}

#[test]
fn manual_tarot_from_stdin() {
    yarrow()
        .args(["manual", "tarot", "-q", "x"])
        .write_stdin("0 u\n10 r\n21 u\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("愚者"))
        .stdout(predicate::str::contains("命运之轮"))
        .stdout(predicate::str::contains("世界"));
}

#[test]
fn manual_tarot_rejects_duplicate_card() {
    yarrow()
        .args(["manual", "tarot", "-q", "x", "--json"])
        .write_stdin("5 u\n5 u\n6 u\n7 r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"card_id\": 7"))
        .stderr(predicate::str::contains("card 5 drawn more than once"));
}

#[test]
fn manual_fails_when_input_ends_early() {
    yarrow()
        .args(["manual", "liuyao", "-q", "x"])
        .write_stdin("333\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1/6"));
}

// -- table --

#[test]
fn table_lists_hexagrams() {
    yarrow()
        .args(["table", "hexagrams"])
        .assert()
        .success()
        .stdout(predicate::str::contains("乾"))
        .stdout(predicate::str::contains("未济"))
        .stdout(predicate::str::contains("64 hexagrams"));
}

#[test]
fn table_lists_tarot_in_english() {
    yarrow()
        .args(["table", "tarot", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fool"))
        .stdout(predicate::str::contains("22 cards"));
}

#[test]
fn table_rejects_unknown_name() {
    yarrow()
        .args(["table", "runes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown table"));
}
