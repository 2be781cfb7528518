//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flashdeck() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("flashdeck").unwrap()
}

#[test]
fn add_then_practice_session() {
    let dir = TempDir::new().unwrap();

    flashdeck()
        .current_dir(dir.path())
        .arg("--no-transcript")
        .write_stdin("add\ncat\nmeow\nadd\ndog\nwoof\nask\n3\nmeow\nmeow\nbark\nhardest card\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):",
        ))
        .stdout(predicate::str::contains("The pair (\"cat:meow\") has been added."))
        .stdout(predicate::str::contains("Print the definition of \"dog\":"))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains(
            "Wrong. The right answer is \"woof\", but your definition is correct for \"cat\".",
        ))
        .stdout(predicate::str::contains(
            "Wrong. The right answer is \"meow\".",
        ))
        .stdout(predicate::str::contains("The hardest cards are \"cat\", \"dog\""))
        .stdout(predicate::str::contains("Bye bye!"));

    assert!(!dir.path().join("default.txt").exists());
}

#[test]
fn import_flag_loads_before_the_menu() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("capitals.txt"), "France:Paris:2\nJapan:Tokyo:0\n").unwrap();

    flashdeck()
        .current_dir(dir.path())
        .args(["--no-transcript", "--import-from", "capitals.txt"])
        .write_stdin("hardest card\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2 cards have been loaded."))
        .stdout(predicate::str::contains(
            "The hardest card is \"France\". You have 2 errors answering it.",
        ))
        .stdout(predicate::str::contains("Bye bye!"));
}

#[test]
fn underscore_flag_spelling_is_accepted() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("deck.txt"), "x:y:3\n").unwrap();

    flashdeck()
        .current_dir(dir.path())
        .args(["--no-transcript", "--import_from", "deck.txt"])
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cards have been loaded."));
}

#[test]
fn export_flag_saves_on_exit_without_goodbye() {
    let dir = TempDir::new().unwrap();

    flashdeck()
        .current_dir(dir.path())
        .args(["--no-transcript", "--export-to", "saved.txt"])
        .write_stdin("add\nsun\nstar\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cards have been saved."))
        .stdout(predicate::str::contains("Bye bye!").not());

    assert_eq!(
        std::fs::read_to_string(dir.path().join("saved.txt")).unwrap(),
        "sun:star:0\n"
    );
}

#[test]
fn import_and_export_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("in.txt"), "a:1:4\nb:2:0\n").unwrap();

    flashdeck()
        .current_dir(dir.path())
        .arg("--no-transcript")
        .write_stdin("import\nin.txt\nexport\nout.txt\nhardest card\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 cards have been loaded."))
        .stdout(predicate::str::contains("2 cards have been saved."))
        // Export empties the deck.
        .stdout(predicate::str::contains("There are no cards with errors."));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "a:1:4\nb:2:0\n"
    );
}

#[test]
fn missing_import_file_is_not_fatal() {
    let dir = TempDir::new().unwrap();

    flashdeck()
        .current_dir(dir.path())
        .arg("--no-transcript")
        .write_stdin("import\nnowhere.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found."))
        .stdout(predicate::str::contains("Bye bye!"));
}

#[test]
fn invalid_choice_and_closed_input() {
    let dir = TempDir::new().unwrap();

    flashdeck()
        .current_dir(dir.path())
        .arg("--no-transcript")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid Choice. Try again."))
        .stdout(predicate::str::contains("Bye bye!"));
}

#[test]
fn transcript_records_prompts_and_answers() {
    let dir = TempDir::new().unwrap();

    flashdeck()
        .current_dir(dir.path())
        .write_stdin("remove\nghost\nexit\n")
        .assert()
        .success();

    let transcript = std::fs::read_to_string(dir.path().join("default.txt")).unwrap();
    assert!(transcript.contains("Which card?\nghost\n"));
    assert!(transcript.contains("Can't remove \"ghost\": there is no such card."));
    assert!(transcript.ends_with("exit\nBye bye!\n"));
}

#[test]
fn log_command_archives_transcript() {
    let dir = TempDir::new().unwrap();

    flashdeck()
        .current_dir(dir.path())
        .args(["--transcript", "session.txt"])
        .env("FLASHDECK_ARCHIVE_DIR", dir.path().join("archive"))
        .write_stdin("log\nfirst.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The log has been saved."));

    let archived = std::fs::read_to_string(dir.path().join("archive/first.txt")).unwrap();
    assert!(archived.contains("File name:\nfirst.txt\n"));

    // Lines after the move start a fresh transcript.
    let fresh = std::fs::read_to_string(dir.path().join("session.txt")).unwrap();
    assert!(fresh.starts_with("The log has been saved."));
}

#[test]
fn config_file_disables_transcript() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("flashdeck.toml"), "transcript = false\n").unwrap();

    flashdeck()
        .current_dir(dir.path())
        .write_stdin("exit\n")
        .assert()
        .success();

    assert!(!dir.path().join("default.txt").exists());
}

#[test]
fn missing_config_file_fails() {
    flashdeck()
        .args(["--config", "no_such_config.toml"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn help_output() {
    flashdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive flashcard trainer"));
}

#[test]
fn version_output() {
    flashdeck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flashdeck"));
}
