use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn cheatsheet(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cheatsheet").unwrap();
    cmd.env("CHEATSHEET_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add(home: &Path, tags: &str, clue: &str, answer: &str) {
    cheatsheet(home)
        .args(["add", tags, clue, answer, "--force"])
        .assert()
        .success();
}

#[test]
fn test_add_and_show() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    cheatsheet(home)
        .args(["add", "bash,files", "list files", "ls -la", "-f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list files"))
        .stdout(predicate::str::contains("#files"))
        .stdout(predicate::str::contains("Entry added (1)"));

    assert!(home.join("lists").join("cheatsheet.json").exists());

    cheatsheet(home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Primary"))
        .stdout(predicate::str::contains("ls -la"));
}

#[test]
fn test_show_filters_by_tags() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "bash,files", "list files", "ls -la");
    add(home, "git,vcs", "undo commit", "git reset HEAD~");
    add(home, "bash,vcs", "blame a line", "git blame -L 10,10 file");

    cheatsheet(home)
        .args(["show", "--tags", "vcs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("undo commit"))
        .stdout(predicate::str::contains("blame a line"))
        .stdout(predicate::str::contains("list files").not());

    cheatsheet(home)
        .args(["show", "--tags", "bash,vcs", "--and"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blame a line"))
        .stdout(predicate::str::contains("undo commit").not());

    cheatsheet(home)
        .args(["show", "--tags", "docker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_update_changes_only_given_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "bash,files", "list files", "ls");

    cheatsheet(home)
        .args(["update", "1", "--answer", "ls -la"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry updated (1)"));

    let raw = std::fs::read_to_string(home.join("lists").join("cheatsheet.json")).unwrap();
    assert!(raw.contains("\"answer\": \"ls -la\""));
    assert!(raw.contains("\"clue\": \"list files\""));

    cheatsheet(home)
        .args(["update", "1", "--answer", "ls -la"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry 1 unchanged"));
}

#[test]
fn test_remove() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "bash", "one", "1");
    add(home, "bash", "two", "2");

    cheatsheet(home)
        .args(["remove", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry removed (1): one"));

    cheatsheet(home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("two"))
        .stdout(predicate::str::contains("one").not());

    cheatsheet(home)
        .args(["remove", "1", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Entry not found: 1"));
}

#[test]
fn test_named_lists_and_listpath() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    cheatsheet(home)
        .args(["add", "docker", "running", "docker ps", "-f", "-l", "work"])
        .assert()
        .success();
    add(home, "bash", "list files", "ls");

    cheatsheet(home)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheatsheets: cheatsheet, work"));

    let outside = home.join("elsewhere").join("mine.json");
    cheatsheet(home)
        .args(["add", "git", "status", "git status", "-f", "--listpath"])
        .arg(&outside)
        .assert()
        .success();
    assert!(outside.exists());

    cheatsheet(home)
        .args(["info", "-l", "a", "--listpath", "b.json"])
        .assert()
        .failure();
}

#[test]
fn test_info() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "bash,cli", "one", "1");
    add(home, "bash", "two", "2");
    add(home, "git", "three", "3");

    cheatsheet(home)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheat sheet information"))
        .stdout(predicate::str::contains("bash, cli, git"));
}

#[test]
fn test_empty_primary_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    cheatsheet(temp_dir.path())
        .args(["add", ",cli", "clue", "answer", "-f"])
        .assert()
        .failure();
}

#[test]
fn test_corrupt_list_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    let lists = home.join("lists");
    std::fs::create_dir_all(&lists).unwrap();
    std::fs::write(lists.join("cheatsheet.json"), "{ not json").unwrap();

    cheatsheet(home)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt list file"));
}

#[test]
fn test_config_picks_default_list_and_style() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    std::fs::write(
        home.join("config.json"),
        r#"{"default_list": "work", "default_style": "simple"}"#,
    )
    .unwrap();

    add(home, "bash,cli", "list files", "ls -la");
    assert!(home.join("lists").join("work.json").exists());

    cheatsheet(home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer"))
        .stdout(predicate::str::contains("#cli").not());

    cheatsheet(home)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheatsheets: work"));
}

#[test]
fn test_remove_reads_answer_from_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "bash", "one", "1");
    add(home, "bash", "two", "2");

    cheatsheet(home)
        .args(["remove", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete this entry? [y/N]"))
        .stdout(predicate::str::contains("Nothing removed."));

    cheatsheet(home)
        .args(["remove", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed:"))
        .stdout(predicate::str::contains("Entry removed (1): one"));

    cheatsheet(home)
        .args(["show", "--style", "simple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("two"))
        .stdout(predicate::str::contains("one").not());
}

#[test]
fn test_add_asks_about_new_tags_on_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "bash,cli", "list files", "ls");

    cheatsheet(home)
        .args(["add", "docker,cli", "running", "docker ps"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not in the list yet: docker"))
        .stdout(predicate::str::contains("Entry not added"));

    cheatsheet(home)
        .args(["add", "docker,cli", "running", "docker ps"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added (2)"));

    // Known tags need no answer.
    cheatsheet(home)
        .args(["add", "bash", "where am i", "pwd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Y/n]").not())
        .stdout(predicate::str::contains("Entry added (3)"));
}

#[test]
fn test_update_prompt_reads_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "bash", "one", "1");

    cheatsheet(home)
        .args(["update", "1", "--clue", "first", "-i"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing updated."));

    cheatsheet(home)
        .args(["update", "1", "--clue", "first", "-i"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry updated (1)"));
}

#[test]
fn test_first_add_warns_once_about_missing_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    cheatsheet(temp_dir.path())
        .args(["add", "bash", "list files", "ls", "-f"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no cheat sheet file found").count(1));
}

#[test]
fn test_compact_style_and_match_option() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    add(home, "bash,vcs", "blame a line", "git blame -L 10,10 file");
    add(home, "git,vcs", "undo commit", "git reset HEAD~");

    cheatsheet(home)
        .args(["show", "--tags", "bash,vcs", "--match", "all", "--style", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags"))
        .stdout(predicate::str::contains("#vcs"))
        .stdout(predicate::str::contains("blame a line"))
        .stdout(predicate::str::contains("undo commit").not());

    cheatsheet(home)
        .args(["show", "--match", "xor"])
        .assert()
        .failure();
}
