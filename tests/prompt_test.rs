use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;

use anyhow::{Result, bail};
use create_app::PackageManager;
use create_app::ui::prompt::{Prompter, collect_project_name, resolve_collision};

/// Replays a fixed list of answers instead of reading the terminal.
struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, _message: &str) -> Result<String> {
        match self.answers.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("scripted prompter ran out of answers"),
        }
    }

    fn select_manager(&self) -> Result<PackageManager> {
        Ok(PackageManager::Npm)
    }
}

#[test]
fn argument_is_used_without_prompting() {
    let prompter = ScriptedPrompter::new(&["unused"]);
    let name = collect_project_name(Some("  my-app  "), true, &prompter).unwrap();
    assert_eq!(name, "my-app");
    assert_eq!(prompter.remaining(), 1);
}

#[test]
fn blank_argument_falls_back_to_prompt() {
    let prompter = ScriptedPrompter::new(&["demo"]);
    let name = collect_project_name(Some("   "), true, &prompter).unwrap();
    assert_eq!(name, "demo");
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn prompt_loops_until_non_empty() {
    let prompter = ScriptedPrompter::new(&["", "   ", " demo "]);
    let name = collect_project_name(None, true, &prompter).unwrap();
    assert_eq!(name, "demo");
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn missing_name_is_fatal_without_prompts() {
    let prompter = ScriptedPrompter::new(&[]);
    let err = collect_project_name(None, false, &prompter).unwrap_err();
    assert!(err.to_string().contains("project name is required"));
}

#[test]
fn no_collision_returns_name_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let prompter = ScriptedPrompter::new(&["unused"]);
    let name = resolve_collision(dir.path(), "my-app", true, &prompter).unwrap();
    assert_eq!(name, "my-app");
    assert_eq!(prompter.remaining(), 1);
}

#[test]
fn collision_triggers_exactly_one_reprompt() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("my-app")).unwrap();

    let prompter = ScriptedPrompter::new(&[" other-app "]);
    let name = resolve_collision(dir.path(), "my-app", true, &prompter).unwrap();
    assert_eq!(name, "other-app");
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn replacement_name_is_not_validated_further() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("my-app")).unwrap();
    fs::create_dir(dir.path().join("other-app")).unwrap();

    // A replacement that itself collides is accepted as entered.
    let prompter = ScriptedPrompter::new(&["other-app"]);
    let name = resolve_collision(dir.path(), "my-app", true, &prompter).unwrap();
    assert_eq!(name, "other-app");
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn empty_replacement_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("my-app")).unwrap();

    let prompter = ScriptedPrompter::new(&[""]);
    let name = resolve_collision(dir.path(), "my-app", true, &prompter).unwrap();
    assert_eq!(name, "");
}

#[test]
fn collision_is_fatal_without_prompts() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("my-app")).unwrap();

    let prompter = ScriptedPrompter::new(&["unused"]);
    let err = resolve_collision(dir.path(), "my-app", false, &prompter).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(prompter.remaining(), 1);
}
