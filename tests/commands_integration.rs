//! Integration tests for command handlers.
//!
//! Handlers are called directly with a [`Context`] pointing at a temporary
//! repository, so no process spawning is involved.

mod common;

use branch::cli::commands;
use branch::cli::Context;
use branch::core::config::{Config, UserConfig};
use branch::core::types::BranchType;

use common::TestRepo;

fn ctx(repo: &TestRepo) -> Context {
    Context {
        cwd: Some(repo.path().to_path_buf()),
        debug: false,
        quiet: true,
    }
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn kind(name: &str) -> BranchType {
    BranchType::new(name).unwrap()
}

mod resolve_name {
    use super::*;

    #[test]
    fn with_ticket() {
        let name = commands::resolve_name(
            &Config::default(),
            &kind("feat"),
            &words(&["PIP-1234", "Implement", "Login"]),
        )
        .unwrap();
        assert_eq!(name.as_str(), "feat/pip-1234-implement-login");
    }

    #[test]
    fn without_ticket() {
        let name = commands::resolve_name(
            &Config::default(),
            &kind("fix"),
            &words(&["broken", "tests"]),
        )
        .unwrap();
        assert_eq!(name.as_str(), "fix/broken-tests");
    }

    #[test]
    fn hash_ticket_drops_hash() {
        let name = commands::resolve_name(
            &Config::default(),
            &kind("fix"),
            &words(&["#123", "crash"]),
        )
        .unwrap();
        assert_eq!(name.as_str(), "fix/123-crash");
    }

    #[test]
    fn only_symbols_falls_back_to_type() {
        let name =
            commands::resolve_name(&Config::default(), &kind("chore"), &words(&["!!!"])).unwrap();
        assert_eq!(name.as_str(), "chore");
    }

    #[test]
    fn custom_patterns() {
        let config = Config::from_user(UserConfig {
            ticket_patterns: Some(vec![r"^GH-\d+$".into()]),
            ..Default::default()
        });

        let name =
            commands::resolve_name(&config, &kind("feat"), &words(&["GH-42", "dark", "mode"]))
                .unwrap();
        assert_eq!(name.as_str(), "feat/gh-42-dark-mode");

        // Default patterns no longer apply
        let name =
            commands::resolve_name(&config, &kind("feat"), &words(&["PIP-1", "x"])).unwrap();
        assert_eq!(name.as_str(), "feat/pip-1-x");
    }
}

mod create {
    use super::*;

    #[test]
    fn creates_and_switches() {
        let repo = TestRepo::new();

        commands::create(
            &ctx(&repo),
            &Config::default(),
            &kind("feat"),
            &words(&["PIP-1234", "new", "login"]),
            false,
        )
        .unwrap();

        assert!(repo.has_branch("feat/pip-1234-new-login"));
        assert_eq!(repo.head_branch(), "feat/pip-1234-new-login");
    }

    #[test]
    fn dry_run_leaves_repo_alone() {
        let repo = TestRepo::new();
        let before = repo.head_branch();

        commands::create(
            &ctx(&repo),
            &Config::default(),
            &kind("docs"),
            &words(&["update", "readme"]),
            true,
        )
        .unwrap();

        assert!(!repo.has_branch("docs/update-readme"));
        assert_eq!(repo.head_branch(), before);
    }

    #[test]
    fn dry_run_needs_no_repository() {
        let dir = tempfile::TempDir::new().unwrap();
        let ctx = Context {
            cwd: Some(dir.path().to_path_buf()),
            quiet: true,
            ..Default::default()
        };

        commands::create(
            &ctx,
            &Config::default(),
            &kind("feat"),
            &words(&["anything"]),
            true,
        )
        .unwrap();
    }

    #[test]
    fn existing_branch_fails() {
        let repo = TestRepo::new();
        repo.create_branch("fix/crash");
        let before = repo.head_branch();

        let err = commands::create(
            &ctx(&repo),
            &Config::default(),
            &kind("fix"),
            &words(&["crash"]),
            false,
        )
        .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("fix/crash"), "{message}");
        assert!(message.contains("already exists"), "{message}");
        assert_eq!(repo.head_branch(), before);
    }

    #[test]
    fn outside_repository_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let ctx = Context {
            cwd: Some(dir.path().to_path_buf()),
            quiet: true,
            ..Default::default()
        };

        let result = commands::create(
            &ctx,
            &Config::default(),
            &kind("feat"),
            &words(&["login"]),
            false,
        );

        assert!(result.is_err());
    }
}

mod config {
    use super::*;

    #[test]
    fn effective_reflects_custom_types() {
        let config = Config::from_user(UserConfig {
            branch_types: Some(vec!["feature".into(), "hotfix".into()]),
            ..Default::default()
        });

        let effective = commands::config_effective(&config);

        assert_eq!(
            effective.branch_types,
            Some(vec!["feature".to_string(), "hotfix".to_string()])
        );
        let descriptions = effective.descriptions.unwrap();
        assert_eq!(descriptions["hotfix"], "Create a hotfix branch");
        assert_eq!(effective.ticket_patterns.map(|p| p.len()), Some(3));
    }
}
