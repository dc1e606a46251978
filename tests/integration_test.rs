// tests/integration_test.rs
use git2::{Repository, Signature};
use ncaa_checkver::cli::orchestration::run;
use ncaa_checkver::config::{SiteConfig, ENV_SITE_BRANCH, ENV_SITE_MAKEFILE, ENV_SITE_REPO};
use ncaa_checkver::git::{SiteRepo, SystemRunner};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const UPSTREAM_MAKEFILE: &str = "\
projects[foo][download][type] = \"git\"
projects[foo][download][branch] = \"release-1.2\"
";

const FEATURE_MAKEFILE: &str = "\
projects[foo][download][type] = \"git\"
projects[foo][download][tag] = \"2.0.0-beta\"
";

/// Reports a visible skip note when no `git` binary is on PATH.
fn git_available(test: &str) -> bool {
    let found = Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);
    if !found {
        eprintln!("SKIPPED {}: git binary not found on PATH", test);
    }
    found
}

fn commit_makefile(repo: &Repository, content: &str, message: &str) -> git2::Oid {
    let workdir = repo.workdir().unwrap().to_path_buf();
    fs::write(workdir.join("barcelona.make"), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("barcelona.make")).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = Signature::now("Checkver Test", "checkver@example.com").unwrap();

    let parent = repo
        .head()
        .ok()
        .and_then(|head| head.target())
        .map(|oid| repo.find_commit(oid).unwrap());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

/// A site repo whose `origin/master` pins foo to a branch, with a local
/// `feature` branch checked out that pins it to a tag instead.
fn site_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    let upstream = commit_makefile(&repo, UPSTREAM_MAKEFILE, "site makefile");
    repo.reference("refs/remotes/origin/master", upstream, true, "fake fetch")
        .unwrap();

    let commit = repo.find_commit(upstream).unwrap();
    repo.branch("feature", &commit, false).unwrap();
    repo.set_head("refs/heads/feature").unwrap();
    commit_makefile(&repo, FEATURE_MAKEFILE, "pin foo to a tag");

    dir
}

fn current_branch(path: &Path) -> String {
    SiteRepo::new(path, SystemRunner).current_branch().unwrap()
}

fn checkver(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ncaa-checkver"))
        .args(args)
        .env_remove(ENV_SITE_REPO)
        .env_remove(ENV_SITE_MAKEFILE)
        .env_remove(ENV_SITE_BRANCH)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_checkver_help() {
    let output = checkver(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--site-repo"));
    assert!(stdout.contains("--site-makefile"));
    assert!(stdout.contains("--site-branch"));
}

#[test]
fn test_lookup_reads_upstream_and_restores_branch() {
    if !git_available("test_lookup_reads_upstream_and_restores_branch") {
        return;
    }
    let site = site_repo();
    let config = SiteConfig {
        repo_path: site.path().to_path_buf(),
        makefile: "barcelona.make".to_string(),
        branch: "master".to_string(),
        remote: "origin".to_string(),
        module: "foo".to_string(),
    };

    let report = run(&config, SystemRunner).unwrap();

    assert_eq!(report.outcome.to_string(), "[foo] Current branch: release-1.2");
    assert_eq!(report.original_branch, "feature");
    assert_eq!(current_branch(site.path()), "feature");
    assert_eq!(
        fs::read_to_string(site.path().join("barcelona.make")).unwrap(),
        FEATURE_MAKEFILE
    );
}

#[test]
fn test_binary_prints_result() {
    if !git_available("test_binary_prints_result") {
        return;
    }
    let site = site_repo();
    let repo_arg = site.path().to_str().unwrap();

    let output = checkver(&["-r", repo_arg, "foo"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[foo] Current branch: release-1.2\n"
    );
    assert_eq!(current_branch(site.path()), "feature");
}

#[test]
fn test_binary_module_not_found() {
    if !git_available("test_binary_module_not_found") {
        return;
    }
    let site = site_repo();
    let repo_arg = site.path().to_str().unwrap();

    let output = checkver(&["--site-repo", repo_arg, "bar"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Module not found: bar\n"
    );
    assert_eq!(current_branch(site.path()), "feature");
}

#[test]
fn test_binary_missing_makefile_is_fatal() {
    if !git_available("test_binary_missing_makefile_is_fatal") {
        return;
    }
    let site = site_repo();
    let repo_arg = site.path().to_str().unwrap();

    let output = checkver(&["-r", repo_arg, "--site-makefile", "missing.make", "foo"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Could not locate makefile @"));
    assert!(stderr.contains(&site.path().join("missing.make").display().to_string()));
    assert_eq!(current_branch(site.path()), "feature");
}

#[test]
fn test_binary_unknown_branch_shows_git_output() {
    if !git_available("test_binary_unknown_branch_shows_git_output") {
        return;
    }
    let site = site_repo();
    let repo_arg = site.path().to_str().unwrap();

    let output = checkver(&["-r", repo_arg, "-b", "nope", "foo"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("git checkout origin/nope"));
    assert_eq!(current_branch(site.path()), "feature");
}

#[test]
fn test_binary_missing_repository_is_fatal() {
    let parent = tempfile::tempdir().unwrap();
    let missing = parent.path().join("ncaa-barcelona");

    let output = checkver(&["-r", missing.to_str().unwrap(), "foo"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("There was a problem reading the site repo directory"));
    assert!(stderr.contains(&missing.display().to_string()));
}
