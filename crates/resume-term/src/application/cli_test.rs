use super::*;

#[test]
fn it_defaults_to_interactive() {
    let matches = build().try_get_matches_from(["resume-term"]).unwrap();
    assert_eq!(run_mode(&matches), RunMode::Interactive);
}

#[test]
fn it_parses_exec() {
    let matches = build()
        .try_get_matches_from(["resume-term", "--exec", "work show 1"])
        .unwrap();
    assert_eq!(run_mode(&matches), RunMode::Exec("work show 1".to_string()));
}

#[test]
fn it_accepts_every_config_key_as_a_flag() {
    let matches = build()
        .try_get_matches_from([
            "resume-term",
            "--github-user",
            "ada",
            "--resume-file",
            "/tmp/resume.json",
            "--username",
            "neo",
        ])
        .unwrap();

    assert_eq!(
        matches.get_one::<String>("github-user").map(|e| e.as_str()),
        Some("ada")
    );
    assert_eq!(
        matches.get_one::<String>("resume-file").map(|e| e.as_str()),
        Some("/tmp/resume.json")
    );
    assert_eq!(
        matches.get_one::<String>("username").map(|e| e.as_str()),
        Some("neo")
    );
}

#[test]
fn it_rejects_unknown_log_levels() {
    let res = build().try_get_matches_from(["resume-term", "--log-level", "loud"]);
    assert!(res.is_err());
}

#[test]
fn it_parses_completions() {
    let matches = build()
        .try_get_matches_from(["resume-term", "completions", "--shell", "bash"])
        .unwrap();

    let (name, subcmd_matches) = matches.subcommand().unwrap();
    assert_eq!(name, "completions");
    assert_eq!(subcmd_matches.get_one::<Shell>("shell"), Some(&Shell::Bash));
}

#[test]
fn it_documents_defaults_in_help() {
    let cmd = build();
    let arg = cmd
        .get_arguments()
        .find(|e| return e.get_long() == Some("github-api-url"))
        .unwrap();

    assert_eq!(
        arg.get_help().unwrap().to_string(),
        "Base URL of the GitHub API. [default: https://api.github.com]"
    );
}

#[test]
fn it_passes_the_command_definition_checks() {
    build().debug_assert();
}
