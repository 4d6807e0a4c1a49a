mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::Command;
    use predicates::str::contains;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "urlshort";

    #[test]
    fn test_help__lists_provider_flag() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--help");

        cmd.assert()
            .success()
            .stdout(contains("Providers to try, in order"));
        Ok(())
    }

    #[test]
    fn test_exit_zero__when_input_ends_before_a_valid_url() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config").write_stdin("");

        cmd.assert()
            .success()
            .stdout(contains("Enter URL"))
            .stdout(contains("Aborted by user."));
        Ok(())
    }

    #[test]
    fn test_invalid_input__is_rejected_and_reprompted() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config").write_stdin("not a url\n");

        // The invalid line is rejected with a diagnostic; the loop then
        // hits end of input, which counts as an abort (exit 0).
        cmd.assert()
            .success()
            .stdout(contains(
                "[!] Invalid URL. Please include http:// or https://",
            ))
            .stdout(contains("Aborted by user."));
        Ok(())
    }

    #[test]
    fn test_scheme_less_input__is_rejected() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config").write_stdin("example.com/a/b\n");

        cmd.assert().success().stdout(contains(
            "[!] Invalid URL. Please include http:// or https://",
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_positional_url__is_a_usage_error() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config").arg("not a url");

        cmd.assert()
            .failure()
            .stderr(contains("not a valid absolute http(s) URL"));
        Ok(())
    }

    #[test]
    fn test_unknown_provider__is_rejected_before_prompting() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config")
            .arg("--providers")
            .arg("bitly")
            .arg("https://example.com");

        cmd.assert()
            .failure()
            .stderr(contains("Unknown provider"))
            .stderr(contains("tinyurl"));
        Ok(())
    }

    #[test]
    fn test_zero_timeout__is_rejected() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--no-config")
            .arg("--timeout")
            .arg("0")
            .arg("https://example.com");

        cmd.assert()
            .failure()
            .stderr(contains("Timeout must be at least"));
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_interrupt_at_prompt__aborts_with_exit_zero() -> TestResult {
        use std::io::Read;
        use std::process::Stdio;

        // Hold stdin open so the process sits at the URL prompt, then
        // interrupt it.
        let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin(NAME))
            .arg("--no-config")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        std::thread::sleep(std::time::Duration::from_millis(500));
        std::process::Command::new("kill")
            .args(["-INT", &child.id().to_string()])
            .status()?;

        let status = child.wait()?;
        assert_eq!(status.code(), Some(0));

        let mut stdout = String::new();
        child.stdout.take().unwrap().read_to_string(&mut stdout)?;
        assert!(stdout.contains("Aborted by user."));
        Ok(())
    }

    #[test]
    fn test_unreadable_config_file__is_an_error() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--config")
            .arg("/nonexistent/urlshort.toml")
            .arg("https://example.com");

        cmd.assert()
            .failure()
            .stderr(contains("Could not read config file"));
        Ok(())
    }
}
