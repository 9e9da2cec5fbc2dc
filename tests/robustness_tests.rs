use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;

#[test]
fn test_malformed_amount_fails_the_run() {
    let output = common::run_with_stdin(
        &mut common::menu_command(),
        "1\nnot_a_number\n4111111111111111\n12/27\n123\n3\n",
    )
    .expect("Failed to execute command");

    output
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not convert string to amount"))
        .stdout(predicate::str::contains("Enter credit card number").not())
        .stdout(predicate::str::contains("Exiting").not());
}

#[test]
fn test_unrepresentable_amount_fails_the_run() {
    for amount in ["1e30", "79228162514264337593543950336", "0.0000000000000000000000000000001"] {
        let script = format!("2\n{amount}\na@b.com\n3\n");
        let output = common::run_with_stdin(&mut common::menu_command(), &script)
            .expect("Failed to execute command");

        output
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot represent amount exactly"))
            .stdout(predicate::str::contains("Processing PayPal payment").not());
    }
}

#[test]
fn test_input_closed_before_exit() {
    let output = common::run_with_stdin(&mut common::menu_command(), "2\n12.5\n")
        .expect("Failed to execute command");

    output
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn test_many_invalid_options() {
    let mut script = String::new();
    for bad in ["0", "4", "", "x", "1.0", " 2", "exit"] {
        script.push_str(bad);
        script.push('\n');
    }
    script.push_str("3\n");

    let output = common::run_with_stdin(&mut common::menu_command(), &script)
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Invalid option. Please try again.").count(), 7);
    assert!(!stdout.contains("Enter payment amount"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let mut cmd = common::menu_command();
    cmd.env("RUST_LOG", "debug");
    let output = common::run_with_stdin(&mut cmd, "2\n1\nlog@example.com\n3\n")
        .expect("Failed to execute command");

    output
        .assert()
        .success()
        .stderr(predicate::str::contains("payment completed"))
        .stdout(predicate::str::contains("payment completed").not());
}
