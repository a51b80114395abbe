use assert_cmd::Command;
use predicates::prelude::*;

fn demo() -> Command {
    Command::cargo_bin("cprop-demo").unwrap()
}

#[test]
fn prints_facts_for_a_branch() {
    demo()
        .arg("branch")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[4] return x: {p=NAC, q=NAC, x=NAC} -> {p=NAC, q=NAC, x=NAC}",
        ));
}

#[test]
fn prints_the_cfg_on_request() {
    demo()
        .args(["straight", "--cfg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2] z = x + y -> [3]"))
        .stdout(predicate::str::contains("{x=1, y=2, z=3}"));
}

#[test]
fn reports_fuel_exhaustion() {
    demo()
        .args(["loop", "--max-iterations", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("analysing `count`"))
        .stderr(predicate::str::contains("fixpoint not reached within 2 iterations"));
}

#[test]
fn rejects_unknown_programs() {
    demo().arg("recursive").assert().failure();
}
