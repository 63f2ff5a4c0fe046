use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "12345"])
        .env("BATTLEFIELD_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let last = stdout.lines().last().expect("no output");
    let v: serde_json::Value = serde_json::from_str(last).expect("invalid json");
    assert_eq!(v["seed"], 12345);
    assert_eq!(v["all_sunk"], true);
    assert_eq!(v["sunk"], 10);
    assert_eq!(v["hits"], 20);
}
