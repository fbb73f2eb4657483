use std::{
    env, fs,
    path::PathBuf,
    process::{Command, Output},
};

fn run_script(name: &str, source: &str) -> Output {
    let path: PathBuf = env::temp_dir().join(format!(
        "float_list_{}_{}.txt",
        name,
        std::process::id()
    ));
    fs::write(&path, source).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_float_list"))
        .arg(&path)
        .output()
        .unwrap();
    fs::remove_file(&path).unwrap();
    output
}

#[test]
fn get_past_end_terminates_process() {
    let output = run_script("get_past_end", "push 1\npush 2\npush 3\nget 5\nlen\n");

    assert_eq!(output.status.code(), Some(255));
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "IndexError: The array has 3 elements, but you required the 5 index\n"
    );
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "");
}

#[test]
fn get_at_length_terminates_process() {
    let output = run_script("get_at_length", "push 1\npush 2\npush 3\nget 3\n");

    assert_eq!(output.status.code(), Some(255));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("you required the 3 index"));
}

#[test]
fn set_before_start_reports_normalized_index() {
    let output = run_script("set_before_start", "push 1\npush 2\npush 3\nget -3\nset -4 0\n");

    assert_eq!(output.status.code(), Some(255));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1\n");
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "IndexError: The array has 3 elements, but you required the -1 index\n"
    );
}

#[test]
fn valid_script_succeeds() {
    let output = run_script("valid", "push 1\npush 2\npush 3\nset 1 9\nget -2\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "9\n");
}

#[test]
fn malformed_script_is_data_error() {
    let output = run_script("malformed", "push 1\nshift\n");

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "Error while running file: [line 2] Error: Unknown command 'shift'.\n"
    );
}

#[test]
fn too_many_arguments_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_float_list"))
        .args(["a", "b"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(64));
}
