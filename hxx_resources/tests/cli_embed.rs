use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_hxx-resources");

#[cfg(unix)]
const ETXTBSY: i32 = 26;

fn write(root: &Path, relative: &str, data: &[u8]) -> PathBuf {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, data).unwrap();
    path
}

fn hxx(path: &Path) -> PathBuf {
    hxx_resources::output_path(path, "hxx")
}

fn embed(root: &Path) -> Output {
    Command::new(BIN).arg(root).env_remove("RUST_LOG").output().unwrap()
}

fn decode(path: &Path) -> hxx_resources::Literal {
    let text = std::fs::read_to_string(path).unwrap();
    hxx_resources::parse_literal(&text).unwrap()
}

#[test]
fn embeds_resources_and_prints_progress() {
    let dir = tempdir().unwrap();
    let wav: Vec<u8> = (0..3000u32).map(|i| (i * 13 % 256) as u8).collect();
    let click = write(dir.path(), "synth/resources/click.wav", &wav);
    let config = write(dir.path(), "synth/resources/default.preset.json", b"{\"gain\": 0.5}\n");
    write(dir.path(), "synth/src/synth.cpp", b"int main() {}\n");

    let output = embed(dir.path());
    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    let expected = [
        click.display().to_string(),
        "click_wav".to_owned(),
        config.display().to_string(),
        "default_preset_json".to_owned(),
    ];
    assert_eq!(lines, expected);

    let literal = decode(&hxx(&click));
    assert_eq!(literal.identifier.as_str(), "click_wav");
    assert_eq!(literal.bytes, wav);

    let literal = decode(&hxx(&config));
    assert_eq!(literal.identifier.as_str(), "default_preset_json");
    assert_eq!(literal.bytes, b"{\"gain\": 0.5}\n");

    assert!(!dir.path().join("synth/src/synth.cpp.hxx").exists());
}

#[test]
fn empty_resource_gives_empty_array() {
    let dir = tempdir().unwrap();
    let empty = write(dir.path(), "resources/empty.bin", &[]);

    let output = embed(dir.path());
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(hxx(&empty)).unwrap(), "const unsigned char empty_bin[] = {\n};\n");
    assert!(decode(&hxx(&empty)).bytes.is_empty());
}

#[test]
fn second_run_is_identical_and_skips_outputs() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "x/resources/a.bin", &[0u8; 1500]);
    let b = write(dir.path(), "y/resources/b.txt", b"hello");

    let first = embed(dir.path());
    assert!(first.status.success());
    let first_a = std::fs::read(hxx(&a)).unwrap();
    let first_b = std::fs::read(hxx(&b)).unwrap();

    let second = embed(dir.path());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(std::fs::read(hxx(&a)).unwrap(), first_a);
    assert_eq!(std::fs::read(hxx(&b)).unwrap(), first_b);

    let stdout = String::from_utf8(second.stdout).unwrap();
    assert!(!stdout.contains(".hxx"), "{stdout}");
    assert!(!hxx(&hxx(&a)).exists());
}

#[test]
fn colliding_names_warn_but_succeed() {
    let dir = tempdir().unwrap();
    let a = write(dir.path(), "a/resources/icon.png", b"a");
    let b = write(dir.path(), "b/resources/icon.png", b"b");

    let output = embed(dir.path());
    assert!(output.status.success());
    assert_eq!(decode(&hxx(&a)).identifier.as_str(), "icon_png");
    assert_eq!(decode(&hxx(&b)).identifier.as_str(), "icon_png");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("icon_png"), "stderr:\n{stderr}");
}

#[test]
fn missing_root_fails() {
    let dir = tempdir().unwrap();
    let output = embed(&dir.path().join("does-not-exist"));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"), "stderr:\n{stderr}");
    assert!(stderr.contains("regenerating resource literals failed"), "stderr:\n{stderr}");
    assert!(stderr.contains("does-not-exist"), "stderr:\n{stderr}");
}

#[test]
fn write_failure_aborts_the_run() {
    let dir = tempdir().unwrap();
    write(dir.path(), "resources/a.bin", b"a");
    std::fs::create_dir_all(dir.path().join("resources/a.bin.hxx")).unwrap();
    let b = write(dir.path(), "resources/b.bin", b"b");

    let output = embed(dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("a.bin.hxx"), "stderr:\n{stderr}");
    assert!(!hxx(&b).exists());
}

#[cfg(unix)]
#[test]
fn without_arguments_searches_next_to_the_executable() {
    let dir = tempdir().unwrap();
    let installed = dir.path().join("hxx-resources");
    std::fs::copy(BIN, &installed).unwrap();
    let logo = write(dir.path(), "resources/logo.png", &[0x89, b'P', b'N', b'G']);

    // a freshly copied executable can briefly be "busy" while other tests spawn processes
    let mut attempts = 0;
    let output = loop {
        match Command::new(&installed).env_remove("RUST_LOG").output() {
            Err(err) if err.raw_os_error() == Some(ETXTBSY) && attempts < 20 => {
                attempts += 1;
                std::thread::sleep(std::time::Duration::from_millis(50));
            }
            result => break result.unwrap(),
        }
    };
    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().nth(1), Some("logo_png"));
    assert_eq!(decode(&hxx(&logo)).bytes, [0x89, b'P', b'N', b'G']);
}
