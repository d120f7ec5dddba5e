use std::{
    fs,
    path::Path,
    process::{Command, Output},
};
use tempfile::TempDir;

const ROM_SIZE: usize = 0x80000;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_song-inserter"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("could not run song-inserter")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_gbs(path: &Path, name: &[u8], author: &[u8], data: &[u8]) {
    let mut bytes = vec![0; 0x70];
    bytes[0..3].copy_from_slice(b"GBS");
    bytes[0x10..0x10 + name.len()].copy_from_slice(name);
    bytes[0x30..0x30 + author.len()].copy_from_slice(author);
    bytes.extend_from_slice(data);
    fs::write(path, bytes).unwrap();
}

fn song_data() -> Vec<u8> {
    (0..100).map(|i| 0x80 + i).collect()
}

fn setup() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_gbs(&dir.path().join("track.gbs"), b"test", b"abc", &song_data());
    fs::write(dir.path().join("rom.gb"), vec![0; ROM_SIZE]).unwrap();
    dir
}

#[test]
fn default_base_rom() {
    let dir = setup();

    let output = run(dir.path(), &["out.gb", "track.gbs"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Starting...\nWriting song data\nWriting song name\nWriting song author\nWriting buffer to ROM\nSuccess!\n"
    );

    let rom = fs::read(dir.path().join("out.gb")).unwrap();
    assert_eq!(rom.len(), ROM_SIZE);
    assert_eq!(&rom[0x500..0x564], song_data().as_slice());
    assert_eq!(&rom[0x7C715..0x7C727], b"TEST              ");
    assert_eq!(&rom[0x7C729..0x7C73B], b"ABC               ");
    assert_eq!(rom[0x7C000], 0);
}

#[test]
fn explicit_base_rom() {
    let dir = setup();
    let mut base: Vec<u8> = (0..ROM_SIZE + 0x10).map(|i| (i % 251) as u8).collect();
    fs::write(dir.path().join("base.gb"), &base).unwrap();

    let output = run(dir.path(), &["out.gb", "track.gbs", "base.gb"]);
    assert_eq!(output.status.code(), Some(0));

    base[0x500..0x564].copy_from_slice(&song_data());
    base[0x7C715..0x7C727].copy_from_slice(b"TEST              ");
    base[0x7C729..0x7C73B].copy_from_slice(b"ABC               ");

    let rom = fs::read(dir.path().join("out.gb")).unwrap();
    assert_eq!(rom, base);
}

#[test]
fn wrong_argument_count_shows_usage() {
    let dir = setup();

    for args in [&["out.gb"][..], &["a.gb", "b.gbs", "c.gb", "d.gb"][..]] {
        let output = run(dir.path(), args);
        assert_eq!(output.status.code(), Some(0));
        assert!(stdout(&output).starts_with("Usage:\n"));
    }

    assert!(!dir.path().join("out.gb").exists());
    assert!(!dir.path().join("a.gb").exists());
}

#[test]
fn wrong_output_extension() {
    let dir = setup();

    let output = run(dir.path(), &["out.txt", "track.gbs"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output)
        .contains("ERROR: The output ROM must have the file name extension '.gb'"));
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn wrong_song_extension() {
    let dir = setup();

    let output = run(dir.path(), &["out.gb", "track.GBS"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output)
        .contains("ERROR: The input song must have the file name extension '.gbs'"));
    assert!(!dir.path().join("out.gb").exists());
}

#[test]
fn dotfile_base_rom_has_no_extension() {
    let dir = setup();
    fs::write(dir.path().join(".gb"), vec![0; ROM_SIZE]).unwrap();

    let output = run(dir.path(), &["out.gb", "track.gbs", ".gb"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("ERROR: Base ROM must have the file name extension '.gb'"));
}

#[test]
fn missing_song() {
    let dir = setup();

    let output = run(dir.path(), &["out.gb", "missing.gbs"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("ERROR: Failed to open gbs file 'missing.gbs'"));
}

#[test]
fn missing_base_rom_is_reported_first() {
    let dir = setup();

    let output = run(dir.path(), &["out.gb", "missing.gbs", "missing.gb"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("ERROR: Failed to open base ROM 'missing.gb'"));
}

#[test]
fn uncreatable_output() {
    let dir = setup();

    let output = run(dir.path(), &["missing_dir/out.gb", "track.gbs"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("ERROR: Failed to open output file 'missing_dir/out.gb'"));
    assert!(!dir.path().join("missing_dir").exists());
}

#[test]
fn open_failures_are_reported_in_order() {
    let dir = setup();

    let output = run(
        dir.path(),
        &["missing_dir/out.gb", "missing.gbs", "missing.gb"],
    );
    assert_eq!(output.status.code(), Some(1));

    let printed = stdout(&output);
    assert!(printed.contains("ERROR: Failed to open base ROM 'missing.gb'"));
    assert!(!printed.contains("gbs file"));
    assert!(!printed.contains("output file"));

    let output = run(dir.path(), &["missing_dir/out.gb", "missing.gbs"]);
    assert_eq!(output.status.code(), Some(1));

    let printed = stdout(&output);
    assert!(printed.contains("ERROR: Failed to open gbs file 'missing.gbs'"));
    assert!(!printed.contains("output file"));
}

#[test]
fn dash_prefixed_paths_are_positional() {
    let dir = setup();
    fs::copy(dir.path().join("track.gbs"), dir.path().join("-t.gbs")).unwrap();

    let output = run(dir.path(), &["-out.gb", "-t.gbs"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).ends_with("Success!\n"));

    let rom = fs::read(dir.path().join("-out.gb")).unwrap();
    assert_eq!(rom.len(), ROM_SIZE);
    assert_eq!(&rom[0x500..0x564], song_data().as_slice());
    assert_eq!(&rom[0x7C715..0x7C727], b"TEST              ");
}

#[test]
fn base_rom_too_small() {
    let dir = setup();
    fs::write(dir.path().join("rom.gb"), vec![0; ROM_SIZE - 1]).unwrap();

    let output = run(dir.path(), &["out.gb", "track.gbs"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(
        "ERROR: Base ROM is too small. It should be 0x80000 (524288) bytes or more."
    ));
    assert_eq!(fs::read(dir.path().join("out.gb")).unwrap().len(), 0);
}

#[test]
fn song_overflows_into_graphics() {
    let dir = setup();
    write_gbs(
        &dir.path().join("big.gbs"),
        b"big",
        b"song",
        &vec![0x11; 0x7BB01],
    );

    let output = run(dir.path(), &["out.gb", "big.gbs"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output)
        .contains("ERROR: Cannot insert song without overwriting graphics data."));
    assert_eq!(fs::read(dir.path().join("out.gb")).unwrap().len(), 0);
}
