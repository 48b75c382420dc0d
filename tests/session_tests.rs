use lightfs::config::IMPORTED_FILE_NAME;
use lightfs::{FsConfig, Session};
use std::io::Cursor;

/// Helper to run a whole script through a session and capture the console
fn run_script(config: &FsConfig, script: &str) -> (Session, String) {
    let mut session = Session::new(config);
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    session.run(&mut input, &mut output).unwrap();
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn test_write_read_stats_scenario() {
    let (_, output) = run_script(
        &FsConfig::without_backing_file(),
        "create a\nwrite a hello world\nread a\nstats\nexit\n",
    );

    assert!(output.contains("> File a created.\n"));
    assert!(output.contains("> Wrote content to file a.\n"));
    assert!(output.contains("> Content of file a: [hello world]\n"));
    assert!(output.contains("> Used space: 1 MB\nFree space: 199 MB\n"));
}

#[test]
fn test_capacity_scenario() {
    let mut script = String::new();
    for i in 0..200 {
        script.push_str(&format!("create f{}\n", i));
    }
    script.push_str("create f200\ndelete f0\ncreate f200\nstats\nexit\n");

    let (session, output) = run_script(&FsConfig::without_backing_file(), &script);

    assert_eq!(output.matches("Not enough space to create file.").count(), 1);
    assert!(output.contains("File f0 deleted.\n> File f200 created.\n"));
    assert!(output.contains("Used space: 200 MB\nFree space: 0 MB\n"));

    let catalog = session.catalog();
    assert_eq!(catalog.blocks().used(), 200);
    assert_eq!(catalog.registry().len(), 200);
    assert_eq!(catalog.list().last(), Some(&("f200", 0)));
    assert!(catalog.read("f0").is_err());
}

#[test]
fn test_rename_then_read() {
    let (session, output) = run_script(
        &FsConfig::without_backing_file(),
        "create old\nwrite old some text\nrename old new\nread new\nread old\nexit\n",
    );

    assert!(output.contains("File old renamed to new.\n"));
    assert!(output.contains("Content of file new: [some text]\n"));
    assert!(output.contains("File old not found.\n"));
    assert_eq!(session.catalog().list(), vec![("new", 9)]);
}

#[test]
fn test_duplicate_names_are_shadowed() {
    let (session, output) = run_script(
        &FsConfig::without_backing_file(),
        "create a\ncreate a\nwrite a first\nlist\nexit\n",
    );

    assert!(output.contains("File list:\na (size: 5 bytes)\na (size: 0 bytes)\n"));
    assert_eq!(session.catalog().blocks().used(), 2);
}

#[test]
fn test_export_import_roundtrip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("exported.txt");
    let path = path.to_str().unwrap();

    let script = format!(
        "create doc\nwrite doc  two  spaces\nexport doc {path}\nimport {path}\nread {name}\nexit\n",
        path = path,
        name = IMPORTED_FILE_NAME,
    );
    let (session, output) = run_script(&FsConfig::without_backing_file(), &script);

    assert!(output.contains(&format!("File doc exported to {}.\n", path)));
    assert!(output.contains(&format!("File {} imported as imported_file.\n", path)));
    assert!(output.contains("Content of file imported_file: [ two  spaces]\n"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), " two  spaces");
    assert_eq!(session.catalog().blocks().used(), 2);
}

#[test]
fn test_backing_file_created_at_startup() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("light.fs");
    let config = FsConfig {
        backing_path: Some(path.clone()),
        backing_size: 1 << 20,
        ..FsConfig::default()
    };

    let (_, _) = run_script(&config, "exit\n");
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 1 << 20);
}

#[test]
fn test_windows_line_endings() {
    let (session, _) = run_script(
        &FsConfig::without_backing_file(),
        "create a\r\nwrite a text\r\nexit\r\n",
    );
    assert_eq!(session.catalog().read("a").unwrap(), "text");
}
