use super::*;

#[test]
fn test_fixture_writes_and_reads_files() {
    let fixture = TempDirFixture::new().unwrap();

    let path = fixture.write_file("nested/dir/file.txt", "hello").unwrap();
    assert!(path.starts_with(fixture.path()));
    assert!(fixture.file_exists("nested/dir/file.txt"));
    assert_eq!(fixture.read_file("nested/dir/file.txt").unwrap(), "hello");
}

#[test]
fn test_fixture_writes_registry() {
    let fixture = TempDirFixture::new().unwrap();

    let path = fixture.write_registry(&["A: B C", "B:"]).unwrap();
    assert_eq!(path.file_name().unwrap(), "registry.txt");
    assert_eq!(fixture.read_file("registry.txt").unwrap(), "A: B C\nB:\n");
}

#[test]
fn test_fixture_cleanup_on_drop() {
    let path = {
        let fixture = TempDirFixture::new().unwrap();
        fixture.path().to_path_buf()
    };
    assert!(!path.exists());
}
