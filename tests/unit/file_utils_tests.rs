/*!
 * Tests for file system capability and directory helpers
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use ttaf2vtt::errors::WebVttError;
use ttaf2vtt::file_utils::{FileManager, FileSystem, LocalFileSystem, MemoryFileSystem};
use crate::common;

#[test]
fn test_find_files_withMixedEntries_shouldReturnMatchingTopLevelFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "b.xml", "<tt/>")?;
    common::create_test_file(dir, "A.XML", "<tt/>")?;
    common::create_test_file(dir, "notes.txt", "ignored")?;
    fs::create_dir(dir.join("nested"))?;
    common::create_test_file(&dir.join("nested"), "c.xml", "<tt/>")?;

    let files = FileManager::find_files(dir, "xml")?;

    assert_eq!(files, vec![dir.join("A.XML"), dir.join("b.xml")]);
    Ok(())
}

#[test]
fn test_output_path_for_shouldSwapExtensionAndDirectory() {
    let output = FileManager::output_path_for("captions/episode1.xml", "out", "vtt");
    assert_eq!(output, PathBuf::from("out/episode1.vtt"));

    let output = FileManager::output_path_for("episode.final.xml", "out", ".vtt");
    assert_eq!(output, PathBuf::from("out/episode.final.vtt"));
}

#[test]
fn test_local_create_dir_withExistingDir_shouldSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out");

    LocalFileSystem.create_dir(&target)?;
    LocalFileSystem.create_dir(&target)?;

    assert!(LocalFileSystem.is_dir(&target));
    assert!(LocalFileSystem.is_writable_dir(&target));
    Ok(())
}

#[test]
fn test_local_create_dir_withMissingParent_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("missing").join("out");

    assert!(LocalFileSystem.create_dir(&target).is_err());
    Ok(())
}

#[test]
fn test_local_read_and_write_shouldRoundTripContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("sample.vtt");

    LocalFileSystem.write(&target, "WEBVTT\n\n")?;

    assert!(LocalFileSystem.is_readable(&target));
    assert_eq!(LocalFileSystem.read_to_string(&target)?, "WEBVTT\n\n");
    assert!(!LocalFileSystem.is_readable(&temp_dir.path().join("absent.vtt")));
    Ok(())
}

#[test]
fn test_local_write_intoNonDirectory_shouldFailWithIo() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let blocker = common::create_test_file(temp_dir.path(), "blocker", "plain file")?;
    let target = blocker.join("sample.vtt");

    assert!(!LocalFileSystem.is_writable_dir(&blocker));
    let result = LocalFileSystem.write(&target, "WEBVTT\n\n");

    assert!(matches!(result, Err(WebVttError::Io { .. })));
    Ok(())
}

#[test]
fn test_memory_fs_shouldTrackDirectoriesAndFiles() {
    let fs = MemoryFileSystem::new();
    fs.add_file("src/a.xml", "<tt/>");

    assert!(fs.is_dir(Path::new("src")));
    assert!(fs.is_dir(Path::new(".")));
    assert!(fs.is_file(Path::new("src/a.xml")));
    assert!(fs.is_readable(Path::new("src/a.xml")));
    assert!(!fs.is_file(Path::new("src")));

    fs.create_dir(Path::new("src/out")).unwrap();
    assert!(fs.is_writable_dir(Path::new("src/out")));

    fs.set_read_only("src");
    assert!(!fs.is_writable_dir(Path::new("src")));
    assert!(fs.write(Path::new("src/b.xml"), "x").is_err());
}

#[test]
fn test_memory_fs_find_files_shouldFilterByDirectoryAndExtension() {
    let fs = MemoryFileSystem::new();
    fs.add_file("src/b.xml", "");
    fs.add_file("src/a.XML", "");
    fs.add_file("src/readme.txt", "");
    fs.add_file("src/deep/c.xml", "");

    let files = fs.find_files(Path::new("src"), "xml").unwrap();

    assert_eq!(files, vec![PathBuf::from("src/a.XML"), PathBuf::from("src/b.xml")]);
    assert!(fs.find_files(Path::new("nowhere"), "xml").is_err());
}
