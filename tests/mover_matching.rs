use assert_fs::prelude::*;
use pathdig::{move_directory, move_file, move_matching};

#[test]
fn no_match_returns_false_and_changes_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("keepsake.txt");
    src.write_str("x").unwrap();
    let dest = temp.child("sorted");
    dest.create_dir_all().unwrap();

    let moved = move_matching(src.path(), &["foo", "bar"], dest.path()).unwrap();
    assert!(!moved);
    assert!(src.path().is_file());
    assert!(std::fs::read_dir(dest.path()).unwrap().next().is_none());
}

#[test]
fn match_relocates_under_final_segment_name() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("incoming/foo-album");
    src.create_dir_all().unwrap();
    let dest = temp.child("sorted");
    dest.create_dir_all().unwrap();

    let moved = move_matching(src.path(), &["foo", "bar"], dest.path()).unwrap();
    assert!(moved);
    assert!(!src.path().exists());
    assert!(dest.path().join("foo-album").is_dir());
}

#[test]
fn pattern_may_match_anywhere_in_the_full_path() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("music/track.flac");
    src.touch().unwrap();
    let dest = temp.child("out");
    dest.create_dir_all().unwrap();

    // "music" only appears in the parent segment, not the file name.
    let moved = move_matching(src.path(), &["music"], dest.path()).unwrap();
    assert!(moved);
    assert!(dest.path().join("track.flac").is_file());
}

#[test]
fn move_directory_matched_and_unconditional() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("shows/season-01");
    a.create_dir_all().unwrap();
    let b = temp.child("shows/misc");
    b.create_dir_all().unwrap();
    let dest = temp.child("archive");
    dest.create_dir_all().unwrap();

    assert!(move_directory(a.path(), dest.path(), Some(&["season"])).unwrap());
    assert!(dest.path().join("season-01").is_dir());

    // Patterns that never match leave the tree alone.
    assert!(!move_directory(b.path(), dest.path(), Some(&["nope"])).unwrap());
    assert!(b.path().is_dir());

    // Unconditional move lands inside the existing destination directory.
    assert!(move_directory(b.path(), dest.path(), None).unwrap());
    assert!(dest.path().join("misc").is_dir());
}

#[test]
fn move_file_refuses_non_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dir = temp.child("not-a-file");
    dir.create_dir_all().unwrap();
    let dest = temp.child("out");
    dest.create_dir_all().unwrap();

    assert!(!move_file(dir.path(), dest.path(), None).unwrap());
    assert!(!move_file(dir.path(), dest.path(), Some(&["not"])).unwrap());
    assert!(dir.path().is_dir());
}

#[test]
fn move_file_unconditional_without_patterns() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("done.iso");
    src.write_str("payload").unwrap();
    let dest = temp.child("out");
    dest.create_dir_all().unwrap();

    assert!(move_file(src.path(), dest.path(), None).unwrap());
    assert_eq!(
        std::fs::read_to_string(dest.path().join("done.iso")).unwrap(),
        "payload"
    );
}
