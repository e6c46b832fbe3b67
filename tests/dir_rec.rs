use futurefs::fs::{create_dir, create_dir_rec};
use futures::executor::block_on;
use tempfile::tempdir;

use std::fs;
use std::io;

#[test]
fn create_dir_single_level() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("single");
    let path_string = path.to_string_lossy().into_owned();

    block_on(create_dir(&path_string, None)).expect("create single");

    let meta = fs::metadata(&path).expect("metadata");
    assert!(meta.is_dir());
}

#[test]
fn create_dir_fails_when_parent_is_missing() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("missing").join("child");
    let path_string = path.to_string_lossy().into_owned();

    let err = block_on(create_dir(&path_string, None)).expect_err("expected error");
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn create_dir_fails_when_path_exists() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("taken");
    let path_string = path.to_string_lossy().into_owned();

    block_on(async {
        create_dir(&path_string, None).await.expect("first create");

        let err = create_dir(&path_string, None)
            .await
            .expect_err("expected error");
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    });
}

#[test]
fn create_dir_rec_with_no_missing_ancestors() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("flat");
    let path_string = path.to_string_lossy().into_owned();

    block_on(create_dir_rec(&path_string, None)).expect("create");

    assert!(fs::metadata(&path).expect("metadata").is_dir());
}

#[test]
fn create_dir_rec_with_one_missing_ancestor() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("one").join("deep");
    let path_string = path.to_string_lossy().into_owned();

    block_on(create_dir_rec(&path_string, None)).expect("create");

    assert!(fs::metadata(&path).expect("metadata").is_dir());
}

#[test]
fn create_dir_rec_with_three_missing_ancestors_and_idempotent() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("a").join("b").join("c").join("d");
    let path_string = path.to_string_lossy().into_owned();

    block_on(async {
        create_dir_rec(&path_string, None).await.expect("create");

        // Calling again on the fully existing path must succeed as well.
        create_dir_rec(&path_string, None)
            .await
            .expect("idempotent create");
    });

    assert!(fs::metadata(&path).expect("metadata").is_dir());
}

#[test]
fn create_dir_rec_fails_when_path_is_a_file() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("occupied");
    let path_string = path.to_string_lossy().into_owned();

    fs::write(&path, b"not a directory").expect("seed file");

    let err = block_on(create_dir_rec(&path_string, None)).expect_err("expected error");
    assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
}

#[test]
fn create_dir_rec_fails_when_path_is_a_symlink_to_a_directory() {
    let temp = tempdir().expect("tempdir");
    let real = temp.path().join("real");
    fs::create_dir(&real).expect("real dir");

    let link = temp.path().join("alias");
    std::os::unix::fs::symlink(&real, &link).expect("symlink");

    // The link resolves to a directory, but the path itself is a symlink,
    // which is a wrong type rather than idempotent success.
    let link_string = link.to_string_lossy().into_owned();
    let err = block_on(create_dir_rec(&link_string, None)).expect_err("expected error");
    assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
}

#[test]
fn create_dir_rec_accepts_an_explicit_mode() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("modal").join("inner");
    let path_string = path.to_string_lossy().into_owned();

    block_on(create_dir_rec(&path_string, Some(0o700))).expect("create with mode");

    assert!(fs::metadata(&path).expect("metadata").is_dir());
}
