//! Integration tests for quarantine

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use mediasweep_config::MediaRoot;
    use mediasweep_errors::{Error, StorageError};
    use mediasweep_quarantine::*;
    use mediasweep_types::CaptureBucket;
    use std::collections::HashSet;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn mover(root: &Path) -> QuarantineMover {
        QuarantineMover::new(MediaRoot::new(root).unwrap(), "quarantine")
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_quarantine_keeps_relative_layout() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        let orphan = touch(root, "gallery/2024/orphan.jpg", "orphan");
        let bucket = CaptureBucket::parse("2024-03-09_14:05").unwrap();

        let moved = mover(root).quarantine_into(&[orphan.clone()], &bucket).unwrap();

        let expected = root.join("quarantine/2024-03-09_14:05/gallery/2024/orphan.jpg");
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].source, orphan);
        assert_eq!(moved[0].destination.as_deref(), Some(expected.as_path()));
        assert!(!orphan.exists());
        assert_eq!(fs::read_to_string(expected).unwrap(), "orphan");
    }

    #[test]
    fn test_batch_shares_one_bucket() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        let files = vec![touch(root, "a.txt", "a"), touch(root, "b/c.txt", "c")];

        let (bucket, moved) = mover(root).quarantine(&files).unwrap();

        let bucket_dir = root.join("quarantine").join(bucket.dir_name());
        for file in &moved {
            assert!(file.destination.as_ref().unwrap().starts_with(&bucket_dir));
        }
        assert!(bucket_dir.join("a.txt").exists());
        assert!(bucket_dir.join("b/c.txt").exists());
    }

    #[test]
    fn test_colliding_destinations_never_overwrite() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        let bucket = CaptureBucket::parse("2024-03-09_14:05").unwrap();
        let mover = mover(root);

        let mut destinations = HashSet::new();
        for round in 0..3 {
            let content = format!("round {round}");
            let file = touch(root, "docs/report.pdf", &content);
            let moved = mover.quarantine_into(&[file], &bucket).unwrap();
            let destination = moved[0].destination.clone().unwrap();
            assert_eq!(fs::read_to_string(&destination).unwrap(), content);
            destinations.insert(destination);
        }

        assert_eq!(destinations.len(), 3);
        let bucket_docs = root.join("quarantine/2024-03-09_14:05/docs");
        let on_disk = fs::read_dir(&bucket_docs).unwrap().count();
        assert_eq!(on_disk, 3);
        assert!(bucket_docs.join("report.pdf").exists());
    }

    #[test]
    fn test_vanished_source_fails_after_earlier_moves() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        let bucket = CaptureBucket::parse("2024-03-09_14:05").unwrap();
        let present = touch(root, "first.txt", "1");
        let vanished = root.join("gone.txt");
        let untouched = touch(root, "third.txt", "3");

        let result = mover(root).quarantine_into(&[present, vanished, untouched.clone()], &bucket);

        assert!(matches!(
            result,
            Err(Error::Storage(StorageError::MoveFailed { .. }))
        ));
        assert!(root.join("quarantine/2024-03-09_14:05/first.txt").exists());
        assert!(untouched.exists());
    }

    #[test]
    fn test_path_outside_root_rejected() {
        let temp = tempdir().unwrap();
        let other = tempdir().unwrap();
        let outside = touch(other.path(), "x.txt", "x");
        let bucket = CaptureBucket::parse("2024-03-09_14:05").unwrap();

        let result = mover(temp.path()).quarantine_into(&[outside.clone()], &bucket);
        assert!(matches!(
            result,
            Err(Error::Storage(StorageError::OutsideMediaRoot { .. }))
        ));
        assert!(outside.exists());
    }

    #[test]
    fn test_retention_sweep() {
        let temp = tempdir().unwrap();
        let quarantine = temp.path().join("quarantine");
        touch(&quarantine, "2020-01-01_00:00/old.txt", "old");
        touch(&quarantine, "2020-01-03_00:00/recent.txt", "recent");
        touch(&quarantine, "garbage-name/keep.txt", "keep");
        touch(&quarantine, "2019-01-01_00:00", "a stray file named like a bucket");

        // 2020-04-01 is 91 days after 2020-01-01 and 89 after 2020-01-03
        let sweeper = RetentionSweeper::new(quarantine.clone(), TimeDelta::days(90));
        let report = sweeper.sweep(at(2020, 4, 1), false);

        assert_eq!(report.removed.len(), 1);
        assert_eq!(report.removed[0].dir_name(), "2020-01-01_00:00");
        assert_eq!(report.retained.len(), 1);
        assert_eq!(report.skipped, vec!["2019-01-01_00:00", "garbage-name"]);
        assert!(report.failed.is_empty());

        assert!(!quarantine.join("2020-01-01_00:00").exists());
        assert!(quarantine.join("2020-01-03_00:00/recent.txt").exists());
        assert!(quarantine.join("garbage-name/keep.txt").exists());
        assert!(quarantine.join("2019-01-01_00:00").is_file());
    }

    #[test]
    fn test_retention_sweep_dry_run_touches_nothing() {
        let temp = tempdir().unwrap();
        let quarantine = temp.path().join("quarantine");
        touch(&quarantine, "2020-01-01_00:00/old.txt", "old");

        let report = RetentionSweeper::new(quarantine.clone(), TimeDelta::days(90)).sweep(at(2021, 1, 1), true);

        assert!(report.dry_run);
        assert_eq!(report.removed.len(), 1);
        assert!(quarantine.join("2020-01-01_00:00/old.txt").exists());
    }

    #[test]
    fn test_retention_sweep_without_quarantine_dir() {
        let temp = tempdir().unwrap();
        let report =
            RetentionSweeper::new(temp.path().join("quarantine"), TimeDelta::days(90)).sweep(at(2021, 1, 1), false);
        assert!(report.removed.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_prune_keeps_dirs_with_files() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("root");
        let file = touch(&root, "a/b/file.txt", "x");

        assert!(!prune_empty_dirs(&root));
        assert!(file.exists());

        fs::remove_file(&file).unwrap();
        assert!(prune_empty_dirs(&root));
        assert!(!root.exists());
    }

    #[test]
    fn test_prune_removes_only_empty_branches() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("root");
        touch(&root, "keep/file.txt", "x");
        fs::create_dir_all(root.join("empty/deeper/deepest")).unwrap();
        fs::create_dir_all(root.join("keep/empty")).unwrap();

        assert!(!prune_empty_dirs(&root));
        assert!(!root.join("empty").exists());
        assert!(!root.join("keep/empty").exists());
        assert!(root.join("keep/file.txt").exists());
    }

    #[test]
    fn test_prune_on_file_is_false() {
        let temp = tempdir().unwrap();
        let file = touch(temp.path(), "file.txt", "x");
        assert!(!prune_empty_dirs(&file));
        assert!(file.exists());
    }

    #[test]
    fn test_delete_media() {
        let temp = tempdir().unwrap();
        let a = touch(temp.path(), "a.txt", "a");
        let b = touch(temp.path(), "sub/b.txt", "b");

        let deleted = delete_media(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(deleted.len(), 2);
        assert!(deleted.iter().all(|d| d.destination.is_none()));
        assert!(!a.exists());
        assert!(!b.exists());
        assert!(temp.path().join("sub").is_dir());
    }
}
