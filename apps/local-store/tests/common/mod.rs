//! Shared fixtures for integration tests.
//!
//! Each test gets its own temporary directory with a file-backed store, so
//! reopen and persistence behaviour is exercised the way the app sees it.

#![allow(dead_code)]

use chrono::NaiveDate;
use daily_tracker_store::{bootstrap_with, Services, SharedStore, TrackerConfig};
use std::path::PathBuf;
use tempfile::TempDir;
use tracker_core::WorkoutSet;

pub struct TestContext {
    pub services: Services,
    pub config: TrackerConfig,
    dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = TrackerConfig {
            db_path: dir.path().join("data").join("tracker.db"),
            day_reset_hour: 0,
        };
        let services = bootstrap_with(&config, &SharedStore::new())
            .await
            .expect("open store");
        Self {
            services,
            config,
            dir,
        }
    }

    /// Open a second, independent store over the same file.
    pub async fn reopen(&self) -> Services {
        bootstrap_with(&self.config, &SharedStore::new())
            .await
            .expect("reopen store")
    }

    pub fn db_path(&self) -> PathBuf {
        self.config.db_path.clone()
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    pub async fn exercise_id(&self, slug: &str) -> i64 {
        self.services
            .workouts
            .exercise_by_slug(slug)
            .await
            .unwrap_or_else(|| panic!("{slug} not seeded"))
            .id
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Sets numbered from 1 in the given order.
pub fn sets(spec: &[(f64, u32)]) -> Vec<WorkoutSet> {
    spec.iter()
        .enumerate()
        .map(|(i, &(weight, reps))| WorkoutSet::new(i as u32 + 1, weight, reps))
        .collect()
}
