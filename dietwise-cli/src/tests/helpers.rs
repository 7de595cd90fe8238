//! Test helpers for writing request and catalog fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use dietwise_core::test_support::sample_catalog;
use dietwise_core::{DietRecord, Goal, Lang, RecommendationRequest, UserProfile};
use dietwise_scorer::SuitableGoals;
use serde::Serialize;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture");
}

/// Temporary directory holding the files a command reads.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_string_pretty(value).expect("serialize fixture");
        write_utf8(&path, payload.as_bytes());
        path
    }

    pub(super) fn write_request(&self, request: &RecommendationRequest) -> Utf8PathBuf {
        self.write_json("request.json", request)
    }

    pub(super) fn write_catalog(&self, records: &[DietRecord]) -> Utf8PathBuf {
        self.write_json("catalog.json", records)
    }
}

/// The obese, weight-losing user from the production walkthrough.
pub(super) fn obese_request() -> RecommendationRequest {
    RecommendationRequest::new(UserProfile::new(90.0, 170.0, 75.0)).with_lang(Lang::En)
}

/// The sample catalog with suitable goals declared as the keywords infer.
pub(super) fn clean_catalog() -> Vec<DietRecord> {
    sample_catalog()
        .into_iter()
        .map(|record| {
            let goals: Vec<Goal> = SuitableGoals::from_keywords(&record).iter().collect();
            record.with_suitable_goals(goals)
        })
        .collect()
}
