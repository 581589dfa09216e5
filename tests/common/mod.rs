#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use rusty_scramble::controller::session::HolePublisher;
use rusty_scramble::controller::store::ScoringStore;
use rusty_scramble::error::AppError;
use rusty_scramble::model::{CourseInfo, HoleSnapshot, Round, SessionHandle};
use rusty_scramble::mvu::game::GameModel;

/// Par 72 card. Hole 5 is a par 5 so override tests have something to change.
pub fn sample_course() -> CourseInfo {
    CourseInfo {
        name: "Cedar Ridge".to_string(),
        tee_color: "White".to_string(),
        par: vec![4, 4, 3, 4, 5, 4, 3, 4, 5, 4, 4, 3, 4, 5, 4, 3, 4, 5],
        yardage: vec![
            380, 402, 165, 355, 520, 390, 178, 410, 545, 372, 398, 151, 366, 530, 401, 188, 377,
            512,
        ],
    }
}

pub fn players(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

pub fn sample_round(names: &[&str]) -> Round {
    Round::new(players(names), sample_course()).expect("sample round is valid")
}

pub fn sample_store(names: &[&str]) -> ScoringStore {
    ScoringStore::new(sample_round(names))
}

pub fn sample_game(names: &[&str]) -> GameModel {
    GameModel::new(sample_round(names)).expect("sample game starts")
}

pub fn sample_session() -> SessionHandle {
    SessionHandle {
        name: "saturday-scramble".to_string(),
        token: "token-123".to_string(),
    }
}

/// Keeps every pushed hole in arrival order.
#[derive(Default)]
pub struct RecordingPublisher {
    pub pushed: Mutex<Vec<(SessionHandle, HoleSnapshot)>>,
}

impl RecordingPublisher {
    pub fn snapshots(&self) -> Vec<HoleSnapshot> {
        self.pushed
            .lock()
            .expect("publisher lock")
            .iter()
            .map(|(_, s)| s.clone())
            .collect()
    }
}

#[async_trait]
impl HolePublisher for RecordingPublisher {
    async fn publish_hole(
        &self,
        session: &SessionHandle,
        snapshot: &HoleSnapshot,
    ) -> Result<(), AppError> {
        self.pushed
            .lock()
            .expect("publisher lock")
            .push((session.clone(), snapshot.clone()));
        Ok(())
    }
}

/// Every push fails as if the service were down.
pub struct FailingPublisher;

#[async_trait]
impl HolePublisher for FailingPublisher {
    async fn publish_hole(
        &self,
        _session: &SessionHandle,
        _snapshot: &HoleSnapshot,
    ) -> Result<(), AppError> {
        Err(AppError::Network("connection refused".into()))
    }
}
