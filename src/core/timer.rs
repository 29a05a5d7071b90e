//! Start/stop timer state machine.
//!
//! The phase lives in an explicit tagged enum rather than ambient state and
//! is persisted as YAML between CLI invocations, so `timer start` in one
//! process and `timer stop` in another operate on the same timer.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::duration::compute_duration_hours;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum TimerState {
    #[default]
    Idle,
    Running {
        start: DateTime<Utc>,
    },
    Stopped {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_hours: f64,
    },
}

impl TimerState {
    /// Idle -> Running. Starting an already running (or stopped-but-unlogged)
    /// timer is an error so a pending session cannot be lost by accident.
    pub fn start(self, now: DateTime<Utc>) -> AppResult<TimerState> {
        match self {
            TimerState::Idle => Ok(TimerState::Running { start: now }),
            TimerState::Running { .. } => {
                Err(AppError::Timer("timer is already running".to_string()))
            }
            TimerState::Stopped { .. } => Err(AppError::Timer(
                "a stopped timer is waiting to be logged or discarded".to_string(),
            )),
        }
    }

    /// Running -> Stopped, deriving the duration.
    pub fn stop(self, now: DateTime<Utc>) -> AppResult<TimerState> {
        match self {
            TimerState::Running { start } => Ok(TimerState::Stopped {
                start,
                end: now,
                duration_hours: compute_duration_hours(start.naive_utc(), now.naive_utc()),
            }),
            _ => Err(AppError::Timer("timer is not running".to_string())),
        }
    }

    /// Any state -> Idle, dropping start/end/duration.
    pub fn reset(self) -> TimerState {
        TimerState::Idle
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running { .. })
    }

    /// Hours elapsed so far while running; None otherwise.
    pub fn elapsed_hours(&self, now: DateTime<Utc>) -> Option<f64> {
        match self {
            TimerState::Running { start } => {
                Some((now - *start).num_seconds() as f64 / 3600.0)
            }
            _ => None,
        }
    }
}

/// YAML persistence of the timer state next to the config file.
pub struct TimerFile {
    path: PathBuf,
}

impl TimerFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Missing file means Idle; a corrupt file is an error rather than a
    /// silent reset, since it may hold a running timer's start point.
    pub fn load(&self) -> AppResult<TimerState> {
        if !self.path.exists() {
            return Ok(TimerState::Idle);
        }
        let content = fs::read_to_string(&self.path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Timer(format!("corrupt timer state file: {e}")))
    }

    pub fn save(&self, state: &TimerState) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(state)
            .map_err(|e| AppError::Timer(format!("cannot serialize timer state: {e}")))?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, 0).unwrap()
    }

    #[test]
    fn full_cycle_idle_running_stopped_idle() {
        let state = TimerState::Idle.start(at(9, 0)).unwrap();
        assert!(state.is_running());

        let state = state.stop(at(10, 30)).unwrap();
        match &state {
            TimerState::Stopped { duration_hours, .. } => assert_eq!(*duration_hours, 1.5),
            other => panic!("expected Stopped, got {other:?}"),
        }

        assert_eq!(state.reset(), TimerState::Idle);
    }

    #[test]
    fn double_start_is_rejected() {
        let running = TimerState::Idle.start(at(9, 0)).unwrap();
        assert!(running.start(at(9, 5)).is_err());
    }

    #[test]
    fn stop_requires_running() {
        assert!(TimerState::Idle.stop(at(9, 0)).is_err());
        let stopped = TimerState::Idle
            .start(at(9, 0))
            .unwrap()
            .stop(at(10, 0))
            .unwrap();
        assert!(stopped.stop(at(11, 0)).is_err());
    }

    #[test]
    fn elapsed_only_while_running() {
        let running = TimerState::Idle.start(at(9, 0)).unwrap();
        assert_eq!(running.elapsed_hours(at(10, 30)), Some(1.5));
        assert_eq!(TimerState::Idle.elapsed_hours(at(10, 30)), None);
    }

    #[test]
    fn state_survives_a_yaml_round_trip() {
        let dir = std::env::temp_dir().join("focuslog_timer_state_test");
        std::fs::create_dir_all(&dir).unwrap();
        let file = TimerFile::new(&dir.join("timer.yml"));

        let state = TimerState::Idle.start(at(9, 0)).unwrap();
        file.save(&state).unwrap();
        assert_eq!(file.load().unwrap(), state);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_loads_as_idle() {
        let file = TimerFile::new(Path::new("/nonexistent/focuslog/timer.yml"));
        assert_eq!(file.load().unwrap(), TimerState::Idle);
    }
}
