use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::models::{
    ExecutionCreate, ExecutionExercise, LastPerformance, PerformedSets, SessionExercise, SetLine,
    TrainingSession,
};

use super::biset;
use super::sets;
use super::timer::{RestTimer, parse_rest_seconds};

/// Status of one set-line during a run. "Resting" is not terminal: the
/// exercise only auto-advances once every line is `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetStatus {
    Pending,
    Resting,
    Done,
}

/// Ephemeral per-run state; created on start, torn down on completion.
#[derive(Debug, Clone)]
pub struct ActiveState {
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: i64,
    /// Cursor into the ordered exercise list. Only ever increases.
    pub exercise_index: usize,
    pub set_status: HashMap<i64, Vec<SetStatus>>,
    pub completed: HashSet<i64>,
}

/// Emitted once when the last exercise finishes; the caller submits the
/// payload to the backend.
#[derive(Debug)]
pub struct CompletedRun {
    pub payload: ExecutionCreate,
    pub elapsed_ms: i64,
}

/// The session runner: owns every piece of ephemeral run state and is the
/// only writer of it. All time-dependent transitions take `now` explicitly.
pub struct Runner {
    session: TrainingSession,
    last_by_exercise: HashMap<i64, LastPerformance>,
    set_lines: HashMap<i64, Vec<SetLine>>,
    active: Option<ActiveState>,
    rest: Option<RestTimer>,
    auto_advance_key: Option<i64>,
}

impl Runner {
    pub fn new(mut session: TrainingSession, last: Vec<LastPerformance>) -> Self {
        // Execution order is fixed up-front: (order, id) ascending.
        session.exercises.sort_by_key(|ex| (ex.order, ex.id));
        Self {
            session,
            last_by_exercise: last.into_iter().map(|l| (l.exercise_id, l)).collect(),
            set_lines: HashMap::new(),
            active: None,
            rest: None,
            auto_advance_key: None,
        }
    }

    pub fn session(&self) -> &TrainingSession {
        &self.session
    }

    pub fn active(&self) -> Option<&ActiveState> {
        self.active.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn rest_timer(&self) -> Option<&RestTimer> {
        self.rest.as_ref()
    }

    pub fn rest_running(&self) -> bool {
        self.rest.as_ref().is_some_and(|t| t.running)
    }

    pub fn current_exercise(&self) -> Option<&SessionExercise> {
        let active = self.active.as_ref()?;
        self.session.exercises.get(active.exercise_index)
    }

    pub fn exercise_by_id(&self, exercise_id: i64) -> Option<&SessionExercise> {
        self.session.exercises.iter().find(|ex| ex.id == exercise_id)
    }

    pub fn set_lines(&self, exercise_id: i64) -> &[SetLine] {
        self.set_lines.get(&exercise_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set_statuses(&self, exercise_id: i64) -> &[SetStatus] {
        self.active
            .as_ref()
            .and_then(|a| a.set_status.get(&exercise_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn last_performance(&self, exercise: &SessionExercise) -> Option<&LastPerformance> {
        self.last_by_exercise.get(&exercise.exercise.id)
    }

    pub fn has_last_performed(&self, exercise: &SessionExercise) -> bool {
        self.last_performance(exercise)
            .and_then(|l| l.performed.as_ref())
            .is_some_and(|p| p.has_data())
    }

    pub fn set_last_performances(&mut self, last: Vec<LastPerformance>) {
        self.last_by_exercise = last.into_iter().map(|l| (l.exercise_id, l)).collect();
    }

    /// Planned rest in seconds, zero when suppressed by biset position.
    pub fn rest_secs_for(&self, exercise: &SessionExercise) -> f64 {
        if !biset::should_apply_rest(&self.session, exercise) {
            return 0.0;
        }
        parse_rest_seconds(exercise.strength().and_then(|p| p.rest.as_deref()))
    }

    /// Start (or restart) the run. A session without exercises has nothing to
    /// run and stays idle.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        self.rest = None;
        self.auto_advance_key = None;
        self.set_lines.clear();

        if self.session.exercises.is_empty() {
            self.active = None;
            return false;
        }

        let mut set_status = HashMap::new();
        for ex in &self.session.exercises {
            if ex.is_endurance() {
                // Completed as a unit, no per-set tracking.
                set_status.insert(ex.id, Vec::new());
                self.set_lines.insert(ex.id, vec![SetLine::default()]);
            } else {
                let planned = sets::build_sets(ex);
                let lines = if planned.is_empty() { vec![SetLine::default()] } else { planned };
                set_status.insert(ex.id, vec![SetStatus::Pending; lines.len()]);
                self.set_lines.insert(ex.id, lines);
            }
        }

        self.active = Some(ActiveState {
            started_at: now,
            elapsed_ms: 0,
            exercise_index: 0,
            set_status,
            completed: HashSet::new(),
        });
        true
    }

    pub fn tick_elapsed(&mut self, now: DateTime<Utc>) {
        if let Some(active) = self.active.as_mut() {
            active.elapsed_ms = (now - active.started_at).num_milliseconds().max(0);
        }
    }

    /// Cycle one set: pending goes to resting (when a positive rest applies)
    /// or straight to done; anything else back to pending, cancelling a rest
    /// timer that targets this set.
    pub fn toggle_set(&mut self, exercise_id: i64, set_idx: usize, now: DateTime<Utc>) {
        let rest_secs = match self.exercise_by_id(exercise_id) {
            Some(ex) => self.rest_secs_for(ex),
            None => return,
        };
        let Some(active) = self.active.as_mut() else { return };
        let Some(slot) = active
            .set_status
            .get_mut(&exercise_id)
            .and_then(|arr| arr.get_mut(set_idx))
        else {
            return;
        };

        match *slot {
            SetStatus::Pending => {
                if rest_secs > 0.0 {
                    *slot = SetStatus::Resting;
                    self.rest = Some(RestTimer::arm(exercise_id, set_idx, rest_secs, now));
                } else {
                    *slot = SetStatus::Done;
                    if self.rest.as_ref().is_some_and(|t| t.matches(exercise_id, set_idx)) {
                        self.rest = None;
                    }
                }
            }
            SetStatus::Resting | SetStatus::Done => {
                *slot = SetStatus::Pending;
                if self.rest.as_ref().is_some_and(|t| t.matches(exercise_id, set_idx)) {
                    self.rest = None;
                }
            }
        }
    }

    /// Bulk-mark every set-line of a strength exercise done; when rest
    /// applies, the last line rests instead and the countdown is armed.
    pub fn complete_all_sets(&mut self, exercise_id: i64, now: DateTime<Utc>) {
        let (is_endurance, rest_secs) = match self.exercise_by_id(exercise_id) {
            Some(ex) => (ex.is_endurance(), self.rest_secs_for(ex)),
            None => return,
        };
        if is_endurance {
            return;
        }

        let line_count = self.set_lines.get(&exercise_id).map_or(0, Vec::len).max(1);
        let Some(active) = self.active.as_mut() else { return };
        let current_len = active.set_status.get(&exercise_id).map_or(0, Vec::len);
        let target = line_count.max(current_len).max(1);

        let mut arr = vec![SetStatus::Done; target];
        self.rest = None;
        if rest_secs > 0.0 {
            arr[target - 1] = SetStatus::Resting;
            self.rest = Some(RestTimer::arm(exercise_id, target - 1, rest_secs, now));
        }
        active.set_status.insert(exercise_id, arr);
    }

    /// Advance the rest countdown; on expiry the owning set flips to done and
    /// the timer stops. Repeated calls after expiry are no-ops.
    pub fn tick_rest(&mut self, now: DateTime<Utc>) {
        let expired = match self.rest.as_mut() {
            Some(timer) => {
                if timer.tick(now) {
                    Some((timer.exercise_id, timer.set_idx))
                } else {
                    None
                }
            }
            None => None,
        };
        let Some((exercise_id, set_idx)) = expired else { return };
        if let Some(slot) = self
            .active
            .as_mut()
            .and_then(|a| a.set_status.get_mut(&exercise_id))
            .and_then(|arr| arr.get_mut(set_idx))
        {
            if *slot == SetStatus::Resting {
                *slot = SetStatus::Done;
            }
        }
    }

    /// Self-healing invariant: a set of the current exercise left "resting"
    /// always has a matching running timer.
    pub fn ensure_rest_timer(&mut self, now: DateTime<Utc>) {
        let Some(active) = self.active.as_ref() else { return };
        let Some(exercise) = self.session.exercises.get(active.exercise_index) else { return };
        let Some(arr) = active.set_status.get(&exercise.id) else { return };
        let Some(resting_idx) = arr.iter().position(|s| *s == SetStatus::Resting) else { return };

        let rest_secs = self.rest_secs_for(exercise);
        if rest_secs <= 0.0 {
            return;
        }
        let exercise_id = exercise.id;
        if self
            .rest
            .as_ref()
            .is_some_and(|t| t.matches(exercise_id, resting_idx) && t.running)
        {
            return;
        }
        self.rest = Some(RestTimer::arm(exercise_id, resting_idx, rest_secs, now));
    }

    /// Advance past the current exercise. On the last one the run completes:
    /// state is torn down and the execution payload is handed to the caller.
    pub fn finish_exercise(&mut self, now: DateTime<Utc>) -> Option<CompletedRun> {
        let Some(active) = self.active.as_mut() else { return None };
        if let Some(current) = self.session.exercises.get(active.exercise_index) {
            active.completed.insert(current.id);
        }
        active.exercise_index += 1;
        self.rest = None;

        if active.exercise_index < self.session.exercises.len() {
            return None;
        }

        let elapsed_ms = (now - active.started_at).num_milliseconds().max(0);
        let payload = self.build_payload();
        self.active = None;
        Some(CompletedRun { payload, elapsed_ms })
    }

    /// Auto-advance: when every set-line of the current strength exercise is
    /// done, finish it exactly once. The guard key keeps recomputations from
    /// double-firing while the statuses stay terminal.
    pub fn poll_auto_advance(&mut self, now: DateTime<Utc>) -> Option<CompletedRun> {
        let Some(active) = self.active.as_ref() else {
            self.auto_advance_key = None;
            return None;
        };
        let Some(exercise) = self.session.exercises.get(active.exercise_index) else {
            return None;
        };
        if exercise.is_endurance() {
            return None;
        }
        let arr = active.set_status.get(&exercise.id).map(Vec::as_slice).unwrap_or(&[]);
        if arr.is_empty() {
            return None;
        }

        let unfinished = arr
            .iter()
            .any(|s| matches!(s, SetStatus::Pending | SetStatus::Resting));
        let key = exercise.id;
        if unfinished {
            if self.auto_advance_key == Some(key) {
                self.auto_advance_key = None;
            }
            return None;
        }
        if self.auto_advance_key == Some(key) {
            return None;
        }
        self.auto_advance_key = Some(key);
        self.finish_exercise(now)
    }

    /// Overwrite the exercise's set-lines with the last recorded performance,
    /// merged against the plan. Statuses keep their progress, truncated or
    /// padded with pending to the new line count.
    pub fn apply_last_performed(&mut self, exercise_id: i64) {
        let lines = {
            let Some(exercise) = self.exercise_by_id(exercise_id) else { return };
            let performed = self
                .last_by_exercise
                .get(&exercise.exercise.id)
                .and_then(|l| l.performed.as_ref());
            sets::last_performed_lines(exercise, performed)
        };

        if let Some(active) = self.active.as_mut() {
            let current = active.set_status.get(&exercise_id).cloned().unwrap_or_default();
            let next = (0..lines.len())
                .map(|i| current.get(i).copied().unwrap_or(SetStatus::Pending))
                .collect();
            active.set_status.insert(exercise_id, next);
        }
        self.set_lines.insert(exercise_id, lines);
    }

    /// Edit one set-line in place; out-of-range indexes are ignored.
    pub fn edit_set_line(
        &mut self,
        exercise_id: i64,
        set_idx: usize,
        reps: Option<&str>,
        load: Option<&str>,
    ) {
        let Some(lines) = self.set_lines.get_mut(&exercise_id) else { return };
        let Some(line) = lines.get_mut(set_idx) else { return };
        if let Some(reps) = reps {
            line.reps = reps.to_string();
        }
        if let Some(load) = load {
            line.load = load.to_string();
        }
    }

    fn build_payload(&self) -> ExecutionCreate {
        let exercises = self
            .session
            .exercises
            .iter()
            .map(|ex| {
                if ex.is_endurance() {
                    ExecutionExercise { session_exercise_id: ex.id, performed: None }
                } else {
                    let set_details = self
                        .set_lines
                        .get(&ex.id)
                        .cloned()
                        .unwrap_or_else(|| sets::build_sets(ex));
                    ExecutionExercise {
                        session_exercise_id: ex.id,
                        performed: Some(PerformedSets { set_details }),
                    }
                }
            })
            .collect();

        ExecutionCreate {
            student_id: self.session.student_id,
            session_id: self.session.id,
            status: "CONCLUIDO",
            rpe: None,
            comment: None,
            exercises,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Performed, StrengthParams};
    use crate::runner::testutil::{
        endurance_exercise, session_of, strength_exercise, strength_exercise_with,
    };
    use chrono::TimeDelta;

    fn t0() -> DateTime<Utc> {
        "2025-03-01T10:00:00Z".parse().unwrap()
    }

    fn runner_of(exercises: Vec<SessionExercise>) -> Runner {
        Runner::new(session_of(exercises), Vec::new())
    }

    fn with_rest(rest: &str) -> impl Fn(&mut StrengthParams) + '_ {
        move |p| {
            p.sets = Some(2);
            p.reps = Some("10".into());
            p.rest = Some(rest.into());
        }
    }

    #[test]
    fn empty_session_never_starts() {
        let mut runner = runner_of(Vec::new());
        assert!(!runner.start(t0()));
        assert!(!runner.is_running());
    }

    #[test]
    fn start_seeds_statuses_per_modality() {
        let mut runner = runner_of(vec![
            strength_exercise_with(1, 1, |p| {
                p.sets = Some(3);
                p.reps = Some("10".into());
            }),
            endurance_exercise(2, 2),
            strength_exercise(3, 3, None), // no sets info: one blank line
        ]);
        assert!(runner.start(t0()));
        assert_eq!(runner.set_statuses(1), [SetStatus::Pending; 3]);
        assert!(runner.set_statuses(2).is_empty());
        assert_eq!(runner.set_statuses(3), [SetStatus::Pending]);
        assert_eq!(runner.set_lines(3).len(), 1);
    }

    #[test]
    fn toggle_cycles_through_rest_when_it_applies() {
        let mut runner = runner_of(vec![strength_exercise_with(1, 1, with_rest("60s"))]);
        runner.start(t0());

        runner.toggle_set(1, 0, t0());
        assert_eq!(runner.set_statuses(1)[0], SetStatus::Resting);
        assert!(runner.rest_running());

        // Toggling back cancels the matching timer.
        runner.toggle_set(1, 0, t0());
        assert_eq!(runner.set_statuses(1)[0], SetStatus::Pending);
        assert!(runner.rest_timer().is_none());
    }

    #[test]
    fn toggle_goes_straight_to_done_without_rest() {
        let mut runner = runner_of(vec![strength_exercise_with(1, 1, |p| {
            p.sets = Some(2);
            p.rest = Some("livre".into()); // unparseable, so zero rest
        })]);
        runner.start(t0());
        runner.toggle_set(1, 0, t0());
        assert_eq!(runner.set_statuses(1)[0], SetStatus::Done);
        assert!(runner.rest_timer().is_none());
    }

    #[test]
    fn rest_expiry_flips_the_owning_set_idempotently() {
        let mut runner = runner_of(vec![strength_exercise_with(1, 1, with_rest("60"))]);
        runner.start(t0());
        runner.toggle_set(1, 0, t0());

        runner.tick_rest(t0() + TimeDelta::seconds(30));
        assert_eq!(runner.set_statuses(1)[0], SetStatus::Resting);

        runner.tick_rest(t0() + TimeDelta::seconds(61));
        assert_eq!(runner.set_statuses(1)[0], SetStatus::Done);
        assert!(!runner.rest_running());

        // Later ticks keep the state settled.
        runner.tick_rest(t0() + TimeDelta::seconds(90));
        assert_eq!(runner.set_statuses(1)[0], SetStatus::Done);
    }

    #[test]
    fn complete_all_rests_on_the_last_line_only() {
        let mut runner = runner_of(vec![
            strength_exercise_with(1, 1, with_rest("45")),
            strength_exercise(2, 2, None),
        ]);
        runner.start(t0());
        runner.complete_all_sets(1, t0());

        assert_eq!(
            runner.set_statuses(1),
            [SetStatus::Done, SetStatus::Resting]
        );
        let timer = runner.rest_timer().unwrap();
        assert!(timer.matches(1, 1));
        assert_eq!(timer.target_ms, 45_000);
    }

    #[test]
    fn complete_all_ignores_endurance() {
        let mut runner = runner_of(vec![endurance_exercise(1, 1)]);
        runner.start(t0());
        runner.complete_all_sets(1, t0());
        assert!(runner.set_statuses(1).is_empty());
        assert!(runner.rest_timer().is_none());
    }

    #[test]
    fn ensure_rest_timer_rearms_an_orphaned_resting_set() {
        let mut runner = runner_of(vec![strength_exercise_with(1, 1, with_rest("60"))]);
        runner.start(t0());
        runner.toggle_set(1, 0, t0());
        // Simulate a lost timer.
        runner.rest = None;
        runner.ensure_rest_timer(t0() + TimeDelta::seconds(5));
        let timer = runner.rest_timer().unwrap();
        assert!(timer.running);
        assert!(timer.matches(1, 0));
    }

    #[test]
    fn cursor_only_moves_forward_and_completion_tears_down() {
        let mut runner = runner_of(vec![
            strength_exercise(1, 1, None),
            strength_exercise(2, 2, None),
        ]);
        runner.start(t0());
        assert_eq!(runner.active().unwrap().exercise_index, 0);

        assert!(runner.finish_exercise(t0() + TimeDelta::seconds(10)).is_none());
        let active = runner.active().unwrap();
        assert_eq!(active.exercise_index, 1);
        assert!(active.completed.contains(&1));

        let done = runner.finish_exercise(t0() + TimeDelta::seconds(90)).unwrap();
        assert!(!runner.is_running());
        assert_eq!(done.elapsed_ms, 90_000);
        assert_eq!(done.payload.session_id, 99);
        assert_eq!(done.payload.status, "CONCLUIDO");
        assert_eq!(done.payload.exercises.len(), 2);
    }

    #[test]
    fn payload_sends_null_performed_for_endurance() {
        let mut runner = runner_of(vec![
            strength_exercise_with(1, 1, |p| p.sets = Some(1)),
            endurance_exercise(2, 2),
        ]);
        runner.start(t0());
        runner.finish_exercise(t0());
        let done = runner.finish_exercise(t0()).unwrap();
        assert!(done.payload.exercises[0].performed.is_some());
        assert!(done.payload.exercises[1].performed.is_none());
    }

    #[test]
    fn auto_advance_fires_once_per_exercise() {
        let mut runner = runner_of(vec![
            strength_exercise_with(1, 1, |p| p.sets = Some(2)),
            strength_exercise_with(2, 2, |p| p.sets = Some(1)),
        ]);
        runner.start(t0());

        runner.toggle_set(1, 0, t0());
        assert!(runner.poll_auto_advance(t0()).is_none());

        runner.toggle_set(1, 1, t0());
        assert!(runner.poll_auto_advance(t0()).is_none()); // advanced to exercise 2
        assert_eq!(runner.active().unwrap().exercise_index, 1);

        // Re-polling with unchanged state must not advance again.
        // (Exercise 2 is untouched, nothing fires.)
        assert!(runner.poll_auto_advance(t0()).is_none());
        assert_eq!(runner.active().unwrap().exercise_index, 1);

        runner.toggle_set(2, 0, t0());
        let done = runner.poll_auto_advance(t0());
        assert!(done.is_some());
        assert!(runner.poll_auto_advance(t0()).is_none());
    }

    #[test]
    fn auto_advance_treats_resting_as_unfinished() {
        let mut runner = runner_of(vec![strength_exercise_with(1, 1, with_rest("60"))]);
        runner.start(t0());
        runner.complete_all_sets(1, t0());
        assert!(runner.poll_auto_advance(t0()).is_none());
        assert!(runner.is_running());
    }

    #[test]
    fn auto_advance_skips_endurance() {
        let mut runner = runner_of(vec![endurance_exercise(1, 1)]);
        runner.start(t0());
        assert!(runner.poll_auto_advance(t0()).is_none());
        assert!(runner.is_running());
    }

    #[test]
    fn apply_last_performed_merges_and_keeps_progress() {
        let session = session_of(vec![strength_exercise_with(1, 1, |p| {
            p.set_details = Some(vec![SetLine::new("10", ""), SetLine::new("8", "")]);
        })]);
        let last = vec![LastPerformance {
            exercise_id: 101, // testutil exercise-definition id = 100 + id
            performed: Some(Performed {
                reps: None,
                load: Some("20kg".into()),
                set_details: Some(vec![SetLine::new("10", "22kg")]),
            }),
        }];
        let mut runner = Runner::new(session, last);
        runner.start(t0());
        runner.toggle_set(1, 0, t0());

        runner.apply_last_performed(1);
        assert_eq!(runner.set_lines(1)[0], SetLine::new("10", "22kg"));
        assert_eq!(runner.set_lines(1)[1], SetLine::new("8", "20kg"));
        // First set keeps the progress it already had.
        assert_eq!(runner.set_statuses(1)[0], SetStatus::Done);
        assert_eq!(runner.set_statuses(1)[1], SetStatus::Pending);
    }

    #[test]
    fn edit_set_line_updates_fields_in_place() {
        let mut runner = runner_of(vec![strength_exercise_with(1, 1, |p| p.sets = Some(1))]);
        runner.start(t0());
        runner.edit_set_line(1, 0, Some("12"), None);
        runner.edit_set_line(1, 0, None, Some("35kg"));
        assert_eq!(runner.set_lines(1)[0], SetLine::new("12", "35kg"));
        runner.edit_set_line(1, 5, Some("9"), None); // out of range, ignored
        assert_eq!(runner.set_lines(1).len(), 1);
    }

    /// The end-to-end biset scenario: two strength exercises share group "A";
    /// the first never rests, the second arms 60s on its last set and the
    /// expiry auto-advances into completion.
    #[test]
    fn biset_run_completes_after_final_rest() {
        let mut runner = runner_of(vec![
            strength_exercise_with(1, 1, |p| {
                p.sets = Some(2);
                p.rest = Some("60s".into());
                p.biset_group = Some("A".into());
            }),
            strength_exercise_with(2, 2, |p| {
                p.sets = Some(2);
                p.rest = Some("60s".into());
                p.biset_group = Some("a ".into());
            }),
        ]);
        runner.start(t0());

        // First member: rest suppressed, sets go straight to done.
        runner.complete_all_sets(1, t0());
        assert_eq!(runner.set_statuses(1), [SetStatus::Done, SetStatus::Done]);
        assert!(runner.rest_timer().is_none());
        assert!(runner.poll_auto_advance(t0()).is_none());
        assert_eq!(runner.active().unwrap().exercise_index, 1);

        // Last member: completing arms the 60s countdown on its last set.
        runner.complete_all_sets(2, t0());
        assert_eq!(runner.set_statuses(2), [SetStatus::Done, SetStatus::Resting]);
        assert!(runner.rest_running());
        assert!(runner.poll_auto_advance(t0()).is_none());

        // Before expiry nothing moves.
        runner.tick_rest(t0() + TimeDelta::seconds(59));
        assert!(runner.poll_auto_advance(t0() + TimeDelta::seconds(59)).is_none());
        assert!(runner.is_running());

        // Expiry flips the set, and the next poll completes the session.
        runner.tick_rest(t0() + TimeDelta::seconds(60));
        assert_eq!(runner.set_statuses(2), [SetStatus::Done, SetStatus::Done]);
        let done = runner
            .poll_auto_advance(t0() + TimeDelta::seconds(60))
            .expect("session completes");
        assert_eq!(done.payload.exercises.len(), 2);
        assert!(!runner.is_running());

        // And only once.
        assert!(runner.poll_auto_advance(t0() + TimeDelta::seconds(61)).is_none());
    }
}
