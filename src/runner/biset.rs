use std::collections::BTreeMap;

use itertools::Itertools;

use crate::models::{SessionExercise, TrainingSession};

/// Biset metadata for one member of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BisetMeta {
    pub group: String,
    /// 1-based position within the group.
    pub position: usize,
    pub total: usize,
    pub is_last: bool,
    pub next_exercise_id: Option<i64>,
}

/// Normalized group label; empty means "not part of a biset".
pub fn exercise_group(exercise: &SessionExercise) -> String {
    exercise
        .strength()
        .and_then(|p| p.biset_group.as_deref())
        .unwrap_or("")
        .trim()
        .to_uppercase()
}

/// Exercises of a session in execution order: `(order, id)` ascending.
/// Ties in `order` are broken by `id` so the sequence is total.
pub fn ordered_exercises(session: &TrainingSession) -> Vec<&SessionExercise> {
    session
        .exercises
        .iter()
        .sorted_by_key(|ex| (ex.order, ex.id))
        .collect()
}

/// Recomputed from scratch whenever the exercise list changes; holds no state.
pub fn biset_meta_by_exercise(session: &TrainingSession) -> BTreeMap<i64, BisetMeta> {
    let grouped = ordered_exercises(session)
        .into_iter()
        .filter(|ex| !exercise_group(ex).is_empty())
        .into_group_map_by(|ex| exercise_group(ex));

    let mut map = BTreeMap::new();
    for (group, members) in grouped {
        let total = members.len();
        for (idx, exercise) in members.iter().enumerate() {
            map.insert(
                exercise.id,
                BisetMeta {
                    group: group.clone(),
                    position: idx + 1,
                    total,
                    is_last: idx + 1 == total,
                    next_exercise_id: members.get(idx + 1).map(|ex| ex.id),
                },
            );
        }
    }
    map
}

/// Whether completing this exercise's sets triggers a rest period.
///
/// Rest is suppressed on every biset member except the chronologically last:
/// false iff another exercise shares the group with a strictly later
/// `(order, id)`.
pub fn should_apply_rest(session: &TrainingSession, exercise: &SessionExercise) -> bool {
    let group = exercise_group(exercise);
    if group.is_empty() || session.exercises.is_empty() {
        return true;
    }
    !session.exercises.iter().any(|other| {
        other.id != exercise.id
            && exercise_group(other) == group
            && (other.order, other.id) > (exercise.order, exercise.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::testutil::{session_of, strength_exercise};

    #[test]
    fn ordering_breaks_ties_by_id() {
        let session = session_of(vec![
            strength_exercise(30, 2, None),
            strength_exercise(10, 1, None),
            strength_exercise(20, 1, None),
        ]);
        let ids: Vec<i64> = ordered_exercises(&session).iter().map(|ex| ex.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn group_labels_are_trimmed_and_uppercased() {
        let session = session_of(vec![
            strength_exercise(1, 1, Some(" a ")),
            strength_exercise(2, 2, Some("A")),
        ]);
        let meta = biset_meta_by_exercise(&session);
        assert_eq!(meta[&1].group, "A");
        assert_eq!(meta[&1].total, 2);
        assert_eq!(meta[&2].position, 2);
    }

    #[test]
    fn exactly_one_member_is_last_and_rests() {
        let session = session_of(vec![
            strength_exercise(1, 1, Some("A")),
            strength_exercise(2, 2, Some("A")),
            strength_exercise(3, 2, Some("A")), // same order as id 2, later id
            strength_exercise(4, 3, None),
        ]);
        let meta = biset_meta_by_exercise(&session);
        let last_ids: Vec<i64> = meta
            .iter()
            .filter(|(_, m)| m.is_last)
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(last_ids, vec![3]);

        for ex in &session.exercises {
            let expected = ex.id == 3 || ex.id == 4;
            assert_eq!(should_apply_rest(&session, ex), expected, "exercise {}", ex.id);
        }
    }

    #[test]
    fn ungrouped_exercises_always_rest_and_carry_no_meta() {
        let session = session_of(vec![
            strength_exercise(1, 1, None),
            strength_exercise(2, 2, Some("")),
        ]);
        assert!(biset_meta_by_exercise(&session).is_empty());
        assert!(should_apply_rest(&session, &session.exercises[0]));
        assert!(should_apply_rest(&session, &session.exercises[1]));
    }

    #[test]
    fn next_member_is_linked_in_group_order() {
        let session = session_of(vec![
            strength_exercise(5, 2, Some("B")),
            strength_exercise(4, 1, Some("B")),
        ]);
        let meta = biset_meta_by_exercise(&session);
        assert_eq!(meta[&4].next_exercise_id, Some(5));
        assert_eq!(meta[&5].next_exercise_id, None);
    }
}
