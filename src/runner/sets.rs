use crate::models::{Performed, SessionExercise, SetLine};

pub fn is_meaningful(value: &str) -> bool {
    !value.trim().is_empty()
}

fn opt_meaningful(value: Option<&str>) -> Option<&str> {
    value.filter(|v| is_meaningful(v))
}

/// Pick the performed value for a set-line: this set's recorded value first,
/// then the historical flat value, then the planned one.
fn resolve_value(primary: Option<&str>, secondary: Option<&str>, fallback: Option<&str>) -> String {
    opt_meaningful(primary)
        .or_else(|| opt_meaningful(secondary))
        .or_else(|| opt_meaningful(fallback))
        .unwrap_or("")
        .to_string()
}

/// Seed the editable set-lines from the prescription: explicit `set_details`,
/// else `sets` repetitions of the flat reps/load, else a single flat line,
/// else nothing.
pub fn build_sets(exercise: &SessionExercise) -> Vec<SetLine> {
    let Some(params) = exercise.strength() else { return Vec::new() };

    if let Some(details) = &params.set_details {
        return details.clone();
    }
    let reps = params.reps.clone().unwrap_or_default();
    let load = params.load.clone().unwrap_or_default();
    if let Some(sets) = params.sets.filter(|s| *s > 0) {
        return (0..sets).map(|_| SetLine::new(reps.clone(), load.clone())).collect();
    }
    if is_meaningful(&reps) || is_meaningful(&load) {
        return vec![SetLine::new(reps, load)];
    }
    Vec::new()
}

/// Index-wise merge of planned lines with last-performed details. The line
/// count follows the plan when it has one.
pub fn merge_set_details(planned: &[SetLine], performed: &[SetLine], fallback: &Performed) -> Vec<SetLine> {
    let target_len = if planned.is_empty() { performed.len() } else { planned.len() };
    let blank = SetLine::default();
    (0..target_len)
        .map(|i| {
            let p = planned.get(i).unwrap_or(&blank);
            let q = performed.get(i).unwrap_or(&blank);
            SetLine {
                reps: resolve_value(Some(&q.reps), fallback.reps.as_deref(), Some(&p.reps)),
                load: resolve_value(Some(&q.load), fallback.load.as_deref(), Some(&p.load)),
            }
        })
        .collect()
}

/// Set-lines after "load last performed": merged details when either side has
/// lines, a single flat-history line when only reps/load were recorded, the
/// untouched plan otherwise. Never empty.
pub fn last_performed_lines(exercise: &SessionExercise, performed: Option<&Performed>) -> Vec<SetLine> {
    let empty = Performed::default();
    let performed = performed.unwrap_or(&empty);
    let details = performed.set_details.as_deref().unwrap_or(&[]);
    let planned = build_sets(exercise);

    let mut lines = if !details.is_empty() || !planned.is_empty() {
        merge_set_details(&planned, details, performed)
    } else if opt_meaningful(performed.reps.as_deref()).is_some()
        || opt_meaningful(performed.load.as_deref()).is_some()
    {
        vec![SetLine::new(
            performed.reps.clone().unwrap_or_default(),
            performed.load.clone().unwrap_or_default(),
        )]
    } else {
        planned
    };

    if lines.is_empty() {
        lines.push(SetLine::default());
    }
    lines
}
