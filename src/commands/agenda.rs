use anyhow::Result;
use colored::Colorize;
use itertools::Itertools;

use crate::api::Api;
use crate::models::{SessionExercise, TrainingSession};
use crate::runner::biset::{self, BisetMeta};
use crate::types::{MODALITY_LABELS, MODALITY_ORDER};

pub async fn handle(api: &Api) -> Result<()> {
    let agenda = match api.fetch_agenda().await {
        Ok(agenda) => agenda,
        Err(err) => {
            println!("{} could not load your agenda: {err:#}", "error:".red().bold());
            return Ok(());
        }
    };

    if agenda.is_empty() {
        println!("{} no sessions assigned to you", "note:".yellow().bold());
        return Ok(());
    }

    let by_modality = agenda
        .iter()
        .sorted_by_key(|s| (s.sequence.unwrap_or(0), s.id))
        .into_group_map_by(|s| s.modality());

    for modality in MODALITY_ORDER {
        let Some(sessions) = by_modality.get(&modality) else { continue };
        println!(
            "{} ({} sessions)",
            MODALITY_LABELS[&modality].cyan().bold(),
            sessions.len()
        );
        for session in sessions {
            print_session(session);
        }
        println!();
    }

    Ok(())
}

pub fn print_session(session: &TrainingSession) {
    let sequence = session
        .sequence
        .map(|s| s.to_string())
        .unwrap_or_else(|| "?".to_string());
    println!(
        "  {} {} {}",
        format!("Treino {sequence}").yellow(),
        "•".dimmed(),
        session.name.bold()
    );
    if let Some(notes) = session.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        println!("    {}", notes.dimmed());
    }

    let meta = biset::biset_meta_by_exercise(session);
    for exercise in biset::ordered_exercises(session) {
        print_exercise(session, exercise, meta.get(&exercise.id));
    }
    if session.exercises.is_empty() {
        println!("    {}", "(no exercises in this session)".dimmed());
    }
}

fn print_exercise(session: &TrainingSession, ex: &SessionExercise, meta: Option<&BisetMeta>) {
    let badge = meta
        .map(|m| format!(" [{}{}/{}]", m.group, m.position, m.total).blue().to_string())
        .unwrap_or_default();
    println!(
        "    {} {}{} {}",
        format!("{}.", ex.order).yellow(),
        ex.exercise.name.bold(),
        badge,
        ex.exercise.modality.to_string().dimmed()
    );

    let summary = summary_parts(session, ex).join(" - ");
    if !summary.is_empty() {
        println!("       {summary}");
    }

    if let Some(params) = ex.strength() {
        if let Some(details) = params.set_details.as_deref().filter(|d| !d.is_empty()) {
            for (idx, line) in details.iter().enumerate() {
                let reps = if line.reps.is_empty() { "-" } else { &line.reps };
                let load = if line.load.is_empty() { "-" } else { &line.load };
                println!("       {} {reps} reps - {load} load", format!("#{}", idx + 1).dimmed());
            }
        }
        for (label, kind, step) in [
            ("load", &params.load_progression_type, &params.load_progression_step),
            ("reps", &params.reps_progression_type, &params.reps_progression_step),
        ] {
            if kind.is_some() || step.is_some() {
                println!(
                    "       {label} trend: {} {}",
                    kind.as_deref().unwrap_or("none"),
                    step.as_deref().unwrap_or("")
                );
            }
        }
    }

    let notes = ex.params.notes().or(ex.notes.as_deref());
    if let Some(notes) = notes.filter(|n| !n.trim().is_empty()) {
        println!("       {}", format!("notes: {notes}").dimmed());
    }
}

/// One-line prescription summary, matching what the coaching app shows on
/// its session cards.
pub fn summary_parts(session: &TrainingSession, ex: &SessionExercise) -> Vec<String> {
    let mut parts = Vec::new();
    match &ex.params {
        crate::models::ExerciseParams::Endurance(p) => {
            if let Some(v) = &p.duration_min {
                parts.push(format!("{v} min"));
            }
            if let Some(v) = &p.distance_km {
                parts.push(format!("{v} km"));
            }
            if let Some(v) = &p.pace_target {
                parts.push(format!("pace {v}"));
            }
            if let Some(v) = &p.intensity_zone {
                parts.push(format!("zone {v}"));
            }
            if let Some(v) = &p.terrain {
                parts.push(format!("terrain {v}"));
            }
        }
        crate::models::ExerciseParams::Strength(p) => {
            if p.sets.is_some() || p.reps.is_some() {
                parts.push(format!(
                    "{}x{}",
                    p.sets.map(|s| s.to_string()).unwrap_or_else(|| "?".into()),
                    p.reps.as_deref().unwrap_or("?")
                ));
            }
            if let Some(load) = &p.load {
                parts.push(load.clone());
            }
            if let Some(rest) = &p.rest {
                if biset::should_apply_rest(session, ex) {
                    parts.push(format!("rest {rest}"));
                }
            }
            if let Some(effort) = &p.effort {
                parts.push(effort.clone());
            }
            if let Some(tempo) = &p.tempo {
                parts.push(format!("tempo {tempo}"));
            }
            if let Some(block) = &p.block {
                parts.push(format!("block {block}"));
            }
        }
    }
    parts
}
