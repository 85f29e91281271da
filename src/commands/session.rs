use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::Api;
use crate::cli::SessionCmd;
use crate::commands::agenda;
use crate::models::TrainingSession;
use crate::runner::biset;
use crate::runner::{CompletedRun, Runner, SetStatus};
use crate::utils::{format_countdown, format_elapsed};

pub async fn handle(cmd: SessionCmd, api: &Api) -> Result<()> {
    match cmd {
        SessionCmd::Run(args) => run(api, args.session.as_deref()).await,
        SessionCmd::Show { session } => show(api, session.as_deref()).await,
    }
}

async fn show(api: &Api, wanted: Option<&str>) -> Result<()> {
    let agenda = match api.fetch_agenda().await {
        Ok(agenda) => agenda,
        Err(err) => {
            println!("{} could not load your agenda: {err:#}", "error:".red().bold());
            return Ok(());
        }
    };
    match select_session(agenda, wanted) {
        Some(session) => agenda::print_session(&session),
        None => println!("{} no matching session", "error:".red().bold()),
    }
    Ok(())
}

/// Pick a session by sequence number first, then by id; with no argument the
/// lowest (sequence, id) is the suggested one.
fn select_session(agenda: Vec<TrainingSession>, wanted: Option<&str>) -> Option<TrainingSession> {
    let mut agenda = agenda;
    agenda.sort_by_key(|s| (s.sequence.unwrap_or(0), s.id));

    let Some(wanted) = wanted else { return agenda.into_iter().next() };
    let number: i64 = wanted.trim().parse().ok()?;

    if let Some(pos) = agenda.iter().position(|s| s.sequence == Some(number)) {
        return Some(agenda.swap_remove(pos));
    }
    if let Some(pos) = agenda.iter().position(|s| s.id == number) {
        return Some(agenda.swap_remove(pos));
    }
    None
}

async fn run(api: &Api, wanted: Option<&str>) -> Result<()> {
    let agenda = match api.fetch_agenda().await {
        Ok(agenda) => agenda,
        Err(err) => {
            println!("{} could not load your agenda: {err:#}", "error:".red().bold());
            return Ok(());
        }
    };
    // A missing history never blocks the run, prefill is just unavailable.
    let last = api.fetch_last_performed().await.unwrap_or_default();

    let Some(session) = select_session(agenda, wanted) else {
        println!("{} no matching session to run", "error:".red().bold());
        return Ok(());
    };

    let mut runner = Runner::new(session, last);
    if !runner.start(Utc::now()) {
        println!("{} this session has no exercises, nothing to run", "note:".yellow().bold());
        return Ok(());
    }

    println!(
        "{} running `{}` ({} exercises)",
        "ok:".green().bold(),
        runner.session().name.bold(),
        runner.session().exercises.len()
    );
    print_help();
    print_card(&runner);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut elapsed_tick = tokio::time::interval(Duration::from_secs(1));
    let mut rest_tick = tokio::time::interval(Duration::from_millis(200));

    while runner.is_running() {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Flow::Quit = handle_command(&mut runner, line.trim(), api).await {
                    println!("{} session abandoned, nothing was recorded", "note:".yellow().bold());
                    break;
                }
            }
            // Elapsed time only advances while the session runs.
            _ = elapsed_tick.tick() => {
                runner.tick_elapsed(Utc::now());
            }
            // Sub-second countdown only while a rest is live; expiry is
            // wall-clock based, so missed ticks cannot stall the run.
            _ = rest_tick.tick(), if runner.rest_running() => {
                runner.tick_rest(Utc::now());
                if !runner.rest_running() {
                    println!("{} rest finished", "ok:".green().bold());
                    if let Some(done) = runner.poll_auto_advance(Utc::now()) {
                        submit(api, &mut runner, done).await;
                    } else if runner.is_running() {
                        print_card(&runner);
                    }
                }
            }
        }
    }

    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

async fn handle_command(runner: &mut Runner, line: &str, api: &Api) -> Flow {
    let now = Utc::now();
    runner.tick_elapsed(now);
    let parts: Vec<&str> = line.split_whitespace().collect();
    let current_id = runner.current_exercise().map(|ex| ex.id);

    match parts.as_slice() {
        [] | ["s"] => {}
        ["q"] => return Flow::Quit,
        ["h"] | ["?"] => {
            print_help();
            return Flow::Continue;
        }
        ["t", idx] => {
            if let (Some(id), Ok(idx)) = (current_id, idx.parse::<usize>()) {
                if idx == 0 {
                    println!("{} sets are numbered from 1", "error:".red().bold());
                } else {
                    runner.toggle_set(id, idx - 1, now);
                }
            } else {
                println!("{} usage: t <set>", "error:".red().bold());
            }
        }
        ["e", idx, reps, rest @ ..] => {
            if let (Some(id), Ok(idx)) = (current_id, idx.parse::<usize>()) {
                if idx == 0 {
                    println!("{} sets are numbered from 1", "error:".red().bold());
                } else {
                    let load = (!rest.is_empty()).then(|| rest.join(" "));
                    runner.edit_set_line(id, idx - 1, Some(reps), load.as_deref());
                }
            } else {
                println!("{} usage: e <set> <reps> [load]", "error:".red().bold());
            }
        }
        ["a"] => {
            if let Some(id) = current_id {
                runner.complete_all_sets(id, now);
            }
        }
        ["l"] => {
            if let Some(id) = current_id {
                let available = runner
                    .exercise_by_id(id)
                    .is_some_and(|ex| runner.has_last_performed(ex));
                if available {
                    runner.apply_last_performed(id);
                    println!("{} loaded your last recorded performance", "ok:".green().bold());
                } else {
                    println!(
                        "{} no recorded performance for this exercise",
                        "note:".yellow().bold()
                    );
                }
            }
        }
        ["f"] => {
            if let Some(done) = runner.finish_exercise(now) {
                submit(api, runner, done).await;
                return Flow::Continue;
            }
        }
        _ => {
            println!("{} unknown command, `h` for help", "error:".red().bold());
            return Flow::Continue;
        }
    }

    runner.ensure_rest_timer(now);
    if let Some(done) = runner.poll_auto_advance(now) {
        submit(api, runner, done).await;
    } else if runner.is_running() {
        print_card(runner);
    }
    Flow::Continue
}

/// Submit the finished run. The session is already complete locally; a
/// failure is surfaced but never rolls that back, and the last-performed
/// cache is refreshed either way.
async fn submit(api: &Api, runner: &mut Runner, done: CompletedRun) {
    println!(
        "{} session `{}` completed in {}",
        "ok:".green().bold(),
        runner.session().name.bold(),
        format_elapsed(done.elapsed_ms)
    );
    if let Err(err) = api.submit_execution(&done.payload).await {
        println!(
            "{} could not record the execution for your coach: {err:#}",
            "error:".red().bold()
        );
    }
    let last = api.fetch_last_performed().await.unwrap_or_default();
    runner.set_last_performances(last);
}

fn print_help() {
    println!("{}", "Commands:".cyan().bold());
    println!(
        "  {} toggle a set            {} complete all sets",
        "t <set>".green(),
        "a".green()
    );
    println!(
        "  {} edit a set line         {} load last performed",
        "e <set> <reps> [load]".green(),
        "l".green()
    );
    println!(
        "  {} finish exercise         {} redraw status",
        "f".green(),
        "s".green()
    );
    println!(
        "  {} help                    {} quit without recording",
        "h".green(),
        "q".green()
    );
}

fn print_card(runner: &Runner) {
    let Some(active) = runner.active() else { return };
    let session = runner.session();
    let Some(exercise) = runner.current_exercise() else { return };

    let meta_map = biset::biset_meta_by_exercise(session);
    let meta = meta_map.get(&exercise.id);

    println!();
    println!(
        "{} {}   {} {}",
        "Tempo:".cyan().bold(),
        format_elapsed(active.elapsed_ms),
        "Descanso:".cyan().bold(),
        rest_line(runner)
    );
    println!(
        "{} {} {} ({}/{})",
        format!("{}.", exercise.order).yellow(),
        exercise.exercise.name.bold(),
        exercise.exercise.modality.to_string().dimmed(),
        active.exercise_index + 1,
        session.exercises.len()
    );
    if let Some(meta) = meta {
        let next = meta
            .next_exercise_id
            .and_then(|id| runner.exercise_by_id(id))
            .map(|ex| format!(" -> next: {}", ex.exercise.name))
            .unwrap_or_default();
        let suppressed = if biset::should_apply_rest(session, exercise) {
            ""
        } else {
            " | rest at the end of the biset"
        };
        println!(
            "   {}",
            format!(
                "biset {} ({}/{}){}{}",
                meta.group, meta.position, meta.total, next, suppressed
            )
            .blue()
        );
    }
    if let Some(notes) = exercise.params.notes().filter(|n| !n.trim().is_empty()) {
        println!("   {}", format!("notes: {notes}").dimmed());
    }

    if exercise.is_endurance() {
        for part in agenda::summary_parts(session, exercise) {
            println!("   {part}");
        }
        println!(
            "   {}",
            "endurance exercise: finish it with `f` when done".dimmed()
        );
    } else {
        if runner.has_last_performed(exercise) {
            println!("   {}", "last performance available, `l` to load it".dimmed());
        }
        let statuses = runner.set_statuses(exercise.id);
        for (idx, line) in runner.set_lines(exercise.id).iter().enumerate() {
            let status = statuses.get(idx).copied().unwrap_or(SetStatus::Pending);
            let (mark, label) = match status {
                SetStatus::Pending => ("[ ]".normal(), "in progress".dimmed()),
                SetStatus::Resting => ("[~]".yellow(), "resting".yellow()),
                SetStatus::Done => ("[x]".green(), "done".green()),
            };
            let reps = if line.reps.is_empty() { "-" } else { &line.reps };
            let load = if line.load.is_empty() { "-" } else { &line.load };
            println!(
                "   {mark} {} {reps} reps x {load}  {label}",
                format!("{}", idx + 1).yellow()
            );
        }
    }
}

fn rest_line(runner: &Runner) -> String {
    let session = runner.session();
    let Some(exercise) = runner.current_exercise() else { return String::new() };

    let current = runner.rest_timer().filter(|t| t.exercise_id == exercise.id);
    if let Some(timer) = current {
        let label = if timer.running { "counting" } else { "rest finished" };
        return format!("{} {}", format_countdown(timer.remaining_ms), label.dimmed());
    }

    let applies = biset::should_apply_rest(session, exercise);
    let planned_ms = if applies {
        (runner.rest_secs_for(exercise) * 1000.0) as i64
    } else {
        0
    };
    if planned_ms > 0 {
        format!("{} {}", format_countdown(planned_ms), "waiting".dimmed())
    } else if !applies {
        format!("{} {}", format_countdown(0), "at the end of the biset".dimmed())
    } else {
        format!("{} {}", format_countdown(0), "no rest".dimmed())
    }
}
