use anyhow::Result;
use chrono::{TimeDelta, Utc};
use colored::Colorize;

use crate::api::Api;

pub async fn handle(api: &Api, days: Option<u32>) -> Result<()> {
    let mut executions = match api.fetch_executions().await {
        Ok(executions) => executions,
        Err(err) => {
            println!("{} could not load your history: {err:#}", "error:".red().bold());
            return Ok(());
        }
    };

    // Newest first; undated rows sink to the bottom.
    executions.sort_by_key(|e| std::cmp::Reverse(e.executed_at));
    if let Some(days) = days {
        let cutoff = Utc::now() - TimeDelta::days(days as i64);
        executions.retain(|e| e.executed_at.is_some_and(|ts| ts >= cutoff));
    }

    if executions.is_empty() {
        println!("{} no executions in the selected period", "note:".yellow().bold());
        return Ok(());
    }

    println!("{}", "Executions:".cyan().bold());
    for exec in &executions {
        let name = exec
            .session_name
            .clone()
            .unwrap_or_else(|| format!("Sessao {}", exec.session_id));
        let date = exec
            .executed_at
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let rpe = exec
            .rpe
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {} {} {}  RPE {}{}",
            date.dimmed(),
            name.bold(),
            exec.status.as_deref().unwrap_or("").dimmed(),
            rpe,
            exec.comment
                .as_deref()
                .filter(|c| !c.trim().is_empty())
                .map(|c| format!("  - {c}"))
                .unwrap_or_default()
        );
    }

    Ok(())
}
