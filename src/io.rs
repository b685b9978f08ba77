use crate::model::{Agent, Category, Fleet, DAYS_PER_WEEK};
use crate::schedule::{ScheduleResult, DAY_LABELS};
use anyhow::{bail, Context};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Import d'agents depuis CSV:
/// header `name,category[,priority][,preference_priority][,preferred_rest_days]`
pub fn import_agents_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Agent>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let category = rec.get(1).context("missing category")?.trim();
        if name.is_empty() {
            bail!("invalid agent row (empty name)");
        }
        let category: Category = category
            .parse()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid category for agent {name}"))?;
        let mut agent = Agent::new(name, category);
        if let Some(flag) = non_empty(rec.get(2)) {
            agent.priority = parse_bool(flag)
                .with_context(|| format!("invalid priority value for agent {name}"))?;
        }
        if let Some(flag) = non_empty(rec.get(3)) {
            agent.preference_priority = parse_bool(flag)
                .with_context(|| format!("invalid preference_priority value for agent {name}"))?;
        }
        if let Some(days) = non_empty(rec.get(4)) {
            agent.preferred_rest_days = parse_days(days)
                .with_context(|| format!("invalid preferred_rest_days for agent {name}"))?;
        }
        out.push(agent);
    }
    Ok(out)
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "si" | "sí" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Jours séparés par `;` ou `,` : index 0..=6 ou noms anglais (`mon`, `Sunday`…).
pub fn parse_days(raw: &str) -> anyhow::Result<BTreeSet<u8>> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_day)
        .collect()
}

fn parse_day(raw: &str) -> anyhow::Result<u8> {
    if let Ok(idx) = raw.parse::<u8>() {
        if usize::from(idx) >= DAYS_PER_WEEK {
            bail!("day index out of range: {raw}");
        }
        return Ok(idx);
    }
    let weekday: Weekday = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid day: {raw}"))?;
    // num_days_from_monday() est dans 0..=6
    Ok(weekday.num_days_from_monday() as u8)
}

/// Besoins séparés par des virgules, ex. `8,8,8,8,8,6,6`.
pub fn parse_needs(raw: &str) -> anyhow::Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            chunk
                .parse::<i64>()
                .with_context(|| format!("invalid requirement: {chunk}"))
        })
        .collect()
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    schedule: &ScheduleResult,
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

pub fn load_schedule_json<P: AsRef<Path>>(path: P) -> anyhow::Result<ScheduleResult> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))
}

/// Export CSV du planning: header `id,name,category,<jours>,total`.
///
/// Avec `week_start` (un lundi), les colonnes de jours portent les dates ISO.
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    fleet: &Fleet,
    schedule: &ScheduleResult,
    week_start: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let labels = day_headers(week_start)?;
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;

    let mut header = vec!["id".to_string(), "name".to_string(), "category".to_string()];
    header.extend(labels);
    header.push("total".to_string());
    w.write_record(&header)?;

    let mut total_buf = itoa::Buffer::new();
    for agent in &fleet.agents {
        let Some(week) = schedule.get(&agent.id) else {
            continue;
        };
        let mut row = vec![agent.id.as_str(), agent.name.as_str(), agent.category.label()];
        row.extend(week.iter().map(|r| if *r { "rest" } else { "active" }));
        row.push(total_buf.format(schedule.total_rests(&agent.id)));
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

fn day_headers(week_start: Option<NaiveDate>) -> anyhow::Result<Vec<String>> {
    let Some(start) = week_start else {
        return Ok(DAY_LABELS.iter().map(|l| l.to_string()).collect());
    };
    if start.weekday() != Weekday::Mon {
        bail!("week start must be a Monday, got {start} ({})", start.weekday());
    }
    (0..DAYS_PER_WEEK as u64)
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset))
                .map(|d| d.format("%Y-%m-%d").to_string())
                .context("date overflow")
        })
        .collect()
}
