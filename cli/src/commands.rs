use std::io::Write;

use bosswatch_core::{
    BossEntry, ObservationRecord, ObservationStore, RespawnPolicy, TimeLeft, render_table,
};
use chrono::{DateTime, Duration, FixedOffset, Timelike, Utc};

use crate::context::{CliContext, TERMINAL_CHANNEL};

/// Current time in the configured display offset.
async fn now_local(ctx: &CliContext) -> DateTime<FixedOffset> {
    let offset = ctx.config.read().await.display_offset();
    Utc::now().with_timezone(&offset)
}

pub async fn dead(name: &str, ctx: &CliContext) {
    let Some(entry) = ctx.catalog.resolve(name) else {
        println!("Boss '{name}' not found.");
        return;
    };

    let now = now_local(ctx).await;
    record_kill(entry, now, now, ctx).await;
}

pub async fn died_at(name: &str, time: &str, ctx: &CliContext) {
    let Some(entry) = ctx.catalog.resolve(name) else {
        println!("Boss '{name}' not found.");
        return;
    };

    let now = now_local(ctx).await;
    let Some(observed_at) = kill_time_today(time, now) else {
        println!("Invalid time format. Please use HH:MM (e.g., 14:30).");
        return;
    };
    record_kill(entry, observed_at, now, ctx).await;
}

pub async fn set_timer(name: &str, hours: i64, ctx: &CliContext) {
    let Some(entry) = ctx.catalog.resolve(name) else {
        println!("Boss '{name}' not found.");
        return;
    };
    if hours <= 0 {
        println!("Hours must be a positive number.");
        return;
    }

    let now = now_local(ctx).await;
    let next_spawn = now + Duration::hours(hours);
    let record = ObservationRecord {
        boss: entry.name.to_string(),
        observed_at: now,
        next_spawn,
    };
    if let Err(e) = ctx.store.append(&record) {
        tracing::error!(boss = entry.name, error = %e, "failed to persist timer");
        println!("Failed to record timer: {e}");
        return;
    }

    let time_left = TimeLeft::until(next_spawn, now);
    println!("Timer for {} has been set. Next spawn in {time_left}.", entry.name);
}

/// Compute the next spawn for a kill and persist the observation.
async fn record_kill(
    entry: &BossEntry,
    observed_at: DateTime<FixedOffset>,
    now: DateTime<FixedOffset>,
    ctx: &CliContext,
) {
    let policy = RespawnPolicy::parse(entry.respawn_rule);
    let next_spawn = policy.next_occurrence(observed_at);
    let record = ObservationRecord {
        boss: entry.name.to_string(),
        observed_at,
        next_spawn,
    };
    if let Err(e) = ctx.store.append(&record) {
        tracing::error!(boss = entry.name, error = %e, "failed to persist kill");
        println!("Failed to record kill: {e}");
        return;
    }

    let time_left = TimeLeft::until(next_spawn, now);
    println!(
        "{} has been marked as dead at {}. Next spawn in {time_left}.",
        entry.name,
        observed_at.format("%H:%M")
    );
}

/// `HH:MM` on today's date; times still ahead of `now` roll back one day.
fn kill_time_today(
    time: &str,
    now: DateTime<FixedOffset>,
) -> Option<DateTime<FixedOffset>> {
    let (hour, minute) = time.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    let kill = now
        .with_hour(hour)?
        .with_minute(minute)?
        .with_second(0)?
        .with_nanosecond(0)?;
    if kill > now {
        Some(kill - Duration::days(1))
    } else {
        Some(kill)
    }
}

pub async fn boss_info(name: &str, ctx: &CliContext) {
    let Some(entry) = ctx.catalog.resolve(name) else {
        println!("Boss '{name}' not found.");
        return;
    };

    let latest = match ctx.store.latest_one(entry.name) {
        Ok(latest) => latest,
        Err(e) => {
            println!("Failed to read observations: {e}");
            return;
        }
    };

    println!("Boss: {}", entry.name);
    println!("  Level:     {}", entry.level);
    println!("  Location:  {}", entry.location);
    println!("  Armor:     {}", entry.armor);
    println!("  Respawn:   {}", entry.respawn_rule);

    match latest {
        Some(record) => {
            let now = now_local(ctx).await;
            let offset = *now.offset();
            println!(
                "  Last kill: {}",
                record.observed_at.with_timezone(&offset).format("%Y-%m-%d %H:%M")
            );
            println!("  Time left: {}", TimeLeft::until(record.next_spawn, now));
        }
        None => {
            println!("  Last kill: N/A");
            println!("  Time left: TBD");
        }
    }
}

pub async fn list(ctx: &CliContext) {
    match ctx.store.latest_all() {
        Ok(latest) => {
            let now = now_local(ctx).await;
            println!("{}", render_table(&ctx.catalog, &latest, now));
        }
        Err(e) => println!("Failed to read observations: {e}"),
    }
}

pub async fn history(name: &str, ctx: &CliContext) {
    let Some(entry) = ctx.catalog.resolve(name) else {
        println!("Boss '{name}' not found.");
        return;
    };

    let records = match ctx.store.history(entry.name, 10) {
        Ok(records) => records,
        Err(e) => {
            println!("Failed to read observations: {e}");
            return;
        }
    };
    if records.is_empty() {
        println!("No recorded kills for {}.", entry.name);
        return;
    }

    let offset = ctx.config.read().await.display_offset();
    println!("Recent kills for {}:", entry.name);
    for record in records {
        println!(
            "  {}  →  next spawn {}",
            record.observed_at.with_timezone(&offset).format("%Y-%m-%d %H:%M"),
            record.next_spawn.with_timezone(&offset).format("%Y-%m-%d %H:%M")
        );
    }
}

pub async fn start_live(ctx: &CliContext) {
    match ctx.board.subscribe(TERMINAL_CHANNEL).await {
        Ok(_) => {
            let secs = ctx.config.read().await.refresh_secs;
            println!("Live boss table started, refreshing every {secs} seconds.");
        }
        Err(e) => println!("Failed to start live table: {e}"),
    }
}

pub async fn stop_live(ctx: &CliContext) {
    if ctx.board.unsubscribe(TERMINAL_CHANNEL).await {
        println!("Live boss table stopped.");
    } else {
        println!("No live table is running.");
    }
}

pub async fn show_time(ctx: &CliContext) {
    let now = now_local(ctx).await;
    println!("Current time: {}", now.format("%Y-%m-%d %H:%M:%S %:z"));
}

pub async fn set_offset(offset: &str, ctx: &CliContext) {
    if bosswatch_core::parse_offset(offset).is_none() {
        println!("Invalid offset. Use ±HH:MM, e.g. +08:00 or -05:00.");
        return;
    }

    let mut config = ctx.config.write().await;
    config.utc_offset = offset.trim().to_string();
    match config.save() {
        Ok(()) => println!("Display offset set to {}.", config.utc_offset),
        Err(e) => {
            tracing::error!(error = %e, "failed to save configuration");
            println!(
                "Display offset set to {} for this session, but saving failed: {e}",
                config.utc_offset
            );
        }
    }
}

pub async fn show_config(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("Display offset:  {}", config.utc_offset);
    println!("Observation log: {}", config.data_file_path().display());
    println!("Refresh period:  {}s", config.refresh_secs);
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}
