//! Countdown table rendering
//!
//! Produces the plain-text boss table pushed to live surfaces. Bosses with
//! a known next spawn sort soonest-first; bosses that have never been
//! reported follow in catalog order with a `TBD` placeholder.

use chrono::{DateTime, FixedOffset};
use hashbrown::HashMap;

use crate::catalog::Catalog;
use crate::game_data::{compact_name, short_location};
use crate::respawn::TimeLeft;
use crate::storage::ObservationRecord;

const PLACEHOLDER: &str = "TBD";

/// Render the full countdown table for the current observation snapshot.
///
/// Deterministic for fixed inputs: the same snapshot and `now` always
/// produce the same ordering and the same countdown strings.
pub fn render_table(
    catalog: &Catalog,
    latest: &HashMap<String, ObservationRecord>,
    now: DateTime<FixedOffset>,
) -> String {
    let mut scheduled: Vec<(DateTime<FixedOffset>, [String; 4])> = Vec::new();
    let mut unscheduled: Vec<[String; 4]> = Vec::new();

    for entry in catalog.entries() {
        let boss = format!("{}({})", compact_name(entry.name), entry.level);
        let rule = compact_rule(entry.respawn_rule);
        let location = short_location(entry.location).to_string();

        match latest.get(entry.name) {
            Some(record) => {
                let time_left = TimeLeft::until(record.next_spawn, now).to_string();
                scheduled.push((record.next_spawn, [boss, time_left, rule, location]));
            }
            None => {
                unscheduled.push([boss, PLACEHOLDER.to_string(), rule, location]);
            }
        }
    }

    // Stable sort keeps catalog order between equal spawn instants
    scheduled.sort_by_key(|(next_spawn, _)| *next_spawn);

    let mut out = String::new();
    out.push_str(&format_row(&[
        "Boss(Lvl)".to_string(),
        "Time Left".to_string(),
        "Respawn".to_string(),
        "Location".to_string(),
    ]));
    out.push('\n');
    out.push_str(&"-".repeat(58));
    out.push('\n');

    for (_, row) in &scheduled {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    for row in &unscheduled {
        out.push_str(&format_row(row));
        out.push('\n');
    }

    out.push_str(&format!(
        "\nLast updated: {}\n",
        now.format("%Y-%m-%d %H:%M:%S %:z")
    ));
    out
}

fn format_row(row: &[String; 4]) -> String {
    format!("{:<14} {:<10} {:<20} {}", row[0], row[1], row[2], row[3])
        .trim_end()
        .to_string()
}

/// Compact a respawn rule for the table: weekly slots lose the inner space
/// (`"Mon 11:30"` → `"Mon11:30"`); fixed intervals pass through.
fn compact_rule(rule: &str) -> String {
    if rule.contains("hrs") {
        return rule.to_string();
    }

    let compact_slot = |part: &str| {
        let part = part.trim();
        match part.split_once(' ') {
            Some((day, time)) => format!("{day}{time}"),
            None => part.to_string(),
        }
    };

    if rule.contains('/') {
        rule.split('/')
            .map(compact_slot)
            .collect::<Vec<_>>()
            .join("/")
    } else {
        compact_slot(rule)
    }
}
