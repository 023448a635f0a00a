//! Strategie 3: Roh-Dump aller Sektionen, wenn kein Format erkannt wurde.

use super::non_empty;
use crate::core::{SectionDump, WaypointRecord};
use regex::Regex;
use std::sync::LazyLock;

/// Maximale Länge der Inhaltsvorschau in Zeichen.
const SECTION_PREVIEW_CHARS: usize = 200;

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("statisches Regex-Pattern"));

/// Zerlegt den Text an `[Name]`-Headern und liefert je nicht-leerer Sektion
/// einen Diagnose-Datensatz. Text vor dem ersten Header gehört zu keiner Sektion.
pub(super) fn parse(content: &str) -> Option<Vec<WaypointRecord>> {
    if content.trim().is_empty() {
        return None;
    }

    let headers: Vec<_> = SECTION_HEADER.captures_iter(content).collect();
    let mut records = Vec::new();

    for (i, caps) in headers.iter().enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let body_end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(content.len(), |m| m.start());
        let body = content[whole.end()..body_end].trim();
        if body.is_empty() {
            continue;
        }

        records.push(WaypointRecord::Section(SectionDump {
            label: format!("Section: {}", name.as_str()),
            raw: preview(body),
        }));
    }

    non_empty(records)
}

/// Kürzt auf [`SECTION_PREVIEW_CHARS`] Zeichen und hängt `...` an, falls gekürzt.
fn preview(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(SECTION_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
