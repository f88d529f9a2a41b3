//! Natural prescription summary lines.

use crate::catalogue::Catalogue;

const PART_SEPARATOR: &str = " -- ";

/// One summary line per prescription name.
///
/// A line starts with the record's icon and the name, followed by whichever of importance,
/// recommended duration and reminders the record has. Names without a readable record are listed
/// bare.
pub fn prescription_summary<S: AsRef<str>>(names: &[S], catalogue: &Catalogue) -> Vec<String> {
    names
        .iter()
        .map(|name| summary_line(name.as_ref(), catalogue))
        .collect()
}

fn summary_line(name: &str, catalogue: &Catalogue) -> String {
    let Some(detail) = catalogue.natural_prescription(name) else {
        return name.to_string();
    };

    let heading = match detail.icon.as_deref().map(str::trim) {
        Some(icon) if !icon.is_empty() => format!("{icon} {name}"),
        _ => name.to_string(),
    };

    let mut parts = vec![heading];
    if let Some(importance) = non_blank(detail.importance.as_deref()) {
        parts.push(format!("重要性: {importance}"));
    }
    if let Some(how_long) = non_blank(
        detail
            .prescription
            .as_ref()
            .and_then(|plan| plan.how_long.as_deref()),
    ) {
        parts.push(format!("建議時長: {how_long}"));
    }
    if let Some(reminders) = non_blank(
        detail
            .timing_and_precautions
            .as_ref()
            .and_then(|timing| timing.reminders.as_deref()),
    ) {
        parts.push(format!("提醒: {reminders}"));
    }

    parts.join(PART_SEPARATOR)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
