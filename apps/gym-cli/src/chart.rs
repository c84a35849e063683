// chart.rs - Plain-text charts for the terminal.
//
// Bars are scaled to a fixed width against the largest value shown (the goal
// threshold included), so a goal marker always lands inside the chart.

use gym_ledger::{ProgressPoint, RoutineCount};

const BAR_WIDTH: usize = 40;

/// Horizontal bar chart of sessions per routine.
pub fn distribution_chart(counts: &[RoutineCount]) -> String {
    let mut out = String::from("Sessions per routine\n");
    if counts.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let label_width = counts.iter().map(|c| c.routine.chars().count()).max().unwrap_or(0);
    let max = counts.iter().map(|c| c.sessions).max().unwrap_or(0) as f64;
    for count in counts {
        let len = scaled(count.sessions as f64, max);
        out.push_str(&format!(
            "  {:<width$} {} {}\n",
            count.routine,
            "#".repeat(len),
            count.sessions,
            width = label_width
        ));
    }
    out
}

/// One bar per point, oldest first, with `|` marking the goal threshold.
pub fn progression_chart(title: &str, points: &[ProgressPoint], goal: Option<f64>) -> String {
    let mut out = format!("{}\n", title);
    if points.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let max = points
        .iter()
        .map(|p| p.value)
        .chain(goal)
        .fold(0.0_f64, f64::max);
    let goal_column = goal.map(|g| scaled(g, max));

    for point in points {
        let len = scaled(point.value, max);
        let mut bar: Vec<char> = (0..=BAR_WIDTH)
            .map(|i| if i < len { '#' } else { ' ' })
            .collect();
        if let Some(column) = goal_column {
            bar[column] = '|';
        }
        let bar: String = bar.into_iter().collect();
        out.push_str(&format!(
            "  {} {} {:>7.1}\n",
            point.date,
            bar,
            point.value
        ));
    }
    if let Some(g) = goal {
        out.push_str(&format!("  goal: {:.1} (|)\n", g));
    }
    out
}

fn scaled(value: f64, max: f64) -> usize {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    ((value / max) * BAR_WIDTH as f64).round().min(BAR_WIDTH as f64) as usize
}
