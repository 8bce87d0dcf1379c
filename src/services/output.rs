use crate::domain::models::{JsonOut, LessonReport};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Heading, then the lines the lesson printed.
pub fn render_report(report: &LessonReport) -> String {
    let mut out = format!("## {} ({})", report.title, report.id);
    for line in &report.lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

pub fn print_reports(json: bool, reports: &[LessonReport]) -> anyhow::Result<()> {
    if json {
        return print_out(true, reports, render_report);
    }
    let rendered: Vec<String> = reports.iter().map(render_report).collect();
    println!("{}", rendered.join("\n\n"));
    Ok(())
}
