use super::common::{format_size_mb, format_upload_date, status_style};
use super::table::{CellStyle, wrap_text};
use crate::Result;
use crate::messages;
use crate::models::{Artifact, StatusKind};
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const DEFAULT_TERMINAL_WIDTH: usize = 100;

/// Render one artifact as aligned `label : value` lines, followed by its messages.
pub fn generate<W: Write>(artifact: &Artifact, use_colors: bool, writer: &mut W) -> Result<()> {
    generate_with_width(artifact, use_colors, terminal_width(), writer)
}

fn generate_with_width<W: Write>(artifact: &Artifact, use_colors: bool, width: usize, writer: &mut W) -> Result<()> {
    let status = match artifact.status.kind() {
        StatusKind::Other => artifact.status.to_string(),
        kind => format!("{} ({kind})", artifact.status),
    };

    let fields: [(&str, String, CellStyle); 10] = [
        ("ID", artifact.id.to_string(), CellStyle::Plain),
        ("File Name", artifact.file_name.clone(), CellStyle::Plain),
        ("Type", artifact.artifact_type.clone(), CellStyle::Plain),
        ("Status", status, status_style(artifact.status.kind())),
        ("Upload Date", format_upload_date(artifact.upload_date.as_ref()), CellStyle::Plain),
        ("Uploaded By", artifact.user_name.clone(), CellStyle::Plain),
        ("Upload IP", artifact.upload_ip.clone(), CellStyle::Plain),
        (
            "Size",
            format!("{} MB ({} bytes)", format_size_mb(artifact.file_size), artifact.file_size),
            CellStyle::Plain,
        ),
        (
            "Approval",
            if artifact.approval_required { "required" } else { "not required" }.to_string(),
            CellStyle::Plain,
        ),
        ("Comment", artifact.approval_comment.clone(), CellStyle::Plain),
    ];

    let label_width = fields.iter().map(|(label, ..)| label.len()).max().unwrap_or(0);
    // "  " + label + " : "
    let value_indent = 2 + label_width + 3;

    for (label, value, style) in &fields {
        let label = format!("{label:<label_width$}");
        let label = if use_colors { label.bold().to_string() } else { label };

        let lines = wrap_indented(value, width, value_indent);
        let (first, rest) = lines.split_first().map_or(("", &[][..]), |(first, rest)| (first.as_str(), rest));

        let first = match style {
            CellStyle::Red if use_colors => first.red().to_string(),
            CellStyle::Green if use_colors => first.green().to_string(),
            CellStyle::Plain | CellStyle::Red | CellStyle::Green => first.to_string(),
        };

        writeln!(writer, "  {label} : {first}")?;
        for line in rest {
            writeln!(writer, "{line}")?;
        }
    }

    writeln!(writer)?;
    if use_colors {
        writeln!(writer, "{}", "Messages".bold())?;
    } else {
        writeln!(writer, "Messages")?;
    }

    let lines = messages::lines(artifact);
    if lines.is_empty() {
        writeln!(writer, "  {}", messages::NO_MESSAGES)?;
    }
    for line in &lines {
        for wrapped in wrap_indented(line, width, 2) {
            writeln!(writer, "  {}", wrapped.trim_start())?;
        }
    }

    Ok(())
}

fn terminal_width() -> usize {
    terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
}

/// Word-wrap `text` to `width`, indenting continuation lines by `indent` columns.
fn wrap_indented(text: &str, width: usize, indent: usize) -> Vec<String> {
    if width <= indent {
        return vec![text.to_string()];
    }

    let mut lines = wrap_text(text, width - indent);
    for line in lines.iter_mut().skip(1) {
        *line = format!("{:indent$}{line}", "");
    }
    lines
}
