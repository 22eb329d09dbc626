//! Plain text outline of a structuring result.

use crate::error::{Error, Result};
use crate::model::{ParsedEntry, ParsedSection, StructuringResult};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Render a result as a human-readable outline.
///
/// Contact fields first, then the summary, then every section with its
/// entries, then warnings. Empty fields are skipped.
pub fn to_text(result: &StructuringResult) -> Result<String> {
    let mut out = String::new();
    write_outline(&mut out, result).map_err(|e| Error::Render(format!("outline error: {}", e)))?;
    Ok(out.trim_end().to_string())
}

fn write_outline(out: &mut String, result: &StructuringResult) -> std::fmt::Result {
    let resume = &result.resume;

    if !resume.name.is_empty() {
        writeln!(out, "# {}", resume.name)?;
    }
    if !resume.full_name.is_empty() {
        writeln!(out, "{}", resume.full_name)?;
    }
    for (label, value) in [
        ("Email", &resume.email),
        ("Phone", &resume.phone),
        ("LinkedIn", &resume.linkedin_url),
        ("GitHub", &resume.github_url),
        ("Portfolio", &resume.portfolio_url),
    ] {
        if !value.is_empty() {
            writeln!(out, "{}: {}", label, value)?;
        }
    }
    writeln!(out, "Font size: {}pt", resume.base_font_size)?;

    if !resume.summary.is_empty() {
        writeln!(out)?;
        writeln!(out, "Summary")?;
        writeln!(out, "{}{}", INDENT, resume.summary)?;
    }

    for section in &result.sections {
        writeln!(out)?;
        write_section(out, section)?;
    }

    if !result.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Warnings")?;
        for warning in &result.warnings {
            writeln!(out, "{}- {}", INDENT, warning)?;
        }
    }

    Ok(())
}

fn write_section(out: &mut String, section: &ParsedSection) -> std::fmt::Result {
    writeln!(out, "{} ({})", section.section_title, section.entry_count())?;
    for entry in &section.entries {
        write_entry(out, entry)?;
    }
    Ok(())
}

fn write_entry(out: &mut String, entry: &ParsedEntry) -> std::fmt::Result {
    let heading = [entry.title.as_str(), entry.organization.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" @ ");

    if !heading.is_empty() {
        writeln!(out, "{}{}. {}", INDENT, entry.order + 1, heading)?;
    } else {
        writeln!(out, "{}{}.", INDENT, entry.order + 1)?;
    }
    if !entry.technologies.is_empty() {
        writeln!(out, "{0}{0}[{1}]", INDENT, entry.technologies)?;
    }
    for line in entry.description.lines() {
        writeln!(out, "{0}{0}{1}", INDENT, line)?;
    }
    Ok(())
}
