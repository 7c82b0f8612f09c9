//! ANSI rendering of a highlighted surface

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::surface::{DisplaySurface, TextSurface};
use crate::syntax::{Color, FontVariant, StyleDirective};

/// Output options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Maximum display columns per line (None = unlimited)
    pub width: Option<usize>,
    /// Prefix each line with its number
    pub line_numbers: bool,
}

/// Write the surface's text with its tag styles as ANSI escapes
pub fn render_surface<W: Write>(out: &mut W, surface: &TextSurface, options: &RenderOptions) -> Result<()> {
    let line_count = surface.line_count();
    let lnum_width = line_count.to_string().len();

    for line_no in 1..=line_count {
        let text = surface.line(line_no).unwrap_or_default();
        // A trailing newline leaves an empty last line; don't print it
        if line_no == line_count && text.is_empty() && line_count > 1 {
            break;
        }

        let mut budget = options.width.unwrap_or(usize::MAX);
        if options.line_numbers {
            let lnum = format!("{:>width$} ", line_no, width = lnum_width);
            queue!(out, SetAttribute(Attribute::Dim), Print(&lnum), SetAttribute(Attribute::Reset))?;
            budget = budget.saturating_sub(lnum.len());
        }

        for (style, run) in styled_runs(surface, line_no, text) {
            let shown = truncate_to_width(&run, budget);
            budget -= unicode_width::UnicodeWidthStr::width(shown.as_str());
            write_run(out, style, &shown)?;
            if shown.len() < run.len() {
                break;
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()?;
    Ok(())
}

/// Split a line into runs of equally styled characters
fn styled_runs(surface: &TextSurface, line_no: usize, text: &str) -> Vec<(StyleDirective, String)> {
    let mut runs: Vec<(StyleDirective, String)> = Vec::new();
    for (ch, style) in text.chars().zip(surface.line_styles(line_no)) {
        match runs.last_mut() {
            Some((last, run)) if *last == style => run.push(ch),
            _ => runs.push((style, ch.to_string())),
        }
    }
    runs
}

fn write_run<W: Write>(out: &mut W, style: StyleDirective, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    if style.is_empty() {
        queue!(out, Print(text))?;
        return Ok(());
    }

    if let Some(color) = style.foreground {
        queue!(out, SetForegroundColor(term_color(color)))?;
    }
    match style.font {
        Some(FontVariant::Italic) => queue!(out, SetAttribute(Attribute::Italic))?,
        Some(FontVariant::Bold) => queue!(out, SetAttribute(Attribute::Bold))?,
        Some(FontVariant::Heading) => {
            queue!(out, SetAttribute(Attribute::Bold), SetAttribute(Attribute::Underlined))?
        }
        Some(FontVariant::Subheading) => queue!(out, SetAttribute(Attribute::Underlined))?,
        None => {}
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
    Ok(())
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}
