use crate::config::Config;
use crate::error::{Error, Result};
use crate::holiday::{HolidayLookup, UsHolidays};
use crate::tagline;
use crate::version;

use colored::Colorize;
use chrono::{Local, NaiveDate};
use rand::Rng;

use std::io::{self, Write};
use std::path::Path;

pub const TAGLINE_WIDTH: usize = 61;

/// Reads the banner asset and highlights everything between `{COLOR}` and `{RESET}`.
///
/// `{{` and `}}` stand for literal braces; any other placeholder is rejected.
pub fn read(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    render(&raw).map_err(|reason| Error::BannerFormat {
        path: path.to_path_buf(),
        reason,
    })
}

fn render(raw: &str) -> std::result::Result<String, String> {
    let mut output = String::with_capacity(raw.len());
    let mut segment = String::new();
    let mut highlight = false;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                segment.push('{');
            },
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                segment.push('}');
            },
            '{' => {
                let mut name = String::new();
                let mut closed = false;

                for ch in chars.by_ref() {
                    if ch == '}' {
                        closed = true;
                        break;
                    }

                    name.push(ch);
                }

                if !closed {
                    return Err("unbalanced `{`".to_string());
                }

                flush(&mut output, &mut segment, highlight);

                highlight = match name.as_str() {
                    "COLOR" => true,
                    "RESET" => false,
                    _ => return Err(format!("unknown placeholder `{{{name}}}`")),
                };
            },
            '}' => return Err("single `}` encountered".to_string()),
            _ => segment.push(ch),
        }
    }

    flush(&mut output, &mut segment, highlight);

    Ok(output)
}

fn flush(output: &mut String, segment: &mut String, highlight: bool) {
    if segment.is_empty() {
        return;
    }

    if highlight {
        output.push_str(&segment.as_str().cyan().to_string());
    } else {
        output.push_str(segment);
    }

    segment.clear();
}

/// Pads the tagline to `TAGLINE_WIDTH`; longer taglines are kept whole and push the version right.
pub fn tagline_line(tagline: &str, version: &str) -> String {
    format!("  {:<width$} v{}", tagline, version, width = TAGLINE_WIDTH)
}

/// Renders the full banner into `out`. Nothing is written unless every resource resolved.
pub fn write<W, L, R>(out: &mut W, config: &Config, lookup: &L, today: NaiveDate, rng: &mut R) -> Result<()>
where
    W: Write + ?Sized,
    L: HolidayLookup + ?Sized,
    R: Rng + ?Sized,
{
    let banner = read(&config.banner)?;
    let version = version::read(&config.project)?;
    let tagline = tagline::select(lookup, today, rng);

    let text = format!("{}\n{}\n\n", banner, tagline_line(tagline, &version));
    out.write_all(text.as_bytes())?;
    out.flush()?;

    Ok(())
}

pub fn print(config: &Config) -> Result<()> {
    write(
        &mut io::stdout().lock(),
        config,
        &UsHolidays::new(),
        Local::now().date_naive(),
        &mut rand::thread_rng(),
    )
}
