/// Console surface
///
/// Prints every visible region top to bottom in the order the regions were
/// declared, styled with `colored`. Buttons are shown with the key that
/// triggers them.

use colored::*;
use std::collections::HashMap;
use std::io::{self, Write};

use super::element::{Element, Emphasis, View};
use super::surface::{Surface, ViewTarget};

const RULE_WIDTH: usize = 56;
const BAR_WIDTH: usize = 20;

/// Terminal front-end for a demo
pub struct ConsoleSurface<A> {
    title: String,
    regions: Vec<ViewTarget>,
    views: HashMap<ViewTarget, View<A>>,
    clear_screen: bool,
    colors: bool,
    dirty: bool,
}

impl<A> ConsoleSurface<A> {
    /// Create a surface showing `regions` in the given order
    pub fn new(title: impl Into<String>, regions: &[ViewTarget]) -> Self {
        Self {
            title: title.into(),
            regions: regions.to_vec(),
            views: HashMap::new(),
            clear_screen: true,
            colors: true,
            dirty: true,
        }
    }

    /// Disable ANSI screen clearing (plain scrolling output)
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Never emit color codes, whatever the terminal supports
    pub fn without_colors(mut self) -> Self {
        self.colors = false;
        self
    }

    /// Enabled button bound to `key` in any visible region
    pub fn action_for_key(&self, key: char) -> Option<&A> {
        self.regions
            .iter()
            .filter_map(|target| self.views.get(target))
            .find_map(|view| view.action_for_key(key))
    }

    /// Whether anything changed since the last repaint
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write all visible regions to `out`
    pub fn paint(&mut self, out: &mut impl Write) -> io::Result<()> {
        let palette = Palette {
            colors: self.colors,
        };
        if self.clear_screen {
            write!(out, "\x1B[2J\x1B[1;1H")?;
        }

        writeln!(out, "{}", palette.heading(&self.title))?;
        writeln!(out, "{}", palette.accent(&"═".repeat(RULE_WIDTH)))?;

        for target in &self.regions {
            let Some(view) = self.views.get(target) else {
                continue;
            };
            if view.is_empty() {
                continue;
            }
            paint_view(out, view, palette)?;
            writeln!(out)?;
        }

        writeln!(out, "{}", palette.dim(&"─".repeat(RULE_WIDTH)))?;
        writeln!(out, "{}", palette.dim("Type a key and press Enter · q to quit"))?;
        out.flush()?;

        self.dirty = false;
        Ok(())
    }

    /// Repaint to stdout if anything changed
    pub fn repaint(&mut self) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.paint(&mut lock)
    }
}

impl<A> Surface<A> for ConsoleSurface<A> {
    fn has_target(&self, target: ViewTarget) -> bool {
        self.regions.contains(&target)
    }

    fn show(&mut self, target: ViewTarget, view: View<A>) {
        if self.has_target(target) {
            self.views.insert(target, view);
            self.dirty = true;
        }
    }

    fn clear(&mut self, target: ViewTarget) {
        if self.views.remove(&target).is_some() {
            self.dirty = true;
        }
    }

    fn action_for_key(&self, key: char) -> Option<&A> {
        ConsoleSurface::action_for_key(self, key)
    }

    fn present(&mut self) -> io::Result<()> {
        self.repaint()
    }
}

/// Terminal colors for each kind of output; plain when disabled
#[derive(Debug, Clone, Copy)]
struct Palette {
    colors: bool,
}

impl Palette {
    fn heading(&self, text: &str) -> ColoredString {
        if !self.colors {
            return text.normal();
        }
        text.bright_cyan().bold()
    }

    fn accent(&self, text: &str) -> ColoredString {
        if !self.colors {
            return text.normal();
        }
        text.bright_cyan()
    }

    fn dim(&self, text: &str) -> ColoredString {
        if !self.colors {
            return text.normal();
        }
        text.dimmed()
    }

    fn emphasis(&self, text: &str, emphasis: Emphasis) -> ColoredString {
        if !self.colors {
            return text.normal();
        }
        match emphasis {
            Emphasis::Normal => text.normal(),
            Emphasis::Active => text.cyan().bold(),
            Emphasis::Done => text.green(),
            Emphasis::Muted => text.dimmed(),
            Emphasis::Warning => text.yellow(),
        }
    }
}

fn paint_view<A>(out: &mut impl Write, view: &View<A>, palette: Palette) -> io::Result<()> {
    let mut indicators: Vec<String> = Vec::new();

    for element in view.elements() {
        // Consecutive indicators share one line
        if let Element::Indicator {
            glyph,
            label,
            emphasis,
        } = element
        {
            let text = match emphasis {
                Emphasis::Active => format!("[{glyph}] {label}"),
                _ => format!("({glyph}) {label}"),
            };
            indicators.push(palette.emphasis(&text, *emphasis).to_string());
            continue;
        }
        if !indicators.is_empty() {
            writeln!(out, "{}", indicators.join("  →  "))?;
            indicators.clear();
        }

        match element {
            Element::Heading(text) => {
                writeln!(out, "{}", palette.heading(text))?;
                writeln!(out, "{}", palette.accent(&"─".repeat(text.chars().count())))?;
            }
            Element::Text { text, emphasis } => {
                let line = format!("{}{}", prefix(*emphasis), text);
                writeln!(out, "{}", palette.emphasis(&line, *emphasis))?;
            }
            Element::Field {
                label,
                value,
                emphasis,
                note,
            } => {
                let marker = match emphasis {
                    Emphasis::Done => " ●",
                    Emphasis::Warning => " ◐",
                    _ => "",
                };
                let label = palette.emphasis(&format!("{label}{marker}"), *emphasis);
                match note {
                    Some(note) => writeln!(out, "  {label}: {value}  {}", palette.dim(&format!("({note})")))?,
                    None => writeln!(out, "  {label}: {value}")?,
                }
            }
            Element::Progress { label, percent } => {
                let filled = usize::from(*percent) * BAR_WIDTH / 100;
                writeln!(
                    out,
                    "  {label:<12} [{}{}] {percent}%",
                    palette.accent(&"█".repeat(filled)),
                    palette.dim(&"░".repeat(BAR_WIDTH - filled))
                )?;
            }
            Element::Button {
                key, label, enabled, ..
            } => {
                if *enabled {
                    writeln!(out, "  {} {label}", palette.heading(&format!("[{key}]")))?;
                } else {
                    writeln!(out, "  {}", palette.dim(&format!("({key}) {label} (unavailable)")))?;
                }
            }
            Element::Indicator { .. } => {}
        }
    }

    if !indicators.is_empty() {
        writeln!(out, "{}", indicators.join("  →  "))?;
    }
    Ok(())
}

fn prefix(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Normal => "",
        Emphasis::Active => "▶ ",
        Emphasis::Done => "✓ ",
        Emphasis::Muted => "  ",
        Emphasis::Warning => "! ",
    }
}
