/// View building blocks
///
/// A small, display-agnostic vocabulary: headings, text, form fields,
/// indicators, progress bars and buttons carrying a typed action.

/// Visual weight of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    /// Current / selected / in focus
    Active,
    /// Finished or confirmed
    Done,
    /// Secondary information
    Muted,
    /// Needs the user's attention
    Warning,
}

/// One element in a view
#[derive(Debug, Clone, PartialEq)]
pub enum Element<A> {
    Heading(String),
    Text {
        text: String,
        emphasis: Emphasis,
    },
    Field {
        label: String,
        value: String,
        emphasis: Emphasis,
        note: Option<String>,
    },
    Indicator {
        glyph: String,
        label: String,
        emphasis: Emphasis,
    },
    Progress {
        label: String,
        percent: u8,
    },
    Button {
        key: char,
        label: String,
        action: A,
        enabled: bool,
    },
}

/// Ordered list of elements rendered into one region
#[derive(Debug, Clone, PartialEq)]
pub struct View<A> {
    elements: Vec<Element<A>>,
}

impl<A> View<A> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// View holding a single line of text, used for titles and headers
    pub fn line(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.elements.push(Element::Heading(text.into()));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.styled(text, Emphasis::Normal)
    }

    pub fn muted(self, text: impl Into<String>) -> Self {
        self.styled(text, Emphasis::Muted)
    }

    pub fn styled(mut self, text: impl Into<String>, emphasis: Emphasis) -> Self {
        self.elements.push(Element::Text {
            text: text.into(),
            emphasis,
        });
        self
    }

    pub fn field(
        mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        emphasis: Emphasis,
        note: Option<&str>,
    ) -> Self {
        self.elements.push(Element::Field {
            label: label.into(),
            value: value.into(),
            emphasis,
            note: note.map(str::to_string),
        });
        self
    }

    pub fn indicator(
        mut self,
        glyph: impl Into<String>,
        label: impl Into<String>,
        emphasis: Emphasis,
    ) -> Self {
        self.elements.push(Element::Indicator {
            glyph: glyph.into(),
            label: label.into(),
            emphasis,
        });
        self
    }

    pub fn progress(mut self, label: impl Into<String>, percent: u8) -> Self {
        self.elements.push(Element::Progress {
            label: label.into(),
            percent: percent.min(100),
        });
        self
    }

    pub fn button(self, key: char, label: impl Into<String>, action: A) -> Self {
        self.button_enabled(key, label, action, true)
    }

    pub fn button_enabled(
        mut self,
        key: char,
        label: impl Into<String>,
        action: A,
        enabled: bool,
    ) -> Self {
        self.elements.push(Element::Button {
            key,
            label: label.into(),
            action,
            enabled,
        });
        self
    }

    /// Append every element of `other`
    pub fn extend(mut self, other: View<A>) -> Self {
        self.elements.extend(other.elements);
        self
    }

    pub fn elements(&self) -> &[Element<A>] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Plain text of every heading, text line and field value, in order
    pub fn texts(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Heading(text) | Element::Text { text, .. } => Some(text.as_str()),
                Element::Field { value, .. } => Some(value.as_str()),
                Element::Indicator { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any text element contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text.contains(needle))
    }

    /// Actions of every enabled button
    pub fn actions(&self) -> Vec<&A> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Button {
                    action,
                    enabled: true,
                    ..
                } => Some(action),
                _ => None,
            })
            .collect()
    }

    /// Enabled button bound to `key`
    pub fn action_for_key(&self, key: char) -> Option<&A> {
        let key = key.to_ascii_lowercase();
        self.elements.iter().find_map(|element| match element {
            Element::Button {
                key: bound,
                action,
                enabled: true,
                ..
            } if bound.to_ascii_lowercase() == key => Some(action),
            _ => None,
        })
    }
}

impl<A: PartialEq> View<A> {
    pub fn offers(&self, action: &A) -> bool {
        self.actions().into_iter().any(|offered| offered == action)
    }
}

impl<A> Default for View<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Act {
        Go,
        Stop,
    }

    #[test]
    fn test_builder_keeps_order() {
        let view: View<Act> = View::new()
            .heading("Title")
            .text("body")
            .button('g', "Go", Act::Go);

        assert_eq!(view.elements().len(), 3);
        assert_eq!(view.texts(), vec!["Title", "body"]);
    }

    #[test]
    fn test_disabled_buttons_are_not_offered() {
        let view = View::new()
            .button('g', "Go", Act::Go)
            .button_enabled('s', "Stop", Act::Stop, false);

        assert!(view.offers(&Act::Go));
        assert!(!view.offers(&Act::Stop));
        assert_eq!(view.action_for_key('s'), None);
    }

    #[test]
    fn test_key_lookup_ignores_case() {
        let view = View::new().button('g', "Go", Act::Go);
        assert_eq!(view.action_for_key('G'), Some(&Act::Go));
    }

    #[test]
    fn test_progress_is_clamped() {
        let view: View<Act> = View::new().progress("AI", 140);
        assert!(matches!(
            view.elements()[0],
            Element::Progress { percent: 100, .. }
        ));
    }
}
