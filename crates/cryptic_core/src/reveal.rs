//! Click-to-reveal explanations.

/// Class that keeps an explanation hidden.
pub const CONCEALED_CLASS: &str = "explanation";

/// Tokens of an element's `class` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn parse(class_attr: &str) -> Self {
        Self {
            tokens: class_attr.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.tokens.iter().any(|t| t == class)
    }

    /// Append `class` unless already present.
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.tokens.push(class.to_string());
        }
    }

    /// Drop every occurrence of `class`.
    pub fn remove(&mut self, class: &str) {
        self.tokens.retain(|t| t != class);
    }

    pub fn to_attr(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Whether an element with this `class` attribute is still hidden.
pub fn is_concealed(class_attr: &str) -> bool {
    ClassList::parse(class_attr).contains(CONCEALED_CLASS)
}

/// The `class` attribute after the explanation has been clicked.
pub fn reveal_explanation(class_attr: &str) -> String {
    let mut classes = ClassList::parse(class_attr);
    classes.remove(CONCEALED_CLASS);
    classes.to_attr()
}
