//! Filter button bar

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Blue,
    Yellow,
    Gray,
}

/// One choice of a filter: label, the value it selects and its highlight color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption<V> {
    pub label: &'static str,
    pub value: V,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub label: &'static str,
    /// Highlight color, gray unless this button is the selected one
    pub color: Color,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar(pub Vec<FilterButton>);

impl FilterBar {
    /// One button per option; the option equal to `selected` is highlighted
    pub fn new<V: PartialEq>(options: &[FilterOption<V>], selected: &V) -> Self {
        let buttons = options
            .iter()
            .map(|option| {
                let selected = option.value == *selected;
                FilterButton {
                    label: option.label,
                    color: if selected { option.color } else { Color::Gray },
                    selected,
                }
            })
            .collect();
        Self(buttons)
    }

    pub fn selected(&self) -> Option<&FilterButton> {
        self.0.iter().find(|b| b.selected)
    }
}

impl fmt::Display for FilterBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self
            .0
            .iter()
            .map(|b| {
                if b.selected {
                    format!("[{}]", b.label)
                } else {
                    format!(" {} ", b.label)
                }
            })
            .collect::<Vec<_>>();
        write!(f, "{}", labels.join(" "))
    }
}

/// Hand the value of the option labelled `label` to `on_select`
///
/// Returns `false` when no option carries that label.
pub fn choose<V: Clone>(
    options: &[FilterOption<V>],
    label: &str,
    on_select: impl FnOnce(V),
) -> bool {
    match options.iter().find(|o| o.label.eq_ignore_ascii_case(label)) {
        Some(option) => {
            on_select(option.value.clone());
            true
        }
        None => false,
    }
}
