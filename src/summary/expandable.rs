/// Truncated/full view over a list of items with a single toggle.
///
/// `visible_items` and `label` are pure reads of the current state;
/// `toggle` is the only mutator.
#[derive(Clone, Debug)]
pub struct ExpandableList<T> {
    items: Vec<T>,
    default_items_to_show: usize,
    items_label: Option<String>,
    expanded: bool,
}

impl<T> ExpandableList<T> {
    pub fn new(items: Vec<T>, default_items_to_show: usize) -> Self {
        Self { items, default_items_to_show, items_label: None, expanded: false }
    }

    pub fn with_items_label(mut self, label: impl Into<String>) -> Self {
        self.items_label = Some(label.into());
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The control only exists when there is something hidden to reveal.
    pub fn needs_toggle(&self) -> bool {
        self.items.len() > self.default_items_to_show
    }

    pub fn visible_items(&self) -> &[T] {
        if self.expanded || !self.needs_toggle() {
            &self.items
        } else {
            &self.items[..self.default_items_to_show]
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn label(&self) -> String {
        if self.expanded {
            return "Show Less".to_string();
        }
        match self.items_label.as_deref() {
            Some(l) if !l.is_empty() => format!("Show All {} {}", self.items.len(), l),
            _ => "Show All".to_string(),
        }
    }
}
