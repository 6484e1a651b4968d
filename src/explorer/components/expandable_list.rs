use maud::{Markup, Render, html};

use crate::explorer::components::svg_assets::icon_chevron_right;
use crate::summary::expandable::ExpandableList;

/// Render the visible slice of `list` plus its toggle control.
///
/// The wrapper class only applies once the list overflows its default count.
pub fn expandable_list<T: Render>(
    list: &ExpandableList<T>,
    content_wrapper_class: Option<&str>,
) -> Markup {
    let rows = html! {
        @for item in list.visible_items() {
            div class="expandable-item" { (item) }
        }
    };
    let chevron_class = if list.is_expanded() { "chevron rotate-90" } else { "chevron" };

    html! {
        @if let (Some(class), true) = (content_wrapper_class, list.needs_toggle()) {
            div class=(format!("expandable-body {class}")) { (rows) }
        } @else {
            (rows)
        }
        @if list.needs_toggle() {
            div class="expandable-toggle" {
                button type="button" class="link text" aria-expanded=(if list.is_expanded() { "true" } else { "false" }) {
                    span class="body-small medium" { (list.label()) }
                    (icon_chevron_right(chevron_class))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Markup> {
        (0..n).map(|i| html! { span { (format!("item-{i}")) } }).collect()
    }

    #[test]
    fn collapsed_list_renders_default_items_and_control() {
        let list = ExpandableList::new(items(7), 5).with_items_label("Objects");
        let out = expandable_list(&list, Some("scroll")).into_string();
        assert!(out.contains("item-4"));
        assert!(!out.contains("item-5"));
        assert!(out.contains("Show All 7 Objects"));
        assert!(out.contains("expandable-body scroll"));
    }

    #[test]
    fn expanded_list_renders_everything() {
        let mut list = ExpandableList::new(items(7), 5).with_items_label("Objects");
        list.toggle();
        let out = expandable_list(&list, None).into_string();
        assert!(out.contains("item-6"));
        assert!(out.contains("Show Less"));
        assert!(out.contains("rotate-90"));
    }

    #[test]
    fn short_list_has_no_control() {
        let list = ExpandableList::new(items(2), 5);
        let out = expandable_list(&list, Some("scroll")).into_string();
        assert!(out.contains("item-1"));
        assert!(!out.contains("expandable-toggle"));
        assert!(!out.contains("scroll"));
    }
}
