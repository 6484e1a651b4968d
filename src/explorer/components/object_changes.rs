use maud::{Markup, html};

use crate::explorer::RenderOptions;
use crate::explorer::components::expandable_list::expandable_list;
use crate::explorer::components::links::{address_link, object_link};
use crate::explorer::components::svg_assets::icon_chevron_right;
use crate::explorer::components::transaction_card::{card_section, transaction_card};
use crate::explorer::consts::{CONTENT_WRAPPER_CLASS, OBJECTS_ITEMS_LABEL};
use crate::explorer::pages::common::split_object_type;
use crate::schemas::{Network, ObjectChange, ObjectSummary, OwnerKind};
use crate::summary::expandable::ExpandableList;
use crate::summary::grouping::{GroupedChanges, OwnerGroup, group_by_owner};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeCategory {
    Created,
    Mutated,
    Transferred,
}

impl ChangeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeCategory::Created => "Created",
            ChangeCategory::Mutated => "Updated",
            ChangeCategory::Transferred => "Transfer",
        }
    }
}

fn category_title(category: ChangeCategory) -> Markup {
    let color = match category {
        ChangeCategory::Created => "success-dark",
        _ => "steel-darker",
    };
    html! { span class=(format!("body semibold {color}")) { (category.label()) } }
}

fn detail_row(label: &str, value: Markup) -> Markup {
    html! {
        div class="object-detail-row" {
            span class="pbody medium steel-dark" { (label) }
            (value)
        }
    }
}

/// One object with its type path broken out behind a disclosure.
fn object_detail(change: &ObjectChange, network: Network) -> Markup {
    let (package, module, function) = split_object_type(&change.object_type);
    let module_target = format!("{package}?module={module}");

    html! {
        details class="object-detail" {
            summary class="object-detail-summary" {
                span class="object-detail-toggle" {
                    span class="pbody medium steel-dark" { "Object" }
                    (icon_chevron_right("chevron"))
                }
                (object_link(&change.object_id, None, network))
            }
            div class="object-detail-items" {
                (detail_row("Package", object_link(package, None, network)))
                (detail_row("Module", object_link(&module_target, Some(module), network)))
                (detail_row("Function", html! { span class="pbody medium steel-darker truncate" { (function) } }))
            }
        }
    }
}

fn object_list(group: &OwnerGroup<'_>, opts: &RenderOptions) -> Markup {
    let items: Vec<Markup> = group.objects().map(|c| object_detail(c, opts.network)).collect();
    let mut list =
        ExpandableList::new(items, opts.items_to_show).with_items_label(OBJECTS_ITEMS_LABEL);
    if opts.expand_all {
        list.toggle();
    }
    expandable_list(&list, Some(CONTENT_WRAPPER_CLASS))
}

/// "Owner" footer for a group; unknown owners get none.
fn owner_footer(group: &OwnerGroup<'_>, network: Network) -> Option<Markup> {
    let target = match group.kind() {
        OwnerKind::AddressOwner => address_link(&group.key, network),
        OwnerKind::ObjectOwner => object_link(&group.key, None, network),
        OwnerKind::Shared => object_link(&group.key, Some("Shared"), network),
        OwnerKind::Unknown => return None,
    };
    Some(html! {
        div class="card-footer-row" {
            span class="pbody medium steel-dark" { "Owner" }
            (target)
        }
    })
}

/// One card per owner, used for mutated and transferred objects.
fn owner_cards(
    category: ChangeCategory,
    grouped: &GroupedChanges<'_>,
    opts: &RenderOptions,
) -> Markup {
    html! {
        @for group in grouped {
            (transaction_card(
                html! { "Changes" },
                owner_footer(group, opts.network),
                card_section(Some(category_title(category)), object_list(group, opts)),
            ))
        }
    }
}

/// Created objects share a single card with a section per owner.
fn created_card(grouped: &GroupedChanges<'_>, opts: &RenderOptions) -> Markup {
    if grouped.is_empty() {
        return html! {};
    }
    let sections = html! {
        @for group in grouped {
            (card_section(Some(category_title(ChangeCategory::Created)), object_list(group, opts)))
        }
    };
    transaction_card(html! { "Changes" }, None, sections)
}

pub fn object_changes(summary: Option<&ObjectSummary>, opts: &RenderOptions) -> Markup {
    let Some(summary) = summary else {
        return html! {};
    };
    let created = group_by_owner(summary.created.as_deref());
    let mutated = group_by_owner(summary.mutated.as_deref());
    let transferred = group_by_owner(summary.transferred.as_deref());

    html! {
        (created_card(&created, opts))
        (owner_cards(ChangeCategory::Mutated, &mutated, opts))
        (owner_cards(ChangeCategory::Transferred, &transferred, opts))
    }
}
