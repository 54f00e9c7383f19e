//! Sidebar with collapsible menu groups, one per business area.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use contracts::system::auth::Navigator;
use contracts::system::paths;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (path, label, icon); empty for a group that is itself a screen.
    items: Vec<(&'static str, &'static str, &'static str)>,
    /// Screen opened when a childless group is clicked.
    path: Option<&'static str>,
}

fn item(path: &'static str, icon_name: &'static str) -> (&'static str, &'static str, &'static str) {
    (path, tab_label_for_key(path), icon_name)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboard",
            label: "Tableau de bord",
            icon: "dashboard",
            items: vec![],
            path: Some(paths::DASHBOARD),
        },
        MenuGroup {
            id: "accounting",
            label: "Comptabilité",
            icon: "accounting",
            items: vec![
                item(paths::ACCOUNTS, "accounting"),
                item(paths::INVOICES, "invoices"),
                item(paths::PAYMENTS, "payments"),
                item(paths::PAYMENT_NEW, "plus"),
                item(paths::JOURNAL, "file-text"),
                item(paths::BUDGETS, "accounting"),
                item(paths::TAX_PAYMENTS, "payments"),
                item(paths::TAX_PAYMENT_NEW, "plus"),
            ],
            path: None,
        },
        MenuGroup {
            id: "hr",
            label: "Ressources humaines",
            icon: "users",
            items: vec![
                item(paths::EMPLOYEES, "users"),
                item(paths::DISCIPLINARY, "alert"),
                item(paths::COMPLIANCE, "alert"),
                item(paths::TRAININGS, "user"),
            ],
            path: None,
        },
        MenuGroup {
            id: "purchasing",
            label: "Achats",
            icon: "purchases",
            items: vec![
                item(paths::SUPPLIERS, "suppliers"),
                item(paths::PURCHASE_ORDERS, "orders"),
            ],
            path: None,
        },
        MenuGroup {
            id: "sales",
            label: "Ventes",
            icon: "customers",
            items: vec![
                item(paths::CUSTOMERS, "customers"),
                item(paths::SALES_ORDERS, "orders"),
            ],
            path: None,
        },
        MenuGroup {
            id: "inventory",
            label: "Stocks",
            icon: "inventory",
            items: vec![item(paths::STOCK, "inventory")],
            path: None,
        },
        MenuGroup {
            id: "billing",
            label: "Facturation",
            icon: "billing",
            items: vec![item(paths::SUBSCRIPTIONS, "billing")],
            path: None,
        },
        MenuGroup {
            id: "workflows",
            label: "Workflows",
            icon: "workflow",
            items: vec![item(paths::WORKFLOWS, "workflow")],
            path: None,
        },
    ]
}

/// Id of the group holding `path`, if any.
fn group_of(path: &str) -> Option<&'static str> {
    get_menu_groups()
        .into_iter()
        .find(|g| g.items.iter().any(|(p, _, _)| *p == path))
        .map(|g| g.id)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // The group of the tab opened at start-up is shown unfolded.
    let initial = ctx
        .active
        .get_untracked()
        .and_then(|active| group_of(&active))
        .map(|id| vec![id.to_string()])
        .unwrap_or_default();
    let expanded_groups = RwSignal::new(initial);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let has_children = !group.items.is_empty();
                let group_path = group.path;

                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                group_path.is_some()
                                    && ctx.active.get().as_deref() == group_path
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else if let Some(path) = group_path {
                                    ctx.navigate(path);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| {
                                let gid_exp = group_id_for_exp.clone();
                                view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                }
                            })}
                        </div>

                        {has_children.then(|| {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(path, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(path)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.navigate(path)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_title() {
        for group in get_menu_groups() {
            for (path, label, _) in group.items {
                assert_ne!(label, "Page", "no title for {}", path);
            }
        }
    }

    #[test]
    fn test_group_of() {
        assert_eq!(group_of(paths::INVOICES), Some("accounting"));
        assert_eq!(group_of(paths::EMPLOYEES), Some("hr"));
        assert_eq!(group_of(paths::STOCK), Some("inventory"));
        assert_eq!(group_of(paths::DASHBOARD), None);
        assert_eq!(group_of("/nowhere"), None);
    }
}
