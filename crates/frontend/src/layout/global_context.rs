use crate::layout::tabs::tab_label_for_key;
use contracts::system::auth::Navigator;
use contracts::system::paths;
use leptos::prelude::*;
use web_sys::window;

/// Shell state: open tabs, active tab and sidebar visibility.
///
/// Tab keys are screen paths (`/accounting/invoices`, `/hr/employees/emp-002`,
/// ...), so navigating to a path and opening its tab are the same thing.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Opens the tab of the current address, then mirrors the active tab
    /// into the address bar.
    pub fn init_router_integration(&self) {
        let pathname = current_pathname();
        self.navigate(&initial_tab_key(&pathname));

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                // Only update URL if it actually changed
                if current_pathname() != active_key {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&active_key),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Used on sign-out so the next session starts from a clean shell.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for AppGlobalContext {
    fn navigate(&self, path: &str) {
        self.open_tab(path, tab_label_for_key(path));
    }
}

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Tab shown when the shell is entered at `pathname`.
fn initial_tab_key(pathname: &str) -> String {
    let path = pathname.trim_end_matches('/');
    if path.is_empty() || path == paths::LOGIN || path == paths::RESET_PASSWORD {
        paths::DASHBOARD.to_string()
    } else {
        path.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_key() {
        assert_eq!(initial_tab_key("/"), paths::DASHBOARD);
        assert_eq!(initial_tab_key(""), paths::DASHBOARD);
        assert_eq!(initial_tab_key("/login"), paths::DASHBOARD);
        assert_eq!(initial_tab_key("/accounting/invoices/"), paths::INVOICES);
        assert_eq!(initial_tab_key("/hr/employees/emp-002"), "/hr/employees/emp-002");
    }
}
