use contracts::system::auth::Navigator;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// [`Navigator`] backed by the router, for screens outside the shell.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        log::debug!("router navigate: {}", path);
        (self.navigate)(path, NavigateOptions::default());
    }
}

pub fn use_router_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    RouterNavigator {
        navigate: use_navigate(),
    }
}
