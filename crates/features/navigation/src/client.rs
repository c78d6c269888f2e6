use crate::model::{NAV_LINKS, NavState};
use dioxus::prelude::*;
use folio_kernel::prelude::SiteConfig;
use std::fmt;

const SCROLL_SCRIPT: &str = r"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener('scroll', report, { passive: true });
    report();
    await dioxus.recv();
    window.removeEventListener('scroll', report);
";

/// Live handle on the page scroll listener. [`close`](Self::close) removes it.
#[derive(Clone)]
pub struct ScrollSubscription {
    eval: document::Eval,
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription").finish_non_exhaustive()
    }
}

impl ScrollSubscription {
    #[must_use]
    pub fn open() -> Self {
        Self { eval: document::eval(SCROLL_SCRIPT) }
    }

    /// Next vertical offset, or `None` once the listener is gone.
    pub async fn next(&mut self) -> Option<f64> {
        self.eval.recv::<f64>().await.ok()
    }

    pub fn close(&self) {
        if let Err(error) = self.eval.send(true) {
            tracing::debug!(%error, "Scroll listener already closed");
        }
    }
}

#[component]
pub fn NavBar(brand: String, actions: Element) -> Element {
    let config = use_context::<SiteConfig>();
    let mut nav = use_signal(|| NavState::new(&config.navigation));
    let subscription = use_hook(ScrollSubscription::open);

    let listener = subscription.clone();
    use_future(move || {
        let mut listener = listener.clone();
        async move {
            while let Some(offset) = listener.next().await {
                if nav.peek().would_flip(offset) {
                    nav.write().observe_scroll(offset);
                }
            }
        }
    });
    use_drop(move || subscription.close());

    let state = nav.read().clone();

    rsx! {
        nav { class: state.bar_class(),
            div { class: "nav__inner",
                a { class: "nav__brand", href: "#", onclick: move |_| nav.write().close_menu(), "{brand}" }
                div { class: "nav__links",
                    for link in NAV_LINKS {
                        a { key: "{link.anchor}", href: link.href(), "{link.label}" }
                    }
                    {actions.clone()}
                }
                button {
                    class: "nav__toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| nav.write().toggle_menu(),
                    if state.menu_open() { "✕" } else { "☰" }
                }
            }
            if state.menu_open() {
                div { class: "nav__mobile",
                    for link in NAV_LINKS {
                        a {
                            key: "{link.anchor}",
                            href: link.href(),
                            onclick: move |_| nav.write().close_menu(),
                            "{link.label}"
                        }
                    }
                    {actions}
                }
            }
        }
    }
}
