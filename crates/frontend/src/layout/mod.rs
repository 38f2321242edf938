//! Application shell: top bar, content area, footer

use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; font-family: Arial, sans-serif;">
            <TopBar />
            <main style="flex: 1;">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn TopBar() -> impl IntoView {
    view! {
        <header style="display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; border-bottom: 1px solid #e0e0e0;">
            <span style="font-size: 18px; font-weight: bold;">"Readme.ai"</span>
            <a
                href="https://github.com"
                target="_blank"
                rel="noopener"
                style="color: inherit; text-decoration: none;"
            >
                "GitHub"
            </a>
        </header>
    }
}

#[component]
#[allow(non_snake_case)]
fn Footer() -> impl IntoView {
    view! {
        <footer style="padding: 16px 24px; text-align: center; color: #666; font-size: 14px;">
            "Generates a README draft from any public GitHub repository."
        </footer>
    }
}
