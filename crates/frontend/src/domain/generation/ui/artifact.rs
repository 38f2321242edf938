//! README generation - Artifact Panel
//!
//! Shows a settled artifact in one of two modes (raw markdown or rendered
//! preview) and carries the export actions. Rendered only while an artifact
//! exists; switching modes never touches the artifact itself.

use leptos::prelude::*;
use thaw::*;

use super::super::state::Artifact;
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::download::download_markdown;
use crate::shared::markdown;
use crate::shared::notifications::NotificationService;

/// The artifact is always a README, so the export name is fixed.
const EXPORT_FILENAME: &str = "README.md";

/// Display modes of the panel. A closed enum keeps illegal tab indices
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Raw,
    Preview,
}

#[component]
#[allow(non_snake_case)]
pub fn ArtifactPanel(
    /// Latest generated artifact; `None` renders nothing.
    #[prop(into)] artifact: Signal<Option<Artifact>>,
    /// Bumped for every accepted submission; a new one resets the mode.
    #[prop(into)] epoch: Signal<u64>,
) -> impl IntoView {
    let mode = RwSignal::new(ViewMode::Raw);
    let notify =
        use_context::<NotificationService>().expect("NotificationService context not found");

    // A fresh generation always opens in the raw view.
    Effect::new(move |prev: Option<u64>| {
        let current = epoch.get();
        if prev.is_some_and(|p| p != current) {
            mode.set(ViewMode::Raw);
        }
        current
    });

    let tab_style = move |tab: ViewMode| {
        format!(
            "padding: 8px 16px; border: none; border-radius: 4px 4px 0 0; cursor: pointer; font-weight: 500; {}",
            if mode.get() == tab {
                "background: #2196F3; color: white;"
            } else {
                "background: #f5f5f5; color: #666;"
            }
        )
    };

    view! {
        {move || {
            artifact
                .get()
                .map(|artifact| {
                    let raw = artifact.markdown.clone();
                    let preview_html = markdown::to_html(&artifact.markdown);
                    let copy_text = artifact.markdown.clone();
                    let download_text = artifact.markdown;

                    view! {
                        <div style="margin-top: 24px;">
                            <Flex
                                justify=FlexJustify::SpaceBetween
                                align=FlexAlign::Center
                                style="border-bottom: 2px solid #ddd; margin-bottom: 12px;"
                            >
                                <Flex style="gap: 4px;">
                                    <button
                                        on:click=move |_| mode.set(ViewMode::Raw)
                                        style=move || tab_style(ViewMode::Raw)
                                    >
                                        "Raw markdown"
                                    </button>
                                    <button
                                        on:click=move |_| mode.set(ViewMode::Preview)
                                        style=move || tab_style(ViewMode::Preview)
                                    >
                                        "Preview"
                                    </button>
                                </Flex>
                                <Space>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| {
                                            copy_to_clipboard(&copy_text, move |result| match result {
                                                Ok(()) => notify.success("README copied to clipboard"),
                                                Err(e) => notify.error(format!("Copy failed: {e}")),
                                            });
                                        }
                                    >
                                        "Copy"
                                    </Button>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| {
                                            match download_markdown(&download_text, EXPORT_FILENAME) {
                                                Ok(()) => notify.success("README.md downloaded"),
                                                Err(e) => notify.error(format!("Download failed: {e}")),
                                            }
                                        }
                                    >
                                        "Download"
                                    </Button>
                                </Space>
                            </Flex>
                            {move || match mode.get() {
                                ViewMode::Raw => {
                                    view! {
                                        <textarea
                                            readonly=true
                                            style="width: 100%; height: 400px; padding: 10px; font-family: monospace; font-size: 14px; box-sizing: border-box; resize: vertical;"
                                        >
                                            {raw.clone()}
                                        </textarea>
                                    }
                                        .into_any()
                                }
                                ViewMode::Preview => {
                                    view! {
                                        <div
                                            style="border: 1px solid #ccc; border-radius: 4px; padding: 10px 16px; height: 400px; overflow-y: auto;"
                                            inner_html=preview_html.clone()
                                        ></div>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    }
                })
        }}
    }
}
