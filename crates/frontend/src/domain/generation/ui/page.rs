//! README generation - Page Component
//!
//! Owns the request state and wires the form to the client: accept a
//! submission (unless one is in flight), run it, commit exactly one terminal
//! outcome.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::super::model::GenerationClient;
use super::super::state::SubmissionInput;
use super::super::view_model::GeneratorVm;
use super::artifact::ArtifactPanel;
use super::form::GeneratorForm;
use crate::config::ApiConfig;
use crate::shared::notifications::NotificationService;

#[component]
#[allow(non_snake_case)]
pub fn GeneratorPage() -> impl IntoView {
    let vm = GeneratorVm::new();
    let notify =
        use_context::<NotificationService>().expect("NotificationService context not found");
    let config = use_context::<ApiConfig>().expect("ApiConfig context not found");
    let client = StoredValue::new(GenerationClient::new(&config));

    let handle_generate = Callback::new(move |_: ()| {
        let input = match SubmissionInput::parse(&vm.profile.get(), &vm.repo.get()) {
            Ok(input) => input,
            Err(e) => {
                // Rejected at the input boundary; the request state stays
                // untouched.
                notify.error(e.message());
                return;
            }
        };

        // At most one submission in flight; a second attempt is a no-op.
        let Some(token) = vm.machine.try_update(|m| m.begin()).flatten() else {
            return;
        };

        let client = client.get_value();
        spawn_local(async move {
            let outcome = client.submit(&input).await;
            if let Err(info) = &outcome {
                log::warn!("generation failed ({}): {}", info.cause.as_str(), info.message);
                notify.error(info.message.clone());
            }
            // try_update drops the outcome if the page was torn down while
            // the request was in flight.
            vm.machine.try_update(|m| m.settle(token, outcome));
        });
    });

    view! {
        <div style="padding: 24px; max-width: 960px; margin: 0 auto;">
            <h1 style="font-size: 24px; font-weight: bold; margin-bottom: 16px;">
                "README Generator"
            </h1>
            <GeneratorForm vm=vm on_generate=handle_generate />
            <ArtifactPanel
                artifact=Signal::derive(move || vm.artifact())
                epoch=Signal::derive(move || vm.epoch())
            />
        </div>
    }
}
