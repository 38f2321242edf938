//! README generation - Form Component

use leptos::prelude::*;
use thaw::*;

use super::super::view_model::GeneratorVm;

#[component]
#[allow(non_snake_case)]
pub fn GeneratorForm(vm: GeneratorVm, on_generate: Callback<()>) -> impl IntoView {
    let is_pending = Signal::derive(move || vm.is_pending());
    let can_submit = Signal::derive(move || vm.can_submit());

    let submit_on_enter = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && can_submit.get() {
            ev.prevent_default();
            on_generate.run(());
        }
    };

    view! {
        <Flex vertical=true style="gap: 12px; max-width: 480px;">
            <div>
                <div style="margin-bottom: 4px; font-weight: 500;">"GitHub profile name"</div>
                <Input
                    value=vm.profile
                    placeholder="octocat"
                    disabled=is_pending
                    attr:style="width: 100%;"
                    on:keydown=submit_on_enter
                />
            </div>
            <div>
                <div style="margin-bottom: 4px; font-weight: 500;">"Repository name"</div>
                <Input
                    value=vm.repo
                    placeholder="hello-world"
                    disabled=is_pending
                    attr:style="width: 100%;"
                    on:keydown=submit_on_enter
                />
            </div>
            <div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_submit.get())
                    on_click=move |_| on_generate.run(())
                >
                    {move || if is_pending.get() { "Generating..." } else { "Generate README" }}
                </Button>
            </div>
        </Flex>
    }
}
