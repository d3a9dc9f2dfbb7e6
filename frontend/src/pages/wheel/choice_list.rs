use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::hooks::use_choices::ChoicesHandle;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ChoiceEditorProps {
    pub handle: ChoicesHandle,
}

#[function_component(ChoiceEditor)]
pub fn choice_editor(props: &ChoiceEditorProps) -> Html {
    let input_ref = use_node_ref();
    let handle = &props.handle;

    let onsubmit = {
        let input_ref = input_ref.clone();
        let add = handle.add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                // Rejected text stays in the box next to its error
                if add.emit(input.value()) {
                    input.set_value("");
                }
            }
        })
    };

    let items = if handle.choices.is_empty() {
        html! {
            <li class="py-2 opacity-70">{"No choices yet. Add some!"}</li>
        }
    } else {
        handle
            .choices
            .as_slice()
            .iter()
            .enumerate()
            .map(|(idx, choice)| {
                let remove = handle.remove.clone();
                let onclick = Callback::from(move |_: MouseEvent| remove.emit(idx));
                html! {
                    <li key={format!("{}-{}", idx, choice)} class="flex items-center justify-between py-2">
                        <span class={styles::TEXT_BODY}>{choice.clone()}</span>
                        <button
                            title="remove"
                            aria-label="remove"
                            class={styles::BUTTON_ICON}
                            {onclick}
                        >
                            {"✕"}
                        </button>
                    </li>
                }
            })
            .collect::<Html>()
    };

    let on_clear = {
        let clear = handle.clear.clone();
        Callback::from(move |_: MouseEvent| clear.emit(()))
    };
    let on_shuffle = {
        let shuffle = handle.shuffle.clone();
        Callback::from(move |_: MouseEvent| shuffle.emit(()))
    };

    html! {
        <div class={styles::CARD}>
            <h2 class={styles::TEXT_H3}>{"Choices"}</h2>
            <form class="mt-4 flex gap-2" {onsubmit}>
                <input
                    ref={input_ref}
                    type="text"
                    placeholder="Add a choice"
                    class={if handle.error.is_empty() { styles::INPUT } else { styles::INPUT_ERROR }}
                />
                <button type="submit" class={styles::BUTTON_PRIMARY}>
                    {"Add"}
                </button>
            </form>
            if !handle.error.is_empty() {
                <p class={styles::TEXT_ERROR}>{handle.error.clone()}</p>
            }
            <ul class="mt-4 divide-y divide-gray-200 dark:divide-gray-700">
                {items}
            </ul>
            <div class="mt-4 flex gap-2">
                <button class={styles::BUTTON_SECONDARY} onclick={on_shuffle}>
                    {"Shuffle"}
                </button>
                <button class={styles::BUTTON_DANGER} onclick={on_clear}>
                    {"Clear"}
                </button>
            </div>
        </div>
    }
}
