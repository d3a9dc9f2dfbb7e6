use yew::prelude::*;
use web_sys::HtmlInputElement;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub is_spinning: bool,
    pub winner: Option<String>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if props.is_spinning {
        return html! {
            <div class="mt-6 text-center text-lg font-semibold text-gray-600 dark:text-gray-300 animate-pulse">
                {"Spinning…"}
            </div>
        };
    }

    match &props.winner {
        Some(name) => html! {
            <div class="mt-6 mb-2 flex flex-col items-center justify-center">
                <div class={classes!(
                    "flex",
                    "items-center",
                    "justify-center",
                    "px-6",
                    "py-4",
                    "rounded-xl",
                    "bg-gradient-to-r",
                    "from-pink-400",
                    "to-yellow-400",
                    "border-2",
                    "border-pink-300",
                    "text-white",
                    "font-bold",
                    "text-xl",
                    "shadow-lg",
                    "animate-bounce"
                )}>
                    <span>{format!("Winner: {} 🎉", name)}</span>
                </div>
            </div>
        },
        None => html! {},
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning…" } else { "Spin" };

    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-pink-500 to-yellow-400 hover:from-pink-600 hover:to-yellow-500 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={props.is_spinning}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-pink-300 focus:ring-opacity-50 bg-transparent"
            >
                {button_text}
            </button>
        </div>
    }
}

// Labeled range slider
#[derive(Properties, PartialEq)]
pub struct ControlSliderProps {
    pub label: AttrValue,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    #[prop_or(0)]
    pub precision: usize,
    pub oninput: Callback<f64>,
}

#[function_component(ControlSlider)]
pub fn control_slider(props: &ControlSliderProps) -> Html {
    let oninput = {
        let on_change = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value_as_number();
            if value.is_finite() {
                on_change.emit(value);
            }
        })
    };

    html! {
        <label class="block">
            <div class="flex justify-between text-sm font-medium text-gray-900 dark:text-white">
                <span>{props.label.clone()}</span>
                <span class="tabular-nums">{format!("{:.*}", props.precision, props.value)}</span>
            </div>
            <input
                type="range"
                class="mt-2 w-full accent-pink-500"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.value.to_string()}
                {oninput}
            />
        </label>
    }
}
