mod choice_list;
pub mod wheel_canvas;
mod wheel_utils;

use yew::prelude::*;

use crate::config::{
    get_control_defaults, get_device_pixel_ratio, FRICTION_SLIDER, POWER_SLIDER,
    WHEEL_CANVAS_SIZE,
};
use crate::hooks::{use_choices, use_spin_engine};
use crate::styles;

use choice_list::ChoiceEditor;
use wheel_canvas::WheelCanvas;
use wheel_utils::{ControlSlider, ResultDisplay, SpinButton};

#[function_component(SwirlWheel)]
pub fn swirl_wheel() -> Html {
    let defaults = use_memo((), |_| get_control_defaults());
    let dpr = *use_memo((), |_| get_device_pixel_ratio());

    let canvas_ref = use_node_ref();
    let power = use_state(|| defaults.power);
    let friction = use_state(|| defaults.friction);
    // The frame loop reads this on every tick, the state above only drives the label
    let friction_ref = use_mut_ref(|| defaults.friction);

    let choices = use_choices();
    let spin = use_spin_engine(
        canvas_ref.clone(),
        choices.choices.clone(),
        friction_ref.clone(),
        dpr,
    );

    let on_power = {
        let power = power.clone();
        Callback::from(move |value: f64| power.set(value))
    };

    let on_friction = {
        let friction = friction.clone();
        Callback::from(move |value: f64| {
            *friction_ref.borrow_mut() = value;
            friction.set(value);
        })
    };

    let on_spin = {
        let start = spin.spin.clone();
        let power = *power;
        Callback::from(move |_: MouseEvent| start.emit(power))
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::LAYOUT}>
                <div class="flex flex-col items-center">
                    <h1 class={styles::TEXT_H1}>{"Swirl The Wheel"}</h1>
                    <p class={classes!(styles::TEXT_SMALL, "mt-1", "mb-4")}>
                        {"Add your choices, set the power and friction, and let the swirl decide."}
                    </p>
                    <WheelCanvas
                        canvas_ref={canvas_ref}
                        size={WHEEL_CANVAS_SIZE}
                        dpr={dpr}
                        is_spinning={spin.is_spinning}
                    />
                    <ResultDisplay is_spinning={spin.is_spinning} winner={spin.winner.clone()} />
                </div>
                <div class="flex flex-col gap-6">
                    <div class={classes!(styles::CARD, "space-y-4")}>
                        <ControlSlider
                            label="Power"
                            min={POWER_SLIDER.0}
                            max={POWER_SLIDER.1}
                            step={POWER_SLIDER.2}
                            value={*power}
                            oninput={on_power}
                        />
                        <ControlSlider
                            label="Friction"
                            min={FRICTION_SLIDER.0}
                            max={FRICTION_SLIDER.1}
                            step={FRICTION_SLIDER.2}
                            value={*friction}
                            precision={3}
                            oninput={on_friction}
                        />
                        <SpinButton is_spinning={spin.is_spinning} onclick={on_spin} />
                    </div>
                    <ChoiceEditor handle={choices} />
                </div>
            </div>
        </div>
    }
}
