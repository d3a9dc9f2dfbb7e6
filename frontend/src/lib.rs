pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use crate::components::GradientBackground;
use crate::pages::wheel::SwirlWheel;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <GradientBackground>
            <div class="mx-auto">
                <SwirlWheel />
            </div>
        </GradientBackground>
    }
}
