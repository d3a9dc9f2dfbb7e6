use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Cream candy-shop backdrop behind the wheel page.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class="relative min-h-screen">
            <div class="fixed inset-0 bg-gradient-to-b from-[#fff9e8] to-[#fde7ec] dark:from-gray-950 dark:to-gray-900 -z-50"></div>
            <div class="relative z-0">
                {props.children.clone()}
            </div>
        </div>
    }
}
