use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::choices::ChoiceList;
use shared::shared_wheel_game::{SpinEngine, SpinEvent};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::pages::wheel::wheel_canvas::{paint_wheel, WheelFrame};

#[derive(Clone)]
pub struct SpinHandle {
    pub is_spinning: bool,
    pub winner: Option<String>,
    /// Takes the spin power.
    pub spin: Callback<f64>,
}

// Re-arms itself every frame until the handle is dropped.
fn run_frame_loop(handle: Rc<RefCell<Option<AnimationFrame>>>, on_frame: Rc<dyn Fn()>) {
    let next_handle = handle.clone();
    let frame = request_animation_frame(move |_timestamp| {
        on_frame();
        run_frame_loop(next_handle, on_frame);
    });
    *handle.borrow_mut() = Some(frame);
}

/// Drives the wheel: one `tick` per display frame, then a repaint.
///
/// `friction` is shared with the slider and read on every tick.
#[hook]
pub fn use_spin_engine(
    canvas_ref: NodeRef,
    choices: ChoiceList,
    friction: Rc<RefCell<f64>>,
    dpr: f64,
) -> SpinHandle {
    let engine = use_mut_ref(SpinEngine::default);
    let needs_paint = use_mut_ref(|| true);
    let is_spinning = use_state(|| false);
    let winner = use_state(|| None::<String>);

    // Segments are a snapshot of the choice list, rebuilt on every change
    {
        let engine = engine.clone();
        use_effect_with(choices, move |choices| {
            engine.borrow_mut().set_choices(choices.as_slice());
            || ()
        });
    }

    {
        let engine = engine.clone();
        let needs_paint = needs_paint.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();

        use_effect_with((), move |_| {
            let frame_handle = Rc::new(RefCell::new(None));

            let on_frame: Rc<dyn Fn()> = Rc::new(move || {
                let friction = *friction.borrow();
                let event = engine.borrow_mut().tick(friction);

                if let Some(SpinEvent::Ended { winner: name }) = event {
                    is_spinning.set(false);
                    winner.set(Some(name));
                    *needs_paint.borrow_mut() = true;
                }

                let engine = engine.borrow();
                if !engine.is_spinning() && !needs_paint.replace(false) {
                    return;
                }

                let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                    return;
                };
                let colors = engine.palette().colors();
                let frame = WheelFrame {
                    angle: engine.angle(),
                    velocity: engine.velocity(),
                    spinning: engine.is_spinning(),
                    colors: &colors,
                    dpr,
                };
                if let Err(e) = paint_wheel(&canvas, &frame) {
                    log::error!("Failed to paint wheel: {:?}", e);
                }
            });

            run_frame_loop(frame_handle.clone(), on_frame);

            move || {
                frame_handle.borrow_mut().take();
            }
        });
    }

    let spin = {
        let engine = engine.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        Callback::from(move |power: f64| {
            if engine.borrow_mut().start_spin(power).is_some() {
                is_spinning.set(true);
                winner.set(None);
            }
        })
    };

    SpinHandle {
        is_spinning: *is_spinning,
        winner: (*winner).clone(),
        spin,
    }
}
