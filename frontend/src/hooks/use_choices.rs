use shared::choices::ChoiceList;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ChoicesHandle {
    pub choices: ChoiceList,
    pub error: String,
    /// Returns whether the text was accepted.
    pub add: Callback<String, bool>,
    pub remove: Callback<usize>,
    pub clear: Callback<()>,
    pub shuffle: Callback<()>,
}

#[hook]
pub fn use_choices() -> ChoicesHandle {
    let choices = use_state(ChoiceList::default);
    let error = use_state(String::new);

    let add = {
        let choices = choices.clone();
        let error = error.clone();
        Callback::from(move |text: String| {
            let mut next = (*choices).clone();
            match next.add(&text) {
                Ok(_) => {
                    choices.set(next);
                    error.set(String::new());
                    true
                }
                Err(e) => {
                    log::debug!("Rejected choice {:?}: {}", text, e.code);
                    let message = e.message.map(|m| m.to_string()).unwrap_or_default();
                    error.set(message);
                    false
                }
            }
        })
    };

    let remove = {
        let choices = choices.clone();
        Callback::from(move |index: usize| {
            let mut next = (*choices).clone();
            if next.remove(index).is_some() {
                choices.set(next);
            }
        })
    };

    let clear = {
        let choices = choices.clone();
        let error = error.clone();
        Callback::from(move |_| {
            choices.set(ChoiceList::empty());
            error.set(String::new());
        })
    };

    let shuffle = {
        let choices = choices.clone();
        Callback::from(move |_| {
            let mut next = (*choices).clone();
            next.shuffle();
            choices.set(next);
        })
    };

    ChoicesHandle {
        choices: (*choices).clone(),
        error: (*error).clone(),
        add,
        remove,
        clear,
        shuffle,
    }
}
