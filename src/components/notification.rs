use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// Never returns 0, which would read as "nothing shown yet".
fn next_generation(generation: u32) -> u32 {
    generation % u32::MAX + 1
}

/// Generation 0 is the initial mount, before any toast was shown.
fn dismiss_after(generation: u32) -> Option<u32> {
    (generation > 0).then_some(config::TOAST_DURATION_MS)
}

/// Handle to the page's transient toast. Showing a new message restarts the
/// dismiss timer.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    message: UseStateHandle<Option<String>>,
    generation: UseStateHandle<u32>,
}

impl ToastHandle {
    pub fn show(&self, text: impl Into<String>) {
        self.message.set(Some(text.into()));
        self.generation.set(next_generation(*self.generation));
    }

    pub fn message(&self) -> Option<String> {
        (*self.message).clone()
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let message = use_state(|| None::<String>);
    let generation = use_state(|| 0u32);

    {
        let message = message.clone();
        use_effect_with_deps(
            move |generation: &u32| {
                let timeout = dismiss_after(*generation).map(|delay| {
                    Timeout::new(delay, move || {
                        message.set(None);
                    })
                });
                // Dropping the Timeout cancels it, so an unmounted page never hears back.
                move || drop(timeout)
            },
            *generation,
        );
    }

    ToastHandle { message, generation }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="toast" role="status" aria-live="polite">
                {message}
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_dismiss_on_mount() {
        assert_eq!(dismiss_after(0), None);
    }

    #[test]
    fn every_show_schedules_a_fresh_dismiss() {
        let first = next_generation(0);
        let second = next_generation(first);
        assert_ne!(first, second);
        assert_eq!(dismiss_after(first), Some(config::TOAST_DURATION_MS));
        assert_eq!(dismiss_after(second), Some(3_000));
    }

    #[test]
    fn generation_skips_zero_when_it_wraps() {
        assert_eq!(next_generation(u32::MAX - 1), u32::MAX);
        assert_eq!(next_generation(u32::MAX), 1);
    }
}
