use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::booking::fields::FormField;
use crate::config;

/// Drives the shake animation on an invalid field. Each trigger first clears the
/// animation, then re-applies it a moment later so repeated failures on the same
/// field still visibly shake.
type AttentionRequest = (Option<FormField>, u32);

/// Every trigger gets a fresh nonce, so asking for the same field twice still
/// changes the effect deps and re-runs the timer.
fn next_request((_, nonce): AttentionRequest, field: FormField) -> AttentionRequest {
    (Some(field), nonce.wrapping_add(1))
}

/// Field to re-apply the animation to and how long to wait first.
fn reapply_after((field, _): AttentionRequest) -> Option<(FormField, u32)> {
    field.map(|field| (field, config::ATTENTION_RETRIGGER_MS))
}

#[derive(Clone, PartialEq)]
pub struct AttentionHandle {
    active: UseStateHandle<Option<FormField>>,
    request: UseStateHandle<(Option<FormField>, u32)>,
}

impl AttentionHandle {
    pub fn trigger(&self, field: FormField) {
        self.active.set(None);
        self.request.set(next_request(*self.request, field));
    }

    pub fn is_active(&self, field: FormField) -> bool {
        *self.active == Some(field)
    }
}

#[hook]
pub fn use_attention() -> AttentionHandle {
    let active = use_state(|| None::<FormField>);
    let request = use_state(|| (None::<FormField>, 0u32));

    {
        let active = active.clone();
        use_effect_with_deps(
            move |request: &AttentionRequest| {
                let timeout = reapply_after(*request).map(|(field, delay)| {
                    Timeout::new(delay, move || {
                        active.set(Some(field));
                    })
                });
                move || drop(timeout)
            },
            *request,
        );
    }

    AttentionHandle { active, request }
}
