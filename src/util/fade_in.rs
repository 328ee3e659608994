/// Hide the fade targets, then reveal them one by one `stagger_ms` apart.
pub fn run(stagger_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use super::dom::{query_all, set_style};
        use crate::state::fade::*;

        for (index, el) in query_all(FADE_SELECTOR).into_iter().enumerate() {
            set_style(&el, "opacity", HIDDEN_OPACITY);
            set_style(&el, "transform", HIDDEN_TRANSFORM);
            set_style(&el, "transition", FADE_TRANSITION);
            Timeout::new(reveal_delay_ms(index, stagger_ms), move || {
                set_style(&el, "opacity", SHOWN_OPACITY);
                set_style(&el, "transform", SHOWN_TRANSFORM);
            })
            .forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stagger_ms;
    }
}
