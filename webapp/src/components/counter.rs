use yew::prelude::*;

use crate::model::{Counter, CounterAction};
use crate::styles::{self, Badge, FEATURE_BADGES};

pub struct CounterScreen {
    counter: Counter,
}

pub enum Msg {
    Increment,
    Reset,
}

impl From<&Msg> for CounterAction {
    fn from(msg: &Msg) -> Self {
        match msg {
            Msg::Increment => CounterAction::Increment,
            Msg::Reset => CounterAction::Reset,
        }
    }
}

impl Component for CounterScreen {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CounterScreen { counter: Counter::new() }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let changed = self.counter.apply(CounterAction::from(&msg));
        match msg {
            Msg::Increment => log::debug!("count incremented to {}", self.counter.count()),
            Msg::Reset => log::debug!("count reset (changed: {changed})"),
        }
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onincrement = ctx.link().callback(|_| Msg::Increment);
        let onreset = ctx.link().callback(|_| Msg::Reset);

        html! {
            <div class={styles::SCREEN}>
                <div class={styles::CARD}>
                    <h1 class={styles::TITLE}>{ "Tailwind Test ✅" }</h1>
                    <p class={styles::COUNT} aria-live="polite">{ self.counter.label() }</p>
                    <button type="button" class={styles::INCREMENT_BUTTON} onclick={onincrement}>
                        <span class={styles::BUTTON_LABEL}>{ "Click Me!" }</span>
                    </button>
                    <button type="button" class={styles::RESET_BUTTON} onclick={onreset}>
                        <span class={styles::BUTTON_LABEL}>{ "Reset" }</span>
                    </button>
                </div>
                <div class={styles::BADGES}>
                    { for FEATURE_BADGES.iter().map(badge) }
                </div>
            </div>
        }
    }
}

fn badge(badge: &Badge) -> Html {
    html! {
        <p class={badge.class}>{ badge.text }</p>
    }
}
