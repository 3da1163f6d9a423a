use yew::prelude::*;
use crate::components::counter::CounterScreen;
use crate::styles;


#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class={styles::APP_SHELL}>
            <CounterScreen />
        </main>
    }
}
