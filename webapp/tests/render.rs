use tailwind_test::app::App;
use tailwind_test::components::counter::CounterScreen;
use yew::ServerRenderer;

async fn render_screen() -> String {
    ServerRenderer::<CounterScreen>::new()
        .hydratable(false)
        .render()
        .await
}

#[tokio::test]
async fn initial_count_is_zero() {
    let html = render_screen().await;
    assert!(html.contains("Count: 0"), "{html}");
}

#[tokio::test]
async fn static_labels_are_present() {
    let html = render_screen().await;
    for label in [
        "Tailwind Test ✅",
        "Click Me!",
        "Reset",
        "🎨 Colors Working",
        "📏 Spacing Working",
        "✨ Styles Working",
    ] {
        assert!(html.contains(label), "missing {label:?} in {html}");
    }
}

#[tokio::test]
async fn controls_are_buttons_with_press_feedback() {
    let html = render_screen().await;
    assert_eq!(html.matches("<button").count(), 2);
    assert!(html.contains("active:bg-blue-600"));
    assert!(html.contains("active:bg-red-600"));
}

#[tokio::test]
async fn badges_render_in_order() {
    let html = render_screen().await;
    let colors = html.find("Colors Working").unwrap();
    let spacing = html.find("Spacing Working").unwrap();
    let styles = html.find("Styles Working").unwrap();
    assert!(colors < spacing && spacing < styles);
}

#[tokio::test]
async fn app_hosts_the_screen_in_a_page_shell() {
    let html = ServerRenderer::<App>::new()
        .hydratable(false)
        .render()
        .await;
    assert!(html.starts_with("<main"), "{html}");
    assert!(html.contains("Count: 0"));
}

/// Returns the opening tag of the `<button>` whose content contains `label`.
fn button_tag<'a>(html: &'a str, label: &str) -> &'a str {
    let label_at = html.find(label).unwrap();
    let start = html[..label_at].rfind("<button").unwrap();
    let end = start + html[start..].find('>').unwrap();
    &html[start..=end]
}

#[tokio::test]
async fn each_control_carries_its_own_color() {
    let html = render_screen().await;

    let increment = button_tag(&html, "Click Me!");
    assert!(increment.contains("bg-blue-500"), "{increment}");
    assert!(increment.contains("active:bg-blue-600"), "{increment}");
    assert!(!increment.contains("bg-red-500"), "{increment}");

    let reset = button_tag(&html, ">Reset<");
    assert!(reset.contains("bg-red-500"), "{reset}");
    assert!(reset.contains("active:bg-red-600"), "{reset}");
    assert!(!reset.contains("bg-blue-500"), "{reset}");
}
