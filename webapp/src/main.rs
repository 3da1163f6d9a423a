use web_sys::console;

fn main() {
    if let Err(err) = tailwind_test::run() {
        console::error_1(&format!("tailwind-test failed to start: {err}").into());
    }
}
