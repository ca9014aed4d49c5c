#[cfg(feature = "csr")]
fn main() {
    use leptos::prelude::*;
    use portfolio_site::app::App;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
