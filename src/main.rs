//! CSR entry point: installs the panic hook and console logger, then mounts
//! the root `App` component onto `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(askboard::app::App);
    }
}
