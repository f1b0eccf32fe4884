//! Binary entrypoint for the login frame program.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    desktop_app_login::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("login_app runs inside the shell's login frame; build it for wasm32 with the `csr` feature.");
}
