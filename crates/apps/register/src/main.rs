//! Binary entrypoint for the registration frame program.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    desktop_app_register::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("register_app runs inside the shell's register frame; build it for wasm32 with the `csr` feature.");
}
