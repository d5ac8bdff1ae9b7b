// gl_triangle
// Shared cfg_aliases configuration for the library and its apps

fn main() {
    use cfg_aliases::cfg_aliases;

    cfg_aliases! {
        // Platform aliases
        wasm: { target_arch = "wasm32" },
        mobile: { any(target_os = "android", target_os = "ios") },
        desktop: { not(any(wasm, mobile)) },

        // Window backend: winit pump_events is desktop only
        winit_backend: { all(feature = "winit", desktop) },
    }
}
