use cfg_aliases::cfg_aliases;

fn main() {
    // The script doesn't depend on our code.
    println!("cargo:rerun-if-changed=build.rs");

    // Setup cfg aliases.
    cfg_aliases! {
        // Platforms
        apple: { target_vendor = "apple" },
        ios_simulator_x86: {
            all(target_os = "ios", any(target_arch = "x86", target_arch = "x86_64"))
        },

        // Graphics drivers
        opengl_driver: { any(not(apple), ios_simulator_x86, feature = "opengl") },
    }
}
