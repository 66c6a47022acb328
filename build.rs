fn main() {
    // Embedded images are picked up by rust-embed at compile time.
    println!("cargo:rerun-if-changed=assets/images");

    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "Profile Card");
        res.set("FileDescription", "Reusable profile cards composed in GPUI");
        res.compile().expect("Failed to compile Windows resources");
    }
}
