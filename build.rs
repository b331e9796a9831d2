use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=tailwind.css");
    println!("cargo:rerun-if-changed=tailwind.config.js");
    println!("cargo:rerun-if-changed=src/ui");
    println!("cargo:rerun-if-env-changed=YEG_SKIP_TAILWIND");

    // The committed assets/tailwind.css is used as-is when this is set
    if std::env::var_os("YEG_SKIP_TAILWIND").is_some() {
        return;
    }

    // Run tailwindcss to regenerate CSS from the classes used in src/ui
    let output = Command::new("npx")
        .arg("tailwindcss")
        .args(["-i", "tailwind.css", "-o", "assets/tailwind.css", "--minify"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output();

    match output {
        Ok(output) if !output.status.success() => {
            println!("cargo:warning=Failed to generate Tailwind CSS, using committed assets/tailwind.css");
            println!(
                "cargo:warning=STDERR: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(_) => {}
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {}", e);
        }
    }
}
