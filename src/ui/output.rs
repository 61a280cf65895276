use owo_colors::OwoColorize;

pub fn success(label: &str) {
    println!("✅ {}", label.green());
}

pub fn error(label: &str) {
    eprintln!("❌ {}", label.red());
}

pub fn info(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}
