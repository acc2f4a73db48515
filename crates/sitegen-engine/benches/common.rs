// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`.\n\n- Bullet point\n- Another [item](/item)\n\n1. first\n2. second\n\n> quoted\n> text\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n![image](/img.png)\n\n";
    base.repeat(size)
}
