use serde::Serialize;
use stdlib_tour::defrag::{defrag, defrag_strict, Defragmented};

#[derive(Serialize)]
struct DefragOutput<'a> {
    original: &'a str,
    #[serde(flatten)]
    parts: &'a Defragmented,
}

pub fn run(url: &str, strict: bool, json: bool) -> anyhow::Result<u8> {
    let parts = if strict { defrag_strict(url)? } else { defrag(url) };

    if json {
        let out = DefragOutput {
            original: url,
            parts: &parts,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("original: {}", url);
        println!("url: {}", parts.url);
        println!("fragment: {}", parts.fragment);
    }

    Ok(0)
}
