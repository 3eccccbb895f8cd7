use brushwork::{segments, Category, Registry, Segment};
use lliw::Fg;
use std::time::Instant;

pub static CODE: &str = "\
-- | Full Unicode support: 你好
module Main where

data Shape = Circle Float | Square Float
    deriving (Eq, Read)

area :: Shape -> Float
area shape = case shape of
    Circle r -> pi * r * r
    Square s -> s * s -- the easy one

main = if not True then print 'a' else print '\\''
";

fn main() {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let language = args.next().unwrap_or_else(|| "haskell".to_string());
    let code = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("failed to read {path}: {e}");
                std::process::exit(1);
            }
        },
        None => CODE.to_string(),
    };

    let registry = match Registry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let Some(rules) = registry.get(&language) else {
        let known = registry.aliases().collect::<Vec<_>>().join(", ");
        eprintln!("unknown language '{language}', try one of: {known}");
        std::process::exit(1);
    };

    let start = Instant::now();
    let spans = rules.tag(&code);
    log::info!("tagged {} spans in {:?}", spans.len(), start.elapsed());

    for token in segments(&code, &spans) {
        match token {
            Segment::Tagged(text, kind) => print!("{}{text}{}", colour(kind), Fg::Reset),
            Segment::Plain(text) => print!("{text}"),
        }
    }
    println!();
}

fn colour(kind: Category) -> Fg {
    match kind {
        Category::Comment => Fg::Rgb(108, 107, 90),
        Category::String => Fg::Rgb(54, 161, 102),
        Category::Keyword => Fg::Rgb(91, 157, 72),
        Category::Type => Fg::Rgb(165, 152, 13),
        Category::Constant => Fg::Rgb(157, 108, 124),
    }
}
