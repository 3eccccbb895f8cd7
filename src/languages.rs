//! Built-in brushes. These will tag text with the following categories:
//!
//! comment - a line comment
//! string - a single quoted character literal
//! keyword - a keyword for that language
//! type - a built-in datatype name
//! constant - special words such as booleans
//!
//! These are deliberately small: a brush is a handful of word lists and two
//! structural patterns, anything fancier belongs to a real parser.

use crate::config::BrushConfig;

/// Every brush shipped with this crate
pub fn builtin() -> Vec<BrushConfig> {
    vec![haskell()]
}

/// Obtain the haskell brush configuration
pub fn haskell() -> BrushConfig {
    BrushConfig {
        name: "haskell".to_string(),
        aliases: owned(&["hs"]),
        keywords: owned(&[
            "as", "case", "class", "of", "data", "default", "deriving", "do", "forall",
            "foreign", "hiding", "if", "then", "else", "import", "infix", "infixl", "infixr",
            "instance", "let", "in", "mdo", "module", "newtype", "qualified", "type", "where",
        ]),
        datatypes: owned(&[
            "Char", "String", "Bool", "Num", "Int", "Integer", "Float", "Eq", "Ord", "Read",
            "Integral", "Fractional",
        ]),
        special: owned(&["True", "False", "otherwise", "not"]),
        line_comment: Some("--".to_string()),
        char_literal: true,
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
