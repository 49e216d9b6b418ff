//! Templates compiled into the binary.

/// A snippet shipped with hw (not modifiable by users, only shadowed).
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplate {
    /// The language identifier (e.g., "c", "rust").
    pub lang: &'static str,
    /// Snippet text, emitted verbatim.
    pub text: &'static str,
}

/// All built-in templates, sorted by identifier.
pub const BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        lang: "c",
        text: r#"#include <stdio.h>
int main(void) {
    puts("Hello, World!");
    return 0;
}
"#,
    },
    BuiltinTemplate {
        lang: "cpp",
        text: r#"#include <iostream>
int main() {
    std::cout << "Hello, World!\n";
}
"#,
    },
    BuiltinTemplate {
        lang: "python",
        text: r#"print("Hello, World!")
"#,
    },
    BuiltinTemplate {
        lang: "rust",
        text: r#"fn main() {
    println!("Hello, World!");
}
"#,
    },
];

/// Looks up a built-in template by language identifier.
pub fn get_builtin(lang: &str) -> Option<&'static BuiltinTemplate> {
    BUILTIN_TEMPLATES.iter().find(|t| t.lang == lang)
}

/// Returns true if the language has a built-in template.
pub fn is_builtin(lang: &str) -> bool {
    get_builtin(lang).is_some()
}
