//! Prompt annotations and number literals.
//!
//! Every piece of text shown to the user before a read is built here, so the
//! exact layout lives in one place:
//!
//! | query    | prompt                                              |
//! |----------|-----------------------------------------------------|
//! | bool     | `<prompt> [Y/n]: ` or `<prompt> [N/y]: `            |
//! | numeric  | `<prompt> [Min=<min>, Max=<max>]: `                 |
//! | numeric  | `<prompt> [Min=<min>, Max=<max>][<default>]: `      |
//! | menu     | `\nEnter the number of the item [<default>]: `      |
//! | menu     | `\n<prompt> [<default>]: `                          |

/// How a value is written inside a prompt or a diagnostic.
///
/// Integers print as usual. Floats keep one decimal when they are whole
/// (`3.0`, not `3`) and otherwise use the shortest form that reads back to
/// the same value (`3.14`).
pub trait Literal {
    fn literal(&self) -> String;
}

impl Literal for i64 {
    fn literal(&self) -> String {
        self.to_string()
    }
}

impl Literal for f64 {
    fn literal(&self) -> String {
        if self.is_finite() && self.fract() == 0.0 && self.abs() < 1e16 {
            format!("{:.1}", self)
        } else {
            self.to_string()
        }
    }
}

/// `<prompt> [Y/n]: ` when the default is yes, `<prompt> [N/y]: ` otherwise.
pub fn bool_prompt(prompt: &str, default: bool) -> String {
    let hint = if default { "[Y/n]" } else { "[N/y]" };
    format!("{} {}: ", prompt, hint)
}

/// Range annotation for the numeric queries, with the default appended when
/// there is one.
pub fn range_prompt<T: Literal>(prompt: &str, min: &T, max: &T, default: Option<&T>) -> String {
    let mut text = format!("{} [Min={}, Max={}]", prompt, min.literal(), max.literal());
    if let Some(default) = default {
        text.push_str(&format!("[{}]", default.literal()));
    }
    text.push_str(": ");
    text
}

/// A blank line followed by one `{:>3}. label` line per item.
pub fn menu_listing<S: AsRef<str>>(items: &[S]) -> String {
    let mut text = String::from("\n");
    for (index, item) in items.iter().enumerate() {
        text.push_str(&format!("{:>3}. {}\n", index + 1, item.as_ref()));
    }
    text
}

pub fn menu_prompt(prompt: Option<&str>, default: usize) -> String {
    match prompt {
        Some(prompt) => format!("\n{} [{}]: ", prompt, default),
        None => format!("\nEnter the number of the item [{}]: ", default),
    }
}
