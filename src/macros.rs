#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! ctx {
    ($trigger:expr) => {
        $crate::Pattern::Contextual { trigger: $trigger, lookahead: $crate::Lookahead::Anywhere }
    };
    ($trigger:expr, $lookahead:expr) => {
        $crate::Pattern::Contextual { trigger: $trigger, lookahead: $lookahead }
    };
}

#[macro_export]
macro_rules! lit {
    ($seq:literal) => {
        $crate::Pattern::Literal($seq)
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:expr,
        replace: $replacement:expr
        $(,)?
    ) => {{
        $crate::Rule { name: $name, pattern: $pat, replacement: $replacement }
    }};
}
