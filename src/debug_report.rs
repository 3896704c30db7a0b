use coptic_translit::{PassTrace, RuleSummary, TransliterationVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &TransliterationVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Transliterating: \"{}\"", res.input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Normalization ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("normalized:"), details.normalized);
    println!("  {} {}", palette.dim("lowered:   "), details.lowered);

    println!("\n{}", palette.paint("━━━ Rewrite passes ━━━", ansi::GRAY));
    let fired = details.passes.iter().filter(|p| p.replaced > 0).count();
    let skipped = details.passes.iter().filter(|p| p.skipped).count();
    for pass in &details.passes {
        println!("  {}", fmt_pass(pass, &palette));
    }
    println!(
        "  {}",
        palette.dim(format!("{} passes, {} fired, {} skipped by trigger scan", details.passes.len(), fired, skipped))
    );

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&res.output.text, ansi::GREEN)));
    if res.output.unmapped.is_empty() {
        println!("  {}", palette.dim("No unmapped Coptic characters"));
    } else {
        let listed: Vec<String> = res.output.unmapped.iter().map(|c| format!("{c} (U+{:04X})", u32::from(*c))).collect();
        println!("  {} {}", palette.paint("unmapped:", ansi::YELLOW), listed.join(", "));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Normalize: {}  │  Rules: {}  │  Map: {}  │  Validate: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(format!("{:?}", details.normalize)),
        palette.paint(format!("{:?}", details.rules), ansi::CYAN),
        palette.dim(format!("{:?}", details.base_map)),
        palette.dim(format!("{:?}", details.validate)),
    );
    println!();
}

pub fn print_rules(rules: &[RuleSummary], color: bool) {
    let palette = ansi::Palette::new(color);
    let width = rules.iter().map(|r| r.name.len()).max().unwrap_or(0);

    for rule in rules {
        println!(
            "  {} {}  {} {} {}",
            palette.paint(format!("{:>2}.", rule.index), ansi::GRAY),
            palette.paint(format!("{:<width$}", rule.name), ansi::BLUE),
            rule.pattern,
            palette.dim("→"),
            palette.paint(rule.replacement, ansi::GREEN),
        );
    }
}

fn fmt_pass(pass: &PassTrace, palette: &ansi::Palette) -> String {
    let label = palette.paint(format!("{:>2}.", pass.index), ansi::BLUE);
    if pass.skipped {
        return format!("{} {}", label, palette.dim(format!("{} (skipped)", pass.rule)));
    }
    if pass.replaced > 0 {
        format!(
            "{} {} {}  {}",
            label,
            palette.paint(&pass.rule, ansi::CYAN),
            palette.paint(format!("✓ {} replaced", pass.replaced), ansi::GREEN),
            palette.dim(format!("{:?}", pass.duration)),
        )
    } else {
        format!("{} {} {}", label, pass.rule, palette.dim("✗ no match"))
    }
}
