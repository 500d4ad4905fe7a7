use super::pattern_loader::{PatternInput, load_pattern_or_exit};

pub struct CheckArgs {
    pub pattern: PatternInput,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let (source, _) = load_pattern_or_exit(&args.pattern, args.color);
    tracing::info!(
        source = source.path.as_deref().unwrap_or("<inline>"),
        "pattern is valid"
    );

    // Silent on success (like cargo check)
}
