use super::pattern_loader::{PatternInput, load_pattern_or_exit};

pub struct FmtArgs {
    pub pattern: PatternInput,
    pub color: bool,
}

pub fn run(args: FmtArgs) {
    let (_, pattern) = load_pattern_or_exit(&args.pattern, args.color);
    println!("{}", pattern);
}
