use std::path::Path;

use console::Style;
use speckle_core::config::{CorrelationMethod, SynthConfig};
use speckle_core::types::OffsetResult;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_synth_summary(config: &SynthConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Speckle Synthesis"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{0}x{0}", config.image_size))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Speckle"),
        s.value.apply_to(config.speckle_size)
    );
    match config.seed {
        Some(seed) => println!(
            "  {:<14}{}",
            s.label.apply_to("Seed"),
            s.value.apply_to(seed)
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Seed"),
            s.disabled.apply_to("random")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Contrast"),
        s.method.apply_to(config.normalization)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!();
}

pub fn print_offset_summary(
    method: &CorrelationMethod,
    first: &Path,
    second: &Path,
    result: &OffsetResult,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Cross-Correlation"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Method"),
        s.method.apply_to(method)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Reference"),
        s.path.apply_to(first.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Target"),
        s.path.apply_to(second.display())
    );
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("dx"),
        s.value.apply_to(result.dx)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("dy"),
        s.value.apply_to(result.dy)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Strength"),
        s.value.apply_to(format!("{:.6e}", result.strength))
    );
    println!();
}
