use anyhow::Context;
use std::env;
use swatch_core::contrast::{contrast_ratio, relative_luminance};
use swatch_core::{
    Brightness, Color, SwatchCard, ThemeConfig, alpha_blend, estimate_brightness,
    resolve_text_color,
};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!(
        r##"Theme Swatch CLI

            Commands:
            show <theme.json>
            contrast <fg> <bg>
            save-default <theme.json> [light|dark] [m2|m3]
            check <theme.json>
            roles

            Colors are #RRGGBB or #RRGGBBAA.

            Examples:
            cargo run -p swatch_cli -- save-default theme.json dark m2
            cargo run -p swatch_cli -- show theme.json
            cargo run -p swatch_cli -- contrast "#FFFF0080" "#FFFFFF"
        "##
    );
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn text_name(c: Color) -> &'static str {
    if c == Color::BLACK { "black" } else { "white" }
}

fn print_cards(theme: &ThemeConfig, cards: &[SwatchCard]) {
    println!(
        "Theme: {} | {:?} | {} | card background {}",
        theme.name,
        theme.brightness(),
        if theme.use_material3 { "M3" } else { "M2" },
        theme.card_background()
    );

    for (group, members) in swatch_core::groups(cards) {
        println!("{group}:");
        for card in members {
            println!(
                "  {:<32} | {:<9} | shown {:<7} | text {:<5} | {}",
                card.swatch.label,
                card.swatch.color.to_string(),
                card.shown.to_string(),
                text_name(card.text_color),
                card.swatch.origin
            );
        }
    }
}

fn cmd_show(path: &str) -> anyhow::Result<()> {
    let theme =
        ThemeConfig::load_json_file(path).with_context(|| format!("load theme file: {path}"))?;
    let cards = swatch_core::cards(&theme);
    print_cards(&theme, &cards);
    Ok(())
}

fn cmd_contrast(fg: &str, bg: &str) -> anyhow::Result<()> {
    let fg: Color = fg.parse().context("foreground color")?;
    let bg: Color = bg.parse().context("background color")?;

    let blended = alpha_blend(fg, bg);
    let text = resolve_text_color(fg, bg);

    println!("Foreground: {fg}");
    println!("Background: {bg}");
    println!("Blended:    {blended}");
    println!("Luminance:  {:.4}", relative_luminance(blended));
    println!("Brightness: {:?}", estimate_brightness(blended));
    println!(
        "Text:       {} (contrast {:.2}:1)",
        text_name(text),
        contrast_ratio(text, blended)
    );
    Ok(())
}

fn cmd_save_default(path: &str, args: &[String]) -> anyhow::Result<()> {
    let mut brightness = Brightness::Light;
    let mut material3 = true;

    for a in args {
        match a.to_lowercase().as_str() {
            "light" => brightness = Brightness::Light,
            "dark" => brightness = Brightness::Dark,
            "m2" => material3 = false,
            "m3" => material3 = true,
            other => anyhow::bail!("unknown option '{other}' (expected light|dark|m2|m3)"),
        }
    }

    let name = format!(
        "Baseline {:?} {}",
        brightness,
        if material3 { "M3" } else { "M2" }
    );
    let mut theme = ThemeConfig::new(name, brightness);
    theme.use_material3 = material3;
    theme.save_json_file(path)?;
    println!("Saved theme: {} -> {path}", theme.name);
    Ok(())
}

fn cmd_check(path: &str) -> anyhow::Result<()> {
    let theme =
        ThemeConfig::load_json_file(path).with_context(|| format!("load theme file: {path}"))?;
    let swatches = swatch_core::catalog(&theme);
    let overridden = swatches.iter().filter(|s| s.origin.is_override()).count();

    println!(
        "OK: '{}' | {} roles | {} overridden | {} defaulted",
        theme.name,
        swatches.len(),
        overridden,
        swatches.len() - overridden
    );
    Ok(())
}

fn cmd_roles() {
    // An all-default theme lists every role with its default origin.
    let theme = ThemeConfig::new("roles", Brightness::Light);
    for s in swatch_core::catalog(&theme) {
        println!("  {:<10} | {:<32} | {}", s.group, s.label, s.origin);
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let Some(cmd) = args.first() else {
        print_help();
        return Ok(());
    };

    match cmd.as_str() {
        "show" => {
            let path = args.get(1).context("Usage: show <theme.json>")?;
            cmd_show(path)
        }
        "contrast" => {
            if args.len() != 3 {
                anyhow::bail!("Usage: contrast <fg> <bg>");
            }
            cmd_contrast(&args[1], &args[2])
        }
        "save-default" => {
            let path = args
                .get(1)
                .context("Usage: save-default <theme.json> [light|dark] [m2|m3]")?;
            cmd_save_default(path, &args[2..])
        }
        "check" => {
            let path = args.get(1).context("Usage: check <theme.json>")?;
            cmd_check(path)
        }
        "roles" => {
            cmd_roles();
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_help();
            Ok(())
        }
        other => {
            print_help();
            anyhow::bail!("unknown command '{other}'")
        }
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    tracing::debug!(?args, version = swatch_core::version(), "starting");

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
