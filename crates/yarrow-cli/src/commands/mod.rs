pub mod cast;
pub mod manual;
pub mod table;

use std::sync::Arc;

use colored::Colorize;
use miette::IntoDiagnostic;
use yarrow_core::cast::liuyao::position_name;
use yarrow_core::cast::spread::orientation_label;
use yarrow_core::{DivinationResult, Hexagram, Language, LiuyaoResult, TarotResult};
use yarrow_interpret::{
    Confidence, DivinationInterpretation, InterpretationSource, Interpreter, LlmConfig,
};
use yarrow_session::{EngineConfig, InMemorySessionStore, Session, SessionEngine};

/// Build an engine over a fresh in-memory store.
fn build_engine(lang: Language, llm: &LlmConfig) -> miette::Result<SessionEngine> {
    let interpreter = Interpreter::from_config(llm).into_diagnostic()?;
    Ok(SessionEngine::new(
        Arc::new(InMemorySessionStore::new()),
        interpreter,
        EngineConfig::default().with_language(lang),
    ))
}

/// Print a finished session, as JSON or for humans.
fn print_session(session: &Session, json: bool) -> miette::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(session).into_diagnostic()?;
        println!("{text}");
        return Ok(());
    }

    println!();
    println!("  {} {}", "Question:".bold(), session.question);
    println!(
        "  {} {} ({}) | {} {}",
        "Method:".bold(),
        session.method,
        session.mode,
        "Seed:".bold(),
        session.seed
    );
    println!();

    match &session.result {
        Some(DivinationResult::Liuyao(r)) => print_liuyao(r, session.language),
        Some(DivinationResult::Tarot(r)) => print_tarot(r, session.language),
        None => println!("  (no result)"),
    }

    if let Some(interp) = &session.interpretation {
        print_interpretation(interp, session.interpretation_source.as_ref());
    }
    Ok(())
}

fn hexagram_line(label: &str, hex: &Hexagram) -> String {
    format!(
        "  {label} #{} {} {} {}: {}",
        hex.id,
        hex.symbol,
        hex.name.bold(),
        hex.name_en.dimmed(),
        hex.description
    )
}

fn print_liuyao(result: &LiuyaoResult, lang: Language) {
    for line in result.lines.iter().rev() {
        let glyph = if line.is_changing {
            line.yao_type.glyph().red().to_string()
        } else {
            line.yao_type.glyph().to_string()
        };
        println!(
            "  {:<10} {:<4} {}",
            position_name(line.position, lang),
            glyph,
            line.yao_type.name(lang)
        );
    }
    println!();
    println!("{}", hexagram_line("Primary ", &result.primary_hexagram));
    if let Some(relating) = &result.relating_hexagram {
        println!("{}", hexagram_line("Relating", relating));
    }
    println!("  {}", result.changing_description(lang).dimmed());
}

fn print_tarot(result: &TarotResult, lang: Language) {
    println!("  {}", result.spread_name.bold());
    for draw in &result.cards {
        let name = match lang {
            Language::En => draw.card.name_en.as_str(),
            Language::Zh | Language::Ja => draw.card.name.as_str(),
        };
        let orientation = orientation_label(draw.is_upright, lang);
        let orientation = if draw.is_upright {
            orientation.green()
        } else {
            orientation.yellow()
        };
        println!(
            "  {:<8} #{:<2} {} ({orientation})",
            draw.position_label,
            draw.card.id,
            name.bold()
        );
        println!("           {}", draw.meaning.dimmed());
    }
}

fn print_interpretation(interp: &DivinationInterpretation, source: Option<&InterpretationSource>) {
    let confidence = match interp.confidence {
        Confidence::High => interp.confidence.as_str().green(),
        Confidence::Medium => interp.confidence.as_str().yellow(),
        Confidence::Low => interp.confidence.as_str().red(),
    };

    println!();
    println!("  {}", interp.summary.bold());
    println!("  {} {}", "Advice:".bold(), interp.advice);
    println!("  {} {}", "Timing:".bold(), interp.timing);
    println!("  {} {confidence}", "Confidence:".bold());
    for bullet in &interp.reasoning_bullets {
        println!("    • {bullet}");
    }
    for question in &interp.follow_up_questions {
        println!("    ? {}", question.italic());
    }
    println!();
    println!("  {}", interp.ritual_ending);

    if let Some(InterpretationSource::Fallback { reason }) = source {
        println!("  {}", format!("(templated reading: {reason})").dimmed());
    }
}
