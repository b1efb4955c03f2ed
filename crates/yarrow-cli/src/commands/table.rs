use comfy_table::{ContentArrangement, Table};
use yarrow_core::Language;
use yarrow_core::tables::{HEXAGRAMS, MAJOR_ARCANA};

pub fn run(which: &str, lang: Language) -> miette::Result<()> {
    match which.to_ascii_lowercase().as_str() {
        "hexagrams" | "hexagram" | "liuyao" => hexagrams(),
        "tarot" | "cards" => tarot(lang),
        other => Err(miette::miette!(
            "unknown table '{other}', expected hexagrams or tarot"
        )),
    }
}

fn hexagrams() -> miette::Result<()> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "English", "Symbol", "Upper", "Lower", "Binary"]);

    for entry in HEXAGRAMS {
        let hex = entry.to_hexagram();
        table.add_row(vec![
            hex.id.to_string(),
            hex.name,
            hex.name_en,
            hex.symbol,
            hex.upper_trigram,
            hex.lower_trigram,
            hex.binary,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", HEXAGRAMS.len());
    Ok(())
}

fn tarot(lang: Language) -> miette::Result<()> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Upright", "Reversed"]);

    for card in MAJOR_ARCANA {
        table.add_row(vec![
            card.id.to_string(),
            card.display_name(lang).to_string(),
            card.meaning(true, lang),
            card.meaning(false, lang),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", MAJOR_ARCANA.len());
    Ok(())
}
