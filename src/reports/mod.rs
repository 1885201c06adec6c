use chordforge::analysis::TypingPlan;
use chordforge::decompose::{Accord, Accords};
use chordforge::layout::{Key, Keys, Layout};
use chordforge::physical::{Press, Tap};
use chordforge::symbols;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

// Sequences beyond this many rows are summarised.
const MAX_ROWS: usize = 40;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Symbol strings with switch glyphs shown as `→N`.
fn show_symbols(s: &str) -> String {
    s.chars()
        .map(|c| match symbols::layer_of(c) {
            Some(layer) => format!("→{}", layer),
            None => c.to_string(),
        })
        .collect::<String>()
        .replace(' ', "␣")
}

fn show_key(layout: &Layout, key: Key) -> String {
    format!(
        "{}:{} {}",
        key.layer,
        key.key,
        show_symbols(layout.symbols(key))
    )
}

fn show_accord(accord: &Accord) -> String {
    accord
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("+")
}

fn show_accords(accords: &Accords) -> String {
    accords.iter().map(show_accord).collect::<Vec<_>>().join(" ")
}

fn show_tap(tap: &Tap) -> String {
    match tap.press {
        Press::Once => tap.key.to_string(),
        Press::Down => format!("{}↓", tap.key),
        Press::Up => format!("{}↑", tap.key),
    }
}

pub fn print_layout_grid(layout: &Layout) {
    let keyboard = layout.keyboard();
    let mut table = new_table();

    let mut header = vec![Cell::new("Layer").add_attribute(Attribute::Bold)];
    for (pos, key) in keyboard.keys().iter().enumerate() {
        header.push(
            Cell::new(format!("{}\n{} {}", pos, key.hand, key.finger))
                .set_alignment(CellAlignment::Center),
        );
    }
    table.set_header(header);

    for layer in 0..layout.layer_count() {
        let mut row = vec![Cell::new(layer).fg(Color::Cyan)];
        for pos in 0..keyboard.len() {
            let s = show_symbols(layout.symbols(Key::new(layer, pos)));
            row.push(Cell::new(s).set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn print_layer_paths(layout: &Layout) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("From").add_attribute(Attribute::Bold),
        Cell::new("To").add_attribute(Attribute::Bold),
        Cell::new("Shortest").fg(Color::Green),
        Cell::new("All paths"),
    ]);

    let layers = layout.layer_count();
    for from in 0..layers {
        for to in 0..layers {
            let paths = layout.layer_paths(from, to);
            if paths.is_empty() {
                continue;
            }
            let shortest = layout
                .shortest_layer_keys(from, to)
                .map(|p| format!("{:?}", p))
                .unwrap_or_default();
            let all = paths
                .iter()
                .map(|p| format!("{:?}", p))
                .collect::<Vec<_>>()
                .join(" ");
            table.add_row(vec![
                Cell::new(from),
                Cell::new(to),
                Cell::new(shortest).fg(Color::Green),
                Cell::new(all),
            ]);
        }
    }
    println!("{}", table);
}

pub fn print_key_sequences(layout: &Layout, sequences: &[Keys]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Keys (layer:key symbols)"),
    ]);

    for (i, keys) in sequences.iter().take(MAX_ROWS).enumerate() {
        let shown = keys
            .iter()
            .map(|&k| show_key(layout, k))
            .collect::<Vec<_>>()
            .join(" | ");
        table.add_row(vec![Cell::new(i), Cell::new(shown)]);
    }
    println!("{}", table);

    if sequences.len() > MAX_ROWS {
        println!("... and {} more", sequences.len() - MAX_ROWS);
    }
}

pub fn print_accords(layout: &Layout, variants: &[Accords]) {
    let keyboard = layout.keyboard();
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Accords"),
        Cell::new("Fingers"),
    ]);

    for (i, accords) in variants.iter().take(MAX_ROWS).enumerate() {
        let fingers = accords
            .iter()
            .map(|accord| {
                accord
                    .iter()
                    .filter_map(|&p| keyboard.key(p))
                    .map(|k| format!("{}-{}", k.hand, k.finger))
                    .collect::<Vec<_>>()
                    .join("+")
            })
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![
            Cell::new(i),
            Cell::new(show_accords(accords)),
            Cell::new(fingers),
        ]);
    }
    println!("{}", table);

    if variants.len() > MAX_ROWS {
        println!("... and {} more", variants.len() - MAX_ROWS);
    }
}

pub fn print_plan(layout: &Layout, plan: &TypingPlan) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Text").add_attribute(Attribute::Bold),
        Cell::new("Keys"),
        Cell::new("Taps"),
        Cell::new("Accords"),
        Cell::new("ms").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(4) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for step in &plan.steps {
        let keys = step
            .keys
            .iter()
            .map(|&k| show_key(layout, k))
            .collect::<Vec<_>>()
            .join(" | ");
        let taps = step.taps.iter().map(show_tap).collect::<Vec<_>>().join(" ");
        table.add_row(vec![
            Cell::new(show_symbols(&step.text)),
            Cell::new(keys),
            Cell::new(taps),
            Cell::new(show_accords(&step.accords)),
            Cell::new(format!("{:.1}", step.time_ms)).fg(Color::Cyan),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{:.1}", plan.total_time()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{}", table);
}
