use engine::{Field, PatternTag, Round, RoundTable};
use itertools::Itertools;
use mcgogo::Scenario;

const AUTO_MARKER: &str = "*";

/// Plain text view of a round table. Derived cells are suffixed with `*`, speculative rows show
/// the basic round they copy.
pub fn render_table<F>(table: &RoundTable, is_auto: F, unknown_label: &str) -> String
where
    F: Fn(usize, Field) -> bool,
{
    let header = [
        "ROUND".to_string(),
        "USER VS".to_string(),
        "P8 VS".to_string(),
        "PATTERN".to_string(),
    ];

    let rows = table
        .iter()
        .map(|round| render_row(round, &is_auto, unknown_label))
        .collect::<Vec<_>>();

    let widths = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .join(" | ")
                .trim_end()
                .to_string()
        })
        .join("\n")
}

fn render_row<F>(round: &Round, is_auto: &F, unknown_label: &str) -> [String; 4]
where
    F: Fn(usize, Field) -> bool,
{
    let cell = |field: Field| {
        let value = round.get(field);
        if round.speculative && field == Field::OpponentSide {
            "-".to_string()
        } else if round.is_unknown() {
            unknown_label.to_string()
        } else if is_auto(round.round_number, field) && !round.speculative {
            format!("{}{}", value, AUTO_MARKER)
        } else {
            value.to_string()
        }
    };

    [
        format!("R{}", round.round_number),
        cell(Field::UserSide),
        cell(Field::OpponentSide),
        match round.pattern {
            Some(PatternTag::Unknown) => unknown_label.to_string(),
            Some(tag) => tag.to_string(),
            None => String::new(),
        },
    ]
}

pub fn render_scenarios<'a>(scenarios: impl Iterator<Item = &'a Scenario>) -> String {
    scenarios
        .map(|s| {
            let rounds = s
                .rounds
                .iter()
                .map(|r| format!("{}:{}", r.round, r.pattern))
                .join(" ");
            format!("{:<10} {} [{}]", s.id, s.name, rounds)
        })
        .join("\n")
}
