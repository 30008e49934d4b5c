use crate::table::Table;
use crate::value::Value;

pub const COLUMNS: [&str; 11] = [
    "survived",
    "pclass",
    "sex",
    "age",
    "fare",
    "embarked",
    "class",
    "deck",
    "embark_town",
    "alone",
    "passenger_id",
];

/// A deterministic passenger table with `rows` distinct rows.
///
/// 40% of passengers survive, a third are female, every seventh has no age
/// and every thirteenth has no embarkation port.
pub fn passengers(rows: usize) -> Table {
    let rows = (0..rows).map(passenger).collect();
    Table::from_rows(COLUMNS.to_vec(), rows).expect("never fails")
}

pub fn passenger(i: usize) -> Vec<Value> {
    let survived = if i % 5 < 2 { 1.0 } else { 0.0 };
    let pclass = (i % 3 + 1) as f64;
    let class = ["First", "Second", "Third"][i % 3];
    let sex = if i % 3 == 1 { "female" } else { "male" };
    let age = if i % 7 == 0 {
        Value::Missing
    } else {
        Value::from((18 + i % 50) as f64)
    };
    let (embarked, embark_town) = if i % 13 == 0 {
        (Value::Missing, Value::Missing)
    } else {
        match i % 4 {
            0 | 1 => (Value::text("S"), Value::text("Southampton")),
            2 => (Value::text("C"), Value::text("Cherbourg")),
            _ => (Value::text("Q"), Value::text("Queenstown")),
        }
    };
    let deck = if i % 4 == 2 {
        Value::text(["A", "B", "C", "D"][i % 16 / 4])
    } else {
        Value::Missing
    };
    vec![
        Value::from(survived),
        Value::from(pclass),
        Value::text(sex),
        age,
        Value::from(7.25 + i as f64),
        embarked,
        Value::text(class),
        deck,
        embark_town,
        Value::from((i % 2) as f64),
        Value::from(i as f64),
    ]
}
